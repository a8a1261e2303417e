pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::LocalStorage;

pub use app::pipelines::CoursePipeline;
pub use core::engine::CourseEngine;
pub use domain::model::{Command, CourseReport, Direction, Position, ReportFormat};
pub use utils::error::{CourseError, ParseError, Result};
