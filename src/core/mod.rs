pub mod engine;
pub mod navigation;
pub mod parser;
pub mod report;
pub mod totals;

pub use crate::domain::model::{
    Command, CourseLine, CourseReport, Direction, Position, ReportFormat,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
