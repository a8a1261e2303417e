use crate::core::navigation::aimed_course;
use crate::core::parser::parse_course;
use crate::core::report::{check_expectations, render};
use crate::core::totals::simple_course;
use crate::core::{ConfigProvider, CourseLine, CourseReport, Pipeline, Storage};
use crate::utils::error::{CourseError, Result};
use std::path::Path;

pub const REPORT_FILE_STEM: &str = "course_report";

pub struct CoursePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> CoursePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for CoursePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<CourseLine>> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading course from: {}", input_path);

        let bytes = self.storage.read_file(input_path).await?;
        let text = String::from_utf8(bytes).map_err(|e| CourseError::InvalidInput {
            message: format!("{} is not valid UTF-8: {}", input_path, e),
        })?;

        // Every line must parse, blank ones included.
        let lines: Vec<CourseLine> = text
            .lines()
            .enumerate()
            .map(|(index, line)| CourseLine {
                number: index + 1,
                text: line.to_string(),
            })
            .collect();

        if lines.is_empty() {
            tracing::warn!("Course at {} contains no commands", input_path);
        }

        Ok(lines)
    }

    async fn transform(&self, lines: Vec<CourseLine>) -> Result<CourseReport> {
        let commands = parse_course(&lines)?;
        tracing::debug!("Parsed {} commands", commands.len());

        let report = CourseReport::new(
            commands.len(),
            simple_course(&commands)?,
            aimed_course(&commands)?,
        )?;

        check_expectations(
            &report,
            self.config.expected_simple(),
            self.config.expected_aimed(),
        )?;

        Ok(report)
    }

    async fn load(&self, report: CourseReport) -> Result<String> {
        let format = self.config.report_format();
        let rendered = render(&report, format)?;

        if let Some(output_dir) = self.config.output_path() {
            let file_name = format!("{}.{}", REPORT_FILE_STEM, format.extension());
            let report_path = Path::new(output_dir).join(file_name);
            let report_path = report_path.to_string_lossy();

            tracing::debug!(
                "Writing {:?} report ({} bytes) to {}",
                format,
                rendered.len(),
                report_path
            );
            self.storage
                .write_file(&report_path, rendered.as_bytes())
                .await?;
        }

        Ok(rendered)
    }
}
