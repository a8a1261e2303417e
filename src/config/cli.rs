use crate::core::{ConfigProvider, ReportFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_existing_file, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "dive")]
#[command(about = "Plots a submarine course and reports horizontal position times depth")]
pub struct CliConfig {
    #[arg(long, default_value = "input/day02.txt", help = "Course file, one command per line")]
    pub input: String,

    #[arg(long, help = "Directory to also save the report into")]
    pub output_path: Option<String>,

    #[arg(long, value_enum, default_value_t = ReportFormat::Plain)]
    pub format: ReportFormat,

    #[arg(long, help = "Known answer for the simple interpretation")]
    pub expect_simple: Option<i64>,

    #[arg(long, help = "Known answer for the aim-based interpretation")]
    pub expect_aimed: Option<i64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn for_input(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output_path: None,
            format: ReportFormat::Plain,
            expect_simple: None,
            expect_aimed: None,
            verbose: false,
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_existing_file("input", &self.input)?;
        if let Some(output_path) = &self.output_path {
            validate_path("output_path", output_path)?;
        }
        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn report_format(&self) -> ReportFormat {
        self.format
    }

    fn expected_simple(&self) -> Option<i64> {
        self.expect_simple
    }

    fn expected_aimed(&self) -> Option<i64> {
        self.expect_aimed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["dive"]);

        assert_eq!(config.input, "input/day02.txt");
        assert_eq!(config.output_path, None);
        assert_eq!(config.format, ReportFormat::Plain);
        assert!(!config.verbose);
    }

    #[test]
    fn test_all_flags() {
        let config = CliConfig::parse_from([
            "dive",
            "--input",
            "course.txt",
            "--output-path",
            "out",
            "--format",
            "json",
            "--expect-simple",
            "150",
            "--expect-aimed",
            "900",
            "--verbose",
        ]);

        assert_eq!(config.input_path(), "course.txt");
        assert_eq!(config.output_path(), Some("out"));
        assert_eq!(config.report_format(), ReportFormat::Json);
        assert_eq!(config.expected_simple(), Some(150));
        assert_eq!(config.expected_aimed(), Some(900));
        assert!(config.verbose);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result = CliConfig::try_parse_from(["dive", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_requires_existing_input() {
        let dir = tempfile::TempDir::new().unwrap();
        let input = dir.path().join("course.txt");

        let config = CliConfig::for_input(input.to_str().unwrap());
        assert!(config.validate().is_err());

        std::fs::write(&input, "forward 1\n").unwrap();
        assert!(config.validate().is_ok());

        let mut config = config;
        config.output_path = Some(String::new());
        assert!(config.validate().is_err());
    }
}
