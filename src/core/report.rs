use crate::domain::model::{CourseReport, Position, ReportFormat, AIMED_PART, SIMPLE_PART};
use crate::utils::error::{CourseError, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct PartSummary {
    part: &'static str,
    horizontal: i64,
    depth: i64,
    product: i64,
}

impl PartSummary {
    fn new(part: &'static str, position: Position, product: i64) -> Self {
        Self {
            part,
            horizontal: position.horizontal,
            depth: position.depth,
            product,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport {
    commands: usize,
    simple: PartSummary,
    aimed: PartSummary,
}

fn summaries(report: &CourseReport) -> [PartSummary; 2] {
    [
        PartSummary::new(SIMPLE_PART, report.simple, report.simple_product()),
        PartSummary::new(AIMED_PART, report.aimed, report.aimed_product()),
    ]
}

pub fn render(report: &CourseReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Plain => Ok(format!(
            "{}\n{}\n",
            report.simple_product(),
            report.aimed_product()
        )),
        ReportFormat::Json => {
            let [simple, aimed] = summaries(report);
            let body = serde_json::to_string_pretty(&JsonReport {
                commands: report.commands,
                simple,
                aimed,
            })?;
            Ok(body + "\n")
        }
        ReportFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for row in summaries(report) {
                writer.serialize(row)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| CourseError::IoError(e.into_error()))?;
            String::from_utf8(bytes).map_err(|e| {
                CourseError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
            })
        }
    }
}

/// Compares computed answers against known ones, when any are supplied.
pub fn check_expectations(
    report: &CourseReport,
    expected_simple: Option<i64>,
    expected_aimed: Option<i64>,
) -> Result<()> {
    let checks = [
        (SIMPLE_PART, expected_simple, report.simple_product()),
        (AIMED_PART, expected_aimed, report.aimed_product()),
    ];

    for (part, expected, actual) in checks {
        match expected {
            Some(expected) if expected != actual => {
                return Err(CourseError::ExpectationMismatch {
                    part,
                    expected,
                    actual,
                });
            }
            Some(_) => tracing::debug!("{} answer matches expectation ({})", part, actual),
            None => {}
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> CourseReport {
        CourseReport::new(
            6,
            Position {
                horizontal: 15,
                depth: 10,
            },
            Position {
                horizontal: 15,
                depth: 60,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_render_plain() {
        let output = render(&sample_report(), ReportFormat::Plain).unwrap();
        assert_eq!(output, "150\n900\n");
    }

    #[test]
    fn test_render_json() {
        let output = render(&sample_report(), ReportFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["commands"], 6);
        assert_eq!(value["simple"]["horizontal"], 15);
        assert_eq!(value["simple"]["depth"], 10);
        assert_eq!(value["simple"]["product"], 150);
        assert_eq!(value["aimed"]["depth"], 60);
        assert_eq!(value["aimed"]["product"], 900);
    }

    #[test]
    fn test_render_csv() {
        let output = render(&sample_report(), ReportFormat::Csv).unwrap();
        assert_eq!(
            output,
            "part,horizontal,depth,product\nsimple,15,10,150\naimed,15,60,900\n"
        );
    }

    #[test]
    fn test_expectations() {
        let report = sample_report();

        assert!(check_expectations(&report, None, None).is_ok());
        assert!(check_expectations(&report, Some(150), Some(900)).is_ok());

        match check_expectations(&report, Some(150), Some(1)) {
            Err(CourseError::ExpectationMismatch {
                part,
                expected,
                actual,
            }) => {
                assert_eq!(part, AIMED_PART);
                assert_eq!(expected, 1);
                assert_eq!(actual, 900);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
