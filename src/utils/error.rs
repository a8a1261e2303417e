use thiserror::Error;

/// Failures while turning a single line into a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected `<direction> <amount>`, got {content:?}")]
    MalformedLine { content: String },

    #[error("unknown direction {direction:?} (expected forward, down or up)")]
    UnknownDirection { direction: String },

    #[error("invalid magnitude {amount:?} (expected a non-negative integer)")]
    InvalidMagnitude { amount: String },
}

#[derive(Error, Debug)]
pub enum CourseError {
    #[error("Parse error on line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid value for '{field}': {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{part} course overflows 64-bit arithmetic")]
    ArithmeticOverflow { part: &'static str },

    #[error("{part} answer mismatch: expected {expected}, computed {actual}")]
    ExpectationMismatch {
        part: &'static str,
        expected: i64,
        actual: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
    Verification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl CourseError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CourseError::Parse { .. }
            | CourseError::InvalidInput { .. }
            | CourseError::ArithmeticOverflow { .. } => ErrorCategory::Input,
            CourseError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            CourseError::ExpectationMismatch { .. } => ErrorCategory::Verification,
            CourseError::IoError(_)
            | CourseError::SerializationError(_)
            | CourseError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Verification => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CourseError::Parse { line, source } => {
                format!("Could not read course line {}: {}", line, source)
            }
            CourseError::InvalidInput { message } => format!("Course input is unusable: {}", message),
            CourseError::IoError(e) => format!("Could not access a file: {}", e),
            CourseError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            CourseError::ExpectationMismatch {
                part,
                expected,
                actual,
            } => format!(
                "The {} answer is {}, but {} was expected",
                part, actual, expected
            ),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CourseError::Parse { source, .. } => match source {
                ParseError::MalformedLine { .. } => {
                    "Each line must hold exactly a direction and an amount, e.g. `forward 5`"
                }
                ParseError::UnknownDirection { .. } => {
                    "Only `forward`, `down` and `up` are recognised (lowercase)"
                }
                ParseError::InvalidMagnitude { .. } => {
                    "Amounts must be plain decimal integers without a sign"
                }
            },
            CourseError::InvalidInput { .. } => "Make sure the input file is UTF-8 text",
            CourseError::ArithmeticOverflow { .. } => {
                "The course amounts are too large to plot; check the input for corrupted values"
            }
            CourseError::IoError(_) => "Check that the input file exists and is readable",
            CourseError::InvalidConfigValueError { .. } => "Run with --help to see valid options",
            CourseError::ExpectationMismatch { .. } => {
                "Double-check the input file or the expected answer"
            }
            CourseError::SerializationError(_) | CourseError::CsvError(_) => {
                "Try the plain report format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CourseError>;
