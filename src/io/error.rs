//! Error types for landmark loading, measurement and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all landmark pipeline operations
///
/// Every variant names the offending file or identifier so the source data
/// can be corrected by hand.
#[derive(Debug)]
pub enum LandmarkError {
    /// Landmark file is not well-formed or lacks required point attributes
    Parse {
        /// Path to the landmark file
        path: PathBuf,
        /// Description of what is wrong with the file
        reason: String,
    },

    /// Filename does not follow the `<Info> <Culture> <Time>` convention
    MalformedFilename {
        /// Filename stem that failed to parse
        file_id: String,
        /// Description of the violated rule
        reason: String,
    },

    /// Fixed specimen whose stage has no entry in the stage table
    MissingLookup {
        /// Filename stem of the specimen
        file_id: String,
        /// Stage label that was looked up
        stage: String,
    },

    /// Two point nodes in one file share a landmark name
    DuplicateLandmark {
        /// Path to the landmark file
        path: PathBuf,
        /// Landmark name that occurs more than once
        name: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to read or write a CSV table
    Table {
        /// Path of the table
        path: PathBuf,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// Configuration table (pairings or stages) is unusable
    Config {
        /// Path of the configuration file
        path: PathBuf,
        /// Description of the problem
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for LandmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse { path, reason } => {
                write!(f, "Failed to parse landmark file '{}': {reason}", path.display())
            }
            Self::MalformedFilename { file_id, reason } => {
                write!(f, "Malformed filename '{file_id}': {reason}")
            }
            Self::MissingLookup { file_id, stage } => {
                write!(
                    f,
                    "No age in hours known for stage '{stage}' of fixed specimen '{file_id}'"
                )
            }
            Self::DuplicateLandmark { path, name } => {
                write!(
                    f,
                    "Landmark '{name}' appears more than once in '{}'",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Table { path, source } => {
                write!(f, "CSV table error on '{}': {source}", path.display())
            }
            Self::Config { path, reason } => {
                write!(f, "Invalid configuration '{}': {reason}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for LandmarkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Table { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for landmark pipeline results
pub type Result<T> = std::result::Result<T, LandmarkError>;

impl LandmarkError {
    /// Path or identifier of the input that caused the error, if any
    pub fn subject(&self) -> Option<String> {
        match self {
            Self::Parse { path, .. }
            | Self::DuplicateLandmark { path, .. }
            | Self::FileSystem { path, .. }
            | Self::Table { path, .. }
            | Self::Config { path, .. } => Some(path.display().to_string()),
            Self::MalformedFilename { file_id, .. } | Self::MissingLookup { file_id, .. } => {
                Some(file_id.clone())
            }
            Self::InvalidParameter { .. } => None,
        }
    }
}

/// Create a parse error for a landmark file
pub fn parse_error(path: impl Into<PathBuf>, reason: &impl ToString) -> LandmarkError {
    LandmarkError::Parse {
        path: path.into(),
        reason: reason.to_string(),
    }
}

/// Create a malformed filename error
pub fn malformed_filename(file_id: &str, reason: &impl ToString) -> LandmarkError {
    LandmarkError::MalformedFilename {
        file_id: file_id.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for an operation on `path`
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> LandmarkError {
    LandmarkError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LandmarkError {
    LandmarkError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
