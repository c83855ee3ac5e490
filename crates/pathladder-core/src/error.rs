//! Error types and exit codes for pathladder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including "no ladder found")
//! - 2: Usage error (bad flags/args, same start and end word)
//! - 3: Data error (malformed graph, vertex out of range, invalid ladder)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed input files, invalid ladders (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during pathladder operations
#[derive(Error, Debug)]
pub enum PathladderError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("start and end words are the same: {word}")]
    SameWord { word: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("invalid graph at line {line}: {reason}")]
    InvalidGraph { line: usize, reason: String },

    #[error("vertex {vertex} out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    #[error("invalid ladder: {count} problem(s) found")]
    InvalidLadder { count: usize },

    // Generic failures (exit code 1)
    #[error("no ladder found from {begin} to {end}")]
    LadderNotFound { begin: String, end: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl PathladderError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        PathladderError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathladderError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a malformed graph file
    pub fn invalid_graph(line: usize, reason: impl Into<String>) -> Self {
        PathladderError::InvalidGraph {
            line,
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathladderError::UnknownFormat(_)
            | PathladderError::UsageError(_)
            | PathladderError::SameWord { .. }
            | PathladderError::InvalidValue { .. } => ExitCode::Usage,

            PathladderError::InvalidGraph { .. }
            | PathladderError::VertexOutOfRange { .. }
            | PathladderError::InvalidLadder { .. } => ExitCode::Data,

            PathladderError::LadderNotFound { .. }
            | PathladderError::Io(_)
            | PathladderError::Json(_)
            | PathladderError::Toml(_)
            | PathladderError::FailedOperationWithTarget { .. }
            | PathladderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathladderError::UnknownFormat(_) => "unknown_format",
            PathladderError::UsageError(_) => "usage_error",
            PathladderError::SameWord { .. } => "same_word",
            PathladderError::InvalidValue { .. } => "invalid_value",
            PathladderError::InvalidGraph { .. } => "invalid_graph",
            PathladderError::VertexOutOfRange { .. } => "vertex_out_of_range",
            PathladderError::InvalidLadder { .. } => "invalid_ladder",
            PathladderError::LadderNotFound { .. } => "ladder_not_found",
            PathladderError::Io(_) => "io_error",
            PathladderError::Json(_) => "json_error",
            PathladderError::Toml(_) => "toml_error",
            PathladderError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            PathladderError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathladder operations
pub type Result<T> = std::result::Result<T, PathladderError>;
