//! Error types and exit codes for planar
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid values)
//! - 3: Data error (unknown node or hub, malformed cost matrix)
//!
//! Invalid graph mutations (self-loops, absent endpoints) are not errors: the
//! graph treats them as no-ops and reports them through its return values.

mod macros;

use thiserror::Error;

/// Exit codes per planar CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, malformed matrix (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during planar operations
#[derive(Error, Debug)]
pub enum PlanarError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("{context} already exists: {value}")]
    AlreadyExists { context: String, value: String },

    /// Nearest-neighbour search found no selectable hub while hubs remained
    /// unvisited. Only a malformed cost matrix can cause this.
    #[error(
        "attempting to construct illegal route: no hub selectable from hub {current_hub} ({remaining} unvisited)"
    )]
    RouteConstruction {
        current_hub: usize,
        remaining: usize,
    },

    #[error("malformed matrix: {reason}")]
    MalformedMatrix { reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl PlanarError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PlanarError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        PlanarError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that already exists
    pub fn already_exists(context: &str, value: impl std::fmt::Display) -> Self {
        PlanarError::AlreadyExists {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a matrix whose shape or contents are unusable
    pub fn malformed_matrix(reason: impl Into<String>) -> Self {
        PlanarError::MalformedMatrix {
            reason: reason.into(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PlanarError::UnknownFormat(_)
            | PlanarError::UsageError(_)
            | PlanarError::InvalidValue { .. } => ExitCode::Usage,

            PlanarError::NotFound { .. }
            | PlanarError::AlreadyExists { .. }
            | PlanarError::RouteConstruction { .. }
            | PlanarError::MalformedMatrix { .. } => ExitCode::Data,

            PlanarError::Io(_)
            | PlanarError::Json(_)
            | PlanarError::Toml(_)
            | PlanarError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            PlanarError::UnknownFormat(_) => "unknown_format",
            PlanarError::UsageError(_) => "usage_error",
            PlanarError::InvalidValue { .. } => "invalid_value",
            PlanarError::NotFound { .. } => "not_found",
            PlanarError::AlreadyExists { .. } => "already_exists",
            PlanarError::RouteConstruction { .. } => "route_construction",
            PlanarError::MalformedMatrix { .. } => "malformed_matrix",
            PlanarError::Io(_) => "io_error",
            PlanarError::Json(_) => "json_error",
            PlanarError::Toml(_) => "toml_error",
            PlanarError::Other(_) => "other",
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

/// Result type alias for planar operations
pub type Result<T> = std::result::Result<T, PlanarError>;
