use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a rejected request from a
/// broken installation or dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the response was built and presented
    Success = 0,
    /// The request was rejected (not found, bad request, removed feature)
    RequestRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (dataset, file I/O, illegal state, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching an error raised while serving a request
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<MeasuresError>() {
            Some(e) if e.is_client_error() => ExitCode::RequestRejected,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::RequestRejected => write!(f, "Request Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised by the measures web services.
///
/// The first four variants form the request error taxonomy and carry the
/// message returned to the caller; the others come from the local
/// infrastructure (dataset, output files, configuration).
#[derive(Debug, Error)]
pub enum MeasuresError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    BadRequest { message: String },

    /// Raised when an invariant established by earlier validation does not hold
    #[error("Illegal state: {message}")]
    IllegalState { message: String },

    #[error("{message}")]
    FeatureRemoved { message: String },

    #[error("Failed to read dataset: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    DatasetReadError { path: PathBuf, details: String },

    #[error("Failed to parse dataset: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the dataset is valid JSON with metrics, components and measures")]
    DatasetParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl MeasuresError {
    pub fn not_found(message: impl Into<String>) -> Self {
        MeasuresError::NotFound {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        MeasuresError::BadRequest {
            message: message.into(),
        }
    }

    pub fn illegal_state(message: impl Into<String>) -> Self {
        MeasuresError::IllegalState {
            message: message.into(),
        }
    }

    pub fn feature_removed(message: impl Into<String>) -> Self {
        MeasuresError::FeatureRemoved {
            message: message.into(),
        }
    }

    /// HTTP status the web service answers with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            MeasuresError::NotFound { .. } | MeasuresError::FeatureRemoved { .. } => 404,
            MeasuresError::BadRequest { .. } => 400,
            _ => 500,
        }
    }

    /// True when the caller, not the server, is at fault
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

/// Resolves the HTTP status of any error produced while serving a request.
///
/// Errors that are not a [`MeasuresError`] are lower-layer failures and
/// end the request with a generic server error.
pub fn status_code_of(err: &anyhow::Error) -> u16 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<MeasuresError>())
        .map(MeasuresError::status_code)
        .unwrap_or(500)
}

/// Fails with a bad request when `condition` does not hold
pub fn check_request(condition: bool, message: impl FnOnce() -> String) -> crate::shared::Result<()> {
    if condition {
        Ok(())
    } else {
        Err(MeasuresError::bad_request(message()).into())
    }
}

/// Unwraps `value` or fails with a not found error
pub fn check_found<T>(value: Option<T>, message: impl FnOnce() -> String) -> crate::shared::Result<T> {
    value.ok_or_else(|| MeasuresError::not_found(message()).into())
}
