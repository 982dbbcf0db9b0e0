/// Shared kernel - error taxonomy, result alias and file safety checks
pub mod error;
pub mod result;
pub mod security;

pub use error::{check_found, check_request, status_code_of, ExitCode, MeasuresError};
pub use result::Result;
