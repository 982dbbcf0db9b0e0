/// Type alias for Result with anyhow::Error as the error type.
/// Request errors travel inside it as [`crate::shared::MeasuresError`].
pub type Result<T> = std::result::Result<T, anyhow::Error>;
