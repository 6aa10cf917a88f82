//! Uniform error shape for service boundaries.
//!
//! Every layer keeps its own `thiserror` enum. When one of those errors
//! crosses a service boundary (data transformation, model training,
//! prediction) it is converted into a [`LocatedError`], which records the
//! category, the source location of the `?` that performed the conversion, and
//! the original message.

use std::error::Error as StdError;
use std::fmt;
use std::panic::Location;

use thiserror::Error;

/// Result type for service boundary operations.
pub type Result<T> = std::result::Result<T, LocatedError>;

/// Failure taxonomy shared by all components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Unreadable or malformed tables, missing columns.
    Data,
    /// Failures inside preprocessing or model fitting/prediction.
    FitTransform,
    /// Every candidate scored below the acceptance threshold.
    Acceptance,
    /// Missing or corrupt stored artifact.
    Artifact,
    /// Bad values supplied by a user at serve time.
    UserInput,
    /// Filesystem or other I/O failures.
    Io,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Data => "data",
            ErrorCategory::FitTransform => "fit/transform",
            ErrorCategory::Acceptance => "acceptance",
            ErrorCategory::Artifact => "artifact",
            ErrorCategory::UserInput => "user input",
            ErrorCategory::Io => "io",
        };
        f.write_str(name)
    }
}

/// Implemented by component error enums to place each variant in the taxonomy.
pub trait Categorized {
    fn category(&self) -> ErrorCategory;
}

impl Categorized for std::io::Error {
    fn category(&self) -> ErrorCategory {
        ErrorCategory::Io
    }
}

/// An error annotated with where it crossed a service boundary.
#[derive(Debug, Error)]
#[error("error occurred in [{file}] line [{line}] ({category}): {message}")]
pub struct LocatedError {
    category: ErrorCategory,
    file: &'static str,
    line: u32,
    column: u32,
    message: String,
    #[source]
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl LocatedError {
    /// Create an error with no underlying source, located at the caller.
    #[track_caller]
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self::build(category, message.into(), None, Location::caller())
    }

    /// Wrap a component error, located at the caller.
    #[track_caller]
    pub fn wrap<E>(error: E) -> Self
    where
        E: StdError + Categorized + Send + Sync + 'static,
    {
        let category = error.category();
        let message = error.to_string();
        Self::build(category, message, Some(Box::new(error)), Location::caller())
    }

    fn build(
        category: ErrorCategory,
        message: String,
        source: Option<Box<dyn StdError + Send + Sync + 'static>>,
        location: &'static Location<'static>,
    ) -> Self {
        tracing::error!(
            category = %category,
            file = location.file(),
            line = location.line(),
            "{message}"
        );
        Self {
            category,
            file: location.file(),
            line: location.line(),
            column: location.column(),
            message,
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// The original message, without location decoration.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Downcast the wrapped component error, if any.
    pub fn source_as<E: StdError + 'static>(&self) -> Option<&E> {
        self.source.as_deref().and_then(|e| e.downcast_ref::<E>())
    }
}

impl<E> From<E> for LocatedError
where
    E: StdError + Categorized + Send + Sync + 'static,
{
    #[track_caller]
    fn from(error: E) -> Self {
        Self::wrap(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    enum SampleError {
        #[error("column 'math_score' missing")]
        MissingColumn,
        #[error("model refused to converge")]
        Diverged,
    }

    impl Categorized for SampleError {
        fn category(&self) -> ErrorCategory {
            match self {
                SampleError::MissingColumn => ErrorCategory::Data,
                SampleError::Diverged => ErrorCategory::FitTransform,
            }
        }
    }

    fn failing_step() -> std::result::Result<(), SampleError> {
        Err(SampleError::MissingColumn)
    }

    fn boundary() -> Result<()> {
        failing_step()?;
        Ok(())
    }

    #[test]
    fn test_question_mark_records_boundary_location() {
        let err = boundary().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Data);
        assert!(err.file().ends_with("error.rs"));
        assert!(err.line() > 0);
        assert_eq!(err.message(), "column 'math_score' missing");
    }

    #[test]
    fn test_display_contains_location_and_message() {
        let err = LocatedError::wrap(SampleError::Diverged);
        let text = err.to_string();
        assert!(text.starts_with("error occurred in ["));
        assert!(text.contains("(fit/transform)"));
        assert!(text.ends_with("model refused to converge"));
    }

    #[test]
    fn test_source_is_preserved() {
        let err = LocatedError::wrap(SampleError::Diverged);
        assert!(matches!(
            err.source_as::<SampleError>(),
            Some(SampleError::Diverged)
        ));
        assert!(StdError::source(&err).is_some());
    }

    #[test]
    fn test_new_without_source() {
        let err = LocatedError::new(ErrorCategory::UserInput, "reading_score must be numeric");
        assert_eq!(err.category(), ErrorCategory::UserInput);
        assert!(StdError::source(&err).is_none());
        assert!(err.source_as::<SampleError>().is_none());
    }

    #[test]
    fn test_io_errors_are_categorized() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: LocatedError = io.into();
        assert_eq!(err.category(), ErrorCategory::Io);
    }
}
