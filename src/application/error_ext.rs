//! Error conversion helpers for common I/O operations
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// copy_bounded(reader, writer, None, &mut buf)
    ///     .with_path_context("copy part", &path)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;

    /// Like `with_path_context`, but `NotFound` becomes `SourceNotFound`.
    fn or_source_not_found(self, path: &Path) -> ApplicationResult<T>;

    /// Like `with_path_context`, but `AlreadyExists` becomes `OutputExists`.
    fn or_output_exists(self, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{}: {}", action, path.display()),
            source: Box::new(e),
        })
    }

    fn or_source_not_found(self, path: &Path) -> ApplicationResult<T> {
        match self {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(ApplicationError::SourceNotFound(path.to_path_buf()))
            }
            other => other.with_path_context("open source", path),
        }
    }

    fn or_output_exists(self, path: &Path) -> ApplicationResult<T> {
        match self {
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(ApplicationError::OutputExists(path.to_path_buf()))
            }
            other => other.with_path_context("create output", path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_not_found_when_or_source_not_found_then_maps_to_source_not_found() {
        let result: io::Result<()> = Err(io::Error::from(io::ErrorKind::NotFound));
        let err = result.or_source_not_found(Path::new("movie.avi")).unwrap_err();
        assert!(matches!(err, ApplicationError::SourceNotFound(p) if p == Path::new("movie.avi")));
    }

    #[test]
    fn given_already_exists_when_or_output_exists_then_maps_to_output_exists() {
        let result: io::Result<()> = Err(io::Error::from(io::ErrorKind::AlreadyExists));
        let err = result.or_output_exists(Path::new("movie.avi.0")).unwrap_err();
        assert!(matches!(err, ApplicationError::OutputExists(_)));
    }

    #[test]
    fn given_other_error_when_or_output_exists_then_keeps_context() {
        let result: io::Result<()> = Err(io::Error::from(io::ErrorKind::PermissionDenied));
        let err = result.or_output_exists(Path::new("movie.avi.0")).unwrap_err();
        match err {
            ApplicationError::OperationFailed { context, .. } => {
                assert_eq!(context, "create output: movie.avi.0")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
