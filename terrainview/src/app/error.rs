//! Application error types.

use thiserror::Error;

use crate::archive::LayoutError;
use crate::contour::PolicyError;
use crate::protocol::RegistryError;

/// Errors that can occur while bootstrapping the application.
///
/// Startup stops at the first failure; nothing is registered for a
/// configuration that does not validate.
#[derive(Debug, Error)]
pub enum AppError {
    /// The archive layout is inconsistent.
    #[error("Invalid archive layout: {0}")]
    Layout(#[from] LayoutError),

    /// The contour threshold table or field names are invalid.
    #[error("Invalid contour policy: {0}")]
    Policy(#[from] PolicyError),

    /// The protocol handler could not be registered.
    #[error("Failed to register protocol handler: {0}")]
    Registry(#[from] RegistryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Policy(PolicyError::EmptyTable);
        assert!(err.to_string().starts_with("Invalid contour policy"));
    }

    #[test]
    fn test_app_error_from_layout_error() {
        let err: AppError = LayoutError::EmptyLowZoomKey.into();
        assert!(matches!(err, AppError::Layout(_)));
        assert!(err.to_string().starts_with("Invalid archive layout"));
    }

    #[test]
    fn test_app_error_from_registry_error() {
        let err: AppError = RegistryError::AlreadyRegistered("mapterhorn".to_string()).into();
        assert!(matches!(err, AppError::Registry(_)));
        assert!(err.to_string().contains("mapterhorn"));
    }
}
