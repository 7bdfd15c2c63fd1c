/*
    errors.rs - Error types for the registry stores

    One domain failure kind exists: an association operation naming an id
    that was never added. Reads never produce a domain error; unknown ids
    yield empty results instead.
*/

use crate::core_registry::model::{CourseId, FacultyId, StudentId};
use std::sync::PoisonError;
use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur in registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Student not found
    #[error("Student not found: {0}")]
    StudentNotFound(StudentId),

    /// Faculty member not found
    #[error("Faculty not found: {0}")]
    FacultyNotFound(FacultyId),

    /// Course not found
    #[error("Course not found: {0}")]
    CourseNotFound(CourseId),

    /// Internal error (lock poisoned by a panicking thread)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Helper to convert poison errors into RegistryError
pub(crate) fn handle_poison<T>(_err: PoisonError<T>) -> RegistryError {
    RegistryError::Internal("Lock poisoned: a thread panicked while holding the lock".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = RegistryError::StudentNotFound(StudentId::new(999));
        assert_eq!(err.to_string(), "Student not found: 999");

        let err = RegistryError::FacultyNotFound(FacultyId::new(42));
        assert_eq!(err.to_string(), "Faculty not found: 42");

        let err = RegistryError::CourseNotFound(CourseId::new(7));
        assert_eq!(err.to_string(), "Course not found: 7");
    }

    #[test]
    fn test_internal_display() {
        let err = RegistryError::Internal("boom".to_string());
        assert_eq!(err.to_string(), "Internal error: boom");
    }

    #[test]
    fn test_poison_maps_to_internal() {
        use std::sync::RwLock;

        let lock = RwLock::new(0u32);
        // Poison the lock by panicking while holding the write guard
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = lock.write().unwrap();
            panic!("poison");
        }));
        assert!(result.is_err());

        let err = lock.write().map_err(handle_poison).map(|_| ()).unwrap_err();
        assert!(matches!(err, RegistryError::Internal(_)));
        assert!(err.to_string().contains("Lock poisoned"));
    }
}
