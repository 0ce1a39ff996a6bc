use porto_core::error::CoreError;
use porto_db::StorageError;

/// Failure returned by a service operation.
///
/// Displays as the underlying message, so `"contact name is required"` or
/// the database error text reaches the caller verbatim.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Rejected before storage: a validation rule or a missing id.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The repository call failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// True when the request was refused without touching storage.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Core(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(err) if err.is_not_found())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_underlying_message() {
        let err = ServiceError::from(CoreError::validation("invalid email format"));
        assert_eq!(err.to_string(), "invalid email format");
        assert!(err.is_rejection());

        let err = ServiceError::from(StorageError::NotFound {
            entity: "Experience",
            id: 2,
        });
        assert_eq!(err.to_string(), "Experience with id 2 not found");
        assert!(err.is_not_found());
        assert!(!err.is_rejection());
    }
}
