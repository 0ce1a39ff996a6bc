use porto_core::types::DbId;

/// Failure raised by a repository.
///
/// Callers above the repository treat this as opaque apart from telling a
/// missing row apart from everything else.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
