use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Message is surfaced to clients verbatim, e.g. `Bank not found`.
    #[error("{0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    /// Whether the caller sent something unusable, as opposed to a store failure.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ServiceError::NotFound(_)
                | ServiceError::Model(models::errors::ModelError::Validation(_))
        )
    }
}
