/// failure modes for transit record store operations. all variants except
/// [`StoreError::StorageFault`] are business-rule failures: the store is left
/// in its pre-call state and the message is suitable for display as-is.
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("{entity} '{key}' already exists")]
    DuplicateKey { entity: &'static str, key: String },
    #[error("{entity} '{key}' not found")]
    NotFound { entity: &'static str, key: String },
    #[error("cannot delete {entity} '{key}': referenced by {dependents} trip offering(s)")]
    ReferentialConflict {
        entity: &'static str,
        key: String,
        dependents: i64,
    },
    #[error("{0}")]
    InvalidReference(String),
    #[error("{0}")]
    InputError(String),
    #[error("storage fault: {0}")]
    StorageFault(#[from] rusqlite::Error),
}
