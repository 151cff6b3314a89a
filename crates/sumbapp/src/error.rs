use thiserror::Error;

#[derive(Error, Debug)]
pub enum SumbError {
    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Malformed note id: {0:?}")]
    MalformedIdentifier(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Search index references note {0}, which is missing from the store (run `sumb doctor`)")]
    IndexInconsistency(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SumbError>;

macro_rules! storage_error_from {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for SumbError {
                fn from(err: $ty) -> Self {
                    SumbError::StorageUnavailable(err.to_string())
                }
            }
        )+
    };
}

storage_error_from!(
    redb::Error,
    redb::DatabaseError,
    redb::TransactionError,
    redb::TableError,
    redb::StorageError,
    redb::CommitError,
    tantivy::TantivyError,
    tantivy::directory::error::OpenDirectoryError,
);
