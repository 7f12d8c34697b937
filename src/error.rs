#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage encode: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("storage crypto: {0}")]
    Crypto(String),
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Job title is required")]
    EmptyTitle,

    #[error("Company name is required")]
    EmptyCompany,

    #[error("Please enter a valid URL")]
    InvalidUrl,
}
