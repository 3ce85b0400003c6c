use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Invalid data format received from API")]
    InvalidFormat,

    #[error("Invalid API URL: {0}")]
    Url(String),

    #[error("Seed data error: {0}")]
    Seed(#[from] serde_json::Error),
}
