use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Unsupported query value: {0}")]
    UnsupportedValue(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Failed to render {template}: {message}")]
    Render { template: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
