use axum::extract::multipart::MultipartError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Please upload an X-ray, MRI, or medical scan.")]
    MissingImage,

    #[error("Unsupported file '{file_name}': only JPG, JPEG and PNG images are accepted.")]
    UnsupportedFormat { file_name: String },

    #[error("Invalid form data: {0}")]
    Multipart(#[from] MultipartError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Provider error {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("Provider blocked the prompt: {0}")]
    Blocked(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn provider(status: u16, msg: impl Into<String>) -> Self {
        Self::Provider {
            status,
            message: msg.into(),
        }
    }

    /// Errors caused by what the user submitted, reported before any provider call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingImage | Self::UnsupportedFormat { .. })
    }
}
