//! Unified error types for the image browser application.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// Error loading or decoding an image file
    ImageLoad(String),
    /// Error encoding or writing an image file
    ImageSave(String),
    /// Error setting up the directory watch
    Watch(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ImageLoad(msg) => write!(f, "image load failed: {}", msg),
            AppError::ImageSave(msg) => write!(f, "image save failed: {}", msg),
            AppError::Watch(msg) => write!(f, "directory watch failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::ImageLoad(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
