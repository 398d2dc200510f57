use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Failed to write lesson output: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to render record as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Index {index} out of range for slice of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid range {start}..{end} for slice of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, LessonError>;
