use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("'{0}' is not a valid file or directory")]
    InvalidPath(String),

    #[error("Unsupported file extension: {0}")]
    UnsupportedExtension(String),

    #[error("Skipping binary or non-text file: {0}")]
    DecodeFailure(String),

    #[error("Error reading {path}: {reason}")]
    ReadFailure { path: String, reason: String },

    #[error("No paths were provided")]
    NoPaths,

    #[error("No valid text-based code files found")]
    EmptyResult,

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("Input error: {0}")]
    InputError(String),

    #[error("Install failed: {0}")]
    InstallError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl ClipboardError {
    /// True when the document was built but the clipboard could not take it.
    pub fn is_sink_failure(&self) -> bool {
        matches!(
            self,
            ClipboardError::ClipboardInitError(_) | ClipboardError::ClipboardWriteError(_)
        )
    }
}

impl From<std::io::Error> for ClipboardError {
    fn from(err: std::io::Error) -> Self {
        ClipboardError::IoError(err.to_string())
    }
}
