//! Error types shared across MemeForge crates.

/// Top-level error type for MemeForge operations.
#[derive(Debug, thiserror::Error)]
pub enum MemeforgeError {
    #[error("Editor error: {message}")]
    Editor { message: String },

    #[error("Picker error: {message}")]
    Picker { message: String },

    #[error("Render error: {message}")]
    Render { message: String },

    #[error("Share error: {message}")]
    Share { message: String },

    #[error("Platform error: {message}")]
    Platform { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Export precondition violated: {message}")]
    Precondition { message: String },

    #[error("Unsupported operation: {message}")]
    Unsupported { message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using MemeforgeError.
pub type MemeforgeResult<T> = Result<T, MemeforgeError>;

impl MemeforgeError {
    pub fn editor(msg: impl Into<String>) -> Self {
        Self::Editor {
            message: msg.into(),
        }
    }

    pub fn picker(msg: impl Into<String>) -> Self {
        Self::Picker {
            message: msg.into(),
        }
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
        }
    }

    pub fn share(msg: impl Into<String>) -> Self {
        Self::Share {
            message: msg.into(),
        }
    }

    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::Precondition {
            message: msg.into(),
        }
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported {
            message: msg.into(),
        }
    }
}
