//! Error types for the retro desktop core

/// Errors surfaced by the desktop core.
///
/// None of these are fatal: the browser layer logs them as warnings and
/// skips the operation that produced them.
#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    /// A required element (container or drag handle) is absent.
    #[error("missing element: no handle `{handle}` under `{element}`")]
    MissingElement { element: String, handle: String },

    /// A close request named a window that does not exist.
    #[error("unknown window: {0}")]
    UnknownWindow(String),

    /// Configuration parsed but failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    /// Site content could not be fetched or decoded.
    #[error("content error: {0}")]
    Content(String),
}

impl DesktopError {
    /// Shorthand for a missing handle on a named element
    pub fn missing(element: &str, handle: &str) -> Self {
        DesktopError::MissingElement {
            element: element.to_string(),
            handle: handle.to_string(),
        }
    }
}
