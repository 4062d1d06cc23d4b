use thiserror::Error;

/// Unified result type for the crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced while resolving layout descriptions.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("window `{0}` appears more than once in the layout tree")]
    DuplicateWindow(String),
    #[error("colour scheme error: {0}")]
    Scheme(#[from] serde_json::Error),
}
