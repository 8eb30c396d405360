use thiserror::Error;

/// Unified result type for the scatter layout crate.
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Errors surfaced while loading or validating layout configuration.
///
/// Placement generation itself never fails; these only come out of the
/// configuration surface.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid layout config: {0}")]
    InvalidConfig(String),
    #[error("config parse error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
