//! Structured error types for splitgrid.
//!
//! Configuration problems surface at construction; scroll input is always
//! clamped and never produces an error.

/// All errors that can occur while building or driving a grid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// A required render-target region was not found under the mount point.
    #[error("Missing render region: {0}")]
    MissingRegion(&'static str),

    /// The column schema has no columns.
    #[error("Column schema is empty")]
    EmptySchema,

    /// The static/floating split index lies past the last column.
    #[error("Static split {split} exceeds column count {columns}")]
    SplitOutOfRange { split: usize, columns: usize },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A row slot was driven through a transition its state does not allow.
    #[error("Invalid row slot transition: {0}")]
    InvalidTransition(&'static str),

    /// The render target rejected an operation.
    #[error("Render error: {0}")]
    Render(String),

    /// A value crossing the JS boundary could not be converted.
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

impl From<serde_json::Error> for GridError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<serde_wasm_bindgen::Error> for GridError {
    fn from(e: serde_wasm_bindgen::Error) -> Self {
        Self::Serde(e.to_string())
    }
}
