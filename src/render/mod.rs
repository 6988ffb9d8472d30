//! Render targets with pluggable backends.
//!
//! This module provides:
//! - The `RenderPane` capability trait the windowing engine draws through
//! - A recording backend for headless use and tests
//! - A DOM backend (wasm32 only)

pub mod pane;
pub mod recording;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use pane::RenderPane;
pub use recording::{FragmentId, PaneStats, RecordedFragment, RecordingPane};

#[cfg(target_arch = "wasm32")]
pub use dom::DomPane;
