//! Wheel input normalization.
//!
//! Browsers deliver wheel motion in two shapes: a signed magnitude (the
//! `wheel` event, in pixels, lines or pages) and a discrete tick count (the
//! legacy `DOMMouseScroll` event). Both are converted here into one
//! [`ScrollDelta`] before reaching the engine, so axis filtering happens once.

use crate::config::GridConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Units of a magnitude delta, mirroring `WheelEvent.deltaMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaUnit {
    #[default]
    Pixel,
    Line,
    Page,
}

impl DeltaUnit {
    /// Map a DOM `deltaMode` value (0, 1, 2).
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }
}

/// Raw wheel input as it arrives from the host. Positive values move down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawWheel {
    /// Signed magnitude along one axis
    Magnitude { axis: Axis, delta: f64, unit: DeltaUnit },
    /// Discrete ticks along one axis
    Ticks { axis: Axis, ticks: i32 },
}

/// Normalized scroll input. Positive pixels scroll toward the end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollDelta {
    pub pixels: f64,
    pub axis: Axis,
}

impl ScrollDelta {
    pub fn vertical(pixels: f64) -> Self {
        Self {
            pixels,
            axis: Axis::Vertical,
        }
    }

    /// Convert a raw wheel event into pixels.
    pub fn from_raw(raw: RawWheel, config: &GridConfig) -> Self {
        match raw {
            RawWheel::Magnitude { axis, delta, unit } => {
                let scale = match unit {
                    DeltaUnit::Pixel => 1.0,
                    DeltaUnit::Line => config.wheel_line_pixels,
                    DeltaUnit::Page => config.viewport_height,
                };
                let delta = if delta.is_finite() { delta } else { 0.0 };
                Self {
                    pixels: delta * scale,
                    axis,
                }
            }
            RawWheel::Ticks { axis, ticks } => Self {
                pixels: f64::from(ticks) * config.wheel_tick_pixels,
                axis,
            },
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.axis == Axis::Vertical
    }
}
