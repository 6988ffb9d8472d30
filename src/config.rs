//! Grid configuration.
//!
//! Deserializes from JSON or a JS object (snake_case or camelCase keys);
//! missing fields take the defaults below.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Pixels the track loses to its border.
pub const TRACK_BORDER: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Viewport width in pixels
    #[serde(alias = "viewportWidth")]
    pub viewport_width: f64,
    /// Viewport height in pixels
    #[serde(alias = "viewportHeight")]
    pub viewport_height: f64,
    /// Height given to rows registered without an explicit height
    #[serde(alias = "rowHeight")]
    pub row_height: f64,
    /// Number of leading columns rendered into the static pane
    #[serde(alias = "staticColumns")]
    pub static_columns: usize,
    /// Scroll distance applied by a page-up/page-down click on the track
    #[serde(alias = "pageSize")]
    pub page_size: f64,
    /// Thumb width in pixels
    #[serde(alias = "scrollbarWidth")]
    pub scrollbar_width: f64,
    /// Gap between thumb and track edges
    #[serde(alias = "scrollbarMargin")]
    pub scrollbar_margin: f64,
    /// Smallest thumb length, so the thumb stays grabbable on huge content
    #[serde(alias = "minThumbLength")]
    pub min_thumb_length: f64,
    /// Pixels per legacy wheel tick
    #[serde(alias = "wheelTickPixels")]
    pub wheel_tick_pixels: f64,
    /// Pixels per line for line-mode wheel deltas
    #[serde(alias = "wheelLinePixels")]
    pub wheel_line_pixels: f64,
    /// Width of the static pane in pixels
    #[serde(alias = "staticPaneWidth")]
    pub static_pane_width: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        let viewport_height = 480.0;
        Self {
            viewport_width: 960.0,
            viewport_height,
            row_height: 32.0,
            static_columns: 4,
            page_size: viewport_height / 2.0 * 40.0,
            scrollbar_width: 12.0,
            scrollbar_margin: 3.0,
            min_thumb_length: 40.0,
            wheel_tick_pixels: 120.0,
            wheel_line_pixels: 16.0,
            static_pane_width: 470.0,
        }
    }
}

impl GridConfig {
    /// Parse a JSON configuration, filling in defaults.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Length of the scrollbar track.
    pub fn track_length(&self) -> f64 {
        self.viewport_height - TRACK_BORDER
    }

    /// Width of the track including margins on both sides.
    pub fn track_width(&self) -> f64 {
        self.scrollbar_width + self.scrollbar_margin * 2.0
    }

    /// Check that every dimension is usable.
    ///
    /// # Errors
    /// Returns [`GridError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("viewport_width", self.viewport_width),
            ("viewport_height", self.viewport_height),
            ("row_height", self.row_height),
            ("page_size", self.page_size),
            ("scrollbar_width", self.scrollbar_width),
            ("wheel_tick_pixels", self.wheel_tick_pixels),
            ("wheel_line_pixels", self.wheel_line_pixels),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(GridError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        let non_negative = [
            ("scrollbar_margin", self.scrollbar_margin),
            ("min_thumb_length", self.min_thumb_length),
            ("static_pane_width", self.static_pane_width),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(GridError::InvalidConfig(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        if self.track_length() < self.min_thumb_length {
            return Err(GridError::InvalidConfig(format!(
                "track length {} is shorter than min_thumb_length {}",
                self.track_length(),
                self.min_thumb_length
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GridConfig::default();
        config.validate().unwrap();
        assert_eq!(config.page_size, 9600.0);
        assert_eq!(config.track_length(), 478.0);
        assert_eq!(config.track_width(), 18.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GridConfig::from_json(r#"{"viewportHeight": 600, "static_columns": 2}"#)
            .unwrap();
        assert_eq!(config.viewport_height, 600.0);
        assert_eq!(config.static_columns, 2);
        assert_eq!(config.row_height, 32.0);
    }

    #[test]
    fn test_rejects_zero_row_height() {
        let err = GridConfig::from_json(r#"{"row_height": 0}"#).unwrap_err();
        assert!(matches!(err, GridError::InvalidConfig(msg) if msg.contains("row_height")));
    }

    #[test]
    fn test_rejects_track_shorter_than_thumb() {
        let config = GridConfig {
            viewport_height: 30.0,
            ..GridConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            GridConfig::from_json("{"),
            Err(GridError::Serde(_))
        ));
    }
}
