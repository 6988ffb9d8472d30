//! Viewport state management for vertical scrolling.

/// The visible window onto the row content.
///
/// Invariant: `0 <= scroll_offset <= max(0, content_height - height)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    /// Vertical scroll position in content coordinates
    scroll_offset: f64,
    /// Viewport width in pixels
    pub width: f64,
    /// Viewport height in pixels
    pub height: f64,
    /// Bottom edge of the last row
    content_height: f64,
}

impl ViewportState {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            scroll_offset: 0.0,
            width,
            height,
            content_height: 0.0,
        }
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Update content height, pulling the scroll offset back in range.
    pub fn set_content_height(&mut self, content_height: f64) {
        self.content_height = content_height.max(0.0);
        self.clamp_scroll();
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.content_height - self.height).max(0.0)
    }

    pub fn clamp_scroll(&mut self) {
        if self.scroll_offset.is_nan() {
            self.scroll_offset = 0.0;
        }
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }

    /// Scroll by a pixel delta. Returns the distance actually moved.
    pub fn scroll_by(&mut self, delta: f64) -> f64 {
        let before = self.scroll_offset;
        if delta.is_finite() {
            self.scroll_offset += delta;
        }
        self.clamp_scroll();
        self.scroll_offset - before
    }

    /// Scroll to a fraction of the scrollable range.
    pub fn scroll_to_fraction(&mut self, fraction: f64) {
        let fraction = if fraction.is_nan() {
            0.0
        } else {
            fraction.clamp(0.0, 1.0)
        };
        self.scroll_offset = fraction * self.max_scroll();
        self.clamp_scroll();
    }

    /// Viewport height over content height, in `[0, 1]`.
    pub fn length_fraction(&self) -> f64 {
        if self.content_height > 0.0 {
            (self.height / self.content_height).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Scroll offset over the scrollable range; 0 when nothing scrolls.
    pub fn position_fraction(&self) -> f64 {
        let range = self.max_scroll();
        if range > 0.0 {
            (self.scroll_offset / range).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Vertical translation for content at `offset`.
    pub fn to_screen(&self, offset: f64) -> f64 {
        offset - self.scroll_offset
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.clamp_scroll();
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn viewport(content: f64) -> ViewportState {
        let mut v = ViewportState::new(960.0, 480.0);
        v.set_content_height(content);
        v
    }

    #[test]
    fn test_initial_scroll_zero() {
        assert_eq!(ViewportState::new(960.0, 480.0).scroll_offset(), 0.0);
    }

    #[test]
    fn test_scroll_by_clamps_both_ends() {
        let mut v = viewport(3200.0);
        assert_eq!(v.scroll_by(-50.0), 0.0);
        assert_eq!(v.scroll_by(100.0), 100.0);
        v.scroll_by(1e9);
        assert_eq!(v.scroll_offset(), 2720.0);
        v.scroll_by(f64::NAN);
        assert_eq!(v.scroll_offset(), 2720.0);
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut v = viewport(100.0);
        v.scroll_by(40.0);
        assert_eq!(v.scroll_offset(), 0.0);
        assert_eq!(v.position_fraction(), 0.0);
        assert_eq!(v.length_fraction(), 1.0);
    }

    #[test]
    fn test_fraction_round_trip() {
        let mut v = viewport(4800.0);
        v.scroll_to_fraction(0.25);
        assert_eq!(v.scroll_offset(), 1080.0);
        assert_eq!(v.position_fraction(), 0.25);
        v.scroll_to_fraction(7.0);
        assert_eq!(v.scroll_offset(), 4320.0);
        assert_eq!(v.length_fraction(), 0.1);
    }

    #[test]
    fn test_resize_reclamps() {
        let mut v = viewport(1000.0);
        v.scroll_by(520.0);
        v.resize(960.0, 800.0);
        assert_eq!(v.scroll_offset(), 200.0);
    }
}
