//! Cumulative row layout.
//!
//! Rows are appended in order and stay contiguous:
//! `offset[i + 1] == offset[i] + height[i]`. Both top and bottom edges are
//! therefore non-decreasing, which lets visibility queries binary search.

use std::ops::Range;

/// Vertical placement of one row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRecord {
    pub offset: f64,
    pub height: f64,
}

impl LayoutRecord {
    pub fn bottom(&self) -> f64 {
        self.offset + self.height
    }

    /// True if the row touches `[top, top + height]`, edges included.
    pub fn intersects(&self, top: f64, height: f64) -> bool {
        self.bottom() >= top && self.offset <= top + height
    }
}

#[derive(Debug, Clone, Default)]
pub struct RowLayout {
    records: Vec<LayoutRecord>,
    content_height: f64,
}

impl RowLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            content_height: 0.0,
        }
    }

    /// Append a row below the current content. Negative or non-finite
    /// heights are treated as 0.
    pub fn push(&mut self, height: f64) -> LayoutRecord {
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        let record = LayoutRecord {
            offset: self.content_height,
            height,
        };
        self.records.push(record);
        self.content_height = record.bottom();
        record
    }

    pub fn get(&self, index: usize) -> Option<&LayoutRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Bottom edge of the last row.
    pub fn content_height(&self) -> f64 {
        self.content_height
    }

    /// Indices of rows with `bottom >= top && offset <= top + height`.
    pub fn visible_range(&self, top: f64, height: f64) -> Range<usize> {
        let bottom = top + height;
        let start = self.records.partition_point(|r| r.bottom() < top);
        let end = self.records.partition_point(|r| r.offset <= bottom);
        start..end.max(start)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LayoutRecord> {
        self.records.iter()
    }
}
