use serde::{Deserialize, Serialize};

use crate::numfmt::CurrencyFormatter;

/// A single cell value.
///
/// Deserializes untagged: JSON numbers become [`Cell::Amount`], strings
/// become [`Cell::Text`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Amount(f64),
    Text(String),
}

impl Cell {
    /// Display string for this cell. Numbers go through the formatter.
    pub fn display(&self, formatter: &dyn CurrencyFormatter) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Amount(value) => formatter.format(*value),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Self::Amount(v)
    }
}

/// One data row, in column order. Opaque to the windowing engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

impl FromIterator<Cell> for Row {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// Rendered content of one cell, handed to a render pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// Non-editable label
    Label(String),
    /// Editable field pre-filled with the formatted value
    Field(String),
}

impl CellContent {
    pub fn text(&self) -> &str {
        match self {
            Self::Label(text) | Self::Field(text) => text,
        }
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Field(_))
    }
}
