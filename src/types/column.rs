//! Column schema and the static/floating split.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

use super::{Cell, CellContent};
use crate::numfmt::CurrencyFormatter;

/// How a column's cells are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    /// Read-only label
    #[default]
    #[serde(alias = "str")]
    Text,
    /// Editable field pre-filled with a currency-formatted value
    #[serde(alias = "amt")]
    Amount,
}

/// Describes one column of the grid. Supplied once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub label: String,
    #[serde(default, alias = "fmt")]
    pub format: FormatKind,
    #[serde(default, alias = "rw", alias = "readWrite")]
    pub read_write: bool,
}

impl ColumnDescriptor {
    pub fn text(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            format: FormatKind::Text,
            read_write: false,
        }
    }

    pub fn amount(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            format: FormatKind::Amount,
            read_write: true,
        }
    }
}

/// Ordered column descriptors plus the static/floating split point.
///
/// Columns `0..static_columns` render into the static pane, the rest into the
/// floating pane.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<ColumnDescriptor>,
    static_columns: usize,
}

impl Schema {
    /// Validate and build a schema.
    ///
    /// # Errors
    /// Returns [`GridError::EmptySchema`] for no columns and
    /// [`GridError::SplitOutOfRange`] when the split lies past the last column.
    pub fn new(columns: Vec<ColumnDescriptor>, static_columns: usize) -> Result<Self> {
        if columns.is_empty() {
            return Err(GridError::EmptySchema);
        }
        if static_columns > columns.len() {
            return Err(GridError::SplitOutOfRange {
                split: static_columns,
                columns: columns.len(),
            });
        }
        Ok(Self {
            columns,
            static_columns,
        })
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn static_columns(&self) -> usize {
        self.static_columns
    }

    /// Build the per-pane cell contents for one row.
    ///
    /// Cells past the last column are ignored; a short row yields short panes.
    pub fn partition(
        &self,
        cells: &[Cell],
        formatter: &dyn CurrencyFormatter,
    ) -> (Vec<CellContent>, Vec<CellContent>) {
        let mut static_cells = Vec::with_capacity(self.static_columns);
        let mut floating_cells = Vec::with_capacity(self.columns.len() - self.static_columns);

        for (index, (cell, column)) in cells.iter().zip(&self.columns).enumerate() {
            let text = cell.display(formatter);
            let content = match column.format {
                FormatKind::Text => CellContent::Label(text),
                FormatKind::Amount => CellContent::Field(text),
            };
            if index < self.static_columns {
                static_cells.push(content);
            } else {
                floating_cells.push(content);
            }
        }

        (static_cells, floating_cells)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::numfmt::MoneyFormat;

    fn columns() -> Vec<ColumnDescriptor> {
        let mut cols = vec![ColumnDescriptor::text("Name")];
        for i in 1..6 {
            cols.push(ColumnDescriptor::amount(format!("Q{i}")));
        }
        cols
    }

    #[test]
    fn test_empty_schema_rejected() {
        assert_eq!(Schema::new(Vec::new(), 0).unwrap_err(), GridError::EmptySchema);
    }

    #[test]
    fn test_split_past_end_rejected() {
        let err = Schema::new(columns(), 7).unwrap_err();
        assert_eq!(
            err,
            GridError::SplitOutOfRange {
                split: 7,
                columns: 6
            }
        );
    }

    #[test]
    fn test_partition_by_split_and_format() {
        let schema = Schema::new(columns(), 4).unwrap();
        let cells = vec![
            Cell::Text("Level-1".into()),
            Cell::Amount(1.0),
            Cell::Amount(2.0),
            Cell::Amount(3.0),
            Cell::Amount(1234.5),
            Cell::Amount(-5.0),
        ];
        let (left, right) = schema.partition(&cells, &MoneyFormat::default());
        assert_eq!(left.len(), 4);
        assert_eq!(right.len(), 2);
        assert_eq!(left[0], CellContent::Label("Level-1".into()));
        assert_eq!(right[0], CellContent::Field("1,234.50".into()));
        assert_eq!(right[1], CellContent::Field("-5.00".into()));
    }

    #[test]
    fn test_partition_short_row() {
        let schema = Schema::new(columns(), 4).unwrap();
        let cells = vec![Cell::Text("only".into()), Cell::Amount(1.0)];
        let (left, right) = schema.partition(&cells, &MoneyFormat::default());
        assert_eq!(left.len(), 2);
        assert!(right.is_empty());
    }

    #[test]
    fn test_column_aliases_deserialize() {
        let col: ColumnDescriptor =
            serde_json::from_str(r#"{"label":"Amt","fmt":"amt","rw":true}"#).unwrap();
        assert_eq!(col.format, FormatKind::Amount);
        assert!(col.read_write);
    }
}
