use serde::{Deserialize, Serialize};

/// One cell of a record.
///
/// CSV carries no type information, so non-empty values keep their raw
/// lexical form. An all-whitespace cell is `Empty` and serializes back as
/// an empty string, never as a null token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Empty,
}

impl CellValue {
    pub fn from_raw(raw: &str) -> Self {
        if raw.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(raw.to_string())
        }
    }

    /// Text content of the cell; empty string for `Empty`.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text(value) => value,
            Self::Empty => "",
        }
    }
}

/// An ordered, named-column table. Row cells are positional and align with
/// `columns`; rows are never reordered after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<CellValue>) {
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cell text at (row, column index); empty string when the row is short.
    pub fn cell_text(&self, row: usize, column: usize) -> &str {
        self.rows[row]
            .get(column)
            .map(CellValue::as_text)
            .unwrap_or("")
    }

    /// All values of one column, as text, in row order.
    pub fn column_values(&self, column: usize) -> Vec<String> {
        (0..self.rows.len())
            .map(|row| self.cell_text(row, column).to_string())
            .collect()
    }
}
