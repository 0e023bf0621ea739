/// A single cell value. Whitespace-only strings are treated as empty so that
/// footer-row detection sees them the same way the spreadsheet parsers report
/// genuinely blank cells.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Text form of the cell, used by the column derivations. Empty cells
    /// render as the empty string.
    pub fn as_text(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
            Cell::Empty => String::new(),
        }
    }
}

/// A row-oriented table with positional columns. Headers come from the first
/// row of whatever source produced the table; rows are padded to the header
/// width so positional access never falls off the end of a short row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        while row.len() < self.headers.len() {
            row.push(Cell::Empty);
        }
        self.rows.push(row);
    }
}
