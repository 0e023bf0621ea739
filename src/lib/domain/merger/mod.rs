pub mod derive;
pub mod sanitize;
pub mod setup;
pub mod summary;

pub use setup::{discover_files, setup_logging};
pub use summary::{MergeSummary, log_summary};

use crate::domain::models::{Cell, Diagnostic, Table};
use crate::inbound::file::{self, LoadResult, RawFile};

/// Positional column the pipeline rebuilds as a 1-based running number.
const SEQUENCE_COLUMN: usize = 0;
/// Positional column holding the date the month label is derived from.
const DATE_COLUMN: usize = 2;
/// Positional columns subjected to numeric coercion.
const AMOUNT_COLUMNS: [usize; 2] = [4, 5];

/// Optional pipeline stages. The source system shipped variants with and
/// without these; both default on, and the caller can disable either.
#[derive(Debug, Clone, Copy)]
pub struct MergeOptions {
    pub coerce_numeric: bool,
    pub fiscal_sort: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            coerce_numeric: true,
            fiscal_sort: true,
        }
    }
}

/// Result of one pipeline run: the merged table when anything survived
/// loading, plus the ordered diagnostics for the caller to render.
#[derive(Debug)]
pub struct Consolidation {
    pub table: Option<Table>,
    pub diagnostics: Vec<Diagnostic>,
    pub files_merged: usize,
    pub files_skipped: usize,
}

fn renumber(table: &mut Table) {
    for (i, row) in table.rows.iter_mut().enumerate() {
        if let Some(slot) = row.get_mut(SEQUENCE_COLUMN) {
            *slot = Cell::Number((i + 1) as f64);
        }
    }
}

fn append_month_column(table: &mut Table) {
    table.headers.push(derive::MONTH_HEADER.to_string());
    for row in &mut table.rows {
        let raw = row.get(DATE_COLUMN).map(Cell::as_text).unwrap_or_default();
        row.push(Cell::Text(derive::month_label(&raw)));
    }
}

fn coerce_amount_columns(table: &mut Table) {
    for row in &mut table.rows {
        for index in AMOUNT_COLUMNS {
            if let Some(cell) = row.get_mut(index) {
                let value = derive::coerce_number(cell);
                *cell = Cell::Number(value);
            }
        }
    }
}

/// Concatenates the surviving tables positionally (the first table's headers
/// win), rebuilds the sequence column, appends the month column, and applies
/// the optional coercion and fiscal-sort stages. Errors only when no table
/// survived loading.
pub fn merge(tables: Vec<Table>, options: &MergeOptions) -> anyhow::Result<Table> {
    let mut tables = tables.into_iter();
    let Some(mut merged) = tables.next() else {
        anyhow::bail!("nothing to merge: no tables survived loading");
    };
    for table in tables {
        merged.rows.extend(table.rows);
    }
    // positional alignment only; no header reconciliation across files
    let width = merged.column_count();
    for row in &mut merged.rows {
        row.resize(width, Cell::Empty);
    }

    renumber(&mut merged);
    append_month_column(&mut merged);
    if options.coerce_numeric {
        coerce_amount_columns(&mut merged);
    }
    if options.fiscal_sort {
        let month_index = merged.column_count() - 1;
        merged
            .rows
            .sort_by_cached_key(|row| derive::fiscal_month_key(&row[month_index].as_text()));
        renumber(&mut merged);
    }
    Ok(merged)
}

/// Runs the whole pipeline over one batch of uploaded files: load each with
/// the parser chain, trim trailing summary rows, merge, derive columns.
pub fn consolidate(files: &[RawFile], options: &MergeOptions) -> Consolidation {
    let mut diagnostics = Vec::new();
    let mut surviving = Vec::new();
    let mut files_skipped = 0;
    for raw in files {
        match file::load(raw) {
            LoadResult::Loaded(mut table) => {
                let trimmed = sanitize::trim_trailing_summary_row(&mut table);
                let note = if trimmed {
                    " after dropping a trailing summary row"
                } else {
                    ""
                };
                diagnostics.push(Diagnostic::info(format!(
                    "Read {} row(s) from '{}'{}",
                    table.row_count(),
                    raw.name,
                    note
                )));
                surviving.push(table);
            }
            LoadResult::Skipped { reason } => {
                files_skipped += 1;
                diagnostics.push(Diagnostic::warning(format!(
                    "Skipped '{}': {}",
                    raw.name, reason
                )));
            }
        }
    }
    let files_merged = surviving.len();
    match merge(surviving, options) {
        Ok(table) => {
            diagnostics.push(Diagnostic::info(format!(
                "Merged {} row(s) from {} file(s)",
                table.row_count(),
                files_merged
            )));
            Consolidation {
                table: Some(table),
                diagnostics,
                files_merged,
                files_skipped,
            }
        }
        Err(_) => {
            diagnostics.push(Diagnostic::error("No valid Excel files could be read."));
            Consolidation {
                table: None,
                diagnostics,
                files_merged,
                files_skipped,
            }
        }
    }
}
