use crate::domain::models::{Cell, Table};
use anyhow::Context;
use rust_xlsxwriter::Workbook;
use std::io::{Cursor, Seek};

/// Fixed name the artifact is offered under.
pub const EXPORT_FILE_NAME: &str = "Consolidated Excel.xlsx";
pub const EXPORT_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Serializes the merged table into a single-sheet xlsx stream: header row
/// first, then data rows in table order. The returned cursor is rewound so
/// the caller can hand it straight to transmission.
pub fn write_workbook(table: &Table) -> anyhow::Result<Cursor<Vec<u8>>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, header) in table.headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, header)
            .with_context(|| format!("failed to write header cell {}", col))?;
    }
    for (r, row) in table.rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            let (row_idx, col_idx) = ((r + 1) as u32, c as u16);
            match cell {
                Cell::Text(s) => {
                    worksheet
                        .write_string(row_idx, col_idx, s)
                        .with_context(|| format!("failed to write cell ({r}, {c})"))?;
                }
                Cell::Number(n) => {
                    worksheet
                        .write_number(row_idx, col_idx, *n)
                        .with_context(|| format!("failed to write cell ({r}, {c})"))?;
                }
                Cell::Empty => {}
            }
        }
    }
    let bytes = workbook
        .save_to_buffer()
        .context("failed to serialize workbook")?;
    let mut cursor = Cursor::new(bytes);
    cursor.rewind().context("failed to rewind output buffer")?;
    Ok(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::file::excel::parse_xlsx;

    fn sample_table() -> Table {
        let mut table = Table::new(vec![
            "S No.".into(),
            "Name".into(),
            "Date".into(),
            "Month".into(),
        ]);
        table.push_row(vec![
            Cell::Number(1.0),
            Cell::Text("alpha".into()),
            Cell::Text("05 Apr 2023".into()),
            Cell::Text("Apr-23".into()),
        ]);
        table.push_row(vec![
            Cell::Number(2.0),
            Cell::Text("beta".into()),
            Cell::Text("15 Mar 2024".into()),
            Cell::Text("Mar-24".into()),
        ]);
        table
    }

    #[test]
    fn cursor_starts_at_position_zero() {
        let cursor = write_workbook(&sample_table()).unwrap();
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.get_ref().is_empty());
    }

    #[test]
    fn export_then_reparse_round_trips() {
        let table = sample_table();
        let cursor = write_workbook(&table).unwrap();
        let reparsed = parse_xlsx(cursor.get_ref()).unwrap();
        assert_eq!(reparsed.headers, table.headers);
        assert_eq!(reparsed.rows, table.rows);
    }

    #[test]
    fn empty_cells_export_as_blanks() {
        let mut table = Table::new(vec!["a".into(), "b".into()]);
        table.push_row(vec![Cell::Text("x".into()), Cell::Empty]);
        let cursor = write_workbook(&table).unwrap();
        let reparsed = parse_xlsx(cursor.get_ref()).unwrap();
        assert_eq!(reparsed.rows[0], vec![Cell::Text("x".into()), Cell::Empty]);
    }
}
