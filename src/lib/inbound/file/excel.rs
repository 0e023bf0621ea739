use crate::domain::models::{Cell, Table};
use anyhow::Context;
use calamine::{Data, Range, Reader as CalamineReader, Xls, Xlsx};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use std::io::Cursor;

fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let days = serial.floor() as i64;
    let seconds_in_day = (serial.fract() * 86400.0).floor() as u32;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds_in_day, 0)?;
    let date = excel_epoch.checked_add_signed(chrono::Duration::days(days))?;
    Some(NaiveDateTime::new(date, time))
}

fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) if s.trim().is_empty() => Cell::Empty,
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Text(b.to_string()),
        Data::DateTime(dt) => {
            let serial = dt.as_f64();
            match excel_serial_to_datetime(serial) {
                Some(ndt) => Cell::Text(ndt.format("%Y-%m-%d %H:%M:%S").to_string()),
                None => Cell::Number(serial),
            }
        }
        Data::DateTimeIso(s) => Cell::Text(s.clone()),
        Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) => Cell::Empty,
    }
}

/// First row of the used range becomes the header row; the rest become data
/// rows, padded to the header width.
fn range_to_table(range: &Range<Data>) -> anyhow::Result<Table> {
    let mut rows_iter = range.rows();
    let headers: Vec<String> = rows_iter
        .next()
        .map(|header_row| header_row.iter().map(|cell| cell.to_string()).collect())
        .ok_or_else(|| anyhow::anyhow!("worksheet has no header row"))?;
    let mut table = Table::new(headers);
    for row in rows_iter {
        table.push_row(row.iter().map(cell_from_data).collect());
    }
    Ok(table)
}

fn first_sheet_name(sheet_names: &[String]) -> anyhow::Result<String> {
    sheet_names
        .first()
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("workbook has no worksheets"))
}

pub fn parse_xlsx(bytes: &[u8]) -> anyhow::Result<Table> {
    let mut workbook =
        Xlsx::new(Cursor::new(bytes.to_vec())).context("failed to open xlsx workbook")?;
    let sheet_name = first_sheet_name(&workbook.sheet_names())?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read worksheet '{}'", sheet_name))?;
    range_to_table(&range)
}

pub fn parse_xls(bytes: &[u8]) -> anyhow::Result<Table> {
    let mut workbook =
        Xls::new(Cursor::new(bytes.to_vec())).context("failed to open xls workbook")?;
    let sheet_name = first_sheet_name(&workbook.sheet_names())?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .with_context(|| format!("failed to read worksheet '{}'", sheet_name))?;
    range_to_table(&range)
}
