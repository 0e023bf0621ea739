use crate::domain::models::{Cell, Table};
use scraper::{ElementRef, Html, Selector};

fn row_cells(row: ElementRef<'_>, cell_selector: &Selector) -> Vec<String> {
    row.select(cell_selector)
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect()
}

fn cell_from_text(text: String) -> Cell {
    if text.is_empty() {
        Cell::Empty
    } else if let Ok(n) = text.parse::<f64>() {
        Cell::Number(n)
    } else {
        Cell::Text(text)
    }
}

/// Parses the first `<table>` element in an HTML document. Legacy "xls"
/// exports from web applications are frequently HTML tables with a
/// spreadsheet extension; this is the fallback parser for those.
pub fn parse_first_table(bytes: &[u8]) -> anyhow::Result<Table> {
    let body = String::from_utf8_lossy(bytes);
    let doc = Html::parse_document(&body);
    let table_sel = Selector::parse("table").expect("Invalid CSS selector for tables");
    let row_sel = Selector::parse("tr").expect("Invalid CSS selector for table rows");
    let cell_sel = Selector::parse("th, td").expect("Invalid CSS selector for table cells");

    let table_el = doc
        .select(&table_sel)
        .next()
        .ok_or_else(|| anyhow::anyhow!("document contains no <table> element"))?;
    let mut rows = table_el.select(&row_sel);
    let headers = rows
        .next()
        .map(|header_row| row_cells(header_row, &cell_sel))
        .ok_or_else(|| anyhow::anyhow!("table has no rows"))?;
    let mut table = Table::new(headers);
    for row in rows {
        table.push_row(
            row_cells(row, &cell_sel)
                .into_iter()
                .map(cell_from_text)
                .collect(),
        );
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_table_wins_and_cells_are_typed() {
        let html = br#"<html><body>
            <table>
              <tr><th>S No.</th><th>Amount</th><th>Note</th></tr>
              <tr><td>1</td><td>1,234</td><td></td></tr>
            </table>
            <table><tr><td>ignored</td></tr></table>
            </body></html>"#;
        let table = parse_first_table(html).unwrap();
        assert_eq!(table.headers, vec!["S No.", "Amount", "Note"]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.rows[0][0], Cell::Number(1.0));
        // thousands separators stay textual here; coercion is a merge stage
        assert_eq!(table.rows[0][1], Cell::Text("1,234".into()));
        assert_eq!(table.rows[0][2], Cell::Empty);
    }

    #[test]
    fn document_without_table_is_an_error() {
        assert!(parse_first_table(b"<html><body><p>hi</p></body></html>").is_err());
    }

    #[test]
    fn non_utf8_bytes_still_parse_lossily() {
        let mut bytes = b"<table><tr><th>h</th></tr><tr><td>v".to_vec();
        bytes.push(0xFF);
        bytes.extend_from_slice(b"</td></tr></table>");
        let table = parse_first_table(&bytes).unwrap();
        assert_eq!(table.headers, vec!["h"]);
        assert_eq!(table.row_count(), 1);
    }
}
