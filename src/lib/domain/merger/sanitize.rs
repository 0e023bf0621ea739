use crate::domain::models::Table;

/// Drops the final row when more than half of its cells are empty. Legacy
/// exports commonly append a mostly-blank total/footer row that must not
/// pollute merged data. Only the last row is ever inspected, once.
/// Returns whether a row was dropped.
pub fn trim_trailing_summary_row(table: &mut Table) -> bool {
    let Some(last) = table.rows.last() else {
        return false;
    };
    let empty_count = last.iter().filter(|cell| cell.is_empty()).count();
    if empty_count > table.column_count() / 2 {
        table.rows.pop();
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Cell;

    fn six_column_table(last_row_empty_cells: usize) -> Table {
        let headers = (0..6).map(|i| format!("c{i}")).collect();
        let mut table = Table::new(headers);
        table.push_row(vec![Cell::Text("data".into()); 6]);
        let mut last = vec![Cell::Text("x".into()); 6 - last_row_empty_cells];
        last.resize(6, Cell::Empty);
        table.push_row(last);
        table
    }

    #[test]
    fn footer_row_over_half_empty_is_dropped() {
        let mut table = six_column_table(4);
        assert!(trim_trailing_summary_row(&mut table));
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn row_at_exactly_half_empty_is_retained() {
        // 3 empty of 6: 3 > 3 is false
        let mut table = six_column_table(3);
        assert!(!trim_trailing_summary_row(&mut table));
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn odd_column_count_uses_floor_division() {
        let mut table = Table::new(vec!["a".into(), "b".into(), "c".into()]);
        table.push_row(vec![Cell::Text("x".into()), Cell::Empty, Cell::Empty]);
        // 2 > 3 / 2 = 1, dropped
        assert!(trim_trailing_summary_row(&mut table));
        assert!(table.is_empty());
    }

    #[test]
    fn empty_table_passes_through() {
        let mut table = Table::new(vec!["a".into()]);
        assert!(!trim_trailing_summary_row(&mut table));
    }

    #[test]
    fn only_one_trailing_row_is_considered() {
        let headers = vec!["a".into(), "b".into()];
        let mut table = Table::new(headers);
        table.push_row(vec![Cell::Empty, Cell::Empty]);
        table.push_row(vec![Cell::Empty, Cell::Empty]);
        assert!(trim_trailing_summary_row(&mut table));
        // the new last row is just as blank but the check is not recursive
        assert_eq!(table.row_count(), 1);
    }
}
