//! Table formatting utilities

use prettytable::{Cell, Row, Table};
use unit_harness::Outcome;

/// Create a table with bold headers
pub fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_format(*prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

    let header_cells: Vec<Cell> = headers
        .into_iter()
        .map(|h| Cell::new(h).style_spec("b"))
        .collect();
    table.set_titles(Row::new(header_cells));

    table
}

/// Add a row of plain cells
pub fn add_table_row(table: &mut Table, cells: Vec<String>) {
    let row_cells: Vec<Cell> = cells.into_iter().map(|s| Cell::new(&s)).collect();
    table.add_row(Row::new(row_cells));
}

/// Add a result row: `name` cells, then the coloured status label and the
/// outcome message
pub fn add_outcome_row(table: &mut Table, name: Vec<String>, outcome: &Outcome) {
    let mut row_cells: Vec<Cell> = name.into_iter().map(|s| Cell::new(&s)).collect();
    row_cells.push(Cell::new(outcome.label()).style_spec(outcome_spec(outcome)));
    row_cells.push(Cell::new(outcome.message().unwrap_or_default()));
    table.add_row(Row::new(row_cells));
}

// Colour is applied by prettytable itself, so column widths stay correct
fn outcome_spec(outcome: &Outcome) -> &'static str {
    match outcome {
        Outcome::Passed => "Fg",
        Outcome::Failed(_) => "Frb",
        Outcome::Errored(_) => "Fmb",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_rows() {
        let mut table = create_table(vec!["Class", "Test", "Status", "Message"]);
        add_outcome_row(
            &mut table,
            vec!["BasicTest".into(), "test_failing".into()],
            &Outcome::Failed("2 != 1".into()),
        );
        add_outcome_row(
            &mut table,
            vec!["BasicTest".into(), "test_divide_integers".into()],
            &Outcome::Passed,
        );
        assert_eq!(table.len(), 2);

        let rendered = table.to_string();
        assert!(rendered.contains("test_failing"));
        assert!(rendered.contains("FAIL"));
        assert!(rendered.contains("2 != 1"));
        assert!(rendered.contains("ok"));
    }
}
