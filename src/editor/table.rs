use crate::{
    contact::ContactRecord,
    types::{Column, SortDirection},
};

/// Sort state of the record list.
///
/// Sorting is display-only: it orders a copy of the editor's rows and never
/// reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogTable {
    column: Column,
    direction: SortDirection,
}

impl Default for LogTable {
    fn default() -> Self {
        Self {
            column: Column::Id,
            direction: SortDirection::Descending,
        }
    }
}

impl LogTable {
    /// Column the list is sorted by.
    pub fn column(&self) -> Column {
        self.column
    }

    /// Current sort direction.
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Handles a click on a column heading.
    pub fn click_heading(&mut self, column: Column) {
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            self.column = column;
            self.direction = SortDirection::Ascending;
        }
    }

    /// Heading label with an arrow on the active column.
    pub fn heading_label(&self, column: Column) -> String {
        if column != self.column {
            return column.heading().to_string();
        }
        let arrow = match self.direction {
            SortDirection::Ascending => "▲",
            SortDirection::Descending => "▼",
        };
        format!("{} {arrow}", column.heading())
    }

    /// Returns `rows` ordered for display.
    pub fn sorted(&self, rows: &[ContactRecord]) -> Vec<ContactRecord> {
        let mut out = rows.to_vec();
        out.sort_by_cached_key(|r| (r.text(self.column).map(str::to_lowercase), r.id));
        if self.direction == SortDirection::Descending {
            out.reverse();
        }
        out
    }
}

/// Sorted copy of the editor's rows.
///
/// Rebuilt only when the editor's list changes or a heading is clicked, not on
/// every repaint.
#[derive(Debug, Clone, Default)]
pub struct SortedView {
    table: LogTable,
    rows: Vec<ContactRecord>,
}

impl SortedView {
    /// Builds a view of `rows` in the default order.
    pub fn new(rows: &[ContactRecord]) -> Self {
        let mut view = Self::default();
        view.rebuild(rows);
        view
    }

    /// Current sort state.
    pub fn table(&self) -> &LogTable {
        &self.table
    }

    /// Rows in display order.
    pub fn rows(&self) -> &[ContactRecord] {
        &self.rows
    }

    /// Replaces the view with a sorted copy of `rows`.
    pub fn rebuild(&mut self, rows: &[ContactRecord]) {
        self.rows = self.table.sorted(rows);
    }

    /// Applies a heading click and re-sorts the rows already held.
    pub fn click_heading(&mut self, column: Column) {
        self.table.click_heading(column);
        self.rows = self.table.sorted(&self.rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactDraft;

    fn rec(id: i64, call: &str, mode: &str) -> ContactRecord {
        ContactRecord::from_draft(id, ContactDraft::new(call, "14.000", mode, "", ""))
    }

    fn ids(rows: &[ContactRecord]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn default_is_newest_first() {
        let rows = vec![rec(1, "A", "CW"), rec(3, "C", "CW"), rec(2, "B", "CW")];
        assert_eq!(ids(&LogTable::default().sorted(&rows)), vec![3, 2, 1]);
    }

    #[test]
    fn clicking_same_heading_flips_direction() {
        let mut table = LogTable::default();
        table.click_heading(Column::Id);
        assert_eq!(table.direction(), SortDirection::Ascending);
        table.click_heading(Column::Id);
        assert_eq!(table.direction(), SortDirection::Descending);
    }

    #[test]
    fn text_columns_sort_case_insensitively_with_id_tiebreak() {
        let rows = vec![
            rec(4, "w1aw", "SSB"),
            rec(3, "K1ABC", "cw"),
            rec(2, "W1AW", "CW"),
            rec(1, "AA1A", "FT8"),
        ];
        let mut table = LogTable::default();
        table.click_heading(Column::Callsign);
        assert_eq!(ids(&table.sorted(&rows)), vec![1, 3, 2, 4]);

        table.click_heading(Column::Mode);
        assert_eq!(ids(&table.sorted(&rows)), vec![2, 3, 1, 4]);
        assert_eq!(table.heading_label(Column::Mode), "Mode ▲");
        assert_eq!(table.heading_label(Column::Date), "Date");

        table.click_heading(Column::Mode);
        assert_eq!(ids(&table.sorted(&rows)), vec![4, 1, 3, 2]);
    }

    #[test]
    fn view_holds_sorted_rows_until_rebuilt() {
        let mut rows = vec![rec(2, "K2BBB", "CW"), rec(1, "K1AAA", "SSB")];
        let mut view = SortedView::new(&rows);
        assert_eq!(ids(view.rows()), vec![2, 1]);

        rows.insert(0, rec(3, "AA1A", "FT8"));
        assert_eq!(ids(view.rows()), vec![2, 1]);

        view.click_heading(Column::Callsign);
        assert_eq!(ids(view.rows()), vec![1, 2]);

        view.rebuild(&rows);
        assert_eq!(ids(view.rows()), vec![3, 1, 2]);
        assert_eq!(view.table().column(), Column::Callsign);
    }
}
