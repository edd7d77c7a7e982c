//! Row selection for table views.
//!
//! Selected rows behave like persistent indexes: they follow inserts,
//! removals and moves reported by the model.

use std::collections::BTreeSet;

/// Rows that entered and left the selection in one update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionChange {
    pub selected: Vec<usize>,
    pub deselected: Vec<usize>,
}

impl SelectionChange {
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && self.deselected.is_empty()
    }
}

/// Set of selected row indices.
#[derive(Debug, Clone, Default)]
pub struct TableSelection {
    rows: BTreeSet<usize>,
}

impl TableSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected rows in ascending order.
    pub fn selected_rows(&self) -> Vec<usize> {
        self.rows.iter().copied().collect()
    }

    /// Lowest selected row.
    pub fn first(&self) -> Option<usize> {
        self.rows.first().copied()
    }

    pub fn is_selected(&self, row: usize) -> bool {
        self.rows.contains(&row)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Clear and select a single row.
    pub fn select_row(&mut self, row: usize) -> SelectionChange {
        self.replace(BTreeSet::from([row]))
    }

    /// Clear and select every row in `rows`.
    pub fn select_rows(&mut self, rows: impl IntoIterator<Item = usize>) -> SelectionChange {
        self.replace(rows.into_iter().collect())
    }

    pub fn clear(&mut self) -> SelectionChange {
        self.replace(BTreeSet::new())
    }

    fn replace(&mut self, next: BTreeSet<usize>) -> SelectionChange {
        let change = SelectionChange {
            selected: next.difference(&self.rows).copied().collect(),
            deselected: self.rows.difference(&next).copied().collect(),
        };
        self.rows = next;
        change
    }

    /// Shift rows at or after `first` down by the inserted count.
    pub fn rows_inserted(&mut self, first: usize, last: usize) {
        let count = last + 1 - first;
        self.remap(|row| Some(if row >= first { row + count } else { row }));
    }

    /// Drop removed rows and shift later rows up. The change lists the
    /// dropped rows by their old index.
    pub fn rows_removed(&mut self, first: usize, last: usize) -> SelectionChange {
        let count = last + 1 - first;
        let deselected: Vec<usize> = self.rows.range(first..=last).copied().collect();
        self.remap(|row| match row {
            r if r < first => Some(r),
            r if r <= last => None,
            r => Some(r - count),
        });
        SelectionChange {
            selected: Vec::new(),
            deselected,
        }
    }

    /// Follow a single row moving from `from` to `to` (post-move index).
    pub fn row_moved(&mut self, from: usize, to: usize) {
        self.remap(|row| {
            Some(if row == from {
                to
            } else if from < to && row > from && row <= to {
                row - 1
            } else if to < from && row >= to && row < from {
                row + 1
            } else {
                row
            })
        });
    }

    fn remap(&mut self, f: impl Fn(usize) -> Option<usize>) {
        self.rows = self.rows.iter().filter_map(|&row| f(row)).collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_reports_delta() {
        let mut selection = TableSelection::new();
        let change = selection.select_rows([1, 3]);
        assert_eq!(change.selected, vec![1, 3]);
        assert!(change.deselected.is_empty());

        let change = selection.select_row(3);
        assert!(change.selected.is_empty());
        assert_eq!(change.deselected, vec![1]);

        assert!(selection.select_row(3).is_empty());
        let change = selection.clear();
        assert_eq!(change.deselected, vec![3]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_follows_insert_and_remove() {
        let mut selection = TableSelection::new();
        selection.select_row(2);
        selection.rows_inserted(0, 1);
        assert_eq!(selection.selected_rows(), vec![4]);

        let change = selection.rows_removed(0, 0);
        assert!(change.is_empty());
        assert_eq!(selection.selected_rows(), vec![3]);

        let change = selection.rows_removed(3, 3);
        assert_eq!(change.deselected, vec![3]);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_follows_moves() {
        let mut selection = TableSelection::new();
        selection.select_row(0);
        selection.row_moved(0, 2);
        assert_eq!(selection.first(), Some(2));

        selection.select_row(1);
        selection.row_moved(3, 0);
        assert_eq!(selection.first(), Some(2));

        selection.select_row(2);
        selection.row_moved(0, 2);
        assert_eq!(selection.first(), Some(1));
    }
}
