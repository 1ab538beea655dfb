//! Interactive state for the users table.

use sysdash_types::{Direction, SortKey, SortState, UserRow};

use crate::sort::sort_rows;

/// The list view: displayed rows, active sort, and the header focus cursor.
///
/// Rows start in fetch order (`SortState::Unsorted`). Each header
/// activation replaces the sort state and reorders the currently displayed
/// sequence, so the view is always a permutation of the fetched rows.
#[derive(Debug, Clone)]
pub struct UserTable {
    rows: Vec<UserRow>,
    sort: SortState,
    focused: usize,
}

impl UserTable {
    #[must_use]
    pub fn new(rows: Vec<UserRow>) -> Self {
        Self {
            rows,
            sort: SortState::Unsorted,
            focused: 0,
        }
    }

    #[must_use]
    pub fn rows(&self) -> &[UserRow] {
        &self.rows
    }

    #[must_use]
    pub fn sort(&self) -> SortState {
        self.sort
    }

    /// The column the header focus cursor is on.
    #[must_use]
    pub fn focused_key(&self) -> SortKey {
        SortKey::ALL[self.focused]
    }

    pub fn focus_left(&mut self) {
        if self.focused == 0 {
            self.focused = SortKey::ALL.len() - 1;
        } else {
            self.focused -= 1;
        }
    }

    pub fn focus_right(&mut self) {
        self.focused = (self.focused + 1) % SortKey::ALL.len();
    }

    /// Header activation on `key`: toggle/reset the sort state per the
    /// column rules and re-sort the displayed rows.
    pub fn activate(&mut self, key: SortKey) {
        self.sort = self.sort.activate(key);
        if let SortState::By { key, direction } = self.sort {
            sort_rows(&mut self.rows, key, direction);
        }
        if let Some(index) = SortKey::ALL.iter().position(|k| *k == key) {
            self.focused = index;
        }
    }

    /// Header activation on the focused column.
    pub fn activate_focused(&mut self) {
        self.activate(self.focused_key());
    }

    /// The direction glyph slot for `key`: set only on the active column.
    #[must_use]
    pub fn indicator(&self, key: SortKey) -> Option<Direction> {
        self.sort.direction_of(key)
    }
}
