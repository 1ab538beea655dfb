//! Sort keys and the sort state machine for the dashboard table.

/// A sortable column of the users table.
///
/// Exactly the four row fields. An out-of-range key is unrepresentable,
/// so sorting has no runtime error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    User,
    Role,
    Date,
}

impl SortKey {
    /// All keys, in column display order.
    pub const ALL: [SortKey; 4] = [SortKey::Id, SortKey::User, SortKey::Role, SortKey::Date];

    /// Column header label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::User => "USER",
            SortKey::Role => "ROLE",
            SortKey::Date => "DATE",
        }
    }

    /// Maps the `1`–`4` shortcut keys to a column.
    #[must_use]
    pub const fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(SortKey::Id),
            '2' => Some(SortKey::User),
            '3' => Some(SortKey::Role),
            '4' => Some(SortKey::Date),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }
}

/// The active sort column and direction.
///
/// Starts `Unsorted` (rows shown in fetch order) and is replaced wholesale
/// on every header activation; it is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortState {
    #[default]
    Unsorted,
    By { key: SortKey, direction: Direction },
}

impl SortState {
    /// The state after activating the header for `key`.
    ///
    /// Activating the column that is already sorted ascending flips it to
    /// descending. Every other activation (including a different column)
    /// yields ascending on `key`.
    #[must_use]
    pub fn activate(self, key: SortKey) -> Self {
        let direction = match self {
            SortState::By {
                key: active,
                direction: Direction::Ascending,
            } if active == key => Direction::Descending,
            _ => Direction::Ascending,
        };
        SortState::By { key, direction }
    }

    /// The sort direction for `key`, if `key` is the active column.
    #[must_use]
    pub fn direction_of(self, key: SortKey) -> Option<Direction> {
        match self {
            SortState::By {
                key: active,
                direction,
            } if active == key => Some(direction),
            _ => None,
        }
    }
}
