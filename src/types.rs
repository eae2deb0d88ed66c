//! Shared primitive IDs and column enums.

use serde::{Deserialize, Serialize};

/// Store-assigned contact identifier (the SQLite rowid).
pub type ContactId = i64;

/// One column of the `logs` table as shown in the record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    /// Store-assigned id.
    Id,
    /// Station callsign.
    Callsign,
    /// Frequency text.
    Frequency,
    /// Mode text.
    Mode,
    /// Date text.
    Date,
    /// Time text.
    Time,
}

impl Column {
    /// All columns in display order.
    pub const ALL: [Column; 6] = [
        Column::Id,
        Column::Callsign,
        Column::Frequency,
        Column::Mode,
        Column::Date,
        Column::Time,
    ];

    /// Heading text for the record list.
    pub fn heading(self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::Callsign => "Callsign",
            Column::Frequency => "Frequency",
            Column::Mode => "Mode",
            Column::Date => "Date",
            Column::Time => "Time",
        }
    }
}

/// Sort direction for the record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}
