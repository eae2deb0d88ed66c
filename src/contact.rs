//! Contact record and draft types.

use serde::{Deserialize, Serialize};

use crate::types::{Column, ContactId};

/// The five free-text fields of a contact, without an id.
///
/// Used both as the add/update payload and as the editor's field buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactDraft {
    /// Station callsign. The store accepts the empty string.
    pub callsign: String,
    /// Frequency, kept as entered.
    pub frequency: String,
    /// Emission mode, e.g. "SSB" or "CW".
    pub mode: String,
    /// Date, kept as entered.
    pub date: String,
    /// Time, kept as entered.
    pub time: String,
}

impl ContactDraft {
    /// Builds a draft from the five field values.
    pub fn new(
        callsign: impl Into<String>,
        frequency: impl Into<String>,
        mode: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            callsign: callsign.into(),
            frequency: frequency.into(),
            mode: mode.into(),
            date: date.into(),
            time: time.into(),
        }
    }

    /// Returns true when every field is empty.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Resets every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// One persisted row of the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Store-assigned identifier, never reused.
    pub id: ContactId,
    /// Station callsign.
    pub callsign: String,
    /// Frequency text.
    pub frequency: String,
    /// Mode text.
    pub mode: String,
    /// Date text.
    pub date: String,
    /// Time text.
    pub time: String,
}

impl ContactRecord {
    /// Combines a store-assigned id with draft fields.
    pub fn from_draft(id: ContactId, draft: ContactDraft) -> Self {
        Self {
            id,
            callsign: draft.callsign,
            frequency: draft.frequency,
            mode: draft.mode,
            date: draft.date,
            time: draft.time,
        }
    }

    /// Copies the editable fields out of this record.
    pub fn to_draft(&self) -> ContactDraft {
        ContactDraft {
            callsign: self.callsign.clone(),
            frequency: self.frequency.clone(),
            mode: self.mode.clone(),
            date: self.date.clone(),
            time: self.time.clone(),
        }
    }

    /// Text for a text column. Returns `None` for [`Column::Id`].
    pub fn text(&self, column: Column) -> Option<&str> {
        match column {
            Column::Id => None,
            Column::Callsign => Some(&self.callsign),
            Column::Frequency => Some(&self.frequency),
            Column::Mode => Some(&self.mode),
            Column::Date => Some(&self.date),
            Column::Time => Some(&self.time),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_round_trips_through_record() {
        let draft = ContactDraft::new("W1AW", "14.250", "SSB", "2024-01-01", "12:00");
        let rec = ContactRecord::from_draft(7, draft.clone());
        assert_eq!(rec.id, 7);
        assert_eq!(rec.to_draft(), draft);
        assert_eq!(rec.text(Column::Mode), Some("SSB"));
        assert_eq!(rec.text(Column::Id), None);
    }

    #[test]
    fn clear_empties_every_field() {
        let mut draft = ContactDraft::new("K1ABC", "7.020", "CW", "2024-02-02", "01:00");
        assert!(!draft.is_empty());
        draft.clear();
        assert!(draft.is_empty());
    }
}
