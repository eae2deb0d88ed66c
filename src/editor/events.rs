//! Results emitted by editor actions.

use crate::types::ContactId;

/// What a successful editor action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// A new contact was stored.
    Added {
        /// Store-assigned id.
        id: ContactId,
    },
    /// The selected contact was overwritten.
    Modified {
        /// Modified contact id.
        id: ContactId,
    },
    /// The selected contact was removed.
    Deleted {
        /// Removed contact id.
        id: ContactId,
    },
    /// A row was loaded into the edit fields.
    Selected {
        /// Selected contact id.
        id: ContactId,
    },
}
