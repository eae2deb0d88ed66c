use crate::{
    contact::{ContactDraft, ContactRecord},
    persist::{ContactStore, StoreError},
    types::ContactId,
};

use super::events::EditorEvent;

/// Actions that require a selected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedAction {
    /// Overwrite the selected record.
    Modify,
    /// Remove the selected record.
    Delete,
}

impl GuardedAction {
    fn verb(self) -> &'static str {
        match self {
            GuardedAction::Modify => "modify",
            GuardedAction::Delete => "delete",
        }
    }
}

/// Why an editor action did not complete.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// Modify or delete with no row selected. Shown to the user as a warning.
    #[error("Please select an entry to {}.", .0.verb())]
    NothingSelected(GuardedAction),
    /// Selection named an id that is not in the displayed list.
    #[error("no row with id {0} in the record list")]
    UnknownRow(ContactId),
    /// Storage fault, fatal for the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl EditorError {
    /// Title of the warning dialog for user-guidance errors.
    pub const WARNING_TITLE: &'static str = "Select Entry";

    /// Returns true for conditions shown to the user as a warning rather than
    /// treated as a fault.
    pub fn is_user_warning(&self) -> bool {
        matches!(self, EditorError::NothingSelected(_))
    }
}

/// Result alias for editor actions.
pub type EditorResult<T> = Result<T, EditorError>;

/// Typed entry points the window invokes.
pub trait LogActions {
    /// Stores the current fields as a new contact.
    fn on_add(&mut self) -> EditorResult<EditorEvent>;
    /// Overwrites the selected contact with the current fields.
    fn on_modify(&mut self) -> EditorResult<EditorEvent>;
    /// Removes the selected contact.
    fn on_delete(&mut self) -> EditorResult<EditorEvent>;
    /// Loads row `id` into the fields and selects it.
    fn on_select(&mut self, id: ContactId) -> EditorResult<EditorEvent>;
}

/// Controller mediating between the log window and a [`ContactStore`].
///
/// Owns the single store handle, the five field buffers and the selection. Every
/// successful mutation clears the fields, drops the selection and re-reads the
/// whole list from the store.
pub struct LogEditor<S: ContactStore> {
    store: S,
    fields: ContactDraft,
    selected: Option<ContactId>,
    rows: Vec<ContactRecord>,
}

impl<S: ContactStore> LogEditor<S> {
    /// Takes ownership of `store` and loads the current list.
    pub fn new(store: S) -> EditorResult<Self> {
        let mut editor = Self {
            store,
            fields: ContactDraft::default(),
            selected: None,
            rows: Vec::new(),
        };
        editor.refresh()?;
        Ok(editor)
    }

    /// Current field buffer.
    pub fn fields(&self) -> &ContactDraft {
        &self.fields
    }

    /// Mutable field buffer, bound to the text inputs.
    pub fn fields_mut(&mut self) -> &mut ContactDraft {
        &mut self.fields
    }

    /// Id of the row loaded into the fields, if any.
    pub fn selected(&self) -> Option<ContactId> {
        self.selected
    }

    /// Displayed list, newest id first.
    pub fn rows(&self) -> &[ContactRecord] {
        &self.rows
    }

    /// Read access to the owned store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Drops the selection and empties the fields.
    pub fn clear_fields(&mut self) {
        self.selected = None;
        self.fields.clear();
    }

    /// Replaces the displayed list with a fresh snapshot from the store.
    pub fn refresh(&mut self) -> EditorResult<()> {
        self.rows = self.store.list_all()?;
        Ok(())
    }

    fn require_selection(&self, action: GuardedAction) -> EditorResult<ContactId> {
        self.selected.ok_or_else(|| {
            log::info!("{} requested with no entry selected", action.verb());
            EditorError::NothingSelected(action)
        })
    }

    fn finish_mutation(&mut self) -> EditorResult<()> {
        self.clear_fields();
        self.refresh()
    }
}

impl<S: ContactStore> LogActions for LogEditor<S> {
    fn on_add(&mut self) -> EditorResult<EditorEvent> {
        let id = self.store.add(&self.fields)?;
        log::info!("added contact {id}: {}", self.fields.callsign);
        self.finish_mutation()?;
        Ok(EditorEvent::Added { id })
    }

    fn on_modify(&mut self) -> EditorResult<EditorEvent> {
        let id = self.require_selection(GuardedAction::Modify)?;
        self.store.update(id, &self.fields)?;
        log::info!("modified contact {id}");
        self.finish_mutation()?;
        Ok(EditorEvent::Modified { id })
    }

    fn on_delete(&mut self) -> EditorResult<EditorEvent> {
        let id = self.require_selection(GuardedAction::Delete)?;
        self.store.delete(id)?;
        log::info!("deleted contact {id}");
        self.finish_mutation()?;
        Ok(EditorEvent::Deleted { id })
    }

    fn on_select(&mut self, id: ContactId) -> EditorResult<EditorEvent> {
        let rec = self
            .rows
            .iter()
            .find(|r| r.id == id)
            .ok_or(EditorError::UnknownRow(id))?;
        self.fields = rec.to_draft();
        self.selected = Some(id);
        Ok(EditorEvent::Selected { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warning_messages_name_the_action() {
        assert_eq!(
            EditorError::NothingSelected(GuardedAction::Modify).to_string(),
            "Please select an entry to modify."
        );
        assert_eq!(
            EditorError::NothingSelected(GuardedAction::Delete).to_string(),
            "Please select an entry to delete."
        );
        assert!(EditorError::NothingSelected(GuardedAction::Delete).is_user_warning());
        assert!(!EditorError::UnknownRow(3).is_user_warning());
    }
}
