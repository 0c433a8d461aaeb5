//! Admin Working State
//!
//! The admin page edits a working copy of the document and only writes it
//! to the content store on save. Uses Leptos reactive_stores for
//! fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::editor::{apply, EditCommand, EditError};
use crate::models::SiteContent;
use crate::storage::StoreError;

/// Outcome of the last save, shown in the dashboard's status line
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saved,
    Failed(String),
}

impl SaveStatus {
    pub fn message(&self) -> Option<String> {
        match self {
            SaveStatus::Idle => None,
            SaveStatus::Saved => Some("تم حفظ التغييرات بنجاح!".to_string()),
            SaveStatus::Failed(reason) => Some(format!("تعذر حفظ التغييرات: {}", reason)),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SaveStatus::Failed(_))
    }
}

#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Document being edited
    pub working: SiteContent,
    /// Last version known to be in the content store
    pub saved: SiteContent,
    pub status: SaveStatus,
    /// Error from the last rejected edit
    pub edit_error: Option<String>,
}

impl AdminState {
    pub fn new(doc: SiteContent) -> Self {
        Self {
            working: doc.clone(),
            saved: doc,
            ..Default::default()
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.working != self.saved
    }

    pub fn apply(&mut self, command: &EditCommand, clock_ms: u64) -> Result<(), EditError> {
        self.working = apply(&self.working, command, clock_ms)?;
        self.status = SaveStatus::Idle;
        self.edit_error = None;
        Ok(())
    }

    pub fn replace_working(&mut self, doc: SiteContent) {
        self.working = doc;
        self.status = SaveStatus::Idle;
        self.edit_error = None;
    }

    /// Record the result of writing `working` to the store
    pub fn record_save(&mut self, result: Result<(), StoreError>) {
        match result {
            Ok(()) => {
                self.saved = self.working.clone();
                self.status = SaveStatus::Saved;
            }
            Err(err) => self.status = SaveStatus::Failed(err.to_string()),
        }
    }
}

pub type AdminStore = Store<AdminState>;

pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Apply an edit to the working copy, keeping a rejection for display
pub fn store_apply(store: &AdminStore, command: &EditCommand, clock_ms: u64) {
    store.update(|state| {
        if let Err(err) = state.apply(command, clock_ms) {
            log::warn!("edit rejected: {}", err);
            state.edit_error = Some(err.to_string());
        }
    });
}

pub fn store_replace_working(store: &AdminStore, doc: SiteContent) {
    store.update(|state| state.replace_working(doc));
}

pub fn store_record_save(store: &AdminStore, result: Result<(), StoreError>) {
    if let Err(err) = &result {
        log::error!("save failed: {}", err);
    }
    store.update(|state| state.record_save(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{Field, ListSection};

    fn set_title(value: &str) -> EditCommand {
        EditCommand::SetField {
            field: Field::HeroTitle,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_edit_makes_state_dirty() {
        let mut state = AdminState::new(SiteContent::default());
        assert!(!state.is_dirty());

        state.apply(&set_title("منسج"), 0).unwrap();
        assert!(state.is_dirty());
        assert_eq!(state.working.hero.title, "منسج");
        assert_eq!(state.saved, SiteContent::default());
    }

    #[test]
    fn test_successful_save_clears_dirty() {
        let mut state = AdminState::new(SiteContent::default());
        state.apply(&EditCommand::AddItem { section: ListSection::Store }, 99).unwrap();
        state.record_save(Ok(()));
        assert!(!state.is_dirty());
        assert_eq!(state.status, SaveStatus::Saved);
        assert!(state.status.message().is_some());
    }

    #[test]
    fn test_failed_save_keeps_edits() {
        let mut state = AdminState::new(SiteContent::default());
        state.apply(&set_title("x"), 0).unwrap();
        state.record_save(Err(StoreError::Write("QuotaExceededError".to_string())));
        assert!(state.is_dirty());
        assert!(state.status.is_error());
        assert!(state.status.message().unwrap().contains("QuotaExceededError"));
    }

    #[test]
    fn test_rejected_edit_leaves_working_copy() {
        let mut state = AdminState::new(SiteContent::default());
        let err = state
            .apply(&EditCommand::RemoveItem { section: ListSection::Clients, id: 12345 }, 0)
            .unwrap_err();
        assert!(matches!(err, EditError::ItemNotFound { .. }));
        assert!(!state.is_dirty());
    }

    #[test]
    fn test_next_edit_resets_status() {
        let mut state = AdminState::new(SiteContent::default());
        state.record_save(Ok(()));
        state.apply(&set_title("y"), 0).unwrap();
        assert_eq!(state.status, SaveStatus::Idle);
    }
}
