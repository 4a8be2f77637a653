//! Application-scoped yewdux stores for toasts and message dialogs.
//!
//! # Design
//! - Stores live in the yewdux context created by the application root, not in module globals.
//! - Reducer methods hold all the logic so they can be exercised without a browser.

use crate::core::dialog::DialogState;
use crate::core::toast::{ToastDraft, ToastId, ToastQueue};
use yew::Callback;
use yewdux::store::Store;

/// Queue of visible toasts.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ToastStore {
    /// Entries in display order.
    pub queue: ToastQueue,
}

impl ToastStore {
    /// Append a toast enqueued at `now_ms` and return its id.
    pub fn add_toast(&mut self, draft: ToastDraft, now_ms: f64) -> ToastId {
        self.queue.enqueue(draft, now_ms)
    }

    /// Remove a toast by id.
    pub fn remove_toast(&mut self, id: ToastId) -> bool {
        self.queue.dequeue(id)
    }
}

/// Single application-wide alert message.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AlertDialogStore {
    /// Open flag and text.
    pub dialog: DialogState<()>,
}

impl AlertDialogStore {
    /// Set the open flag.
    pub fn set_open(&mut self, open: bool) {
        self.dialog.set_open(open);
    }

    /// Open the alert with a title and description.
    pub fn set_alert(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.dialog.show(title, description, None);
    }

    /// Close the alert and reset its text.
    pub fn clear_alert(&mut self) {
        self.dialog.clear();
    }
}

/// Single application-wide confirmation prompt.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct ConfirmDialogStore {
    /// Open flag, text and the callback to run on confirm.
    pub dialog: DialogState<Callback<()>>,
}

impl ConfirmDialogStore {
    /// Set the open flag.
    pub fn set_open(&mut self, open: bool) {
        self.dialog.set_open(open);
    }

    /// Open the prompt with text and the action to run on confirm.
    pub fn set_confirm(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        on_confirm: Callback<()>,
    ) {
        self.dialog.show(title, description, Some(on_confirm));
    }

    /// Close the prompt and drop the pending action.
    pub fn clear_confirm(&mut self) {
        self.dialog.clear();
    }

    /// Clear the prompt and hand back its action.
    ///
    /// The caller runs the action once the reducer has returned, so an action that opens
    /// another prompt is not wiped by this clear.
    #[must_use]
    pub fn confirm(&mut self) -> Option<Callback<()>> {
        let action = self.dialog.take_action();
        self.dialog.clear();
        action
    }
}

/// Enqueue a toast stamped with the browser clock.
#[cfg(target_arch = "wasm32")]
pub fn push_toast(dispatch: &yewdux::Dispatch<ToastStore>, draft: ToastDraft) {
    let now = js_sys::Date::now();
    dispatch.reduce_mut(|store| {
        store.add_toast(draft, now);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn toast_store_adds_and_removes() {
        let mut store = ToastStore::default();
        let id = store.add_toast(ToastDraft::titled("hello"), 0.0);
        assert_eq!(store.queue.entries().len(), 1);
        assert!(store.remove_toast(id));
        assert!(store.queue.is_empty());
    }

    #[test]
    fn alert_store_set_and_clear() {
        let mut store = AlertDialogStore::default();
        store.set_alert("Network", "Request timed out");
        assert!(store.dialog.open);
        assert_eq!(store.dialog.title, "Network");
        store.set_open(false);
        assert!(!store.dialog.open);
        assert_eq!(store.dialog.description, "Request timed out");
        store.clear_alert();
        assert_eq!(store, AlertDialogStore::default());
    }

    #[test]
    fn confirm_hands_back_action_once_and_clears() {
        let calls = Rc::new(Cell::new(0));
        let mut store = ConfirmDialogStore::default();
        let counter = calls.clone();
        store.set_confirm(
            "Delete",
            "Remove this item?",
            Callback::from(move |()| counter.set(counter.get() + 1)),
        );
        assert!(store.dialog.open);
        let action = store.confirm();
        assert_eq!(calls.get(), 0);
        assert!(store.confirm().is_none());
        if let Some(action) = action {
            action.emit(());
        }
        assert_eq!(calls.get(), 1);
        assert!(!store.dialog.open);
        assert!(store.dialog.title.is_empty());
    }

    #[test]
    fn clear_confirm_drops_action_without_running() {
        let calls = Rc::new(Cell::new(0));
        let mut store = ConfirmDialogStore::default();
        let counter = calls.clone();
        store.set_confirm(
            "Leave",
            "Discard draft?",
            Callback::from(move |()| counter.set(counter.get() + 1)),
        );
        store.clear_confirm();
        assert!(store.confirm().is_none());
        assert_eq!(calls.get(), 0);
    }
}
