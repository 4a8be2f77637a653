//! Message state behind the application-level alert and confirm dialogs.

/// Open flag, text and an optional pending action for a message dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogState<A> {
    /// Whether the dialog is visible.
    pub open: bool,
    /// Heading text.
    pub title: String,
    /// Body text.
    pub description: String,
    action: Option<A>,
}

impl<A> Default for DialogState<A> {
    fn default() -> Self {
        Self {
            open: false,
            title: String::new(),
            description: String::new(),
            action: None,
        }
    }
}

impl<A> DialogState<A> {
    /// Set the open flag without touching the text.
    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Open the dialog with new text and an optional action.
    pub fn show(&mut self, title: impl Into<String>, description: impl Into<String>, action: Option<A>) {
        self.open = true;
        self.title = title.into();
        self.description = description.into();
        self.action = action;
    }

    /// Close the dialog and reset every field to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Remove and return the pending action.
    pub fn take_action(&mut self) -> Option<A> {
        self.action.take()
    }
}
