//! Toast queue: append-ordered entries that each expire on their own timer.
//!
//! # Design
//! - Each entry carries its own deadline; there is no central scheduler.
//! - The queue is unbounded and ordered by insertion.

use std::fmt;
use uuid::Uuid;

/// Lifetime applied when a toast does not set its own duration.
pub const DEFAULT_DURATION_MS: u32 = 5_000;

/// Random identifier for a queued toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ToastId(Uuid);

impl ToastId {
    /// Generate a fresh random id.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// Caller-supplied toast content before an id is assigned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastDraft {
    /// Optional heading.
    pub title: Option<String>,
    /// Optional body text.
    pub description: Option<String>,
    /// Lifetime override in milliseconds.
    pub duration_ms: Option<u32>,
}

impl ToastDraft {
    /// Draft with a title only.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Set the body text.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Override the lifetime.
    #[must_use]
    pub const fn with_duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Queued toast.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastEntry {
    /// Unique id.
    pub id: ToastId,
    /// Optional heading.
    pub title: Option<String>,
    /// Optional body text.
    pub description: Option<String>,
    /// Lifetime in milliseconds.
    pub duration_ms: u32,
    /// Enqueue timestamp in epoch milliseconds.
    pub created_at_ms: f64,
}

impl ToastEntry {
    /// Timestamp at which the entry should be gone.
    #[must_use]
    pub fn expires_at_ms(&self) -> f64 {
        self.created_at_ms + f64::from(self.duration_ms)
    }

    /// Milliseconds left before expiry, clamped at zero.
    #[must_use]
    pub fn remaining_ms(&self, now_ms: f64) -> u32 {
        let remaining = (self.expires_at_ms() - now_ms).max(0.0).ceil();
        if remaining >= f64::from(u32::MAX) {
            u32::MAX
        } else {
            // Clamped to 0..u32::MAX above.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let ms = remaining as u32;
            ms
        }
    }
}
/// Insertion-ordered toast collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue {
    entries: Vec<ToastEntry>,
}

impl ToastQueue {
    /// Append a toast with a generated id; drafts without a duration get [`DEFAULT_DURATION_MS`].
    pub fn enqueue(&mut self, draft: ToastDraft, now_ms: f64) -> ToastId {
        let id = ToastId::random();
        self.entries.push(ToastEntry {
            id,
            title: draft.title,
            description: draft.description,
            duration_ms: draft.duration_ms.unwrap_or(DEFAULT_DURATION_MS),
            created_at_ms: now_ms,
        });
        id
    }

    /// Remove the toast with `id`; returns whether anything was removed.
    pub fn dequeue(&mut self, id: ToastId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        before != self.entries.len()
    }

    /// Entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }

    /// Whether the queue is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
