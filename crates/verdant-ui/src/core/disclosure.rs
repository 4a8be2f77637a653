//! Binary open/closed state machine shared by dialogs and menus.
//!
//! # Design
//! - Visibility is binary; there are no opening/closing intermediate states.
//! - Which events close a surface depends only on the surface kind.

/// Visibility of a dialog or menu surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Disclosure {
    /// Surface is hidden.
    #[default]
    Closed,
    /// Surface is visible.
    Open,
}

/// Kind of surface driven by the state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceKind {
    /// Modal dialog: trigger opens, Escape closes.
    Dialog,
    /// Single-value menu: trigger toggles, committing a value closes.
    SingleSelectMenu,
    /// Multi-value menu: trigger toggles, stays open across selections.
    MultiSelectMenu,
}

/// Inputs that may move a surface between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureEvent {
    /// The trigger element was activated.
    TriggerActivated,
    /// A confirm action completed.
    Confirmed,
    /// A cancel action completed.
    Cancelled,
    /// Pointer interaction outside the surface (or on the dialog overlay).
    OutsideInteraction,
    /// The Escape key was pressed.
    Escape,
    /// A menu item was committed.
    SelectionCommitted,
}

impl SurfaceKind {
    /// Whether Escape closes this surface.
    #[must_use]
    pub const fn closes_on_escape(self) -> bool {
        matches!(self, Self::Dialog)
    }

    /// Whether committing a selection closes this surface.
    #[must_use]
    pub const fn closes_on_selection(self) -> bool {
        matches!(self, Self::SingleSelectMenu)
    }

    /// Whether the trigger toggles instead of only opening.
    #[must_use]
    pub const fn trigger_toggles(self) -> bool {
        !matches!(self, Self::Dialog)
    }
}

impl From<bool> for Disclosure {
    fn from(open: bool) -> Self {
        if open { Self::Open } else { Self::Closed }
    }
}

impl Disclosure {
    /// Whether the surface is visible.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Apply `event` for a surface of `kind`, returning the next state.
    #[must_use]
    pub const fn apply(self, kind: SurfaceKind, event: DisclosureEvent) -> Self {
        match event {
            DisclosureEvent::TriggerActivated => {
                if kind.trigger_toggles() && self.is_open() {
                    Self::Closed
                } else {
                    Self::Open
                }
            }
            DisclosureEvent::Confirmed
            | DisclosureEvent::Cancelled
            | DisclosureEvent::OutsideInteraction => Self::Closed,
            DisclosureEvent::Escape => {
                if kind.closes_on_escape() {
                    Self::Closed
                } else {
                    self
                }
            }
            DisclosureEvent::SelectionCommitted => {
                if kind.closes_on_selection() {
                    Self::Closed
                } else {
                    self
                }
            }
        }
    }

    /// Apply `event` and report the new state only when it differs.
    #[must_use]
    pub const fn transition(self, kind: SurfaceKind, event: DisclosureEvent) -> Option<Self> {
        let next = self.apply(kind, event);
        if next.is_open() == self.is_open() {
            None
        } else {
            Some(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_trigger_only_opens() {
        let open = Disclosure::Closed.apply(SurfaceKind::Dialog, DisclosureEvent::TriggerActivated);
        assert_eq!(open, Disclosure::Open);
        assert_eq!(
            open.apply(SurfaceKind::Dialog, DisclosureEvent::TriggerActivated),
            Disclosure::Open
        );
    }

    #[test]
    fn menu_trigger_toggles() {
        let kind = SurfaceKind::SingleSelectMenu;
        let open = Disclosure::Closed.apply(kind, DisclosureEvent::TriggerActivated);
        assert_eq!(open, Disclosure::Open);
        assert_eq!(
            open.apply(kind, DisclosureEvent::TriggerActivated),
            Disclosure::Closed
        );
    }

    #[test]
    fn escape_closes_dialog_once_then_is_a_no_op() {
        let kind = SurfaceKind::Dialog;
        assert_eq!(
            Disclosure::Open.transition(kind, DisclosureEvent::Escape),
            Some(Disclosure::Closed)
        );
        assert_eq!(
            Disclosure::Closed.transition(kind, DisclosureEvent::Escape),
            None
        );
    }

    #[test]
    fn escape_does_not_close_menus() {
        assert_eq!(
            Disclosure::Open.apply(SurfaceKind::SingleSelectMenu, DisclosureEvent::Escape),
            Disclosure::Open
        );
        assert_eq!(
            Disclosure::Open.apply(SurfaceKind::MultiSelectMenu, DisclosureEvent::Escape),
            Disclosure::Open
        );
    }

    #[test]
    fn selection_closes_single_but_not_multi_select() {
        assert_eq!(
            Disclosure::Open.apply(
                SurfaceKind::SingleSelectMenu,
                DisclosureEvent::SelectionCommitted
            ),
            Disclosure::Closed
        );
        assert_eq!(
            Disclosure::Open.apply(
                SurfaceKind::MultiSelectMenu,
                DisclosureEvent::SelectionCommitted
            ),
            Disclosure::Open
        );
    }

    #[test]
    fn confirm_cancel_and_outside_always_close() {
        for kind in [
            SurfaceKind::Dialog,
            SurfaceKind::SingleSelectMenu,
            SurfaceKind::MultiSelectMenu,
        ] {
            for event in [
                DisclosureEvent::Confirmed,
                DisclosureEvent::Cancelled,
                DisclosureEvent::OutsideInteraction,
            ] {
                assert_eq!(Disclosure::Open.apply(kind, event), Disclosure::Closed);
            }
        }
    }
}
