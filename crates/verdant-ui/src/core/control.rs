//! Controlled versus uncontrolled value ownership.
//!
//! # Design
//! - The mode is chosen by constructor, never inferred from an optional prop.
//! - The first observed mode is pinned; later switches are rejected and reported.

use crate::error::UiError;
use std::fmt;
use yew::Callback;

/// Who owns a widget's authoritative value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlMode {
    /// The caller supplies the value and a change handler.
    Controlled,
    /// The widget owns the value and optionally notifies the caller.
    Uncontrolled,
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Controlled => "controlled",
            Self::Uncontrolled => "uncontrolled",
        })
    }
}

/// Value source for a widget prop, fixed at construction.
#[derive(Clone, Debug, PartialEq)]
pub enum Controllable<T: 'static> {
    /// Caller-owned value.
    Controlled {
        /// Current value supplied by the caller.
        value: T,
        /// Receives every requested change.
        on_change: Callback<T>,
    },
    /// Widget-owned value seeded from `default`.
    Uncontrolled {
        /// Initial value.
        default: T,
        /// Optional observer for changes.
        on_change: Option<Callback<T>>,
    },
}

impl<T: Default + 'static> Default for Controllable<T> {
    fn default() -> Self {
        Self::uncontrolled(T::default())
    }
}

impl<T: 'static> Controllable<T> {
    /// Caller-owned value with its change handler.
    #[must_use]
    pub const fn controlled(value: T, on_change: Callback<T>) -> Self {
        Self::Controlled { value, on_change }
    }

    /// Widget-owned value starting at `default`.
    #[must_use]
    pub const fn uncontrolled(default: T) -> Self {
        Self::Uncontrolled {
            default,
            on_change: None,
        }
    }

    /// Attach a change observer to an uncontrolled source; controlled sources keep their handler.
    #[must_use]
    pub fn observed(self, observer: Callback<T>) -> Self {
        match self {
            Self::Uncontrolled { default, .. } => Self::Uncontrolled {
                default,
                on_change: Some(observer),
            },
            controlled @ Self::Controlled { .. } => controlled,
        }
    }

    /// Mode implied by the constructor.
    #[must_use]
    pub const fn mode(&self) -> ControlMode {
        match self {
            Self::Controlled { .. } => ControlMode::Controlled,
            Self::Uncontrolled { .. } => ControlMode::Uncontrolled,
        }
    }

    /// Value carried by the source: the controlled value or the uncontrolled default.
    #[must_use]
    pub const fn seed(&self) -> &T {
        match self {
            Self::Controlled { value, .. } => value,
            Self::Uncontrolled { default, .. } => default,
        }
    }

    /// Change handler registered by the caller, if any.
    #[must_use]
    pub const fn on_change(&self) -> Option<&Callback<T>> {
        match self {
            Self::Controlled { on_change, .. } => Some(on_change),
            Self::Uncontrolled { on_change, .. } => on_change.as_ref(),
        }
    }
}

/// Remembers the first observed mode of a widget instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModeLatch {
    pinned: Option<ControlMode>,
}

impl ModeLatch {
    /// Record `mode`, pinning it on first use.
    ///
    /// # Errors
    /// Returns [`UiError::ModeSwitched`] when `mode` differs from the pinned mode.
    /// The pinned mode is left unchanged.
    pub fn observe(&mut self, widget: &'static str, mode: ControlMode) -> Result<ControlMode, UiError> {
        match self.pinned {
            None => {
                self.pinned = Some(mode);
                Ok(mode)
            }
            Some(pinned) if pinned == mode => Ok(pinned),
            Some(pinned) => Err(UiError::ModeSwitched {
                widget,
                from: pinned,
                to: mode,
            }),
        }
    }

    /// Mode pinned so far.
    #[must_use]
    pub const fn pinned(&self) -> Option<ControlMode> {
        self.pinned
    }
}

/// Resolve the value a widget should display under the pinned `mode`.
///
/// `internal` is the widget-owned value and `last_controlled` the most recent
/// value received while controlled. When the props no longer match the pinned
/// mode, the pinned source keeps driving the widget.
#[must_use]
pub fn resolve_value<T: Clone + 'static>(
    mode: ControlMode,
    source: &Controllable<T>,
    internal: &T,
    last_controlled: Option<&T>,
) -> T {
    match (mode, source) {
        (ControlMode::Controlled, Controllable::Controlled { value, .. }) => value.clone(),
        (ControlMode::Controlled, Controllable::Uncontrolled { default, .. }) => {
            last_controlled.unwrap_or(default).clone()
        }
        (ControlMode::Uncontrolled, _) => internal.clone(),
    }
}

/// Value that events arriving between renders build on.
///
/// Uncontrolled widgets chain proposals so a burst of events composes.
/// Controlled widgets always start from the value the caller rendered, since
/// the caller may refuse any proposal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingValue<T> {
    rendered: T,
    proposed: Option<T>,
}

impl<T: Clone> PendingValue<T> {
    /// Start from the value of the first render.
    #[must_use]
    pub const fn new(rendered: T) -> Self {
        Self {
            rendered,
            proposed: None,
        }
    }

    /// Adopt the value just rendered and drop any outstanding proposal.
    pub fn sync(&mut self, rendered: T) {
        self.rendered = rendered;
        self.proposed = None;
    }

    /// Value the next event should build on under `mode`.
    #[must_use]
    pub const fn base(&self, mode: ControlMode) -> &T {
        match (mode, &self.proposed) {
            (ControlMode::Uncontrolled, Some(proposed)) => proposed,
            _ => &self.rendered,
        }
    }

    /// Record `next` as requested and hand it back; only uncontrolled widgets keep it.
    pub fn propose(&mut self, mode: ControlMode, next: T) -> T {
        if mode == ControlMode::Uncontrolled {
            self.proposed = Some(next.clone());
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_pins_first_mode() {
        let mut latch = ModeLatch::default();
        assert_eq!(
            latch.observe("Dialog", ControlMode::Uncontrolled).ok(),
            Some(ControlMode::Uncontrolled)
        );
        assert_eq!(
            latch.observe("Dialog", ControlMode::Uncontrolled).ok(),
            Some(ControlMode::Uncontrolled)
        );
        assert_eq!(latch.pinned(), Some(ControlMode::Uncontrolled));
    }

    #[test]
    fn latch_rejects_switch_and_keeps_pin() {
        let mut latch = ModeLatch::default();
        latch
            .observe("Dropdown", ControlMode::Controlled)
            .expect("first observation");
        let err = latch
            .observe("Dropdown", ControlMode::Uncontrolled)
            .unwrap_err();
        assert!(matches!(
            err,
            UiError::ModeSwitched {
                widget: "Dropdown",
                from: ControlMode::Controlled,
                to: ControlMode::Uncontrolled,
            }
        ));
        assert_eq!(latch.pinned(), Some(ControlMode::Controlled));
    }

    #[test]
    fn constructors_fix_mode() {
        let controlled = Controllable::controlled(true, Callback::from(|_: bool| ()));
        assert_eq!(controlled.mode(), ControlMode::Controlled);
        assert!(controlled.on_change().is_some());

        let uncontrolled = Controllable::uncontrolled(false);
        assert_eq!(uncontrolled.mode(), ControlMode::Uncontrolled);
        assert!(uncontrolled.on_change().is_none());
        assert!(!*uncontrolled.seed());

        let observed = uncontrolled.observed(Callback::from(|_: bool| ()));
        assert!(observed.on_change().is_some());
        assert_eq!(observed.mode(), ControlMode::Uncontrolled);
    }

    #[test]
    fn controlled_value_wins_only_when_pinned_controlled() {
        let controlled = Controllable::controlled(7, Callback::from(|_: i32| ()));
        assert_eq!(
            resolve_value(ControlMode::Controlled, &controlled, &1, None),
            7
        );
        assert_eq!(
            resolve_value(ControlMode::Uncontrolled, &controlled, &1, Some(&7)),
            1
        );
    }

    #[test]
    fn pinned_controlled_falls_back_to_last_value_after_switch() {
        let switched = Controllable::uncontrolled(0);
        assert_eq!(
            resolve_value(ControlMode::Controlled, &switched, &3, Some(&9)),
            9
        );
        assert_eq!(resolve_value(ControlMode::Controlled, &switched, &3, None), 0);
    }

    fn appended(current: &[u8], value: u8) -> Vec<u8> {
        let mut next = current.to_vec();
        next.push(value);
        next
    }

    #[test]
    fn controlled_proposals_restart_from_rendered_value() {
        let mut pending = PendingValue::new(vec![1, 2]);
        let mode = ControlMode::Controlled;

        let next = appended(pending.base(mode), 3);
        let first = pending.propose(mode, next);
        assert_eq!(first, vec![1, 2, 3]);
        // The caller refused; the next event still starts from [1, 2].
        let next = appended(pending.base(mode), 4);
        let second = pending.propose(mode, next);
        assert_eq!(second, vec![1, 2, 4]);

        pending.sync(vec![1, 2, 4]);
        assert_eq!(pending.base(mode), &vec![1, 2, 4]);
    }

    #[test]
    fn uncontrolled_proposals_chain_until_next_render() {
        let mut pending = PendingValue::new(vec![1]);
        let mode = ControlMode::Uncontrolled;

        let next = appended(pending.base(mode), 2);
        let first = pending.propose(mode, next);
        let next = appended(pending.base(mode), 3);
        let second = pending.propose(mode, next);
        assert_eq!(first, vec![1, 2]);
        assert_eq!(second, vec![1, 2, 3]);

        pending.sync(vec![9]);
        assert_eq!(pending.base(mode), &vec![9]);
    }
}
