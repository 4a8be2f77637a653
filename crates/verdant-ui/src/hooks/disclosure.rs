use crate::core::control::{Controllable, PendingValue};
use crate::core::disclosure::{Disclosure, DisclosureEvent, SurfaceKind};
use crate::hooks::use_controllable;
use yew::prelude::*;

/// Open flag plus the event sink driving it.
#[derive(Clone, PartialEq)]
pub struct DisclosureHandle {
    /// Whether the surface is currently visible.
    pub open: bool,
    /// Feed an event through the state machine.
    pub send: Callback<DisclosureEvent>,
}

/// Run the open/closed machine for a surface of `kind`.
///
/// Each render resets the machine to the rendered value. Between renders an
/// uncontrolled surface applies events to the last requested state, so a burst
/// of identical events reports one transition. A controlled surface always
/// starts from the caller's value, so a refused close can be requested again.
#[hook]
pub fn use_disclosure(
    widget: &'static str,
    kind: SurfaceKind,
    source: &Controllable<bool>,
) -> DisclosureHandle {
    let open = use_controllable(widget, source);
    let rendered = Disclosure::from(open.value);
    let pending = use_mut_ref(|| PendingValue::new(rendered));
    pending.borrow_mut().sync(rendered);

    let send = {
        let set = open.set.clone();
        let mode = open.mode;
        Callback::from(move |event: DisclosureEvent| {
            let next = pending.borrow().base(mode).transition(kind, event);
            if let Some(next) = next {
                let next = pending.borrow_mut().propose(mode, next);
                set.emit(next.is_open());
            }
        })
    };

    DisclosureHandle {
        open: open.value,
        send,
    }
}
