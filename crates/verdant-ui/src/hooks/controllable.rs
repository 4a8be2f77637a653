use crate::core::control::{ControlMode, Controllable, ModeLatch, resolve_value};
use gloo::console;
use yew::prelude::*;

/// Current value plus a setter that respects the pinned ownership mode.
#[derive(Clone, PartialEq)]
pub struct ControlledValue<T: 'static> {
    /// Value to render.
    pub value: T,
    /// Request a change: stored internally when uncontrolled, always forwarded to the caller.
    pub set: Callback<T>,
    /// Mode pinned at first render.
    pub mode: ControlMode,
}

/// Resolve a [`Controllable`] prop for the lifetime of one widget instance.
///
/// The first render pins the mode. A later render that flips the mode is
/// reported once through the console and otherwise ignored.
#[hook]
pub fn use_controllable<T>(widget: &'static str, source: &Controllable<T>) -> ControlledValue<T>
where
    T: Clone + PartialEq + 'static,
{
    let internal = use_state({
        let seed = source.seed().clone();
        move || seed
    });
    let latch = use_mut_ref(ModeLatch::default);
    let reported = use_mut_ref(|| false);
    let last_controlled = use_mut_ref(|| None::<T>);

    let requested = source.mode();
    let mode = {
        let mut latch = latch.borrow_mut();
        match latch.observe(widget, requested) {
            Ok(mode) => mode,
            Err(err) => {
                if !*reported.borrow() {
                    console::error!(err.to_string());
                    *reported.borrow_mut() = true;
                }
                latch.pinned().unwrap_or(requested)
            }
        }
    };

    if let (ControlMode::Controlled, Controllable::Controlled { value, .. }) = (mode, source) {
        *last_controlled.borrow_mut() = Some(value.clone());
    }
    let value = resolve_value(mode, source, &*internal, last_controlled.borrow().as_ref());

    let set = {
        let internal = internal.clone();
        let on_change = source.on_change().cloned();
        Callback::from(move |next: T| {
            if mode == ControlMode::Uncontrolled {
                internal.set(next.clone());
            }
            if let Some(on_change) = &on_change {
                on_change.emit(next);
            }
        })
    };

    ControlledValue { value, set, mode }
}
