use crate::core::outside::is_outside_interaction;
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::{Event, Node};
use yew::prelude::*;

const EVENTS: [&str; 2] = ["mousedown", "touchstart"];

/// Call `on_outside` when a pointer-down or touch-start lands outside every owned element.
///
/// Owned refs are resolved when the event fires. If any of them is not
/// mounted at that moment the event is ignored.
#[hook]
pub fn use_outside_interaction(owned: Vec<NodeRef>, on_outside: Callback<()>) {
    use_effect_with((owned, on_outside), |(owned, on_outside)| {
        let target = document();
        let listeners: Vec<EventListener> = EVENTS
            .iter()
            .map(|name| {
                let owned = owned.clone();
                let on_outside = on_outside.clone();
                EventListener::new(&target, *name, move |event: &Event| {
                    let hit = event.target().and_then(|t| t.dyn_into::<Node>().ok());
                    let containment = owned
                        .iter()
                        .map(|node_ref| node_ref.get().map(|node| node.contains(hit.as_ref())));
                    if is_outside_interaction(containment) {
                        on_outside.emit(());
                    }
                })
            })
            .collect();
        move || drop(listeners)
    });
}
