use crate::core::infinite_scroll::{FetchGate, ObserverOptions};
use gloo::console;
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

struct ActiveObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

/// Observe the returned sentinel ref and request the next page when it scrolls into view.
///
/// A disabled gate detaches the observer; re-enabling attaches a new one.
#[hook]
pub fn use_infinite_scroll(
    gate: FetchGate,
    options: ObserverOptions,
    root: Option<NodeRef>,
    fetch_next_page: Callback<()>,
) -> NodeRef {
    let sentinel = use_node_ref();

    {
        let sentinel = sentinel.clone();
        use_effect_with(
            (gate, options, root, fetch_next_page),
            move |(gate, options, root, fetch_next_page)| {
                let active = if gate.should_observe() {
                    attach(
                        &sentinel,
                        *gate,
                        options,
                        root.as_ref(),
                        fetch_next_page.clone(),
                    )
                } else {
                    None
                };
                move || {
                    if let Some(active) = active {
                        active.observer.disconnect();
                    }
                }
            },
        );
    }

    sentinel
}

fn attach(
    sentinel: &NodeRef,
    gate: FetchGate,
    options: &ObserverOptions,
    root: Option<&NodeRef>,
    fetch_next_page: Callback<()>,
) -> Option<ActiveObserver> {
    let element = sentinel.cast::<Element>()?;
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        let first = entries
            .get(0)
            .dyn_into::<IntersectionObserverEntry>()
            .ok()
            .map(|entry| entry.is_intersecting());
        if gate.should_fetch(first) {
            fetch_next_page.emit(());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold()));
    init.set_root_margin(options.root_margin());
    if let Some(root) = root.and_then(NodeRef::cast::<Element>) {
        init.set_root(Some(root.as_ref()));
    }

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(&element);
            Some(ActiveObserver {
                observer,
                _callback: callback,
            })
        }
        Err(err) => {
            console::error!("intersection observer unavailable", err);
            None
        }
    }
}
