use crate::components::atoms::Portal;
use crate::config::UiConfig;
use crate::core::toast::{ToastDraft, ToastEntry, ToastId};
use crate::store::{ToastStore, push_toast};
use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yewdux::prelude::{use_dispatch, use_store};

/// Callback that enqueues a toast, filling in the configured lifetime when the draft has none.
#[hook]
pub fn use_toast() -> Callback<ToastDraft> {
    let dispatch = use_dispatch::<ToastStore>();
    let config = use_context::<UiConfig>().unwrap_or_default();
    Callback::from(move |mut draft: ToastDraft| {
        if draft.duration_ms.is_none() {
            draft.duration_ms = Some(config.toast_duration_ms);
        }
        push_toast(&dispatch, draft);
    })
}

#[derive(Properties, PartialEq)]
pub struct ToastViewportProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Renders the toast queue into the portal root.
#[function_component(ToastViewport)]
pub fn toast_viewport(props: &ToastViewportProps) -> Html {
    let (store, dispatch) = use_store::<ToastStore>();
    let on_expire = Callback::from(move |id: ToastId| {
        dispatch.reduce_mut(|store| {
            store.remove_toast(id);
        });
    });

    html! {
        <Portal>
            <div
                class={classes!("toast-viewport", props.class.clone())}
                aria-live="polite"
                aria-atomic="true"
                hidden={store.queue.is_empty()}
            >
                { for store.queue.entries().iter().map(|entry| html! {
                    <ToastItem
                        key={entry.id.to_string()}
                        entry={entry.clone()}
                        on_expire={on_expire.clone()}
                    />
                }) }
            </div>
        </Portal>
    }
}

#[derive(Properties, PartialEq)]
struct ToastItemProps {
    entry: ToastEntry,
    on_expire: Callback<ToastId>,
}

/// One toast; its timer is armed on mount and dropped on unmount.
#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    {
        let entry = props.entry.clone();
        let on_expire = props.on_expire.clone();
        use_effect_with(entry.id, move |id| {
            let id = *id;
            let delay = entry.remaining_ms(js_sys::Date::now());
            let handle = Timeout::new(delay, move || on_expire.emit(id));
            move || drop(handle)
        });
    }

    let entry = &props.entry;
    html! {
        <div class="toast" role="status">
            if let Some(title) = entry.title.clone() {
                <p class="toast-title">{ title }</p>
            }
            if let Some(description) = entry.description.clone() {
                <p class="toast-description">{ description }</p>
            }
        </div>
    }
}
