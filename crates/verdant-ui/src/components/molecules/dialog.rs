//! Modal dialog assembled from parts that share one [`DisclosureHandle`].
//!
//! # Design
//! - `use_dialog` owns the open flag; every part receives the handle as a prop.
//! - Content renders through the portal root only while open.
//! - Overlay clicks and Escape close the dialog; clicks inside the panel do not.

use crate::components::atoms::{Button, Portal};
use crate::components::foundations::{BasicProps, render_container};
use crate::core::control::Controllable;
use crate::core::disclosure::{DisclosureEvent, SurfaceKind};
use crate::core::ui::ButtonVariant;
use crate::hooks::{DisclosureHandle, use_disclosure};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::prelude::*;

/// Open/closed state for one dialog instance.
#[hook]
pub fn use_dialog(open: &Controllable<bool>) -> DisclosureHandle {
    use_disclosure("Dialog", SurfaceKind::Dialog, open)
}

#[derive(Properties, PartialEq)]
pub struct DialogTriggerProps {
    pub handle: DisclosureHandle,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DialogTrigger)]
pub fn dialog_trigger(props: &DialogTriggerProps) -> Html {
    let onclick = {
        let send = props.handle.send.clone();
        Callback::from(move |_: MouseEvent| send.emit(DisclosureEvent::TriggerActivated))
    };
    html! {
        <div
            class={classes!("dialog-trigger", props.class.clone())}
            aria-haspopup="dialog"
            aria-expanded={props.handle.open.to_string()}
            onclick={onclick}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DialogContentProps {
    pub handle: DisclosureHandle,
    #[prop_or_default]
    pub labelled_by: Option<AttrValue>,
    #[prop_or_default]
    pub described_by: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DialogContent)]
pub fn dialog_content(props: &DialogContentProps) -> Html {
    let panel_ref = use_node_ref();
    let open = props.handle.open;

    {
        let send = props.handle.send.clone();
        use_effect_with((open, send), |(open, send)| {
            let listener = open.then(|| {
                let send = send.clone();
                EventListener::new(&document(), "keydown", move |event| {
                    let escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .is_some_and(|key| key.key() == "Escape");
                    if escape {
                        send.emit(DisclosureEvent::Escape);
                    }
                })
            });
            move || drop(listener)
        });
    }
    {
        let panel_ref = panel_ref.clone();
        use_effect_with(open, move |open| {
            if *open {
                if let Some(panel) = panel_ref.cast::<HtmlElement>() {
                    if let Err(err) = panel.focus() {
                        console::error!("dialog focus failed", err);
                    }
                }
            }
            || ()
        });
    }

    if !open {
        return html! {};
    }

    let on_overlay = {
        let send = props.handle.send.clone();
        Callback::from(move |_: MouseEvent| send.emit(DisclosureEvent::OutsideInteraction))
    };
    let on_panel = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <Portal>
            <div class="dialog-overlay" onclick={on_overlay}>
                <div
                    ref={panel_ref}
                    class={classes!("dialog-content", props.class.clone())}
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={props.labelled_by.clone()}
                    aria-describedby={props.described_by.clone()}
                    tabindex="-1"
                    onclick={on_panel}
                >
                    { for props.children.iter() }
                </div>
            </div>
        </Portal>
    }
}

#[function_component(DialogTitle)]
pub fn dialog_title(props: &BasicProps) -> Html {
    render_container("h2", "dialog-title", props)
}

#[function_component(DialogDescription)]
pub fn dialog_description(props: &BasicProps) -> Html {
    render_container("p", "dialog-description", props)
}

#[function_component(DialogFooter)]
pub fn dialog_footer(props: &BasicProps) -> Html {
    render_container("div", "dialog-footer", props)
}

#[derive(Properties, PartialEq)]
pub struct DialogActionProps {
    pub handle: DisclosureHandle,
    /// Runs before the dialog closes.
    #[prop_or_default]
    pub on_action: Option<Callback<()>>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

fn action_button(props: &DialogActionProps, variant: ButtonVariant, event: DisclosureEvent) -> Html {
    let onclick = {
        let send = props.handle.send.clone();
        let on_action = props.on_action.clone();
        Callback::from(move |click: MouseEvent| {
            click.stop_propagation();
            if let Some(on_action) = &on_action {
                on_action.emit(());
            }
            send.emit(event);
        })
    };
    html! {
        <Button
            variant={variant}
            class={props.class.clone()}
            disabled={props.disabled}
            r#type="button"
            onclick={onclick}
        >
            { for props.children.iter() }
        </Button>
    }
}

/// Runs `on_action` then closes.
#[function_component(DialogConfirm)]
pub fn dialog_confirm(props: &DialogActionProps) -> Html {
    action_button(props, ButtonVariant::Primary, DisclosureEvent::Confirmed)
}

/// Runs the optional `on_action` then closes.
#[function_component(DialogCancel)]
pub fn dialog_cancel(props: &DialogActionProps) -> Html {
    action_button(props, ButtonVariant::Outline, DisclosureEvent::Cancelled)
}
