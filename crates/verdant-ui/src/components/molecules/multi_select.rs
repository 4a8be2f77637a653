//! Multi-value menu whose trigger shows the current selection as removable tags.
//!
//! # Design
//! - Toggling keeps call order: new values append, selected values are removed.
//! - Selecting never closes the menu; the trigger toggles it and outside
//!   pointer-down closes it.

use crate::components::molecules::floating_menu::FloatingMenu;
use crate::core::control::{Controllable, PendingValue};
use crate::core::disclosure::{DisclosureEvent, SurfaceKind};
use crate::core::selection::{is_commit_key, label_for, toggle_value};
use crate::hooks::{DisclosureHandle, use_controllable, use_disclosure, use_outside_interaction};
use std::rc::Rc;
use yew::prelude::*;

/// `(value, label)` pairs offered by the menu.
pub type SelectOptions = Rc<Vec<(AttrValue, AttrValue)>>;

/// Shared state for one multi-select instance.
#[derive(Clone, PartialEq)]
pub struct MultiSelectHandle {
    pub disclosure: DisclosureHandle,
    pub options: SelectOptions,
    /// Selected values in the order they were picked.
    pub selected: Vec<AttrValue>,
    /// Add the value when absent, remove it when present.
    pub toggle: Callback<AttrValue>,
    pub trigger_ref: NodeRef,
    pub menu_ref: NodeRef,
}

#[hook]
pub fn use_multi_select(
    options: SelectOptions,
    value: &Controllable<Vec<AttrValue>>,
) -> MultiSelectHandle {
    let value = use_controllable("MultiSelect", value);
    let disclosure = use_disclosure(
        "MultiSelect.open",
        SurfaceKind::MultiSelectMenu,
        &Controllable::uncontrolled(false),
    );
    let trigger_ref = use_node_ref();
    let menu_ref = use_node_ref();

    let pending = use_mut_ref(|| PendingValue::new(value.value.clone()));
    pending.borrow_mut().sync(value.value.clone());

    let toggle = {
        let set = value.set.clone();
        let send = disclosure.send.clone();
        let mode = value.mode;
        Callback::from(move |picked: AttrValue| {
            let next = toggle_value(pending.borrow().base(mode).as_slice(), &picked);
            let next = pending.borrow_mut().propose(mode, next);
            set.emit(next);
            send.emit(DisclosureEvent::SelectionCommitted);
        })
    };

    MultiSelectHandle {
        disclosure,
        options,
        selected: value.value,
        toggle,
        trigger_ref,
        menu_ref,
    }
}

#[derive(Properties, PartialEq)]
pub struct MultiSelectPartProps {
    pub handle: MultiSelectHandle,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MultiSelectRoot)]
pub fn multi_select_root(props: &MultiSelectPartProps) -> Html {
    let handle = &props.handle;
    let on_outside = {
        let send = handle.disclosure.send.clone();
        Callback::from(move |()| send.emit(DisclosureEvent::OutsideInteraction))
    };
    use_outside_interaction(
        vec![handle.trigger_ref.clone(), handle.menu_ref.clone()],
        on_outside,
    );

    html! {
        <div class={classes!("multi-select", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MultiSelectTriggerProps {
    pub handle: MultiSelectHandle,
    #[prop_or(AttrValue::Static("Select..."))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MultiSelectTrigger)]
pub fn multi_select_trigger(props: &MultiSelectTriggerProps) -> Html {
    let handle = &props.handle;
    let onclick = {
        let send = handle.disclosure.send.clone();
        Callback::from(move |_: MouseEvent| send.emit(DisclosureEvent::TriggerActivated))
    };
    let onkeydown = {
        let send = handle.disclosure.send.clone();
        Callback::from(move |event: KeyboardEvent| {
            if is_commit_key(&event.key()) {
                event.prevent_default();
                send.emit(DisclosureEvent::TriggerActivated);
            }
        })
    };

    let tags = handle.selected.iter().map(|value| {
        let label = label_for(handle.options.as_slice(), value).to_string();
        let on_remove = {
            let toggle = handle.toggle.clone();
            let value = value.clone();
            Callback::from(move |event: MouseEvent| {
                event.stop_propagation();
                toggle.emit(value.clone());
            })
        };
        html! {
            <span class="tag" key={value.to_string()}>
                <span class="tag-label">{ label.clone() }</span>
                <button
                    type="button"
                    class="tag-remove"
                    aria-label={format!("Remove {label}")}
                    onclick={on_remove}
                >
                    { "×" }
                </button>
            </span>
        }
    });

    html! {
        <div
            ref={handle.trigger_ref.clone()}
            class={classes!("multi-select-trigger", props.class.clone())}
            role="combobox"
            tabindex="0"
            aria-haspopup="listbox"
            aria-expanded={handle.disclosure.open.to_string()}
            onclick={onclick}
            onkeydown={onkeydown}
        >
            if handle.selected.is_empty() {
                <span class="placeholder">{ props.placeholder.clone() }</span>
            } else {
                <div class="tags">{ for tags }</div>
            }
        </div>
    }
}

#[function_component(MultiSelectMenu)]
pub fn multi_select_menu(props: &MultiSelectPartProps) -> Html {
    let handle = &props.handle;
    html! {
        <FloatingMenu
            trigger_ref={handle.trigger_ref.clone()}
            menu_ref={handle.menu_ref.clone()}
            open={handle.disclosure.open}
            multiselectable={true}
            class={classes!("multi-select-menu", props.class.clone())}
        >
            { for props.children.iter() }
        </FloatingMenu>
    }
}

#[derive(Properties, PartialEq)]
pub struct MultiSelectItemProps {
    pub handle: MultiSelectHandle,
    pub value: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Label content; the option label is used when empty.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MultiSelectItem)]
pub fn multi_select_item(props: &MultiSelectItemProps) -> Html {
    let handle = &props.handle;
    let selected = handle.selected.contains(&props.value);

    let onclick = {
        let toggle = handle.toggle.clone();
        let value = props.value.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(value.clone()))
    };
    let onkeydown = {
        let toggle = handle.toggle.clone();
        let value = props.value.clone();
        Callback::from(move |event: KeyboardEvent| {
            if is_commit_key(&event.key()) {
                event.prevent_default();
                toggle.emit(value.clone());
            }
        })
    };

    html! {
        <li
            class={classes!("multi-select-item", selected.then_some("selected"), props.class.clone())}
            role="option"
            tabindex="0"
            aria-selected={selected.to_string()}
            onclick={onclick}
            onkeydown={onkeydown}
        >
            <span class="check" aria-hidden="true">
                if selected {
                    <svg viewBox="0 0 16 16" width="12" height="12">
                        <path d="M3 8l3 3 7-7" fill="none" stroke="currentColor" stroke-width="2" />
                    </svg>
                }
            </span>
            if props.children.is_empty() {
                { label_for(handle.options.as_slice(), &props.value).to_string() }
            } else {
                { for props.children.iter() }
            }
        </li>
    }
}
