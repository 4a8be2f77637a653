//! Single-value menu: a trigger, a floating listbox and committable items.
//!
//! # Design
//! - `use_dropdown` returns a handle holding the open flag, the value and the
//!   element refs; each part takes that handle as a prop.
//! - Committing an item stores the value and closes the menu.
//! - Pointer-down outside the root and the portalled menu closes the menu.

use crate::components::molecules::floating_menu::FloatingMenu;
use crate::core::control::Controllable;
use crate::core::disclosure::{DisclosureEvent, SurfaceKind};
use crate::core::selection::{is_commit_key, is_current};
use crate::hooks::{DisclosureHandle, use_controllable, use_disclosure, use_outside_interaction};
use yew::prelude::*;

/// Shared state for one dropdown instance.
#[derive(Clone, PartialEq)]
pub struct DropdownHandle {
    pub disclosure: DisclosureHandle,
    /// Committed value, if any.
    pub value: Option<AttrValue>,
    /// Commit a value and close.
    pub select: Callback<AttrValue>,
    pub root_ref: NodeRef,
    pub trigger_ref: NodeRef,
    pub menu_ref: NodeRef,
}

#[hook]
pub fn use_dropdown(value: &Controllable<Option<AttrValue>>) -> DropdownHandle {
    let value = use_controllable("Dropdown", value);
    let disclosure = use_disclosure(
        "Dropdown.open",
        SurfaceKind::SingleSelectMenu,
        &Controllable::uncontrolled(false),
    );
    let root_ref = use_node_ref();
    let trigger_ref = use_node_ref();
    let menu_ref = use_node_ref();

    let select = {
        let set = value.set.clone();
        let send = disclosure.send.clone();
        Callback::from(move |next: AttrValue| {
            set.emit(Some(next));
            send.emit(DisclosureEvent::SelectionCommitted);
        })
    };

    DropdownHandle {
        disclosure,
        value: value.value,
        select,
        root_ref,
        trigger_ref,
        menu_ref,
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownPartProps {
    pub handle: DropdownHandle,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DropdownRoot)]
pub fn dropdown_root(props: &DropdownPartProps) -> Html {
    let handle = &props.handle;
    let on_outside = {
        let send = handle.disclosure.send.clone();
        Callback::from(move |()| send.emit(DisclosureEvent::OutsideInteraction))
    };
    use_outside_interaction(
        vec![handle.root_ref.clone(), handle.menu_ref.clone()],
        on_outside,
    );

    html! {
        <div ref={handle.root_ref.clone()} class={classes!("dropdown", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(DropdownTrigger)]
pub fn dropdown_trigger(props: &DropdownPartProps) -> Html {
    let handle = &props.handle;
    let onclick = {
        let send = handle.disclosure.send.clone();
        Callback::from(move |_: MouseEvent| send.emit(DisclosureEvent::TriggerActivated))
    };
    html! {
        <button
            ref={handle.trigger_ref.clone()}
            type="button"
            class={classes!("dropdown-trigger", props.class.clone())}
            aria-haspopup="listbox"
            aria-expanded={handle.disclosure.open.to_string()}
            onclick={onclick}
        >
            { for props.children.iter() }
        </button>
    }
}

#[function_component(DropdownMenu)]
pub fn dropdown_menu(props: &DropdownPartProps) -> Html {
    let handle = &props.handle;
    html! {
        <FloatingMenu
            trigger_ref={handle.trigger_ref.clone()}
            menu_ref={handle.menu_ref.clone()}
            open={handle.disclosure.open}
            class={classes!("dropdown-menu", props.class.clone())}
        >
            { for props.children.iter() }
        </FloatingMenu>
    }
}

#[derive(Properties, PartialEq)]
pub struct DropdownItemProps {
    pub handle: DropdownHandle,
    pub value: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(DropdownItem)]
pub fn dropdown_item(props: &DropdownItemProps) -> Html {
    let selected = is_current(props.handle.value.as_ref(), &props.value);
    let disabled = props.disabled;

    let onclick = {
        let select = props.handle.select.clone();
        let value = props.value.clone();
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                select.emit(value.clone());
            }
        })
    };
    let onkeydown = {
        let select = props.handle.select.clone();
        let value = props.value.clone();
        Callback::from(move |event: KeyboardEvent| {
            if !disabled && is_commit_key(&event.key()) {
                event.prevent_default();
                select.emit(value.clone());
            }
        })
    };

    html! {
        <li
            class={classes!(
                "dropdown-item",
                selected.then_some("selected"),
                disabled.then_some("disabled"),
                props.class.clone()
            )}
            role="option"
            tabindex={if disabled { "-1" } else { "0" }}
            aria-selected={selected.to_string()}
            aria-disabled={disabled.then_some("true")}
            onclick={onclick}
            onkeydown={onkeydown}
        >
            { for props.children.iter() }
        </li>
    }
}
