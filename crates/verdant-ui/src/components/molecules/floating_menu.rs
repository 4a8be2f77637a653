use crate::components::atoms::Portal;
use crate::config::UiConfig;
use crate::hooks::use_floating_position;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(super) struct FloatingMenuProps {
    pub(super) trigger_ref: NodeRef,
    pub(super) menu_ref: NodeRef,
    pub(super) open: bool,
    pub(super) class: Classes,
    #[prop_or_default]
    pub(super) multiselectable: bool,
    #[prop_or_default]
    pub(super) children: Children,
}

/// Listbox panel anchored to a trigger and rendered through the portal root.
#[function_component(FloatingMenu)]
pub(super) fn floating_menu(props: &FloatingMenuProps) -> Html {
    let config = use_context::<UiConfig>().unwrap_or_default();
    let position = use_floating_position(
        props.trigger_ref.clone(),
        props.menu_ref.clone(),
        props.open,
        config.floating_gap,
    );

    if !props.open {
        return html! {};
    }

    html! {
        <Portal>
            <ul
                ref={props.menu_ref.clone()}
                class={classes!("floating-menu", position.placement.as_class(), props.class.clone())}
                role="listbox"
                aria-multiselectable={props.multiselectable.then_some("true")}
                style={position.to_style()}
            >
                { for props.children.iter() }
            </ul>
        </Portal>
    }
}
