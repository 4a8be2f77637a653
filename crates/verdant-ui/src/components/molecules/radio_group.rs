use crate::core::control::Controllable;
use crate::core::selection::is_current;
use crate::core::ui::Direction;
use crate::hooks::use_controllable;
use yew::prelude::*;

/// Shared state for one radio group.
#[derive(Clone, PartialEq)]
pub struct RadioGroupHandle {
    /// Form name shared by every item.
    pub name: AttrValue,
    pub value: Option<AttrValue>,
    pub select: Callback<AttrValue>,
}

impl RadioGroupHandle {
    /// Input id used when an item does not provide one.
    #[must_use]
    pub fn item_id(&self, value: &str) -> String {
        format!("{}-{value}", self.name)
    }
}

#[hook]
pub fn use_radio_group(
    name: AttrValue,
    value: &Controllable<Option<AttrValue>>,
) -> RadioGroupHandle {
    let value = use_controllable("RadioGroup", value);
    let select = {
        let set = value.set.clone();
        Callback::from(move |next: AttrValue| set.emit(Some(next)))
    };
    RadioGroupHandle {
        name,
        value: value.value,
        select,
    }
}

#[derive(Properties, PartialEq)]
pub struct RadioGroupRootProps {
    pub handle: RadioGroupHandle,
    #[prop_or(Direction::Vertical)]
    pub direction: Direction,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RadioGroupRoot)]
pub fn radio_group_root(props: &RadioGroupRootProps) -> Html {
    html! {
        <div
            class={classes!("radio-group", props.direction.as_class(), props.class.clone())}
            role="radiogroup"
            aria-label={props.aria_label.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RadioGroupItemProps {
    pub handle: RadioGroupHandle,
    pub value: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RadioGroupItem)]
pub fn radio_group_item(props: &RadioGroupItemProps) -> Html {
    let handle = &props.handle;
    let id = props
        .id
        .clone()
        .unwrap_or_else(|| AttrValue::from(handle.item_id(&props.value)));
    let checked = is_current(handle.value.as_ref(), &props.value);
    let onchange = {
        let select = handle.select.clone();
        let value = props.value.clone();
        Callback::from(move |_: Event| select.emit(value.clone()))
    };

    html! {
        <label
            for={id.clone()}
            class={classes!(
                "radio-item",
                checked.then_some("checked"),
                props.disabled.then_some("disabled"),
                props.class.clone()
            )}
        >
            <input
                type="radio"
                class="native"
                id={id}
                name={handle.name.clone()}
                value={props.value.clone()}
                checked={checked}
                disabled={props.disabled}
                onchange={onchange}
            />
            <span class="indicator" aria-hidden="true" />
            { for props.children.iter() }
        </label>
    }
}
