use crate::core::control::Controllable;
use crate::core::ui::Size;
use crate::hooks::use_controllable;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SelectProps {
    /// `(value, label)` pairs.
    pub options: Rc<Vec<(AttrValue, AttrValue)>>,
    #[prop_or_default]
    pub value: Controllable<AttrValue>,
    /// Disabled first option shown while nothing is chosen.
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or(Size::Md)]
    pub size: Size,
    #[prop_or_default]
    pub full_width: bool,
    #[prop_or_default]
    pub touched: Controllable<bool>,
    #[prop_or_default]
    pub focused: Controllable<bool>,
    #[prop_or_default]
    pub is_error: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Native select; the browser owns the menu so committing a value closes it.
#[function_component(Select)]
pub fn select(props: &SelectProps) -> Html {
    let value = use_controllable("Select", &props.value);
    let touched = use_controllable("Select.touched", &props.touched);
    let focused = use_controllable("Select.focused", &props.focused);

    let onchange = {
        let set = value.set.clone();
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                set.emit(AttrValue::from(select.value()));
            }
        })
    };
    let onmousedown = {
        let set = touched.set.clone();
        Callback::from(move |_: MouseEvent| set.emit(true))
    };
    let ontouchstart = {
        let set = touched.set.clone();
        Callback::from(move |_: TouchEvent| set.emit(true))
    };
    let onfocus = {
        let set = focused.set.clone();
        Callback::from(move |_: FocusEvent| set.emit(true))
    };
    let onblur = {
        let set = focused.set.clone();
        Callback::from(move |_: FocusEvent| set.emit(false))
    };

    let classes = classes!(
        "select",
        props.size.with_prefix("size"),
        props.full_width.then_some("full-width"),
        touched.value.then_some("touched"),
        focused.value.then_some("focused"),
        props.is_error.then_some("error"),
        value.value.is_empty().then_some("empty"),
        props.class.clone()
    );

    html! {
        <select
            class={classes}
            id={props.id.clone()}
            name={props.name.clone()}
            disabled={props.disabled}
            aria-invalid={props.is_error.then_some("true")}
            onchange={onchange}
            onmousedown={onmousedown}
            ontouchstart={ontouchstart}
            onfocus={onfocus}
            onblur={onblur}
        >
            if let Some(placeholder) = props.placeholder.clone() {
                <option value="" disabled=true selected={value.value.is_empty()}>
                    { placeholder }
                </option>
            }
            { for props.options.iter().map(|(option, label)| html! {
                <option
                    key={option.to_string()}
                    value={option.clone()}
                    selected={*option == value.value}
                >
                    { label.clone() }
                </option>
            }) }
        </select>
    }
}
