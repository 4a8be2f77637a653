use crate::core::control::Controllable;
use crate::hooks::use_controllable;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InputProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub input_type: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    /// Set once the user has pressed or touched the field.
    #[prop_or_default]
    pub touched: Controllable<bool>,
    /// Tracks focus and blur.
    #[prop_or_default]
    pub focused: Controllable<bool>,
    /// Render the error treatment.
    #[prop_or_default]
    pub is_error: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub input_ref: NodeRef,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

#[function_component(Input)]
pub fn input(props: &InputProps) -> Html {
    let touched = use_controllable("Input.touched", &props.touched);
    let focused = use_controllable("Input.focused", &props.focused);

    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                oninput.emit(input.value());
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
        "input",
        touched.value.then_some("touched"),
        focused.value.then_some("focused"),
        props.is_error.then_some("error"),
        props.disabled.then_some("disabled"),
        props.class.clone()
    );

    html! {
        <input
            class={classes}
            placeholder={props.placeholder.clone()}
            value={props.value.clone()}
            type={props.input_type.clone().unwrap_or_else(|| AttrValue::from("text"))}
            id={props.id.clone()}
            name={props.name.clone()}
            aria-label={props.aria_label.clone()}
            aria-invalid={props.is_error.then_some("true")}
            disabled={props.disabled}
            oninput={oninput}
            onmousedown={onmousedown}
            ontouchstart={ontouchstart}
            onfocus={onfocus}
            onblur={onblur}
            ref={props.input_ref.clone()}
        />
    }
}
