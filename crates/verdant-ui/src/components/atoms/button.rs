use crate::components::atoms::Spinner;
use crate::core::ui::{ButtonVariant, Size};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or(ButtonVariant::Primary)]
    pub variant: ButtonVariant,
    #[prop_or(Size::Md)]
    pub size: Size,
    #[prop_or_default]
    pub full_width: bool,
    /// Shows a spinner next to the label and disables the button.
    #[prop_or_default]
    pub is_loading: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub r#type: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let classes = classes!(
        "button",
        props.variant.as_class(),
        props.size.with_prefix("size"),
        props.full_width.then_some("full-width"),
        props.is_loading.then_some("loading"),
        props.disabled.then_some("disabled"),
        props.class.clone()
    );

    html! {
        <button
            class={classes}
            disabled={props.is_loading || props.disabled}
            r#type={props.r#type.clone()}
            onclick={props.onclick.clone()}
        >
            if props.is_loading {
                <div class="loading-container">
                    <Spinner size={props.size} />
                    { for props.children.iter() }
                </div>
            } else {
                { for props.children.iter() }
            }
        </button>
    }
}
