use crate::core::ui::Size;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    #[prop_or(Size::Md)]
    pub size: Size,
    #[prop_or(AttrValue::Static("var(--color-primary)"))]
    pub color: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    let classes = classes!("spinner", props.size.suffix(), props.class.clone());
    html! {
        <div
            class={classes}
            style={format!("border-top-color:{};", props.color)}
            role="status"
            aria-label="loading"
        />
    }
}
