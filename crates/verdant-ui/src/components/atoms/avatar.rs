use crate::config::UiConfig;
use crate::core::ui::Size;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    #[prop_or_default]
    pub src: Option<AttrValue>,
    #[prop_or(AttrValue::Static("avatar"))]
    pub alt: AttrValue,
    #[prop_or(Size::Md)]
    pub size: Size,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let config = use_context::<UiConfig>().unwrap_or_default();
    let classes = classes!(
        "avatar",
        props.size.with_prefix("size"),
        props.class.clone()
    );
    let src = props
        .src
        .clone()
        .filter(|src| !src.is_empty())
        .unwrap_or_else(|| AttrValue::from(config.default_avatar_src));
    let edge = props.size.avatar_px().to_string();

    html! {
        <div class={classes}>
            <img
                class="image"
                src={src}
                alt={props.alt.clone()}
                width={edge.clone()}
                height={edge}
                loading="lazy"
            />
        </div>
    }
}
