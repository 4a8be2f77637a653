use crate::core::ui::{SkeletonShape, inline_style};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SkeletonProps {
    #[prop_or(SkeletonShape::Rect)]
    pub shape: SkeletonShape,
    #[prop_or_default]
    pub width: Option<AttrValue>,
    #[prop_or_default]
    pub height: Option<AttrValue>,
    #[prop_or_default]
    pub aspect_ratio: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> Html {
    let style = inline_style([
        ("width", props.width.as_deref()),
        ("height", props.height.as_deref()),
        ("aspect-ratio", props.aspect_ratio.as_deref()),
    ]);
    let classes = classes!("skeleton", props.shape.as_class(), props.class.clone());
    html! {
        <div class={classes} style={style} aria-busy="true" aria-live="polite" />
    }
}
