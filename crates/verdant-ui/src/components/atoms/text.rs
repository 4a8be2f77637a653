use crate::components::foundations::render_tag;
use crate::core::ui::{MaxWidth, TextAlign, TextColor, TextSize, TextTag, TextWeight};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextProps {
    #[prop_or(TextTag::P)]
    pub r#as: TextTag,
    #[prop_or(TextSize::Md)]
    pub size: TextSize,
    #[prop_or(TextWeight::Normal)]
    pub weight: TextWeight,
    #[prop_or(TextColor::Primary)]
    pub color: TextColor,
    #[prop_or(TextAlign::Left)]
    pub align: TextAlign,
    #[prop_or(MaxWidth::Fit)]
    pub max_width: MaxWidth,
    /// Single-line ellipsis.
    #[prop_or_default]
    pub truncate: bool,
    /// Clamp to this many lines.
    #[prop_or_default]
    pub lines: Option<u8>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Typography atom rendering any heading, paragraph or span.
#[function_component(Text)]
pub fn text(props: &TextProps) -> Html {
    let tag = props.r#as.as_str();
    let classes = classes!(
        "text",
        props.size.as_class(),
        props.weight.as_class(),
        tag,
        props.truncate.then_some("truncate"),
        props.lines.map(|_| "multi-line-truncate"),
        props.color.as_class(),
        props.align.as_class(),
        props.max_width.as_class(),
        props.class.clone()
    );
    let mut style = props.max_width.inline_style().unwrap_or_default();
    if let Some(lines) = props.lines {
        style.push_str(&format!("-webkit-line-clamp:{lines};"));
    }

    render_tag(
        tag,
        &classes,
        (!style.is_empty()).then_some(style),
        props.id.as_ref(),
        &props.children,
    )
}
