//! Class and markup helpers shared by the atoms and molecules.

use yew::prelude::*;
use yew::virtual_dom::VTag;

/// Minimal common props shared by stateless container wrappers.
#[derive(Properties, PartialEq)]
pub struct BasicProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Utility to merge a base class with any consumer-provided classes.
#[must_use]
pub fn merge_classes(base: &'static str, extra: &Classes) -> Classes {
    let mut classes = Classes::from(base);
    if !extra.is_empty() {
        classes.push(extra.clone());
    }
    classes
}

/// Renders `tag` with classes, an optional inline style and the given children.
#[must_use]
pub fn render_tag(
    tag: &'static str,
    classes: &Classes,
    style: Option<String>,
    id: Option<&AttrValue>,
    children: &Children,
) -> Html {
    let mut node = VTag::new(tag);
    if let Some(id) = id {
        node.add_attribute("id", id.to_string());
    }
    node.add_attribute("class", classes.to_string());
    if let Some(style) = style {
        node.add_attribute("style", style);
    }
    for child in children.iter() {
        node.add_child(child);
    }
    node.into()
}

/// Renders a simple tag with a base class and the container props.
#[must_use]
pub fn render_container(tag: &'static str, base_class: &'static str, props: &BasicProps) -> Html {
    render_tag(
        tag,
        &merge_classes(base_class, &props.class),
        None,
        props.id.as_ref(),
        &props.children,
    )
}
