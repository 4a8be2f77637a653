//! Form-section grouping: a labelled root with title, controls, label, description and message slots.

use crate::components::foundations::{BasicProps, merge_classes, render_container};
use yew::prelude::*;

/// Default height of the row holding the field's controls.
pub const DEFAULT_ELEMENTS_HEIGHT: &str = "2.5rem";

#[derive(Properties, PartialEq)]
pub struct FieldRootProps {
    /// Id of the title element naming this group.
    #[prop_or_default]
    pub labelled_by: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FieldRoot)]
pub fn field_root(props: &FieldRootProps) -> Html {
    html! {
        <div
            class={merge_classes("field", &props.class)}
            role="group"
            aria-labelledby={props.labelled_by.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldTitleProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Keep the title for assistive technology only.
    #[prop_or_default]
    pub hidden: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FieldTitle)]
pub fn field_title(props: &FieldTitleProps) -> Html {
    let mut classes = merge_classes("field-title", &props.class);
    if props.hidden {
        classes.push("visually-hidden");
    }
    html! {
        <h3 id={props.id.clone()} class={classes}>
            { for props.children.iter() }
        </h3>
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldElementsBoxProps {
    #[prop_or(AttrValue::Static(DEFAULT_ELEMENTS_HEIGHT))]
    pub height: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FieldElementsBox)]
pub fn field_elements_box(props: &FieldElementsBoxProps) -> Html {
    html! {
        <div
            class={merge_classes("field-elements", &props.class)}
            style={format!("height:{};", props.height)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FieldLabelProps {
    #[prop_or_default]
    pub html_for: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FieldLabel)]
pub fn field_label(props: &FieldLabelProps) -> Html {
    html! {
        <label for={props.html_for.clone()} class={merge_classes("field-label", &props.class)}>
            { for props.children.iter() }
        </label>
    }
}

#[function_component(FieldDescription)]
pub fn field_description(props: &BasicProps) -> Html {
    render_container("p", "field-description", props)
}

#[derive(Properties, PartialEq)]
pub struct FieldMessageProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    /// Validation error rather than a neutral hint.
    #[prop_or_default]
    pub is_error: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FieldMessage)]
pub fn field_message(props: &FieldMessageProps) -> Html {
    let mut classes = merge_classes("field-message", &props.class);
    if props.is_error {
        classes.push("error");
    }
    html! {
        <p
            id={props.id.clone()}
            class={classes}
            role={props.is_error.then_some("alert")}
        >
            { for props.children.iter() }
        </p>
    }
}
