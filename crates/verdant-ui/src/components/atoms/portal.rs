use crate::config::UiConfig;
use gloo::console;
use gloo::utils::{body, document};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PortalProps {
    /// Id of the host element; defaults to the configured portal root.
    #[prop_or_default]
    pub root_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Render children into a host element outside the normal tree.
///
/// The host is looked up by id and created under `<body>` when missing.
/// Resolution happens during render so children mount in the same pass.
#[function_component(Portal)]
pub fn portal(props: &PortalProps) -> Html {
    let config = use_context::<UiConfig>().unwrap_or_default();
    let root_id = props
        .root_id
        .clone()
        .unwrap_or_else(|| AttrValue::from(config.portal_root_id));
    let host = use_memo(root_id, |root_id| ensure_host(root_id));

    match &*host {
        Some(element) => create_portal(
            html! { <>{ for props.children.iter() }</> },
            element.clone(),
        ),
        None => html! {},
    }
}

fn ensure_host(id: &str) -> Option<Element> {
    let document = document();
    if let Some(existing) = document.get_element_by_id(id) {
        return Some(existing);
    }
    let element = match document.create_element("div") {
        Ok(element) => element,
        Err(err) => {
            console::error!("portal root creation failed", id.to_string(), err);
            return None;
        }
    };
    element.set_id(id);
    if let Err(err) = body().append_child(&element) {
        console::error!("portal root attach failed", id.to_string(), err);
        return None;
    }
    Some(element)
}
