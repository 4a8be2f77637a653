//! Image with a loading placeholder, error fallback and success-only overlay.
//!
//! # Design
//! - Status is reset whenever `src` changes; an empty source fails without a request.
//! - `StandardImageBox` and `ContainedImageBox` keep a fixed aspect ratio,
//!   `MasonryImageBox` follows the image's natural height.

use crate::components::atoms::Skeleton;
use crate::core::image::{
    DEFAULT_ASPECT_RATIO, ImageSizing, ImageStatus, ObjectFit, container_style,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ImageBoxProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or(AttrValue::Static(DEFAULT_ASPECT_RATIO))]
    pub aspect_ratio: AttrValue,
    #[prop_or(AttrValue::Static("transparent"))]
    pub background: AttrValue,
    /// Replaces the default icon when the image fails.
    #[prop_or_default]
    pub fallback: Option<Html>,
    #[prop_or_default]
    pub class: Classes,
    /// Overlay content, shown only once the image has loaded.
    #[prop_or_default]
    pub children: Children,
}

#[derive(Properties, PartialEq)]
struct ImageProps {
    src: AttrValue,
    alt: AttrValue,
    aspect_ratio: AttrValue,
    background: AttrValue,
    fallback: Option<Html>,
    class: Classes,
    children: Children,
    sizing: ImageSizing,
    fit: ObjectFit,
}

#[function_component(Image)]
fn image(props: &ImageProps) -> Html {
    let status = use_state(|| ImageStatus::for_source(&props.src));
    {
        let status = status.clone();
        use_effect_with(props.src.clone(), move |src| {
            status.set(ImageStatus::for_source(src));
            || ()
        });
    }

    let onload = {
        let status = status.clone();
        Callback::from(move |_: Event| status.set(ImageStatus::Success))
    };
    let onerror = {
        let status = status.clone();
        Callback::from(move |_: Event| status.set(ImageStatus::Error))
    };

    let current = *status;
    let style = container_style(props.sizing, &props.aspect_ratio, &props.background);
    let image_style = format!(
        "object-fit:{};{}",
        props.fit.as_str(),
        if current == ImageStatus::Success { "" } else { "visibility:hidden;" }
    );

    html! {
        <div
            class={classes!("image-box", current.as_str(), props.class.clone())}
            style={style}
        >
            if current.shows_placeholder() {
                <Skeleton class="placeholder" width="100%" height="100%" />
            }
            if current.shows_fallback() {
                <div class="fallback">
                    { props.fallback.clone().unwrap_or_else(default_fallback_icon) }
                </div>
            } else {
                <img
                    class="image"
                    src={props.src.clone()}
                    alt={props.alt.clone()}
                    style={image_style}
                    loading="lazy"
                    onload={onload}
                    onerror={onerror}
                />
            }
            if current.shows_overlay() {
                <div class="overlay">{ for props.children.iter() }</div>
            }
        </div>
    }
}

fn default_fallback_icon() -> Html {
    html! {
        <svg class="fallback-icon" viewBox="0 0 24 24" width="32" height="32" aria-hidden="true">
            <path
                d="M4 5h16v14H4zM4 15l4-4 4 4 3-3 5 5M15 9.5a1.5 1.5 0 1 0 0.01 0"
                fill="none"
                stroke="currentColor"
                stroke-width="1.5"
            />
        </svg>
    }
}

fn render(props: &ImageBoxProps, sizing: ImageSizing, fit: ObjectFit) -> Html {
    html! {
        <Image
            src={props.src.clone()}
            alt={props.alt.clone()}
            aspect_ratio={props.aspect_ratio.clone()}
            background={props.background.clone()}
            fallback={props.fallback.clone()}
            class={props.class.clone()}
            sizing={sizing}
            fit={fit}
        >
            { for props.children.iter() }
        </Image>
    }
}

/// Fixed ratio, image covers the box.
#[function_component(StandardImageBox)]
pub fn standard_image_box(props: &ImageBoxProps) -> Html {
    render(props, ImageSizing::Ratio, ObjectFit::Cover)
}

/// Fixed ratio, whole image visible.
#[function_component(ContainedImageBox)]
pub fn contained_image_box(props: &ImageBoxProps) -> Html {
    render(props, ImageSizing::Ratio, ObjectFit::Contain)
}

/// Natural height for masonry layouts.
#[function_component(MasonryImageBox)]
pub fn masonry_image_box(props: &ImageBoxProps) -> Html {
    render(props, ImageSizing::Natural, ObjectFit::Cover)
}
