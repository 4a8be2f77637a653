//! Paginated list that requests the next page when its sentinel scrolls into view.
//!
//! # Design
//! - Pages are flattened in order and handed to the caller's render callback.
//! - The sentinel is only observed while items are shown and more pages exist.
//! - Placeholder nodes fall back to plain text when the caller supplies none.

use crate::config::UiConfig;
use crate::core::infinite_scroll::ObserverOptions;
use crate::core::pagination::{ListFooter, ListView, PageStatus, flatten_pages};
use crate::hooks::use_infinite_scroll;
use gloo::console;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InfiniteScrollProps<T: Clone + PartialEq + 'static> {
    /// Pages in fetch order.
    pub pages: Rc<Vec<Vec<T>>>,
    #[prop_or_default]
    pub status: PageStatus,
    pub fetch_next_page: Callback<()>,
    /// Renders the flattened items.
    pub render: Callback<Rc<Vec<T>>, Html>,
    /// Overrides the configured observer options.
    #[prop_or_default]
    pub options: Option<ObserverOptions>,
    /// Scroll container to observe against; the viewport when absent.
    #[prop_or_default]
    pub root: Option<NodeRef>,
    #[prop_or_default]
    pub loading: Option<Html>,
    #[prop_or_default]
    pub empty: Option<Html>,
    #[prop_or_default]
    pub end: Option<Html>,
    #[prop_or_default]
    pub error: Option<Html>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(InfiniteScrollContainer)]
pub fn infinite_scroll_container<T>(props: &InfiniteScrollProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    let config = use_context::<UiConfig>().unwrap_or_default();
    let options = props.options.clone().unwrap_or_else(|| {
        config.observer_options().unwrap_or_else(|err| {
            console::warn!("observer options rejected, using defaults", err.to_string());
            ObserverOptions::default()
        })
    });
    let items = use_memo(props.pages.clone(), |pages| flatten_pages(pages.as_slice()));

    let mut gate = props.status.gate();
    gate.enabled &= !items.is_empty();
    let sentinel = use_infinite_scroll(
        gate,
        options,
        props.root.clone(),
        props.fetch_next_page.clone(),
    );

    let body = match props.status.view(items.len()) {
        ListView::Loading => placeholder(props.loading.as_ref(), "Loading..."),
        ListView::Error => placeholder(
            props.error.as_ref(),
            "An error occurred while fetching data.",
        ),
        ListView::Empty => placeholder(props.empty.as_ref(), "No items found."),
        ListView::Items => {
            let footer = match props.status.footer() {
                ListFooter::FetchingMore => placeholder(props.loading.as_ref(), "Loading..."),
                ListFooter::End => placeholder(props.end.as_ref(), "You've reached the end!"),
                ListFooter::Idle => html! {},
            };
            html! {
                <>
                    { props.render.emit(items.clone()) }
                    <div ref={sentinel} class="infinite-scroll-sentinel">{ footer }</div>
                </>
            }
        }
    };

    html! {
        <div class={classes!("infinite-scroll", props.class.clone())}>
            { body }
        </div>
    }
}

fn placeholder(custom: Option<&Html>, text: &'static str) -> Html {
    custom.cloned().unwrap_or_else(|| html! {
        <div class="infinite-scroll-message">{ text }</div>
    })
}
