use crate::core::grid::{CssLength, DEFAULT_GAP, DEFAULT_MIN_CHILD_WIDTH, GridColumns, grid_layout};
use yew::prelude::*;

fn default_gap() -> CssLength {
    CssLength::from(DEFAULT_GAP)
}

fn default_min_child_width() -> CssLength {
    CssLength::from(DEFAULT_MIN_CHILD_WIDTH)
}

#[derive(Properties, PartialEq)]
pub struct GridProps {
    /// Explicit columns; when absent the grid auto-fills by `min_child_width`.
    #[prop_or_default]
    pub columns: Option<GridColumns>,
    #[prop_or_else(default_gap)]
    pub gap: CssLength,
    #[prop_or_else(default_min_child_width)]
    pub min_child_width: CssLength,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Grid)]
pub fn grid(props: &GridProps) -> Html {
    let layout = grid_layout(props.columns.as_ref(), &props.gap, &props.min_child_width);
    html! {
        <div class={classes!("grid", layout.class, props.class.clone())} style={layout.style}>
            { for props.children.iter() }
        </div>
    }
}
