use crate::core::ui::CardVariant;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    /// Product tile (default), horizontal list item or promotion banner.
    #[prop_or(CardVariant::Product)]
    pub variant: CardVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let classes = classes!("card", props.variant.as_class(), props.class.clone());
    html! {
        <div class={classes}>
            { for props.children.iter() }
        </div>
    }
}
