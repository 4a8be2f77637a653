use crate::core::control::Controllable;
use crate::hooks::use_controllable;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CheckboxProps {
    #[prop_or_default]
    pub checked: Controllable<bool>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    /// Label content rendered next to the box.
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> Html {
    let checked = use_controllable("Checkbox", &props.checked);
    let onchange = {
        let set = checked.set.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                set.emit(input.checked());
            }
        })
    };

    html! {
        <label class={classes!(
            "checkbox",
            props.disabled.then_some("disabled"),
            props.class.clone()
        )}>
            <input
                type="checkbox"
                class="native"
                id={props.id.clone()}
                name={props.name.clone()}
                checked={checked.value}
                disabled={props.disabled}
                onchange={onchange}
            />
            <span class={classes!("box", checked.value.then_some("checked"))} aria-hidden="true">
                if checked.value {
                    <svg viewBox="0 0 16 16" width="12" height="12">
                        <path d="M3 8l3 3 7-7" fill="none" stroke="currentColor" stroke-width="2" />
                    </svg>
                }
            </span>
            if !props.children.is_empty() {
                <span class="label">{ for props.children.iter() }</span>
            }
        </label>
    }
}
