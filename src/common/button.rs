use yew::prelude::*;

use crate::theme::{ButtonSize, ButtonVariant};

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    /// Renders an anchor instead of a button when set.
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub full_width: bool,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let class = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "font-medium",
        "rounded-lg",
        "transition-colors",
        "duration-200",
        "focus:outline-none",
        "focus:ring-2",
        props.variant.classes(),
        props.size.classes(),
        props.full_width.then_some("w-full"),
    );
    let onclick = props.onclick.clone().unwrap_or_default();

    match &props.href {
        Some(href) => html! {
            <a href={href.clone()} class={class} onclick={onclick}>
                { for props.children.iter() }
            </a>
        },
        None => html! {
            <button type="button" class={class} onclick={onclick}>
                { for props.children.iter() }
            </button>
        },
    }
}
