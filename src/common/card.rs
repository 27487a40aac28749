use yew::prelude::*;

use crate::theme::{Elevation, Padding, Rounded};

#[derive(Properties, PartialEq)]
pub struct CardProps {
    pub children: Children,
    #[prop_or_default]
    pub elevation: Elevation,
    #[prop_or_default]
    pub padding: Padding,
    #[prop_or_default]
    pub rounded: Rounded,
    #[prop_or_default]
    pub hoverable: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let class = classes!(
        "bg-white",
        "border",
        "border-slate-100",
        props.elevation.classes(),
        props.padding.classes(),
        props.rounded.classes(),
        props
            .hoverable
            .then_some("transition-all duration-300 hover:shadow-xl hover:-translate-y-1"),
        props.class.clone(),
    );
    html! {
        <div class={class}>
            { for props.children.iter() }
        </div>
    }
}
