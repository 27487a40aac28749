use yew::prelude::*;

use crate::theme::{Align, TitleSize};

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub align: Align,
    #[prop_or_default]
    pub size: TitleSize,
    /// Small pill rendered above the heading.
    #[prop_or_default]
    pub badge: Option<AttrValue>,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class={classes!("mb-12", props.align.classes())}>
            if let Some(badge) = &props.badge {
                <span class="inline-block px-3 py-1 mb-4 text-sm font-semibold text-blue-700 bg-blue-100 rounded-full">
                    { badge.clone() }
                </span>
            }
            <h2 class={classes!("font-bold", "text-slate-900", "mb-4", props.size.title_classes())}>
                { props.title.clone() }
            </h2>
            if let Some(subtitle) = &props.subtitle {
                <p class={classes!("text-slate-600", "max-w-3xl", "mx-auto", props.size.subtitle_classes())}>
                    { subtitle.clone() }
                </p>
            }
        </div>
    }
}
