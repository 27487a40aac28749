use yew::prelude::*;

use crate::config::use_site_config;
use crate::hooks::{use_in_view, use_reveal_motion};
use crate::motion::visibility::VisibilityConfig;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or_default]
    pub delay_ms: u32,
    /// Defaults to the configured threshold, latched on first entry.
    #[prop_or_default]
    pub visibility: Option<VisibilityConfig>,
    /// Overrides the configured slide distance.
    #[prop_or_default]
    pub offset_px: Option<f64>,
    #[prop_or_default]
    pub class: Classes,
}

/// Observes its own box and fades the children in the first time it
/// scrolls into view.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let config = use_site_config();
    let node = use_node_ref();
    let visibility = props
        .visibility
        .clone()
        .unwrap_or_else(|| VisibilityConfig::once(config.visibility_threshold));
    let visible = use_in_view(node.clone(), visibility);
    let motion = use_reveal_motion();
    let motion = match props.offset_px {
        Some(offset) => motion.with_offset(offset),
        None => motion,
    };
    let style = motion.style(visible, props.delay_ms).css();

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
