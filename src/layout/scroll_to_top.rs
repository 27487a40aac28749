use log::warn;
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::use_site_config;
use crate::error::{Result, SiteError};
use crate::hooks::{use_motion_preference, use_scroll_snapshot};
use crate::motion::reveal::MotionPreference;

pub fn scroll_to_top(preference: MotionPreference) -> Result<()> {
    let window = web_sys::window().ok_or(SiteError::MissingCapability("window"))?;
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(match preference {
        MotionPreference::Full => ScrollBehavior::Smooth,
        MotionPreference::Reduced => ScrollBehavior::Auto,
    });
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top_button() -> Html {
    let config = use_site_config();
    let snapshot = use_scroll_snapshot();
    let preference = use_motion_preference();
    let visible = snapshot.offset > config.scroll_top_threshold;

    let onclick = Callback::from(move |_: MouseEvent| {
        if let Err(e) = scroll_to_top(preference) {
            warn!("Scroll to top failed: {}", e);
        }
    });

    html! {
        <button
            aria-label="Scroll to top"
            class={classes!(
                "fixed",
                "bottom-6",
                "right-6",
                "z-40",
                "w-12",
                "h-12",
                "rounded-full",
                "bg-blue-600",
                "text-white",
                "shadow-lg",
                "hover:bg-blue-700",
                "transition-all",
                "duration-300",
                if visible { "opacity-100 translate-y-0" } else { "opacity-0 translate-y-4 pointer-events-none" },
            )}
            tabindex={if visible { "0" } else { "-1" }}
            {onclick}
        >
            {"↑"}
        </button>
    }
}
