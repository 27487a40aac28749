use log::warn;
use yew::prelude::*;

use crate::config::use_site_config;
use crate::error::{Result, SiteError};
use crate::motion::reveal::{MotionPreference, RevealMotion};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

pub fn prefers_reduced_motion() -> Result<bool> {
    let window = web_sys::window().ok_or(SiteError::MissingCapability("window"))?;
    let query = window
        .match_media(REDUCED_MOTION_QUERY)?
        .ok_or(SiteError::MissingCapability("matchMedia"))?;
    Ok(query.matches())
}

#[hook]
pub fn use_motion_preference() -> MotionPreference {
    let preference = use_state(|| match prefers_reduced_motion() {
        Ok(true) => MotionPreference::Reduced,
        Ok(false) => MotionPreference::Full,
        Err(e) => {
            warn!("Assuming full motion: {}", e);
            MotionPreference::Full
        }
    });
    *preference
}

#[hook]
pub fn use_reveal_motion() -> RevealMotion {
    let config = use_site_config();
    let preference = use_motion_preference();
    RevealMotion::from_config(&config, preference)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn media_query_is_available_in_browsers() {
        assert!(prefers_reduced_motion().is_ok());
    }
}
