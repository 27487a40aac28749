use std::rc::Rc;

use log::{info, warn};
use serde::Deserialize;
use yew::prelude::*;

use crate::error::{Result, SiteError};

const CONFIG_ELEMENT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn default_loading_delay_ms() -> u32 {
    0 // No artificial gate while developing locally
}

#[cfg(not(debug_assertions))]
pub fn default_loading_delay_ms() -> u32 {
    300
}

/// Every tunable number the page uses. Values can be overridden from an inline
/// `<script id="site-config" type="application/json">` block in index.html.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub scroll_throttle_ms: u32,
    pub nav_hide_threshold: f64,
    pub nav_scrolled_threshold: f64,
    pub nav_height: f64,
    pub reveal_duration_ms: u32,
    pub reveal_offset_px: f64,
    pub stagger_step_ms: u32,
    pub visibility_threshold: f64,
    pub carousel_interval_ms: u32,
    pub loading_delay_ms: u32,
    pub problem_activate_delay_ms: u32,
    pub scroll_top_threshold: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_throttle_ms: 100,
            nav_hide_threshold: 300.0,
            nav_scrolled_threshold: 20.0,
            nav_height: 80.0,
            reveal_duration_ms: 700,
            reveal_offset_px: 20.0,
            stagger_step_ms: 100,
            visibility_threshold: 0.1,
            carousel_interval_ms: 4000,
            loading_delay_ms: default_loading_delay_ms(),
            problem_activate_delay_ms: 1200,
            scroll_top_threshold: 400.0,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SiteConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(SiteError::InvalidConfig(format!(
                "visibility_threshold must be within 0..=1, got {}",
                self.visibility_threshold
            )));
        }
        if self.scroll_throttle_ms == 0 {
            return Err(SiteError::InvalidConfig(
                "scroll_throttle_ms must be positive".to_string(),
            ));
        }
        if self.carousel_interval_ms == 0 {
            return Err(SiteError::InvalidConfig(
                "carousel_interval_ms must be positive".to_string(),
            ));
        }
        if self.nav_hide_threshold < 0.0 || self.nav_height < 0.0 {
            return Err(SiteError::InvalidConfig(
                "nav offsets must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Reads the inline config block. A missing block is not an error.
    fn read_from_document() -> Result<Option<Self>> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(SiteError::MissingCapability("document"))?;
        match document.get_element_by_id(CONFIG_ELEMENT_ID) {
            Some(element) => {
                let raw = element.text_content().unwrap_or_default();
                Self::from_json(&raw).map(Some)
            }
            None => Ok(None),
        }
    }

    pub fn load() -> Self {
        match Self::read_from_document() {
            Ok(Some(config)) => {
                info!("Loaded site config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Ok(None) => Self::default(),
            Err(e) => {
                warn!("Falling back to default site config: {}", e);
                Self::default()
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct ConfigContext(pub Rc<SiteConfig>);

#[derive(Properties, PartialEq)]
pub struct ConfigProviderProps {
    pub config: Rc<SiteConfig>,
    pub children: Children,
}

#[function_component(ConfigProvider)]
pub fn config_provider(props: &ConfigProviderProps) -> Html {
    html! {
        <ContextProvider<ConfigContext> context={ConfigContext(props.config.clone())}>
            { for props.children.iter() }
        </ContextProvider<ConfigContext>>
    }
}

/// Falls back to defaults when rendered outside a provider.
#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    let context = use_context::<ConfigContext>();
    let fallback = use_state(|| Rc::new(SiteConfig::default()));
    match context {
        Some(ConfigContext(config)) => config,
        None => (*fallback).clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config = SiteConfig::from_json(r#"{ "nav_hide_threshold": 450 }"#).unwrap();
        assert_eq!(config.nav_hide_threshold, 450.0);
        assert_eq!(config.scroll_throttle_ms, 100);
        assert_eq!(config.carousel_interval_ms, 4000);
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{ nope").unwrap_err();
        assert!(matches!(err, SiteError::ConfigParse(_)));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "visibility_threshold": 1.5 }"#).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)));
    }

    #[test]
    fn zero_throttle_is_rejected() {
        let err = SiteConfig::from_json(r#"{ "scroll_throttle_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, SiteError::InvalidConfig(_)));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn load_reads_inline_config_block() {
        let document = web_sys::window().unwrap().document().unwrap();
        let script = document.create_element("script").unwrap();
        script.set_id(CONFIG_ELEMENT_ID);
        script.set_text_content(Some(r#"{ "stagger_step_ms": 150 }"#));
        document.body().unwrap().append_child(&script).unwrap();

        assert_eq!(SiteConfig::load().stagger_step_ms, 150);
        script.remove();
    }

    #[wasm_bindgen_test]
    fn load_falls_back_on_bad_block() {
        let document = web_sys::window().unwrap().document().unwrap();
        let script = document.create_element("script").unwrap();
        script.set_id(CONFIG_ELEMENT_ID);
        script.set_text_content(Some("not json"));
        document.body().unwrap().append_child(&script).unwrap();

        assert_eq!(SiteConfig::load(), SiteConfig::default());
        script.remove();
    }
}
