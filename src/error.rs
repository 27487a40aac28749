use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("failed to parse site config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("invalid site config: {0}")]
    InvalidConfig(String),

    #[error("browser capability unavailable: {0}")]
    MissingCapability(&'static str),

    #[error("no content for {0}")]
    EmptyContent(&'static str),

    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Dom(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
