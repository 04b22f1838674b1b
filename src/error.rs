use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures reading from or writing to the browser environment.
///
/// None of these reach the user. Callers log them and fall back to the
/// resting visual state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SiteError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<web_sys::Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<web_sys::Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}
