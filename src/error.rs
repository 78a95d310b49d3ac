use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

/// Failures while talking to the browser.
///
/// None of these are fatal for the page: callers log them and fall back
/// to static, unanimated content.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DomError {
    #[error("window is not available")]
    WindowUnavailable,

    #[error("document is not available")]
    DocumentUnavailable,

    #[error("element not found: {0}")]
    MissingElement(String),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<serde_wasm_bindgen::Error> for DomError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        DomError::Js(err.to_string())
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::WindowUnavailable)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::DocumentUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_missing_piece() {
        assert_eq!(DomError::WindowUnavailable.to_string(), "window is not available");
        assert_eq!(
            DomError::MissingElement("#contact".to_string()).to_string(),
            "element not found: #contact"
        );
    }
}
