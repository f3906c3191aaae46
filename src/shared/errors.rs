use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Browser window unavailable")]
    WindowUnavailable,

    #[error("Document unavailable")]
    DocumentUnavailable,

    #[error("Element not found: #{0}")]
    ElementNotFound(String),

    #[error("Unknown section: {0:?}")]
    UnknownSection(String),

    #[error("Unknown theme: {0:?}")]
    UnknownTheme(String),

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for AppError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        AppError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
