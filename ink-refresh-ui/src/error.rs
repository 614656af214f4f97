use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors raised while issuing a refresh or loading stats.
///
/// None of these reach the user; callers log them.
#[derive(Error, Debug)]
pub enum RefreshError {
    /// Body could not be encoded, or a response could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A browser API threw or a fetch promise rejected
    #[error("browser call failed: {0}")]
    Js(String),

    /// No `window` (not running in a browser)
    #[error("no browser window available")]
    NoWindow,

    /// Lookup by id found nothing
    #[error("no element with id '{0}'")]
    ElementNotFound(String),

    /// Server answered a stats request with a non-success status
    #[error("server answered with status {0}")]
    Status(u16),
}

impl From<JsValue> for RefreshError {
    fn from(value: JsValue) -> Self {
        RefreshError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}
