use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Error)]
pub enum PageError {
    #[error("javascript error: {0}")]
    Js(String),
    #[error("request failed with status {0}")]
    Http(u16),
    #[error("missing element: {0}")]
    MissingElement(String),
    #[error("invalid query string: {0}")]
    Query(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for PageError {
    fn from(err: JsValue) -> Self {
        if let Some(message) = err.as_string() {
            return PageError::Js(message);
        }
        match err.dyn_into::<js_sys::Error>() {
            Ok(error) => PageError::Js(error.message().into()),
            Err(other) => PageError::Js(format!("{:?}", other)),
        }
    }
}

impl From<serde_urlencoded::de::Error> for PageError {
    fn from(err: serde_urlencoded::de::Error) -> Self {
        PageError::Query(err.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for PageError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        PageError::Query(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PageError>;
