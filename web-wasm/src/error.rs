//! ブラウザ側のエラー型

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Error, Debug)]
pub enum UiError {
    #[error("element not found: {0}")]
    MissingElement(String),

    /// JS側の例外（メッセージのみ保持）
    #[error("{0}")]
    Js(String),

    #[error(transparent)]
    Common(#[from] code_smell_common::Error),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(js_error_message(&value))
    }
}

/// JsValue から人間向けメッセージを取り出す
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

pub type Result<T> = std::result::Result<T, UiError>;
