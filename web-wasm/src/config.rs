//! ページ埋め込みのUI設定を読む

use code_smell_common::UiConfig;
use gloo::console;
use web_sys::Document;

pub const CONFIG_ELEMENT_ID: &str = "ui-config";

/// `#ui-config` があれば読み込み、無いか壊れていれば既定値
pub fn load(document: &Document) -> UiConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
    else {
        return UiConfig::default();
    };

    match UiConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            console::error!(format!("UI設定を読み込めません。既定値を使います: {}", e));
            UiConfig::default()
        }
    }
}
