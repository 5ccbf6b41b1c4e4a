//! Code Smell Detector Web UI (Leptos + WASM)
//!
//! サーバーが描画したページに後から振る舞いを付ける。
//! アップロード画面と結果画面で使う。

pub mod api;
pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod results;
pub mod upload;

use gloo::console;
use gloo::events::EventListener;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::error::Result;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = boot() {
        console::error!(format!("初期化に失敗: {}", e));
    }
}

/// DOM構築が終わっていなければ DOMContentLoaded まで待つ
fn boot() -> Result<()> {
    let document = dom::document()?;
    if document.ready_state() == "loading" {
        let loaded = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| start(&loaded)).forget();
    } else {
        start(&document);
    }
    Ok(())
}

fn start(document: &Document) {
    let config = config::load(document);

    if document.get_element_by_id(upload::DROP_ZONE_ID).is_some() {
        if let Err(e) = upload::UploadController::attach(document, &config) {
            console::error!(format!("アップロード欄の初期化に失敗: {}", e));
        }
    }

    let ctx = results::PageContext::new(document.clone(), config);
    results::wire(&ctx);
}
