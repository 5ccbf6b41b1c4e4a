//! 結果ページのコントローラー
//!
//! 5つのセットアップは互いに独立。要素が無いものは何もしない。

pub mod assist_panel;
pub mod collapsible;
pub mod fixes;
pub mod reveal;
pub mod summary;

use code_smell_common::UiConfig;
use gloo::console;
use web_sys::Document;

/// セットアップ間で受け渡すページ情報
pub struct PageContext {
    pub document: Document,
    pub config: UiConfig,
}

impl PageContext {
    pub fn new(document: Document, config: UiConfig) -> Self {
        Self { document, config }
    }
}

pub fn wire(ctx: &PageContext) {
    report("reveal", reveal::setup(ctx));
    report("collapsible cards", collapsible::setup(ctx));
    fixes::setup(ctx);
    summary::setup(ctx);
    report("AI assist panel", assist_panel::setup(ctx).map(|_| ()));
}

fn report(step: &str, result: crate::error::Result<()>) {
    if let Err(e) = result {
        console::error!(format!("{} のセットアップに失敗: {}", step, e));
    }
}
