//! サマリーバッジ

use code_smell_common::AnalysisSummary;
use gloo::console;
use leptos::prelude::*;
use web_sys::HtmlElement;

use super::PageContext;
use crate::components::summary_badge::SmellBadge;
use crate::dom;

pub const SUMMARY_ELEMENT_ID: &str = "analysis-summary";
const RESULTS_HEADER_SELECTOR: &str = ".results-header";

/// 埋め込みJSONを読む。壊れていればログだけ出して既定値。
pub fn read_summary(ctx: &PageContext) -> AnalysisSummary {
    let text = ctx
        .document
        .get_element_by_id(SUMMARY_ELEMENT_ID)
        .and_then(|el| el.text_content());

    AnalysisSummary::parse_embedded(text.as_deref()).unwrap_or_else(|e| {
        console::error!(format!("Error parsing analysis summary: {}", e));
        AnalysisSummary::default()
    })
}

pub fn setup(ctx: &PageContext) {
    let summary = read_summary(ctx);
    let Some(header) = dom::select_one::<HtmlElement>(&ctx.document, RESULTS_HEADER_SELECTOR)
    else {
        return;
    };
    leptos::mount::mount_to(header, move || view! { <SmellBadge summary=summary /> }).forget();
}
