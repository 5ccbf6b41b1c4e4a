//! サマリーバッジコンポーネント

use code_smell_common::AnalysisSummary;
use leptos::prelude::*;

#[component]
pub fn SmellBadge(summary: AnalysisSummary) -> impl IntoView {
    let badge = summary.badge();
    let (background, color) = badge.tone.palette();

    view! {
        <div
            class=badge.tone.class_name()
            style:background=background
            style:color=color
        >
            {badge.label}
        </div>
    }
}
