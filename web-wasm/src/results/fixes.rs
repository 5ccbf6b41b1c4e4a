//! 修正案ブロックへのコピーボタン追加

use leptos::prelude::*;
use web_sys::{Element, HtmlElement};

use super::PageContext;
use crate::components::copy_button::CopyFixButton;
use crate::dom;

pub const FIX_SELECTOR: &str = ".fix";

pub fn setup(ctx: &PageContext) {
    let feedback_ms = ctx.config.copy_feedback_ms;
    for fix in dom::select_all::<HtmlElement>(&ctx.document, FIX_SELECTOR) {
        let text = dom::select_in::<Element>(&fix, "p")
            .map(|p| dom::text_of(&p))
            .unwrap_or_default();
        leptos::mount::mount_to(fix, move || {
            view! { <CopyFixButton text=text feedback_ms=feedback_ms /> }
        })
        .forget();
    }
}
