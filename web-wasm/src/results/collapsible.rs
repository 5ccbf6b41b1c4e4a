//! 指摘カードの開閉

use std::cell::Cell;
use std::rc::Rc;

use code_smell_common::{CardToggle, EXPAND_INDICATOR};
use gloo::events::EventListener;
use web_sys::{Element, HtmlElement};

use super::PageContext;
use crate::dom;
use crate::error::Result;

pub const ISSUE_CARD_SELECTOR: &str = ".issue-card";
const HEADER_SELECTOR: &str = ".issue-header";
const BODY_SELECTOR: &str = ".issue-body";

pub fn setup(ctx: &PageContext) -> Result<()> {
    for card in dom::select_all::<Element>(&ctx.document, ISSUE_CARD_SELECTOR) {
        let (Some(header), Some(body)) = (
            dom::select_in::<HtmlElement>(&card, HEADER_SELECTOR),
            dom::select_in::<HtmlElement>(&card, BODY_SELECTOR),
        ) else {
            continue;
        };

        dom::set_style(&header, "cursor", "pointer");

        let indicator: HtmlElement = dom::create(&ctx.document, "span")?;
        indicator.set_text_content(Some(EXPAND_INDICATOR));
        dom::set_style(&indicator, "margin-left", "auto");
        dom::set_style(&indicator, "transition", "transform 0.3s ease");
        header.append_child(&indicator)?;

        let initial = body.style().get_property_value("display").unwrap_or_default();
        let state = Rc::new(Cell::new(CardToggle::from_body_display(&initial)));

        EventListener::new(&header, "click", move |_| {
            let mut toggle = state.get();
            toggle.toggle();
            state.set(toggle);
            dom::set_style(&body, "display", toggle.body_display());
            dom::set_style(&indicator, "transform", toggle.indicator_transform());
        })
        .forget();
    }
    Ok(())
}
