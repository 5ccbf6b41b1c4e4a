//! カードのフェードイン

use std::cell::RefCell;
use std::rc::Rc;

use code_smell_common::{meets_threshold, reveal_transition, RevealTracker};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::PageContext;
use crate::dom;
use crate::error::Result;

pub const CARD_SELECTOR: &str = ".issue-card, .ml-card, .results-section";
const INDEX_ATTR: &str = "data-reveal-index";

pub fn setup(ctx: &PageContext) -> Result<()> {
    let cards: Vec<HtmlElement> = dom::select_all(&ctx.document, CARD_SELECTOR);
    if cards.is_empty() {
        return Ok(());
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(cards.len())));
    let threshold = ctx.config.reveal_threshold;
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };

                let visible =
                    meets_threshold(entry.is_intersecting(), entry.intersection_ratio(), threshold);
                if tracker.borrow_mut().observe(index, visible) {
                    if let Some(card) = target.dyn_ref::<HtmlElement>() {
                        dom::set_style(card, "opacity", "1");
                        dom::set_style(card, "transform", "translateY(0)");
                    }
                    // 一度出したら監視不要
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(ctx.config.reveal_threshold));
    options.set_root_margin(&ctx.config.reveal_root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for (index, card) in cards.iter().enumerate() {
        dom::set_style(
            card,
            "transition",
            &reveal_transition(index, ctx.config.reveal_stagger_ms),
        );
        card.set_attribute(INDEX_ATTR, &index.to_string())?;
        observer.observe(card);
    }
    Ok(())
}
