//! DOM操作の小物

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::error::{Result, UiError};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| UiError::MissingElement("window".into()))
}

pub fn document() -> Result<Document> {
    window()?
        .document()
        .ok_or_else(|| UiError::MissingElement("document".into()))
}

/// id で必須要素を取得
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    optional_by_id(document, id).ok_or_else(|| UiError::MissingElement(format!("#{}", id)))
}

pub fn optional_by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn select_one<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// 文書順で全件取得（型が合わないものは除く）
pub fn select_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    document
        .query_selector_all(selector)
        .map(collect_nodes)
        .unwrap_or_default()
}

pub fn select_in<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

fn collect_nodes<T: JsCast>(list: NodeList) -> Vec<T> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

pub fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| UiError::Js(format!("<{}> has an unexpected element type", tag)))
}

pub fn text_of(element: &Element) -> String {
    element.text_content().unwrap_or_default()
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn set_visible(element: &HtmlElement, visible: bool) {
    set_style(element, "display", if visible { "block" } else { "none" });
}

pub fn is_hidden(element: &HtmlElement) -> bool {
    element
        .style()
        .get_property_value("display")
        .map(|display| display == "none")
        .unwrap_or(false)
}
