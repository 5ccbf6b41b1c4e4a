//! AIアシストパネル
//!
//! 固定ボタン3つ（explain / optimize / refactor）と、後から描画される
//! `.btn-ask-ai` ボタン（document への委譲リスナーで拾う）から起動する。
//! 同時に複数投げても止めない。最後に返ってきた結果が残る。

use std::cell::RefCell;
use std::rc::Rc;

use code_smell_common::{AssistAction, AssistOutcome, AssistPanel, AssistRequest};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};

use super::PageContext;
use crate::api::assist::request_suggestion;
use crate::dom;
use crate::error::Result;

const OUTPUT_CONTAINER_ID: &str = "ai-output-container";
const OUTPUT_TITLE_ID: &str = "ai-output-title";
const OUTPUT_CONTENT_ID: &str = "ai-output-content";
const CLOSE_BUTTON_ID: &str = "ai-close-btn";
const CODE_CONTENT_ID: &str = "code-content";

pub const ASK_AI_SELECTOR: &str = ".btn-ask-ai";
const SMELL_TYPE_ATTR: &str = "data-smell-type";
const CODE_SNIPPET_ATTR: &str = "data-code-snippet";
const ACTION_ATTR: &str = "data-ai-action";

const FIXED_BUTTONS: [(&str, AssistAction); 3] = [
    ("ai-explain-btn", AssistAction::Explain),
    ("ai-optimize-btn", AssistAction::Optimize),
    ("ai-refactor-btn", AssistAction::Refactor),
];

struct PanelElements {
    container: HtmlElement,
    title: Element,
    content: Element,
}

pub struct AssistController {
    elements: PanelElements,
    panel: RefCell<AssistPanel>,
    api_base: String,
    /// ページが生きている間は保持する（detach で外す）
    listeners: RefCell<Vec<EventListener>>,
}

/// パネルが無いページでは何もせず None
pub fn setup(ctx: &PageContext) -> Result<Option<Rc<AssistController>>> {
    let document = &ctx.document;
    let (Some(container), Some(title), Some(content)) = (
        dom::optional_by_id::<HtmlElement>(document, OUTPUT_CONTAINER_ID),
        dom::optional_by_id::<Element>(document, OUTPUT_TITLE_ID),
        dom::optional_by_id::<Element>(document, OUTPUT_CONTENT_ID),
    ) else {
        return Ok(None);
    };

    let controller = Rc::new(AssistController {
        elements: PanelElements {
            container,
            title,
            content,
        },
        panel: RefCell::new(AssistPanel::new()),
        api_base: ctx.config.api_base.clone(),
        listeners: RefCell::new(Vec::new()),
    });
    let mut listeners = Vec::new();

    let code = dom::optional_by_id::<Element>(document, CODE_CONTENT_ID)
        .map(|el| dom::text_of(&el).trim().to_string())
        .unwrap_or_default();

    for (id, action) in FIXED_BUTTONS {
        if let Some(button) = dom::optional_by_id::<Element>(document, id) {
            let this = Rc::clone(&controller);
            let code = code.clone();
            listeners.push(EventListener::new(&button, "click", move |_| {
                this.trigger(action, AssistRequest::new(code.clone()));
            }));
        }
    }

    if let Some(close) = dom::optional_by_id::<Element>(document, CLOSE_BUTTON_ID) {
        let this = Rc::clone(&controller);
        listeners.push(EventListener::new(&close, "click", move |_| {
            this.panel.borrow_mut().close();
            this.render();
        }));
    }

    let this = Rc::clone(&controller);
    listeners.push(EventListener::new(document, "click", move |event| {
        let Some(button) = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|target| target.closest(ASK_AI_SELECTOR).ok().flatten())
        else {
            return;
        };
        let (action, request) = ask_ai_request(&button);
        this.trigger(action, request);
    }));

    *controller.listeners.borrow_mut() = listeners;
    Ok(Some(controller))
}

/// `.btn-ask-ai` ボタンの data 属性からリクエストを作る（既定は refactor）
pub fn ask_ai_request(button: &Element) -> (AssistAction, AssistRequest) {
    let action = button
        .get_attribute(ACTION_ATTR)
        .and_then(|value| AssistAction::parse(&value))
        .unwrap_or(AssistAction::Refactor);
    let code = button.get_attribute(CODE_SNIPPET_ATTR).unwrap_or_default();
    let request = AssistRequest::new(code).with_smell_type(button.get_attribute(SMELL_TYPE_ATTR));
    (action, request)
}

impl AssistController {
    pub fn panel(&self) -> AssistPanel {
        self.panel.borrow().clone()
    }

    /// ローディング表示にしてからリクエストを投げる
    pub fn trigger(self: &Rc<Self>, action: AssistAction, request: AssistRequest) {
        self.begin();

        let this = Rc::clone(self);
        spawn_local(async move {
            let outcome = request_suggestion(&this.api_base, action, &request).await;
            this.complete(outcome);
        });
    }

    pub fn begin(&self) {
        self.panel.borrow_mut().begin();
        self.render();
    }

    /// 結果の反映。後から届いたものが上書きする。
    pub fn complete(&self, outcome: AssistOutcome) {
        self.panel.borrow_mut().resolve(outcome);
        self.render();
    }

    /// 登録したリスナーを全部外す
    pub fn detach(&self) {
        self.listeners.borrow_mut().clear();
    }

    fn render(&self) {
        let panel = self.panel.borrow();
        if let Some(view) = panel.view() {
            self.elements.title.set_text_content(Some(&view.title));
            self.elements.content.set_text_content(Some(&view.content));
        }
        dom::set_visible(&self.elements.container, panel.is_visible());
    }
}
