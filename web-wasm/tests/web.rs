//! ブラウザ上での結合テスト（wasm-pack test --headless --firefox）
#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use code_smell_common::{AssistAction, AssistOutcome, CopyFeedback, UiConfig, COPIED_LABEL, COPY_LABEL};
use code_smell_wasm::components::copy_button::flash_copied;
use code_smell_wasm::results::{assist_panel, collapsible, fixes, reveal, summary, PageContext};
use code_smell_wasm::{dom, upload};
use gloo::timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    DataTransfer, DragEvent, DragEventInit, Element, Event, EventInit, File, HtmlButtonElement,
    HtmlElement, HtmlInputElement,
};

wasm_bindgen_test_configure!(run_in_browser);

/// body 直下にHTML断片を差し込む（テスト後に remove する）
fn fixture(html: &str) -> HtmlElement {
    let document = dom::document().unwrap();
    let root: HtmlElement = dom::create(&document, "div").unwrap();
    root.set_inner_html(html);
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn context() -> PageContext {
    PageContext::new(dom::document().unwrap(), UiConfig::default())
}

fn html_by_id(id: &str) -> HtmlElement {
    dom::by_id(&dom::document().unwrap(), id).unwrap()
}

// =============================================
// 指摘カード・サマリー
// =============================================

#[wasm_bindgen_test]
fn test_issue_card_toggles() {
    let root = fixture(
        r#"<div class="issue-card">
             <div class="issue-header" id="t-header">Long Method</div>
             <div class="issue-body" id="t-body">details</div>
           </div>"#,
    );
    collapsible::setup(&context()).unwrap();

    let header = html_by_id("t-header");
    let body = html_by_id("t-body");
    let indicator: HtmlElement = header.last_element_child().unwrap().dyn_into().unwrap();
    assert_eq!(indicator.text_content().unwrap(), "\u{25BC}");

    header.click();
    assert!(dom::is_hidden(&body));
    assert_eq!(
        indicator.style().get_property_value("transform").unwrap(),
        "rotate(-90deg)"
    );

    header.click();
    assert!(!dom::is_hidden(&body));
    assert_eq!(
        indicator.style().get_property_value("transform").unwrap(),
        "rotate(0deg)"
    );

    root.remove();
}

#[wasm_bindgen_test]
fn test_card_without_body_is_skipped() {
    let root = fixture(
        r#"<div class="issue-card"><div class="issue-header" id="t-lonely">only header</div></div>"#,
    );
    collapsible::setup(&context()).unwrap();
    assert_eq!(html_by_id("t-lonely").child_element_count(), 0);
    root.remove();
}

#[wasm_bindgen_test]
fn test_summary_badge_is_appended() {
    let root = fixture(
        r#"<div id="analysis-summary">{"smell_count": 3, "status": "Has Issues"}</div>
           <div class="results-header" id="t-results-header"></div>"#,
    );
    let ctx = context();
    assert_eq!(summary::read_summary(&ctx).smell_count, 3);

    summary::setup(&ctx);
    let header = html_by_id("t-results-header");
    assert_eq!(header.text_content().unwrap().trim(), "3 Code Smells Detected");
    let badge = header.first_element_child().unwrap();
    assert!(badge.class_name().contains("summary-badge--warning"));

    root.remove();
}

#[wasm_bindgen_test]
fn test_broken_summary_uses_default() {
    let root = fixture(r#"<div id="analysis-summary">{oops</div>"#);
    let summary = summary::read_summary(&context());
    assert_eq!(summary.status, "No Issues Found");
    root.remove();
}

// =============================================
// フェードイン
// =============================================

#[wasm_bindgen_test]
async fn test_reveal_staggers_and_shows_visible_card() {
    let root = fixture(
        r#"<div class="ml-card" id="t-card-top" style="position: fixed; top: 0; left: 0; width: 120px; height: 40px"></div>
           <div class="ml-card" id="t-card-mid"></div>
           <div class="ml-card" id="t-card-far" style="position: fixed; top: 10000px; left: 0; width: 120px; height: 40px"></div>"#,
    );
    reveal::setup(&context()).unwrap();

    let top = html_by_id("t-card-top");
    let mid = html_by_id("t-card-mid");
    let far = html_by_id("t-card-far");
    assert_eq!(top.get_attribute("data-reveal-index").as_deref(), Some("0"));
    assert_eq!(far.get_attribute("data-reveal-index").as_deref(), Some("2"));
    assert!(mid
        .style()
        .get_property_value("transition")
        .unwrap()
        .contains("100ms"));
    assert!(far
        .style()
        .get_property_value("transition")
        .unwrap()
        .contains("200ms"));

    // 監視コールバックは非同期で来る
    TimeoutFuture::new(300).await;
    assert_eq!(top.style().get_property_value("opacity").unwrap(), "1");
    assert_eq!(far.style().get_property_value("opacity").unwrap(), "");

    root.remove();
}

// =============================================
// コピーボタン
// =============================================

#[wasm_bindgen_test]
fn test_fix_block_gets_copy_button() {
    let root = fixture(r#"<div class="fix" id="t-fix"><p>Extract a helper method</p></div>"#);
    fixes::setup(&context());

    let button = html_by_id("t-fix").last_element_child().unwrap();
    assert_eq!(button.tag_name(), "BUTTON");
    assert_eq!(button.text_content().unwrap().trim(), COPY_LABEL);

    root.remove();
}

#[wasm_bindgen_test]
async fn test_copy_label_reverts_after_delay() {
    let (feedback, set_feedback) = signal(CopyFeedback::default());
    let label = move || feedback.with_untracked(|f| f.label().to_string());

    wasm_bindgen_futures::spawn_local(flash_copied(set_feedback, 200));
    TimeoutFuture::new(100).await;
    assert_eq!(label(), COPIED_LABEL);

    TimeoutFuture::new(200).await;
    assert_eq!(label(), COPY_LABEL);
}

#[wasm_bindgen_test]
async fn test_copy_click_during_window_restarts_timer() {
    let (feedback, set_feedback) = signal(CopyFeedback::default());
    let label = move || feedback.with_untracked(|f| f.label().to_string());

    wasm_bindgen_futures::spawn_local(flash_copied(set_feedback, 200));
    TimeoutFuture::new(100).await;
    wasm_bindgen_futures::spawn_local(flash_copied(set_feedback, 200));

    // 最初のタイマーが切れても新しい方が残っている
    TimeoutFuture::new(150).await;
    assert_eq!(label(), COPIED_LABEL);

    TimeoutFuture::new(150).await;
    assert_eq!(label(), COPY_LABEL);
}

// =============================================
// AIアシストパネル
// =============================================

#[wasm_bindgen_test]
fn test_ask_ai_button_attributes() {
    let root = fixture(
        r#"<button class="btn-ask-ai" id="t-ask" data-smell-type="LargeClass" data-code-snippet="class A: pass"></button>
           <button class="btn-ask-ai" id="t-ask-explain" data-ai-action="explain" data-smell-type=""></button>"#,
    );
    let document = dom::document().unwrap();

    let button: Element = dom::by_id(&document, "t-ask").unwrap();
    let (action, request) = assist_panel::ask_ai_request(&button);
    assert_eq!(action, AssistAction::Refactor);
    assert_eq!(request.code, "class A: pass");
    assert_eq!(request.smell_type.as_deref(), Some("LargeClass"));

    let button: Element = dom::by_id(&document, "t-ask-explain").unwrap();
    let (action, request) = assist_panel::ask_ai_request(&button);
    assert_eq!(action, AssistAction::Explain);
    assert!(request.code.is_empty());
    assert!(request.smell_type.is_none());

    root.remove();
}

const PANEL_HTML: &str = r#"<div id="ai-output-container" style="display: none">
     <h3 id="ai-output-title"></h3>
     <pre id="ai-output-content"></pre>
     <button id="ai-close-btn">Close</button>
   </div>"#;

#[wasm_bindgen_test]
fn test_assist_panel_loading_result_and_close() {
    let root = fixture(PANEL_HTML);
    let controller = assist_panel::setup(&context()).unwrap().unwrap();
    let container = html_by_id("ai-output-container");
    let title = html_by_id("ai-output-title");
    let content = html_by_id("ai-output-content");

    controller.begin();
    assert!(!dom::is_hidden(&container));
    assert_eq!(title.text_content().unwrap(), "Loading...");
    assert_eq!(controller.panel().outcome(), Some(&AssistOutcome::Loading));

    controller.complete(AssistOutcome::from_http(500, ""));
    assert_eq!(title.text_content().unwrap(), "Error");
    assert!(content.text_content().unwrap().contains("500"));

    html_by_id("ai-close-btn").click();
    assert!(dom::is_hidden(&container));
    assert!(!controller.panel().is_visible());

    controller.detach();
    root.remove();
}

#[wasm_bindgen_test]
fn test_assist_panel_shows_latest_result() {
    let root = fixture(PANEL_HTML);
    let controller = assist_panel::setup(&context()).unwrap().unwrap();

    controller.begin();
    controller.begin();
    controller.complete(AssistOutcome::from_http(
        200,
        r#"{"success": true, "type": "refactor", "result": "slow"}"#,
    ));
    controller.complete(AssistOutcome::from_http(
        200,
        r#"{"success": true, "type": "explain", "result": "X does Y"}"#,
    ));
    assert_eq!(html_by_id("ai-output-title").text_content().unwrap(), "Explain Result");
    assert_eq!(html_by_id("ai-output-content").text_content().unwrap(), "X does Y");

    controller.detach();
    root.remove();
}

#[wasm_bindgen_test]
fn test_detached_panel_ignores_close() {
    let root = fixture(PANEL_HTML);
    let controller = assist_panel::setup(&context()).unwrap().unwrap();
    controller.begin();
    controller.detach();

    html_by_id("ai-close-btn").click();
    assert!(controller.panel().is_visible());

    root.remove();
}

#[wasm_bindgen_test]
fn test_missing_panel_is_noop() {
    assert!(assist_panel::setup(&context()).unwrap().is_none());
}

// =============================================
// アップロード
// =============================================

const UPLOAD_HTML: &str = r#"<div id="uploadSection">
     <form id="uploadForm">
       <div id="dropZone"></div>
       <input type="file" id="fileInput">
       <div id="filePreview"><span id="fileName"></span><span id="fileSize"></span>
         <button type="button" id="removeFile">x</button></div>
       <button type="submit" id="submitBtn">Analyze</button>
     </form>
   </div>
   <div id="loading"></div>"#;

/// 通知内容を記録するアップロード欄を用意する
fn attach_upload() -> (HtmlElement, Rc<upload::UploadController>, Rc<RefCell<Vec<String>>>) {
    let root = fixture(UPLOAD_HTML);
    let alerts = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&alerts);
    let controller = upload::UploadController::attach_with_alert(
        &dom::document().unwrap(),
        &UiConfig::default(),
        move |message| sink.borrow_mut().push(message.to_string()),
    )
    .unwrap();
    (root, controller, alerts)
}

fn transfer(names: &[&str]) -> DataTransfer {
    let transfer = DataTransfer::new().unwrap();
    for name in names {
        let parts = js_sys::Array::of1(&"print('hello')\n".into());
        let file = File::new_with_str_sequence(&parts, name).unwrap();
        transfer.items().add_with_file(&file).unwrap();
    }
    transfer
}

fn file_input() -> HtmlInputElement {
    dom::by_id(&dom::document().unwrap(), "fileInput").unwrap()
}

/// ファイルダイアログで選んだのと同じ状態にして change を発火
fn pick(names: &[&str]) {
    let input = file_input();
    input.set_files(transfer(names).files().as_ref());
    input.dispatch_event(&Event::new("change").unwrap()).unwrap();
}

fn input_file_names() -> Vec<String> {
    let files = file_input().files().unwrap();
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| file.name())
        .collect()
}

fn drag_event(kind: &str, names: &[&str]) -> DragEvent {
    let init = DragEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_data_transfer(Some(&transfer(names)));
    DragEvent::new_with_event_init_dict(kind, &init).unwrap()
}

/// 合成の submit は実際には送信されない。取り消されたら false。
fn dispatch_submit() -> bool {
    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    html_by_id("uploadForm").dispatch_event(&event).unwrap()
}

fn text(id: &str) -> String {
    html_by_id(id).text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
fn test_upload_widget_initial_render_and_remove() {
    let (root, controller, _) = attach_upload();

    let submit: HtmlButtonElement = dom::by_id(&dom::document().unwrap(), "submitBtn").unwrap();
    assert!(submit.disabled());
    assert!(dom::is_hidden(&html_by_id("filePreview")));
    assert!(dom::is_hidden(&html_by_id("loading")));
    assert!(!dom::is_hidden(&html_by_id("dropZone")));

    html_by_id("removeFile").click();
    assert!(controller.widget().selected_file().is_none());
    assert!(submit.disabled());

    root.remove();
}

#[wasm_bindgen_test]
fn test_pick_valid_file_shows_preview() {
    let (root, _controller, alerts) = attach_upload();

    pick(&["smelly.py"]);
    assert_eq!(text("fileName"), "smelly.py");
    assert!(!text("fileSize").is_empty());
    assert!(!dom::is_hidden(&html_by_id("filePreview")));
    assert!(dom::is_hidden(&html_by_id("dropZone")));
    let submit: HtmlButtonElement = dom::by_id(&dom::document().unwrap(), "submitBtn").unwrap();
    assert!(!submit.disabled());
    assert!(alerts.borrow().is_empty());

    root.remove();
}

#[wasm_bindgen_test]
fn test_rejected_pick_restores_previous_file() {
    let (root, controller, alerts) = attach_upload();

    pick(&["a.py"]);
    pick(&["notes.txt"]);

    assert_eq!(*alerts.borrow(), vec!["Please upload a Python (.py) file".to_string()]);
    assert_eq!(text("fileName"), "a.py");
    assert_eq!(controller.widget().selected_file().unwrap().name, "a.py");
    // フォームが送るのも a.py のまま
    assert_eq!(input_file_names(), vec!["a.py".to_string()]);

    root.remove();
}

#[wasm_bindgen_test]
fn test_rejected_pick_on_empty_clears_input() {
    let (root, controller, alerts) = attach_upload();

    pick(&["notes.txt"]);
    assert_eq!(alerts.borrow().len(), 1);
    assert!(controller.widget().selected_file().is_none());
    assert!(input_file_names().is_empty());

    root.remove();
}

#[wasm_bindgen_test]
fn test_cancelled_pick_keeps_selected_file() {
    let (root, _controller, alerts) = attach_upload();

    pick(&["a.py"]);
    pick(&[]);
    assert!(alerts.borrow().is_empty());
    assert_eq!(text("fileName"), "a.py");
    assert_eq!(input_file_names(), vec!["a.py".to_string()]);

    root.remove();
}

#[wasm_bindgen_test]
fn test_remove_clears_input() {
    let (root, controller, _) = attach_upload();

    pick(&["a.py"]);
    html_by_id("removeFile").click();
    assert!(controller.widget().selected_file().is_none());
    assert!(input_file_names().is_empty());
    assert!(!dom::is_hidden(&html_by_id("dropZone")));

    // 削除後の不正ファイルで古い選択が戻ってこない
    pick(&["notes.txt"]);
    assert!(input_file_names().is_empty());

    root.remove();
}

#[wasm_bindgen_test]
fn test_drop_highlights_and_assigns_input() {
    let (root, controller, alerts) = attach_upload();
    let drop_zone = html_by_id("dropZone");

    let over = drag_event("dragover", &[]);
    drop_zone.dispatch_event(&over).unwrap();
    assert!(over.default_prevented());
    assert!(drop_zone.class_list().contains("drag-over"));

    let drop = drag_event("drop", &["dropped.py"]);
    drop_zone.dispatch_event(&drop).unwrap();
    assert!(drop.default_prevented());
    assert!(!drop_zone.class_list().contains("drag-over"));
    assert_eq!(controller.widget().selected_file().unwrap().name, "dropped.py");
    assert_eq!(input_file_names(), vec!["dropped.py".to_string()]);
    assert!(alerts.borrow().is_empty());

    root.remove();
}

#[wasm_bindgen_test]
fn test_rejected_drop_alerts_once() {
    let (root, controller, alerts) = attach_upload();

    html_by_id("dropZone")
        .dispatch_event(&drag_event("drop", &["image.png"]))
        .unwrap();
    assert_eq!(alerts.borrow().len(), 1);
    assert!(controller.widget().selected_file().is_none());
    assert!(!dom::is_hidden(&html_by_id("dropZone")));

    root.remove();
}

#[wasm_bindgen_test]
fn test_submit_without_file_is_cancelled() {
    let (root, _controller, _) = attach_upload();

    assert!(!dispatch_submit());
    assert!(!dom::is_hidden(&html_by_id("uploadSection")));
    assert!(dom::is_hidden(&html_by_id("loading")));

    root.remove();
}

#[wasm_bindgen_test]
fn test_submit_with_file_shows_loading() {
    let (root, controller, _) = attach_upload();

    pick(&["a.py"]);
    assert!(dispatch_submit());
    assert!(dom::is_hidden(&html_by_id("uploadSection")));
    assert!(!dom::is_hidden(&html_by_id("loading")));

    // 送信後は選び直しても変わらない
    pick(&["b.py"]);
    assert_eq!(controller.widget().selected_file().unwrap().name, "a.py");
    assert_eq!(input_file_names(), vec!["a.py".to_string()]);

    root.remove();
}

#[wasm_bindgen_test]
fn test_upload_requires_all_elements() {
    let root = fixture(r#"<div id="dropZone"></div>"#);
    let document = dom::document().unwrap();
    assert!(upload::UploadController::attach(&document, &UiConfig::default()).is_err());
    root.remove();
}
