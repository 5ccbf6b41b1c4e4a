//! アップロード画面のコントローラー
//!
//! 状態は `UploadWidget` が持ち、DOMはその `view()` を反映するだけ。

use std::cell::RefCell;
use std::rc::Rc;

use code_smell_common::{SelectedFile, Selection, UiConfig, UploadWidget};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{
    Document, DragEvent, Element, Event, FileList, HtmlButtonElement, HtmlElement,
    HtmlInputElement,
};

use crate::dom;
use crate::error::Result;

pub const DROP_ZONE_ID: &str = "dropZone";
const FILE_INPUT_ID: &str = "fileInput";
const PREVIEW_ID: &str = "filePreview";
const FILE_NAME_ID: &str = "fileName";
const FILE_SIZE_ID: &str = "fileSize";
const REMOVE_ID: &str = "removeFile";
const SUBMIT_ID: &str = "submitBtn";
const FORM_ID: &str = "uploadForm";
const LOADING_ID: &str = "loading";
const SECTION_ID: &str = "uploadSection";

const DRAG_OVER_CLASS: &str = "drag-over";

struct UploadElements {
    drop_zone: HtmlElement,
    file_input: HtmlInputElement,
    preview: HtmlElement,
    file_name: Element,
    file_size: Element,
    remove_button: Element,
    submit_button: HtmlButtonElement,
    form: Element,
    loading: HtmlElement,
    section: HtmlElement,
}

impl UploadElements {
    fn query(document: &Document) -> Result<Self> {
        Ok(Self {
            drop_zone: dom::by_id(document, DROP_ZONE_ID)?,
            file_input: dom::by_id(document, FILE_INPUT_ID)?,
            preview: dom::by_id(document, PREVIEW_ID)?,
            file_name: dom::by_id(document, FILE_NAME_ID)?,
            file_size: dom::by_id(document, FILE_SIZE_ID)?,
            remove_button: dom::by_id(document, REMOVE_ID)?,
            submit_button: dom::by_id(document, SUBMIT_ID)?,
            form: dom::by_id(document, FORM_ID)?,
            loading: dom::by_id(document, LOADING_ID)?,
            section: dom::by_id(document, SECTION_ID)?,
        })
    }
}

pub struct UploadController {
    elements: UploadElements,
    widget: RefCell<UploadWidget>,
    /// 最後に受け付けた FileList。拒否・キャンセル時に input をこれに戻す。
    accepted: RefCell<Option<FileList>>,
    alert: Box<dyn Fn(&str)>,
}

impl UploadController {
    /// 要素を取得してイベントを登録する
    pub fn attach(document: &Document, config: &UiConfig) -> Result<Rc<Self>> {
        Self::attach_with_alert(document, config, gloo::dialogs::alert)
    }

    /// 拒否時の通知先を差し替えて登録する
    pub fn attach_with_alert<A>(document: &Document, config: &UiConfig, alert: A) -> Result<Rc<Self>>
    where
        A: Fn(&str) + 'static,
    {
        let controller = Rc::new(Self {
            elements: UploadElements::query(document)?,
            widget: RefCell::new(UploadWidget::new(config.accepted_extension.clone())),
            accepted: RefCell::new(None),
            alert: Box::new(alert),
        });
        controller.bind();
        controller.render();
        Ok(controller)
    }

    pub fn widget(&self) -> UploadWidget {
        self.widget.borrow().clone()
    }

    fn bind(self: &Rc<Self>) {
        let drop_zone = &self.elements.drop_zone;

        // ドラッグ系はブラウザ既定動作（ファイルを開く等）を止める
        for event_name in ["dragenter", "dragover"] {
            let this = Rc::clone(self);
            on_cancelable(drop_zone, event_name, move |event| {
                suppress(event);
                this.widget.borrow_mut().drag_over();
                this.render();
            });
        }

        let this = Rc::clone(self);
        on_cancelable(drop_zone, "dragleave", move |event| {
            suppress(event);
            this.widget.borrow_mut().drag_leave();
            this.render();
        });

        let this = Rc::clone(self);
        on_cancelable(drop_zone, "drop", move |event| {
            suppress(event);
            let files = event
                .dyn_ref::<DragEvent>()
                .and_then(|e| e.data_transfer())
                .and_then(|dt| dt.files());
            this.handle_files(files, true);
        });

        let this = Rc::clone(self);
        EventListener::new(drop_zone, "click", move |_| {
            this.elements.file_input.click();
        })
        .forget();

        let this = Rc::clone(self);
        EventListener::new(&self.elements.file_input, "change", move |_| {
            let files = this.elements.file_input.files();
            this.handle_files(files, false);
        })
        .forget();

        let this = Rc::clone(self);
        EventListener::new(&self.elements.remove_button, "click", move |_| {
            if this.widget.borrow_mut().remove() {
                this.accepted.borrow_mut().take();
                this.elements.file_input.set_value("");
            }
            this.render();
        })
        .forget();

        // 実際の送信・遷移はページ側に任せる
        let this = Rc::clone(self);
        on_cancelable(&self.elements.form, "submit", move |event| {
            if !this.widget.borrow_mut().submit() {
                event.prevent_default();
            }
            this.render();
        });
    }

    fn handle_files(&self, files: Option<FileList>, dropped: bool) {
        let Some(files) = files else {
            self.restore_input();
            return;
        };
        let selected: Vec<SelectedFile> = (0..files.length())
            .filter_map(|i| files.get(i))
            .map(|file| SelectedFile::new(file.name(), file.size() as u64))
            .collect();

        let result = {
            let mut widget = self.widget.borrow_mut();
            if dropped {
                widget.drop_files(selected)
            } else {
                widget.select(selected)
            }
        };

        match result {
            Ok(Selection::Accepted) => {
                // ドロップしたファイルもフォーム送信に乗せる
                if dropped {
                    self.elements.file_input.set_files(Some(&files));
                }
                *self.accepted.borrow_mut() = Some(files);
            }
            Ok(Selection::Ignored) => self.restore_input(),
            Err(e) => {
                // ファイルダイアログは input を書き換え済みなので戻してから通知
                self.restore_input();
                (self.alert)(&e.to_string());
            }
        }
        self.render();
    }

    /// input の中身を受け付け済みのファイルに揃える
    fn restore_input(&self) {
        match self.accepted.borrow().as_ref() {
            Some(files) => self.elements.file_input.set_files(Some(files)),
            None => self.elements.file_input.set_value(""),
        }
    }

    fn render(&self) {
        let view = self.widget.borrow().view();
        let el = &self.elements;

        dom::set_visible(&el.drop_zone, view.drop_zone_visible);
        dom::set_visible(&el.preview, view.preview_visible);
        el.submit_button.set_disabled(!view.submit_enabled);
        el.file_name.set_text_content(Some(&view.file_name));
        el.file_size.set_text_content(Some(&view.file_size));
        dom::set_visible(&el.section, view.section_visible);
        dom::set_visible(&el.loading, view.loading_visible);

        let classes = el.drop_zone.class_list();
        let _ = if view.highlighted {
            classes.add_1(DRAG_OVER_CLASS)
        } else {
            classes.remove_1(DRAG_OVER_CLASS)
        };
    }
}

/// preventDefault できるように passive でないリスナーを登録
fn on_cancelable<F>(target: &web_sys::EventTarget, event_name: &'static str, callback: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        event_name,
        EventListenerOptions::enable_prevent_default(),
        callback,
    )
    .forget();
}

fn suppress(event: &Event) {
    event.prevent_default();
    event.stop_propagation();
}
