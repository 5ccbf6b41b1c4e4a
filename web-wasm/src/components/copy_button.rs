//! 修正案コピーボタン

use code_smell_common::CopyFeedback;
use gloo::console;
use gloo::timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use crate::dom;
use crate::error::Result;

#[component]
pub fn CopyFixButton(text: String, feedback_ms: u32) -> impl IntoView {
    let (feedback, set_feedback) = signal(CopyFeedback::default());

    let on_click = move |_: MouseEvent| {
        let text = text.clone();
        spawn_local(async move {
            match write_clipboard(&text).await {
                Ok(()) => flash_copied(set_feedback, feedback_ms).await,
                Err(e) => console::error!(format!("クリップボードへの書き込みに失敗: {}", e)),
            }
        });
    };

    view! {
        <button type="button" class="copy-btn" on:click=on_click>
            {move || feedback.with(|f| f.label().to_string())}
        </button>
    }
}

/// 「コピーしました」表示にして、`feedback_ms` 後に元のラベルへ戻す
///
/// 途中で押し直されていれば戻すのは新しい方のタイマー。
pub async fn flash_copied(set_feedback: WriteSignal<CopyFeedback>, feedback_ms: u32) {
    let mut token = 0;
    set_feedback.update(|f| token = f.mark_copied());
    TimeoutFuture::new(feedback_ms).await;
    set_feedback.update(|f| {
        f.expire(token);
    });
}

async fn write_clipboard(text: &str) -> Result<()> {
    let promise = dom::window()?.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}
