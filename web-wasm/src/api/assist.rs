//! AIアシストAPI (`POST {api_base}/{explain|optimize|refactor}`)
//!
//! タイムアウト・キャンセルはしない。

use code_smell_common::{AssistAction, AssistOutcome, AssistRequest};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::dom;
use crate::error::Result;

/// リクエストを送り、結果を AssistOutcome にまとめる
///
/// 通信失敗も含めて必ず何らかの結果を返す。
pub async fn request_suggestion(
    api_base: &str,
    action: AssistAction,
    request: &AssistRequest,
) -> AssistOutcome {
    match post_json(&action.endpoint(api_base), request).await {
        Ok((status, body)) => AssistOutcome::from_http(status, &body),
        Err(e) => AssistOutcome::failure(e),
    }
}

/// (HTTPステータス, ボディ文字列)
async fn post_json(url: &str, payload: &AssistRequest) -> Result<(u16, String)> {
    let body = payload.to_json()?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = dom::window()?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    Ok((resp.status(), text.as_string().unwrap_or_default()))
}
