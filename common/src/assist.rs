//! AIアシスト（explain / optimize / refactor）
//!
//! リクエスト・レスポンスの型と、結果をパネル表示に落とす純粋関数。
//! 複数リクエストの重複排除はしない。最後に解決した結果がパネルに残る。

use serde::{Deserialize, Serialize};

use crate::format::capitalize;

const FETCH_FAILURE_PREFIX: &str = "Failed to fetch AI suggestion";
const UNKNOWN_ERROR: &str = "An unknown error occurred.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistAction {
    Explain,
    Optimize,
    Refactor,
}

impl AssistAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssistAction::Explain => "explain",
            AssistAction::Optimize => "optimize",
            AssistAction::Refactor => "refactor",
        }
    }

    /// `data-ai-action` 属性などの文字列から
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "explain" => Some(AssistAction::Explain),
            "optimize" => Some(AssistAction::Optimize),
            "refactor" => Some(AssistAction::Refactor),
            _ => None,
        }
    }

    /// エンドポイントURL（末尾スラッシュは1つにまとめる）
    pub fn endpoint(&self, api_base: &str) -> String {
        format!("{}/{}", api_base.trim_end_matches('/'), self.as_str())
    }
}

/// AIアシストAPIへのリクエストボディ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistRequest {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smell_type: Option<String>,
}

impl AssistRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            smell_type: None,
        }
    }

    /// スメル種別を付ける。空文字は付けない扱い。
    pub fn with_smell_type(mut self, smell_type: Option<String>) -> Self {
        self.smell_type = smell_type.filter(|s| !s.is_empty());
        self
    }

    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// AIアシストAPIのレスポンスボディ
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AssistResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// リクエストの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistOutcome {
    Loading,
    Success { title: String, body: String },
    Error { message: String },
}

/// パネルに出すタイトルと本文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub title: String,
    pub content: String,
}

impl AssistOutcome {
    /// HTTPステータスとボディ文字列から結果を組み立てる
    pub fn from_http(status: u16, body: &str) -> Self {
        if !(200..300).contains(&status) {
            let detail = serde_json::from_str::<AssistResponse>(body)
                .ok()
                .and_then(|r| r.error)
                .filter(|e| !e.is_empty());
            let message = match detail {
                Some(detail) => format!("HTTP error! status: {} ({})", status, detail),
                None => format!("HTTP error! status: {}", status),
            };
            return Self::failure(message);
        }

        match serde_json::from_str::<AssistResponse>(body) {
            Ok(response) => Self::from_response(response),
            Err(e) => Self::failure(e),
        }
    }

    /// 2xxで受け取ったレスポンスの解釈
    pub fn from_response(response: AssistResponse) -> Self {
        if !response.success {
            return AssistOutcome::Error {
                message: response
                    .error
                    .filter(|e| !e.is_empty())
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            };
        }

        match response.kind {
            Some(kind) => AssistOutcome::Success {
                title: format!("{} Result", capitalize(&kind)),
                body: response.result.unwrap_or_default(),
            },
            None => Self::failure("response is missing the `type` field"),
        }
    }

    /// 通信失敗・パース失敗
    pub fn failure(reason: impl std::fmt::Display) -> Self {
        AssistOutcome::Error {
            message: format!("{}: {}", FETCH_FAILURE_PREFIX, reason),
        }
    }

    pub fn view(&self) -> PanelView {
        match self {
            AssistOutcome::Loading => PanelView {
                title: "Loading...".to_string(),
                content: "Please wait while the AI is thinking...".to_string(),
            },
            AssistOutcome::Success { title, body } => PanelView {
                title: title.clone(),
                content: body.clone(),
            },
            AssistOutcome::Error { message } => PanelView {
                title: "Error".to_string(),
                content: message.clone(),
            },
        }
    }
}

/// 出力パネル
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssistPanel {
    visible: bool,
    outcome: Option<AssistOutcome>,
}

impl AssistPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// リクエスト開始: 表示してローディングにする
    pub fn begin(&mut self) {
        self.visible = true;
        self.outcome = Some(AssistOutcome::Loading);
    }

    /// 結果の反映。表示状態には触らない。
    pub fn resolve(&mut self, outcome: AssistOutcome) {
        self.outcome = Some(outcome);
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn outcome(&self) -> Option<&AssistOutcome> {
        self.outcome.as_ref()
    }

    /// 何も始まっていなければ None
    pub fn view(&self) -> Option<PanelView> {
        self.outcome.as_ref().map(AssistOutcome::view)
    }
}
