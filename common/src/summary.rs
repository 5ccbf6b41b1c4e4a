//! 解析サマリーとバッジ

use serde::Deserialize;

use crate::error::Result;

/// クリーン判定に使うステータス文字列
pub const CLEAN_STATUS: &str = "Clean Code";

/// サーバー側で埋め込まれる解析サマリー
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnalysisSummary {
    #[serde(default)]
    pub smell_count: u64,
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    "No Issues Found".to_string()
}

impl Default for AnalysisSummary {
    fn default() -> Self {
        Self {
            smell_count: 0,
            status: default_status(),
        }
    }
}

impl AnalysisSummary {
    /// 埋め込みJSONをパース
    ///
    /// 空文字や空白だけなら既定値。壊れたJSONはエラーを返すので、
    /// 呼び出し側でログを出して既定値に落とす。
    pub fn parse_embedded(text: Option<&str>) -> Result<Self> {
        match text.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(json) => Ok(serde_json::from_str(json)?),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.status == CLEAN_STATUS
    }

    pub fn badge(&self) -> SummaryBadge {
        if self.is_clean() {
            SummaryBadge {
                label: "No Code Smells Detected".to_string(),
                tone: BadgeTone::Clean,
            }
        } else {
            SummaryBadge {
                label: format!("{} Code Smells Detected", self.smell_count),
                tone: BadgeTone::Warning,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Clean,
    Warning,
}

impl BadgeTone {
    pub fn class_name(&self) -> &'static str {
        match self {
            BadgeTone::Clean => "summary-badge summary-badge--clean",
            BadgeTone::Warning => "summary-badge summary-badge--warning",
        }
    }

    /// (背景色, 文字色)
    pub fn palette(&self) -> (&'static str, &'static str) {
        match self {
            BadgeTone::Clean => ("#d1fae5", "#065f46"),
            BadgeTone::Warning => ("#fee2e2", "#991b1b"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryBadge {
    pub label: String,
    pub tone: BadgeTone,
}
