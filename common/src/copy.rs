//! コピーボタンのラベル状態
//!
//! クリックごとに世代番号を進め、タイマー満了時は最新世代のものだけが
//! ラベルを戻す。

pub const COPY_LABEL: &str = "\u{1F4CB} Copy Fix";
pub const COPIED_LABEL: &str = "\u{2713} Copied!";
/// 「コピーしました」表示の時間（ms）
pub const DEFAULT_FEEDBACK_MS: u32 = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    original: String,
    confirmation: String,
    generation: u64,
    copied: bool,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(COPY_LABEL, COPIED_LABEL)
    }
}

impl CopyFeedback {
    pub fn new(original: impl Into<String>, confirmation: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            confirmation: confirmation.into(),
            generation: 0,
            copied: false,
        }
    }

    pub fn label(&self) -> &str {
        if self.copied {
            &self.confirmation
        } else {
            &self.original
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// コピー成功。タイマーに渡すトークンを返す。
    pub fn mark_copied(&mut self) -> u64 {
        self.generation += 1;
        self.copied = true;
        self.generation
    }

    /// タイマー満了。トークンが最新なら元のラベルに戻して true。
    pub fn expire(&mut self, token: u64) -> bool {
        if token != self.generation || !self.copied {
            return false;
        }
        self.copied = false;
        true
    }
}
