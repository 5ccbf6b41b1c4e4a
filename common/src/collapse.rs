//! 指摘カードの開閉

/// 開閉インジケーター
pub const EXPAND_INDICATOR: &str = "\u{25BC}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardToggle {
    expanded: bool,
}

impl CardToggle {
    /// 本文のインライン `display` から初期状態を決める（"none" 以外は展開中）
    pub fn from_body_display(display: &str) -> Self {
        Self {
            expanded: display.trim() != "none",
        }
    }

    pub fn expanded() -> Self {
        Self { expanded: true }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// ヘッダークリック
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn body_display(&self) -> &'static str {
        if self.expanded {
            "block"
        } else {
            "none"
        }
    }

    pub fn indicator_transform(&self) -> &'static str {
        if self.expanded {
            "rotate(0deg)"
        } else {
            "rotate(-90deg)"
        }
    }
}
