//! アップロードウィジェットの状態機械
//!
//! 状態は Empty / FileSelected / Submitted の3つ。
//! ドラッグ中のハイライトは状態とは別の見た目だけのフラグとして持つ。

use crate::error::{Error, Result};
use crate::format::format_file_size;

/// 既定の受付拡張子
pub const DEFAULT_EXTENSION: &str = ".py";

/// ユーザーが選んだファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// 表示用サイズ文字列
    pub fn display_size(&self) -> String {
        format_file_size(self.size)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Empty,
    FileSelected(SelectedFile),
    /// 送信済み（このページ表示では終端）
    Submitted(SelectedFile),
}

/// ウィジェットの描画内容
///
/// DOMへの反映はこの値だけを見て行う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadView {
    pub drop_zone_visible: bool,
    pub preview_visible: bool,
    /// 送信済みでも無効化しない（送信中のフォームの送信者を外さない）
    pub submit_enabled: bool,
    pub file_name: String,
    pub file_size: String,
    pub section_visible: bool,
    pub loading_visible: bool,
    pub highlighted: bool,
}

/// 選択結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// ファイルを受け付けた
    Accepted,
    /// 空のリスト、または送信済みのため何もしていない
    Ignored,
}

#[derive(Debug, Clone)]
pub struct UploadWidget {
    state: UploadState,
    highlighted: bool,
    accepted_extension: String,
}

impl Default for UploadWidget {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSION)
    }
}

impl UploadWidget {
    pub fn new(accepted_extension: impl Into<String>) -> Self {
        Self {
            state: UploadState::Empty,
            highlighted: false,
            accepted_extension: accepted_extension.into(),
        }
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        match &self.state {
            UploadState::FileSelected(file) | UploadState::Submitted(file) => Some(file),
            UploadState::Empty => None,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// dragenter / dragover
    pub fn drag_over(&mut self) {
        self.highlighted = true;
    }

    /// dragleave
    pub fn drag_leave(&mut self) {
        self.highlighted = false;
    }

    /// ドロップ: ハイライトを消してから選択処理
    pub fn drop_files(&mut self, files: Vec<SelectedFile>) -> Result<Selection> {
        self.highlighted = false;
        self.select(files)
    }

    /// ファイル選択（ドロップ・ファイルダイアログ共通）
    ///
    /// 先頭の1件だけを見る。拡張子が違えば状態は変えずにエラーを返す。
    pub fn select(&mut self, files: Vec<SelectedFile>) -> Result<Selection> {
        if matches!(self.state, UploadState::Submitted(_)) {
            return Ok(Selection::Ignored);
        }
        let Some(file) = files.into_iter().next() else {
            return Ok(Selection::Ignored);
        };

        self.validate(&file)?;
        self.state = UploadState::FileSelected(file);
        Ok(Selection::Accepted)
    }

    /// 拡張子チェック（大文字小文字を区別する末尾一致）
    pub fn validate(&self, file: &SelectedFile) -> Result<()> {
        if file.name.ends_with(&self.accepted_extension) {
            Ok(())
        } else {
            Err(Error::UnsupportedFile {
                name: file.name.clone(),
                expected: self.accepted_extension.clone(),
            })
        }
    }

    /// 選択解除。送信済みなら何もしない。
    ///
    /// 戻り値が true のときは呼び出し側で input の値もリセットする。
    pub fn remove(&mut self) -> bool {
        if matches!(self.state, UploadState::Submitted(_)) {
            return false;
        }
        self.state = UploadState::Empty;
        true
    }

    /// フォーム送信
    ///
    /// ファイル選択済みのときだけ Submitted に遷移して true を返す。
    /// false のときは送信を取り消す。
    pub fn submit(&mut self) -> bool {
        match std::mem::take(&mut self.state) {
            UploadState::FileSelected(file) => {
                self.state = UploadState::Submitted(file);
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    pub fn view(&self) -> UploadView {
        let (file_name, file_size) = match self.selected_file() {
            Some(file) => (file.name.clone(), file.display_size()),
            None => (String::new(), String::new()),
        };

        let submitted = matches!(self.state, UploadState::Submitted(_));
        let selected = !matches!(self.state, UploadState::Empty);

        UploadView {
            drop_zone_visible: !selected,
            preview_visible: selected,
            submit_enabled: selected,
            file_name,
            file_size,
            section_visible: !submitted,
            loading_visible: submitted,
            highlighted: self.highlighted,
        }
    }
}
