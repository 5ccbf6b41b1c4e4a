//! Code Smell Detector UI Common Library
//!
//! ブラウザ(WASM)側から使う状態機械・型・表示ロジック。
//! DOMには依存しないのでネイティブでテストできる。

pub mod assist;
pub mod collapse;
pub mod config;
pub mod copy;
pub mod error;
pub mod format;
pub mod reveal;
pub mod summary;
pub mod upload;

pub use assist::{AssistAction, AssistOutcome, AssistPanel, AssistRequest, AssistResponse, PanelView};
pub use collapse::{CardToggle, EXPAND_INDICATOR};
pub use config::UiConfig;
pub use copy::{CopyFeedback, COPIED_LABEL, COPY_LABEL};
pub use error::{Error, Result};
pub use format::{capitalize, format_file_size};
pub use reveal::{meets_threshold, reveal_transition, RevealTracker};
pub use summary::{AnalysisSummary, BadgeTone, SummaryBadge};
pub use upload::{SelectedFile, Selection, UploadState, UploadView, UploadWidget};
