//! 結果ページに差し込むコンポーネント

pub mod copy_button;
pub mod summary_badge;
