//! バックエンドAPI呼び出し

pub mod assist;
