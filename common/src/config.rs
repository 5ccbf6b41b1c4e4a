//! UI設定
//!
//! ページに `<script id="ui-config" type="application/json">` があれば
//! その値で上書きする。無い項目は既定値。

use serde::Deserialize;

use crate::copy::DEFAULT_FEEDBACK_MS;
use crate::error::{Error, Result};
use crate::upload::DEFAULT_EXTENSION;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// AIアシストAPIのベースパス
    pub api_base: String,
    pub accepted_extension: String,
    pub copy_feedback_ms: u32,
    pub reveal_stagger_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".into(),
            accepted_extension: DEFAULT_EXTENSION.into(),
            copy_feedback_ms: DEFAULT_FEEDBACK_MS,
            reveal_stagger_ms: 100,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".into(),
        }
    }
}

impl UiConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: UiConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.accepted_extension.is_empty() {
            return Err(Error::Config("accepted_extension must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(Error::Config(format!(
                "reveal_threshold must be within 0..=1, got {}",
                self.reveal_threshold
            )));
        }
        Ok(())
    }
}
