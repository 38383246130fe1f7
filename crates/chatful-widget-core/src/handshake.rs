use serde::{Deserialize, Serialize};

use crate::config::WidgetConfig;

pub const INIT_MESSAGE_TYPE: &str = "CHATFUL_INIT";

/// The one-shot message posted into the chat frame once its document has
/// loaded. Everything in it is already public to the embedding page; the
/// receiving document validates shape and origin before trusting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitMessage {
    #[serde(rename = "type")]
    pub message_type: String,
    pub bot_id: String,
    pub settings: WidgetConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
}

impl InitMessage {
    #[must_use]
    pub fn new(bot_id: impl Into<String>, settings: WidgetConfig, api_base: Option<String>) -> Self {
        Self {
            message_type: INIT_MESSAGE_TYPE.to_string(),
            bot_id: bot_id.into(),
            settings,
            api_base,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
