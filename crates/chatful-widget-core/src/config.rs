use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_PRIMARY_COLOR: &str = "#3b82f6";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetPosition {
    BottomLeft,
    #[default]
    BottomRight,
}

impl WidgetPosition {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }

    #[must_use]
    pub fn is_right(self) -> bool {
        matches!(self, Self::BottomRight)
    }
}

/// The embedding page's `window.CHATFUL_WIDGET` global, decoded from its
/// JSON projection. Only `bot_id` is required; `api_base` overrides the
/// script-origin default, and `position`/`primary_color` act as fallbacks
/// beneath the fetched configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostSettings {
    #[serde(default)]
    pub bot_id: Option<String>,
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub position: Option<WidgetPosition>,
    #[serde(default)]
    pub primary_color: Option<String>,
}

impl HostSettings {
    #[must_use]
    pub fn trimmed_bot_id(&self) -> Option<&str> {
        self.bot_id
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Per-bot widget configuration fetched once per page load. The loader only
/// interprets position, color, and frame geometry; every other field rides
/// in `extra` and is forwarded to the chat frame untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<WidgetPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl WidgetConfig {
    /// Fills fields the fetch response left unset from the host global.
    /// The fetched configuration always wins where both are present.
    #[must_use]
    pub fn with_host_defaults(mut self, host: &HostSettings) -> Self {
        if self.position.is_none() {
            self.position = host.position;
        }
        if self.primary_color.is_none() {
            self.primary_color = host.primary_color.clone();
        }
        self
    }

    #[must_use]
    pub fn resolved_position(&self) -> WidgetPosition {
        self.position.unwrap_or_default()
    }

    #[must_use]
    pub fn resolved_primary_color(&self) -> &str {
        self.primary_color
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_PRIMARY_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn widget_position_defaults_to_bottom_right() {
        assert_eq!(WidgetPosition::default(), WidgetPosition::BottomRight);
        assert!(WidgetPosition::BottomRight.is_right());
        assert!(!WidgetPosition::BottomLeft.is_right());
    }

    #[test]
    fn widget_position_round_trips_kebab_case() {
        let position: WidgetPosition =
            serde_json::from_value(json!("bottom-left")).expect("valid position");
        assert_eq!(position, WidgetPosition::BottomLeft);
        assert_eq!(
            serde_json::to_value(WidgetPosition::BottomRight).expect("serialized position"),
            json!("bottom-right")
        );
    }

    #[test]
    fn host_settings_accept_camel_case_keys() {
        let host: HostSettings = serde_json::from_value(json!({
            "botId": "abc123",
            "apiBase": "https://widget.chatful.app",
            "position": "bottom-left",
            "primaryColor": "#123456"
        }))
        .expect("valid host settings");

        assert_eq!(host.trimmed_bot_id(), Some("abc123"));
        assert_eq!(host.api_base.as_deref(), Some("https://widget.chatful.app"));
        assert_eq!(host.position, Some(WidgetPosition::BottomLeft));
        assert_eq!(host.primary_color.as_deref(), Some("#123456"));
    }

    #[test]
    fn trimmed_bot_id_rejects_whitespace_only_values() {
        let host: HostSettings =
            serde_json::from_value(json!({ "botId": "   " })).expect("valid host settings");
        assert_eq!(host.trimmed_bot_id(), None);
        assert_eq!(HostSettings::default().trimmed_bot_id(), None);
    }

    #[test]
    fn widget_config_preserves_unknown_fields() {
        let config: WidgetConfig = serde_json::from_value(json!({
            "position": "bottom-left",
            "primary_color": "#ff0000",
            "welcome_message": "Hi 👋 How can I help you?",
            "show_powered_by": true
        }))
        .expect("valid config");

        assert_eq!(
            config.extra.get("welcome_message"),
            Some(&json!("Hi 👋 How can I help you?"))
        );
        assert_eq!(config.extra.get("show_powered_by"), Some(&json!(true)));

        let forwarded = serde_json::to_value(&config).expect("serialized config");
        assert_eq!(forwarded.get("primary_color"), Some(&json!("#ff0000")));
        assert_eq!(
            forwarded.get("welcome_message"),
            Some(&json!("Hi 👋 How can I help you?"))
        );
        assert_eq!(forwarded.get("frame_width"), None);
    }

    #[test]
    fn host_defaults_fill_only_unset_fields() {
        let host: HostSettings = serde_json::from_value(json!({
            "botId": "abc123",
            "position": "bottom-left",
            "primaryColor": "#00ff00"
        }))
        .expect("valid host settings");

        let fetched: WidgetConfig =
            serde_json::from_value(json!({ "primary_color": "#ff0000" })).expect("valid config");
        let merged = fetched.with_host_defaults(&host);

        assert_eq!(merged.resolved_position(), WidgetPosition::BottomLeft);
        assert_eq!(merged.resolved_primary_color(), "#ff0000");
    }

    #[test]
    fn resolved_primary_color_falls_back_to_default() {
        let config = WidgetConfig::default();
        assert_eq!(config.resolved_primary_color(), DEFAULT_PRIMARY_COLOR);

        let blank: WidgetConfig =
            serde_json::from_value(json!({ "primary_color": "  " })).expect("valid config");
        assert_eq!(blank.resolved_primary_color(), DEFAULT_PRIMARY_COLOR);
    }
}
