use crate::api_base::{ApiBaseError, ResolvedApiBase, resolve_api_base};
use crate::config::{HostSettings, WidgetConfig};

pub const CONFIG_PATH_PREFIX: &str = "/widget/config/";
pub const FRAME_PATH: &str = "/widget-frame.html";

/// Terminal bootstrap failures. All of them abort the whole bootstrap with
/// one console diagnostic and leave the host page untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootstrapError {
    #[error("botId is missing")]
    MissingBotId,
    #[error("window configuration is not a plain object")]
    MalformedHostGlobal,
    #[error("api base rejected: {0}")]
    ApiBase(#[from] ApiBaseError),
    #[error("widget config request failed with status {status}")]
    Status { status: u16 },
    #[error("widget config request failed: {0}")]
    Network(String),
    #[error("widget config could not be decoded: {0}")]
    Decode(String),
}

/// Everything the shell needs before touching the network: the validated
/// bot id, the resolved API base, and the config request URL. Producing a
/// plan has no side effects; a failed plan means no request is ever issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPlan {
    pub bot_id: String,
    pub api_base: ResolvedApiBase,
    pub config_url: String,
}

/// Decodes the JSON projection of the host page's global configuration
/// object. An absent global behaves like an empty one; the missing bot id
/// is then reported by `plan_bootstrap`.
pub fn parse_host_settings(raw: Option<&str>) -> Result<HostSettings, BootstrapError> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Ok(HostSettings::default());
    };
    if raw == "null" || raw == "undefined" {
        return Ok(HostSettings::default());
    }
    serde_json::from_str(raw).map_err(|_| BootstrapError::MalformedHostGlobal)
}

pub fn plan_bootstrap(
    host: &HostSettings,
    script_origin: Option<&str>,
    page_origin: &str,
) -> Result<BootstrapPlan, BootstrapError> {
    let bot_id = host
        .trimmed_bot_id()
        .ok_or(BootstrapError::MissingBotId)?
        .to_string();
    let api_base = resolve_api_base(host.api_base.as_deref(), script_origin, page_origin)?;
    let config_url = config_request_url(&api_base.base_url, &bot_id);
    Ok(BootstrapPlan {
        bot_id,
        api_base,
        config_url,
    })
}

#[must_use]
pub fn config_request_url(api_base: &str, bot_id: &str) -> String {
    format!(
        "{api_base}{CONFIG_PATH_PREFIX}{}",
        urlencoding::encode(bot_id)
    )
}

/// URL of the chat-frame document. Carries the bot id in the query so the
/// frame can identify itself before the init handshake arrives.
#[must_use]
pub fn frame_url(api_base: &str, bot_id: &str) -> String {
    format!(
        "{api_base}{FRAME_PATH}?botId={}",
        urlencoding::encode(bot_id)
    )
}

/// Maps the raw fetch outcome onto a configuration or a classified failure.
/// Any non-2xx status is fatal before the body is interpreted.
pub fn parse_config_response(status: u16, body: &str) -> Result<WidgetConfig, BootstrapError> {
    if !(200..=299).contains(&status) {
        return Err(BootstrapError::Status { status });
    }
    serde_json::from_str(body).map_err(|error| BootstrapError::Decode(error.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_base::API_BASE_SOURCE_SCRIPT_ORIGIN;
    use crate::config::WidgetPosition;

    #[test]
    fn parse_host_settings_treats_absent_global_as_empty() {
        assert_eq!(
            parse_host_settings(None).expect("empty settings"),
            HostSettings::default()
        );
        assert_eq!(
            parse_host_settings(Some("undefined")).expect("empty settings"),
            HostSettings::default()
        );
        assert_eq!(
            parse_host_settings(Some("null")).expect("empty settings"),
            HostSettings::default()
        );
    }

    #[test]
    fn parse_host_settings_rejects_non_object_globals() {
        let error = parse_host_settings(Some("\"abc123\"")).expect_err("expected malformed");
        assert_eq!(error, BootstrapError::MalformedHostGlobal);
    }

    #[test]
    fn plan_requires_bot_id_before_anything_else() {
        let error = plan_bootstrap(
            &HostSettings::default(),
            Some("https://cdn.chatful.app"),
            "https://customer.example.com",
        )
        .expect_err("expected missing bot id");
        assert_eq!(error, BootstrapError::MissingBotId);
    }

    #[test]
    fn plan_builds_config_url_from_script_origin() {
        let host = HostSettings {
            bot_id: Some("abc123".to_string()),
            ..HostSettings::default()
        };
        let plan = plan_bootstrap(
            &host,
            Some("https://cdn.chatful.app"),
            "https://customer.example.com",
        )
        .expect("valid plan");

        assert_eq!(plan.bot_id, "abc123");
        assert_eq!(plan.api_base.source, API_BASE_SOURCE_SCRIPT_ORIGIN);
        assert_eq!(
            plan.config_url,
            "https://cdn.chatful.app/widget/config/abc123"
        );
    }

    #[test]
    fn urls_escape_hostile_bot_ids() {
        assert_eq!(
            config_request_url("https://cdn.chatful.app", "a b/../c"),
            "https://cdn.chatful.app/widget/config/a%20b%2F..%2Fc"
        );
        assert_eq!(
            frame_url("https://cdn.chatful.app", "a&b=c"),
            "https://cdn.chatful.app/widget-frame.html?botId=a%26b%3Dc"
        );
    }

    #[test]
    fn non_success_status_is_fatal() {
        let error = parse_config_response(404, "{}").expect_err("expected status failure");
        assert_eq!(error, BootstrapError::Status { status: 404 });
        let error = parse_config_response(500, "oops").expect_err("expected status failure");
        assert_eq!(error, BootstrapError::Status { status: 500 });
    }

    #[test]
    fn undecodable_body_is_fatal() {
        let error = parse_config_response(200, "<html>").expect_err("expected decode failure");
        assert!(matches!(error, BootstrapError::Decode(_)));
    }

    #[test]
    fn successful_response_decodes_configuration() {
        let config = parse_config_response(
            200,
            r##"{ "position": "bottom-left", "primary_color": "#ff0000" }"##,
        )
        .expect("decoded config");
        assert_eq!(config.position, Some(WidgetPosition::BottomLeft));
        assert_eq!(config.primary_color.as_deref(), Some("#ff0000"));
    }
}
