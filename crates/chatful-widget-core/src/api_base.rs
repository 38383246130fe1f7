pub const API_BASE_SOURCE_HOST_OVERRIDE: &str = "host_override";
pub const API_BASE_SOURCE_SCRIPT_ORIGIN: &str = "script_origin";
pub const API_BASE_SOURCE_PAGE_ORIGIN: &str = "page_origin";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiBaseError {
    #[error("api base must not be empty")]
    Empty,
    #[error("api base must use http:// or https:// and include a host")]
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedApiBase {
    pub base_url: String,
    pub source: &'static str,
}

/// Resolves the API base the widget talks to: an explicit host-page override
/// wins, else the origin the embed script was served from, else the page's
/// own origin. An override that fails normalization aborts resolution
/// instead of silently falling through.
pub fn resolve_api_base(
    host_override: Option<&str>,
    script_origin: Option<&str>,
    page_origin: &str,
) -> Result<ResolvedApiBase, ApiBaseError> {
    if let Some(base_url) = non_empty(host_override) {
        return Ok(ResolvedApiBase {
            base_url: normalize_api_base(base_url)?,
            source: API_BASE_SOURCE_HOST_OVERRIDE,
        });
    }

    if let Some(base_url) = non_empty(script_origin) {
        if let Ok(normalized) = normalize_api_base(base_url) {
            return Ok(ResolvedApiBase {
                base_url: normalized,
                source: API_BASE_SOURCE_SCRIPT_ORIGIN,
            });
        }
    }

    Ok(ResolvedApiBase {
        base_url: normalize_api_base(page_origin)?,
        source: API_BASE_SOURCE_PAGE_ORIGIN,
    })
}

pub fn normalize_api_base(raw: &str) -> Result<String, ApiBaseError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ApiBaseError::Empty);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ApiBaseError::Invalid);
    }
    let Some((_, remainder)) = trimmed.split_once("://") else {
        return Err(ApiBaseError::Invalid);
    };
    if remainder.trim().is_empty() || remainder.starts_with('/') {
        return Err(ApiBaseError::Invalid);
    }
    Ok(trimmed.to_string())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
