use super::*;

use chatful_widget_core::config::HostSettings;

/// Reads `window.CHATFUL_WIDGET` through its JSON projection. An absent
/// global is an empty configuration; the missing bot id is diagnosed later
/// by the bootstrap planner.
pub(super) fn read_host_settings() -> Result<HostSettings, BootstrapError> {
    let Some(window) = web_sys::window() else {
        return Ok(HostSettings::default());
    };
    let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(HOST_GLOBAL_KEY)) else {
        return Ok(HostSettings::default());
    };
    if value.is_undefined() || value.is_null() {
        return Ok(HostSettings::default());
    }
    let raw = js_sys::JSON::stringify(&value).ok().map(String::from);
    chatful_widget_core::bootstrap::parse_host_settings(raw.as_deref())
}

/// Origin of the `<script>` element currently executing, when the loader
/// was included with a plain src attribute. Module scripts and inline
/// bootstraps fall through to the page origin.
pub(super) fn detect_script_origin() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let script = document.current_script()?;
    let src = script.src();
    if src.trim().is_empty() {
        return None;
    }
    web_sys::Url::new(&src).ok().map(|url| url.origin())
}

pub(super) fn page_origin() -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    window
        .location()
        .origin()
        .map_err(|_| "page origin is unavailable".to_string())
}
