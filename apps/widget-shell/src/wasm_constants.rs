pub(crate) const HOST_GLOBAL_KEY: &str = "CHATFUL_WIDGET";
pub(crate) const CONSOLE_PREFIX: &str = "[CHATful]";
pub(crate) const WIDGET_ROOT_ID: &str = "chatful-root";
pub(crate) const WIDGET_FRAME_ID: &str = "chatful-frame";
pub(crate) const WIDGET_LAUNCHER_ID: &str = "chatful-launcher";
