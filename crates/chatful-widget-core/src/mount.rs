use crate::bootstrap::frame_url;
use crate::config::WidgetConfig;
use crate::handshake::InitMessage;
use crate::style::{
    ElementStyles, LAUNCHER_ICON_SVG, frame_geometry, frame_styles, launcher_styles, root_styles,
};

pub const FRAME_TITLE: &str = "CHATful Widget";
pub const FRAME_PERMISSIONS: &str = "clipboard-write";
pub const LAUNCHER_LABEL: &str = "Open chat";

/// The complete declarative mount plan: everything the shell applies to the
/// DOM, computed up front from the fetched configuration so mounting itself
/// is a mechanical, infallible walk over this structure.
#[derive(Debug, Clone, PartialEq)]
pub struct MountSpec {
    pub root: ElementStyles,
    pub launcher: ElementStyles,
    pub frame: ElementStyles,
    pub frame_url: String,
    pub frame_title: &'static str,
    pub frame_permissions: &'static str,
    pub launcher_label: &'static str,
    pub launcher_icon: &'static str,
    pub init: InitMessage,
}

#[must_use]
pub fn build_mount_spec(bot_id: &str, api_base: &str, config: WidgetConfig) -> MountSpec {
    let geometry = frame_geometry(&config);
    let position = config.resolved_position();
    let root = root_styles(position, geometry.offset);
    let launcher = launcher_styles(config.resolved_primary_color());
    let frame = frame_styles(geometry);
    let frame_url = frame_url(api_base, bot_id);
    let init = InitMessage::new(bot_id, config, Some(api_base.to_string()));

    MountSpec {
        root,
        launcher,
        frame,
        frame_url,
        frame_title: FRAME_TITLE,
        frame_permissions: FRAME_PERMISSIONS,
        launcher_label: LAUNCHER_LABEL,
        launcher_icon: LAUNCHER_ICON_SVG,
        init,
    }
}
