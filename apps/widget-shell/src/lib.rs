#[cfg(target_arch = "wasm32")]
mod wasm_constants;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use chatful_widget_core::bootstrap::{BootstrapError, parse_config_response, plan_bootstrap};
    use chatful_widget_core::handshake::InitMessage;
    use chatful_widget_core::mount::{MountSpec, build_mount_spec};
    use chatful_widget_core::state::WidgetState;
    use chatful_widget_core::style::{
        ElementStyles, LAUNCHER_HOVER_TRANSFORM, LAUNCHER_REST_TRANSFORM, frame_display,
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{HtmlElement, HtmlIFrameElement};

    use crate::wasm_constants::*;

    mod dom;
    mod host;
    mod network;

    use dom::*;
    use host::*;
    use network::*;

    thread_local! {
        static WIDGET_STATE: RefCell<WidgetState> = RefCell::new(WidgetState::default());
        static SCRIPT_ORIGIN: RefCell<Option<String>> = const { RefCell::new(None) };
        static LAUNCHER_CLICK_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
        static LAUNCHER_HOVER_HANDLERS: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>> = RefCell::new(Vec::new());
        static FRAME_LOAD_HANDLER: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        // document.currentScript is only meaningful during the synchronous
        // part of script execution, so the origin is captured before the
        // async bootstrap begins.
        let origin = detect_script_origin();
        SCRIPT_ORIGIN.with(|slot| *slot.borrow_mut() = origin);
        spawn_local(async {
            if let Err(message) = boot().await {
                warn(&message);
            }
        });
    }

    /// Serialized widget state, exposed for embed debugging.
    #[wasm_bindgen]
    pub fn widget_state_json() -> String {
        WIDGET_STATE.with(|state| {
            serde_json::to_string(&*state.borrow()).unwrap_or_else(|_| "{}".to_string())
        })
    }

    async fn boot() -> Result<(), String> {
        let host = read_host_settings().map_err(|error| error.to_string())?;
        let plan = plan_bootstrap(
            &host,
            SCRIPT_ORIGIN.with(|slot| slot.borrow().clone()).as_deref(),
            &page_origin()?,
        )
        .map_err(|error| error.to_string())?;

        // A duplicated embed snippet must not mount a second widget or issue
        // a second config request. The DOM check covers a second wasm
        // instance whose state this one cannot see.
        if !WIDGET_STATE.with(|state| state.borrow_mut().begin_bootstrap()) {
            return Ok(());
        }
        if widget_root_exists() {
            return Ok(());
        }

        let (status, body) = fetch_config_body(&plan.config_url)
            .await
            .map_err(|error| error.to_string())?;
        let config = parse_config_response(status, &body)
            .map_err(|error| error.to_string())?
            .with_host_defaults(&host);

        let spec = build_mount_spec(&plan.bot_id, &plan.api_base.base_url, config);
        mount_widget(&spec)
    }

    fn warn(message: &str) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("{CONSOLE_PREFIX} {message}")));
    }
}
