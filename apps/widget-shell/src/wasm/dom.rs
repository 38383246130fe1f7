use super::*;

pub(super) fn widget_root_exists() -> bool {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(WIDGET_ROOT_ID))
        .is_some()
}

/// Applies the mount plan: container, hidden chat frame, launcher button,
/// appended to the end of the body in one pass. The launcher is clickable
/// immediately; nothing here waits on the frame finishing its load.
pub(super) fn mount_widget(spec: &MountSpec) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    let document = window
        .document()
        .ok_or_else(|| "document is unavailable".to_string())?;
    let body = document
        .body()
        .ok_or_else(|| "document body is unavailable".to_string())?;

    let root = document
        .create_element("div")
        .map_err(|_| "failed to create widget root".to_string())?
        .dyn_into::<HtmlElement>()
        .map_err(|_| "widget root is not HtmlElement".to_string())?;
    root.set_id(WIDGET_ROOT_ID);
    apply_styles(&root, &spec.root);

    let frame = document
        .create_element("iframe")
        .map_err(|_| "failed to create chat frame".to_string())?
        .dyn_into::<HtmlIFrameElement>()
        .map_err(|_| "chat frame is not HtmlIFrameElement".to_string())?;
    frame.set_id(WIDGET_FRAME_ID);
    frame.set_src(&spec.frame_url);
    frame.set_title(spec.frame_title);
    let _ = frame.set_attribute("allow", spec.frame_permissions);
    apply_styles(&frame, &spec.frame);

    let launcher = document
        .create_element("button")
        .map_err(|_| "failed to create launcher".to_string())?
        .dyn_into::<HtmlElement>()
        .map_err(|_| "launcher is not HtmlElement".to_string())?;
    launcher.set_id(WIDGET_LAUNCHER_ID);
    let _ = launcher.set_attribute("type", "button");
    let _ = launcher.set_attribute("aria-label", spec.launcher_label);
    launcher.set_inner_html(spec.launcher_icon);
    apply_styles(&launcher, &spec.launcher);

    install_launcher_click_handler(&launcher);
    install_launcher_hover_handlers(&launcher);
    install_frame_load_handler(&frame, spec.init.clone());

    let _ = root.append_child(&frame);
    let _ = root.append_child(&launcher);
    body.append_child(&root)
        .map_err(|_| "failed to append widget root".to_string())?;

    Ok(())
}

pub(super) fn apply_styles(element: &HtmlElement, styles: &ElementStyles) {
    for (name, value) in &styles.properties {
        let _ = element.style().set_property(name, value);
    }
}

fn install_launcher_click_handler(launcher: &HtmlElement) {
    LAUNCHER_CLICK_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            let open = WIDGET_STATE.with(|state| state.borrow_mut().toggle());
            set_frame_visibility(open);
        }));
        let _ =
            launcher.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });
}

fn install_launcher_hover_handlers(launcher: &HtmlElement) {
    LAUNCHER_HOVER_HANDLERS.with(|slot| {
        let mut handlers = slot.borrow_mut();
        if !handlers.is_empty() {
            return;
        }
        for (event_name, transform) in [
            ("mouseenter", LAUNCHER_HOVER_TRANSFORM),
            ("mouseleave", LAUNCHER_REST_TRANSFORM),
        ] {
            let target = launcher.clone();
            let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
                let _ = target.style().set_property("transform", transform);
            }));
            let _ = launcher
                .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref());
            handlers.push(callback);
        }
    });
}

fn install_frame_load_handler(frame: &HtmlIFrameElement, init: InitMessage) {
    FRAME_LOAD_HANDLER.with(|slot| {
        if slot.borrow().is_some() {
            return;
        }
        let frame_handle = frame.clone();
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
            // One handshake per page load, even if the frame navigates
            // internally and fires load again.
            let first = WIDGET_STATE.with(|state| state.borrow_mut().mark_init_sent());
            if !first {
                return;
            }
            post_init_message(&frame_handle, &init);
        }));
        let _ = frame.add_event_listener_with_callback("load", callback.as_ref().unchecked_ref());
        *slot.borrow_mut() = Some(callback);
    });
}

fn post_init_message(frame: &HtmlIFrameElement, init: &InitMessage) {
    let Some(target) = frame.content_window() else {
        warn("chat frame window is unavailable");
        return;
    };
    let payload = match init.to_json() {
        Ok(payload) => payload,
        Err(error) => {
            warn(&format!("failed to serialize init message: {error}"));
            return;
        }
    };
    let Ok(value) = js_sys::JSON::parse(&payload) else {
        warn("failed to encode init message");
        return;
    };
    // The frame's origin is not asserted here; the receiving document
    // validates the message before trusting it.
    if target.post_message(&value, "*").is_err() {
        warn("failed to deliver init message to the chat frame");
    }
}

fn set_frame_visibility(open: bool) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(frame) = document.get_element_by_id(WIDGET_FRAME_ID) {
                if let Ok(frame) = frame.dyn_into::<HtmlElement>() {
                    let _ = frame.style().set_property("display", frame_display(open));
                }
            }
        }
    }
}
