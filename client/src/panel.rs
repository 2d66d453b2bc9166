//! The media picker panel: owns the picker state, the view and the stream
//! bound to the video surface.

use std::cell::RefCell;
use std::rc::Rc;

use common::{Accepted, AddressParams, CaptureRequest, PickerState, ResolutionPreset, StreamSlot};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MediaStream;

use crate::config::PanelConfig;
use crate::media_streams;
use crate::ui::PanelView;

pub type SharedPanel = Rc<RefCell<Panel>>;

pub struct Panel {
    state: PickerState,
    view: PanelView,
    stream: StreamSlot<MediaStream>,
}

impl Panel {
    /// Builds the DOM and seeds the selection from the page address. No
    /// platform calls are made yet; see [`run_startup`].
    pub fn mount(config: &PanelConfig) -> Result<SharedPanel, JsValue> {
        let document = web_sys::window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let params = AddressParams::parse(&media_streams::current_search());
        log::debug!(
            "[Picker] Address params: deviceId={:?} option={:?}",
            params.device_id,
            params.option
        );

        let view = PanelView::build(&document, config)?;
        let state = PickerState::from_address(&params);
        view.render(&state)?;

        let panel = Rc::new(RefCell::new(Self {
            state,
            view,
            stream: StreamSlot::new(),
        }));
        register_event_listeners(&panel)?;
        Ok(panel)
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    fn render(&self) {
        if let Err(e) = self.view.render(&self.state) {
            log::warn!("[Picker] Render failed: {:?}", e);
        }
    }

    /// Binds `stream` if `request` is still current, stopping whichever
    /// stream loses. Returns whether it was bound.
    fn accept_stream(&mut self, request: &CaptureRequest, stream: MediaStream) -> bool {
        match self.stream.accept(&mut self.state, request, stream) {
            Accepted::Bound { released } => {
                if let Some(previous) = released {
                    media_streams::stop_stream(&previous);
                }
                self.view.bind_stream(self.stream.current());
                true
            }
            Accepted::Stale(stream) => {
                media_streams::stop_stream(&stream);
                false
            }
        }
    }

    /// Stops the camera and invalidates captures still waiting on the browser.
    pub fn release_stream(&mut self) {
        if let Some(stream) = self.stream.release(&mut self.state) {
            media_streams::stop_stream(&stream);
            self.view.bind_stream(None);
            log::info!("[Picker] Stream released");
        }
        self.render();
    }
}

/// Enumerates cameras, selects the first one and starts the preview.
pub async fn run_startup(panel: SharedPanel) {
    let result = media_streams::enumerate_video_inputs().await;

    let request = {
        let mut guard = panel.borrow_mut();
        let request = match result {
            Ok(devices) => {
                log::info!("[Picker] Found {} video input(s)", devices.len());
                if let Err(e) = guard.view.render_devices(&devices) {
                    log::warn!("[Picker] Failed to render device list: {:?}", e);
                }
                guard.state.devices_enumerated(devices)
            }
            Err(err) => {
                log::error!("[Picker] Device enumeration failed: {}", err);
                guard.state.enumeration_failed(err);
                None
            }
        };
        guard.render();
        request
    };

    match request {
        Some(request) => stream_media(panel, request).await,
        None => log::info!("[Picker] No camera to preview"),
    }
}

fn spawn_capture(panel: &SharedPanel, request: CaptureRequest) {
    let panel = panel.clone();
    wasm_bindgen_futures::spawn_local(stream_media(panel, request));
}

/// Requests the stream for `request` and binds it if no newer request was
/// issued in the meantime.
async fn stream_media(panel: SharedPanel, request: CaptureRequest) {
    log::info!(
        "[Picker] Capture #{}: device={} option={}",
        request.seq,
        request.device_id,
        request.preset
    );

    let result = media_streams::get_video_stream(&request.constraints()).await;

    let mut guard = panel.borrow_mut();
    match result {
        Ok(stream) => {
            if !guard.accept_stream(&request, stream) {
                log::debug!("[Picker] Capture #{} superseded, released its stream", request.seq);
                return;
            }
            if let Err(e) = media_streams::replace_search(&request.search()) {
                log::warn!("[Picker] Failed to update address: {:?}", e);
            }
            log::info!("[Picker] Capture #{} bound", request.seq);
        }
        Err(err) => {
            if !guard.state.capture_failed(&request, err.clone()) {
                log::debug!("[Picker] Capture #{} superseded, ignoring: {}", request.seq, err);
                return;
            }
            log::error!("[Picker] Capture #{} failed: {}", request.seq, err);
        }
    }
    guard.render();
}

fn register_event_listeners(panel: &SharedPanel) -> Result<(), JsValue> {
    let view = panel.borrow().view.clone();

    // Device dropdown
    {
        let panel = panel.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(select) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            else {
                return;
            };
            let request = {
                let mut guard = panel.borrow_mut();
                let request = guard.state.select_device(&select.value());
                guard.render();
                request
            };
            spawn_capture(&panel, request);
        }) as Box<dyn FnMut(_)>);
        view.device_select
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Preset dropdown
    {
        let panel = panel.clone();
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(select) = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
            else {
                return;
            };
            let preset = ResolutionPreset::from_name_loose(&select.value());
            let request = {
                let mut guard = panel.borrow_mut();
                let request = guard.state.select_preset(preset);
                guard.render();
                request
            };
            spawn_capture(&panel, request);
        }) as Box<dyn FnMut(_)>);
        view.preset_select
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Settings icon
    {
        let panel = panel.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let mut guard = panel.borrow_mut();
            let visible = guard.state.toggle_settings();
            log::debug!("[Picker] Settings {}", if visible { "shown" } else { "hidden" });
            guard.render();
        }) as Box<dyn FnMut(_)>);
        view.settings_icon
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Backdrop
    {
        let panel = panel.clone();
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let mut guard = panel.borrow_mut();
            guard.state.close_settings();
            guard.render();
        }) as Box<dyn FnMut(_)>);
        view.backdrop
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}
