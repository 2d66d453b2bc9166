use wasm_bindgen::prelude::*;

pub mod config;
pub mod media_streams;
pub mod panel;
pub mod ui;

use config::PanelConfig;
use panel::{Panel, SharedPanel};

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // Level is narrowed per panel config in `start`
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));

    log::info!("Camera picker initialized");
}

/// Mounts the picker and starts the camera preview.
///
/// `config` is an optional object, e.g.
/// `{ containerId: "app", settingsIconSrc: "/settings.svg", logging: { level: "debug" } }`.
#[wasm_bindgen]
pub fn start(config: JsValue) -> Result<PickerHandle, JsValue> {
    let config = PanelConfig::from_js(config)?;
    log::set_max_level(config.logging.level_filter());

    let panel = Panel::mount(&config)?;
    wasm_bindgen_futures::spawn_local(panel::run_startup(panel.clone()));

    log::info!("[Picker] Panel mounted");
    Ok(PickerHandle { panel })
}

/// Returned by `start`; keeps the panel reachable from JS.
#[wasm_bindgen]
pub struct PickerHandle {
    panel: SharedPanel,
}

#[wasm_bindgen]
impl PickerHandle {
    /// Stops the camera. Call on page teardown.
    pub fn stop(&self) {
        self.panel.borrow_mut().release_stream();
    }

    #[wasm_bindgen(getter, js_name = deviceId)]
    pub fn device_id(&self) -> String {
        self.panel.borrow().state().device_id().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn option(&self) -> String {
        self.panel.borrow().state().preset().as_str().to_string()
    }
}
