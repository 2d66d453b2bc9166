use common::{DeviceDescriptor, PickerState, ResolutionPreset, StreamStatus};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlImageElement, HtmlOptionElement, HtmlSelectElement,
    HtmlVideoElement, MediaStream,
};

use crate::config::PanelConfig;

/// DOM of the picker: video surface, settings icon and the overlay
/// (backdrop + dialog with the two dropdowns).
#[derive(Clone)]
pub struct PanelView {
    pub video: HtmlVideoElement,
    pub settings_icon: HtmlImageElement,
    pub backdrop: HtmlElement,
    pub dialog: HtmlElement,
    pub device_select: HtmlSelectElement,
    pub preset_select: HtmlSelectElement,
    pub error_el: HtmlElement,
}

impl PanelView {
    pub fn build(document: &Document, config: &PanelConfig) -> Result<Self, JsValue> {
        let container: Element = match &config.container_id {
            Some(id) => document
                .get_element_by_id(id)
                .ok_or_else(|| JsValue::from(format!("Element #{} not found", id)))?,
            None => document.body().ok_or("No body")?.into(),
        };

        let video_wrapper: HtmlElement = create_element(document, "div", "webcam-video")?;
        let video: HtmlVideoElement = create_element(document, "video", "")?;
        video.set_autoplay(true);
        video.set_muted(true);
        video.set_default_muted(true);
        video.set_attribute("playsinline", "")?;
        video_wrapper.append_child(&video)?;

        let error_el: HtmlElement = create_element(document, "div", "webcam-error")?;
        error_el.set_attribute("role", "alert")?;

        let backdrop: HtmlElement = create_element(document, "div", "settings")?;

        let dialog: HtmlElement = create_element(document, "div", "settings-dialog")?;
        let device_heading: HtmlElement = create_element(document, "h2", "")?;
        device_heading.set_text_content(Some("Source Media"));
        let device_select: HtmlSelectElement = create_element(document, "select", "")?;
        let preset_heading: HtmlElement = create_element(document, "h2", "")?;
        preset_heading.set_text_content(Some("Source Option"));
        let preset_select: HtmlSelectElement = create_element(document, "select", "")?;
        dialog.append_child(&device_heading)?;
        dialog.append_child(&device_select)?;
        dialog.append_child(&preset_heading)?;
        dialog.append_child(&preset_select)?;

        let settings_icon: HtmlImageElement = create_element(document, "img", "settings-icon")?;
        settings_icon.set_src(&config.settings_icon_src);
        settings_icon.set_alt("Settings");
        settings_icon.set_width(config.settings_icon_width);

        container.append_child(&video_wrapper)?;
        container.append_child(&error_el)?;
        container.append_child(&backdrop)?;
        container.append_child(&dialog)?;
        container.append_child(&settings_icon)?;

        let view = Self {
            video,
            settings_icon,
            backdrop,
            dialog,
            device_select,
            preset_select,
            error_el,
        };
        view.render_presets()?;
        view.set_settings_visible(false)?;
        view.clear_error()?;
        Ok(view)
    }

    fn render_presets(&self) -> Result<(), JsValue> {
        for preset in ResolutionPreset::ALL {
            let option = HtmlOptionElement::new_with_text_and_value(preset.as_str(), preset.as_str())?;
            self.preset_select.append_child(&option)?;
        }
        Ok(())
    }

    pub fn render_devices(&self, devices: &[DeviceDescriptor]) -> Result<(), JsValue> {
        self.device_select.set_inner_html("");
        for (index, device) in devices.iter().enumerate() {
            let option = HtmlOptionElement::new_with_text_and_value(
                &device.display_label(index),
                &device.device_id,
            )?;
            self.device_select.append_child(&option)?;
        }
        Ok(())
    }

    /// Brings every control in line with `state`.
    pub fn render(&self, state: &PickerState) -> Result<(), JsValue> {
        self.device_select.set_value(state.device_id());
        self.preset_select.set_value(state.preset().as_str());
        self.set_settings_visible(state.settings_visible())?;

        match state.status() {
            StreamStatus::Failed(err) => self.show_error(&err.user_message()),
            _ => self.clear_error(),
        }
    }

    pub fn set_settings_visible(&self, visible: bool) -> Result<(), JsValue> {
        let display = if visible { "block" } else { "none" };
        self.backdrop.style().set_property("display", display)?;
        self.dialog.style().set_property("display", display)?;
        Ok(())
    }

    pub fn show_error(&self, message: &str) -> Result<(), JsValue> {
        self.error_el.set_text_content(Some(message));
        self.error_el.style().set_property("display", "block")
    }

    pub fn clear_error(&self) -> Result<(), JsValue> {
        self.error_el.set_text_content(None);
        self.error_el.style().set_property("display", "none")
    }

    pub fn bind_stream(&self, stream: Option<&MediaStream>) {
        self.video.set_src_object(stream);
    }
}

fn create_element<T: JsCast>(document: &Document, tag: &str, class: &str) -> Result<T, JsValue> {
    let element = document.create_element(tag)?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    element
        .dyn_into::<T>()
        .map_err(|_| format!("<{}> has wrong type", tag).into())
}
