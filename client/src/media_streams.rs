//! Bindings to `navigator.mediaDevices` and the page address.

use common::{CaptureError, DeviceDescriptor, DeviceKind, DeviceRecord, StreamConstraints};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{MediaDeviceInfo, MediaDeviceKind, MediaDevices, MediaStream, MediaStreamConstraints, MediaStreamTrack};

fn media_devices() -> Result<MediaDevices, CaptureError> {
    let window = web_sys::window().ok_or(CaptureError::Unsupported)?;
    let media_devices = window
        .navigator()
        .media_devices()
        .map_err(|_| CaptureError::Unsupported)?;

    // Missing outside secure contexts
    if media_devices.is_undefined() {
        return Err(CaptureError::Unsupported);
    }
    Ok(media_devices)
}

/// Lists video inputs in the order the browser reports them.
pub async fn enumerate_video_inputs() -> Result<Vec<DeviceDescriptor>, CaptureError> {
    let media_devices = media_devices()?;
    let promise = media_devices
        .enumerate_devices()
        .map_err(|e| CaptureError::EnumerationFailed(describe(&e)))?;
    let list = JsFuture::from(promise)
        .await
        .map_err(|e| CaptureError::EnumerationFailed(describe(&e)))?;

    let list = js_sys::Array::from(&list);
    let records = list
        .iter()
        .filter_map(|value| value.dyn_into::<MediaDeviceInfo>().ok())
        .map(|info| DeviceRecord {
            device_id: info.device_id(),
            kind: device_kind(info.kind()),
            label: info.label(),
        });

    Ok(common::video_inputs(records))
}

fn device_kind(kind: MediaDeviceKind) -> DeviceKind {
    match kind {
        MediaDeviceKind::Videoinput => DeviceKind::VideoInput,
        MediaDeviceKind::Audioinput => DeviceKind::AudioInput,
        MediaDeviceKind::Audiooutput => DeviceKind::AudioOutput,
        _ => DeviceKind::Unknown,
    }
}

pub async fn get_video_stream(constraints: &StreamConstraints) -> Result<MediaStream, CaptureError> {
    let media_devices = media_devices()?;

    let js_constraints: MediaStreamConstraints = serde_wasm_bindgen::to_value(constraints)
        .map_err(|e| CaptureError::Other {
            name: "TypeError".to_string(),
            message: e.to_string(),
        })?
        .unchecked_into();

    let promise = media_devices
        .get_user_media_with_constraints(&js_constraints)
        .map_err(|e| classify_rejection(&e))?;
    let stream_js = JsFuture::from(promise)
        .await
        .map_err(|e| classify_rejection(&e))?;
    Ok(MediaStream::from(stream_js))
}

/// Maps a getUserMedia rejection (DOMException or OverconstrainedError).
fn classify_rejection(err: &JsValue) -> CaptureError {
    let name = string_property(err, "name").unwrap_or_default();
    let message = string_property(err, "message").unwrap_or_else(|| describe(err));
    let constraint = string_property(err, "constraint");
    CaptureError::from_dom_exception(&name, &message, constraint.as_deref())
}

fn string_property(value: &JsValue, key: &str) -> Option<String> {
    if !value.is_object() {
        return None;
    }
    js_sys::Reflect::get(value, &JsValue::from_str(key))
        .ok()?
        .as_string()
}

fn describe(value: &JsValue) -> String {
    string_property(value, "message")
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

pub fn stop_stream(stream: &MediaStream) {
    let tracks = stream.get_tracks();
    for i in 0..tracks.length() {
        let track = MediaStreamTrack::from(tracks.get(i));
        track.stop();
    }
}

/// `location.search`, empty when unavailable
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Rewrites the query string without adding a history entry.
pub fn replace_search(search: &str) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    window
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(search))
}
