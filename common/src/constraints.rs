//! Capability request handed to `getUserMedia`.
//!
//! Field names follow the MediaTrackConstraints dictionary so the structs can
//! be serialized straight into the JS object the browser expects.

use serde::{Deserialize, Serialize};

use crate::preset::ResolutionPreset;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExactConstraint {
    pub exact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoConstraints {
    pub device_id: ExactConstraint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl VideoConstraints {
    pub fn new(device_id: &str, preset: ResolutionPreset) -> Self {
        let (width, height) = match preset.dimensions() {
            Some((w, h)) => (Some(w), Some(h)),
            None => (None, None),
        };
        Self {
            device_id: ExactConstraint {
                exact: device_id.to_string(),
            },
            width,
            height,
        }
    }
}

/// Video-only stream request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreamConstraints {
    pub video: VideoConstraints,
    pub audio: bool,
}

impl StreamConstraints {
    pub fn video_only(device_id: &str, preset: ResolutionPreset) -> Self {
        Self {
            video: VideoConstraints::new(device_id, preset),
            audio: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_preset_has_no_hints() {
        let constraints = StreamConstraints::video_only("cam1", ResolutionPreset::Default);
        let value = serde_json::to_value(&constraints).unwrap();
        assert_eq!(
            value,
            json!({ "video": { "deviceId": { "exact": "cam1" } }, "audio": false })
        );
    }

    #[test]
    fn test_720p_hints() {
        let constraints = StreamConstraints::video_only("cam1", ResolutionPreset::Hd);
        let value = serde_json::to_value(&constraints).unwrap();
        assert_eq!(
            value["video"],
            json!({ "deviceId": { "exact": "cam1" }, "width": 1280, "height": 720 })
        );
    }

    #[test]
    fn test_1080p_hints() {
        let video = VideoConstraints::new("cam1", ResolutionPreset::FullHd);
        assert_eq!(video.device_id.exact, "cam1");
        assert_eq!(video.width, Some(1920));
        assert_eq!(video.height, Some(1080));
    }
}
