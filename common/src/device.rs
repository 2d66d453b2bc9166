use serde::{Deserialize, Serialize};

/// Kind reported by `enumerateDevices`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    AudioInput,
    AudioOutput,
    VideoInput,
    Unknown,
}

impl DeviceKind {
    pub fn from_str_loose(s: &str) -> Self {
        match s {
            "audioinput" => DeviceKind::AudioInput,
            "audiooutput" => DeviceKind::AudioOutput,
            "videoinput" => DeviceKind::VideoInput,
            _ => DeviceKind::Unknown,
        }
    }
}

/// Raw platform record, before filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceRecord {
    pub device_id: String,
    pub kind: DeviceKind,
    pub label: String,
}

/// One capturable video source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDescriptor {
    pub device_id: String,
    /// Empty until the user has granted camera permission
    pub label: String,
}

impl DeviceDescriptor {
    pub fn new(device_id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            label: label.into(),
        }
    }

    /// Option text for the device dropdown. `index` is zero-based.
    pub fn display_label(&self, index: usize) -> String {
        if self.label.is_empty() {
            format!("Camera {}", index + 1)
        } else {
            self.label.clone()
        }
    }
}

/// Keeps video inputs in enumeration order, projected to id + label.
pub fn video_inputs<I>(records: I) -> Vec<DeviceDescriptor>
where
    I: IntoIterator<Item = DeviceRecord>,
{
    records
        .into_iter()
        .filter(|record| record.kind == DeviceKind::VideoInput)
        .map(|record| DeviceDescriptor {
            device_id: record.device_id,
            label: record.label,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, kind: &str, label: &str) -> DeviceRecord {
        DeviceRecord {
            device_id: id.to_string(),
            kind: DeviceKind::from_str_loose(kind),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_video_inputs_filters_and_keeps_order() {
        let devices = video_inputs(vec![
            record("mic", "audioinput", "Microphone"),
            record("cam1", "videoinput", "Front"),
            record("spk", "audiooutput", "Speakers"),
            record("cam2", "videoinput", "Back"),
        ]);

        assert_eq!(
            devices,
            vec![
                DeviceDescriptor::new("cam1", "Front"),
                DeviceDescriptor::new("cam2", "Back"),
            ]
        );
    }

    #[test]
    fn test_unknown_kind_is_dropped() {
        assert_eq!(DeviceKind::from_str_loose("videoInput"), DeviceKind::Unknown);
        assert!(video_inputs(vec![record("x", "hologram", "X")]).is_empty());
    }

    #[test]
    fn test_display_label_falls_back_when_unlabelled() {
        assert_eq!(DeviceDescriptor::new("cam1", "").display_label(0), "Camera 1");
        assert_eq!(DeviceDescriptor::new("cam2", "Back").display_label(1), "Back");
    }
}
