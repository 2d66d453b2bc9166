//! Picker state: device list, working selection, overlay flag and the status
//! of the most recent capture request.
//!
//! Every capture request carries a sequence number. Only the result of the
//! latest request may change what the playback surface shows, so a slow
//! response to an earlier selection can never replace a newer stream.

use crate::address::{format_search, AddressParams};
use crate::constraints::StreamConstraints;
use crate::device::DeviceDescriptor;
use crate::error::CaptureError;
use crate::preset::ResolutionPreset;

pub type RequestSeq = u64;

/// One `getUserMedia` call for a (device, preset) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureRequest {
    pub seq: RequestSeq,
    pub device_id: String,
    pub preset: ResolutionPreset,
}

impl CaptureRequest {
    pub fn constraints(&self) -> StreamConstraints {
        StreamConstraints::video_only(&self.device_id, self.preset)
    }

    /// Address written once this request succeeds
    pub fn search(&self) -> String {
        format_search(&self.device_id, self.preset)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StreamStatus {
    #[default]
    Idle,
    Pending(RequestSeq),
    Active {
        device_id: String,
        preset: ResolutionPreset,
    },
    Failed(CaptureError),
}

impl StreamStatus {
    pub fn error(&self) -> Option<&CaptureError> {
        match self {
            StreamStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PickerState {
    devices: Vec<DeviceDescriptor>,
    device_id: String,
    preset: ResolutionPreset,
    settings_visible: bool,
    status: StreamStatus,
    latest_seq: RequestSeq,
}

impl PickerState {
    /// Initial state seeded from the page address
    pub fn from_address(params: &AddressParams) -> Self {
        Self {
            device_id: params.device_id().to_string(),
            preset: params.preset(),
            ..Self::default()
        }
    }

    pub fn devices(&self) -> &[DeviceDescriptor] {
        &self.devices
    }

    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    pub fn preset(&self) -> ResolutionPreset {
        self.preset
    }

    pub fn settings_visible(&self) -> bool {
        self.settings_visible
    }

    pub fn status(&self) -> &StreamStatus {
        &self.status
    }

    /// Stores the enumerated set and picks the first device. The
    /// address-supplied device id is not consulted here; the first camera
    /// always wins. Returns `None` when there is nothing to capture.
    pub fn devices_enumerated(&mut self, devices: Vec<DeviceDescriptor>) -> Option<CaptureRequest> {
        self.devices = devices;
        match self.devices.first() {
            Some(first) => {
                self.device_id = first.device_id.clone();
                Some(self.issue())
            }
            None => {
                self.device_id.clear();
                None
            }
        }
    }

    /// Enumeration rejected: nothing to pick, nothing to capture.
    pub fn enumeration_failed(&mut self, err: CaptureError) {
        self.devices.clear();
        self.device_id.clear();
        self.status = StreamStatus::Failed(err);
    }

    pub fn select_device(&mut self, device_id: &str) -> CaptureRequest {
        self.device_id = device_id.to_string();
        self.issue()
    }

    pub fn select_preset(&mut self, preset: ResolutionPreset) -> CaptureRequest {
        self.preset = preset;
        self.issue()
    }

    /// Settings icon click. Returns the new visibility.
    pub fn toggle_settings(&mut self) -> bool {
        self.settings_visible = !self.settings_visible;
        self.settings_visible
    }

    /// Backdrop click
    pub fn close_settings(&mut self) {
        self.settings_visible = false;
    }

    /// Invalidates any in-flight request so its result is treated as stale.
    pub fn cancel_pending(&mut self) {
        self.latest_seq += 1;
        self.status = StreamStatus::Idle;
    }

    pub fn is_latest(&self, seq: RequestSeq) -> bool {
        seq == self.latest_seq
    }

    /// Records a resolved stream. Returns `false` if a newer request has been
    /// issued since, in which case the caller must release the stream
    /// instead of binding it.
    pub fn capture_succeeded(&mut self, request: &CaptureRequest) -> bool {
        if !self.is_latest(request.seq) {
            return false;
        }
        self.status = StreamStatus::Active {
            device_id: request.device_id.clone(),
            preset: request.preset,
        };
        true
    }

    /// Records a rejection. Stale failures are ignored and return `false`.
    pub fn capture_failed(&mut self, request: &CaptureRequest, err: CaptureError) -> bool {
        if !self.is_latest(request.seq) {
            return false;
        }
        self.status = StreamStatus::Failed(err);
        true
    }

    fn issue(&mut self) -> CaptureRequest {
        self.latest_seq += 1;
        self.status = StreamStatus::Pending(self.latest_seq);
        CaptureRequest {
            seq: self.latest_seq,
            device_id: self.device_id.clone(),
            preset: self.preset,
        }
    }
}
