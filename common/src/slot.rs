//! Ownership of the stream bound to the playback surface.
//!
//! Generic over the stream type so the bind/release rules run on the host;
//! the client instantiates it with `web_sys::MediaStream`.

use crate::selection::{CaptureRequest, PickerState};

/// Outcome of handing a resolved stream to the slot
#[derive(Debug, PartialEq, Eq)]
pub enum Accepted<S> {
    /// The new stream is bound. `released` is the previous stream, which the
    /// caller must stop.
    Bound { released: Option<S> },
    /// A newer request was issued; the returned stream must be stopped.
    Stale(S),
}

#[derive(Debug)]
pub struct StreamSlot<S> {
    current: Option<S>,
}

impl<S> Default for StreamSlot<S> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<S> StreamSlot<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&S> {
        self.current.as_ref()
    }

    /// Binds `stream` if `request` is still the latest one in `state`.
    pub fn accept(&mut self, state: &mut PickerState, request: &CaptureRequest, stream: S) -> Accepted<S> {
        if !state.capture_succeeded(request) {
            return Accepted::Stale(stream);
        }
        let released = self.current.replace(stream);
        Accepted::Bound { released }
    }

    /// Teardown: empties the slot and invalidates in-flight requests so a
    /// late grant cannot rebind a camera.
    pub fn release(&mut self, state: &mut PickerState) -> Option<S> {
        state.cancel_pending();
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::DeviceDescriptor;
    use crate::preset::ResolutionPreset;

    fn state_with_cameras() -> PickerState {
        let mut state = PickerState::default();
        state.devices_enumerated(vec![
            DeviceDescriptor::new("cam1", "Front"),
            DeviceDescriptor::new("cam2", "Back"),
        ]);
        state
    }

    #[test]
    fn test_bind_releases_previous_stream() {
        let mut state = state_with_cameras();
        let mut slot = StreamSlot::new();

        let first = state.select_device("cam1");
        assert_eq!(slot.accept(&mut state, &first, "stream-1"), Accepted::Bound { released: None });

        let second = state.select_preset(ResolutionPreset::Hd);
        assert_eq!(
            slot.accept(&mut state, &second, "stream-2"),
            Accepted::Bound { released: Some("stream-1") }
        );
        assert_eq!(slot.current(), Some(&"stream-2"));
    }

    #[test]
    fn test_stale_stream_is_handed_back() {
        let mut state = state_with_cameras();
        let mut slot = StreamSlot::new();

        let old = state.select_device("cam1");
        let new = state.select_device("cam2");

        assert_eq!(slot.accept(&mut state, &new, "cam2-stream"), Accepted::Bound { released: None });
        assert_eq!(slot.accept(&mut state, &old, "cam1-stream"), Accepted::Stale("cam1-stream"));
        assert_eq!(slot.current(), Some(&"cam2-stream"));
    }

    #[test]
    fn test_late_grant_after_release_is_stale() {
        let mut state = state_with_cameras();
        let mut slot = StreamSlot::new();

        let bound = state.select_device("cam1");
        slot.accept(&mut state, &bound, "live");
        let pending = state.select_preset(ResolutionPreset::FullHd);

        assert_eq!(slot.release(&mut state), Some("live"));
        assert_eq!(slot.current(), None);

        // permission prompt answered after teardown
        assert_eq!(slot.accept(&mut state, &pending, "late"), Accepted::Stale("late"));
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn test_release_on_empty_slot() {
        let mut state = PickerState::default();
        let mut slot: StreamSlot<&str> = StreamSlot::new();
        assert_eq!(slot.release(&mut state), None);
    }
}
