use thiserror::Error;

/// Why the preview could not be started
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    #[error("camera access was denied")]
    PermissionDenied,

    #[error("camera not found")]
    DeviceNotFound,

    #[error("the camera does not support the requested {0}")]
    Unsatisfiable(String),

    #[error("the camera is busy or could not be started")]
    DeviceBusy,

    #[error("this browser does not expose media devices")]
    Unsupported,

    #[error("listing cameras failed: {0}")]
    EnumerationFailed(String),

    #[error("{name}: {message}")]
    Other { name: String, message: String },
}

impl CaptureError {
    /// Classifies a `getUserMedia` rejection by its DOMException name.
    /// `constraint` is the offending property of an OverconstrainedError.
    pub fn from_dom_exception(name: &str, message: &str, constraint: Option<&str>) -> Self {
        match name {
            "NotAllowedError" | "SecurityError" | "PermissionDeniedError" => {
                CaptureError::PermissionDenied
            }
            "NotFoundError" | "DevicesNotFoundError" => CaptureError::DeviceNotFound,
            "OverconstrainedError" | "ConstraintNotSatisfiedError" => match constraint {
                Some("deviceId") => CaptureError::DeviceNotFound,
                Some(c) if !c.is_empty() => CaptureError::Unsatisfiable(c.to_string()),
                _ => CaptureError::Unsatisfiable("resolution".to_string()),
            },
            "NotReadableError" | "TrackStartError" | "AbortError" => CaptureError::DeviceBusy,
            _ => CaptureError::Other {
                name: name.to_string(),
                message: message.to_string(),
            },
        }
    }

    /// Text for the panel's error banner
    pub fn user_message(&self) -> String {
        format!("Camera unavailable: {}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied() {
        assert_eq!(
            CaptureError::from_dom_exception("NotAllowedError", "Permission denied", None),
            CaptureError::PermissionDenied
        );
    }

    #[test]
    fn test_overconstrained_on_device_id_is_not_found() {
        assert_eq!(
            CaptureError::from_dom_exception("OverconstrainedError", "", Some("deviceId")),
            CaptureError::DeviceNotFound
        );
        assert_eq!(
            CaptureError::from_dom_exception("NotFoundError", "Requested device not found", None),
            CaptureError::DeviceNotFound
        );
    }

    #[test]
    fn test_overconstrained_resolution() {
        assert_eq!(
            CaptureError::from_dom_exception("OverconstrainedError", "", Some("width")),
            CaptureError::Unsatisfiable("width".to_string())
        );
        assert_eq!(
            CaptureError::from_dom_exception("OverconstrainedError", "", None),
            CaptureError::Unsatisfiable("resolution".to_string())
        );
    }

    #[test]
    fn test_busy_and_other() {
        assert_eq!(
            CaptureError::from_dom_exception("NotReadableError", "Could not start video source", None),
            CaptureError::DeviceBusy
        );
        assert_eq!(
            CaptureError::from_dom_exception("TypeError", "bad constraints", None),
            CaptureError::Other {
                name: "TypeError".to_string(),
                message: "bad constraints".to_string(),
            }
        );
    }

    #[test]
    fn test_user_message() {
        assert_eq!(
            CaptureError::PermissionDenied.user_message(),
            "Camera unavailable: camera access was denied"
        );
    }
}
