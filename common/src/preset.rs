use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolution hint bundle offered in the "Source Option" dropdown
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum ResolutionPreset {
    /// No width/height hints, the device picks its own mode
    #[default]
    #[serde(rename = "Default")]
    Default,
    #[serde(rename = "1080p")]
    FullHd,
    #[serde(rename = "720p")]
    Hd,
}

impl ResolutionPreset {
    /// Dropdown order
    pub const ALL: [ResolutionPreset; 3] = [
        ResolutionPreset::Default,
        ResolutionPreset::FullHd,
        ResolutionPreset::Hd,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionPreset::Default => "Default",
            ResolutionPreset::FullHd => "1080p",
            ResolutionPreset::Hd => "720p",
        }
    }

    /// Exact name lookup. Anything unrecognized means no hints.
    pub fn from_name_loose(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == name)
            .unwrap_or_default()
    }

    /// (width, height) hints passed to the capture request
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            ResolutionPreset::Default => None,
            ResolutionPreset::FullHd => Some((1920, 1080)),
            ResolutionPreset::Hd => Some((1280, 720)),
        }
    }
}

impl fmt::Display for ResolutionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names_resolve() {
        assert_eq!(ResolutionPreset::from_name_loose("Default"), ResolutionPreset::Default);
        assert_eq!(ResolutionPreset::from_name_loose("1080p"), ResolutionPreset::FullHd);
        assert_eq!(ResolutionPreset::from_name_loose("720p"), ResolutionPreset::Hd);
    }

    #[test]
    fn test_unknown_names_fall_back_to_default() {
        for name in ["", "4k", "1080P", "default", " 720p"] {
            let preset = ResolutionPreset::from_name_loose(name);
            assert_eq!(preset, ResolutionPreset::Default, "name {:?}", name);
            assert_eq!(preset.dimensions(), None);
        }
    }

    #[test]
    fn test_dimensions() {
        assert_eq!(ResolutionPreset::FullHd.dimensions(), Some((1920, 1080)));
        assert_eq!(ResolutionPreset::Hd.dimensions(), Some((1280, 720)));
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&ResolutionPreset::ALL).unwrap();
        assert_eq!(json, r#"["Default","1080p","720p"]"#);
    }
}
