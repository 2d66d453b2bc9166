//! Selection mirrored into the page address (`?deviceId=..&option=..`).

use url::form_urlencoded;

use crate::preset::ResolutionPreset;

pub const DEVICE_ID_PARAM: &str = "deviceId";
pub const OPTION_PARAM: &str = "option";

/// Parameters read from `location.search` at startup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressParams {
    pub device_id: Option<String>,
    pub option: Option<String>,
}

impl AddressParams {
    /// Accepts the search string with or without its leading `?`. The first
    /// occurrence of a key wins and empty values count as absent.
    pub fn parse(search: &str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);
        let mut params = AddressParams::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            if value.is_empty() {
                continue;
            }
            let slot = match &*key {
                DEVICE_ID_PARAM => &mut params.device_id,
                OPTION_PARAM => &mut params.option,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        params
    }

    pub fn device_id(&self) -> &str {
        self.device_id.as_deref().unwrap_or("")
    }

    pub fn preset(&self) -> ResolutionPreset {
        self.option
            .as_deref()
            .map(ResolutionPreset::from_name_loose)
            .unwrap_or_default()
    }
}

/// Search string written after a successful capture, including the `?`.
pub fn format_search(device_id: &str, preset: ResolutionPreset) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(DEVICE_ID_PARAM, device_id)
        .append_pair(OPTION_PARAM, preset.as_str())
        .finish();
    format!("?{}", query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_params() {
        let params = AddressParams::parse("?deviceId=camX&option=720p");
        assert_eq!(params.device_id(), "camX");
        assert_eq!(params.preset(), ResolutionPreset::Hd);
    }

    #[test]
    fn test_parse_without_question_mark() {
        let params = AddressParams::parse("option=1080p");
        assert_eq!(params.device_id, None);
        assert_eq!(params.preset(), ResolutionPreset::FullHd);
    }

    #[test]
    fn test_missing_or_unknown_option_is_default() {
        assert_eq!(AddressParams::parse("").preset(), ResolutionPreset::Default);
        assert_eq!(AddressParams::parse("?option=").preset(), ResolutionPreset::Default);
        assert_eq!(AddressParams::parse("?option=8k").preset(), ResolutionPreset::Default);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let params = AddressParams::parse("?deviceId=a&deviceId=b&foo=bar");
        assert_eq!(params.device_id(), "a");
    }

    #[test]
    fn test_format_search() {
        assert_eq!(
            format_search("cam1", ResolutionPreset::FullHd),
            "?deviceId=cam1&option=1080p"
        );
    }

    #[test]
    fn test_format_search_encodes_opaque_ids() {
        let id = "a/b+c=d";
        let search = format_search(id, ResolutionPreset::Default);
        assert_eq!(search, "?deviceId=a%2Fb%2Bc%3Dd&option=Default");

        let params = AddressParams::parse(&search);
        assert_eq!(params.device_id(), id);
        assert_eq!(params.preset(), ResolutionPreset::Default);
    }
}
