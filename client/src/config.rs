use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

/// Options accepted by `start()`. Every field may be omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    /// Element the panel is mounted into; `document.body` when unset
    #[serde(default)]
    pub container_id: Option<String>,
    #[serde(default = "default_settings_icon_src")]
    pub settings_icon_src: String,
    #[serde(default = "default_settings_icon_width")]
    pub settings_icon_width: u32,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_settings_icon_src() -> String {
    "/settings.svg".to_string()
}

fn default_settings_icon_width() -> u32 {
    32
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            container_id: None,
            settings_icon_src: default_settings_icon_src(),
            settings_icon_width: default_settings_icon_width(),
            logging: LoggingConfig::default(),
        }
    }
}

impl LoggingConfig {
    /// Unparseable levels fall back to `info`
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl PanelConfig {
    /// `undefined` and `null` both mean "all defaults".
    pub fn from_js(value: JsValue) -> Result<Self, JsValue> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
    }
}
