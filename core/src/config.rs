use std::fmt;

use serde::Deserialize;

use crate::category::{CategoryEntry, CategoryIndex, DEFAULT_CATEGORIES};

pub const DEFAULT_GALLERY_SELECTOR: &str = "#gallery";
pub const DEFAULT_ITEM_SELECTOR: &str = "a, :scope > div > div";
pub const DEFAULT_TITLE_SELECTOR: &str = "#main-title .framer-text span";
pub const DEFAULT_THUMB_SELECTOR: &str = "[id$=\"-cat\"]";
pub const DEFAULT_CENTERED_CLASS: &str = "in-center";
pub const DEFAULT_SELECTED_CLASS: &str = "selected";
pub const DEFAULT_NARROW_QUERY: &str = "(max-width: 768px)";
pub const DEFAULT_SETTLE_DELAY_MS: u32 = 50;
pub const DEFAULT_JUMP_RESUME_MS: u32 = 1_500;
pub const DEFAULT_TICK_STEP_PX: f64 = 1.0;
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 20;
pub const DEFAULT_CATEGORY_BAND_PERCENT: f64 = 50.0;
pub const DEFAULT_CENTER_BAND_PERCENT: f64 = 45.0;
pub const DEFAULT_CENTER_THRESHOLDS: &[f64] = &[0.0, 0.25, 0.5, 0.75, 1.0];

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub gallery_selector: String,
    pub item_selector: String,
    pub title_selector: String,
    pub thumb_selector: String,
    pub centered_class: String,
    pub selected_class: String,
    pub wheel_routes: Vec<String>,
    pub native_scroll_routes: Vec<String>,
    pub narrow_query: String,
    pub settle_delay_ms: u32,
    pub jump_resume_ms: u32,
    pub tick_step_px: f64,
    pub tick_interval_ms: u32,
    pub autoscroll_horizontal: bool,
    pub visibility_bias: bool,
    pub category_band_percent: f64,
    pub center_band_percent: f64,
    pub center_thresholds: Vec<f64>,
    pub center_min_ratio: f64,
    pub categories: Vec<CategoryEntry>,
    pub debug: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            gallery_selector: DEFAULT_GALLERY_SELECTOR.to_string(),
            item_selector: DEFAULT_ITEM_SELECTOR.to_string(),
            title_selector: DEFAULT_TITLE_SELECTOR.to_string(),
            thumb_selector: DEFAULT_THUMB_SELECTOR.to_string(),
            centered_class: DEFAULT_CENTERED_CLASS.to_string(),
            selected_class: DEFAULT_SELECTED_CLASS.to_string(),
            wheel_routes: vec!["/".to_string(), "/press".to_string()],
            native_scroll_routes: vec!["/press".to_string()],
            narrow_query: DEFAULT_NARROW_QUERY.to_string(),
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            jump_resume_ms: DEFAULT_JUMP_RESUME_MS,
            tick_step_px: DEFAULT_TICK_STEP_PX,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            autoscroll_horizontal: false,
            visibility_bias: true,
            category_band_percent: DEFAULT_CATEGORY_BAND_PERCENT,
            center_band_percent: DEFAULT_CENTER_BAND_PERCENT,
            center_thresholds: DEFAULT_CENTER_THRESHOLDS.to_vec(),
            center_min_ratio: 0.0,
            categories: DEFAULT_CATEGORIES
                .iter()
                .map(|(key, thumb_id)| CategoryEntry {
                    key: (*key).to_string(),
                    thumb_id: (*thumb_id).to_string(),
                })
                .collect(),
            debug: false,
        }
    }
}

impl EngineConfig {
    /// Parses a JSON override. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let selectors = [
            ("gallery_selector", &self.gallery_selector),
            ("item_selector", &self.item_selector),
            ("title_selector", &self.title_selector),
            ("thumb_selector", &self.thumb_selector),
            ("centered_class", &self.centered_class),
            ("selected_class", &self.selected_class),
        ];
        for (field, value) in selectors {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        if !(self.tick_step_px.is_finite() && self.tick_step_px > 0.0) {
            return Err(ConfigError::InvalidStep(self.tick_step_px));
        }
        for (field, percent) in [
            ("category_band_percent", self.category_band_percent),
            ("center_band_percent", self.center_band_percent),
        ] {
            if !(0.0..=50.0).contains(&percent) {
                return Err(ConfigError::OutOfRange {
                    field,
                    value: percent,
                });
            }
        }
        if !(0.0..=1.0).contains(&self.center_min_ratio) {
            return Err(ConfigError::OutOfRange {
                field: "center_min_ratio",
                value: self.center_min_ratio,
            });
        }
        if let Some(value) = self
            .center_thresholds
            .iter()
            .copied()
            .find(|value| !(0.0..=1.0).contains(value))
        {
            return Err(ConfigError::OutOfRange {
                field: "center_thresholds",
                value,
            });
        }
        Ok(())
    }

    pub fn category_index(&self) -> CategoryIndex {
        CategoryIndex::new(self.categories.clone())
    }

    pub fn is_wheel_route(&self, path: &str) -> bool {
        route_listed(&self.wheel_routes, path)
    }

    pub fn is_native_scroll_route(&self, path: &str) -> bool {
        route_listed(&self.native_scroll_routes, path)
    }
}

fn route_listed(routes: &[String], path: &str) -> bool {
    routes.iter().any(|route| route == path)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    Empty { field: &'static str },
    ZeroInterval,
    InvalidStep(f64),
    OutOfRange { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(message) => write!(f, "invalid config json: {message}"),
            ConfigError::Empty { field } => write!(f, "{field} must not be empty"),
            ConfigError::ZeroInterval => write!(f, "tick_interval_ms must be positive"),
            ConfigError::InvalidStep(step) => {
                write!(f, "tick_step_px must be a positive number, got {step}")
            }
            ConfigError::OutOfRange { field, value } => {
                write!(f, "{field} out of range: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
