use galleria_core::{EngineConfig, LayoutPolicy, RouteProfile};
use web_sys::Element;

use crate::dom;

pub(crate) const CONFIG_ELEMENT_ID: &str = "galleria-config";

/// Compiled-in defaults, overridden by the host page's
/// `<script type="application/json" id="galleria-config">` when present.
pub(crate) fn load_engine_config() -> EngineConfig {
    let Some(raw) = config_source() else {
        return EngineConfig::default();
    };
    match EngineConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            gloo::console::warn!("galleria: ignoring page config", err.to_string());
            EngineConfig::default()
        }
    }
}

fn config_source() -> Option<String> {
    let element = dom::element_by_id(CONFIG_ELEMENT_ID)?;
    let raw = element.text_content()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_string())
}

pub(crate) fn route_profile(config: &EngineConfig) -> RouteProfile {
    RouteProfile::new(dom::current_path(), dom::media_matches(&config.narrow_query))
}

/// Policy for `gallery` as the page looks right now.
pub(crate) fn layout_policy(config: &EngineConfig, gallery: &Element) -> LayoutPolicy {
    LayoutPolicy::evaluate(config, &route_profile(config), dom::scroll_extent(gallery))
}
