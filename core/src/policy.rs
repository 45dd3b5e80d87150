//! Device/page policy: which layout mode applies and which behaviours it gets.

use crate::config::EngineConfig;
use crate::geometry::{Axis, ScrollExtent};

/// What the engine knows about the current page when a cycle starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteProfile {
    pub path: String,
    pub narrow: bool,
}

impl RouteProfile {
    pub fn new(path: impl Into<String>, narrow: bool) -> Self {
        Self {
            path: path.into(),
            narrow,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    DesktopHorizontal,
    DesktopVertical,
    Mobile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CenterStrategyKind {
    Geometric,
    VisibilityRatio,
}

/// Everything a lifecycle cycle needs to decide before it wires listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutPolicy {
    pub mode: LayoutMode,
    pub axis: Axis,
    pub strategy: CenterStrategyKind,
    pub autoscroll: bool,
    pub wheel_capture: bool,
    /// The page scrolls the gallery natively and the ticker stays off.
    pub native_scroll: bool,
}

impl LayoutPolicy {
    pub fn evaluate(config: &EngineConfig, profile: &RouteProfile, extent: ScrollExtent) -> Self {
        let native_scroll = profile.narrow && config.is_native_scroll_route(&profile.path);
        let axis = if native_scroll {
            Axis::Vertical
        } else {
            extent.axis()
        };
        let mode = if profile.narrow {
            LayoutMode::Mobile
        } else {
            match axis {
                Axis::Horizontal => LayoutMode::DesktopHorizontal,
                Axis::Vertical => LayoutMode::DesktopVertical,
            }
        };
        let strategy = match mode {
            LayoutMode::Mobile => CenterStrategyKind::VisibilityRatio,
            LayoutMode::DesktopHorizontal | LayoutMode::DesktopVertical => {
                CenterStrategyKind::Geometric
            }
        };
        let autoscroll = !native_scroll
            && match axis {
                Axis::Vertical => true,
                Axis::Horizontal => config.autoscroll_horizontal,
            };
        let wheel_capture = config.is_wheel_route(&profile.path);
        Self {
            mode,
            axis,
            strategy,
            autoscroll,
            wheel_capture,
            native_scroll,
        }
    }
}
