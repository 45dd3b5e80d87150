pub mod category;
pub mod config;
pub mod geometry;
pub mod jump;
pub mod lifecycle;
pub mod policy;
pub mod ticker;
pub mod visibility;
pub mod wheel;

pub use category::{
    category_from_thumb, normalize_category, CategoryEntry, CategoryIndex, SelectionChange,
    ThumbSelection, TitleLines, DEFAULT_CATEGORIES, THUMB_SUFFIX,
};
pub use config::{ConfigError, EngineConfig};
pub use geometry::{pick_centered, Axis, Rect, ScrollExtent};
pub use jump::{plan_jump, Align, JumpPlan, ResumeTrigger};
pub use lifecycle::{Lifecycle, Phase, ResourceCounts, Slot, Transition};
pub use policy::{CenterStrategyKind, LayoutMode, LayoutPolicy, RouteProfile};
pub use ticker::{next_offset, TickStep};
pub use visibility::{
    band_margin, category_update, pick_highest_ratio, CategoryUpdate, IntersectionSample,
};
pub use wheel::wheel_scroll_delta;
