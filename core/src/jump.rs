use crate::category::normalize_category;
use crate::geometry::Axis;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Center,
    Nearest,
}

/// Target and alignment for a thumbnail jump. `block` is the vertical
/// alignment and `inline` the horizontal one, as in `scrollIntoView`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JumpPlan {
    pub index: usize,
    pub block: Align,
    pub inline: Align,
}

/// How the ticker comes back after a jump.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResumeTrigger {
    ScrollEnd,
    Timeout(u32),
}

impl ResumeTrigger {
    pub fn select(scrollend_supported: bool, fallback_ms: u32) -> Self {
        if scrollend_supported {
            ResumeTrigger::ScrollEnd
        } else {
            ResumeTrigger::Timeout(fallback_ms)
        }
    }
}

/// First item whose label matches `target`, centered on `axis` and brought to
/// the nearest edge on the cross axis.
pub fn plan_jump<'a, I>(labels: I, target: &str, axis: Axis) -> Option<JumpPlan>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let target = normalize_category(target)?;
    let index = labels.into_iter().position(|label| {
        label
            .and_then(normalize_category)
            .map(|key| key == target)
            .unwrap_or(false)
    })?;
    let (block, inline) = match axis {
        Axis::Vertical => (Align::Center, Align::Nearest),
        Axis::Horizontal => (Align::Nearest, Align::Center),
    };
    Some(JumpPlan {
        index,
        block,
        inline,
    })
}
