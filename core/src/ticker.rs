/// One auto-scroll tick along an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickStep {
    pub offset: f64,
    pub visible: f64,
    pub content: f64,
    pub step: f64,
}

impl TickStep {
    pub fn next(&self) -> f64 {
        next_offset(self.offset, self.visible, self.content, self.step)
    }
}

/// Offset after advancing by `step`. Reaching the end of the content wraps to
/// zero instead of overshooting; content that does not overflow stays at zero.
pub fn next_offset(offset: f64, visible: f64, content: f64, step: f64) -> f64 {
    let max = (content - visible).max(0.0);
    if max <= 0.0 {
        return 0.0;
    }
    let next = offset.max(0.0) + step;
    if next >= max {
        0.0
    } else {
        next
    }
}
