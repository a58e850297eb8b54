//! Values derived from the viewport's vertical scroll offset.

use crate::config::ScrollConfig;

/// Offset, in layout units, past which the navbar turns solid. Fixed for
/// every build; it is not part of [`ScrollConfig`].
pub const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollState {
    scrolled_past_threshold: bool,
    raw_offset: f64,
}

impl ScrollState {
    /// Records a new offset. Both derived values are recomputed from it, so
    /// the state is consistent with whichever event arrived last.
    pub fn update(&mut self, offset: f64) {
        let offset = sanitize(offset);
        self.raw_offset = offset;
        self.scrolled_past_threshold = offset > SCROLL_THRESHOLD;
    }

    pub fn raw_offset(&self) -> f64 {
        self.raw_offset
    }

    pub fn scrolled_past_threshold(&self) -> bool {
        self.scrolled_past_threshold
    }

    pub fn hero_opacity(&self, config: &ScrollConfig) -> f64 {
        hero_opacity(self.raw_offset, config.parallax_range)
    }
}

/// Maps `[0, range]` linearly onto `[1, 0]`, clamped on both ends.
pub fn hero_opacity(offset: f64, range: f64) -> f64 {
    let offset = sanitize(offset);
    if range <= 0.0 {
        return if offset > 0.0 { 0.0 } else { 1.0 };
    }
    (1.0 - offset / range).clamp(0.0, 1.0)
}

fn sanitize(offset: f64) -> f64 {
    if offset.is_nan() {
        0.0
    } else {
        offset
    }
}
