//! Animation helpers built on `iced_anim`
//!
//! Widgets keep an [`Animated`] value in their tree state and tick it on
//! `RedrawRequested`, requesting another frame while it is still moving.

use std::time::Duration;

pub use iced_anim::Animated;
pub use iced_anim::transition::Easing;

/// Dot slide duration (150ms)
pub const DOT_DURATION: Duration = Duration::from_millis(150);

/// Easing used when the slider dot moves to a new level
pub fn dot_easing() -> Easing {
    Easing::EASE.with_duration(DOT_DURATION)
}
