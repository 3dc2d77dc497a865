//! Torch level widget
//!
//! Stacks the stepped slider above a caption naming the current level.
//! Reusable; it knows nothing about the application's messages.

use iced::widget::{column, svg, text};
use iced::{Alignment, Element};

use crate::features::stepping::SteppedProgress;
use crate::ui::primitives::stepped_slider;
use crate::ui::theme;

/// Caption for a level, counting from 0 (off)
pub fn caption(progress: &SteppedProgress) -> String {
    format!("Level {} / {}", progress.level(), progress.levels() - 1)
}

/// Create a level picker element
///
/// # Arguments
/// * `progress` - Current level, owned by the caller
/// * `dot_mask` - Stencil for the slider dot
/// * `on_move` - Called with the new quantized value on every accepted drag
pub fn view<'a, Message: 'a>(
    progress: &SteppedProgress,
    dot_mask: svg::Handle,
    on_move: impl Fn(f32) -> Message + 'a,
) -> Element<'a, Message> {
    let slider = stepped_slider(progress, on_move)
        .width(56.0)
        .height(280.0)
        .dot_mask(dot_mask);

    let label = text(caption(progress)).size(14).style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    });

    column![slider, label]
        .spacing(16)
        .align_x(Alignment::Center)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::stepping::StepCount;

    #[test]
    fn caption_counts_from_zero() {
        let mut progress = SteppedProgress::new(StepCount::new(5.0).unwrap());
        assert_eq!(caption(&progress), "Level 0 / 4");
        progress.set(1.0, false);
        assert_eq!(caption(&progress), "Level 4 / 4");
    }
}
