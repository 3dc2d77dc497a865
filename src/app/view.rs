// src/app/view.rs
//! Application view rendering

use iced::widget::{Row, column, container, text};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::features::{Action, KeyBindings};
use crate::ui::{theme, widgets};

/// Diameter of the beam panel
const BEAM_SIZE: f32 = 160.0;

impl App {
    /// Build the main view
    pub fn view(&self) -> Element<'_, Message> {
        let level = self.ui.level.value();

        let beam = container(
            text(format!("{:.0}%", level * 100.0))
                .size(28)
                .font(iced::Font {
                    weight: iced::font::Weight::Bold,
                    ..Default::default()
                }),
        )
        .center_x(BEAM_SIZE)
        .center_y(BEAM_SIZE)
        .style(move |theme| theme::beam_panel(theme, level, BEAM_SIZE / 2.0));

        let picker =
            widgets::torch_level(&self.ui.level, self.ui.dot_mask.clone(), Message::SliderMoved);

        container(
            column![beam, picker, key_hints(&self.core.settings.keybindings)]
                .spacing(40)
                .align_x(Alignment::Center),
        )
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(theme::main_content)
        .into()
    }
}

/// One line listing the first shortcut of every action
fn key_hints(bindings: &KeyBindings) -> Element<'_, Message> {
    Row::with_children(Action::all().iter().map(|action| {
        text(format!(
            "{} {}",
            bindings.display_for_action(action),
            action.display_name()
        ))
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into()
    }))
    .spacing(16)
    .into()
}
