// src/app/update/slider.rs
//! Slider message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle slider-related messages
    pub fn handle_slider(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SliderMoved(progress) => {
                let animate = !self.core.settings.display.reduce_motion;
                Some(self.set_level(*progress, animate))
            }
            _ => None,
        }
    }

    /// Store a new level and persist it when it changed
    pub(super) fn set_level(&mut self, progress: f32, animate: bool) -> Task<Message> {
        if !self.ui.level.set(progress, animate) {
            return Task::none();
        }

        tracing::debug!(
            "Torch level {}/{} ({:.2})",
            self.ui.level.level(),
            self.ui.level.levels() - 1,
            self.ui.level.value()
        );
        self.update(Message::SaveSettings)
    }
}
