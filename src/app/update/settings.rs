// src/app/update/settings.rs
//! Settings message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle settings-related messages
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SaveSettings => {
                self.core.settings.level = self.ui.level.value();

                let Some(path) = &self.core.settings_path else {
                    tracing::debug!("No settings path, skipping save");
                    return Some(Task::none());
                };

                if let Err(e) = self.core.settings.save_to_file(path) {
                    tracing::error!("Failed to save settings: {}", e);
                } else {
                    tracing::info!("Settings saved successfully");
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}
