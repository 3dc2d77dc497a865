// src/app/update/keyboard.rs
//! Keyboard and action message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Action;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if let Some(action) = self.core.settings.keybindings.find_action(key, modifiers) {
                    return Some(self.update(Message::ExecuteAction(action)));
                }
                Some(Task::none())
            }

            Message::ExecuteAction(action) => Some(self.execute_action(*action)),

            _ => None,
        }
    }

    /// Execute a keybinding action
    fn execute_action(&mut self, action: Action) -> Task<Message> {
        tracing::debug!("Executing action {:?}", action);
        let animate = !self.core.settings.display.reduce_motion;

        let mut level = self.ui.level;
        match action {
            Action::Brighter => {
                level.step_by(1, animate);
            }
            Action::Dimmer => {
                level.step_by(-1, animate);
            }
            Action::Full => {
                level.set(1.0, animate);
            }
            Action::Off => {
                level.set(0.0, animate);
            }
        }

        self.set_level(level.value(), animate)
    }
}
