//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::Settings;
pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let settings_path = Settings::file_path();
        let app = Self::with_settings(settings, settings_path);

        tracing::info!(
            "Starting at level {}/{}",
            app.ui.level.level(),
            app.ui.level.levels() - 1
        );

        (app, Task::none())
    }

    /// Build the application from already loaded settings
    pub fn with_settings(settings: Settings, settings_path: Option<std::path::PathBuf>) -> Self {
        let ui = UiState::from_settings(&settings);
        let core = CoreState {
            settings,
            settings_path,
        };
        Self { core, ui }
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title showing the current level
    pub fn title(&self) -> String {
        format!(
            "Trivial Torch - level {}/{}",
            self.ui.level.level(),
            self.ui.level.levels() - 1
        )
    }

    /// Keyboard shortcuts are the only subscription; the slider drives its
    /// own animation frames
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        })
    }
}
