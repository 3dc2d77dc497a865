//! Application state definitions

use std::path::{Path, PathBuf};

use iced::widget::svg;

use crate::features::Settings;
use crate::features::stepping::SteppedProgress;
use crate::ui::icons;

/// Main application state
pub struct App {
    /// Core infrastructure (settings and where they live)
    pub core: CoreState,
    /// UI state (slider value and dot stencil)
    pub ui: UiState,
}

/// Core infrastructure
pub struct CoreState {
    pub settings: Settings,
    /// Where settings are saved; `None` disables saving
    pub settings_path: Option<PathBuf>,
}

/// UI state
pub struct UiState {
    /// Torch level shown by the slider
    pub level: SteppedProgress,
    /// Stencil used to draw the slider dot
    pub dot_mask: svg::Handle,
}

impl UiState {
    /// Restore UI state from settings without animating
    pub fn from_settings(settings: &Settings) -> Self {
        let level = SteppedProgress::with_value(settings.slider.step_count(), settings.level);
        let dot_mask = match usable_mask(settings.slider.dot_mask.as_deref()) {
            Some(path) => {
                tracing::info!("Using dot mask from {:?}", path);
                svg::Handle::from_path(path)
            }
            None => svg::Handle::from_memory(icons::DOT.as_bytes()),
        };

        Self { level, dot_mask }
    }
}

/// Configured dot mask, or `None` when unset or not a readable file
fn usable_mask(path: Option<&Path>) -> Option<&Path> {
    let path = path?;
    if path.is_file() {
        Some(path)
    } else {
        tracing::warn!("Dot mask {:?} is not a file, using the built-in dot", path);
        None
    }
}
