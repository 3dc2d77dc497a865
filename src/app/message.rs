//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::features::Action;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Slider ============
    /// The user dragged the slider dot to a new (quantized) value
    SliderMoved(f32),

    // ============ Keyboard ============
    /// Raw key press from the keyboard subscription
    KeyPressed(Key, Modifiers),
    /// Execute a bound action
    ExecuteAction(Action),

    // ============ Settings ============
    /// Persist current settings
    SaveSettings,
}
