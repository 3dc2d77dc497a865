//! Customizable keyboard shortcuts
//!
//! Maps key presses to torch actions. Bindings are stored with the rest of
//! the settings so users can remap them.

use std::collections::HashMap;

use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Serialize};

/// All bindable actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// One level up
    Brighter,
    /// One level down
    Dimmer,
    /// Jump to the top level
    Full,
    /// Jump to the bottom level
    Off,
}

impl Action {
    /// Get all available actions
    pub fn all() -> &'static [Action] {
        &[Action::Brighter, Action::Dimmer, Action::Full, Action::Off]
    }

    /// Get human-readable name for the action
    pub fn display_name(&self) -> &'static str {
        match self {
            Action::Brighter => "Brighter",
            Action::Dimmer => "Dimmer",
            Action::Full => "Full power",
            Action::Off => "Off",
        }
    }
}

/// A keyboard shortcut consisting of modifiers and a key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Modifier keys (Ctrl, Alt, Shift)
    pub modifiers: ModifierSet,
    /// The main key
    pub key: KeyCode,
}

impl KeyBinding {
    /// Create a new keybinding
    pub fn new(key: KeyCode) -> Self {
        Self {
            modifiers: ModifierSet::default(),
            key,
        }
    }

    /// Add Ctrl modifier
    pub fn ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }

    /// Check if this keybinding matches the given key event
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key) && self.modifiers.matches(modifiers)
    }

    /// Format as human-readable string
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        if self.modifiers.ctrl {
            parts.push("Ctrl");
        }
        if self.modifiers.alt {
            parts.push("Alt");
        }
        if self.modifiers.shift {
            parts.push("Shift");
        }

        parts.push(self.key.display());
        parts.join("+")
    }
}

/// Set of modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierSet {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierSet {
    /// Check if modifiers match exactly
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        self.ctrl == modifiers.control()
            && self.alt == modifiers.alt()
            && self.shift == modifiers.shift()
    }
}

/// Supported key codes for binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Space,
    Plus,
    Minus,
}

impl KeyCode {
    /// Check if this key code matches an iced Key
    pub fn matches(&self, key: &Key) -> bool {
        match key {
            Key::Character(c) => matches!(
                (self, c.as_str()),
                (KeyCode::Plus, "+") | (KeyCode::Plus, "=") | (KeyCode::Minus, "-")
            ),
            Key::Named(named) => {
                use iced::keyboard::key::Named;
                matches!(
                    (self, named),
                    (KeyCode::Up, Named::ArrowUp)
                        | (KeyCode::Down, Named::ArrowDown)
                        | (KeyCode::Left, Named::ArrowLeft)
                        | (KeyCode::Right, Named::ArrowRight)
                        | (KeyCode::Home, Named::Home)
                        | (KeyCode::End, Named::End)
                        | (KeyCode::PageUp, Named::PageUp)
                        | (KeyCode::PageDown, Named::PageDown)
                        | (KeyCode::Space, Named::Space)
                )
            }
            Key::Unidentified => false,
        }
    }

    /// Get display name for the key
    pub fn display(&self) -> &'static str {
        match self {
            KeyCode::Up => "↑",
            KeyCode::Down => "↓",
            KeyCode::Left => "←",
            KeyCode::Right => "→",
            KeyCode::Home => "Home",
            KeyCode::End => "End",
            KeyCode::PageUp => "PageUp",
            KeyCode::PageDown => "PageDown",
            KeyCode::Space => "Space",
            KeyCode::Plus => "+",
            KeyCode::Minus => "-",
        }
    }
}

/// The keybindings configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Map from action to keybinding
    bindings: HashMap<Action, Vec<KeyBinding>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            Action::Brighter,
            vec![
                KeyBinding::new(KeyCode::Up),
                KeyBinding::new(KeyCode::Right),
                KeyBinding::new(KeyCode::Plus),
            ],
        );
        bindings.insert(
            Action::Dimmer,
            vec![
                KeyBinding::new(KeyCode::Down),
                KeyBinding::new(KeyCode::Left),
                KeyBinding::new(KeyCode::Minus),
            ],
        );
        bindings.insert(
            Action::Full,
            vec![
                KeyBinding::new(KeyCode::End),
                KeyBinding::new(KeyCode::PageUp),
                KeyBinding::new(KeyCode::Up).ctrl(),
            ],
        );
        bindings.insert(
            Action::Off,
            vec![
                KeyBinding::new(KeyCode::Home),
                KeyBinding::new(KeyCode::PageDown),
                KeyBinding::new(KeyCode::Down).ctrl(),
            ],
        );

        Self { bindings }
    }
}

impl KeyBindings {
    /// Find the action that matches the given key event
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        self.bindings.iter().find_map(|(action, bindings)| {
            bindings
                .iter()
                .any(|binding| binding.matches(key, modifiers))
                .then_some(*action)
        })
    }

    /// Get display string for an action's first keybinding
    pub fn display_for_action(&self, action: &Action) -> String {
        self.bindings
            .get(action)
            .and_then(|b| b.first())
            .map(|b| b.display())
            .unwrap_or_else(|| "None".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::key::Named;

    #[test]
    fn test_default_bindings_cover_all_actions() {
        let bindings = KeyBindings::default();
        for action in Action::all() {
            assert_ne!(bindings.display_for_action(action), "None", "{:?} unbound", action);
        }
    }

    #[test]
    fn test_arrow_keys() {
        let bindings = KeyBindings::default();
        let none = Modifiers::default();
        assert_eq!(
            bindings.find_action(&Key::Named(Named::ArrowUp), &none),
            Some(Action::Brighter)
        );
        assert_eq!(
            bindings.find_action(&Key::Named(Named::ArrowDown), &none),
            Some(Action::Dimmer)
        );
    }

    #[test]
    fn test_modifiers_must_match_exactly() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.find_action(&Key::Named(Named::ArrowUp), &Modifiers::CTRL),
            Some(Action::Full)
        );
        assert_eq!(
            bindings.find_action(&Key::Named(Named::ArrowUp), &Modifiers::SHIFT),
            None
        );
    }

    #[test]
    fn test_character_keys() {
        let bindings = KeyBindings::default();
        let none = Modifiers::default();
        assert_eq!(
            bindings.find_action(&Key::Character("-".into()), &none),
            Some(Action::Dimmer)
        );
        assert_eq!(bindings.find_action(&Key::Character("x".into()), &none), None);
    }

    #[test]
    fn test_cleared_action_matches_nothing() {
        let mut bindings = KeyBindings::default();
        bindings.bindings.insert(Action::Off, Vec::new());
        assert_eq!(
            bindings.find_action(&Key::Named(Named::Home), &Modifiers::default()),
            None
        );
        assert_eq!(bindings.display_for_action(&Action::Off), "None");
    }

    #[test]
    fn test_keybinding_display() {
        let binding = KeyBinding::new(KeyCode::Up).ctrl();
        assert_eq!(binding.display(), "Ctrl+↑");
        assert_eq!(KeyBinding::new(KeyCode::PageDown).display(), "PageDown");
    }
}
