//! Keyboard bindings.
//!
//! A [`Keymap`] is a preset (standard, vim, emacs) plus user overrides from
//! the config file. Overriding an action replaces every preset binding for
//! that action rather than adding to it.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    #[serde(default)]
    pub preset: KeymapPreset,

    /// Checked before the preset
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    pub fn new(preset: KeymapPreset) -> Self {
        Self {
            preset,
            overrides: Vec::new(),
        }
    }

    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.get_action(key.code, key.modifiers)
    }

    /// Overrides followed by the preset bindings whose action is not
    /// overridden.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|preset| !self.overrides.iter().any(|o| o.action == preset.action)),
        );
        bindings
    }

    /// First key bound to `action`, formatted for display.
    pub fn key_for(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map_or_else(|| "unbound".to_string(), KeyBinding::display)
    }

    pub fn navigation_display(&self) -> String {
        format!(
            "{}/{}",
            self.key_for(Action::MoveUp),
            self.key_for(Action::MoveDown)
        )
    }

    /// Footer hint for the landing menu.
    pub fn footer_landing(&self) -> String {
        format!(
            "{}: Navigate | {}: Select | {}: Theme | {}: Help | {}: Quit",
            self.navigation_display(),
            self.key_for(Action::Confirm),
            self.key_for(Action::CycleTheme),
            self.key_for(Action::Help),
            self.key_for(Action::Quit)
        )
    }

    /// Footer hint inside a flow.
    pub fn footer_flow(&self, editing: bool) -> String {
        if editing {
            format!(
                "Type to edit | {}: Done | {}: Next field",
                self.key_for(Action::Cancel),
                self.key_for(Action::NextField)
            )
        } else {
            format!(
                "{}/{}: Fields | {}: Press | {}: Toggle | {}/{}: Step | {}: Home | {}: Help",
                self.key_for(Action::NextField),
                self.key_for(Action::PrevField),
                self.key_for(Action::Confirm),
                self.key_for(Action::ToggleSelect),
                self.key_for(Action::PrevStep),
                self.key_for(Action::NextStep),
                self.key_for(Action::Cancel),
                self.key_for(Action::Help)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keymap() {
        let keymap = Keymap::default();
        assert_eq!(keymap.preset, KeymapPreset::Standard);
        assert!(keymap.overrides.is_empty());
    }

    #[test]
    fn test_alt_digit_jumps() {
        let keymap = Keymap::default();
        assert_eq!(
            keymap.get_action(KeyCode::Char('4'), KeyModifiers::ALT),
            Some(Action::JumpToStep4)
        );
        assert_eq!(keymap.get_action(KeyCode::Char('4'), KeyModifiers::NONE), None);
    }

    #[test]
    fn test_override_shadows_every_preset_binding() {
        let keymap = Keymap {
            preset: KeymapPreset::Vim,
            overrides: vec![KeyBinding::new("w", Action::MoveUp)],
        };
        assert_eq!(
            keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
            Some(Action::MoveUp)
        );
        assert_eq!(keymap.get_action(KeyCode::Char('k'), KeyModifiers::NONE), None);
        assert_eq!(keymap.get_action(KeyCode::Up, KeyModifiers::NONE), None);
        assert_eq!(
            keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
            Some(Action::MoveDown)
        );
    }

    #[test]
    fn test_key_for_reflects_overrides() {
        let mut keymap = Keymap::default();
        assert_eq!(keymap.key_for(Action::Help), "?");
        keymap.overrides.push(KeyBinding::new("f1", Action::Help));
        assert_eq!(keymap.key_for(Action::Help), "F1");
    }
}
