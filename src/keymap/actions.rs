//! Semantic actions triggered by key bindings.

use serde::{Deserialize, Serialize};

/// Every action a key can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Previous control, or previous option in a menu
    MoveUp,
    /// Next control, or next option in a menu
    MoveDown,
    /// Cursor left in a text field, previous option in a select
    MoveLeft,
    /// Cursor right in a text field, next option in a select
    MoveRight,
    /// Start of the focused text field
    Home,
    /// End of the focused text field
    End,

    // ============ Selection ============
    /// Press the focused button / start editing the focused field
    Confirm,
    /// Stop editing, or leave the flow for landing
    Cancel,
    /// Toggle the focused checkbox or cycle the focused select
    ToggleSelect,

    // ============ Field navigation ============
    NextField,
    PrevField,

    // ============ Flow steps ============
    /// Previous step in the step-selector bar
    PrevStep,
    /// Next step in the step-selector bar
    NextStep,
    JumpToStep1,
    JumpToStep2,
    JumpToStep3,
    JumpToStep4,
    JumpToStep5,

    // ============ Text editing ============
    Backspace,
    DeleteChar,

    // ============ Global ============
    Quit,
    Help,
    /// Cycle dark / light / no-color
    CycleTheme,
}

impl Action {
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::MoveLeft => "Move left / previous option",
            Action::MoveRight => "Move right / next option",
            Action::Home => "Start of field",
            Action::End => "End of field",
            Action::Confirm => "Press / edit",
            Action::Cancel => "Stop editing / back to home",
            Action::ToggleSelect => "Toggle / cycle option",
            Action::NextField => "Next field",
            Action::PrevField => "Previous field",
            Action::PrevStep => "Previous step",
            Action::NextStep => "Next step",
            Action::JumpToStep1 => "Jump to step 1",
            Action::JumpToStep2 => "Jump to step 2",
            Action::JumpToStep3 => "Jump to step 3",
            Action::JumpToStep4 => "Jump to step 4",
            Action::JumpToStep5 => "Jump to step 5",
            Action::Backspace => "Backspace",
            Action::DeleteChar => "Delete character",
            Action::Quit => "Quit",
            Action::Help => "Show help",
            Action::CycleTheme => "Cycle theme",
        }
    }

    /// Group heading in the help overlay.
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::Home
            | Action::End => "Navigation",

            Action::Confirm | Action::Cancel | Action::ToggleSelect => "Selection",

            Action::NextField | Action::PrevField => "Field Navigation",

            Action::PrevStep
            | Action::NextStep
            | Action::JumpToStep1
            | Action::JumpToStep2
            | Action::JumpToStep3
            | Action::JumpToStep4
            | Action::JumpToStep5 => "Steps",

            Action::Backspace | Action::DeleteChar => "Text Editing",

            Action::Quit | Action::Help | Action::CycleTheme => "Global",
        }
    }

    /// Zero-based step index for the `JumpToStepN` actions.
    pub fn step_index(&self) -> Option<usize> {
        match self {
            Action::JumpToStep1 => Some(0),
            Action::JumpToStep2 => Some(1),
            Action::JumpToStep3 => Some(2),
            Action::JumpToStep4 => Some(3),
            Action::JumpToStep5 => Some(4),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_category() {
        assert_eq!(Action::MoveUp.category(), "Navigation");
        assert_eq!(Action::JumpToStep3.category(), "Steps");
        assert_eq!(Action::CycleTheme.category(), "Global");
    }

    #[test]
    fn test_step_index() {
        assert_eq!(Action::JumpToStep1.step_index(), Some(0));
        assert_eq!(Action::JumpToStep5.step_index(), Some(4));
        assert_eq!(Action::Confirm.step_index(), None);
    }

    #[test]
    fn test_action_serde_names() {
        let json = serde_json::to_string(&Action::JumpToStep2).unwrap();
        assert_eq!(json, "\"jump_to_step2\"");
        let action: Action = serde_json::from_str("\"next_field\"").unwrap();
        assert_eq!(action, Action::NextField);
    }
}
