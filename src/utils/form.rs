//! Focus and editing state for a column of form controls.
//!
//! Screens describe each step as an ordered list of controls. [`FormState`]
//! tracks which one has focus, owns the editing buffer of the text field
//! being typed into, and turns keys and clicks into [`FormCommand`]s that
//! the screen applies to its flow.

use crate::keymap::Action;
use crate::utils::text_input::TextInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::{Position, Rect};
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Free-text field, edited in place
    Text,
    /// One of a fixed list of options
    Select,
    /// Checkbox
    Toggle,
    /// 1..=5 stars
    Rating,
    /// Action button
    Button,
}

pub trait FormControl: Copy + PartialEq + Debug {
    fn kind(&self) -> ControlKind;
}

/// What the screen should do with its flow after a key or click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand<C> {
    /// Not a form key; the screen may handle it itself.
    Unhandled,
    /// Focus or cursor moved, nothing to apply.
    Handled,
    /// Replace the field's value.
    SetText(C, String),
    Press(C),
    Toggle(C),
    /// Next (`true`) or previous option of a select.
    Cycle(C, bool),
    /// One star up (`true`) or down.
    Nudge(C, bool),
    /// Exact star count from a click or digit key.
    Rate(C, u8),
}

#[derive(Debug, Clone, Copy)]
struct Hit<C> {
    area: Rect,
    control: C,
    value: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct FormState<C> {
    focus: Option<C>,
    editing: Option<(C, TextInput)>,
    hits: Vec<Hit<C>>,
}

impl<C> Default for FormState<C> {
    fn default() -> Self {
        Self {
            focus: None,
            editing: None,
            hits: Vec::new(),
        }
    }
}

impl<C: FormControl> FormState<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget focus and editing, e.g. after a step change.
    pub fn reset(&mut self) {
        self.focus = None;
        self.editing = None;
        self.hits.clear();
    }

    /// Focused control; the first one when nothing valid is focused.
    pub fn focused(&self, controls: &[C]) -> Option<C> {
        match self.focus {
            Some(c) if controls.contains(&c) => Some(c),
            _ => controls.first().copied(),
        }
    }

    pub fn focus(&mut self, control: C) {
        if self.editing.as_ref().is_some_and(|(c, _)| *c != control) {
            self.editing = None;
        }
        self.focus = Some(control);
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Buffer of `control` if it is the field being edited.
    pub fn editing(&self, control: C) -> Option<&TextInput> {
        self.editing
            .as_ref()
            .filter(|(c, _)| *c == control)
            .map(|(_, input)| input)
    }

    pub fn start_editing(&mut self, control: C, value: String) {
        self.focus = Some(control);
        self.editing = Some((control, TextInput::with_text(value)));
    }

    pub fn stop_editing(&mut self) {
        self.editing = None;
    }

    fn move_focus(&mut self, controls: &[C], forward: bool) {
        if controls.is_empty() {
            return;
        }
        let len = controls.len();
        let current = self
            .focused(controls)
            .and_then(|c| controls.iter().position(|x| *x == c))
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.focus(controls[next]);
    }

    /// What pressing Enter (or clicking) on `control` does.
    fn activate(&mut self, control: C, value_of: impl Fn(C) -> String) -> FormCommand<C> {
        match control.kind() {
            ControlKind::Text => {
                self.start_editing(control, value_of(control));
                FormCommand::Handled
            }
            ControlKind::Select => FormCommand::Cycle(control, true),
            ControlKind::Toggle => FormCommand::Toggle(control),
            ControlKind::Rating => FormCommand::Nudge(control, true),
            ControlKind::Button => FormCommand::Press(control),
        }
    }

    pub fn handle_key(
        &mut self,
        key: &KeyEvent,
        action: Option<Action>,
        controls: &[C],
        value_of: impl Fn(C) -> String,
    ) -> FormCommand<C> {
        if let Some((control, input)) = self.editing.as_mut() {
            let control = *control;
            match action {
                Some(Action::Confirm | Action::Cancel) => {
                    self.editing = None;
                    return FormCommand::Handled;
                }
                Some(Action::NextField) => {
                    self.move_focus(controls, true);
                    return FormCommand::Handled;
                }
                Some(Action::PrevField) => {
                    self.move_focus(controls, false);
                    return FormCommand::Handled;
                }
                _ => {}
            }
            // Plain characters are text even when a preset binds them (vim's hjkl)
            if let KeyCode::Char(c) = key.code {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                    && input.insert_char(c)
                {
                    return FormCommand::SetText(control, input.text().to_string());
                }
            }
            if let Some(changed) = action
                .filter(|a| TextInput::is_action_allowed_when_focused(*a))
                .and_then(|a| input.handle_action(a))
            {
                return if changed {
                    FormCommand::SetText(control, input.text().to_string())
                } else {
                    FormCommand::Handled
                };
            }
            // Swallow everything else so global keys don't fire mid-edit.
            return FormCommand::Handled;
        }

        let Some(focused) = self.focused(controls) else {
            return FormCommand::Unhandled;
        };

        if focused.kind() == ControlKind::Rating {
            if let KeyCode::Char(c @ '1'..='5') = key.code {
                let stars = c as u8 - b'0';
                return FormCommand::Rate(focused, stars);
            }
        }

        match action {
            Some(Action::MoveDown | Action::NextField) => {
                self.move_focus(controls, true);
                FormCommand::Handled
            }
            Some(Action::MoveUp | Action::PrevField) => {
                self.move_focus(controls, false);
                FormCommand::Handled
            }
            Some(Action::Confirm) => self.activate(focused, value_of),
            Some(Action::ToggleSelect) => match focused.kind() {
                ControlKind::Text => FormCommand::Unhandled,
                _ => self.activate(focused, value_of),
            },
            Some(Action::MoveLeft | Action::MoveRight) => {
                let forward = action == Some(Action::MoveRight);
                match focused.kind() {
                    ControlKind::Select => FormCommand::Cycle(focused, forward),
                    ControlKind::Rating => FormCommand::Nudge(focused, forward),
                    _ => FormCommand::Unhandled,
                }
            }
            _ => FormCommand::Unhandled,
        }
    }

    /// Forget last frame's click targets.
    pub fn clear_hits(&mut self) {
        self.hits.clear();
    }

    /// Register a click target for `control`. `value` is the star count
    /// for a single star of a rating.
    pub fn add_hit(&mut self, area: Rect, control: C, value: Option<u8>) {
        self.hits.push(Hit {
            area,
            control,
            value,
        });
    }

    pub fn handle_click(
        &mut self,
        column: u16,
        row: u16,
        value_of: impl Fn(C) -> String,
    ) -> FormCommand<C> {
        let position = Position::new(column, row);
        // Star hits are registered after their row, so search backwards.
        let Some(hit) = self
            .hits
            .iter()
            .rev()
            .find(|h| h.area.contains(position))
            .copied()
        else {
            return FormCommand::Unhandled;
        };
        if self.editing(hit.control).is_some() {
            return FormCommand::Handled;
        }
        self.focus(hit.control);
        match hit.value {
            Some(stars) => FormCommand::Rate(hit.control, stars),
            None => self.activate(hit.control, value_of),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Demo {
        Name,
        Size,
        Wifi,
        Stars,
        Go,
    }

    impl FormControl for Demo {
        fn kind(&self) -> ControlKind {
            match self {
                Demo::Name => ControlKind::Text,
                Demo::Size => ControlKind::Select,
                Demo::Wifi => ControlKind::Toggle,
                Demo::Stars => ControlKind::Rating,
                Demo::Go => ControlKind::Button,
            }
        }
    }

    const ALL: [Demo; 5] = [Demo::Name, Demo::Size, Demo::Wifi, Demo::Stars, Demo::Go];

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn value(_: Demo) -> String {
        "Al".to_string()
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = FormState::new();
        assert_eq!(form.focused(&ALL), Some(Demo::Name));
        form.handle_key(&key(KeyCode::Up), Some(Action::MoveUp), &ALL, value);
        assert_eq!(form.focused(&ALL), Some(Demo::Go));
        form.handle_key(&key(KeyCode::Tab), Some(Action::NextField), &ALL, value);
        assert_eq!(form.focused(&ALL), Some(Demo::Name));
    }

    #[test]
    fn test_editing_writes_whole_value() {
        let mut form = FormState::new();
        let cmd = form.handle_key(&key(KeyCode::Enter), Some(Action::Confirm), &ALL, value);
        assert_eq!(cmd, FormCommand::Handled);
        assert!(form.is_editing());

        let cmd = form.handle_key(&key(KeyCode::Char('i')), None, &ALL, value);
        assert_eq!(cmd, FormCommand::SetText(Demo::Name, "Ali".to_string()));

        // 'q' is typed, not treated as quit
        let cmd = form.handle_key(&key(KeyCode::Char('q')), Some(Action::Quit), &ALL, value);
        assert_eq!(cmd, FormCommand::SetText(Demo::Name, "Aliq".to_string()));

        let cmd = form.handle_key(&key(KeyCode::Backspace), Some(Action::Backspace), &ALL, value);
        assert_eq!(cmd, FormCommand::SetText(Demo::Name, "Ali".to_string()));

        form.handle_key(&key(KeyCode::Esc), Some(Action::Cancel), &ALL, value);
        assert!(!form.is_editing());
    }

    #[test]
    fn test_bound_letters_are_typed() {
        let mut form = FormState::new();
        form.start_editing(Demo::Name, String::new());
        let cmd = form.handle_key(&key(KeyCode::Char('h')), Some(Action::MoveLeft), &ALL, value);
        assert_eq!(cmd, FormCommand::SetText(Demo::Name, "h".to_string()));
        let cmd = form.handle_key(&key(KeyCode::Left), Some(Action::MoveLeft), &ALL, value);
        assert_eq!(cmd, FormCommand::Handled);
    }

    #[test]
    fn test_tab_leaves_edit_and_moves() {
        let mut form = FormState::new();
        form.start_editing(Demo::Name, String::new());
        form.handle_key(&key(KeyCode::Tab), Some(Action::NextField), &ALL, value);
        assert!(!form.is_editing());
        assert_eq!(form.focused(&ALL), Some(Demo::Size));
    }

    #[test]
    fn test_commands_by_kind() {
        let mut form = FormState::new();
        form.focus(Demo::Size);
        assert_eq!(
            form.handle_key(&key(KeyCode::Left), Some(Action::MoveLeft), &ALL, value),
            FormCommand::Cycle(Demo::Size, false)
        );
        form.focus(Demo::Wifi);
        assert_eq!(
            form.handle_key(&key(KeyCode::Char(' ')), Some(Action::ToggleSelect), &ALL, value),
            FormCommand::Toggle(Demo::Wifi)
        );
        form.focus(Demo::Stars);
        assert_eq!(
            form.handle_key(&key(KeyCode::Char('3')), None, &ALL, value),
            FormCommand::Rate(Demo::Stars, 3)
        );
        form.focus(Demo::Go);
        assert_eq!(
            form.handle_key(&key(KeyCode::Enter), Some(Action::Confirm), &ALL, value),
            FormCommand::Press(Demo::Go)
        );
        assert_eq!(
            form.handle_key(&key(KeyCode::Esc), Some(Action::Cancel), &ALL, value),
            FormCommand::Unhandled
        );
    }

    #[test]
    fn test_click_targets() {
        let mut form = FormState::new();
        form.add_hit(Rect::new(0, 5, 40, 1), Demo::Stars, None);
        form.add_hit(Rect::new(20, 5, 2, 1), Demo::Stars, Some(2));
        form.add_hit(Rect::new(0, 7, 40, 1), Demo::Go, None);

        assert_eq!(form.handle_click(21, 5, value), FormCommand::Rate(Demo::Stars, 2));
        assert_eq!(form.handle_click(3, 7, value), FormCommand::Press(Demo::Go));
        assert_eq!(form.focused(&ALL), Some(Demo::Go));
        assert_eq!(form.handle_click(3, 9, value), FormCommand::Unhandled);
    }
}
