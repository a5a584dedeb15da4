//! Key strings such as `"alt+1"`, `"shift+tab"` or `"j"` mapped to actions.

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// One key string bound to one action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub action: Action,
    /// Help text shown instead of the action's own description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A key string after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl ParsedKey {
    /// Terminals disagree on how shifted keys arrive: `BackTab` may or may
    /// not carry SHIFT, and `G` may come as `Char('G')` with or without it.
    /// Fold both spellings into one form before comparing.
    fn normalized(code: KeyCode, modifiers: KeyModifiers) -> Self {
        match code {
            KeyCode::Tab if modifiers.contains(KeyModifiers::SHIFT) => Self {
                code: KeyCode::BackTab,
                modifiers: modifiers - KeyModifiers::SHIFT,
            },
            KeyCode::BackTab => Self {
                code,
                modifiers: modifiers - KeyModifiers::SHIFT,
            },
            KeyCode::Char(c)
                if c.is_ascii_lowercase() && modifiers.contains(KeyModifiers::SHIFT) =>
            {
                Self {
                    code: KeyCode::Char(c.to_ascii_uppercase()),
                    modifiers: modifiers - KeyModifiers::SHIFT,
                }
            }
            // The character already says whether shift was held.
            KeyCode::Char(_) => Self {
                code,
                modifiers: modifiers - KeyModifiers::SHIFT,
            },
            _ => Self { code, modifiers },
        }
    }
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
            description: None,
        }
    }

    /// Whether this binding fires for the given key event. A key string
    /// that fails to parse never matches.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.parse() {
            Ok(parsed) => parsed == ParsedKey::normalized(code, modifiers),
            Err(_) => false,
        }
    }

    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Human form, e.g. `"Alt+1"`.
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }

    pub fn get_description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or_else(|| self.action.description())
    }
}

/// Parse `"ctrl+shift+n"` style strings. Letters are case-insensitive;
/// `shift+<letter>` means the uppercase letter.
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim();
    if key.is_empty() {
        return Err("Empty key string".to_string());
    }

    // A lone "+" is the plus key, not a separator.
    let (modifier_parts, key_part) = match key.rsplit_once('+') {
        Some((mods, "")) => (mods.trim_end_matches('+'), "+"),
        Some((mods, last)) => (mods, last),
        None => ("", key),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_parts.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        match part.to_lowercase().as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "option" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "super" | "meta" | "cmd" | "command" => modifiers |= KeyModifiers::SUPER,
            other => return Err(format!("Unknown modifier: {}", other)),
        }
    }

    let code = parse_key_code(key_part)?;
    Ok(ParsedKey::normalized(code, modifiers))
}

fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let lower = key.trim().to_lowercase();
    let code = match lower.as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" | "page_up" | "pgup" => KeyCode::PageUp,
        "pagedown" | "page_down" | "pgdn" => KeyCode::PageDown,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "insert" | "ins" => KeyCode::Insert,
        f if f.len() > 1 && f.starts_with('f') => {
            let n: u8 = f[1..]
                .parse()
                .map_err(|_| format!("Unknown key: {}", key))?;
            if !(1..=12).contains(&n) {
                return Err(format!("Unknown key: {}", key));
            }
            KeyCode::F(n)
        }
        _ => {
            let mut chars = lower.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(format!("Unknown key: {}", key)),
            }
        }
    };
    Ok(code)
}

/// `"alt+1"` becomes `"Alt+1"`, `"pagedown"` becomes `"PgDn"`.
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "super" | "meta" | "cmd" | "command" => "Cmd".to_string(),
                "up" => "↑".to_string(),
                "down" => "↓".to_string(),
                "left" => "←".to_string(),
                "right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Space".to_string(),
                "tab" => "Tab".to_string(),
                "backtab" => "Shift+Tab".to_string(),
                "backspace" | "bs" => "Backspace".to_string(),
                "delete" | "del" => "Del".to_string(),
                "pageup" | "page_up" | "pgup" => "PgUp".to_string(),
                "pagedown" | "page_down" | "pgdn" => "PgDn".to_string(),
                "home" => "Home".to_string(),
                "end" => "End".to_string(),
                _ if part.len() == 1 => part.to_uppercase(),
                _ if part.starts_with('f') && part.len() <= 3 => part.to_uppercase(),
                _ => part,
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alt_digit() {
        let parsed = parse_key_string("alt+3").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('3'));
        assert_eq!(parsed.modifiers, KeyModifiers::ALT);
    }

    #[test]
    fn test_shift_tab_matches_backtab_either_way() {
        let binding = KeyBinding::new("shift+tab", Action::PrevField);
        assert!(binding.matches(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::BackTab, KeyModifiers::NONE));
        assert!(!binding.matches(KeyCode::Tab, KeyModifiers::NONE));
    }

    #[test]
    fn test_shift_letter_is_uppercase() {
        let binding = KeyBinding::new("shift+g", Action::End);
        assert!(binding.matches(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::Char('G'), KeyModifiers::NONE));
        assert!(!binding.matches(KeyCode::Char('g'), KeyModifiers::NONE));
    }

    #[test]
    fn test_question_mark_ignores_shift() {
        // '?' arrives with SHIFT on most layouts; bindings are written bare.
        let binding = KeyBinding::new("?", Action::Help);
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::NONE));
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::SHIFT));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_key_string("").is_err());
        assert!(parse_key_string("hyper+x").is_err());
        assert!(parse_key_string("banana").is_err());
        assert!(parse_key_string("f13").is_err());
        assert_eq!(parse_key_string("f12").unwrap().code, KeyCode::F(12));
    }

    #[test]
    fn test_unparseable_binding_never_matches() {
        let binding = KeyBinding::new("ctrl+nope", Action::Quit);
        assert!(!binding.matches(KeyCode::Char('n'), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key_display("alt+1"), "Alt+1");
        assert_eq!(format_key_display("pagedown"), "PgDn");
        assert_eq!(format_key_display("ctrl+c"), "Ctrl+C");
    }
}
