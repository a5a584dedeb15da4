//! Icon sets: NerdFonts, Unicode and plain ASCII.
//!
//! `STAYZY_ICONS` wins over the config file, which wins over detection.

use std::env;

pub const ICONS_ENV: &str = "STAYZY_ICONS";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSet {
    /// Needs a NerdFont-patched font
    NerdFonts,
    Unicode,
    Ascii,
}

impl IconSet {
    /// Parse a user-supplied name. Unknown names give `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "nerd" | "nerdfont" | "nerdfonts" => Some(IconSet::NerdFonts),
            "unicode" | "emoji" => Some(IconSet::Unicode),
            "ascii" | "plain" => Some(IconSet::Ascii),
            _ => None,
        }
    }

    /// Best guess from the environment.
    pub fn detect() -> Self {
        if let Some(set) = env::var(ICONS_ENV).ok().and_then(|v| Self::from_name(&v)) {
            return set;
        }
        match env::var("TERM_PROGRAM").as_deref() {
            Ok("iTerm.app" | "WezTerm" | "Alacritty" | "kitty" | "Ghostty") => IconSet::NerdFonts,
            _ => IconSet::Unicode,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            IconSet::NerdFonts => "NerdFonts",
            IconSet::Unicode => "Unicode",
            IconSet::Ascii => "ASCII",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Icons {
    icon_set: IconSet,
}

impl Default for Icons {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! icon {
    ($name:ident, $nerd:expr, $unicode:expr, $ascii:expr) => {
        pub fn $name(&self) -> &'static str {
            match self.icon_set {
                IconSet::NerdFonts => $nerd,
                IconSet::Unicode => $unicode,
                IconSet::Ascii => $ascii,
            }
        }
    };
}

impl Icons {
    pub fn new() -> Self {
        Self {
            icon_set: IconSet::detect(),
        }
    }

    pub fn with_icon_set(icon_set: IconSet) -> Self {
        Self { icon_set }
    }

    pub fn from_config(config: &crate::config::Config) -> Self {
        if env::var(ICONS_ENV).is_ok() {
            return Self::new();
        }
        config
            .icons
            .as_deref()
            .and_then(IconSet::from_name)
            .map_or_else(Self::new, Self::with_icon_set)
    }

    pub fn icon_set(&self) -> IconSet {
        self.icon_set
    }

    icon!(home, "\u{f015}", "🏠", "[H]");
    icon!(student, "\u{f19d}", "🎓", "[S]");
    icon!(host, "\u{f1ad}", "🏢", "[O]");
    icon!(search, "\u{f002}", "🔍", "[?]");
    icon!(location, "\u{f041}", "📍", "@");
    icon!(star, "\u{f005}", "★", "*");
    icon!(star_empty, "\u{f006}", "☆", ".");
    icon!(verified, "\u{f132}", "🛡", "[V]");
    icon!(user, "\u{f007}", "👤", "[U]");
    icon!(calendar, "\u{f073}", "📅", "[D]");
    icon!(money, "\u{f155}", "💵", "$");
    icon!(card, "\u{f09d}", "💳", "[$]");
    icon!(clock, "\u{f017}", "⏳", "[~]");
    icon!(message, "\u{f075}", "💬", "[M]");
    icon!(success, "\u{f058}", "✅", "[OK]");
    icon!(info, "\u{f05a}", "ℹ", "[i]");
    icon!(warning, "\u{f071}", "⚠", "[!]");
    icon!(check, "\u{f046}", "☑", "[x]");
    icon!(uncheck, "\u{f096}", "☐", "[ ]");
    icon!(radio_on, "\u{f192}", "◉", "(*)");
    icon!(radio_off, "\u{f10c}", "○", "( )");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(IconSet::from_name("NERD"), Some(IconSet::NerdFonts));
        assert_eq!(IconSet::from_name("plain"), Some(IconSet::Ascii));
        assert_eq!(IconSet::from_name("wingdings"), None);
    }

    #[test]
    fn test_ascii_icons_are_ascii() {
        let icons = Icons::with_icon_set(IconSet::Ascii);
        for icon in [
            icons.home(),
            icons.student(),
            icons.host(),
            icons.star(),
            icons.check(),
            icons.uncheck(),
            icons.verified(),
            icons.success(),
        ] {
            assert!(icon.is_ascii(), "{icon:?} is not ascii");
        }
    }

    #[test]
    fn test_all_sets_have_values() {
        for set in [IconSet::NerdFonts, IconSet::Unicode, IconSet::Ascii] {
            let icons = Icons::with_icon_set(set);
            assert!(!icons.star().is_empty());
            assert!(!icons.radio_on().is_empty());
        }
    }
}
