//! Keyboard shortcut overlay, opened with `?`.
//!
//! Lists the effective bindings grouped by category and lets the user
//! switch keymap preset with `1` / `2` / `3`.

use crate::keymap::{Keymap, KeymapPreset};
use crate::styles::theme;
use crate::utils::layout::center_popup;
use anyhow::Result;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub struct HelpOverlay;

impl HelpOverlay {
    /// Preset selected by a digit key inside the overlay.
    pub fn preset_for_key(c: char) -> Option<KeymapPreset> {
        match c {
            '1' => Some(KeymapPreset::Standard),
            '2' => Some(KeymapPreset::Vim),
            '3' => Some(KeymapPreset::Emacs),
            _ => None,
        }
    }

    /// Binding lines grouped under category headings, first-seen order.
    pub fn binding_lines(keymap: &Keymap) -> Vec<Line<'static>> {
        let t = theme();
        let bindings = keymap.all_bindings();
        let mut categories: Vec<&'static str> = Vec::new();
        for binding in &bindings {
            let category = binding.action.category();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }

        let mut lines = Vec::new();
        for category in categories {
            if !lines.is_empty() {
                lines.push(Line::default());
            }
            lines.push(Line::from(Span::styled(
                format!("  {}", category),
                Style::default()
                    .fg(t.secondary)
                    .add_modifier(Modifier::BOLD),
            )));
            for binding in bindings.iter().filter(|b| b.action.category() == category) {
                lines.push(Line::from(vec![
                    Span::styled(format!("    {:12}", binding.display()), t.emphasis_style()),
                    Span::styled(binding.get_description().to_string(), t.text_style()),
                ]));
            }
        }
        lines
    }

    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap, config_path: &str) -> Result<()> {
        let t = theme();
        let popup = center_popup(area, 80, 90);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" Keyboard Shortcuts - {} Preset ", keymap.preset.name()))
            .title_alignment(Alignment::Center)
            .border_style(t.border_focused_style());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(3),
                Constraint::Length(2),
            ])
            .split(inner);

        let mut presets = vec![Span::styled("Preset: ", t.text_style())];
        for (i, preset) in KeymapPreset::ALL.iter().enumerate() {
            let label = format!("{} {}  ", i + 1, preset.name());
            let style = if *preset == keymap.preset {
                t.highlight_style()
            } else {
                t.muted_style()
            };
            presets.push(Span::styled(label, style));
        }
        frame.render_widget(Paragraph::new(Line::from(presets)), chunks[0]);

        frame.render_widget(
            Paragraph::new(Self::binding_lines(keymap)).wrap(Wrap { trim: false }),
            chunks[1],
        );

        let footer = format!(
            "Overrides live in {}\n1/2/3 switch preset, any other key closes",
            config_path
        );
        frame.render_widget(
            Paragraph::new(footer)
                .style(t.muted_style())
                .alignment(Alignment::Center),
            chunks[2],
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_for_key() {
        assert_eq!(HelpOverlay::preset_for_key('2'), Some(KeymapPreset::Vim));
        assert_eq!(HelpOverlay::preset_for_key('9'), None);
    }

    #[test]
    fn test_binding_lines_group_by_category() {
        let lines = HelpOverlay::binding_lines(&Keymap::default());
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        let headings: Vec<&String> = text
            .iter()
            .filter(|l| l.starts_with("  ") && !l.starts_with("    "))
            .collect();
        assert!(headings.iter().any(|h| h.trim() == "Steps"));
        assert!(headings.iter().any(|h| h.trim() == "Global"));
        // Each heading appears once
        let mut sorted: Vec<&str> = headings.iter().map(|h| h.trim()).collect();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), headings.len());
    }
}
