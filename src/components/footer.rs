use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Key-hint bar at the bottom of every screen.
pub struct Footer;

impl Footer {
    pub const HEIGHT: u16 = 2;

    /// `text` is a `" | "`-separated list of `"keys: label"` hints.
    pub fn render(frame: &mut Frame, area: Rect, text: &str) -> Result<()> {
        let t = theme();
        let mut spans = Vec::new();

        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            match part.split_once(": ") {
                Some((keys, label)) => {
                    spans.push(Span::styled(format!("{}: ", keys), t.emphasis_style()));
                    spans.push(Span::styled(label.to_string(), t.text_style()));
                }
                None => spans.push(Span::styled(part.to_string(), t.text_style())),
            }
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(t.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            inner,
        );
        Ok(())
    }
}
