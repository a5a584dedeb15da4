use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

/// Brand bar shown at the top of every screen.
pub struct Header;

impl Header {
    /// Height the header needs, borders included.
    pub const HEIGHT: u16 = 3;

    /// Render `Stayzy` on the left, `title` in the middle and an optional
    /// back hint (`"Esc: Back to Home"`) on the right.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        title: &str,
        back_hint: Option<&str>,
    ) -> Result<()> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style())
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(10),
                Constraint::Min(0),
                Constraint::Length(24),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Span::styled("Stayzy", t.title_style())),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(title.to_string(), t.text_style()))
                .alignment(Alignment::Center),
            chunks[1],
        );
        if let Some(hint) = back_hint {
            frame.render_widget(
                Paragraph::new(Span::styled(hint.to_string(), t.muted_style()))
                    .alignment(Alignment::Right),
                chunks[2],
            );
        }
        Ok(())
    }
}
