//! Card menu used on the landing screen.
//!
//! Each item is a three-line card: padding, icon and title with an optional
//! subtitle, padding. The selected card gets a left bar and a highlight.

use crate::styles::theme;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

const CARD_HEIGHT: u16 = 3;

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub icon: String,
    pub text: String,
    pub color: Color,
    /// Shown after the title, e.g. "find a room"
    pub info: Option<String>,
}

impl MenuItem {
    pub fn new(icon: impl Into<String>, text: impl Into<String>, color: Color) -> Self {
        Self {
            icon: icon.into(),
            text: text.into(),
            color,
            info: None,
        }
    }

    pub fn info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }
}

#[derive(Debug, Default, Clone)]
pub struct MenuState {
    selected: usize,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.selected = index;
        }
    }

    pub fn move_by(&mut self, forward: bool, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = if forward {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }
}

#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn height(len: usize) -> u16 {
        CARD_HEIGHT * len as u16
    }

    /// Click area of each card that fits in `area`.
    pub fn clickable_areas(&self, area: Rect) -> Vec<(Rect, usize)> {
        (0..self.items.len())
            .filter_map(|i| {
                let y = area.y + i as u16 * CARD_HEIGHT;
                (y + CARD_HEIGHT <= area.y + area.height)
                    .then(|| (Rect::new(area.x, y, area.width, CARD_HEIGHT), i))
            })
            .collect()
    }

    pub fn hit_test(areas: &[(Rect, usize)], column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        areas
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, i)| *i)
    }
}

impl StatefulWidget for Menu {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = theme();
        for (rect, i) in self.clickable_areas(area) {
            let item = &self.items[i];
            let selected = state.selected == i;
            let style = if selected {
                Style::default().fg(item.color).bg(t.highlight_bg)
            } else {
                Style::default().fg(item.color)
            };
            let bar = if selected { "▌" } else { " " };
            let bar_style = style.fg(t.border_focused);
            let fill = |used: usize| " ".repeat((rect.width as usize).saturating_sub(used));

            let padding = Line::from(vec![
                Span::styled(bar, bar_style),
                Span::styled(fill(1), style),
            ]);
            padding.clone().render(Rect::new(rect.x, rect.y, rect.width, 1), buf);
            padding.render(Rect::new(rect.x, rect.y + 2, rect.width, 1), buf);

            let mut spans = vec![
                Span::styled(bar, bar_style),
                Span::styled(" ", style),
                Span::styled(format!("{} ", item.icon), style.add_modifier(Modifier::BOLD)),
                Span::styled(item.text.clone(), style.add_modifier(Modifier::BOLD)),
            ];
            if let Some(info) = &item.info {
                spans.push(Span::styled(format!("  {}", info), style.fg(t.text_muted)));
            }
            let used = Line::from(spans.clone()).width();
            spans.push(Span::styled(fill(used), style));
            Line::from(spans).render(Rect::new(rect.x, rect.y + 1, rect.width, 1), buf);
        }
    }
}
