//! Row-based form rendering.
//!
//! A step's body is a list of [`FormRow`]s: plain text lines interleaved
//! with one-line controls. [`FormView`] scrolls the focused control into
//! view, registers click targets on the [`FormState`] and places the
//! terminal cursor inside the field being edited.

use crate::icons::Icons;
use crate::styles::{Theme, FOCUS_SYMBOL};
use crate::utils::form::{FormControl, FormState};
use crate::utils::text_input::TextInput;
use ratatui::layout::{Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Width reserved for control labels.
const LABEL_WIDTH: usize = 24;

#[derive(Debug, Clone)]
pub struct FormRow<C> {
    pub line: Line<'static>,
    pub control: Option<C>,
    /// Column where the value starts, relative to the row
    value_col: u16,
    /// Star count and cell width, for rating rows
    stars: Option<(u8, u16)>,
    /// Cursor column, for the field being edited
    cursor_col: Option<u16>,
}

impl<C> FormRow<C> {
    pub fn plain(line: impl Into<Line<'static>>) -> Self {
        Self {
            line: line.into(),
            control: None,
            value_col: 0,
            stars: None,
            cursor_col: None,
        }
    }

    pub fn blank() -> Self {
        Self::plain(Line::default())
    }
}

/// Builds control rows with a shared theme and icon set.
pub struct RowBuilder<'a> {
    theme: &'a Theme,
    icons: &'a Icons,
}

impl<'a> RowBuilder<'a> {
    pub fn new(theme: &'a Theme, icons: &'a Icons) -> Self {
        Self { theme, icons }
    }

    fn prefix(&self, focused: bool) -> Span<'static> {
        if focused {
            Span::styled(FOCUS_SYMBOL, self.theme.title_style())
        } else {
            Span::raw(" ".repeat(FOCUS_SYMBOL.chars().count()))
        }
    }

    fn label(&self, label: &str, focused: bool) -> Span<'static> {
        let style = if focused {
            self.theme.title_style()
        } else {
            self.theme.text_style()
        };
        Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), style)
    }

    fn value_col(&self) -> u16 {
        (FOCUS_SYMBOL.chars().count() + LABEL_WIDTH) as u16
    }

    pub fn section<C>(&self, title: &str) -> FormRow<C> {
        FormRow::plain(Line::from(Span::styled(
            title.to_string(),
            self.theme.title_style(),
        )))
    }

    pub fn text_field<C>(
        &self,
        control: C,
        label: &str,
        value: &str,
        placeholder: &str,
        focused: bool,
        editing: Option<&TextInput>,
    ) -> FormRow<C> {
        let value_span = match editing {
            Some(input) => Span::styled(input.text().to_string(), self.theme.highlight_style()),
            None if value.is_empty() => {
                Span::styled(placeholder.to_string(), self.theme.muted_style())
            }
            None => Span::styled(value.to_string(), self.theme.text_style()),
        };
        let cursor_col = editing.map(|input| {
            let before: String = input.text().chars().take(input.cursor()).collect();
            self.value_col() + Span::raw(before).width() as u16
        });
        FormRow {
            line: Line::from(vec![
                self.prefix(focused),
                self.label(label, focused),
                value_span,
            ]),
            control: Some(control),
            value_col: self.value_col(),
            stars: None,
            cursor_col,
        }
    }

    pub fn select<C>(&self, control: C, label: &str, option: &str, focused: bool) -> FormRow<C> {
        FormRow {
            line: Line::from(vec![
                self.prefix(focused),
                self.label(label, focused),
                Span::styled("◂ ", self.theme.muted_style()),
                Span::styled(option.to_string(), self.theme.emphasis_style()),
                Span::styled(" ▸", self.theme.muted_style()),
            ]),
            control: Some(control),
            value_col: self.value_col(),
            stars: None,
            cursor_col: None,
        }
    }

    pub fn checkbox<C>(&self, control: C, label: &str, checked: bool, focused: bool) -> FormRow<C> {
        let (icon, style) = if checked {
            (self.icons.check(), self.theme.success_style())
        } else {
            (self.icons.uncheck(), self.theme.muted_style())
        };
        FormRow {
            line: Line::from(vec![
                self.prefix(focused),
                Span::styled(format!("{} ", icon), style),
                Span::styled(label.to_string(), self.theme.text_style()),
            ]),
            control: Some(control),
            value_col: 0,
            stars: None,
            cursor_col: None,
        }
    }

    pub fn rating<C>(&self, control: C, label: &str, stars: u8, focused: bool) -> FormRow<C> {
        let mut spans = vec![self.prefix(focused), self.label(label, focused)];
        for i in 1..=5u8 {
            let (icon, style) = if i <= stars {
                (self.icons.star(), self.theme.star_style())
            } else {
                (self.icons.star_empty(), self.theme.muted_style())
            };
            spans.push(Span::styled(format!("{} ", icon), style));
        }
        spans.push(Span::styled(format!(" {}/5", stars), self.theme.muted_style()));
        let cell = Span::raw(format!("{} ", self.icons.star())).width() as u16;
        FormRow {
            line: Line::from(spans),
            control: Some(control),
            value_col: self.value_col(),
            stars: Some((5, cell)),
            cursor_col: None,
        }
    }

    pub fn button<C>(&self, control: C, label: &str, focused: bool) -> FormRow<C> {
        let style = if focused {
            self.theme.highlight_style()
        } else {
            self.theme.button_style()
        };
        FormRow {
            line: Line::from(vec![
                self.prefix(focused),
                Span::styled(format!("[ {} ]", label), style),
            ]),
            control: Some(control),
            value_col: 0,
            stars: None,
            cursor_col: None,
        }
    }
}

pub struct FormView;

impl FormView {
    /// First row to draw so that `focus_row` fits in `height` rows.
    pub fn scroll_offset(focus_row: usize, height: usize) -> usize {
        if height == 0 {
            return 0;
        }
        // Keep one row of context below the focus when possible.
        (focus_row + 2).saturating_sub(height)
    }

    pub fn render<C: FormControl>(
        frame: &mut Frame,
        area: Rect,
        rows: Vec<FormRow<C>>,
        controls: &[C],
        state: &mut FormState<C>,
    ) {
        state.clear_hits();
        let focused = state.focused(controls);
        let focus_row = rows
            .iter()
            .position(|r| r.control.is_some() && r.control == focused)
            .unwrap_or(0);
        let offset = Self::scroll_offset(focus_row, area.height as usize);

        for (i, row) in rows.iter().enumerate().skip(offset) {
            let y = area.y + (i - offset) as u16;
            if y >= area.y + area.height {
                break;
            }
            let Some(control) = row.control else {
                continue;
            };
            state.add_hit(Rect::new(area.x, y, area.width, 1), control, None);
            if let Some((count, cell)) = row.stars {
                for star in 0..count {
                    let x = area.x + row.value_col + u16::from(star) * cell;
                    if x + cell <= area.x + area.width {
                        state.add_hit(Rect::new(x, y, cell, 1), control, Some(star + 1));
                    }
                }
            }
            if let Some(col) = row.cursor_col {
                let x = (area.x + col).min(area.x + area.width.saturating_sub(1));
                frame.set_cursor_position(Position::new(x, y));
            }
        }

        let lines: Vec<Line> = rows.into_iter().map(|r| r.line).collect();
        let paragraph = Paragraph::new(lines).scroll((offset as u16, 0));
        frame.render_widget(paragraph, area);
    }
}
