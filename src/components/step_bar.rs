//! Step-selector bar shared by the two flows.
//!
//! Shows every step with its done/current/upcoming status. Each segment is
//! a click target that jumps straight to that step.

use crate::flow::{FlowStep, StepStatus};
use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct StepBar;

impl StepBar {
    pub const HEIGHT: u16 = 3;

    /// Segment text for one step, e.g. `" 2 Search "`.
    fn segment<S: FlowStep>(step: S, status: StepStatus) -> String {
        let marker = match status {
            StepStatus::Done => "✓",
            StepStatus::Current | StepStatus::Upcoming => "",
        };
        if marker.is_empty() {
            format!(" {} {} ", step.index() + 1, step.label())
        } else {
            format!(" {} {} ", marker, step.label())
        }
    }

    /// Draw the bar and return each step's click area.
    pub fn render<S: FlowStep>(
        frame: &mut Frame,
        area: Rect,
        status_of: impl Fn(S) -> StepStatus,
    ) -> Vec<(Rect, S)> {
        let t = theme();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(t.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut spans = Vec::new();
        let mut hits = Vec::new();
        let mut x = inner.x;
        for (i, step) in S::ALL.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" › ", t.muted_style()));
                x = x.saturating_add(3);
            }
            let status = status_of(*step);
            let text = Self::segment(*step, status);
            let span = Span::styled(text, t.step_style(status));
            let width = span.width() as u16;
            let visible = inner.x + inner.width;
            if x < visible {
                hits.push((Rect::new(x, inner.y, width.min(visible - x), 1), *step));
            }
            x = x.saturating_add(width);
            spans.push(span);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
        hits
    }

    /// Step under a click, if any.
    pub fn hit_test<S: Copy>(hits: &[(Rect, S)], column: u16, row: u16) -> Option<S> {
        let position = Position::new(column, row);
        hits.iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, step)| *step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::StudentStep;

    #[test]
    fn test_segments() {
        assert_eq!(StepBar::segment(StudentStep::Search, StepStatus::Current), " 2 Search ");
        assert_eq!(StepBar::segment(StudentStep::Register, StepStatus::Done), " ✓ Register ");
    }

    #[test]
    fn test_hit_test() {
        let hits = vec![
            (Rect::new(0, 0, 5, 1), StudentStep::Register),
            (Rect::new(8, 0, 5, 1), StudentStep::Search),
        ];
        assert_eq!(StepBar::hit_test(&hits, 9, 0), Some(StudentStep::Search));
        assert_eq!(StepBar::hit_test(&hits, 6, 0), None);
    }
}
