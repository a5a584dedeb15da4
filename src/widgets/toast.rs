//! Toast notifications.
//!
//! One message at a time, drawn over the bottom-right corner and dropped
//! once it expires. Placeholder actions ("Message Student", "Accept", ...)
//! answer with a toast instead of changing any state.

use crate::icons::Icons;
use crate::styles::theme;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};
use std::time::{Duration, Instant};

const DEFAULT_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Success,
    Info,
    Warning,
}

impl ToastVariant {
    pub fn icon(self, icons: &Icons) -> &'static str {
        match self {
            ToastVariant::Success => icons.success(),
            ToastVariant::Info => icons.info(),
            ToastVariant::Warning => icons.warning(),
        }
    }

    pub fn color(self) -> Color {
        let t = theme();
        match self {
            ToastVariant::Success => t.success,
            ToastVariant::Info => t.primary,
            ToastVariant::Warning => t.warning,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub variant: ToastVariant,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self {
            message: message.into(),
            variant,
            created_at: Instant::now(),
            duration: DEFAULT_DURATION,
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

pub struct ToastWidget<'a> {
    toast: &'a Toast,
    icons: &'a Icons,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a Toast, icons: &'a Icons) -> Self {
        Self { toast, icons }
    }

    /// Bottom-right corner, above the footer.
    fn calculate_area(area: Rect) -> Rect {
        let width = 44u16.min(area.width.saturating_sub(4));
        let height = 3u16.min(area.height);
        let x = area.x + area.width.saturating_sub(width + 2);
        let y = area.y + area.height.saturating_sub(height + 3);
        Rect::new(x, y, width, height)
    }
}

impl Widget for ToastWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let toast_area = Self::calculate_area(area);
        let t = theme();
        Widget::render(Clear, toast_area, buf);

        let message = format!(
            " {} {} ",
            self.toast.variant.icon(self.icons),
            self.toast.message
        );
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.toast.variant.color()));
        Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(t.text).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true })
            .render(toast_area, buf);
    }
}

#[derive(Debug, Default)]
pub struct ToastManager {
    current: Option<Toast>,
}

impl ToastManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `toast`, replacing whatever is on screen.
    pub fn push(&mut self, toast: Toast) {
        self.current = Some(toast);
    }

    pub fn notify(&mut self, message: impl Into<String>, variant: ToastVariant) {
        self.push(Toast::new(message, variant));
    }

    /// Drop an expired toast; returns whether one is still showing.
    pub fn tick(&mut self) -> bool {
        if self.current.as_ref().is_some_and(Toast::is_expired) {
            self.current = None;
        }
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn render(&self, frame: &mut ratatui::Frame, area: Rect, icons: &Icons) {
        if let Some(toast) = self.current() {
            frame.render_widget(ToastWidget::new(toast, icons), area);
        }
    }
}
