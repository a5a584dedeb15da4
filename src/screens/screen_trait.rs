//! Screen trait and associated types.
//!
//! A screen draws one view and turns input into a [`ScreenAction`]. The
//! navigator owns the flow state; screens receive it as their `Model` and
//! keep only presentation state (focus, edit buffers, click targets).

use crate::config::Config;
use crate::flow::{FlowStep, View};
use crate::icons::Icons;
use crate::keymap::Action;
use crate::widgets::ToastVariant;
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;

/// Read-only resources for drawing.
pub struct RenderContext<'a> {
    pub config: &'a Config,
    pub icons: &'a Icons,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, icons: &'a Icons) -> Self {
        Self { config, icons }
    }
}

/// Read-only resources for event handling.
pub struct ScreenContext<'a> {
    pub config: &'a Config,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// What the app should do after a screen handled an event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ScreenAction {
    #[default]
    None,
    /// Switch the root view. The new view always starts from its first step.
    Navigate(View),
    /// Show a toast; the flow state is untouched.
    Notify {
        message: String,
        variant: ToastVariant,
    },
    Quit,
    ShowHelp,
}

impl ScreenAction {
    pub fn notify(message: impl Into<String>, variant: ToastVariant) -> Self {
        Self::Notify {
            message: message.into(),
            variant,
        }
    }
}

/// Step-bar movement requested by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepRequest<S> {
    By { forward: bool },
    To(S),
}

impl<S: FlowStep> StepRequest<S> {
    pub fn from_action(action: Option<Action>) -> Option<Self> {
        match action? {
            Action::PrevStep => Some(Self::By { forward: false }),
            Action::NextStep => Some(Self::By { forward: true }),
            other => other.step_index().and_then(S::from_index).map(Self::To),
        }
    }
}

pub trait Screen {
    /// State the screen presents, owned by the navigator.
    type Model;

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        model: &Self::Model,
        ctx: &RenderContext,
    ) -> Result<()>;

    fn handle_event(
        &mut self,
        event: &Event,
        model: &mut Self::Model,
        ctx: &ScreenContext,
    ) -> Result<ScreenAction>;

    /// While true, global keys (quit, help, theme) are typed instead.
    fn is_input_focused(&self) -> bool {
        false
    }

    /// Called when the view is (re)mounted.
    fn on_enter(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::HostStep;

    #[test]
    fn test_step_request_from_action() {
        assert_eq!(
            StepRequest::<HostStep>::from_action(Some(Action::NextStep)),
            Some(StepRequest::By { forward: true })
        );
        assert_eq!(
            StepRequest::from_action(Some(Action::JumpToStep4)),
            Some(StepRequest::To(HostStep::ManageBookings))
        );
        assert_eq!(StepRequest::<HostStep>::from_action(Some(Action::Confirm)), None);
        assert_eq!(StepRequest::<HostStep>::from_action(None), None);
    }
}
