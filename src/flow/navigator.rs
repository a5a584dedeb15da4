//! Root navigator: landing, student or host, one at a time.

use super::host::HostFlow;
use super::student::StudentFlow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Student,
    Host,
}

impl View {
    pub fn label(self) -> &'static str {
        match self {
            View::Landing => "landing",
            View::Student => "student",
            View::Host => "host",
        }
    }
}

/// The mounted child. Leaving a flow drops its state.
#[derive(Debug, Clone, Default)]
pub enum ActiveView {
    #[default]
    Landing,
    Student(Box<StudentFlow>),
    Host(Box<HostFlow>),
}

#[derive(Debug, Clone, Default)]
pub struct Navigator {
    active: ActiveView,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> View {
        match self.active {
            ActiveView::Landing => View::Landing,
            ActiveView::Student(_) => View::Student,
            ActiveView::Host(_) => View::Host,
        }
    }

    pub fn active(&self) -> &ActiveView {
        &self.active
    }

    /// Switch to `view`, always mounting a fresh flow.
    pub fn select(&mut self, view: View) {
        let from = self.view();
        self.active = match view {
            View::Landing => ActiveView::Landing,
            View::Student => ActiveView::Student(Box::default()),
            View::Host => ActiveView::Host(Box::default()),
        };
        tracing::info!("View changed: {} -> {}", from.label(), view.label());
    }

    pub fn select_student(&mut self) {
        self.select(View::Student);
    }

    pub fn select_host(&mut self) {
        self.select(View::Host);
    }

    pub fn select_landing(&mut self) {
        self.select(View::Landing);
    }

    pub fn student(&self) -> Option<&StudentFlow> {
        match &self.active {
            ActiveView::Student(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn student_mut(&mut self) -> Option<&mut StudentFlow> {
        match &mut self.active {
            ActiveView::Student(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn host(&self) -> Option<&HostFlow> {
        match &self.active {
            ActiveView::Host(flow) => Some(flow),
            _ => None,
        }
    }

    pub fn host_mut(&mut self) -> Option<&mut HostFlow> {
        match &mut self.active {
            ActiveView::Host(flow) => Some(flow),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::host::HostStep;
    use crate::flow::student::StudentStep;

    #[test]
    fn test_starts_on_landing() {
        let nav = Navigator::new();
        assert_eq!(nav.view(), View::Landing);
        assert!(nav.student().is_none());
        assert!(nav.host().is_none());
    }

    #[test]
    fn test_select_mounts_exactly_one_child() {
        let mut nav = Navigator::new();
        nav.select_student();
        assert_eq!(nav.view(), View::Student);
        assert!(nav.student().is_some());
        assert!(nav.host().is_none());

        nav.select_host();
        assert_eq!(nav.view(), View::Host);
        assert!(nav.student().is_none());
    }

    #[test]
    fn test_reentry_restarts_flow() {
        let mut nav = Navigator::new();
        nav.select_student();
        if let Some(flow) = nav.student_mut() {
            let _ = flow.jump_to(StudentStep::Booking);
        }
        nav.select_landing();
        nav.select_student();
        assert_eq!(nav.student().map(|f| f.step()), Some(StudentStep::Register));

        nav.select_host();
        if let Some(flow) = nav.host_mut() {
            let _ = flow.jump_to(HostStep::Reviews);
        }
        nav.select_landing();
        nav.select_host();
        assert_eq!(nav.host().map(|f| f.step()), Some(HostStep::Register));
    }
}
