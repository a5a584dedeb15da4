//! Step state machine shared by the student and host flows.
//!
//! A flow has a nominal forward order, but the step-selector bar lets the
//! user jump between any two steps. The allowed moves are therefore kept as
//! an explicit table of `(from, to)` pairs covering every ordered pair of
//! distinct steps, rather than as next/previous links.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// A single step of a flow.
pub trait FlowStep: Copy + Eq + Hash + Debug + 'static {
    /// Every step, in nominal forward order. Never empty.
    const ALL: &'static [Self];

    /// Label shown in the step-selector bar.
    fn label(self) -> &'static str;

    /// Position of this step in the forward order.
    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// The step a freshly mounted flow starts on.
    fn initial() -> Self {
        Self::ALL[0]
    }

    /// Step at `index` in forward order, if any.
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// How a step relates to the current one, for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Done,
    Current,
    Upcoming,
}

/// Result of asking a flow to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Transition<S> {
    /// The flow moved to a different step.
    Moved { from: S, to: S },
    /// Nothing changed; the action is not available on `current`.
    Ignored { current: S },
    /// The flow asks the root navigator to return to landing.
    Back,
}

impl<S> Transition<S> {
    pub fn is_moved(&self) -> bool {
        matches!(self, Transition::Moved { .. })
    }

    pub fn is_back(&self) -> bool {
        matches!(self, Transition::Back)
    }
}

/// Explicit allowed-transition relation over a flow's steps.
#[derive(Debug, Clone)]
pub struct TransitionTable<S: FlowStep> {
    pairs: HashSet<(S, S)>,
}

impl<S: FlowStep> TransitionTable<S> {
    /// The complete graph: every ordered pair of distinct steps.
    pub fn complete() -> Self {
        let pairs = S::ALL
            .iter()
            .flat_map(|from| S::ALL.iter().map(move |to| (*from, *to)))
            .filter(|(from, to)| from != to)
            .collect();
        Self { pairs }
    }

    pub fn allows(&self, from: S, to: S) -> bool {
        self.pairs.contains(&(from, to))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Current step plus the table that governs moves away from it.
#[derive(Debug, Clone)]
pub struct StepMachine<S: FlowStep> {
    current: S,
    table: TransitionTable<S>,
}

impl<S: FlowStep> Default for StepMachine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FlowStep> StepMachine<S> {
    pub fn new() -> Self {
        Self {
            current: S::initial(),
            table: TransitionTable::complete(),
        }
    }

    pub fn current(&self) -> S {
        self.current
    }

    pub fn table(&self) -> &TransitionTable<S> {
        &self.table
    }

    /// Direct jump from the step-selector bar.
    pub fn jump(&mut self, to: S) -> Transition<S> {
        let from = self.current;
        if self.table.allows(from, to) {
            self.current = to;
            tracing::info!("Step changed: {:?} -> {:?}", from, to);
            Transition::Moved { from, to }
        } else {
            Transition::Ignored { current: from }
        }
    }

    /// Forward action that only exists while `from` is the current step.
    pub fn advance(&mut self, from: S, to: S) -> Transition<S> {
        if self.current == from {
            self.jump(to)
        } else {
            tracing::debug!(
                "Ignoring {:?} -> {:?} while on {:?}",
                from,
                to,
                self.current
            );
            Transition::Ignored {
                current: self.current,
            }
        }
    }

    /// Adjacent step in the bar, without wrapping.
    pub fn step_by(&mut self, forward: bool) -> Transition<S> {
        let index = self.current.index();
        let target = if forward {
            S::from_index(index + 1)
        } else {
            index.checked_sub(1).and_then(S::from_index)
        };
        match target {
            Some(to) => self.jump(to),
            None => Transition::Ignored {
                current: self.current,
            },
        }
    }

    pub fn status_of(&self, step: S) -> StepStatus {
        let current = self.current.index();
        let index = step.index();
        if index == current {
            StepStatus::Current
        } else if index < current {
            StepStatus::Done
        } else {
            StepStatus::Upcoming
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Light {
        Red,
        Amber,
        Green,
    }

    impl FlowStep for Light {
        const ALL: &'static [Self] = &[Light::Red, Light::Amber, Light::Green];

        fn label(self) -> &'static str {
            match self {
                Light::Red => "Red",
                Light::Amber => "Amber",
                Light::Green => "Green",
            }
        }
    }

    #[test]
    fn test_complete_table_excludes_self_loops() {
        let table = TransitionTable::<Light>::complete();
        assert_eq!(table.len(), 6);
        for step in Light::ALL {
            assert!(!table.allows(*step, *step));
        }
        assert!(table.allows(Light::Green, Light::Red));
    }

    #[test]
    fn test_jump_to_current_is_ignored() {
        let mut machine = StepMachine::<Light>::new();
        assert_eq!(
            machine.jump(Light::Red),
            Transition::Ignored { current: Light::Red }
        );
    }

    #[test]
    fn test_advance_requires_matching_step() {
        let mut machine = StepMachine::<Light>::new();
        assert_eq!(
            machine.advance(Light::Amber, Light::Green),
            Transition::Ignored { current: Light::Red }
        );
        assert!(machine.advance(Light::Red, Light::Amber).is_moved());
        assert_eq!(machine.current(), Light::Amber);
    }

    #[test]
    fn test_step_by_stops_at_edges() {
        let mut machine = StepMachine::<Light>::new();
        assert!(!machine.step_by(false).is_moved());
        assert!(machine.step_by(true).is_moved());
        assert!(machine.step_by(true).is_moved());
        assert!(!machine.step_by(true).is_moved());
        assert_eq!(machine.current(), Light::Green);
    }

    #[test]
    fn test_status_of() {
        let mut machine = StepMachine::<Light>::new();
        let _ = machine.jump(Light::Amber);
        assert_eq!(machine.status_of(Light::Red), StepStatus::Done);
        assert_eq!(machine.status_of(Light::Amber), StepStatus::Current);
        assert_eq!(machine.status_of(Light::Green), StepStatus::Upcoming);
    }
}
