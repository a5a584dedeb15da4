//! Domain core: root navigator, the two step machines and their forms.
//!
//! Nothing in here touches the terminal. Screens drive these types and
//! render whatever they expose.

pub mod fixtures;
pub mod forms;
pub mod host;
pub mod machine;
pub mod navigator;
pub mod student;

pub use fixtures::{Booking, BookingStatus, Listing};
pub use host::{BookingAction, HostFlow, HostStep};
pub use machine::{FlowStep, StepMachine, StepStatus, Transition, TransitionTable};
pub use navigator::{ActiveView, Navigator, View};
pub use student::{StudentFlow, StudentStep};
