//! Screen controllers, one per root view.
//!
//! ```text
//! App ── Navigator::view() ──┬── Landing  -> LandingScreen
//!                            ├── Student  -> StudentFlowScreen (StudentFlow)
//!                            └── Host     -> HostFlowScreen    (HostFlow)
//! ```
//!
//! Each screen renders its model and returns a [`ScreenAction`]; only the
//! app applies navigation.

pub mod host_flow;
pub mod landing;
pub mod screen_trait;
pub mod student_flow;

pub use host_flow::{HostControl, HostFlowScreen};
pub use landing::LandingScreen;
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext, StepRequest};
pub use student_flow::{StudentControl, StudentFlowScreen};
