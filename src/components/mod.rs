// Frame pieces shared by every screen

pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod step_bar;

pub use footer::Footer;
pub use header::Header;
pub use help_overlay::HelpOverlay;
pub use step_bar::StepBar;
