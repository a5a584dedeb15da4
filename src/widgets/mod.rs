// Reusable UI widgets

pub mod form_view;
pub mod menu;
pub mod toast;

pub use form_view::{FormRow, FormView, RowBuilder};
pub use menu::{Menu, MenuItem, MenuState};
pub use toast::{Toast, ToastManager, ToastVariant};
