pub mod form;
pub mod layout;
pub mod path;
pub mod text_input;

pub use form::{ControlKind, FormCommand, FormControl, FormState};
pub use layout::{center_popup, create_split_layout, create_standard_layout};
pub use path::{get_config_dir, get_config_path, get_home_dir, get_log_dir};
pub use text_input::TextInput;
