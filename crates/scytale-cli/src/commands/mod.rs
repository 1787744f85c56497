//! Command handlers for the Scytale CLI.

mod config;
mod key;
mod methods;
mod misc;
mod request;
mod square;
mod transform;

pub use config::{handle_config_init, handle_config_show};
pub use key::handle_key;
pub use methods::handle_methods;
pub use misc::handle_completions;
pub use request::handle_request;
pub use square::handle_square;
pub use transform::handle_transform;
