//! Terminal-facing output: mode selection and the few renderers the
//! commands need. JSON shapes live in `crate::output`.

mod context;
mod mode;
mod render;

pub use context::UiContext;
#[cfg(test)]
pub use mode::OutputMode;
pub use render::{bold, kv, table};
