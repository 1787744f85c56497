//! Cipher trait and transform implementations.
//!
//! Each cipher is a stateless transform parameterized by its own parsed key
//! type. Implementations:
//!
//! - [`Caesar`]: shift every letter by a fixed offset
//! - [`ColumnarTransposition`]: reorder a letter grid by key-ranked columns
//! - [`Vigenere`]: add a repeating running key, letter by letter

mod caesar;
mod columnar;
mod traits;
pub mod vigenere;

pub use caesar::Caesar;
pub use columnar::{ColumnarTransposition, DEFAULT_PAD};
pub use traits::Cipher;
pub use vigenere::Vigenere;
