//! Text emission building blocks.
//!
//! - [`CodeBuilder`] - Indentation-aware text accumulator
//! - [`Indent`] - Indentation configuration

mod code_builder;
mod indent;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
