//! Rendering outputs.
//!
//! - [`ImportSet`] - Import tracking and deduplication
//! - [`SourceFile`] - Whole-file assembly and writing

mod imports;
mod source_file;

pub use imports::{ImportSet, render_imports};
pub use source_file::SourceFile;
