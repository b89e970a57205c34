//! Core types for the javagen source generator.
//!
//! This crate provides the value objects shared by every part of the
//! generator: qualified class names, the type system and its assignability
//! rule, the error taxonomy, and generated-file output.

mod class_name;
mod error;
mod file;
mod types;
mod utils;

pub use class_name::ClassName;
pub use error::{Error, Result};
// File operations
pub use file::{GeneratedFile, Overwrite, WriteResult};
pub use types::{PrimitiveType, Type};
// Identifier utilities
pub use utils::{decapitalize, is_reserved_word, safe_identifier};
