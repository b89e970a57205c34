//! Typed declaration model and Java source renderer.
//!
//! Callers assemble a tree of declarations (classes, fields, methods,
//! parameters, annotations and literal values), then render it into
//! indented source text while collecting every referenced class into an
//! import set.
//!
//! # Module Organization
//!
//! - [`builder`] - Text emission (CodeBuilder, Indent)
//! - [`model`] - Declarations, annotations and values
//! - [`generation`] - Import collection and source file assembly
//! - [`config`] - Rendering configuration
//!
//! # Example
//!
//! ```
//! use javagen_codegen::{CodeBuilder, ImportSet};
//! use javagen_codegen::model::{Annotation, Declaration, Method, Parameter};
//! use javagen_core::{ClassName, Type};
//!
//! let singleton = ClassName::parse("jakarta.inject.Singleton").unwrap();
//! let widget = ClassName::parse("x.Widget").unwrap();
//!
//! let method = Method::new("doThing", Type::string())
//!     .annotate(Annotation::marker(singleton))
//!     .param(Parameter::new(Type::int(), "count").unwrap())
//!     .param(Parameter::new(Type::declared(widget), "w").unwrap());
//!
//! let mut code = CodeBuilder::java();
//! let mut imports = ImportSet::new();
//! method.render(&mut code, &mut imports);
//!
//! assert_eq!(
//!     code.as_str(),
//!     "@Singleton\npublic String doThing(int count, Widget w) {\n}\n"
//! );
//! assert_eq!(imports.len(), 3);
//! ```

pub mod builder;
pub mod config;
pub mod generation;
pub mod model;

pub use builder::{CodeBuilder, Indent};
pub use config::{CodegenConfig, ImportConfig};
pub use generation::{ImportSet, SourceFile};
