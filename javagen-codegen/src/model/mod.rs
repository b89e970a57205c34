//! The typed declaration model.
//!
//! - [`Value`] / [`Literal`] - Typed literal values
//! - [`NamedElement`] - `(type, name, value?)` triple with construction-time checks
//! - [`Annotation`] - Marker, single-value and named-argument annotations
//! - [`Declaration`] - Shared render contract: annotations, then body
//! - [`Class`], [`Field`], [`Method`], [`Parameter`] - Concrete declarations

mod annotation;
mod class;
mod declaration;
mod element;
mod field;
mod method;
mod modifiers;
mod parameter;
mod value;

pub use annotation::{Annotation, AnnotationArgs};
pub use class::{Class, TypeKind};
pub use declaration::{AnnotationLayout, Declaration};
pub use element::NamedElement;
pub use field::Field;
pub use method::Method;
pub use modifiers::{Modifier, Modifiers, Visibility};
pub use parameter::Parameter;
pub use value::{Literal, Value};
