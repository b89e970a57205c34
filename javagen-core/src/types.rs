//! The closed set of types a declaration can refer to.
//!
//! Assignability is deliberately exact: two declared types are compatible
//! only when they name the same class. No subtyping is modelled.

use std::fmt;

use crate::{ClassName, Error, Result};

/// Java primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrimitiveType {
    Boolean,
    Byte,
    Char,
    Double,
    Float,
    Int,
    Long,
    Short,
}

impl PrimitiveType {
    /// Every primitive, in declaration order.
    pub const ALL: [PrimitiveType; 8] = [
        Self::Boolean,
        Self::Byte,
        Self::Char,
        Self::Double,
        Self::Float,
        Self::Int,
        Self::Long,
        Self::Short,
    ];

    /// The keyword spelling of this primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Double => "double",
            Self::Float => "float",
            Self::Int => "int",
            Self::Long => "long",
            Self::Short => "short",
        }
    }

    /// The literal a field of this type holds before assignment.
    pub fn default_literal(&self) -> &'static str {
        match self {
            Self::Boolean => "false",
            Self::Char => "'\\u0000'",
            Self::Double => "0.0",
            Self::Float => "0.0f",
            Self::Long => "0L",
            Self::Byte | Self::Int | Self::Short => "0",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type reference: primitive, `void`, or a declared class.
///
/// # Example
///
/// ```
/// use javagen_core::{ClassName, PrimitiveType, Type};
///
/// let int = Type::Primitive(PrimitiveType::Int);
/// assert!(int.is_assignable_to(&int));
///
/// let widget = Type::declared(ClassName::parse("x.y.Widget").unwrap());
/// assert!(!widget.is_assignable_to(&int));
/// assert!(!Type::VOID.is_assignable_to(&Type::VOID));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Primitive(PrimitiveType),
    /// Marks the absence of a value, e.g. a method returning nothing.
    Void,
    Declared(ClassName),
}

impl Type {
    /// The shared `void` type.
    pub const VOID: Type = Type::Void;

    /// Create a primitive type.
    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }

    /// Create a declared type.
    pub fn declared(class_name: ClassName) -> Self {
        Self::Declared(class_name)
    }

    /// Convenience: `int`.
    pub fn int() -> Self {
        Self::Primitive(PrimitiveType::Int)
    }

    /// Convenience: `boolean`.
    pub fn boolean() -> Self {
        Self::Primitive(PrimitiveType::Boolean)
    }

    /// Convenience: `long`.
    pub fn long() -> Self {
        Self::Primitive(PrimitiveType::Long)
    }

    /// Convenience: `java.lang.String`.
    pub fn string() -> Self {
        Self::Declared(ClassName::string())
    }

    /// Whether this is the `void` type.
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Whether this is a primitive type.
    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    /// The class behind a declared type.
    pub fn class_name(&self) -> Option<&ClassName> {
        match self {
            Self::Declared(class_name) => Some(class_name),
            _ => None,
        }
    }

    /// Whether a value of this type may be used where `target` is required.
    ///
    /// `void` is never assignable, not even to itself.
    pub fn is_assignable_to(&self, target: &Type) -> bool {
        match (self, target) {
            (Self::Primitive(a), Self::Primitive(b)) => a == b,
            (Self::Declared(a), Self::Declared(b)) => a == b,
            _ => false,
        }
    }

    /// The literal a variable of this type holds before assignment.
    pub fn default_literal(&self) -> Result<&'static str> {
        match self {
            Self::Primitive(p) => Ok(p.default_literal()),
            Self::Declared(_) => Ok("null"),
            Self::Void => Err(Error::illegal_state("`void` has no default value")),
        }
    }
}

impl From<PrimitiveType> for Type {
    fn from(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }
}

impl From<ClassName> for Type {
    fn from(class_name: ClassName) -> Self {
        Self::Declared(class_name)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => f.write_str(p.as_str()),
            Self::Void => f.write_str("void"),
            Self::Declared(class_name) => write!(f, "{}", class_name),
        }
    }
}
