use javagen_core::{Error, Result, Type};

use super::Value;

/// A `(type, name)` pair, optionally carrying a value.
///
/// Fields, parameters and method signatures are all built on this. Variables
/// and elements holding a value are validated up front: the type must not be
/// `void`, and any value must be an instance of the type.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedElement {
    ty: Type,
    name: String,
    value: Option<Value>,
}

impl NamedElement {
    /// Create an element without a value. Any type is accepted, so this
    /// also describes method signatures.
    pub fn new(ty: Type, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
            value: None,
        }
    }

    /// Create a variable: an element without a value whose type is not
    /// `void`.
    pub fn variable(ty: Type, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        reject_void(&ty, &name)?;
        Ok(Self {
            ty,
            name,
            value: None,
        })
    }

    /// Create an element holding `value`.
    pub fn with_value(ty: Type, name: impl Into<String>, value: Value) -> Result<Self> {
        let name = name.into();

        reject_void(&ty, &name)?;
        if !value.is_instance_of(&ty) {
            return Err(Error::type_mismatch(ty, value.ty().clone()));
        }

        Ok(Self {
            ty,
            name,
            value: Some(value),
        })
    }

    /// The declared type.
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// The element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The attached value, if any.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }
}

fn reject_void(ty: &Type, name: &str) -> Result<()> {
    if ty.is_void() {
        return Err(Error::illegal_state(format!(
            "`{}` cannot be declared with type `void`",
            name
        )));
    }
    Ok(())
}
