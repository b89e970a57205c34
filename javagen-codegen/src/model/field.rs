use javagen_core::{Result, Type};

use super::{
    Annotation, Declaration, Modifier, Modifiers, NamedElement, Value, Visibility,
    modifiers::declaration_prefix,
};
use crate::{builder::CodeBuilder, generation::ImportSet};

/// A field, optionally with an initializer.
///
/// # Example
///
/// ```
/// use javagen_codegen::generation::ImportSet;
/// use javagen_codegen::model::{Declaration, Field, Value};
/// use javagen_core::Type;
///
/// let field = Field::with_initializer(Type::int(), "retries", Value::int(3))
///     .unwrap()
///     .private()
///     .final_();
///
/// let mut imports = ImportSet::new();
/// assert_eq!(field.render_to_string(&mut imports), "private final int retries = 3;\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    element: NamedElement,
    visibility: Visibility,
    modifiers: Modifiers,
    annotations: Vec<Annotation>,
}

impl Field {
    /// Create a public field without an initializer.
    ///
    /// Fails if `ty` is `void`.
    pub fn new(ty: Type, name: impl Into<String>) -> Result<Self> {
        NamedElement::variable(ty, name).map(Self::from_element)
    }

    /// Create a public field initialized to `value`.
    ///
    /// Fails if `ty` is `void` or `value` is not an instance of `ty`.
    pub fn with_initializer(ty: Type, name: impl Into<String>, value: Value) -> Result<Self> {
        NamedElement::with_value(ty, name, value).map(Self::from_element)
    }

    fn from_element(element: NamedElement) -> Self {
        Self {
            element,
            visibility: Visibility::Public,
            modifiers: Modifiers::default(),
            annotations: Vec::new(),
        }
    }

    /// Add an annotation.
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Set visibility.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Make this field private.
    pub fn private(self) -> Self {
        self.visibility(Visibility::Private)
    }

    /// Add a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Mark the field `static`.
    pub fn static_(self) -> Self {
        self.modifier(Modifier::Static)
    }

    /// Mark the field `final`.
    pub fn final_(self) -> Self {
        self.modifier(Modifier::Final)
    }

    /// The field type.
    pub fn ty(&self) -> &Type {
        self.element.ty()
    }

    /// The initializer, if any.
    pub fn initializer(&self) -> Option<&Value> {
        self.element.value()
    }
}

impl Declaration for Field {
    fn name(&self) -> &str {
        self.element.name()
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn render_body(&self, code: &mut CodeBuilder, imports: &mut ImportSet) {
        let prefix = declaration_prefix(self.visibility, &self.modifiers);
        let ty = imports.reference(self.element.ty());
        let line = match self.element.value() {
            Some(value) => format!(
                "{}{} {} = {};",
                prefix,
                ty,
                self.element.name(),
                value.render(imports)
            ),
            None => format!("{}{} {};", prefix, ty, self.element.name()),
        };
        code.push_line(&line);
    }
}
