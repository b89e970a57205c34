use javagen_core::{ClassName, Result, Type, decapitalize, safe_identifier};

use super::{Annotation, AnnotationLayout, Declaration, NamedElement};
use crate::{builder::CodeBuilder, generation::ImportSet};

/// A method or constructor parameter.
///
/// Parameter annotations render inline: `@Named("db") DataSource source`.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    element: NamedElement,
    annotations: Vec<Annotation>,
    is_final: bool,
}

impl Parameter {
    /// Create a parameter. Java keywords are escaped with a trailing `_`.
    ///
    /// Fails if `ty` is `void`.
    pub fn new(ty: Type, name: impl Into<String>) -> Result<Self> {
        let name = safe_identifier(&name.into());
        NamedElement::variable(ty, name).map(Self::from_element)
    }

    /// Create a parameter named after its class, e.g. `Widget widget`.
    pub fn of_class(class_name: ClassName) -> Self {
        let name = safe_identifier(&decapitalize(class_name.simple_name()));
        Self::from_element(NamedElement::new(Type::Declared(class_name), name))
    }

    fn from_element(element: NamedElement) -> Self {
        Self {
            element,
            annotations: Vec::new(),
            is_final: false,
        }
    }

    /// Add an annotation.
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Mark the parameter `final`.
    pub fn final_(mut self) -> Self {
        self.is_final = true;
        self
    }

    /// The parameter type.
    pub fn ty(&self) -> &Type {
        self.element.ty()
    }
}

impl Declaration for Parameter {
    fn name(&self) -> &str {
        self.element.name()
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn annotation_layout(&self) -> AnnotationLayout {
        AnnotationLayout::Inline
    }

    fn render_body(&self, code: &mut CodeBuilder, imports: &mut ImportSet) {
        if self.is_final {
            code.push_raw("final ");
        }
        let ty = imports.reference(self.element.ty());
        code.push_raw(&format!("{} {}", ty, self.element.name()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Value;

    #[test]
    fn test_plain_parameter() {
        let mut imports = ImportSet::new();
        let param = Parameter::new(Type::int(), "count").unwrap();
        assert_eq!(param.render_to_string(&mut imports), "int count");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_annotated_parameter_is_inline() {
        let mut imports = ImportSet::new();
        let named = ClassName::parse("jakarta.inject.Named").unwrap();
        let source = ClassName::parse("javax.sql.DataSource").unwrap();
        let param = Parameter::new(Type::declared(source.clone()), "source")
            .unwrap()
            .annotate(Annotation::single(named.clone(), Value::string("db")));

        assert_eq!(
            param.render_to_string(&mut imports),
            "@Named(\"db\") DataSource source"
        );
        assert!(imports.contains(&named));
        assert!(imports.contains(&source));
    }

    #[test]
    fn test_of_class_derives_name() {
        let param = Parameter::of_class(ClassName::parse("x.y.WidgetFactory").unwrap());
        assert_eq!(param.name(), "widgetFactory");
    }

    #[test]
    fn test_reserved_name_is_escaped() {
        let param = Parameter::new(Type::declared(ClassName::class()), "class").unwrap();
        assert_eq!(param.name(), "class_");
    }

    #[test]
    fn test_final_parameter() {
        let param = Parameter::new(Type::long(), "id").unwrap().final_();
        assert_eq!(param.render_to_string(&mut ImportSet::new()), "final long id");
    }

    #[test]
    fn test_void_parameter_fails() {
        let err = Parameter::new(Type::VOID, "p").unwrap_err();
        assert!(matches!(err, javagen_core::Error::IllegalState { .. }));
    }

    #[test]
    fn test_owned_name() {
        let name = String::from("count");
        let param = Parameter::new(Type::int(), name).unwrap();
        assert_eq!(param.name(), "count");
    }
}
