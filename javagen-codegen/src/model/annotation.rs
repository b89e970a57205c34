//! Annotation applications.

use indexmap::IndexMap;
use javagen_core::{ClassName, Error, Result};

use super::Value;
use crate::generation::ImportSet;

/// The argument shape of an annotation, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum AnnotationArgs {
    /// `@Name`
    Marker,
    /// `@Name(value)`
    Single(Value),
    /// `@Name(a = x, b = y)`, in insertion order.
    Named(IndexMap<String, Value>),
}

/// An annotation applied to a declaration.
///
/// # Example
///
/// ```
/// use javagen_codegen::generation::ImportSet;
/// use javagen_codegen::model::{Annotation, Value};
/// use javagen_core::ClassName;
///
/// let named = ClassName::parse("jakarta.inject.Named").unwrap();
/// let annotation = Annotation::single(named, Value::string("primary"));
///
/// let mut imports = ImportSet::new();
/// assert_eq!(annotation.render(&mut imports), "@Named(\"primary\")");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    class_name: ClassName,
    args: AnnotationArgs,
}

impl Annotation {
    /// Create an annotation without arguments.
    pub fn marker(class_name: ClassName) -> Self {
        Self {
            class_name,
            args: AnnotationArgs::Marker,
        }
    }

    /// Create an annotation with one unnamed argument.
    pub fn single(class_name: ClassName, value: Value) -> Self {
        Self {
            class_name,
            args: AnnotationArgs::Single(value),
        }
    }

    /// Create an annotation with named arguments.
    ///
    /// Argument names must be non-blank and unique.
    pub fn named<K>(
        class_name: ClassName,
        args: impl IntoIterator<Item = (K, Value)>,
    ) -> Result<Self>
    where
        K: Into<String>,
    {
        let mut map = IndexMap::new();
        for (name, value) in args {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(Error::invalid_argument(format!(
                    "@{} has an argument with a blank name",
                    class_name.simple_name()
                )));
            }
            if map.contains_key(&name) {
                return Err(Error::invalid_argument(format!(
                    "@{} sets argument `{}` more than once",
                    class_name.simple_name(),
                    name
                )));
            }
            map.insert(name, value);
        }

        Ok(Self {
            class_name,
            args: AnnotationArgs::Named(map),
        })
    }

    /// The annotation type.
    pub fn class_name(&self) -> &ClassName {
        &self.class_name
    }

    /// The argument shape.
    pub fn args(&self) -> &AnnotationArgs {
        &self.args
    }

    /// Render the annotation, registering its type and argument types.
    pub fn render(&self, imports: &mut ImportSet) -> String {
        let name = imports.reference_class(&self.class_name);

        match &self.args {
            AnnotationArgs::Marker => format!("@{}", name),
            AnnotationArgs::Single(value) => format!("@{}({})", name, value.render(imports)),
            AnnotationArgs::Named(args) if args.is_empty() => format!("@{}", name),
            AnnotationArgs::Named(args) => {
                let args = args
                    .iter()
                    .map(|(key, value)| format!("{} = {}", key, value.render(imports)))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("@{}({})", name, args)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(qualified: &str) -> ClassName {
        ClassName::parse(qualified).unwrap()
    }

    #[test]
    fn test_marker() {
        let mut imports = ImportSet::new();
        let annotation = Annotation::marker(class("jakarta.inject.Singleton"));
        assert_eq!(annotation.render(&mut imports), "@Singleton");
        assert!(imports.contains(&class("jakarta.inject.Singleton")));
    }

    #[test]
    fn test_single_value() {
        let mut imports = ImportSet::new();
        let annotation = Annotation::single(class("di.Priority"), Value::int(10));
        assert_eq!(annotation.render(&mut imports), "@Priority(10)");
    }

    #[test]
    fn test_named_preserves_order() {
        let mut imports = ImportSet::new();
        let annotation = Annotation::named(
            class("di.Config"),
            [("a", Value::int(1)), ("b", Value::string("x"))],
        )
        .unwrap();

        assert_eq!(annotation.render(&mut imports), "@Config(a = 1, b = \"x\")");

        let reversed = Annotation::named(
            class("di.Config"),
            [("b", Value::string("x")), ("a", Value::int(1))],
        )
        .unwrap();
        assert_eq!(reversed.render(&mut imports), "@Config(b = \"x\", a = 1)");
    }

    #[test]
    fn test_named_empty_renders_as_marker() {
        let args: Vec<(String, Value)> = Vec::new();
        let annotation = Annotation::named(class("di.Config"), args).unwrap();
        assert_eq!(annotation.render(&mut ImportSet::new()), "@Config");
    }

    #[test]
    fn test_named_rejects_duplicates() {
        let err = Annotation::named(
            class("di.Config"),
            [("a", Value::int(1)), ("a", Value::int(2))],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_named_rejects_blank_name() {
        assert!(Annotation::named(class("di.Config"), [(" ", Value::int(1))]).is_err());
    }

    #[test]
    fn test_registers_annotation_and_argument_types() {
        let mut imports = ImportSet::new();
        let scope = class("di.Scope");
        let annotation = Annotation::named(
            class("di.Component"),
            [("scope", Value::enum_constant(scope.clone(), "SINGLETON"))],
        )
        .unwrap();

        assert_eq!(
            annotation.render(&mut imports),
            "@Component(scope = Scope.SINGLETON)"
        );
        assert!(imports.contains(&class("di.Component")));
        assert!(imports.contains(&scope));
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_nested_annotation_value() {
        let mut imports = ImportSet::new();
        let inner = Annotation::single(class("jakarta.inject.Named"), Value::string("db"));
        let outer = Annotation::single(class("di.Qualifiers"), Value::annotation(inner));

        assert_eq!(outer.render(&mut imports), "@Qualifiers(@Named(\"db\"))");
        assert!(imports.contains(&class("jakarta.inject.Named")));
    }

    #[test]
    fn test_clashing_annotation_name_is_qualified() {
        let mut imports = ImportSet::new();
        imports.add(&class("app.Named"));

        let annotation = Annotation::single(class("jakarta.inject.Named"), Value::string("db"));
        assert_eq!(
            annotation.render(&mut imports),
            "@jakarta.inject.Named(\"db\")"
        );
    }

    #[test]
    fn test_rendering_twice_keeps_single_import() {
        let mut imports = ImportSet::new();
        let annotation = Annotation::marker(class("jakarta.inject.Singleton"));
        annotation.render(&mut imports);
        annotation.render(&mut imports);
        assert_eq!(imports.len(), 1);
    }
}
