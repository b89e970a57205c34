use javagen_core::ClassName;

use super::{
    Annotation, Declaration, Field, Method, Modifier, Modifiers, Visibility,
    modifiers::declaration_prefix,
};
use crate::{builder::CodeBuilder, generation::ImportSet};

/// Kind of type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Interface,
}

impl TypeKind {
    fn keyword(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
        }
    }
}

/// A class or interface declaration.
///
/// Fields render first, then methods, with a blank line between members
/// of different groups and between methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    class_name: ClassName,
    kind: TypeKind,
    visibility: Visibility,
    modifiers: Modifiers,
    superclass: Option<ClassName>,
    interfaces: Vec<ClassName>,
    fields: Vec<Field>,
    methods: Vec<Method>,
    annotations: Vec<Annotation>,
}

impl Class {
    /// Create a public class.
    pub fn new(class_name: ClassName) -> Self {
        Self {
            class_name,
            kind: TypeKind::Class,
            visibility: Visibility::Public,
            modifiers: Modifiers::default(),
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Create a public interface.
    pub fn interface(class_name: ClassName) -> Self {
        Self {
            kind: TypeKind::Interface,
            ..Self::new(class_name)
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

    /// Add a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Mark the class `final`.
    pub fn final_(self) -> Self {
        self.modifier(Modifier::Final)
    }

    /// Set the superclass. On an interface this becomes the first extended
    /// interface.
    pub fn extends(mut self, superclass: ClassName) -> Self {
        self.superclass = Some(superclass);
        self
    }

    /// Add an implemented interface (extended, for interfaces).
    pub fn implements(mut self, interface: ClassName) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Add a field.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a method or constructor.
    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// The declared class name.
    pub fn class_name(&self) -> &ClassName {
        &self.class_name
    }

    /// The kind of declaration.
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    fn header(&self, imports: &mut ImportSet) -> String {
        let mut header = format!(
            "{}{} {}",
            declaration_prefix(self.visibility, &self.modifiers),
            self.kind.keyword(),
            self.class_name.simple_name()
        );

        let mut reference = |class_name: &ClassName| imports.reference_class(class_name);
        let superclass = self.superclass.as_ref().map(&mut reference);
        let interfaces: Vec<String> = self.interfaces.iter().map(&mut reference).collect();

        match self.kind {
            TypeKind::Class => {
                if let Some(superclass) = superclass {
                    header.push_str(&format!(" extends {}", superclass));
                }
                if !interfaces.is_empty() {
                    header.push_str(&format!(" implements {}", interfaces.join(", ")));
                }
            }
            TypeKind::Interface => {
                let extended: Vec<String> = superclass.into_iter().chain(interfaces).collect();
                if !extended.is_empty() {
                    header.push_str(&format!(" extends {}", extended.join(", ")));
                }
            }
        }

        header.push_str(" {");
        header
    }
}

impl Declaration for Class {
    fn name(&self) -> &str {
        self.class_name.simple_name()
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn render_body(&self, code: &mut CodeBuilder, imports: &mut ImportSet) {
        code.push_line(&self.header(imports)).push_indent();

        for field in &self.fields {
            field.render(code, imports);
        }
        for (i, method) in self.methods.iter().enumerate() {
            if i > 0 || !self.fields.is_empty() {
                code.push_blank();
            }
            method.render(code, imports);
        }

        code.push_dedent().push_line("}");
    }
}
