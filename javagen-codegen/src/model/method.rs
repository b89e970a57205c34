use javagen_core::{ClassName, Type};

use super::{
    Annotation, Declaration, Modifier, Modifiers, NamedElement, Parameter, Visibility,
    modifiers::declaration_prefix,
};
use crate::{builder::CodeBuilder, generation::ImportSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MethodKind {
    Method,
    Constructor,
}

/// A method or constructor.
///
/// Parameters render comma-separated in the order they were added.
///
/// # Example
///
/// ```
/// use javagen_codegen::generation::ImportSet;
/// use javagen_codegen::model::{Declaration, Method, Parameter};
/// use javagen_core::Type;
///
/// let method = Method::new("add", Type::int())
///     .param(Parameter::new(Type::int(), "a").unwrap())
///     .param(Parameter::new(Type::int(), "b").unwrap())
///     .body_line("return a + b;");
///
/// let mut imports = ImportSet::new();
/// assert_eq!(
///     method.render_to_string(&mut imports),
///     "public int add(int a, int b) {\n    return a + b;\n}\n"
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    signature: NamedElement,
    kind: MethodKind,
    visibility: Visibility,
    modifiers: Modifiers,
    params: Vec<Parameter>,
    throws: Vec<ClassName>,
    /// `None` renders a bodiless declaration ending in `;`.
    body: Option<Vec<String>>,
    annotations: Vec<Annotation>,
}

impl Method {
    /// Create a public method with an empty body.
    pub fn new(name: impl Into<String>, return_type: Type) -> Self {
        Self {
            signature: NamedElement::new(return_type, name),
            kind: MethodKind::Method,
            visibility: Visibility::Public,
            modifiers: Modifiers::default(),
            params: Vec::new(),
            throws: Vec::new(),
            body: Some(Vec::new()),
            annotations: Vec::new(),
        }
    }

    /// Create a public constructor for `class_name`.
    pub fn constructor(class_name: &ClassName) -> Self {
        Self {
            kind: MethodKind::Constructor,
            ..Self::new(class_name.simple_name(), Type::VOID)
        }
    }

    /// Add an annotation.
    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Append a parameter.
    pub fn param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    /// Append multiple parameters.
    pub fn params(mut self, params: impl IntoIterator<Item = Parameter>) -> Self {
        self.params.extend(params);
        self
    }

    /// Declare a thrown exception.
    pub fn throws(mut self, exception: ClassName) -> Self {
        self.throws.push(exception);
        self
    }

    /// Set visibility.
    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Make this method private.
    pub fn private(self) -> Self {
        self.visibility(Visibility::Private)
    }

    /// Add a modifier.
    pub fn modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    /// Mark the method `static`.
    pub fn static_(self) -> Self {
        self.modifier(Modifier::Static)
    }

    /// Make this an `abstract` method with no body.
    pub fn abstract_(mut self) -> Self {
        self.modifiers.insert(Modifier::Abstract);
        self.body = None;
        self
    }

    /// Drop the body without adding `abstract`, as for interface methods.
    pub fn bodiless(mut self) -> Self {
        self.body = None;
        self
    }

    /// Add a line to the body. Ignored once the method is abstract or
    /// bodiless.
    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        if let Some(body) = &mut self.body {
            body.push(line.into());
        }
        self
    }

    /// Replace the body with a stub returning the default value of the
    /// return type. `void` methods get an empty body; abstract and bodiless
    /// methods are left as they are.
    pub fn stub_body(mut self) -> Self {
        if self.body.is_none() {
            return self;
        }
        let body = match self.signature.ty().default_literal() {
            Ok(literal) if self.kind == MethodKind::Method => vec![format!("return {};", literal)],
            _ => Vec::new(),
        };
        self.body = Some(body);
        self
    }

    /// Whether this method is declared `abstract`.
    pub fn is_abstract(&self) -> bool {
        self.modifiers.contains(Modifier::Abstract)
    }

    /// The return type (`void` for constructors).
    pub fn return_type(&self) -> &Type {
        self.signature.ty()
    }

    /// Parameters in declaration order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.params
    }

    /// Whether this is a constructor.
    pub fn is_constructor(&self) -> bool {
        self.kind == MethodKind::Constructor
    }

    fn signature(&self, imports: &mut ImportSet) -> String {
        let mut signature = declaration_prefix(self.visibility, &self.modifiers);

        if self.kind == MethodKind::Method {
            signature.push_str(&imports.reference(self.signature.ty()));
            signature.push(' ');
        }

        let params = self
            .params
            .iter()
            .map(|param| param.render_to_string(imports))
            .collect::<Vec<_>>()
            .join(", ");
        signature.push_str(&format!("{}({})", self.signature.name(), params));

        if !self.throws.is_empty() {
            let throws = self
                .throws
                .iter()
                .map(|exception| imports.reference_class(exception))
                .collect::<Vec<_>>()
                .join(", ");
            signature.push_str(&format!(" throws {}", throws));
        }

        signature
    }
}

impl Declaration for Method {
    fn name(&self) -> &str {
        self.signature.name()
    }

    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn render_body(&self, code: &mut CodeBuilder, imports: &mut ImportSet) {
        let signature = self.signature(imports);

        match &self.body {
            None => {
                code.push_line(&format!("{};", signature));
            }
            Some(lines) => {
                code.push_line(&format!("{} {{", signature)).push_indent();
                for line in lines {
                    code.push_line(line);
                }
                code.push_dedent().push_line("}");
            }
        }
    }
}
