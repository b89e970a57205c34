//! Whole-file assembly: header, package, imports, declarations.

use std::path::PathBuf;

use javagen_core::{GeneratedFile, Overwrite};

use super::{ImportSet, render_imports};
use crate::{
    builder::CodeBuilder,
    config::CodegenConfig,
    model::{Class, Declaration},
};

/// A Java compilation unit built around a primary type.
///
/// The file lives at the primary type's package path. Additional top-level
/// types share the file and render after it.
///
/// # Example
///
/// ```
/// use javagen_codegen::generation::SourceFile;
/// use javagen_codegen::model::Class;
/// use javagen_core::ClassName;
///
/// let class = Class::new(ClassName::parse("com.example.Greeter").unwrap());
/// let source = SourceFile::new(class).render();
/// assert_eq!(source, "package com.example;\n\npublic class Greeter {\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct SourceFile {
    types: Vec<Class>,
    config: CodegenConfig,
    overwrite: Overwrite,
}

impl SourceFile {
    /// Create a file declaring `primary`.
    pub fn new(primary: Class) -> Self {
        Self {
            types: vec![primary],
            config: CodegenConfig::default(),
            overwrite: Overwrite::Always,
        }
    }

    /// Add another top-level type to the same file.
    pub fn add_type(mut self, class: Class) -> Self {
        self.types.push(class);
        self
    }

    /// Use the given rendering configuration.
    pub fn with_config(mut self, config: CodegenConfig) -> Self {
        self.config = config;
        self
    }

    /// Only write the file if it does not exist yet.
    pub fn if_missing(mut self) -> Self {
        self.overwrite = Overwrite::IfMissing;
        self
    }

    fn primary(&self) -> &Class {
        &self.types[0]
    }

    /// The package of the file.
    pub fn package(&self) -> &str {
        self.primary().class_name().package()
    }

    /// Render the declarations and return the full text together with
    /// every class they reference.
    pub fn render_with_imports(&self) -> (String, ImportSet) {
        let mut imports = ImportSet::new();
        for class in &self.types {
            imports.declare(class.class_name());
        }

        let mut body = CodeBuilder::new(self.config.indent);

        for (i, class) in self.types.iter().enumerate() {
            if i > 0 {
                body.push_blank();
            }
            class.render(&mut body, &mut imports);
        }

        let mut out = CodeBuilder::new(self.config.indent);
        if let Some(header) = &self.config.header {
            out.push_line(&format!("// {}", header)).push_blank();
        }
        out.push_line(&format!("package {};", self.package()))
            .push_blank();

        let import_lines = render_imports(&imports, self.package(), &self.config.imports);
        for line in &import_lines {
            out.push_line(line);
        }
        if !import_lines.is_empty() {
            out.push_blank();
        }
        out.push_raw(body.as_str());

        tracing::debug!(
            class = %self.primary().class_name(),
            types = self.types.len(),
            imports = import_lines.len(),
            "rendered source file"
        );

        (out.build(), imports)
    }

    /// Render the full file text.
    pub fn render(&self) -> String {
        self.render_with_imports().0
    }
}

impl GeneratedFile for SourceFile {
    fn relative_path(&self) -> PathBuf {
        self.primary().class_name().source_path()
    }

    fn overwrite(&self) -> Overwrite {
        self.overwrite
    }

    fn render(&self) -> String {
        SourceFile::render(self)
    }
}

#[cfg(test)]
mod tests {
    use javagen_core::{ClassName, Type};

    use super::*;
    use crate::{
        builder::Indent,
        model::{Annotation, Field, Method, Parameter, Visibility},
    };

    fn class(qualified: &str) -> ClassName {
        ClassName::parse(qualified).unwrap()
    }

    #[test]
    fn test_imports_block() {
        let decl = Class::new(class("app.Service"))
            .annotate(Annotation::marker(class("jakarta.inject.Singleton")))
            .field(
                Field::new(Type::declared(class("app.Repo")), "repo")
                    .unwrap()
                    .private(),
            )
            .field(Field::new(Type::string(), "name").unwrap().private());

        let (text, imports) = SourceFile::new(decl).render_with_imports();

        assert_eq!(
            text,
            "package app;\n\nimport jakarta.inject.Singleton;\nimport java.lang.String;\n\n@Singleton\npublic class Service {\n    private Repo repo;\n    private String name;\n}\n"
        );
        // same-package classes are still collected, only the block omits them
        assert_eq!(imports.len(), 3);
    }

    #[test]
    fn test_header_and_indent_from_config() {
        let config = CodegenConfig {
            indent: Indent::Spaces(2),
            header: Some("Generated. Do not edit.".to_string()),
            ..CodegenConfig::default()
        };
        let decl = Class::new(class("app.Tiny")).method(Method::new("run", Type::VOID));

        let text = SourceFile::new(decl).with_config(config).render();
        assert_eq!(
            text,
            "// Generated. Do not edit.\n\npackage app;\n\npublic class Tiny {\n  public void run() {\n  }\n}\n"
        );
    }

    #[test]
    fn test_additional_types() {
        let primary = Class::new(class("app.Main"));
        let helper = Class::new(class("app.Helper")).visibility(Visibility::PackagePrivate);

        let text = SourceFile::new(primary).add_type(helper).render();
        assert_eq!(
            text,
            "package app;\n\npublic class Main {\n}\n\nclass Helper {\n}\n"
        );
    }

    #[test]
    fn test_clashing_simple_names_are_qualified() {
        let decl = Class::new(class("app.Main")).method(
            Method::new("m", Type::declared(class("a.Widget")))
                .param(Parameter::new(Type::declared(class("b.Widget")), "w").unwrap()),
        );

        let (text, imports) = SourceFile::new(decl).render_with_imports();
        assert_eq!(
            text,
            "package app;\n\nimport a.Widget;\n\npublic class Main {\n    public Widget m(b.Widget w) {\n    }\n}\n"
        );
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_declared_type_name_wins_over_imports() {
        let decl = Class::new(class("app.Widget")).field(
            Field::new(Type::declared(class("lib.Widget")), "delegate")
                .unwrap()
                .private(),
        );

        assert_eq!(
            SourceFile::new(decl).render(),
            "package app;\n\npublic class Widget {\n    private lib.Widget delegate;\n}\n"
        );
    }

    #[test]
    fn test_relative_path() {
        let file = SourceFile::new(Class::new(class("com.example.Widget")));
        assert_eq!(
            file.relative_path(),
            PathBuf::from("com/example/Widget.java")
        );
        assert_eq!(file.package(), "com.example");
    }
}
