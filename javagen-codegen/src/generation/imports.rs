//! Import collection and import block rendering.

use indexmap::{IndexMap, IndexSet};
use javagen_core::{ClassName, Type};

use crate::config::ImportConfig;

/// Collects every class referenced while rendering a declaration tree.
///
/// Insertion is idempotent and order is preserved, so the same tree always
/// yields the same set. The first class registered under a simple name owns
/// it; any other class with that simple name is still recorded but spelled by
/// its qualified name and left out of the import block.
///
/// # Example
///
/// ```
/// use javagen_codegen::generation::ImportSet;
/// use javagen_core::ClassName;
///
/// let widget = ClassName::parse("x.y.Widget").unwrap();
/// let mut imports = ImportSet::new();
/// imports.add(&widget);
/// imports.add(&widget);
/// assert_eq!(imports.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSet {
    classes: IndexSet<ClassName>,
    /// Simple name -> the class it resolves to in the rendered file.
    owners: IndexMap<String, ClassName>,
}

impl ImportSet {
    /// Create a new empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the simple name of a class declared in the file being
    /// rendered, without importing it.
    ///
    /// Call before rendering so references to other classes with the same
    /// simple name come out qualified.
    pub fn declare(&mut self, class_name: &ClassName) {
        self.owners
            .entry(class_name.simple_name().to_string())
            .or_insert_with(|| class_name.clone());
    }

    /// Register a class. Returns `false` if it was already present.
    pub fn add(&mut self, class_name: &ClassName) -> bool {
        if self.classes.contains(class_name) {
            return false;
        }
        let owner = self
            .owners
            .entry(class_name.simple_name().to_string())
            .or_insert_with(|| class_name.clone());
        if owner == class_name {
            tracing::trace!(class = %class_name, "registered import");
        } else {
            tracing::trace!(
                class = %class_name,
                owner = %owner,
                "simple name taken, using qualified name"
            );
        }
        self.classes.insert(class_name.clone())
    }

    /// Whether `class_name` can be written by its simple name.
    pub fn owns_simple_name(&self, class_name: &ClassName) -> bool {
        self.owners.get(class_name.simple_name()) == Some(class_name)
    }

    /// Register a class and return its in-source spelling: the simple name
    /// when it owns it, the qualified name otherwise.
    pub fn reference_class(&mut self, class_name: &ClassName) -> String {
        self.add(class_name);
        if self.owns_simple_name(class_name) {
            class_name.simple_name().to_string()
        } else {
            class_name.qualified_name()
        }
    }

    /// Register the class behind a declared type; primitives and `void`
    /// need no import.
    pub fn add_type(&mut self, ty: &Type) {
        if let Some(class_name) = ty.class_name() {
            self.add(class_name);
        }
    }

    /// Register `ty` and return its in-source spelling.
    pub fn reference(&mut self, ty: &Type) -> String {
        match ty {
            Type::Declared(class_name) => self.reference_class(class_name),
            other => other.to_string(),
        }
    }

    /// Merge another set into this one.
    pub fn merge(&mut self, other: &ImportSet) {
        for class_name in &other.classes {
            self.add(class_name);
        }
    }

    /// Check if a class has been registered.
    pub fn contains(&self, class_name: &ClassName) -> bool {
        self.classes.contains(class_name)
    }

    /// Iterate over registered classes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ClassName> {
        self.classes.iter()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Get the number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }
}

/// Render the import block for a file in `package`, one line per class.
///
/// Classes spelled by their qualified name are not imported.
pub fn render_imports(imports: &ImportSet, package: &str, config: &ImportConfig) -> Vec<String> {
    let mut classes: Vec<&ClassName> = imports
        .iter()
        .filter(|c| imports.owns_simple_name(c))
        .filter(|c| !(config.omit_java_lang && c.is_java_lang()))
        .filter(|c| !(config.omit_same_package && c.package() == package))
        .collect();

    if config.sort {
        classes.sort();
    }

    classes
        .into_iter()
        .map(|c| format!("import {};", c))
        .collect()
}
