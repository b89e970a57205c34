//! Qualified names of referenced Java types.

use std::{fmt, path::PathBuf};

use crate::{Error, Result};

/// Identity of a declared type: its package and simple name.
///
/// A `ClassName` is both the comparison key for declared types and the unit
/// collected into an import set. Equality and hashing are structural.
///
/// # Example
///
/// ```
/// use javagen_core::ClassName;
///
/// let widget = ClassName::parse("com.example.Widget").unwrap();
/// assert_eq!(widget.package(), "com.example");
/// assert_eq!(widget.simple_name(), "Widget");
/// assert_eq!(widget.with_suffix("Factory").to_string(), "com.example.WidgetFactory");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName {
    package: String,
    simple_name: String,
}

impl ClassName {
    /// Create a class name from an explicit package and simple name.
    ///
    /// The default package is not supported, so a blank package is rejected.
    pub fn new(package: impl Into<String>, simple_name: impl Into<String>) -> Result<Self> {
        let package = package.into();
        let simple_name = simple_name.into();

        if package.trim().is_empty() {
            return Err(Error::invalid_argument(format!(
                "class `{}` has no package; the default package is not supported",
                simple_name
            )));
        }
        if simple_name.trim().is_empty() {
            return Err(Error::invalid_argument(format!(
                "class in package `{}` has a blank simple name",
                package
            )));
        }

        Ok(Self {
            package,
            simple_name,
        })
    }

    /// Parse a fully qualified dotted name, splitting on the last `.`.
    pub fn parse(qualified: &str) -> Result<Self> {
        match qualified.rsplit_once('.') {
            Some((package, simple_name)) => Self::new(package, simple_name),
            None => Err(Error::invalid_argument(format!(
                "`{}` is not a qualified name; the default package is not supported",
                qualified
            ))),
        }
    }

    /// Build a name whose package is known to be valid.
    fn well_known(package: &str, simple_name: &str) -> Self {
        Self {
            package: package.to_string(),
            simple_name: simple_name.to_string(),
        }
    }

    /// `java.lang.String`.
    pub fn string() -> Self {
        Self::well_known("java.lang", "String")
    }

    /// `java.lang.Object`.
    pub fn object() -> Self {
        Self::well_known("java.lang", "Object")
    }

    /// `java.lang.Class`.
    pub fn class() -> Self {
        Self::well_known("java.lang", "Class")
    }

    /// The package (namespace) of this class.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The simple (unqualified) name of this class.
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// The fully qualified name, e.g. `java.lang.String`.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.simple_name.clone()
        } else {
            format!("{}.{}", self.package, self.simple_name)
        }
    }

    /// Derive a sibling name in the same package with `suffix` appended.
    ///
    /// Used to name generated companions of an origin type, e.g.
    /// `Widget` -> `WidgetFactory`.
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self {
            package: self.package.clone(),
            simple_name: format!("{}{}", self.simple_name, suffix),
        }
    }

    /// Whether this class lives in `java.lang` and needs no import.
    pub fn is_java_lang(&self) -> bool {
        self.package == "java.lang"
    }

    /// Relative path of the source file declaring this class.
    pub fn source_path(&self) -> PathBuf {
        let mut path: PathBuf = self.package.split('.').collect();
        path.push(format!("{}.java", self.simple_name));
        path
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            f.write_str(&self.simple_name)
        } else {
            write!(f, "{}.{}", self.package, self.simple_name)
        }
    }
}
