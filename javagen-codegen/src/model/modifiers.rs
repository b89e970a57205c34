use std::collections::BTreeSet;

/// Access level of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    /// No modifier: visible within the package.
    PackagePrivate,
    Private,
}

impl Visibility {
    /// The keyword prefix, including its trailing space.
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Public => "public ",
            Self::Protected => "protected ",
            Self::PackagePrivate => "",
            Self::Private => "private ",
        }
    }
}

/// Non-access modifiers. Variant order is the canonical Java order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Abstract,
    Static,
    Final,
}

impl Modifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Abstract => "abstract",
            Self::Static => "static",
            Self::Final => "final",
        }
    }
}

/// A deduplicated set of modifiers, rendered in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modifiers(BTreeSet<Modifier>);

impl Modifiers {
    pub fn insert(&mut self, modifier: Modifier) {
        self.0.insert(modifier);
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    /// Modifier keywords, each followed by a space.
    pub fn prefix(&self) -> String {
        self.0.iter().map(|m| format!("{} ", m.as_str())).collect()
    }
}

/// Full declaration prefix, e.g. `"private static final "`.
pub(crate) fn declaration_prefix(visibility: Visibility, modifiers: &Modifiers) -> String {
    format!("{}{}", visibility.prefix(), modifiers.prefix())
}
