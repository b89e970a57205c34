//! Rendering configuration, loadable from TOML.
//!
//! ```toml
//! indent = 4
//! header = "Generated code. Do not edit."
//!
//! [imports]
//! sort = true
//! omit_java_lang = false
//! omit_same_package = true
//! ```

use std::{fs, path::Path, str::FromStr};

use eyre::{Result, WrapErr};
use serde::Deserialize;

use crate::builder::Indent;

/// Layout options applied when assembling a source file.
///
/// These only shape the emitted text; they never change which classes a
/// declaration registers in its import set.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CodegenConfig {
    /// Indentation per level.
    #[serde(deserialize_with = "deserialize_indent")]
    pub indent: Indent,
    /// Comment line placed at the top of every file.
    pub header: Option<String>,
    /// Import block options.
    pub imports: ImportConfig,
}

impl CodegenConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;
        content
            .parse::<Self>()
            .wrap_err_with(|| format!("failed to parse '{}'", path.display()))
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            indent: Indent::JAVA,
            header: None,
            imports: ImportConfig::default(),
        }
    }
}

impl FromStr for CodegenConfig {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

/// Options for the import block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImportConfig {
    /// Sort lines by qualified name instead of first-reference order.
    pub sort: bool,
    /// Drop `java.lang` classes, which Java imports implicitly.
    pub omit_java_lang: bool,
    /// Drop classes from the file's own package.
    pub omit_same_package: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            sort: true,
            omit_java_lang: false,
            omit_same_package: true,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IndentRepr {
    Width(u8),
    Keyword(String),
}

fn deserialize_indent<'de, D>(deserializer: D) -> std::result::Result<Indent, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match IndentRepr::deserialize(deserializer)? {
        IndentRepr::Width(width) => Ok(Indent::Spaces(width)),
        IndentRepr::Keyword(keyword) if keyword == "tab" => Ok(Indent::Tab),
        IndentRepr::Keyword(other) => Err(serde::de::Error::custom(format!(
            "invalid indent `{}`, expected a width or \"tab\"",
            other
        ))),
    }
}
