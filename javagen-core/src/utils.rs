//! Identifier utilities for generated Java code.

/// Java keywords and literals that cannot be used as identifiers.
const RESERVED_WORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Lower-case the first character (e.g., "WidgetFactory" -> "widgetFactory")
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Check if a name is a Java reserved word.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Make a name usable as an identifier (e.g., "class" -> "class_")
pub fn safe_identifier(name: &str) -> String {
    if is_reserved_word(name) {
        format!("{}_", name)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decapitalize() {
        assert_eq!(decapitalize("Widget"), "widget");
        assert_eq!(decapitalize("WidgetFactory"), "widgetFactory");
        assert_eq!(decapitalize("widget"), "widget");
        assert_eq!(decapitalize(""), "");
    }

    #[test]
    fn test_is_reserved_word() {
        assert!(is_reserved_word("class"));
        assert!(is_reserved_word("null"));
        assert!(!is_reserved_word("widget"));
        assert!(!is_reserved_word("Class"));
    }

    #[test]
    fn test_safe_identifier() {
        assert_eq!(safe_identifier("class"), "class_");
        assert_eq!(safe_identifier("count"), "count");
    }
}
