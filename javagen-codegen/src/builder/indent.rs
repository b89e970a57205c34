//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 4-space indentation, the usual Java style.
    pub const JAVA: Self = Self::Spaces(4);

    /// Append one indent level to `buffer`.
    pub fn write_unit(&self, buffer: &mut String) {
        match self {
            Self::Spaces(width) => {
                for _ in 0..*width {
                    buffer.push(' ');
                }
            }
            Self::Tab => buffer.push('\t'),
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(indent: Indent) -> String {
        let mut buffer = String::new();
        indent.write_unit(&mut buffer);
        buffer
    }

    #[test]
    fn test_write_unit() {
        assert_eq!(unit(Indent::Spaces(2)), "  ");
        assert_eq!(unit(Indent::Spaces(4)), "    ");
        assert_eq!(unit(Indent::Tab), "\t");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }
}
