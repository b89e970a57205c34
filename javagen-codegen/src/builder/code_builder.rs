//! Code builder utility for generating properly indented code.

use super::Indent;

/// Accumulates generated text while tracking the indentation level.
///
/// The builder is a pure accumulator: none of its operations can fail, and
/// reading the result does not drain it.
///
/// # Example
///
/// ```
/// use javagen_codegen::builder::CodeBuilder;
///
/// let mut builder = CodeBuilder::java();
/// builder
///     .push_line("class Foo {")
///     .push_indent()
///     .push_line("int x;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.as_str(), "class Foo {\n    int x;\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line, ignoring the current indentation.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add raw text without indentation or newline.
    pub fn push_raw(&mut self, s: &str) -> &mut Self {
        self.buffer.push_str(s);
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level. A no-op at level zero.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.indent.write_unit(&mut self.buffer);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::java();
        builder.push_line("int x = 1;");
        assert_eq!(builder.build(), "int x = 1;\n");
    }

    #[test]
    fn test_indentation() {
        let mut builder = CodeBuilder::java();
        builder
            .push_line("void run() {")
            .push_indent()
            .push_line("go();")
            .push_dedent()
            .push_line("}");

        assert_eq!(builder.build(), "void run() {\n    go();\n}\n");
    }

    #[test]
    fn test_dedent_never_goes_negative() {
        let mut builder = CodeBuilder::java();
        builder
            .push_indent()
            .push_line("x")
            .push_dedent()
            .push_dedent()
            .push_line("y");

        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.as_str(), "    x\ny\n");
    }

    #[test]
    fn test_blank_line_ignores_indent() {
        let mut builder = CodeBuilder::java();
        builder
            .push_indent()
            .push_line("a;")
            .push_blank()
            .push_line("b;");

        assert_eq!(builder.as_str(), "    a;\n\n    b;\n");
    }

    #[test]
    fn test_result_is_not_draining() {
        let mut builder = CodeBuilder::java();
        builder.push_line("first");
        let snapshot = builder.as_str().to_string();
        builder.push_line("second");

        assert_eq!(snapshot, "first\n");
        assert_eq!(builder.as_str(), "first\nsecond\n");
    }

    #[test]
    fn test_raw_text() {
        let mut builder = CodeBuilder::java();
        builder.push_indent().push_raw("@Named ").push_raw("int x");
        assert_eq!(builder.build(), "@Named int x");
    }

    #[test]
    fn test_tab_indent() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.push_indent().push_indent().push_line("deep");
        assert_eq!(builder.build(), "\t\tdeep\n");
    }
}
