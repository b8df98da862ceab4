//! Indented line buffer.

use super::Indent;

/// Builds text line by line at a tracked indentation level.
///
/// This is the raw buffer behind [`Piece`](super::Piece); it does not check
/// that indentation balances.
///
/// # Example
///
/// ```
/// use tagforge_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::default();
/// builder
///     .push_line("switch (self)")
///     .push_line("{")
///     .push_indent()
///     .push_line("default: break;")
///     .push_dedent()
///     .push_line("}");
///
/// assert_eq!(builder.build(), "switch (self)\n{\n    default: break;\n}\n");
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

    /// Start at a given indentation level.
    pub fn at_level(mut self, level: usize) -> Self {
        self.indent_level = level;
        self
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a bare newline (no indentation).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add current indentation followed by `s`, without a newline.
    pub fn push_indented(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
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

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Get the current indentation level.
    pub fn current_indent(&self) -> usize {
        self.indent_level
    }

    pub fn indent(&self) -> Indent {
        self.indent
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Get a reference to the current buffer content.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    fn write_indent(&mut self) {
        self.indent.write_to(&mut self.buffer, self.indent_level);
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::new(Indent::FOUR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let mut builder = CodeBuilder::default();
        builder.push_line("int x = 1;");
        assert_eq!(builder.build(), "int x = 1;\n");
    }

    #[test]
    fn test_blank_line_has_no_indent() {
        let mut builder = CodeBuilder::default().at_level(2);
        builder.push_line("a;").push_blank().push_line("b;");
        assert_eq!(builder.build(), "        a;\n\n        b;\n");
    }

    #[test]
    fn test_logical_line_across_calls() {
        let mut builder = CodeBuilder::default().at_level(1);
        builder
            .push_indented("<< \".x = \" << ")
            .push_raw("self.x")
            .push_raw(" << \",\\n\"")
            .push_blank();
        assert_eq!(builder.build(), "    << \".x = \" << self.x << \",\\n\"\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::default();
        builder.push_dedent().push_line("x;");
        assert_eq!(builder.current_indent(), 0);
        assert_eq!(builder.build(), "x;\n");
    }

    #[test]
    fn test_tab_indent() {
        let mut builder = CodeBuilder::new(Indent::Tab);
        builder.push_indent().push_line("return 1;");
        assert_eq!(builder.build(), "\treturn 1;\n");
    }
}
