//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// Supports both consuming methods (returning `Self`) for chaining and
/// mutable methods (returning `&mut Self`) for incremental building.
///
/// # Example (Consuming API)
///
/// ```
/// use tagtree_codegen::CodeBuilder;
///
/// let code = CodeBuilder::jsx()
///     .line("<ul>")
///     .indent()
///     .line("<li/>")
///     .dedent()
///     .line("</ul>")
///     .build();
///
/// assert_eq!(code, "<ul>\n  <li/>\n</ul>\n");
/// ```
///
/// # Example (Mutable API)
///
/// ```
/// use tagtree_codegen::CodeBuilder;
///
/// let mut builder = CodeBuilder::jsx();
/// builder
///     .push_line("<ul>")
///     .push_indent()
///     .push_text("<li>\n  one\n</li>")
///     .push_dedent()
///     .push_line("</ul>");
/// assert_eq!(builder.finish(), "<ul>\n  <li>\n    one\n  </li>\n</ul>");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    unit: String,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            unit: indent.unit(),
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation (JSX default).
    pub fn jsx() -> Self {
        Self::new(Indent::JSX)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Add already-rendered, possibly multi-line text at the current level.
    ///
    /// Each line is written as its own line; empty lines carry no
    /// indentation. Empty text writes nothing.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        if text.is_empty() {
            return self;
        }
        for line in text.split('\n') {
            if line.is_empty() {
                self.push_blank();
            } else {
                self.push_line(line);
            }
        }
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Add multi-line text at the current indentation.
    pub fn text(mut self, s: &str) -> Self {
        self.push_text(s);
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use tagtree_codegen::CodeBuilder;
    ///
    /// let code = CodeBuilder::jsx()
    ///     .block_with_close("function Page() {", "}", |b: CodeBuilder| {
    ///         b.line("return null")
    ///     })
    ///     .build();
    /// assert_eq!(code, "function Page() {\n  return null\n}\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    /// Consume the builder and return the generated code without the
    /// newline that terminates the last line.
    pub fn finish(self) -> String {
        let mut buffer = self.buffer;
        if buffer.ends_with('\n') {
            buffer.pop();
        }
        buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(&self.unit);
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::jsx()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::jsx().line("<br/>").build();
        assert_eq!(code, "<br/>\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::jsx()
            .line("<div>")
            .indent()
            .line("hello")
            .dedent()
            .line("</div>")
            .build();

        assert_eq!(code, "<div>\n  hello\n</div>\n");
    }

    #[test]
    fn test_block() {
        let code = CodeBuilder::new(Indent::Spaces(4))
            .block_with_close("if (x) {", "}", |b| b.line("go();"))
            .build();

        assert_eq!(code, "if (x) {\n    go();\n}\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::jsx()
            .line("import \"x\"")
            .blank()
            .line("export default Page")
            .build();

        assert_eq!(code, "import \"x\"\n\nexport default Page\n");
    }

    #[test]
    fn test_conditional() {
        let with = CodeBuilder::jsx()
            .when(true, |b| b.line("\"use client\""))
            .line("x")
            .build();
        let without = CodeBuilder::jsx()
            .when(false, |b| b.line("\"use client\""))
            .line("x")
            .build();

        assert_eq!(with, "\"use client\"\nx\n");
        assert_eq!(without, "x\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::jsx()
            .line("<ul>")
            .indent()
            .each(["a", "b"], |b, item| b.line(&format!("<li>{}</li>", item)))
            .dedent()
            .line("</ul>")
            .build();

        assert_eq!(code, "<ul>\n  <li>a</li>\n  <li>b</li>\n</ul>\n");
    }

    #[test]
    fn test_tab_indent() {
        let code = CodeBuilder::new(Indent::Tab)
            .line("{")
            .indent()
            .line("x")
            .dedent()
            .line("}")
            .build();

        assert_eq!(code, "{\n\tx\n}\n");
    }

    #[test]
    fn test_push_text_indents_each_line() {
        let mut builder = CodeBuilder::jsx();
        builder.push_indent().push_text("<p>\n  a\n\n</p>");
        assert_eq!(builder.build(), "  <p>\n    a\n\n  </p>\n");
    }

    #[test]
    fn test_push_text_empty_writes_nothing() {
        let mut builder = CodeBuilder::jsx();
        builder.push_text("");
        assert_eq!(builder.build(), "");
    }

    #[test]
    fn test_finish_trims_final_newline() {
        let mut builder = CodeBuilder::jsx();
        builder.push_line("a").push_line("b");
        assert_eq!(builder.finish(), "a\nb");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::jsx();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }
}
