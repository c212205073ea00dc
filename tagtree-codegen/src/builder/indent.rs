//! Indentation configuration for code generation.

use std::fmt;

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indent {
    /// Spaces with the specified width (e.g., 2 or 4).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation (JSX, TypeScript, JavaScript).
    pub const JSX: Self = Self::Spaces(2);

    /// The text of one indentation level.
    pub fn unit(&self) -> String {
        match self {
            Self::Spaces(width) => " ".repeat(usize::from(*width)),
            Self::Tab => "\t".to_string(),
        }
    }

    /// The text of `levels` indentation levels.
    pub fn repeat(&self, levels: usize) -> String {
        self.unit().repeat(levels)
    }

    /// Shift every non-empty line of `text` right by `levels` units.
    ///
    /// Empty lines stay empty so that no trailing whitespace is introduced.
    /// Applying `a` levels and then `b` levels is the same as applying
    /// `a + b` levels at once.
    ///
    /// ```
    /// use tagtree_codegen::Indent;
    ///
    /// let text = Indent::JSX.apply("<div>\n\n</div>", 1);
    /// assert_eq!(text, "  <div>\n\n  </div>");
    /// ```
    pub fn apply(&self, text: &str, levels: usize) -> String {
        if levels == 0 {
            return text.to_string();
        }

        let prefix = self.repeat(levels);
        let mut out = String::with_capacity(text.len() + prefix.len());
        for (i, line) in text.split('\n').enumerate() {
            if i > 0 {
                out.push('\n');
            }
            if !line.is_empty() {
                out.push_str(&prefix);
            }
            out.push_str(line);
        }
        out
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JSX
    }
}

impl fmt::Display for Indent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spaces(width) => write!(f, "{} spaces", width),
            Self::Tab => write!(f, "tab"),
        }
    }
}
