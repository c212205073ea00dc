//! Configuration types for tagtree.toml files.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use tagtree_codegen::Indent;
use tagtree_jsx::{Page, RenderOptions};

/// Root configuration for tagtree.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Rendering options
    #[serde(default)]
    pub render: RenderSection,

    /// Page composition options
    #[serde(default)]
    pub page: PageSection,
}

/// The `[render]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct RenderSection {
    /// Spaces per level, or `"tab"`
    pub indent: IndentSetting,
    /// Binding that autofocus tags attach to
    pub focus_ref: String,
    /// Maximum nesting depth of a tree
    pub max_depth: usize,
}

impl Default for RenderSection {
    fn default() -> Self {
        Self {
            indent: IndentSetting::default(),
            focus_ref: RenderOptions::DEFAULT_FOCUS_REF.to_string(),
            max_depth: RenderOptions::DEFAULT_MAX_DEPTH,
        }
    }
}

/// The `[page]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PageSection {
    /// Component name used when a page document does not name one
    pub name: String,
}

impl Default for PageSection {
    fn default() -> Self {
        Self {
            name: Page::DEFAULT_NAME.to_string(),
        }
    }
}

/// How one indentation level is written.
///
/// In TOML this is either a number of spaces (`indent = 4`) or the string
/// `"tab"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IndentSetting {
    Width(u8),
    Style(IndentStyle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    Tab,
}

impl IndentSetting {
    pub const MAX_WIDTH: u8 = 8;

    /// Check the setting describes a usable indent.
    pub fn check(&self) -> std::result::Result<(), String> {
        match self {
            Self::Width(width) if *width == 0 || *width > Self::MAX_WIDTH => Err(format!(
                "indent width must be between 1 and {}, got {}",
                Self::MAX_WIDTH,
                width
            )),
            _ => Ok(()),
        }
    }

    /// Convert to the indentation unit used by the code builder.
    pub fn indent(&self) -> Indent {
        match self {
            Self::Width(width) => Indent::Spaces(*width),
            Self::Style(IndentStyle::Tab) => Indent::Tab,
        }
    }
}

impl Default for IndentSetting {
    fn default() -> Self {
        Self::Width(2)
    }
}

impl fmt::Display for IndentSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width(width) => write!(f, "{}", width),
            Self::Style(IndentStyle::Tab) => write!(f, "tab"),
        }
    }
}

impl FromStr for IndentSetting {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let setting = match s.trim() {
            "tab" => Self::Style(IndentStyle::Tab),
            other => other
                .parse::<u8>()
                .map(Self::Width)
                .map_err(|_| format!("expected a number of spaces or \"tab\", got '{}'", s))?,
        };
        setting.check()?;
        Ok(setting)
    }
}
