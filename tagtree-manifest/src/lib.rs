//! Configuration for the tagtree compiler.
//!
//! Settings live in a `tagtree.toml` file:
//!
//! ```toml
//! [render]
//! indent = 2             # spaces per level (1..=8) or "tab"
//! focus_ref = "focusRef" # identifier bound by autofocus
//! max_depth = 256        # maximum nesting depth
//!
//! [page]
//! name = "Page"          # default component name
//! ```
//!
//! Every key is optional; unknown keys are rejected.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod parse;

pub use config::{Config, IndentSetting, IndentStyle, PageSection, RenderSection};
pub use error::{Error, Result, SourceContext};
pub use parse::{CONFIG_FILE, parse_config};
