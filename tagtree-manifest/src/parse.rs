//! Configuration parsing from files and strings.

use std::{path::Path, str::FromStr};

use miette::SourceSpan;
use tagtree_codegen::naming::is_identifier;

use crate::{Config, Error, Result, error::SourceContext};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "tagtree.toml";

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE)
    }
}

impl Config {
    /// Parse a configuration file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Load the configuration at `path`, falling back to the defaults when
    /// the file does not exist and was not asked for explicitly.
    pub fn open_or_default(path: impl AsRef<Path>, explicit: bool) -> Result<Self> {
        let path = path.as_ref();
        if !explicit && !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(path)
    }
}

/// Parse a configuration from content with the given filename for error
/// reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    if let Err(message) = config.render.indent.check() {
        return Err(ctx.validation_error(message, find_key_span(ctx.src(), "indent")));
    }

    if !is_identifier(&config.render.focus_ref) {
        return Err(ctx.validation_error(
            format!(
                "focus_ref '{}' is not a valid JavaScript identifier",
                config.render.focus_ref
            ),
            find_key_span(ctx.src(), "focus_ref"),
        ));
    }

    if config.render.max_depth == 0 {
        return Err(ctx.validation_error(
            "max_depth must be greater than 0",
            find_key_span(ctx.src(), "max_depth"),
        ));
    }

    if !is_identifier(&config.page.name) {
        return Err(ctx.validation_error(
            format!(
                "page name '{}' is not a valid component name",
                config.page.name
            ),
            find_key_span(ctx.src(), "name"),
        ));
    }

    Ok(())
}

/// Find the span of a `key = value` assignment's key.
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                let start = offset + (line.len() - trimmed.len());
                return Some(SourceSpan::from((start, key.len())));
            }
        }
        offset += line.len();
    }
    None
}
