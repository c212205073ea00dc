//! Reading inputs and writing outputs.

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

/// Path that stands for standard input.
pub const STDIN: &str = "-";

/// Read an input file, or standard input for `-`.
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == STDIN {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .wrap_err("Failed to read standard input")?;
        return Ok(content);
    }
    std::fs::read_to_string(path).wrap_err_with(|| format!("Failed to read {}", path.display()))
}

/// Read and parse a JSON input.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = read_input(path)?;
    debug!(input = %path.display(), bytes = content.len(), "parsing input");
    parse_json(&content).wrap_err_with(|| format!("Failed to parse {} as JSON", path.display()))
}

/// Parse JSON without serde_json's nesting limit. Tree depth is bounded by
/// `max_depth` when the tree is classified; the stack grows on demand here.
fn parse_json<T: DeserializeOwned>(content: &str) -> serde_json::Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(content);
    deserializer.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

/// Write generated text to a file, or to standard output when no file is
/// given. The text always ends with a newline.
pub fn write_output(output: Option<&PathBuf>, text: &str) -> Result<()> {
    let mut text = text.to_string();
    if !text.ends_with('\n') {
        text.push('\n');
    }
    match output {
        Some(path) => {
            std::fs::write(path, text)
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            debug!(output = %path.display(), "wrote output");
        }
        None => print!("{}", text),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_read_json_from_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("tree.json");
        std::fs::write(&path, r#"{"name": "br"}"#).expect("Failed to write input");

        let value: Value = read_json(&path).unwrap();
        assert_eq!(value["name"], "br");
    }

    #[test]
    fn test_read_json_reports_path() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{").expect("Failed to write input");

        let err = read_json::<Value>(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    fn nested_divs(depth: usize) -> String {
        let mut tree = r#"{"name": "br"}"#.to_string();
        for _ in 1..depth {
            tree = format!(r#"{{"name": "div", "children": [{}]}}"#, tree);
        }
        tree
    }

    #[test]
    fn test_read_json_accepts_deep_trees() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("deep.json");
        std::fs::write(&path, nested_divs(70)).expect("Failed to write input");

        let value: Value = read_json(&path).unwrap();
        let node = tagtree_jsx::classify(&value, 256).unwrap();
        assert_eq!(node.depth(), 70);
    }

    #[test]
    fn test_depth_limit_rejects_parsed_deep_tree() {
        let value: Value = parse_json(&nested_divs(300)).unwrap();
        let err = tagtree_jsx::classify(&value, 256).unwrap_err();
        assert!(matches!(err, tagtree_jsx::RenderError::DepthExceeded { limit: 256, .. }));
    }

    #[test]
    fn test_parse_json_rejects_trailing_input() {
        assert!(parse_json::<Value>(r#"{"name": "br"} x"#).is_err());
    }

    #[test]
    fn test_write_output_appends_newline() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("out.jsx");

        write_output(Some(&path), "<br/>").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<br/>\n");

        write_output(Some(&path), "<hr/>\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<hr/>\n");
    }
}
