//! Tag rendering: `<name .../>` and `<name ...>` ... `</name>`.

use tagtree_ir::Tag;

use super::{Position, Renderer};
use crate::{NodePath, RenderError, Result, format_props};

/// Characters that cannot appear in a tag name.
const FORBIDDEN_NAME_CHARS: &[char] = &['<', '>', '/', '{', '}', '"', '\'', '='];

impl Renderer {
    pub(crate) fn render_self_closing(&self, tag: &Tag, path: &NodePath) -> Result<String> {
        if tag.is_raw() {
            return Ok(tag.contents.clone());
        }
        check_name(&tag.name, path)?;
        Ok(format!("<{}{}/>", tag.name, self.attributes(tag)))
    }

    pub(crate) fn render_tag(&self, tag: &Tag, path: &NodePath) -> Result<String> {
        let (open, close) = if tag.is_raw() {
            if !tag.props.is_empty() {
                return Err(RenderError::malformed(
                    path,
                    "a fragment cannot carry attributes",
                ));
            }
            ("<>".to_string(), "</>".to_string())
        } else {
            check_name(&tag.name, path)?;
            (
                format!("<{}{}>", tag.name, self.attributes(tag)),
                format!("</{}>", tag.name),
            )
        };

        let mut builder = self.builder();
        builder.push_line(&open).push_text(&tag.contents).push_indent();
        for (i, child) in tag.children.iter().enumerate() {
            let child_path = self.descend(path, format!("children[{}]", i))?;
            let text = self.render_node(child, &child_path, Position::Child)?;
            builder.push_text(&text);
        }
        builder.push_dedent().push_line(&close);
        Ok(builder.finish())
    }

    /// The tag's attribute list, with the focus binding appended when the
    /// tag requests autofocus.
    fn attributes(&self, tag: &Tag) -> String {
        let focus = tag
            .autofocus
            .then(|| format!("ref={{{}}}", self.options().focus_ref));
        format_props(tag.props.iter().map(String::as_str).chain(focus.as_deref()))
    }
}

fn check_name(name: &str, path: &NodePath) -> Result<()> {
    if name.chars().any(|c| c.is_whitespace() || FORBIDDEN_NAME_CHARS.contains(&c)) {
        return Err(RenderError::malformed(
            path,
            format!("`{}` is not a valid tag name", name),
        ));
    }
    Ok(())
}
