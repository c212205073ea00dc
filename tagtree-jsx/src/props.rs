//! Attribute list formatting.

/// Join pre-formatted attribute tokens into a tag's attribute list.
///
/// A non-empty list gets exactly one leading space and single spaces
/// between tokens, so it can be placed directly after the tag name. An
/// empty list yields an empty string. Empty tokens are skipped.
///
/// ```
/// use tagtree_jsx::format_props;
///
/// assert_eq!(format_props(["id=\"x\"", "hidden"]), " id=\"x\" hidden");
/// assert_eq!(format_props(Vec::<String>::new()), "");
/// ```
pub fn format_props<I, S>(props: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for prop in props {
        let prop = prop.as_ref();
        if prop.is_empty() {
            continue;
        }
        out.push(' ');
        out.push_str(prop);
    }
    out
}
