//! Identifier rules for generated JavaScript.

/// Words that cannot be used as binding names in JavaScript.
pub const RESERVED_WORDS: &[&str] = &[
    "await", "break", "case", "catch", "class", "const", "continue", "debugger", "default",
    "delete", "do", "else", "enum", "export", "extends", "false", "finally", "for", "function",
    "if", "import", "in", "instanceof", "let", "new", "null", "return", "static", "super",
    "switch", "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

/// Check if a name is a reserved word.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Check if a name can be used as a JavaScript binding.
///
/// Only ASCII identifiers are accepted: a letter, `_` or `$`, followed by
/// letters, digits, `_` or `$`, and not a reserved word.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        && !is_reserved(name)
}

/// Convert a string to PascalCase (e.g., "user-list" -> "UserList")
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c == '-' || c == ' ' || c == '.')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("focusRef"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$state"));
        assert!(is_identifier("Page2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("focus-ref"));
        assert!(!is_identifier("switch"));
    }

    #[test]
    fn test_is_reserved() {
        assert!(is_reserved("return"));
        assert!(!is_reserved("returns"));
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("index"), "Index");
        assert_eq!(to_pascal_case("user-list"), "UserList");
        assert_eq!(to_pascal_case("foo_bar_baz"), "FooBarBaz");
        assert_eq!(to_pascal_case("hElLo"), "HElLo");
        assert_eq!(to_pascal_case(""), "");
    }
}
