//! Shared utility functions for code generation.

/// Lowercase the first character (e.g., "UserController" -> "userController")
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Strip `suffix` once from the end of `s`, leaving `s` untouched when the
/// suffix is the whole string.
pub fn strip_suffix_once<'a>(s: &'a str, suffix: &str) -> &'a str {
    match s.strip_suffix(suffix) {
        Some(rest) if !rest.is_empty() => rest,
        _ => s,
    }
}

/// Innermost name of a qualified identity
/// (e.g., "com.acme.Outer$Inner" -> "Inner", "String" -> "String")
pub fn simple_name(qualified: &str) -> &str {
    qualified
        .rsplit(['.', '$'])
        .next()
        .unwrap_or(qualified)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("UserController"), "userController");
        assert_eq!(lower_first("user"), "user");
        assert_eq!(lower_first("A"), "a");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_strip_suffix_once() {
        assert_eq!(strip_suffix_once("userController", "Controller"), "user");
        assert_eq!(strip_suffix_once("user", "Controller"), "user");
        assert_eq!(strip_suffix_once("Controller", "Controller"), "Controller");
        assert_eq!(
            strip_suffix_once("ControllerController", "Controller"),
            "Controller"
        );
    }

    #[test]
    fn test_simple_name() {
        assert_eq!(simple_name("com.acme.UserController"), "UserController");
        assert_eq!(simple_name("com.acme.Outer$Inner"), "Inner");
        assert_eq!(simple_name("String"), "String");
        assert_eq!(simple_name(""), "");
    }
}
