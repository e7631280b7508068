//! URL slugification.

use deunicode::deunicode;

/// Convert text to a lowercase, hyphen-separated URL slug.
///
/// Non-ASCII characters are transliterated first, so "Database API" and
/// "Données" both produce readable slugs.
///
/// # Examples
/// ```ignore
/// assert_eq!(slugify("Database API"), "database-api");
/// assert_eq!(slugify("  React  Hooks! "), "react-hooks");
/// ```
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Title-case a path segment: `database-api` -> `Database Api`.
///
/// Used for directory names that have no explicit category label.
pub fn title_case(segment: &str) -> String {
    segment
        .split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Database API"), "database-api");
        assert_eq!(slugify("React Hooks"), "react-hooks");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  Coding -- with   ChatGPT! "), "coding-with-chatgpt");
    }

    #[test]
    fn test_slugify_unicode() {
        assert_eq!(slugify("Données Sécurisées"), "donnees-securisees");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("database-api"), "Database Api");
        assert_eq!(title_case("react_hooks"), "React Hooks");
        assert_eq!(title_case("guides"), "Guides");
    }
}
