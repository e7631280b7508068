//! Config field path used in diagnostics.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path of a config field, e.g. `site.url` or `theme.navbar.items[2].to`.
///
/// Static paths cost nothing; indexed paths into arrays of tables are built
/// with [`FieldPath::indexed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Build the path of a field inside the `index`-th element of an array.
    ///
    /// `FieldPath::indexed("theme.navbar.items", 2, "to")` -> `theme.navbar.items[2].to`
    pub fn indexed(array: &str, index: usize, field: &str) -> Self {
        if field.is_empty() {
            Self(Cow::Owned(format!("{array}[{index}]")))
        } else {
            Self(Cow::Owned(format!("{array}[{index}].{field}")))
        }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
