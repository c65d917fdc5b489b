use std::fmt::Display;

/// Maximum identifier length accepted by MySQL for database names
/// (https://dev.mysql.com/doc/refman/8.0/en/identifier-length.html)
pub const MAX_DATABASE_NAME_LEN: usize = 63;

/// Longest prefix kept when the derived name would exceed the limit
pub const MAX_PREFIX_LEN: usize = MAX_DATABASE_NAME_LEN / 2;

/// The name of a temporary database
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatabaseName(String);

impl DatabaseName {
    /// Get the database name as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for DatabaseName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DatabaseName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_ident_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '$' || c == '_'
}

/// Replace every character outside `[0-9a-zA-Z$_]` with `_`.
///
/// The result is always safe to interpolate between backticks.
pub fn sanitize_suffix(suffix: &str) -> String {
    suffix
        .chars()
        .map(|c| if is_ident_safe(c) { c } else { '_' })
        .collect()
}

/// Join `prefix` and `suffix` with `_`, truncating both to fit
/// [`MAX_DATABASE_NAME_LEN`].
///
/// The prefix is cut to at most [`MAX_PREFIX_LEN`] bytes, then the suffix
/// loses characters from its head so its tail survives.
pub fn derive_name(prefix: &str, suffix: &str) -> DatabaseName {
    let prefix = truncate_end(prefix, MAX_PREFIX_LEN);
    let overflow = (prefix.len() + 1 + suffix.len()).saturating_sub(MAX_DATABASE_NAME_LEN);
    let suffix = truncate_start(suffix, overflow);
    DatabaseName(format!("{}_{}", prefix, suffix))
}

/// Keep at most `max` bytes from the start of `s`
fn truncate_end(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Remove at least `count` bytes from the start of `s`
fn truncate_start(s: &str, count: usize) -> &str {
    if count >= s.len() {
        return "";
    }
    let mut start = count;
    while !s.is_char_boundary(start) {
        start += 1;
    }
    &s[start..]
}
