/// Separator characters shared by every case style: whitespace, hyphen, underscore.
pub fn is_separator(ch: char) -> bool {
    ch.is_whitespace() || ch == '-' || ch == '_'
}

/// Split a string into words.
///
/// Trims the input, then treats every maximal run of separator characters as a
/// single word boundary. Empty input yields no tokens; a single word yields
/// exactly one token with its casing untouched.
pub fn tokenize(input: &str) -> Vec<&str> {
    input
        .trim()
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .collect()
}
