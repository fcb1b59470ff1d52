//! Pseudolocalization.
//!
//! The `pseudo` locale makes untranslated UI text easy to spot: every
//! translated string is rendered with a handful of letters swapped for
//! look-alike digits and wrapped in parentheses. Placeholders such as
//! `%(username)` are left alone so runtime substitution keeps working.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a placeholder token: `%(` identifier `)`.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"%\([a-zA-Z0-9_-]+\)").unwrap());

/// Substitution table applied outside placeholders. Case-sensitive.
const SUBSTITUTIONS: &[(char, char)] = &[('e', '3'), ('l', '1'), ('s', '5'), ('o', '0'), ('t', '7')];

fn substitute(c: char) -> char {
    SUBSTITUTIONS
        .iter()
        .find(|(from, _)| *from == c)
        .map_or(c, |(_, to)| *to)
}

/// Render `original` in the pseudolocale.
///
/// # Examples
///
/// ```
/// use langsync::core::pseudolocalize;
///
/// assert_eq!(pseudolocalize("Hello %(name)"), "(H3110 %(name))");
/// assert_eq!(pseudolocalize(""), "()");
/// ```
pub fn pseudolocalize(original: &str) -> String {
    let mut result = String::with_capacity(original.len() + 2);
    result.push('(');

    let mut last = 0;
    for placeholder in PLACEHOLDER.find_iter(original) {
        result.extend(original[last..placeholder.start()].chars().map(substitute));
        result.push_str(placeholder.as_str());
        last = placeholder.end();
    }
    result.extend(original[last..].chars().map(substitute));

    result.push(')');
    result
}
