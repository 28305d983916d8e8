use std::collections::HashSet;

/// Splits one line of user input into a lowercase word set. Tokens are
/// whitespace-separated; punctuation stays attached to its word.
pub fn words(line: &str) -> HashSet<String> {
    line.trim()
        .to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}
