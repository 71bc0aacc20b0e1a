//! Identifier quoting policy.
//!
//! PostgreSQL folds unquoted identifiers to lowercase, so any name that is
//! not a plain lowercase `[a-z0-9_]` word (or that collides with a reserved
//! word, or starts with a digit) must be wrapped in double quotes to survive
//! a round trip.

/// Reserved words that always require quoting, matched case-insensitively.
/// Closed list maintained here; extend as restore failures surface.
const RESERVED_WORDS: &[&str] = &[
    "select", "from", "where", "table", "create", "drop", "alter", "insert", "update", "delete",
    "user", "order", "group", "having", "limit", "offset", "join", "inner", "left", "right",
    "full", "union", "all", "distinct", "as", "on", "and", "or", "not", "null", "true", "false",
    "primary", "foreign", "key", "unique", "constraint", "index", "view", "sequence", "trigger",
    "function",
];

/// Decide whether an identifier needs double quotes in emitted SQL.
///
/// Total over all strings; never fails.
pub fn needs_quoting(identifier: &str) -> bool {
    if identifier.is_empty() {
        return true;
    }

    // Uppercase or special characters (anything outside [a-z0-9_])
    if !identifier
        .chars()
        .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_'))
    {
        return true;
    }

    // Reserved words; the charset check above already lowercased the match
    if RESERVED_WORDS.contains(&identifier) {
        return true;
    }

    // Leading digit
    identifier
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
}

/// Wrap an identifier in double quotes iff it needs them.
pub fn escape_identifier(identifier: &str) -> String {
    if needs_quoting(identifier) {
        format!("\"{}\"", identifier)
    } else {
        identifier.to_string()
    }
}
