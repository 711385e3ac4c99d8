use once_cell::sync::Lazy;
use regex::Regex;

// Whitespace as browsers see it: no U+0085, but U+FEFF counts.
const QUERY_WHITESPACE_CLASS: &str =
    r"[\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}]";

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("{}+", QUERY_WHITESPACE_CLASS)).expect("valid regex")
});

pub fn is_query_whitespace(character: char) -> bool {
    matches!(
        character,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn trim_query(text: &str) -> &str {
    text.trim_matches(is_query_whitespace)
}

/// Lower-cases the query and collapses each whitespace run into one hyphen.
pub fn slugify(query: &str) -> String {
    WHITESPACE_RUN.replace_all(query, "-").to_lowercase()
}
