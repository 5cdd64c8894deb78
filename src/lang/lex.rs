use super::ast::Literal;

/// Split a source line into its keyword and argument tail.
/// Returns `None` for blank lines.
pub fn lex(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_matches(is_qu_whitespace);
    if s.is_empty() {
        return None;
    }
    match s.find(is_qu_whitespace) {
        Some(pos) => Some((&s[..pos], s[pos..].trim_start_matches(is_qu_whitespace))),
        None => Some((s, "")),
    }
}

pub fn is_qu_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\r'
}

/// Lex a quoted string or a bare signed integer.
pub fn literal(s: &str) -> Option<Literal> {
    if s.starts_with('"') {
        return string(s).map(Literal::String);
    }
    integer(s).map(Literal::Integer)
}

pub fn integer(s: &str) -> Option<i64> {
    s.parse::<i64>().ok()
}

fn string(s: &str) -> Option<String> {
    if s.len() < 2 || !s.ends_with('"') {
        return None;
    }
    Some(unescape(&s[1..s.len() - 1]))
}

fn unescape(s: &str) -> String {
    s.replace("\\n", "\n")
}
