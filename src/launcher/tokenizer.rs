//! Shell-like splitting of the configured command line.

/// Split `line` into arguments.
///
/// Whitespace separates arguments unless it sits inside a `"..."` or `'...'`
/// region. Only the delimiter that opened the region closes it; the other
/// quote kind is kept as a literal character. Quote characters that open or
/// close a region are dropped. An unterminated region still yields its text.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut open_quote: Option<char> = None;

    for c in line.chars() {
        match (c, open_quote) {
            (c, None) if c.is_whitespace() => flush(&mut current, &mut tokens),
            ('"' | '\'', None) => open_quote = Some(c),
            (c, Some(quote)) if c == quote => open_quote = None,
            (c, _) => current.push(c),
        }
    }
    flush(&mut current, &mut tokens);

    tokens
}

fn flush(current: &mut String, tokens: &mut Vec<String>) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}
