#[inline]
pub(crate) fn is_json_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

#[inline]
pub(crate) fn trim_ws(s: &str) -> &str {
    s.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r'))
}

/// Classification of the dangling token at the tail of a buffer.
///
/// `Partial` covers everything that is not yet a complete scalar: a prefix
/// of a keyword (`tr`), a number missing a mandatory sub-part (`-`, `1.`,
/// `2e`), an unterminated quoted string, or plain garbage. Anything
/// `Partial` gets discarded by the trimmer; the other variants stand on
/// their own and are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Literal {
    True,
    False,
    Null,
    Number,
    Str,
    Partial,
}

pub(crate) fn classify_literal(token: &str) -> Literal {
    match token {
        "true" => Literal::True,
        "false" => Literal::False,
        "null" => Literal::Null,
        _ => {
            let bytes = token.as_bytes();
            if bytes.first() == Some(&b'"') {
                if is_closed_string(bytes) {
                    Literal::Str
                } else {
                    Literal::Partial
                }
            } else if is_complete_number(bytes) {
                Literal::Number
            } else {
                Literal::Partial
            }
        }
    }
}

/// A quoted string is complete when an unescaped closing quote is the very
/// last byte of the token.
fn is_closed_string(bytes: &[u8]) -> bool {
    let mut i = 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return i == bytes.len() - 1,
            _ => i += 1,
        }
    }
    false
}

/// Strict JSON number grammar: `-? (0 | [1-9][0-9]*) ('.' [0-9]+)?
/// ([eE] [+-]? [0-9]+)?`, with every sub-part fully present.
fn is_complete_number(bytes: &[u8]) -> bool {
    let mut i = 0;
    if bytes.first() == Some(&b'-') {
        i = 1;
    }
    match bytes.get(i) {
        Some(&b'0') => i += 1,
        Some(&b) if b.is_ascii_digit() => {
            while bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
                i += 1;
            }
        }
        _ => return false,
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        let fraction_start = i;
        while bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
            i += 1;
        }
        if i == fraction_start {
            return false;
        }
    }
    if matches!(bytes.get(i), Some(&(b'e' | b'E'))) {
        i += 1;
        if matches!(bytes.get(i), Some(&(b'+' | b'-'))) {
            i += 1;
        }
        let exponent_start = i;
        while bytes.get(i).is_some_and(|b| b.is_ascii_digit()) {
            i += 1;
        }
        if i == exponent_start {
            return false;
        }
    }
    i == bytes.len()
}
