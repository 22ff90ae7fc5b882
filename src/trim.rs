use crate::classify::{Literal, classify_literal, trim_ws};
use crate::scanner::{Scan, ScanState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TrimAction {
    None,
    DroppedMember,
    DroppedElement,
    DroppedPartialEscape,
}

/// Outcome of the trailing-fragment pass: keep `input[..end]`, which leaves
/// the buffer in `state` (`InString` when an open literal survives and must
/// be closed by the assembler).
#[derive(Debug)]
pub(crate) struct Trim {
    pub end: usize,
    pub state: ScanState,
    pub action: TrimAction,
}

impl Trim {
    fn keep(input: &str, state: ScanState) -> Self {
        Trim {
            end: input.len(),
            state,
            action: TrimAction::None,
        }
    }

    fn rewind(scan: &Scan, action: TrimAction) -> Self {
        Trim {
            end: scan.rewind,
            state: ScanState::Default,
            action,
        }
    }
}

/// Decide whether the tail of the buffer is a complete token; if not,
/// truncate back to the last safe boundary (just after the most recent
/// unquoted `,` or container-opening bracket).
pub(crate) fn trim_trailing_fragment(input: &str, scan: &Scan) -> Trim {
    let container = scan.stack.last().copied();
    let in_object = container == Some(b'}');
    let key_position = in_object && matches!(scan.member_delim, b'{' | b',');

    if scan.state != ScanState::Default {
        // The buffer ends inside a string literal. In key position the
        // member cannot stand without its `: value`, so the whole pending
        // pair goes. In value position the open string is complete enough
        // to keep, minus a trailing partial escape (`\` alone, or `\u` with
        // fewer than four hex digits) that would not survive re-parsing.
        if key_position {
            return Trim::rewind(scan, TrimAction::DroppedMember);
        }
        let content = &input.as_bytes()[scan.string_open + 1..];
        return match trailing_escape_start(content) {
            Some(relative) => Trim {
                end: scan.string_open + 1 + relative,
                state: ScanState::InString,
                action: TrimAction::DroppedPartialEscape,
            },
            None => Trim::keep(input, ScanState::InString),
        };
    }

    let Some(container) = container else {
        // No open container: a complete document or a bare root scalar.
        // Trimming never applies to either.
        return Trim::keep(input, ScanState::Default);
    };

    let tail = trim_ws(&input[scan.tail_start..]);
    if tail.is_empty() {
        if scan.last_delim == b':' {
            // `"key":` with the value not yet started. A colon whose value
            // already closed (`"k": {...}`) leaves a closer as the last
            // delimiter instead, so the member survives.
            return Trim::rewind(scan, TrimAction::DroppedMember);
        }
        return Trim::keep(input, ScanState::Default);
    }

    let dropped = if container == b'}' {
        TrimAction::DroppedMember
    } else {
        TrimAction::DroppedElement
    };
    match classify_literal(tail) {
        Literal::Partial => Trim::rewind(scan, dropped),
        // A complete token in key position is still a key with no colon;
        // the pending pair cannot be closed into valid JSON.
        _ if key_position => Trim::rewind(scan, TrimAction::DroppedMember),
        _ => Trim::keep(input, ScanState::Default),
    }
}

/// Byte offset (relative to the string content) of a trailing incomplete
/// escape sequence, or `None` when the content can be closed as-is.
fn trailing_escape_start(content: &[u8]) -> Option<usize> {
    let mut i = 0;
    while i < content.len() {
        if content[i] != b'\\' {
            i += 1;
            continue;
        }
        let start = i;
        match content.get(i + 1) {
            // Lone backslash at end-of-input.
            None => return Some(start),
            Some(&b'u') => {
                let mut hex = i + 2;
                while hex < content.len()
                    && hex < i + 6
                    && content[hex].is_ascii_hexdigit()
                {
                    hex += 1;
                }
                if hex < i + 6 && hex == content.len() {
                    // Ran out of input mid-`\uXXXX`.
                    return Some(start);
                }
                i = hex;
            }
            Some(_) => i += 2,
        }
    }
    None
}
