use thiserror::Error;

/// Failures surfaced by the prefix parser.
///
/// Both variants are returned to the immediate caller and never retried
/// internally. The expected caller policy is to keep the last successfully
/// parsed value and invoke the parser again on the next, larger buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A closing bracket outside any string literal did not match the
    /// innermost open container, so the input cannot be a prefix of
    /// well-formed JSON.
    #[error("closing {found:?} at byte {position} does not match the innermost open container")]
    StructuralMismatch {
        found: char,
        expected: Option<char>,
        position: usize,
    },

    /// The repaired buffer still failed to parse.
    #[error("repaired prefix is not valid JSON: {message}")]
    StillUnparseable { message: String, position: usize },
}

#[cfg(feature = "serde")]
impl ParseError {
    pub(crate) fn from_serde(err: &serde_json::Error) -> Self {
        ParseError::StillUnparseable {
            message: err.to_string(),
            // Column within the repaired single-line text; coarse but useful.
            position: err.column(),
        }
    }
}
