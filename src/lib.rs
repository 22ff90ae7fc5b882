mod classify;
pub mod error;
#[cfg(feature = "serde")]
mod generation;
pub mod options;
mod repair;
mod scanner;
#[cfg(feature = "serde")]
pub mod stream;
mod trim;

pub use error::ParseError;
#[cfg(feature = "serde")]
pub use generation::Generation;
pub use options::Options;
pub use repair::RepairLogEntry;
#[cfg(feature = "serde")]
pub use stream::StreamParser;

/// Repair a prefix of a JSON document's serialization into a complete,
/// parseable JSON text: the dangling tail token is trimmed, an open string
/// literal is closed, a trailing comma is stripped, and the still-open
/// containers are closed in nesting order. Empty or whitespace-only input
/// yields the empty object.
pub fn repair_prefix(input: &str, opts: &Options) -> Result<String, ParseError> {
    repair::repair_to_string(input, opts)
}

/// Repair a prefix and return both the repaired text and a log of the
/// repairs that were applied.
pub fn repair_prefix_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<RepairLogEntry>), ParseError> {
    repair::repair_to_string_with_log(input, opts)
}

#[cfg(feature = "serde")]
/// Repair a prefix and parse the result into `serde_json::Value`.
///
/// A failure is "not yet resolvable", never "empty": callers keep their
/// last good value and retry on the next, larger buffer.
pub fn parse_partial(input: &str, opts: &Options) -> Result<serde_json::Value, ParseError> {
    let repaired = repair::repair_to_string(input, opts)?;
    serde_json::from_str(&repaired).map_err(|e| ParseError::from_serde(&e))
}

#[cfg(test)]
mod tests;
