use serde_json::Value;

use crate::error::ParseError;
use crate::options::Options;
use crate::parse_partial;

/// Accumulator for a token-by-token model stream.
///
/// Owns the growing text buffer and the last successfully parsed snapshot.
/// Each `push` re-parses the whole buffer; a failed parse leaves the
/// snapshot untouched, since mid-token chunk boundaries routinely produce
/// transient failures that resolve themselves on the next delta.
pub struct StreamParser {
    opts: Options,
    buf: String,
    last_good: Option<Value>,
}

impl StreamParser {
    pub fn new(opts: Options) -> Self {
        Self {
            opts,
            buf: String::new(),
            last_good: None,
        }
    }

    /// Append a delta and re-parse. Returns the freshest snapshot, which is
    /// the previous one when this buffer boundary landed mid-token.
    pub fn push(&mut self, delta: &str) -> Option<&Value> {
        self.buf.push_str(delta);
        if let Ok(value) = parse_partial(&self.buf, &self.opts) {
            self.last_good = Some(value);
        }
        self.last_good.as_ref()
    }

    /// The last successfully parsed snapshot, if any chunk parsed so far.
    pub fn value(&self) -> Option<&Value> {
        self.last_good.as_ref()
    }

    /// The full text accumulated so far.
    pub fn buffer(&self) -> &str {
        &self.buf
    }

    /// Parse the completed stream. Unlike mid-stream failures, an error
    /// here is final and should be surfaced to the user.
    pub fn finish(self) -> Result<Value, ParseError> {
        parse_partial(&self.buf, &self.opts)
    }
}
