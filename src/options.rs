#[derive(Clone, Debug)]
pub struct Options {
    /// Pop the most recent matching closer anywhere in the bracket stack
    /// instead of requiring a top-of-stack match. This reproduces the looser
    /// matching of earlier releases, which can silently mis-pop in mixed
    /// nestings; with it disabled a mismatched closer fails fast with
    /// `ParseError::StructuralMismatch`.
    pub legacy_bracket_matching: bool,
    /// Enable repair logging. Use `repair_prefix_with_log` to retrieve logs.
    pub logging: bool,
    /// Context window size used when building log context snippets.
    /// Controls how many bytes are captured on both sides of the position.
    pub log_context_window: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            legacy_bracket_matching: false,
            logging: false,
            log_context_window: 10,
        }
    }
}
