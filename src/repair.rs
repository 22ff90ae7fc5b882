use crate::classify::{is_json_ws, trim_ws};
use crate::error::ParseError;
use crate::options::Options;
use crate::scanner::{self, ScanState};
use crate::trim::{TrimAction, trim_trailing_fragment};

/// One repair the pipeline performed on the buffer.
///
/// Positions are byte offsets into the original input; `context` is a
/// snippet of the surrounding text, sized by `Options::log_context_window`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepairLogEntry {
    pub position: usize,
    pub message: &'static str,
    pub context: String,
}

struct Logger {
    enable: bool,
    window: usize,
    entries: Vec<RepairLogEntry>,
}

impl Logger {
    fn disabled() -> Self {
        Self {
            enable: false,
            window: 0,
            entries: Vec::new(),
        }
    }

    fn enabled(window: usize) -> Self {
        Self {
            enable: true,
            window,
            entries: Vec::new(),
        }
    }

    #[inline]
    fn log(&mut self, input: &str, position: usize, message: &'static str) {
        if self.enable {
            self.entries.push(RepairLogEntry {
                position,
                message,
                context: context_snippet(input, position, self.window),
            });
        }
    }
}

fn context_snippet(input: &str, position: usize, window: usize) -> String {
    let mut start = position.saturating_sub(window);
    let mut end = (position + window).min(input.len());
    while start > 0 && !input.is_char_boundary(start) {
        start -= 1;
    }
    while end < input.len() && !input.is_char_boundary(end) {
        end += 1;
    }
    input[start..end].to_string()
}

pub(crate) fn repair_to_string(input: &str, opts: &Options) -> Result<String, ParseError> {
    let mut logger = Logger::disabled();
    repair_impl(input, opts, &mut logger)
}

pub(crate) fn repair_to_string_with_log(
    input: &str,
    opts: &Options,
) -> Result<(String, Vec<RepairLogEntry>), ParseError> {
    let mut logger = Logger::enabled(opts.log_context_window);
    let out = repair_impl(input, opts, &mut logger)?;
    Ok((out, logger.entries))
}

fn repair_impl(input: &str, opts: &Options, logger: &mut Logger) -> Result<String, ParseError> {
    if trim_ws(input).is_empty() {
        return Ok("{}".to_string());
    }

    let scan = scanner::scan(input, opts)?;
    let cut = trim_trailing_fragment(input, &scan);
    match cut.action {
        TrimAction::DroppedMember => logger.log(input, cut.end, "dropped incomplete object member"),
        TrimAction::DroppedElement => logger.log(input, cut.end, "dropped incomplete array element"),
        TrimAction::DroppedPartialEscape => {
            logger.log(input, cut.end, "dropped partial string escape");
        }
        TrimAction::None => {}
    }

    let kept = &input[..cut.end];
    let mut out = String::with_capacity(kept.len() + scan.stack.len() + 1);
    out.push_str(kept);

    if cut.state != ScanState::Default {
        out.push('"');
        logger.log(input, cut.end, "closed open string literal");
    }

    // A dangling comma ahead of the closing brackets is illegal JSON.
    let mut last = out.len();
    while last > 0 && is_json_ws(out.as_bytes()[last - 1]) {
        last -= 1;
    }
    if last > 0 && out.as_bytes()[last - 1] == b',' {
        out.truncate(last - 1);
        logger.log(input, last - 1, "removed trailing comma");
    }

    if !scan.stack.is_empty() {
        logger.log(input, input.len(), "appended closing brackets");
        for &closer in scan.stack.iter().rev() {
            out.push(closer as char);
        }
    }
    Ok(out)
}
