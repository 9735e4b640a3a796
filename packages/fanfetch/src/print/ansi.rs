use super::Lv;

pub(crate) const RESET: &str = "\x1b[0m";
pub(crate) const GRAY: &str = "\x1b[1;30m";
pub(crate) const MAGENTA: &str = "\x1b[1;35m";
const RED: &str = "\x1b[1;31m";
const GREEN: &str = "\x1b[1;32m";
const YELLOW: &str = "\x1b[1;33m";
const CYAN: &str = "\x1b[1;36m";

/// How the lines of one message level look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Style {
    /// The 2-character tag at the start of the line, like `E]`
    pub tag: &'static str,
    /// Color of the tag
    pub tag_color: &'static str,
    /// Color of the message
    pub text_color: &'static str,
}

impl Style {
    pub(crate) const fn of(lv: Lv) -> Self {
        let (tag, tag_color, text_color) = match lv {
            Lv::Error => ("E]", RED, RED),
            Lv::Hint => ("H]", CYAN, YELLOW),
            Lv::Print => (" :", GRAY, RESET),
            Lv::Warn => ("W]", YELLOW, YELLOW),
            Lv::Info => ("I]", GREEN, RESET),
            Lv::Debug => ("D]", GRAY, GRAY),
            Lv::Trace => ("*]", MAGENTA, MAGENTA),
        };
        Self {
            tag,
            tag_color,
            text_color,
        }
    }
}

/// Empty string if color is off
#[inline]
pub(crate) const fn paint(code: &'static str, use_color: bool) -> &'static str {
    if use_color { code } else { "" }
}
