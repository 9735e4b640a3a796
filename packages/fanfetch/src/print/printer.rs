use std::io::{IsTerminal as _, Write as _};
use std::sync::{LazyLock, Mutex};

use super::Lv;
use super::ansi::{self, Style};

/// Print something
///
/// This is similar to `info`, but unlike info, this message will still log with `-q`.
#[macro_export]
macro_rules! print {
    ($($fmt_args:tt)*) => {{
        $crate::__priv::__print_with_level($crate::lv::P, format_args!($($fmt_args)*));
    }}
}
/// Logs a hint message
#[macro_export]
macro_rules! hint {
    ($($fmt_args:tt)*) => {{
        $crate::__priv::__print_with_level($crate::lv::H, format_args!($($fmt_args)*));
    }}
}

/// Internal print function for macros
pub fn __print_with_level(lv: Lv, message: std::fmt::Arguments<'_>) {
    if !lv.can_print(super::print_level()) {
        return;
    }
    let message = format!("{message}");
    if let Ok(mut printer) = PRINTER.lock() {
        printer.print_message(lv, &message);
    }
}

pub(crate) static PRINTER: LazyLock<Mutex<Printer>> =
    LazyLock::new(|| Mutex::new(Printer::new(std::io::stdout().is_terminal())));

/// Global printer state
///
/// Every message is formatted into `buffer` and written with one call
/// while the lock is held, so lines from different threads never interleave
/// mid-line.
pub(crate) struct Printer {
    use_color: bool,
    buffer: String,
}

impl Printer {
    fn new(use_color: bool) -> Self {
        Self {
            use_color,
            buffer: String::new(),
        }
    }

    pub(crate) fn set_colors(&mut self, use_color: bool) {
        self.use_color = use_color;
    }

    /// Format the message into the buffer
    ///
    /// ```text
    /// I][fetch-3] first line
    ///  | second line
    /// ```
    fn format(&mut self, lv: Lv, message: &str) {
        let color = |code| ansi::paint(code, self.use_color);
        let style = Style::of(lv);
        let buf = &mut self.buffer;
        buf.clear();
        buf.push_str(color(style.tag_color));
        buf.push_str(style.tag);
        super::THREAD_NAME.with_borrow(|name| {
            if let Some(name) = name {
                buf.push_str(color(ansi::MAGENTA));
                buf.push('[');
                buf.push_str(name);
                buf.push(']');
            }
        });
        buf.push_str(color(style.text_color));
        for (i, line) in message.lines().enumerate() {
            if i > 0 {
                buf.push('\n');
                buf.push_str(color(ansi::GRAY));
                buf.push_str(" |");
                buf.push_str(color(style.text_color));
            }
            buf.push(' ');
            buf.push_str(line);
        }
        buf.push_str(color(ansi::RESET));
        buf.push('\n');
    }

    /// Format and print the message
    pub(crate) fn print_message(&mut self, lv: Lv, message: &str) {
        self.format(lv, message);
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(self.buffer.as_bytes());
        let _ = stdout.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(lv: Lv, message: &str) -> String {
        let mut printer = Printer::new(false);
        printer.format(lv, message);
        printer.buffer
    }

    #[test]
    fn tag_per_level() {
        assert_eq!(format(Lv::Print, "https://x/posts Done"), " : https://x/posts Done\n");
        assert_eq!(format(Lv::Error, "fatal"), "E] fatal\n");
        assert_eq!(format(Lv::Trace, "body"), "*] body\n");
    }

    #[test]
    fn continuation_lines() {
        assert_eq!(
            format(Lv::Error, "fatal: a\n\nCaused by:"),
            "E] fatal: a\n | \n | Caused by:\n"
        );
    }

    #[test]
    fn thread_name_prefix() {
        std::thread::spawn(|| {
            crate::set_thread_print_name("fetch-3");
            assert_eq!(format(Lv::Info, "hello"), "I][fetch-3] hello\n");
        })
        .join()
        .unwrap();
    }

    #[test]
    fn colored() {
        let mut printer = Printer::new(true);
        printer.format(Lv::Warn, "careful");
        assert_eq!(printer.buffer, "\x1b[1;33mW]\x1b[1;33m careful\x1b[0m\n");
    }
}
