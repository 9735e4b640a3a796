use std::cell::RefCell;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use super::{ColorLevel, Lv, PrintLevel};

static LOG_FILTER: OnceLock<env_filter::Filter> = OnceLock::new();
static USE_COLOR: AtomicBool = AtomicBool::new(true);
pub(crate) static PRINT_LEVEL: AtomicU8 = AtomicU8::new(PrintLevel::Normal as u8);

pub(crate) fn print_level() -> PrintLevel {
    PrintLevel::from_u8(PRINT_LEVEL.load(Ordering::Acquire))
}

/// Set global print options. This is usually called from clap args
///
/// If `RUST_LOG` is set, it filters records from the `log` macros.
/// The print level still decides `print!` and `hint!`.
pub fn init_print_options(color: ColorLevel, level: PrintLevel) {
    let log_level = if let Ok(value) = std::env::var("RUST_LOG")
        && !value.is_empty()
    {
        let mut builder = env_filter::Builder::new();
        let filter = builder.parse(&value).build();
        let log_level = filter.filter();
        let _ = LOG_FILTER.set(filter);
        log_level.max(level.into())
    } else {
        level.into()
    };
    log::set_max_level(log_level);
    let use_color = color.is_colored_for_stdout();
    USE_COLOR.store(use_color, Ordering::Release);
    if let Ok(mut printer) = super::PRINTER.lock() {
        printer.set_colors(use_color);
    }
    PRINT_LEVEL.store(level as u8, Ordering::Release);

    struct LogImpl;
    impl log::Log for LogImpl {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            match LOG_FILTER.get() {
                Some(filter) => filter.enabled(metadata),
                None => Lv::from(metadata.level()).can_print(print_level()),
            }
        }

        fn log(&self, record: &log::Record) {
            if !self.enabled(record.metadata()) {
                return;
            }
            let typ: Lv = record.level().into();
            let message = record.args().to_string();
            if let Ok(mut printer) = super::PRINTER.lock() {
                printer.print_message(typ, &message);
            }
        }

        fn flush(&self) {}
    }

    let _ = log::set_logger(&LogImpl);
}

/// Quickly initialize logging for tests, without color
///
/// `flags` is spelled like the command line flags without the dashes:
/// `"qq"`, `"q"`, `""`, `"v"` or `"vv"`.
pub fn log_init(flags: &str) {
    let count = |c| flags.chars().filter(|x| *x == c).count().min(2) as u8;
    init_print_options(ColorLevel::Never, PrintLevel::from_flags(count('v'), count('q')));
}

/// Check if the logging level is enabled
pub fn log_enabled(lv: Lv) -> bool {
    lv.can_print(print_level())
}

/// Get if color printing is enabled
pub fn color_enabled() -> bool {
    USE_COLOR.load(Ordering::Acquire)
}

thread_local! {
    pub(crate) static THREAD_NAME: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Set the name to show up in messages printed by the current thread
pub fn set_thread_print_name(name: &str) {
    THREAD_NAME.with_borrow_mut(|x| *x = Some(name.to_string()))
}
