use clap::ValueEnum;

/// Color Level settable with `--color` flag
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, derive_more::Display)]
pub enum ColorLevel {
    #[display("always")]
    Always,
    #[display("never")]
    Never,
    #[default]
    #[display("auto")]
    Auto,
}
impl ColorLevel {
    /// Get if color should be used for stdout.
    ///
    /// `Auto` honors `NO_COLOR` and falls back to checking if stdout is a terminal.
    pub fn is_colored_for_stdout(self) -> bool {
        use std::io::IsTerminal;
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                let no_color = std::env::var_os("NO_COLOR").is_some_and(|x| !x.is_empty());
                !no_color && std::io::stdout().is_terminal()
            }
        }
    }
}

/// Print level settable with `-v` and `-q` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PrintLevel {
    QuietQuiet,
    Quiet,
    Normal,
    Verbose,
    VerboseVerbose,
}
impl PrintLevel {
    const ALL: [Self; 5] = [
        Self::QuietQuiet,
        Self::Quiet,
        Self::Normal,
        Self::Verbose,
        Self::VerboseVerbose,
    ];

    /// Level from the number of `-v` and `-q` flags. Each count saturates at 2
    pub fn from_flags(verbose: u8, quiet: u8) -> Self {
        let index = 2 + usize::from(verbose.min(2)) - usize::from(quiet.min(2));
        Self::ALL[index]
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .unwrap_or(Self::Normal)
    }
}
impl From<PrintLevel> for log::LevelFilter {
    fn from(value: PrintLevel) -> Self {
        match value {
            PrintLevel::QuietQuiet => log::LevelFilter::Off,
            PrintLevel::Quiet => log::LevelFilter::Error,
            PrintLevel::Normal => log::LevelFilter::Info,
            PrintLevel::Verbose => log::LevelFilter::Debug,
            PrintLevel::VerboseVerbose => log::LevelFilter::Trace,
        }
    }
}

/// Level of a message/print event.
///
/// Shortcuts available at `fanfetch::lv`, e.g. `fanfetch::lv::E` is `Error`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lv {
    Error,
    Hint,
    Print,
    Warn,
    Info,
    Debug,
    Trace,
}
impl Lv {
    /// Check if the current print level can print this message level
    pub fn can_print(self, level: PrintLevel) -> bool {
        match self {
            Lv::Error | Lv::Hint | Lv::Print => level != PrintLevel::QuietQuiet,
            Lv::Warn | Lv::Info => level > PrintLevel::Quiet,
            Lv::Debug => level > PrintLevel::Normal,
            Lv::Trace => level == PrintLevel::VerboseVerbose,
        }
    }
}
impl From<log::Level> for Lv {
    fn from(value: log::Level) -> Self {
        match value {
            log::Level::Error => Self::Error,
            log::Level::Warn => Self::Warn,
            log::Level::Info => Self::Info,
            log::Level::Debug => Self::Debug,
            log::Level::Trace => Self::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_table() {
        assert!(!Lv::Print.can_print(PrintLevel::QuietQuiet));
        assert!(Lv::Print.can_print(PrintLevel::Quiet));
        assert!(!Lv::Info.can_print(PrintLevel::Quiet));
        assert!(Lv::Info.can_print(PrintLevel::Normal));
        assert!(!Lv::Debug.can_print(PrintLevel::Normal));
        assert!(Lv::Debug.can_print(PrintLevel::Verbose));
        assert!(!Lv::Trace.can_print(PrintLevel::Verbose));
        assert!(Lv::Trace.can_print(PrintLevel::VerboseVerbose));
    }

    #[test]
    fn flag_count_saturates() {
        assert_eq!(PrintLevel::from_flags(0, 0), PrintLevel::Normal);
        assert_eq!(PrintLevel::from_flags(1, 0), PrintLevel::Verbose);
        assert_eq!(PrintLevel::from_flags(0, 5), PrintLevel::QuietQuiet);
        assert_eq!(PrintLevel::from_flags(7, 0), PrintLevel::VerboseVerbose);
        assert_eq!(PrintLevel::from_flags(2, 1), PrintLevel::Verbose);
        assert_eq!(PrintLevel::from_u8(PrintLevel::Quiet as u8), PrintLevel::Quiet);
        assert_eq!(PrintLevel::from_u8(42), PrintLevel::Normal);
    }
}
