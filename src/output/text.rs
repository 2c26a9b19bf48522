use std::fmt::Write;

use crate::checker::ViolationMap;

use super::ReportFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RESET: &str = "\x1b[0m";
}

/// Appended to the status line when nothing was found.
pub const SUCCESS_INDICATOR: &str = "ok";

/// Indentation in front of each message.
pub const MESSAGE_MARKER: &str = "  ";

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, violations: &ViolationMap) -> String {
        if violations.is_empty() {
            return format!(" {}\n", self.colorize(SUCCESS_INDICATOR, ansi::GREEN));
        }

        let mut output = String::from("\n");
        for (filename, messages) in violations {
            let _ = writeln!(output, "{}", self.colorize(filename, ansi::RED));
            for message in messages {
                let _ = writeln!(output, "{MESSAGE_MARKER}{message}");
            }
        }
        output
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
