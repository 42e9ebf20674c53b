//! Nice GenCSF output formatting.

use std::fmt;

use log;

const GENCSF_BANNER_LENGTH: usize = 79;

/// Logs a warning to the `gencsf-output` logger.
macro_rules! gencsf_warn {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::warn!(target: "gencsf-output", $fmt, $($($arg)*)?); }
}

/// Logs a main output line to the `gencsf-output` logger.
macro_rules! gencsf_output {
    ($fmt:expr $(, $($arg:tt)*)?) => { log::info!(target: "gencsf-output", $fmt, $($($arg)*)?); }
}

pub(crate) use {gencsf_output, gencsf_warn};

/// Logs a nicely formatted section title to the `gencsf-output` logger.
pub(crate) fn log_title(title: &str) {
    let length = title.chars().count().max(GENCSF_BANNER_LENGTH - 6);
    let bar = "─".repeat(length);
    gencsf_output!("┌──{bar}──┐");
    gencsf_output!("│§ {title:^length$} §│");
    gencsf_output!("└──{bar}──┘");
}

/// Logs a nicely formatted subtitle to the `gencsf-output` logger.
pub(crate) fn log_subtitle(subtitle: &str) {
    let length = subtitle.chars().count();
    let bar = "═".repeat(length);
    gencsf_output!("{}", subtitle);
    gencsf_output!("{}", bar);
}

/// Turns a boolean into a string of `yes` or `no`.
pub(crate) fn nice_bool(b: bool) -> String {
    if b {
        "yes".to_string()
    } else {
        "no".to_string()
    }
}

/// A trait for logging `GenCSF` outputs nicely.
pub(crate) trait GenCsfOutput: fmt::Debug + fmt::Display {
    /// Logs display output nicely.
    fn log_output_display(&self) {
        let lines = self.to_string();
        lines.lines().for_each(|line| {
            gencsf_output!("{line}");
        })
    }

    /// Logs debug output nicely.
    fn log_output_debug(&self) {
        let lines = format!("{self:?}");
        lines.lines().for_each(|line| {
            gencsf_output!("{line}");
        })
    }
}

// Blanket implementation
impl<T> GenCsfOutput for T where T: fmt::Debug + fmt::Display {}
