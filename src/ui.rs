use crate::constants::{SPINNER_FRAMES, SPINNER_TICK_MILLIS};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// write a line to a stream, optionally through a `colored` style method
#[doc(hidden)]
#[macro_export]
macro_rules! emit {
    ($stream:ident, $style:ident, $($arg:tt)*) => {{
        use colored::Colorize;
        use std::io::Write;
        let _ = writeln!(std::io::$stream(), "{}", format!($($arg)*).$style());
    }};
    ($stream:ident, $($arg:tt)*) => {{
        use std::io::Write;
        let _ = writeln!(std::io::$stream(), $($arg)*);
    }};
}

/// yellow, stderr
#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => { $crate::emit!(stderr, yellow, $($arg)*) };
}

/// red, stderr
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => { $crate::emit!(stderr, red, $($arg)*) };
}

/// dimmed, stderr
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => { $crate::emit!(stderr, dimmed, $($arg)*) };
}

/// plain, stdout
#[macro_export]
macro_rules! info {
    () => { $crate::emit!(stdout, "") };
    ($($arg:tt)*) => { $crate::emit!(stdout, $($arg)*) };
}

/// animated spinner shown while waiting on the api
///
/// cleared from the terminal when dropped, so every exit path (early return,
/// `?`, unwind) removes it. indicatif hides it when stderr is not a terminal.
pub struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn start(message: &'static str) -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .tick_strings(&spinner_ticks())
            .template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.set_message(message);
        bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MILLIS));
        Self { bar }
    }

    #[cfg(test)]
    fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.bar.finish_and_clear();
    }
}

// indicatif uses the last tick string as the "finished" frame
fn spinner_ticks() -> Vec<&'static str> {
    let mut ticks = SPINNER_FRAMES.to_vec();
    ticks.push(" ");
    ticks
}
