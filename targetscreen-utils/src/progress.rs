//! Progress bars with the workspace's standard styling
use crate::output::format_number;
use indicatif::{ProgressBar, ProgressState, ProgressStyle};
use std::fmt::Write;

const BAR_TEMPLATE: &str = "{msg} [{bar:40.cyan/blue}] {human_pos}/{human_len} ({eta_short})";

/// Create a standard progress bar; a zero total with no message gives a hidden bar
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    if total == 0 && message.is_empty() {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::default_bar()
        .template(BAR_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━─")
        .with_key("human_pos", |state: &ProgressState, w: &mut dyn Write| {
            let _ = write!(w, "{:>7}", format_number(state.pos()));
        })
        .with_key("human_len", |state: &ProgressState, w: &mut dyn Write| {
            let _ = write!(w, "{}", format_number(state.len().unwrap_or(0)));
        })
        .with_key("eta_short", |state: &ProgressState, w: &mut dyn Write| {
            let secs = state.eta().as_secs();
            if state.pos() == 0 {
                let _ = write!(w, "calculating");
            } else if secs == 0 {
                let _ = write!(w, "-");
            } else {
                let _ = write!(w, "{}", crate::output::format_duration(secs));
            }
        });

    let pb = ProgressBar::new(total);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

/// Create a spinner with consistent styling
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb
}

/// Used in quiet mode
pub fn create_hidden_progress_bar() -> ProgressBar {
    ProgressBar::hidden()
}
