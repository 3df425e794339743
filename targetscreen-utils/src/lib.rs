//! Shared utilities for targetscreen
//!
//! Screening table output, coloured terminal messages, progress bars and
//! thread-pool setup used by the command-line front end.

pub mod output;
pub mod parallel;
pub mod progress;
pub mod report;

// Re-export commonly used types
pub use output::{
    create_standard_table, error, format_duration, format_number, format_ratio, header_cell,
    info, success, warning,
};
pub use parallel::{configure_thread_pool, effective_threads};
pub use progress::{create_hidden_progress_bar, create_progress_bar, create_spinner};
pub use report::{
    ranked_hits_table, render_screening_table, write_screening_table, SCREENING_COLUMNS,
};
