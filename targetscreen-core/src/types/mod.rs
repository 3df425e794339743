/// Core types shared across all targetscreen crates
pub mod format;

pub use format::TableFormat;
