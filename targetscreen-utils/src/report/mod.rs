//! Screening result tables: delimited files for persistence and ranked
//! terminal views for interactive runs.

pub mod delimited;
pub mod table;

pub use delimited::{render_screening_table, write_screening_table, SCREENING_COLUMNS};
pub use table::ranked_hits_table;
