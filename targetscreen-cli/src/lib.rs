//! Batch layer behind the `targetscreen` binary
//!
//! Reads comparison metadata, screens each comparison in both directions and
//! hands the resulting tables to a [`batch::ResultSink`].

pub mod batch;

pub use batch::{
    read_metadata, BatchOrchestrator, BatchSummary, Comparison, CsvDirectorySink, MemorySink,
    MetadataRow, ResultSink,
};
