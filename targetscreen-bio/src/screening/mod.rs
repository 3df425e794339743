pub mod conservation;
pub mod pipeline;
pub mod record;
pub mod window;

// Re-export commonly used types
pub use conservation::ConservationFilter;
pub use pipeline::{PipelineState, ScreeningPipeline};
pub use record::{ScreeningRecord, ScreeningReport};
pub use window::{expected_window_count, Candidate, SequenceWindower, Windows};
