//! In-memory session stores.
//!
//! Nothing here outlives the process; these are the auxiliary collections the
//! calculator session owns next to its arithmetic state.
//!
//! # Modules
//!
//! - `history`: Most-recent-first calculation log with a fixed cap
//! - `samples`: Sample set behind the statistics buttons
//! - `matrices`: The `A` and `B` matrix slots

pub mod history;
pub mod matrices;
pub mod samples;

pub use history::{History, HistoryEntry, DEFAULT_HISTORY_LIMIT};
pub use matrices::MatrixSlots;
pub use samples::SampleSet;
