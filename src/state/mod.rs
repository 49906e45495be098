//! State module for tracking crawl progress
//!
//! # Components
//!
//! - `RunStatus`: lifecycle of one crawl run (idle, running, completed, failed, cancelled)
//! - `ProgressState`: done/total snapshot handed to the caller after each page
//! - `ProgressSink`: where those snapshots go

mod progress;
mod run_state;

// Re-export main types
pub use progress::{NoProgress, ProgressSink, ProgressState};
pub use run_state::RunStatus;
