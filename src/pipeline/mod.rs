//! Orchestration of decode, transform and encode.
//!
//! [`PipelineDriver`] walks one image through the states of
//! [`PipelineState`] and returns a [`PipelineReport`] describing what it did.

mod driver;
mod state;

pub use driver::{PipelineDriver, PipelineReport, PngBranch};
pub use state::PipelineState;
