//! Orchestration for the fmtbot pipeline: context validation, file
//! selection, and the single-run sequence from trigger comment to pushed
//! commit or "no changes" notice. Each invocation is a stateless unit of
//! work; nothing here survives across runs.

pub mod config;
pub mod pipeline;
pub mod select;
pub mod validate;

pub use config::RuntimeConfig;
pub use pipeline::{run_comment_event, supported_event, RunOutcome};
pub use validate::{PullRequestContext, SkipReason, ValidationOutcome};
