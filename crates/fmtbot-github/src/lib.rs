//! GitHub API client for the fmtbot pipeline.
//! This crate provides the repository reference type, the changed-file model,
//! and the read/write calls the orchestrator depends on: issue and pull
//! request lookups, exhaustive paginated file listing, and reaction/comment
//! creation.

pub mod client;
pub mod repo_ref;
pub mod types;

pub use client::GithubClient;
pub use repo_ref::RepoRef;
pub use types::{ChangedFile, FileStatus, IssueLookup, PullRequestLookup};
