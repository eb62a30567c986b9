//! Pure event-domain helpers for the fmtbot pipeline.
//! This crate provides the issue-comment payload model and the trigger
//! classifier consumed by the runtime crate. Nothing here performs I/O.

pub mod comment_event;
pub mod trigger;
