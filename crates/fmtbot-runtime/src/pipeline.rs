use anyhow::{Context, Result};
use fmtbot_event::comment_event::IssueCommentEvent;
use fmtbot_event::trigger::{classify_comment, TriggerCommand};
use fmtbot_format::{format_file, FormatEngine};
use fmtbot_git::{GitDriver, StagedDiff};
use fmtbot_github::{GithubClient, RepoRef};

use crate::config::RuntimeConfig;
use crate::select::select_files;
use crate::validate::{validate_comment_event, SkipReason, ValidationOutcome};

/// Reaction posted on the triggering comment before any slow work begins.
pub const ACKNOWLEDGEMENT_REACTION: &str = "eyes";

/// Terminal notice for a run whose staged tree matched HEAD. A successful
/// format is communicated only through the pushed commit, never a comment.
pub const NO_CHANGES_COMMENT: &str =
    "The formatter ran over this pull request but found nothing to change.";

/// Only issue-comment events are handled; everything else is reported as an
/// error by the binary without failing the process.
pub fn supported_event(event_name: &str) -> bool {
    event_name.trim() == "issue_comment"
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Enumerates supported `RunOutcome` values. Every variant is a success;
/// dependency failures unwind as errors instead.
pub enum RunOutcome {
    Skipped(SkipReason),
    CommittedAndPushed { files: usize },
    ReportedNoChange,
}

impl RunOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skipped(_) => "skipped",
            Self::CommittedAndPushed { .. } => "committed_and_pushed",
            Self::ReportedNoChange => "reported_no_change",
        }
    }
}

/// Runs one comment event to completion: classify, validate, acknowledge,
/// select, format, stage, diff-check, then commit+push or post the single
/// "no changes" notice. At most one commit, one push, and one terminal
/// comment per invocation; every step depends on the side effects of the
/// previous one, so the order is fixed.
pub async fn run_comment_event(
    client: &GithubClient,
    repo: &RepoRef,
    git: &GitDriver,
    engine: &dyn FormatEngine,
    config: &RuntimeConfig,
    event: &IssueCommentEvent,
) -> Result<RunOutcome> {
    if classify_comment(event.comment_body(), &config.trigger_phrase) == TriggerCommand::None {
        tracing::debug!(
            comment_id = event.comment.id,
            "comment does not start with the trigger phrase"
        );
        return Ok(RunOutcome::Skipped(SkipReason::NoTrigger));
    }

    let context = match validate_comment_event(client, repo, event).await? {
        ValidationOutcome::Skip(reason) => {
            tracing::debug!(
                reason = reason.as_str(),
                issue = event.issue.number,
                "skipping comment event"
            );
            return Ok(RunOutcome::Skipped(reason));
        }
        ValidationOutcome::Proceed(context) => context,
    };

    client
        .create_comment_reaction(repo, event.comment.id, ACKNOWLEDGEMENT_REACTION)
        .await?;

    let files = select_files(client, repo, context.number, &config.file_suffix).await?;
    tracing::debug!(
        pull_request = context.number,
        head_ref = context.head_ref.as_str(),
        files = files.len(),
        "selected files for formatting"
    );

    git.fetch(&config.remote, &context.head_ref).await?;
    git.checkout(&context.head_ref).await?;
    git.configure_identity(&config.git_user_name, &config.git_user_email)
        .await?;

    for file in &files {
        let path = git.workdir().join(file);
        format_file(engine, &config.parser, &path)
            .await
            .with_context(|| format!("failed to format {file}"))?;
    }

    git.stage(&files).await?;
    match git.diff_cached().await? {
        StagedDiff::Changed => {
            git.commit(&config.commit_message).await?;
            git.push().await?;
            tracing::info!(
                pull_request = context.number,
                files = files.len(),
                "pushed formatting commit"
            );
            Ok(RunOutcome::CommittedAndPushed { files: files.len() })
        }
        StagedDiff::Clean => {
            client
                .create_issue_comment(repo, event.issue.number, NO_CHANGES_COMMENT)
                .await?;
            tracing::info!(pull_request = context.number, "formatter made no changes");
            Ok(RunOutcome::ReportedNoChange)
        }
    }
}
