use anyhow::Result;
use fmtbot_event::comment_event::{CommentAction, IssueCommentEvent};
use fmtbot_github::{GithubClient, RepoRef};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Enumerates supported `SkipReason` values. Skips are data, not errors; a
/// skipped run exits successfully without touching the repository.
pub enum SkipReason {
    NoTrigger,
    CommentDeleted,
    NotAPullRequest,
    PullRequestNotOpen,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoTrigger => "no_trigger",
            Self::CommentDeleted => "comment_deleted",
            Self::NotAPullRequest => "not_a_pull_request",
            Self::PullRequestNotOpen => "pull_request_not_open",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The resolved entity confirming the comment's issue number refers to an
/// open pull request with a known source branch.
pub struct PullRequestContext {
    pub number: u64,
    pub head_ref: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Proceed(PullRequestContext),
    Skip(SkipReason),
}

/// Re-resolves the comment's issue through the API to decide whether it is an
/// open pull request. The event payload alone cannot make that distinction:
/// issues and pull requests share the same comment event shape.
pub async fn validate_comment_event(
    client: &GithubClient,
    repo: &RepoRef,
    event: &IssueCommentEvent,
) -> Result<ValidationOutcome> {
    if event.action == CommentAction::Deleted {
        return Ok(ValidationOutcome::Skip(SkipReason::CommentDeleted));
    }

    let issue = client.fetch_issue(repo, event.issue.number).await?;
    let Some(association) = issue.pull_request else {
        return Ok(ValidationOutcome::Skip(SkipReason::NotAPullRequest));
    };
    if issue.state != "open" {
        return Ok(ValidationOutcome::Skip(SkipReason::PullRequestNotOpen));
    }

    let pull = client.fetch_pull_request_by_url(&association.url).await?;
    Ok(ValidationOutcome::Proceed(PullRequestContext {
        number: pull.number,
        head_ref: pull.head.ref_name,
    }))
}
