use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
/// Enumerates supported `CommentAction` values.
pub enum CommentAction {
    Created,
    Edited,
    Deleted,
    #[serde(untagged)]
    Other(String),
}

impl CommentAction {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Created => "created",
            Self::Edited => "edited",
            Self::Deleted => "deleted",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventComment {
    pub id: u64,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EventIssue {
    pub number: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
/// One `issue_comment` event payload, deserialized once per invocation.
pub struct IssueCommentEvent {
    pub action: CommentAction,
    pub comment: EventComment,
    pub issue: EventIssue,
    /// Delta record present on edit events. Edits are processed like
    /// creations, so this is carried but not consulted.
    #[serde(default)]
    pub changes: Option<serde_json::Value>,
}

impl IssueCommentEvent {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("failed to decode issue_comment event payload")
    }

    /// A missing body reads as empty so it can never classify as a trigger.
    pub fn comment_body(&self) -> &str {
        self.comment.body.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{CommentAction, IssueCommentEvent};

    #[test]
    fn unit_from_json_decodes_created_comment_payload() {
        let event = IssueCommentEvent::from_json(
            r#"{
                "action": "created",
                "comment": { "id": 77, "body": "prettier, please!" },
                "issue": { "number": 9 }
            }"#,
        )
        .expect("decode event");
        assert_eq!(event.action, CommentAction::Created);
        assert_eq!(event.comment.id, 77);
        assert_eq!(event.issue.number, 9);
        assert_eq!(event.comment_body(), "prettier, please!");
    }

    #[test]
    fn unit_from_json_preserves_unknown_actions() {
        let event = IssueCommentEvent::from_json(
            r#"{
                "action": "pinned",
                "comment": { "id": 1, "body": null },
                "issue": { "number": 2 }
            }"#,
        )
        .expect("decode event");
        assert_eq!(event.action, CommentAction::Other("pinned".to_string()));
        assert_eq!(event.action.as_str(), "pinned");
    }

    #[test]
    fn regression_missing_comment_body_reads_as_empty() {
        let event = IssueCommentEvent::from_json(
            r#"{
                "action": "deleted",
                "comment": { "id": 3 },
                "issue": { "number": 4 }
            }"#,
        )
        .expect("decode event");
        assert_eq!(event.comment_body(), "");
    }

    #[test]
    fn unit_from_json_carries_the_edit_delta_record() {
        let event = IssueCommentEvent::from_json(
            r#"{
                "action": "edited",
                "changes": { "body": { "from": "old text" } },
                "comment": { "id": 5, "body": "new text" },
                "issue": { "number": 6 }
            }"#,
        )
        .expect("decode event");
        assert_eq!(event.action, CommentAction::Edited);
        assert!(event.changes.is_some());
    }

    #[test]
    fn regression_from_json_rejects_non_comment_payloads() {
        let error = IssueCommentEvent::from_json(r#"{"action": "opened"}"#)
            .expect_err("payload without comment should fail");
        assert!(error.to_string().contains("issue_comment event payload"));
    }
}
