use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
/// Enumerates supported `FileStatus` values.
pub enum FileStatus {
    Added,
    Modified,
    Removed,
    Renamed,
    #[serde(untagged)]
    Other(String),
}

#[derive(Debug, Clone, Deserialize, Serialize)]
/// One entry of a pull request's changed-file listing.
pub struct ChangedFile {
    pub filename: String,
    pub status: FileStatus,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestAssociation {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
/// The issue-by-number lookup response, used to re-resolve whether a comment
/// landed on a pull request. The payload shape alone cannot tell issues and
/// pull requests apart.
pub struct IssueLookup {
    pub state: String,
    #[serde(default)]
    pub pull_request: Option<PullRequestAssociation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestHead {
    #[serde(rename = "ref")]
    pub ref_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestLookup {
    pub number: u64,
    pub head: PullRequestHead,
}

#[cfg(test)]
mod tests {
    use super::{ChangedFile, FileStatus, IssueLookup, PullRequestLookup};

    #[test]
    fn unit_changed_file_decodes_known_and_unknown_statuses() {
        let file: ChangedFile =
            serde_json::from_str(r#"{"filename": "a.md", "status": "modified"}"#).expect("decode");
        assert_eq!(file.status, FileStatus::Modified);

        let file: ChangedFile =
            serde_json::from_str(r#"{"filename": "b.md", "status": "copied"}"#).expect("decode");
        assert_eq!(file.status, FileStatus::Other("copied".to_string()));
    }

    #[test]
    fn unit_issue_lookup_defaults_missing_pull_request_association() {
        let issue: IssueLookup = serde_json::from_str(r#"{"state": "open"}"#).expect("decode");
        assert!(issue.pull_request.is_none());
    }

    #[test]
    fn unit_pull_request_lookup_maps_head_ref_field() {
        let pull: PullRequestLookup = serde_json::from_str(
            r#"{"number": 12, "head": {"ref": "feature/tidy-docs"}}"#,
        )
        .expect("decode");
        assert_eq!(pull.number, 12);
        assert_eq!(pull.head.ref_name, "feature/tidy-docs");
    }
}
