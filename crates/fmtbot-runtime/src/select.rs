use anyhow::Result;
use fmtbot_github::{ChangedFile, FileStatus, GithubClient, RepoRef};

/// Keeps added/modified files whose name ends with the configured suffix,
/// preserving the platform's returned order. Suffix matching is
/// case-sensitive.
pub fn filter_changed_files(files: &[ChangedFile], suffix: &str) -> Vec<String> {
    files
        .iter()
        .filter(|file| matches!(file.status, FileStatus::Added | FileStatus::Modified))
        .filter(|file| file.filename.ends_with(suffix))
        .map(|file| file.filename.clone())
        .collect()
}

/// Retrieves the pull request's complete changed-file list and applies the
/// selection policy. An empty selection is a normal outcome, not an error.
pub async fn select_files(
    client: &GithubClient,
    repo: &RepoRef,
    pr_number: u64,
    suffix: &str,
) -> Result<Vec<String>> {
    let files = client.list_pull_request_files(repo, pr_number).await?;
    Ok(filter_changed_files(&files, suffix))
}
