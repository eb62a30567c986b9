use anyhow::{bail, Context, Result};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::repo_ref::RepoRef;
use crate::types::{ChangedFile, IssueLookup, PullRequestLookup};

const PAGE_SIZE: usize = 100;

#[derive(Clone)]
/// Authenticated GitHub API client. Every call is a single attempt; failures
/// propagate to the caller and abort the run.
pub struct GithubClient {
    http: reqwest::Client,
    api_base: String,
}

impl GithubClient {
    pub fn new(api_base: String, token: String) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static("fmtbot"),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            reqwest::header::HeaderValue::from_static("2022-11-28"),
        );
        let auth_header = format!("Bearer {}", token.trim());
        headers.insert(
            reqwest::header::AUTHORIZATION,
            reqwest::header::HeaderValue::from_str(&auth_header)
                .context("invalid github authorization header")?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("failed to create github api client")?;
        Ok(Self {
            http: client,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch_issue(&self, repo: &RepoRef, issue_number: u64) -> Result<IssueLookup> {
        self.request_json("fetch issue", || {
            self.http.get(format!(
                "{}/repos/{}/{}/issues/{}",
                self.api_base, repo.owner, repo.name, issue_number
            ))
        })
        .await
    }

    /// Follows the `pull_request.url` association returned by the issue
    /// lookup; the URL is absolute and already carries the API base.
    pub async fn fetch_pull_request_by_url(&self, url: &str) -> Result<PullRequestLookup> {
        let url = url.to_string();
        self.request_json("fetch pull request", || self.http.get(url.clone()))
            .await
    }

    /// Lists every changed file of a pull request, following pagination until
    /// a short page so large diffs are never truncated.
    pub async fn list_pull_request_files(
        &self,
        repo: &RepoRef,
        pr_number: u64,
    ) -> Result<Vec<ChangedFile>> {
        let mut page = 1_u32;
        let mut rows = Vec::new();
        loop {
            let page_value = page.to_string();
            let chunk: Vec<ChangedFile> = self
                .request_json("list pull request files", || {
                    self.http
                        .get(format!(
                            "{}/repos/{}/{}/pulls/{}/files",
                            self.api_base, repo.owner, repo.name, pr_number
                        ))
                        .query(&[
                            ("per_page", PAGE_SIZE.to_string().as_str()),
                            ("page", page_value.as_str()),
                        ])
                })
                .await?;
            let chunk_len = chunk.len();
            rows.extend(chunk);
            if chunk_len < PAGE_SIZE {
                break;
            }
            page = page.saturating_add(1);
        }
        Ok(rows)
    }

    /// Posts the acknowledgement reaction on the triggering comment.
    pub async fn create_comment_reaction(
        &self,
        repo: &RepoRef,
        comment_id: u64,
        content: &str,
    ) -> Result<()> {
        let payload = json!({ "content": content });
        self.request_unit("create comment reaction", || {
            self.http
                .post(format!(
                    "{}/repos/{}/{}/issues/comments/{}/reactions",
                    self.api_base, repo.owner, repo.name, comment_id
                ))
                .json(&payload)
        })
        .await
    }

    pub async fn create_issue_comment(
        &self,
        repo: &RepoRef,
        issue_number: u64,
        body: &str,
    ) -> Result<()> {
        let payload = json!({ "body": body });
        self.request_unit("create issue comment", || {
            self.http
                .post(format!(
                    "{}/repos/{}/{}/issues/{}/comments",
                    self.api_base, repo.owner, repo.name, issue_number
                ))
                .json(&payload)
        })
        .await
    }

    async fn request_json<T, F>(&self, operation: &str, request_builder: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> reqwest::RequestBuilder,
    {
        let response = request_builder()
            .send()
            .await
            .with_context(|| format!("github api {operation} request failed"))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!(
                "github api {operation} failed with status {}: {}",
                status.as_u16(),
                truncate_for_error(&body, 800)
            );
        }
        response
            .json::<T>()
            .await
            .with_context(|| format!("failed to decode github {operation}"))
    }

    async fn request_unit<F>(&self, operation: &str, request_builder: F) -> Result<()>
    where
        F: FnOnce() -> reqwest::RequestBuilder,
    {
        let response = request_builder()
            .send()
            .await
            .with_context(|| format!("github api {operation} request failed"))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!(
                "github api {operation} failed with status {}: {}",
                status.as_u16(),
                truncate_for_error(&body, 800)
            );
        }
        Ok(())
    }
}

fn truncate_for_error(body: &str, max_chars: usize) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let truncated: String = trimmed.chars().take(max_chars).collect();
    format!("{truncated}…")
}
