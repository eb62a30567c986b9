use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fmtbot_event::comment_event::IssueCommentEvent;
use fmtbot_format::CommandFormatEngine;
use fmtbot_git::GitDriver;
use fmtbot_github::{GithubClient, RepoRef};
use fmtbot_runtime::{run_comment_event, supported_event, RuntimeConfig};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "fmtbot",
    about = "Reformats a pull request's files when a trigger comment asks for it",
    version
)]
struct Cli {
    #[arg(
        long,
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        help = "API token used for reads, the acknowledgement reaction, and comments."
    )]
    github_token: String,

    #[arg(long, env = "GITHUB_REPOSITORY", help = "Repository slug in owner/repo form.")]
    repo: String,

    #[arg(
        long,
        env = "GITHUB_EVENT_NAME",
        help = "Name of the inbound event; only issue_comment is processed."
    )]
    event_name: String,

    #[arg(long, env = "GITHUB_EVENT_PATH", help = "Path to the event payload JSON file.")]
    event_path: PathBuf,

    #[arg(long, env = "GITHUB_API_URL", default_value = "https://api.github.com")]
    api_base: String,

    #[arg(long, env = "GIT_USER_NAME", help = "Identity used for the formatting commit.")]
    git_user_name: String,

    #[arg(long, env = "GIT_USER_EMAIL", help = "Identity used for the formatting commit.")]
    git_user_email: String,

    #[arg(
        long,
        default_value = "prettier, please!",
        help = "Phrase a comment must start with to trigger a run."
    )]
    trigger_phrase: String,

    #[arg(
        long,
        default_value = ".md",
        help = "Case-sensitive filename suffix selecting which changed files are formatted."
    )]
    file_suffix: String,

    #[arg(long, default_value = "markdown", help = "Parser identifier handed to the format engine.")]
    parser: String,

    #[arg(
        long,
        default_value = "prettier --parser {parser}",
        help = "External formatter invocation; reads stdin, writes stdout. {parser} is substituted."
    )]
    formatter_command: String,

    #[arg(long, default_value = "Reformat files via fmtbot")]
    commit_message: String,

    #[arg(long, default_value = "origin")]
    remote: String,

    #[arg(long, default_value = ".", help = "Checkout of the repository the run may mutate.")]
    workdir: PathBuf,
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    if !supported_event(&cli.event_name) {
        tracing::error!(
            event = cli.event_name.as_str(),
            "unsupported event type, nothing to do"
        );
        return Ok(());
    }

    let raw_event = std::fs::read_to_string(&cli.event_path)
        .with_context(|| format!("failed to read event payload {}", cli.event_path.display()))?;
    let event = IssueCommentEvent::from_json(&raw_event)?;
    let repo = RepoRef::parse(&cli.repo)?;
    let client = GithubClient::new(cli.api_base.clone(), cli.github_token.clone())?;
    let git = GitDriver::new(&cli.workdir);
    let engine = CommandFormatEngine::from_command_line(&cli.formatter_command)?;
    let config = RuntimeConfig {
        trigger_phrase: cli.trigger_phrase,
        file_suffix: cli.file_suffix,
        parser: cli.parser,
        commit_message: cli.commit_message,
        remote: cli.remote,
        git_user_name: cli.git_user_name,
        git_user_email: cli.git_user_email,
    };

    let outcome = run_comment_event(&client, &repo, &git, &engine, &config, &event).await?;
    tracing::info!(outcome = outcome.as_str(), "fmtbot run complete");
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(error) = run(cli).await {
        tracing::error!("fmtbot failed: {error:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    const REQUIRED: &[&str] = &[
        "fmtbot",
        "--github-token",
        "token",
        "--repo",
        "owner/repo",
        "--event-name",
        "issue_comment",
        "--event-path",
        "/tmp/event.json",
        "--git-user-name",
        "Fmtbot",
        "--git-user-email",
        "fmtbot@example.com",
    ];

    #[test]
    fn unit_cli_applies_documented_defaults() {
        let cli = Cli::try_parse_from(REQUIRED).expect("parse cli");
        assert_eq!(cli.trigger_phrase, "prettier, please!");
        assert_eq!(cli.file_suffix, ".md");
        assert_eq!(cli.parser, "markdown");
        assert_eq!(cli.formatter_command, "prettier --parser {parser}");
        assert_eq!(cli.commit_message, "Reformat files via fmtbot");
        assert_eq!(cli.remote, "origin");
        assert_eq!(cli.workdir, std::path::PathBuf::from("."));
    }

    #[test]
    fn unit_cli_accepts_overrides() {
        let mut args: Vec<&str> = REQUIRED.to_vec();
        args.extend([
            "--trigger-phrase",
            "format this",
            "--file-suffix",
            ".markdown",
            "--formatter-command",
            "mdfmt --stdin",
        ]);
        let cli = Cli::try_parse_from(args).expect("parse cli");
        assert_eq!(cli.trigger_phrase, "format this");
        assert_eq!(cli.file_suffix, ".markdown");
        assert_eq!(cli.formatter_command, "mdfmt --stdin");
    }
}
