use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the formatting boundary.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("formatter command is empty")]
    EmptyCommand,

    #[error("formatter command '{command}' could not be split: {reason}")]
    InvalidCommand { command: String, reason: String },

    #[error("failed to launch formatter '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("formatter pipe i/o failed: {source}")]
    Pipe {
        #[source]
        source: std::io::Error,
    },

    #[error("formatter rejected input: {stderr}")]
    Rejected { stderr: String },

    #[error("formatter produced non-utf8 output")]
    InvalidOutput,

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// An opaque text-in/text-out transformer keyed by a parser identifier.
#[async_trait]
pub trait FormatEngine: Send + Sync {
    async fn format(&self, parser: &str, input: &str) -> Result<String, FormatError>;
}
