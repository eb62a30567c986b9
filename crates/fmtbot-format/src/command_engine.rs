use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::engine::{FormatEngine, FormatError};

const PARSER_PLACEHOLDER: &str = "{parser}";

#[derive(Debug, Clone)]
/// Format engine backed by an external command. The configured command line
/// is split shell-style once; any `{parser}` token in its arguments is
/// substituted with the parser identifier at invocation time.
pub struct CommandFormatEngine {
    program: String,
    args: Vec<String>,
}

impl CommandFormatEngine {
    pub fn from_command_line(command_line: &str) -> Result<Self, FormatError> {
        let words =
            shell_words::split(command_line).map_err(|error| FormatError::InvalidCommand {
                command: command_line.to_string(),
                reason: error.to_string(),
            })?;
        let mut words = words.into_iter();
        let program = words.next().ok_or(FormatError::EmptyCommand)?;
        Ok(Self {
            program,
            args: words.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

#[async_trait]
impl FormatEngine for CommandFormatEngine {
    async fn format(&self, parser: &str, input: &str) -> Result<String, FormatError> {
        let args: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace(PARSER_PLACEHOLDER, parser))
            .collect();
        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| FormatError::Launch {
                program: self.program.clone(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(input.as_bytes())
                .await
                .map_err(|source| FormatError::Pipe { source })?;
            stdin
                .shutdown()
                .await
                .map_err(|source| FormatError::Pipe { source })?;
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| FormatError::Pipe { source })?;
        if !output.status.success() {
            return Err(FormatError::Rejected {
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        String::from_utf8(output.stdout).map_err(|_| FormatError::InvalidOutput)
    }
}
