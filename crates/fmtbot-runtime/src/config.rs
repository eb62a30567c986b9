#[derive(Debug, Clone)]
/// Per-run configuration, resolved once by the binary and threaded through
/// every component call. No component reads ambient state directly.
pub struct RuntimeConfig {
    pub trigger_phrase: String,
    pub file_suffix: String,
    pub parser: String,
    pub commit_message: String,
    pub remote: String,
    pub git_user_name: String,
    pub git_user_email: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            trigger_phrase: "prettier, please!".to_string(),
            file_suffix: ".md".to_string(),
            parser: "markdown".to_string(),
            commit_message: "Reformat files via fmtbot".to_string(),
            remote: "origin".to_string(),
            git_user_name: String::new(),
            git_user_email: String::new(),
        }
    }
}
