#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Enumerates supported `TriggerCommand` values.
pub enum TriggerCommand {
    Trigger,
    None,
}

/// Classifies a comment body against the configured trigger phrase.
///
/// The phrase must be a prefix of the trimmed, lowercased body; an occurrence
/// anywhere else does not count. Total over all inputs, no side effects.
pub fn classify_comment(body: &str, phrase: &str) -> TriggerCommand {
    let normalized_phrase = phrase.trim().to_lowercase();
    if normalized_phrase.is_empty() {
        return TriggerCommand::None;
    }
    let normalized_body = body.trim().to_lowercase();
    if normalized_body.starts_with(&normalized_phrase) {
        TriggerCommand::Trigger
    } else {
        TriggerCommand::None
    }
}

#[cfg(test)]
mod tests {
    use super::{classify_comment, TriggerCommand};

    const PHRASE: &str = "prettier, please!";

    #[test]
    fn unit_classify_comment_accepts_exact_phrase() {
        assert_eq!(
            classify_comment("prettier, please!", PHRASE),
            TriggerCommand::Trigger
        );
    }

    #[test]
    fn functional_classify_comment_tolerates_case_and_surrounding_whitespace() {
        assert_eq!(
            classify_comment("  PRETTIER, PLEASE!  extra text", PHRASE),
            TriggerCommand::Trigger
        );
        assert_eq!(
            classify_comment("\nPrettier, Please! and thank you\n", PHRASE),
            TriggerCommand::Trigger
        );
    }

    #[test]
    fn functional_classify_comment_requires_prefix_position() {
        assert_eq!(
            classify_comment("please use prettier, please!", PHRASE),
            TriggerCommand::None
        );
        assert_eq!(
            classify_comment("could you run prettier?", PHRASE),
            TriggerCommand::None
        );
    }

    #[test]
    fn regression_classify_comment_is_total_over_degenerate_inputs() {
        assert_eq!(classify_comment("", PHRASE), TriggerCommand::None);
        assert_eq!(classify_comment("   ", PHRASE), TriggerCommand::None);
        assert_eq!(classify_comment("prettier, please!", ""), TriggerCommand::None);
        assert_eq!(classify_comment("prettier, please!", "   "), TriggerCommand::None);
    }
}
