//! Small text helpers for condensed display

/// Characters that end a sentence
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Return the first sentence of `text`, including its terminator.
///
/// The first `.`, `!` or `?` ends the sentence. Text with no terminator, or
/// whose first character is a terminator, is returned unchanged. Abbreviations, decimals, and quoted punctuation are not
/// special-cased.
#[must_use]
pub fn first_sentence(text: &str) -> &str {
    text.find(SENTENCE_TERMINATORS)
        .filter(|&idx| idx > 0)
        .map_or(text, |idx| &text[..=idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sentence_basic() {
        assert_eq!(first_sentence("Hello world. More text."), "Hello world.");
    }

    #[test]
    fn test_no_terminator_returns_input() {
        assert_eq!(first_sentence("No terminator here"), "No terminator here");
        assert_eq!(first_sentence(""), "");
    }

    #[test]
    fn test_first_terminator_wins() {
        assert_eq!(first_sentence("What? Really! Yes."), "What?");
        assert_eq!(first_sentence("Wow! Really."), "Wow!");
    }

    #[test]
    fn test_leading_terminator_returns_input() {
        assert_eq!(first_sentence(".NET rocks. Yes."), ".NET rocks. Yes.");
        assert_eq!(first_sentence("...Wait. Done."), "...Wait. Done.");
        assert_eq!(first_sentence("?"), "?");
    }

    #[test]
    fn test_no_abbreviation_handling() {
        assert_eq!(first_sentence("Costs $1.50 per call."), "Costs $1.");
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(
            first_sentence("Prompts — not magic. Just text."),
            "Prompts — not magic."
        );
    }
}
