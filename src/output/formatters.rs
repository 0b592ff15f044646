//! Formatting utilities for terminal output

use crate::core::{Decision, Rejection, RootWord};

/// Circled length badge shown next to each used word, e.g. "④"
///
/// Falls back to "(n)" past twenty letters.
#[must_use]
pub fn length_badge(word: &str) -> String {
    let len = word.chars().count();
    match len {
        1..=20 => char::from_u32(0x2460 + len as u32 - 1)
            .map_or_else(|| format!("({len})"), String::from),
        _ => format!("({len})"),
    }
}

/// One line of the used-words list: badge then word
#[must_use]
pub fn used_word_line(word: &str) -> String {
    format!("{} {word}", length_badge(word))
}

/// Alert text for a rejection: "title: message"
#[must_use]
pub fn rejection_text(rejection: Rejection, root: &RootWord) -> String {
    format!("{}: {}", rejection.title(), rejection.message(root))
}

/// Single-line summary of a decision
#[must_use]
pub fn decision_line(decision: &Decision, root: &RootWord) -> String {
    match decision {
        Decision::Accepted(word) => format!("✓ {word} (+{})", crate::core::word_score(word)),
        Decision::Rejected(rejection) => format!("✗ {}", rejection_text(*rejection, root)),
    }
}

/// "Score: n"
#[must_use]
pub fn score_line(score: usize) -> String {
    format!("Score: {score}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_uses_circled_digits() {
        assert_eq!(length_badge("cat"), "③");
        assert_eq!(length_badge("silk"), "④");
        assert_eq!(length_badge("silkworm"), "⑧");
    }

    #[test]
    fn badge_falls_back_for_long_words() {
        let long = "a".repeat(21);
        assert_eq!(length_badge(&long), "(21)");
        assert_eq!(length_badge(""), "(0)");
    }

    #[test]
    fn used_word_line_has_badge() {
        assert_eq!(used_word_line("worm"), "④ worm");
    }

    #[test]
    fn decision_lines() {
        let root = RootWord::new("silkworm").unwrap();

        let accepted = Decision::Accepted("silk".to_string());
        assert_eq!(decision_line(&accepted, &root), "✓ silk (+11)");

        let rejected = Decision::Rejected(Rejection::NotSpellableFromRoot);
        assert_eq!(
            decision_line(&rejected, &root),
            "✗ Word not possible: You can't spell that word from 'silkworm'!"
        );
    }

    #[test]
    fn score_text() {
        assert_eq!(score_line(23), "Score: 23");
    }
}
