//! Feedback classifier
//!
//! Compares the trainee's just-played move with the book token expected at
//! that ply and produces a verdict plus display text. Pure: no state, no
//! side effects.
//!
//! | Verdict                 | When                                           | Severity |
//! |-------------------------|------------------------------------------------|----------|
//! | `OnBook`                | SAN, SAN without `+`/`#`, or UCI squares match | Success  |
//! | `ReasonableAlternative` | move is on the opening's allow-list            | Info     |
//! | `OffBook`               | anything else while the line lasts             | Warning  |
//! | `PastBookLength`        | the line is exhausted                          | Info     |

use crate::game::rules::strip_decorations;
use std::fmt;

/// Display class of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(label)
    }
}

/// A message for the trainee
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub severity: Severity,
    pub message: String,
}

impl Feedback {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }
}

/// How a trainee move relates to the book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    OnBook,
    ReasonableAlternative,
    OffBook,
    PastBookLength,
}

impl Verdict {
    pub fn severity(self) -> Severity {
        match self {
            Verdict::OnBook => Severity::Success,
            Verdict::ReasonableAlternative | Verdict::PastBookLength => Severity::Info,
            Verdict::OffBook => Severity::Warning,
        }
    }
}

/// The move being judged
#[derive(Debug, Clone, Copy)]
pub struct PlayedMove<'a> {
    /// SAN as produced by the rules engine, decorations included
    pub san: &'a str,
    /// UCI text, promotion suffix included
    pub uci: &'a str,
}

/// What the classifier needs to know about the active opening
#[derive(Debug, Clone, Copy)]
pub struct OpeningContext<'a> {
    pub name: &'a str,
    pub alternatives: &'a [&'a str],
    /// 1-based ply number of the move being judged
    pub ply: usize,
    /// Number of plies in the active line
    pub line_len: usize,
}

/// Verdict and message for one trainee move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub verdict: Verdict,
    pub message: String,
}

impl Classification {
    pub fn severity(&self) -> Severity {
        self.verdict.severity()
    }

    pub fn into_feedback(self) -> Feedback {
        Feedback::new(self.verdict.severity(), self.message)
    }
}

/// Judge `played` against the book token `expected` for its ply
pub fn classify(
    played: PlayedMove<'_>,
    expected: Option<&str>,
    context: &OpeningContext<'_>,
) -> Classification {
    let expected = match expected {
        Some(token) if context.ply <= context.line_len => token,
        _ => {
            return Classification {
                verdict: Verdict::PastBookLength,
                message: "You're out of the opening book. Continue developing your pieces!"
                    .to_string(),
            }
        }
    };

    if matches_book(played, expected) {
        return Classification {
            verdict: Verdict::OnBook,
            message: format!("Excellent! That's the main line of the {}.", context.name),
        };
    }

    let san = strip_decorations(played.san);
    if context
        .alternatives
        .iter()
        .any(|alt| *alt == played.san || *alt == san)
    {
        return Classification {
            verdict: Verdict::ReasonableAlternative,
            message: format!(
                "This is a playable alternative, but {} is the main line.",
                expected
            ),
        };
    }

    Classification {
        verdict: Verdict::OffBook,
        message: format!(
            "That move deviates from the {} principles. Consider {} instead.",
            context.name, expected
        ),
    }
}

fn matches_book(played: PlayedMove<'_>, expected: &str) -> bool {
    let expected_lower = expected.to_lowercase();
    played.san == expected
        || played.uci == expected_lower
        || played.uci.get(0..4) == Some(expected_lower.as_str())
        || strip_decorations(played.san) == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHILIDOR_ALTS: &[&str] = &["Nf6", "Nd7", "Be7", "Nbd7", "O-O", "c6", "Qe7"];

    fn context(ply: usize) -> OpeningContext<'static> {
        OpeningContext {
            name: "Philidor Defense",
            alternatives: PHILIDOR_ALTS,
            ply,
            line_len: 19,
        }
    }

    fn played<'a>(san: &'a str, uci: &'a str) -> PlayedMove<'a> {
        PlayedMove { san, uci }
    }

    #[test]
    fn test_exact_san_is_on_book() {
        let result = classify(played("Nf3", "g1f3"), Some("Nf3"), &context(3));
        assert_eq!(result.verdict, Verdict::OnBook);
        assert_eq!(result.severity(), Severity::Success);
        assert_eq!(
            result.message,
            "Excellent! That's the main line of the Philidor Defense."
        );
    }

    #[test]
    fn test_decorated_san_and_uci_tokens_are_on_book() {
        let check = classify(played("Qxd8+", "d1d8"), Some("Qxd8"), &context(11));
        assert_eq!(check.verdict, Verdict::OnBook);
        let uci = classify(played("e4", "e2e4"), Some("E2E4"), &context(1));
        assert_eq!(uci.verdict, Verdict::OnBook);
    }

    #[test]
    fn test_unlisted_move_is_off_book_naming_expected() {
        let result = classify(played("Nc6", "b8c6"), Some("d6"), &context(4));
        assert_eq!(result.verdict, Verdict::OffBook);
        assert_eq!(result.severity(), Severity::Warning);
        assert!(result.message.contains("Consider d6 instead"));
    }

    #[test]
    fn test_allow_listed_move_is_reasonable() {
        let result = classify(played("Nf6", "g8f6"), Some("d6"), &context(4));
        assert_eq!(result.verdict, Verdict::ReasonableAlternative);
        assert_eq!(
            result.message,
            "This is a playable alternative, but d6 is the main line."
        );
    }

    #[test]
    fn test_openings_without_list_never_give_alternatives() {
        let ctx = OpeningContext {
            alternatives: &[],
            name: "Sicilian Defense",
            ..context(2)
        };
        let result = classify(played("e5", "e7e5"), Some("c5"), &ctx);
        assert_eq!(result.verdict, Verdict::OffBook);
    }

    #[test]
    fn test_past_book_length() {
        let result = classify(played("a6", "a7a6"), None, &context(20));
        assert_eq!(result.verdict, Verdict::PastBookLength);
        assert_eq!(result.severity(), Severity::Info);
        let feedback = result.into_feedback();
        assert!(feedback.message.starts_with("You're out of the opening book"));
    }
}
