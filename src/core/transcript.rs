use crate::domain::model::Verdict;
use regex::Regex;
use std::sync::OnceLock;

fn non_alphanumeric() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9]").expect("static regex is valid"))
}

/// Lowercases and drops everything outside `[a-z0-9]`.
pub fn normalize_phrase(text: &str) -> String {
    non_alphanumeric()
        .replace_all(&text.to_lowercase(), "")
        .into_owned()
}

/// Compare a recognised transcript with the phrase that was expected.
///
/// Passes when the transcript contains the phrase, or when both match after
/// punctuation and spacing are stripped.
pub fn check_transcript(transcript: &str, expected: &str) -> Verdict {
    let heard = transcript.to_lowercase();
    let expected = expected.to_lowercase();

    if heard.contains(&expected) || normalize_phrase(&heard) == normalize_phrase(&expected) {
        tracing::debug!(heard = %heard, "transcript accepted");
        Verdict::Pass
    } else {
        tracing::debug!(heard = %heard, expected = %expected, "transcript rejected");
        Verdict::Fail { expected, heard }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_passes() {
        assert!(check_transcript("half past ten", "half past ten").is_pass());
    }

    #[test]
    fn test_substring_match_passes() {
        assert!(check_transcript("It's half past ten now", "half past ten").is_pass());
    }

    #[test]
    fn test_punctuation_and_spacing_ignored() {
        assert!(check_transcript("Ten O'Clock.", "ten o'clock").is_pass());
        assert!(check_transcript("twenty one minutes past five", "twenty-one minutes past five").is_pass());
    }

    #[test]
    fn test_mismatch_fails_with_details() {
        let verdict = check_transcript("Quarter to Six", "quarter past five");
        assert_eq!(
            verdict,
            Verdict::Fail {
                expected: "quarter past five".to_string(),
                heard: "quarter to six".to_string(),
            }
        );
    }

    #[test]
    fn test_normalize_phrase() {
        assert_eq!(normalize_phrase("Twenty-One o'clock!"), "twentyoneoclock");
    }
}
