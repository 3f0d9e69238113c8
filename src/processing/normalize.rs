use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything outside the transcript alphabet becomes a space, so that
    // stripped characters still separate tokens.
    static ref DISALLOWED: Regex = Regex::new(r"[^A-Z0-9/\s\-\.]").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Normalizes a raw OCR transcript into the restricted alphabet the field
/// extractors operate on.
pub struct TextNormalizer;

impl TextNormalizer {
    /// Upper-case, replace every character outside `{A-Z, 0-9, /, -, .}` with
    /// a space, collapse whitespace runs to a single space, and trim.
    ///
    /// Idempotent: normalizing an already-normalized string is a no-op.
    pub fn normalize(text: &str) -> String {
        let upper = text.to_uppercase();
        let stripped = DISALLOWED.replace_all(&upper, " ");
        let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
        collapsed.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_disallowed_characters() {
        assert_eq!(
            TextNormalizer::normalize("CIN: K0123567 (carte)"),
            "CIN K0123567 CARTE"
        );
    }

    #[test]
    fn test_normalize_keeps_separator_characters() {
        assert_eq!(
            TextNormalizer::normalize("NE LE 05-12-1983 A TANGER/ASSILAH."),
            "NE LE 05-12-1983 A TANGER/ASSILAH."
        );
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(
            TextNormalizer::normalize("  ROYAUME \t DU\n\nMAROC  "),
            "ROYAUME DU MAROC"
        );
    }

    #[test]
    fn test_normalize_upper_cases() {
        assert_eq!(TextNormalizer::normalize("mouhcine"), "MOUHCINE");
    }

    #[test]
    fn test_normalize_empty_input() {
        assert_eq!(TextNormalizer::normalize(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "CARTE NATIONALE D'IDENTITE ***",
            "k 0 1 2 3 4 5 6 7 né le 05/12/1983",
            "  ça été \u{00e9}trange  ",
            "",
        ];
        for sample in samples {
            let once = TextNormalizer::normalize(sample);
            assert_eq!(TextNormalizer::normalize(&once), once);
        }
    }

    #[test]
    fn test_normalize_output_alphabet() {
        let out = TextNormalizer::normalize("a1!@#$%^&*() b2 <>?\u{00e8}\u{0634}");
        for c in out.chars() {
            assert!(
                c.is_ascii_uppercase() || c.is_ascii_digit() || "/-. ".contains(c),
                "unexpected character in normalized output: {:?}",
                c
            );
        }
        assert!(!out.contains("  "), "double space survived normalization");
    }
}
