//! Post-processing of model output.

/// Strip every `*` and `,` from model output.
///
/// Runs collapse to nothing, not to a space, so `"1,200"` becomes `"1200"`.
/// All other characters keep their relative order.
///
/// # Examples
///
/// ```
/// use agronomist_advisor::sanitize;
///
/// assert_eq!(sanitize("Rice, Wheat *best*"), "Rice Wheat best");
/// assert_eq!(sanitize("**1,200** kg"), "1200 kg");
/// ```
pub fn sanitize(text: &str) -> String {
    text.chars().filter(|c| !matches!(c, '*' | ',')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_runs_without_inserting_spaces() {
        assert_eq!(sanitize("a,,,b"), "ab");
        assert_eq!(sanitize("a*,*,b"), "ab");
        assert_eq!(sanitize("a, b"), "a b");
        assert_eq!(sanitize("***"), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_preserves_other_characters() {
        let input = "1. **Disease**: Leaf blight\n2. Severity: moderate (30%)";
        assert_eq!(
            sanitize(input),
            "1. Disease: Leaf blight\n2. Severity: moderate (30%)"
        );
        assert_eq!(sanitize("पत्ती, रोग"), "पत्ती रोग");
    }

    #[test]
    fn test_idempotent() {
        for input in ["Rice, Wheat *best*", "*,*,", "plain", ",a*b,c*"] {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once);
            assert!(!once.contains('*') && !once.contains(','));
        }
    }
}
