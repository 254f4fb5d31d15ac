// CareCompanion — Password strength meter
//
// Drives the meter and checklist shown under the password field. Purely
// advisory: only the minimum length is enforced at registration.

use std::fmt;

use super::MIN_PASSWORD_LEN;

const LONG_PASSWORD_LEN: usize = 10;

const LABELS: [&str; 6] = ["", "Weak", "Fair", "Good", "Strong", "Very Strong"];

/// The real-time checklist items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PasswordChecks {
    pub length: bool,
    pub uppercase: bool,
    pub number: bool,
    pub symbol: bool,
}

impl PasswordChecks {
    pub fn evaluate(password: &str) -> Self {
        Self {
            length: password.chars().count() >= MIN_PASSWORD_LEN,
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            number: password.chars().any(|c| c.is_ascii_digit()),
            symbol: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }
}

/// Score from 0 to 5, one point per satisfied rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordStrength {
    score: u8,
}

impl PasswordStrength {
    pub fn evaluate(password: &str) -> Self {
        let checks = PasswordChecks::evaluate(password);
        let long = password.chars().count() >= LONG_PASSWORD_LEN;

        let score = [checks.length, long, checks.uppercase, checks.number, checks.symbol]
            .iter()
            .filter(|&&passed| passed)
            .count() as u8;

        Self { score }
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    /// Empty for a score of zero.
    pub fn label(&self) -> &'static str {
        LABELS[usize::from(self.score)]
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5 {}", self.score, self.label())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_password_scores_zero() {
        let strength = PasswordStrength::evaluate("");
        assert_eq!(strength.score(), 0);
        assert_eq!(strength.label(), "");
    }

    #[test]
    fn test_scores_accumulate() {
        assert_eq!(PasswordStrength::evaluate("abcdef").score(), 1);
        assert_eq!(PasswordStrength::evaluate("abcdefghij").score(), 2);
        assert_eq!(PasswordStrength::evaluate("Abcdefghij").score(), 3);
        assert_eq!(PasswordStrength::evaluate("Abcdefghi1").score(), 4);
        assert_eq!(PasswordStrength::evaluate("Abcdefgh1!").score(), 5);
        assert_eq!(PasswordStrength::evaluate("Abcdefgh1!").label(), "Very Strong");
    }

    #[test]
    fn test_short_password_can_still_score() {
        // Character classes count even below the minimum length
        let strength = PasswordStrength::evaluate("A1!");
        assert_eq!(strength.score(), 3);
        assert_eq!(strength.label(), "Good");
    }

    #[test]
    fn test_non_ascii_counts_as_symbol() {
        let checks = PasswordChecks::evaluate("pässwort");
        assert!(checks.symbol);
        assert!(checks.length);
        assert!(!checks.uppercase);
        assert!(!checks.number);
    }
}
