//! Offline guess evaluation command
//!
//! Scores a guess against a given secret without touching the network.

use crate::core::{Feedback, Word, WordError};

/// Result of checking a guess
pub struct CheckResult {
    pub secret: Word,
    pub guess: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either word is not five ASCII letters.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, WordError> {
    let secret = Word::new(secret)?;
    let guess = Word::new(guess)?;
    let feedback = Feedback::evaluate(&secret, &guess);

    Ok(CheckResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_scores_guess() {
        let result = check_guess("CRANE", "arose").unwrap();
        assert_eq!(result.secret.text(), "crane");
        assert_eq!(result.feedback, Feedback::parse("YG--G").unwrap());
    }

    #[test]
    fn check_solved() {
        assert!(check_guess("crane", "crane").unwrap().feedback.is_solved());
    }

    #[test]
    fn check_rejects_invalid_words() {
        assert_eq!(
            check_guess("cranes", "arose").err(),
            Some(WordError::InvalidLength(6))
        );
        assert!(check_guess("crane", "ar0se").is_err());
    }
}
