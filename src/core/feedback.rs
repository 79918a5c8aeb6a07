//! Guess evaluation and per-letter feedback
//!
//! Each tile of a submitted row gets one classification:
//! - Exact (green): right letter, right position
//! - Present (yellow): letter in the secret elsewhere, within its remaining count
//! - Absent (gray): letter not in the secret, or its count is used up
//!
//! Tiles that belong to a row not yet submitted stay `Unset`.

use super::Word;
use super::word::WORD_LENGTH;
use rustc_hash::FxHashMap;

/// Classification of a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Classification {
    /// Row not submitted yet
    #[default]
    Unset,
    Exact,
    Present,
    Absent,
}

impl Classification {
    /// Whether this tile has been scored
    #[inline]
    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Unset)
    }

    /// Emoji square for sharing-style output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
            Self::Unset => '⬜',
        }
    }
}

/// Feedback for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Classification; WORD_LENGTH]);

impl Feedback {
    /// All greens (perfect match)
    pub const SOLVED: Self = Self([Classification::Exact; WORD_LENGTH]);

    /// Score `guess` against `secret`
    ///
    /// Duplicate letters are handled the Wordle way: exact matches are
    /// claimed first, then presence marks are handed out left to right until
    /// the secret's count of that letter is used up.
    ///
    /// # Examples
    /// ```
    /// use wuurdle::core::{Classification, Feedback, Word};
    ///
    /// let secret = Word::new("allot").unwrap();
    /// let guess = Word::new("lolly").unwrap();
    /// let feedback = Feedback::evaluate(&secret, &guess);
    ///
    /// use Classification::{Absent, Exact, Present};
    /// assert_eq!(feedback.tiles(), &[Present, Present, Exact, Absent, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Word, guess: &Word) -> Self {
        let mut result = [Classification::Unset; WORD_LENGTH];
        let totals = secret.char_counts();
        let mut consumed: FxHashMap<u8, u8> = FxHashMap::default();

        // First pass: exact position matches
        for (i, tile) in result.iter_mut().enumerate() {
            if guess.char_at(i) == secret.char_at(i) {
                *tile = Classification::Exact;
                *consumed.entry(secret.char_at(i)).or_insert(0) += 1;
            }
        }

        // Second pass: presence, bounded by how often the letter occurs
        for (i, tile) in result.iter_mut().enumerate() {
            if *tile == Classification::Exact {
                continue;
            }

            let letter = guess.char_at(i);
            let Some(&total) = totals.get(&letter) else {
                *tile = Classification::Absent;
                continue;
            };

            let used = consumed.entry(letter).or_insert(0);
            if total > *used {
                *tile = Classification::Present;
                *used += 1;
            } else {
                *tile = Classification::Absent;
            }
        }

        Self(result)
    }

    /// Per-tile classifications, left to right
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Classification; WORD_LENGTH] {
        &self.0
    }

    /// Check if every tile is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Build feedback from a string like "GY-GY" or "🟩🟨⬛🟩🟨"
    ///
    /// 'G'/🟩 is exact, 'Y'/🟨 present, '-'/⬛ absent; case-insensitive.
    #[cfg(test)]
    pub(crate) fn parse(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return None;
        }

        let mut result = [Classification::Unset; WORD_LENGTH];
        for (tile, ch) in result.iter_mut().zip(chars) {
            *tile = match ch {
                'G' | 'g' | '🟩' => Classification::Exact,
                'Y' | 'y' | '🟨' => Classification::Present,
                '-' | '_' | '⬛' => Classification::Absent,
                _ => return None,
            };
        }

        Some(Self(result))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Classification::{Absent, Exact, Present};
    use super::*;

    fn eval(secret: &str, guess: &str) -> Feedback {
        Feedback::evaluate(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn feedback_all_absent() {
        let feedback = eval("fghij", "abcde");
        assert_eq!(feedback.tiles(), &[Absent; WORD_LENGTH]);
        assert!(!feedback.is_solved());
    }

    #[test]
    fn feedback_identical_words_solved() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert_eq!(eval(word, word), Feedback::SOLVED);
        }
    }

    #[test]
    fn feedback_exact_takes_priority_over_present() {
        // Only one L left after the exact match at index 2
        assert_eq!(
            eval("allot", "lolly").tiles(),
            &[Present, Present, Exact, Absent, Absent]
        );
    }

    #[test]
    fn feedback_duplicates_without_exact_matches() {
        // Two E's in the secret, two in the guess, none in place
        assert_eq!(
            eval("speed", "erase").tiles(),
            &[Present, Absent, Absent, Present, Present]
        );
        assert_eq!(
            eval("erase", "speed").tiles(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn feedback_duplicate_letters_complex() {
        // Second O is exact, first O still gets the remaining one
        assert_eq!(
            eval("floor", "robot").tiles(),
            &[Present, Present, Absent, Exact, Absent]
        );
    }

    #[test]
    fn feedback_excess_guess_letters_are_absent() {
        // One A in the secret: only the first misplaced A is present
        assert_eq!(
            eval("crane", "aaaaa").tiles(),
            &[Absent, Absent, Exact, Absent, Absent]
        );
        assert_eq!(
            eval("abbey", "kayak").tiles(),
            &[Absent, Present, Present, Absent, Absent]
        );
    }

    #[test]
    fn feedback_never_overcounts_letters() {
        let words = ["allot", "lolly", "speed", "erase", "geese", "eerie", "crane"];
        for secret in words {
            for guess in words {
                let feedback = eval(secret, guess);
                let secret_word = Word::new(secret).unwrap();
                let counts = secret_word.char_counts();
                for letter in b'a'..=b'z' {
                    let marked = guess
                        .bytes()
                        .zip(feedback.tiles())
                        .filter(|&(b, c)| b == letter && *c != Absent)
                        .count();
                    let available = counts.get(&letter).copied().unwrap_or(0) as usize;
                    assert!(marked <= available, "{secret} vs {guess}: {letter}");
                }
                assert!(feedback.tiles().iter().all(|c| c.is_set()));
                assert_eq!(feedback, eval(secret, guess));
            }
        }
    }

    #[test]
    fn feedback_parse_valid() {
        let f1 = Feedback::parse("GYG--").unwrap();
        let f2 = Feedback::parse("🟩🟨🟩⬛⬛").unwrap();
        let f3 = Feedback::parse("gyg__").unwrap();

        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(f1.tiles(), &[Exact, Present, Exact, Absent, Absent]);
    }

    #[test]
    fn feedback_parse_invalid() {
        assert!(Feedback::parse("GYGGYX").is_none());
        assert!(Feedback::parse("GYG").is_none());
        assert!(Feedback::parse("GXGGY").is_none());
        assert!(Feedback::parse("").is_none());
    }

    #[test]
    fn feedback_emoji_roundtrip() {
        let feedback = eval("allot", "lolly");
        assert_eq!(feedback.to_emoji(), "🟨🟨🟩⬛⬛");
        assert_eq!(Feedback::parse(&feedback.to_emoji()), Some(feedback));
    }
}
