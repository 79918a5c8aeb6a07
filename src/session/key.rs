//! Keystrokes the session understands

/// A keystroke after it has been decoded from the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Lowercase ASCII letter
    Letter(u8),
    Backspace,
    Enter,
    /// Anything else; always ignored by the session
    Other,
}

impl KeyInput {
    /// Decode a typed character
    ///
    /// ASCII letters of either case become `Letter`, everything else `Other`.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        if c.is_ascii_alphabetic() {
            Self::Letter(c.to_ascii_lowercase() as u8)
        } else {
            Self::Other
        }
    }

    /// Keystrokes that type out `text` followed by Enter
    ///
    /// Used by the line-oriented front end to drive the same transitions as
    /// the keyboard one.
    pub fn typed_line(text: &str) -> impl Iterator<Item = Self> + '_ {
        text.chars()
            .map(Self::from_char)
            .chain(std::iter::once(Self::Enter))
    }
}
