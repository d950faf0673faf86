//! Word ladder word representation
//!
//! A Word is an immutable, lowercase, ASCII-alphabetic string of any positive length.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A lowercase dictionary word
///
/// Backed by `Arc<str>` so that search frontiers can copy whole paths cheaply and
/// words can be shared across threads. Hashes and compares exactly like the
/// underlying `str`, so sets of words can be queried with plain string slices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Arc<str>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, lower-casing it
    ///
    /// No other normalization happens; surrounding whitespace is rejected.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The input is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(Word::new("c4t").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self {
            text: Arc::from(text.to_ascii_lowercase()),
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a constructed word; provided for API completeness
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count positions where two words differ
    ///
    /// Returns `None` when the lengths differ, since positions are then not comparable.
    #[must_use]
    pub fn differing_positions(&self, other: &Self) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }

        Some(
            self.as_bytes()
                .iter()
                .zip(other.as_bytes())
                .filter(|(a, b)| a != b)
                .count(),
        )
    }

    /// True if the two words are exactly one substitution apart
    #[must_use]
    pub fn is_one_letter_from(&self, other: &Self) -> bool {
        self.differing_positions(other) == Some(1)
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
