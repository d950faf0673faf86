//! Dictionary-backed word index
//!
//! Holds the immutable corpus and the per-session banned set. A word is *valid*
//! iff it is in the corpus and not banned.

use super::Word;
use log::{debug, info};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Error raised when a corpus cannot back a word index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryError {
    /// No usable words after filtering
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Dictionary contains no usable words"),
        }
    }
}

impl std::error::Error for DictionaryError {}

/// The validated dictionary plus the current banned-word set
#[derive(Debug, Clone)]
pub struct WordIndex {
    corpus: FxHashSet<Word>,
    by_length: FxHashMap<usize, Vec<Word>>,
    banned: FxHashSet<Word>,
}

impl WordIndex {
    /// Build an index from raw strings, keeping only alphabetic ASCII words
    ///
    /// Words are lower-cased; duplicates collapse.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Empty`] if nothing usable remains.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::WordIndex;
    ///
    /// let index = WordIndex::from_strs(["cat", "Cot", "c4t", ""]).unwrap();
    /// assert_eq!(index.len(), 2);
    /// assert!(index.is_valid("COT"));
    /// ```
    pub fn from_strs<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_words(words.into_iter().filter_map(|s| Word::new(s).ok()))
    }

    /// Build an index from already-validated words
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::Empty`] if the iterator yields nothing.
    pub fn from_words<I: IntoIterator<Item = Word>>(words: I) -> Result<Self, DictionaryError> {
        let corpus: FxHashSet<Word> = words.into_iter().collect();
        if corpus.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let mut by_length: FxHashMap<usize, Vec<Word>> = FxHashMap::default();
        for word in &corpus {
            by_length.entry(word.len()).or_default().push(word.clone());
        }
        for bucket in by_length.values_mut() {
            bucket.sort_unstable();
        }

        info!("Loaded {} words", corpus.len());

        Ok(Self {
            corpus,
            by_length,
            banned: FxHashSet::default(),
        })
    }

    /// Number of words in the corpus (banned words included)
    #[must_use]
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    /// Never true for a constructed index
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Corpus membership, ignoring bans. Expects a lowercase word.
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.corpus.contains(word)
    }

    /// Whether the word is currently banned. Expects a lowercase word.
    #[inline]
    #[must_use]
    pub fn is_banned(&self, word: &str) -> bool {
        self.banned.contains(word)
    }

    /// True iff the word (case-normalized) is in the corpus and not banned
    #[must_use]
    pub fn is_valid(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            let lowered = word.to_ascii_lowercase();
            return self.is_valid_lowercase(&lowered);
        }
        self.is_valid_lowercase(word)
    }

    /// Validity check on the hot path; the caller guarantees lowercase input
    #[inline]
    pub(crate) fn is_valid_lowercase(&self, word: &str) -> bool {
        self.corpus.contains(word) && !self.banned.contains(word)
    }

    /// The corpus entry for a valid lowercase word, sharing its allocation
    #[inline]
    pub(crate) fn get_valid(&self, word: &str) -> Option<&Word> {
        if self.banned.contains(word) {
            return None;
        }
        self.corpus.get(word)
    }

    /// All corpus words of a given length, sorted, banned words included
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.by_length
            .get(&length)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Valid (unbanned) words of a given length, sorted
    #[must_use]
    pub fn valid_words_of_length(&self, length: usize) -> Vec<&Word> {
        self.words_of_length(length)
            .iter()
            .filter(|w| !self.banned.contains(w.text()))
            .collect()
    }

    /// Uniformly sample a valid word of exactly `length` letters
    ///
    /// Returns `None` if no such word exists.
    pub fn random_word<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<Word> {
        let valid = self.valid_words_of_length(length);
        debug!("Found {} valid words of length {length}", valid.len());

        let chosen = valid.choose(rng).map(|&w| w.clone());
        if let Some(word) = &chosen {
            debug!("Chosen word: {word}");
        }
        chosen
    }

    /// Replace the banned set
    ///
    /// Words outside the corpus are dropped so the banned set always stays a
    /// subset of the corpus.
    pub fn set_banned<I: IntoIterator<Item = Word>>(&mut self, words: I) {
        self.banned = words
            .into_iter()
            .filter(|w| self.corpus.contains(w.text()))
            .collect();
        debug!("Banned {} words", self.banned.len());
    }

    /// Remove every ban
    pub fn clear_banned(&mut self) {
        self.banned.clear();
    }

    /// Iterate the current banned words (unordered)
    pub fn banned(&self) -> impl Iterator<Item = &Word> {
        self.banned.iter()
    }

    /// Number of banned words
    #[must_use]
    pub fn banned_count(&self) -> usize {
        self.banned.len()
    }
}
