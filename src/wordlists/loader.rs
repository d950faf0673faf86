//! Word list loading utilities

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and entries that are not purely alphabetic are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_ladder::wordlists::loader::load_from_file;
///
/// let words = load_from_file("/usr/share/dict/words").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert a string slice to words, skipping invalid entries
///
/// # Examples
/// ```
/// use word_ladder::wordlists::loader::words_from_slice;
/// use word_ladder::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_lowercases() {
        let words = words_from_slice(&["Cat", "dog", "LADDER"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "dog");
        assert_eq!(words[2].text(), "ladder");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["cat", "it's", "", "caf\u{e9}", "x-ray", "dog"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[1].text(), "dog");
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!("word_ladder_{}.txt", std::process::id()));
        fs::write(&path, "cat\n\n  Cot  \nc4t\ndog\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["cat", "cot", "dog"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/nonexistent/word_ladder/words.txt").is_err());
    }
}
