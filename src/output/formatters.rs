//! Formatting utilities for terminal output

use crate::core::Word;
use std::time::Duration;

/// Join a ladder with arrows
///
/// # Examples
/// ```
/// use word_ladder::core::Word;
/// use word_ladder::output::formatters::format_path;
///
/// let path = [Word::new("cat").unwrap(), Word::new("cot").unwrap()];
/// assert_eq!(format_path(&path), "cat → cot");
/// ```
#[must_use]
pub fn format_path(words: &[Word]) -> String {
    words
        .iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Format a duration as `m:ss`
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_formatting() {
        let path: Vec<Word> = ["cat", "cot", "cog"]
            .into_iter()
            .map(|s| Word::new(s).unwrap())
            .collect();
        assert_eq!(format_path(&path), "cat → cot → cog");
        assert_eq!(format_path(&path[..1]), "cat");
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(Duration::from_secs(0)), "0:00");
        assert_eq!(format_duration(Duration::from_secs(65)), "1:05");
        assert_eq!(format_duration(Duration::from_millis(185_900)), "3:05");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(150.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
