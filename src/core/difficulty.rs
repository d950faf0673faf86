//! Difficulty profiles
//!
//! Each difficulty is one immutable record. Setup, suggestion and scoring read
//! their parameters from here instead of branching on the difficulty name.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

/// Inclusive bounds on a ladder length (edge count); `max: None` means unbounded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: Option<usize>,
}

impl LengthBounds {
    #[must_use]
    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    #[must_use]
    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    #[must_use]
    pub fn contains(&self, length: usize) -> bool {
        length >= self.min && self.max.is_none_or(|max| length <= max)
    }
}

impl fmt::Display for LengthBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{max}", self.min),
            None => write!(f, "{}+", self.min),
        }
    }
}

/// Named bundle of word lengths, budgets and scoring coefficients
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyProfile {
    pub name: &'static str,
    /// Word lengths the difficulty plays at
    pub word_lengths: RangeInclusive<usize>,
    /// `None` means no time limit
    pub time_limit: Option<Duration>,
    /// `None` means unlimited hints
    pub hint_limit: Option<u32>,
    pub base_score: i64,
    pub optimal_path_bonus: i64,
    /// Penalty per elapsed second when untimed
    pub time_factor: f64,
    /// Penalty per move beyond the optimal length
    pub move_factor: i64,
    /// Marginal cost of the i-th hint is `hint_factor * i`
    pub hint_factor: i64,
    /// Optimal lengths `start_game` accepts
    pub setup_lengths: LengthBounds,
    /// Optimal lengths a suggested pair must have
    pub suggestion_lengths: LengthBounds,
    /// Breadth levels explored from the start word when suggesting a target
    pub target_distance: RangeInclusive<usize>,
    /// Corpus words randomly banned at setup
    pub banned_sample: usize,
}

static BEGINNER: DifficultyProfile = DifficultyProfile {
    name: "beginner",
    word_lengths: 3..=4,
    time_limit: None,
    hint_limit: Some(5),
    base_score: 1000,
    optimal_path_bonus: 300,
    time_factor: 2.0,
    move_factor: 25,
    hint_factor: 50,
    setup_lengths: LengthBounds::between(0, 4),
    suggestion_lengths: LengthBounds::between(2, 4),
    target_distance: 2..=4,
    banned_sample: 0,
};

static ADVANCED: DifficultyProfile = DifficultyProfile {
    name: "advanced",
    word_lengths: 5..=6,
    time_limit: Some(Duration::from_secs(300)),
    hint_limit: Some(3),
    base_score: 2000,
    optimal_path_bonus: 500,
    time_factor: 5.0,
    move_factor: 50,
    hint_factor: 150,
    setup_lengths: LengthBounds::between(4, 7),
    suggestion_lengths: LengthBounds::between(4, 7),
    target_distance: 4..=7,
    banned_sample: 0,
};

static CHALLENGE: DifficultyProfile = DifficultyProfile {
    name: "challenge",
    word_lengths: 6..=8,
    time_limit: Some(Duration::from_secs(180)),
    hint_limit: Some(1),
    base_score: 3000,
    optimal_path_bonus: 1000,
    time_factor: 10.0,
    move_factor: 100,
    hint_factor: 300,
    setup_lengths: LengthBounds::at_least(7),
    suggestion_lengths: LengthBounds::at_least(7),
    target_distance: 7..=10,
    banned_sample: 10,
};

/// The three built-in difficulties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Difficulty {
    #[default]
    Beginner,
    Advanced,
    Challenge,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Advanced, Self::Challenge];

    /// The immutable profile for this difficulty
    #[must_use]
    pub fn profile(self) -> &'static DifficultyProfile {
        match self {
            Self::Beginner => &BEGINNER,
            Self::Advanced => &ADVANCED,
            Self::Challenge => &CHALLENGE,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.profile().name
    }

    /// Look up a difficulty by name (case-insensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Unknown difficulty '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_bounds_contains() {
        let bounded = LengthBounds::between(2, 4);
        assert!(!bounded.contains(1));
        assert!(bounded.contains(2));
        assert!(bounded.contains(4));
        assert!(!bounded.contains(5));

        let open = LengthBounds::at_least(7);
        assert!(!open.contains(6));
        assert!(open.contains(7));
        assert!(open.contains(100));
    }

    #[test]
    fn length_bounds_display() {
        assert_eq!(LengthBounds::between(4, 7).to_string(), "4-7");
        assert_eq!(LengthBounds::at_least(7).to_string(), "7+");
    }

    #[test]
    fn setup_ranges() {
        let beginner = Difficulty::Beginner.profile();
        assert!(beginner.setup_lengths.contains(0));
        assert!(beginner.setup_lengths.contains(4));
        assert!(!beginner.setup_lengths.contains(5));

        let advanced = Difficulty::Advanced.profile();
        assert!(!advanced.setup_lengths.contains(3));
        assert!(advanced.setup_lengths.contains(7));
        assert!(!advanced.setup_lengths.contains(8));

        assert!(!Difficulty::Challenge.profile().setup_lengths.contains(6));
        assert!(Difficulty::Challenge.profile().setup_lengths.contains(12));
    }

    #[test]
    fn only_beginner_is_untimed() {
        assert_eq!(Difficulty::Beginner.profile().time_limit, None);
        assert_eq!(
            Difficulty::Advanced.profile().time_limit,
            Some(Duration::from_secs(300))
        );
        assert_eq!(
            Difficulty::Challenge.profile().time_limit,
            Some(Duration::from_secs(180))
        );
    }

    #[test]
    fn only_challenge_bans_words() {
        assert_eq!(Difficulty::Beginner.profile().banned_sample, 0);
        assert_eq!(Difficulty::Advanced.profile().banned_sample, 0);
        assert_eq!(Difficulty::Challenge.profile().banned_sample, 10);
    }

    #[test]
    fn from_name_roundtrips() {
        for difficulty in Difficulty::ALL {
            assert_eq!(Difficulty::from_name(difficulty.name()), Some(difficulty));
        }
        assert_eq!(Difficulty::from_name("ADVANCED"), Some(Difficulty::Advanced));
        assert_eq!(Difficulty::from_name("expert"), None);
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
