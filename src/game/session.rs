//! The game session state machine
//!
//! `Setup -> InProgress -> {Won, TimedOut}`. One session owns its dictionary,
//! its random source and at most one round; nothing else mutates them.

use super::error::GameError;
use super::scoring::{ScoreBreakdown, ScoreInput, calculate_score};
use crate::core::{Difficulty, DifficultyProfile, Word, WordIndex};
use crate::solver::{self, Algorithm};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::time::{Duration, Instant};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No round has been started
    Setup,
    InProgress,
    /// Current word equals the target
    Won,
    /// The time limit ran out first
    TimedOut,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::TimedOut)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Setup => "setup",
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::TimedOut => "timed out",
        };
        write!(f, "{label}")
    }
}

#[derive(Debug, Clone)]
struct Round {
    start: Word,
    target: Word,
    /// Never empty; the last entry is the current word
    path: Vec<Word>,
    started_at: Instant,
    skew: Duration,
    finished: Option<Duration>,
    hints_remaining: Option<u32>,
    hints_used: u32,
    score: Option<ScoreBreakdown>,
}

impl Round {
    fn new(start: Word, target: Word, hint_limit: Option<u32>) -> Self {
        Self {
            path: vec![start.clone()],
            start,
            target,
            started_at: Instant::now(),
            skew: Duration::ZERO,
            finished: None,
            hints_remaining: hint_limit,
            hints_used: 0,
            score: None,
        }
    }

    fn current(&self) -> &Word {
        self.path.last().unwrap_or(&self.start)
    }

    fn is_won(&self) -> bool {
        *self.current() == self.target
    }

    fn elapsed(&self) -> Duration {
        self.finished
            .unwrap_or_else(|| self.started_at.elapsed() + self.skew)
    }

    fn is_timed_out(&self, profile: &DifficultyProfile) -> bool {
        profile
            .time_limit
            .is_some_and(|limit| self.elapsed() > limit)
    }

    fn score(&self, index: &WordIndex, profile: &DifficultyProfile) -> ScoreBreakdown {
        let user_length = self.path.len() - 1;
        // Bans are fixed for the round, so a ladder found at setup still exists
        let optimal_length = Algorithm::AStar
            .find_path(index, &self.start, &self.target)
            .map_or(user_length, |path| path.len());

        calculate_score(
            profile,
            ScoreInput {
                optimal_length,
                user_length,
                elapsed: self.elapsed(),
                hints_used: self.hints_used,
            },
        )
    }
}

fn parse_word(raw: &str) -> Result<Word, GameError> {
    Word::new(raw).map_err(|_| GameError::InvalidWord(raw.to_string()))
}

/// A single-player word ladder game
#[derive(Debug)]
pub struct GameSession {
    index: WordIndex,
    rng: StdRng,
    difficulty: Difficulty,
    round: Option<Round>,
}

impl GameSession {
    /// Create a session seeded from OS entropy
    #[must_use]
    pub fn new(index: WordIndex) -> Self {
        Self::with_rng(index, StdRng::from_os_rng())
    }

    /// Create a session with a reproducible random source
    #[must_use]
    pub fn with_seed(index: WordIndex, seed: u64) -> Self {
        Self::with_rng(index, StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn with_rng(index: WordIndex, rng: StdRng) -> Self {
        Self {
            index,
            rng,
            difficulty: Difficulty::default(),
            round: None,
        }
    }

    /// Start a new round, abandoning any previous one
    ///
    /// The difficulty's banned words are applied before the words are checked,
    /// so a challenge round can ban its own start word.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidWord`], [`GameError::LengthMismatch`],
    /// [`GameError::NoPathExists`] or [`GameError::DifficultyRangeViolation`].
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Difficulty, WordIndex};
    /// use word_ladder::game::{GameSession, GameState};
    ///
    /// let index = WordIndex::from_strs(["cat", "cot", "cog", "dog"]).unwrap();
    /// let mut session = GameSession::with_seed(index, 7);
    /// session.start_game("cat", "dog", Difficulty::Beginner).unwrap();
    /// assert_eq!(session.state(), GameState::InProgress);
    ///
    /// for word in ["cot", "cog", "dog"] {
    ///     session.make_move(word).unwrap();
    /// }
    /// assert!(session.is_game_over());
    /// assert!(session.score().is_some());
    /// ```
    pub fn start_game(
        &mut self,
        start: &str,
        target: &str,
        difficulty: Difficulty,
    ) -> Result<(), GameError> {
        self.round = None;
        self.difficulty = difficulty;
        let profile = difficulty.profile();
        self.apply_bans(profile);

        let start = parse_word(start)?;
        let target = parse_word(target)?;
        if start.len() != target.len() {
            return Err(GameError::LengthMismatch {
                expected: start.len(),
                actual: target.len(),
            });
        }
        let start = self.lookup(&start)?;
        let target = self.lookup(&target)?;

        let path = Algorithm::AStar
            .find_path(&self.index, &start, &target)
            .ok_or_else(|| GameError::NoPathExists {
                start: start.to_string(),
                target: target.to_string(),
            })?;
        if !profile.setup_lengths.contains(path.len()) {
            return Err(GameError::DifficultyRangeViolation {
                length: path.len(),
                allowed: profile.setup_lengths.to_string(),
            });
        }

        info!(
            "Started {difficulty} game {start} -> {target} (optimal {} steps)",
            path.len()
        );
        self.round = Some(Round::new(start, target, profile.hint_limit));
        if self.round.as_ref().is_some_and(Round::is_won) {
            self.finish();
        }
        Ok(())
    }

    /// Step to a word one letter away from the current word
    ///
    /// Reaching the target scores the round.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidWord`], [`GameError::LengthMismatch`] or
    /// [`GameError::NonAdjacentMove`] for a bad move;
    /// [`GameError::NoActiveGame`] or [`GameError::GameOver`] otherwise.
    pub fn make_move(&mut self, word: &str) -> Result<(), GameError> {
        self.ensure_in_progress()?;
        let word = self.lookup(&parse_word(word)?)?;
        let round = self.round.as_mut().ok_or(GameError::NoActiveGame)?;

        let current = round.current();
        if word.len() != current.len() {
            return Err(GameError::LengthMismatch {
                expected: current.len(),
                actual: word.len(),
            });
        }
        if current.differing_positions(&word) != Some(1) {
            return Err(GameError::NonAdjacentMove {
                from: current.to_string(),
                to: word.to_string(),
            });
        }

        debug!("Move {current} -> {word}");
        round.path.push(word);
        if round.is_won() {
            self.finish();
        }
        Ok(())
    }

    /// The next step towards the target according to `algorithm`
    ///
    /// A hint is charged before searching, even if no ladder is found.
    ///
    /// # Errors
    ///
    /// [`GameError::HintBudgetExhausted`], [`GameError::NoPathExists`],
    /// [`GameError::NoActiveGame`] or [`GameError::GameOver`].
    pub fn get_hint(&mut self, algorithm: Algorithm) -> Result<Word, GameError> {
        self.ensure_in_progress()?;
        let round = self.round.as_mut().ok_or(GameError::NoActiveGame)?;

        match round.hints_remaining.as_mut() {
            Some(0) => return Err(GameError::HintBudgetExhausted),
            Some(remaining) => *remaining -= 1,
            None => {}
        }
        round.hints_used += 1;

        let hint = algorithm
            .find_path(&self.index, round.current(), &round.target)
            .and_then(|path| path.next_step().cloned());
        debug!(
            "{} hint from {}: {hint:?}",
            algorithm.label(),
            round.current()
        );
        hint.ok_or_else(|| GameError::NoPathExists {
            start: round.current().to_string(),
            target: round.target.to_string(),
        })
    }

    /// Score the finished round
    ///
    /// The optimal length is recomputed with A* on every call.
    ///
    /// # Errors
    ///
    /// [`GameError::NoActiveGame`] before a round starts and
    /// [`GameError::NotSolved`] until the target is reached.
    pub fn calculate_score(&self) -> Result<ScoreBreakdown, GameError> {
        let round = self.round.as_ref().ok_or(GameError::NoActiveGame)?;
        if !round.is_won() {
            return Err(GameError::NotSolved);
        }
        Ok(round.score(&self.index, self.difficulty.profile()))
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state().is_terminal()
    }

    /// Time left before the limit, or `None` when the round is untimed
    #[must_use]
    pub fn get_time_remaining(&self) -> Option<Duration> {
        let limit = self.difficulty.profile().time_limit?;
        let elapsed = self.round.as_ref().map_or(Duration::ZERO, Round::elapsed);
        Some(limit.saturating_sub(elapsed))
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        match &self.round {
            None => GameState::Setup,
            Some(round) if round.is_won() => GameState::Won,
            Some(round) if round.is_timed_out(self.difficulty.profile()) => GameState::TimedOut,
            Some(_) => GameState::InProgress,
        }
    }

    /// Suggest a start/target pair using this session's dictionary and RNG
    pub fn suggest_pair(&mut self, difficulty: Difficulty) -> Option<(Word, Word)> {
        solver::suggest_pair(&self.index, difficulty, &mut self.rng)
    }

    /// A random valid word of `length` letters
    pub fn random_word(&mut self, length: usize) -> Option<Word> {
        self.index.random_word(length, &mut self.rng)
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn index(&self) -> &WordIndex {
        &self.index
    }

    #[must_use]
    pub fn start_word(&self) -> Option<&Word> {
        self.round.as_ref().map(|r| &r.start)
    }

    #[must_use]
    pub fn target_word(&self) -> Option<&Word> {
        self.round.as_ref().map(|r| &r.target)
    }

    #[must_use]
    pub fn current_word(&self) -> Option<&Word> {
        self.round.as_ref().map(Round::current)
    }

    /// Every word played so far, starting with the start word
    #[must_use]
    pub fn path_history(&self) -> &[Word] {
        self.round
            .as_ref()
            .map(|r| r.path.as_slice())
            .unwrap_or_default()
    }

    /// `None` when hints are unlimited or no round is active
    #[must_use]
    pub fn hints_remaining(&self) -> Option<u32> {
        self.round.as_ref().and_then(|r| r.hints_remaining)
    }

    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.round.as_ref().map_or(0, |r| r.hints_used)
    }

    /// Elapsed time, frozen once the target is reached
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        self.round.as_ref().map(Round::elapsed)
    }

    /// The score recorded when the round was won
    #[must_use]
    pub fn score(&self) -> Option<&ScoreBreakdown> {
        self.round.as_ref().and_then(|r| r.score.as_ref())
    }

    fn ensure_in_progress(&self) -> Result<(), GameError> {
        match self.state() {
            GameState::Setup => Err(GameError::NoActiveGame),
            GameState::Won | GameState::TimedOut => Err(GameError::GameOver),
            GameState::InProgress => Ok(()),
        }
    }

    /// The dictionary's copy of `word`, if it is valid
    fn lookup(&self, word: &Word) -> Result<Word, GameError> {
        self.index
            .get_valid(word.text())
            .cloned()
            .ok_or_else(|| GameError::InvalidWord(word.to_string()))
    }

    fn apply_bans(&mut self, profile: &DifficultyProfile) {
        if profile.banned_sample == 0 {
            self.index.clear_banned();
            return;
        }

        let length = self.rng.random_range(profile.word_lengths.clone());
        let sample: Vec<Word> = self
            .index
            .words_of_length(length)
            .choose_multiple(&mut self.rng, profile.banned_sample)
            .cloned()
            .collect();
        debug!("Banning {} words of length {length}", sample.len());
        self.index.set_banned(sample);
    }

    fn finish(&mut self) {
        let profile = self.difficulty.profile();
        let Some(round) = self.round.as_mut() else {
            return;
        };
        round.finished = Some(round.elapsed());
        let score = round.score(&self.index, profile);
        info!(
            "Solved {} -> {} in {} moves with {} hints, score {}",
            round.start,
            round.target,
            round.path.len() - 1,
            round.hints_used,
            score.total
        );
        round.score = Some(score);
    }

    #[cfg(test)]
    fn advance_clock(&mut self, by: Duration) {
        if let Some(round) = self.round.as_mut() {
            round.skew += by;
        }
    }
}
