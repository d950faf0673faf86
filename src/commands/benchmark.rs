//! Benchmark command
//!
//! Runs every algorithm over a batch of pairs and aggregates path quality and
//! search effort.

use crate::core::{Word, WordIndex};
use crate::solver::{Algorithm, AlgorithmRun, compare_algorithms};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Totals for one algorithm across the batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmSummary {
    pub algorithm: Algorithm,
    /// Pairs where a ladder was found
    pub solved: usize,
    /// Pairs where the ladder was as short as the best any algorithm found
    pub shortest: usize,
    pub total_length: usize,
    pub total_expanded: usize,
    pub total_duration: Duration,
}

impl AlgorithmSummary {
    const fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            solved: 0,
            shortest: 0,
            total_length: 0,
            total_expanded: 0,
            total_duration: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn average_length(&self) -> f64 {
        ratio(self.total_length, self.solved)
    }

    #[must_use]
    pub fn average_expanded(&self) -> f64 {
        ratio(self.total_expanded, self.solved)
    }

    #[must_use]
    pub fn average_duration(&self) -> Duration {
        u32::try_from(self.solved)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Duration::ZERO, |n| self.total_duration / n)
    }
}

fn ratio(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub pairs: usize,
    /// One entry per algorithm, in [`Algorithm::ALL`] order
    pub summaries: Vec<AlgorithmSummary>,
    pub duration: Duration,
    pub pairs_per_second: f64,
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}

/// Run all algorithms on every pair
#[must_use]
pub fn run_benchmark(index: &WordIndex, pairs: &[(Word, Word)], show_progress: bool) -> BenchmarkResult {
    let started = Instant::now();
    let mut summaries: Vec<AlgorithmSummary> =
        Algorithm::ALL.into_iter().map(AlgorithmSummary::new).collect();

    let bar = progress_bar(pairs.len(), show_progress);
    for (start, target) in pairs {
        bar.set_message(format!("{start} → {target}"));
        let runs = compare_algorithms(index, start, target);
        let best = runs.iter().filter_map(AlgorithmRun::path_len).min();

        for (summary, run) in summaries.iter_mut().zip(&runs) {
            summary.total_duration += run.duration;
            let Some(length) = run.path_len() else {
                continue;
            };
            summary.solved += 1;
            summary.total_length += length;
            summary.total_expanded += run.outcome.expanded;
            if Some(length) == best {
                summary.shortest += 1;
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    let duration = started.elapsed();
    BenchmarkResult {
        pairs: pairs.len(),
        summaries,
        duration,
        pairs_per_second: pairs.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn index() -> WordIndex {
        WordIndex::from_strs(["cat", "cot", "cog", "dog", "dot", "cag", "ant"]).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let pairs = [(w("cat"), w("dog")), (w("cot"), w("dog"))];
        let result = run_benchmark(&index(), &pairs, false);

        assert_eq!(result.pairs, 2);
        assert_eq!(result.summaries.len(), Algorithm::ALL.len());
        for summary in &result.summaries {
            assert_eq!(summary.solved, 2);
            assert!(summary.shortest <= summary.solved);
            assert!(summary.average_length() >= 2.0);
            assert!(summary.average_expanded() >= 1.0);
        }
    }

    #[test]
    fn uniform_cost_always_shortest() {
        let pairs = [(w("cat"), w("dog")), (w("cag"), w("dot"))];
        let result = run_benchmark(&index(), &pairs, false);
        let uniform = result
            .summaries
            .iter()
            .find(|s| s.algorithm == Algorithm::Uniform)
            .unwrap();
        assert_eq!(uniform.shortest, uniform.solved);
    }

    #[test]
    fn unsolved_pairs_not_averaged() {
        let pairs = [(w("cat"), w("ant"))];
        let result = run_benchmark(&index(), &pairs, false);
        for summary in &result.summaries {
            assert_eq!(summary.solved, 0);
            assert!(summary.average_length().abs() < f64::EPSILON);
            assert_eq!(summary.average_duration(), Duration::ZERO);
        }
    }

    #[test]
    fn benchmark_empty_pair_list() {
        let result = run_benchmark(&index(), &[], false);
        assert_eq!(result.pairs, 0);
        assert!(result.summaries.iter().all(|s| s.solved == 0));
    }
}
