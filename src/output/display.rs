//! Display functions for command results

use super::formatters::{create_progress_bar, format_duration, format_path};
use crate::commands::{AlgorithmSummary, BenchmarkResult, NeighborReport, SolveResult, SuggestedPair};
use crate::core::{Difficulty, Word};
use crate::game::{GameSession, ScoreBreakdown};
use crate::solver::{AlgorithmRun, LadderGraph};
use colored::Colorize;

fn print_runs(runs: &[AlgorithmRun]) {
    for run in runs {
        let label = format!("{:<18}", run.algorithm.label());
        match &run.outcome.path {
            Some(path) => println!(
                "   {} {} steps  {}",
                label.bright_cyan(),
                path.len().to_string().bright_yellow().bold(),
                format_path(path.words())
            ),
            None => println!("   {} {}", label.bright_cyan(), "no ladder".red()),
        }
        println!(
            "   {:<18} {} expanded, {} generated, {:.2}ms",
            "",
            run.outcome.expanded,
            run.outcome.generated,
            run.duration.as_secs_f64() * 1000.0
        );
    }
}

/// Print the result of solving a pair
pub fn print_solve_result(result: &SolveResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} → {}",
        result.start.text().to_uppercase().bright_yellow().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!();

    print_runs(&result.runs);

    println!();
    match result.best_length() {
        Some(length) => println!(
            "{}",
            format!("✅ Shortest ladder found: {length} steps").green().bold()
        ),
        None => println!("{}", "❌ No ladder connects these words".red().bold()),
    }
}

/// Print suggested pairs for a difficulty
pub fn print_suggestions(difficulty: Difficulty, pairs: &[SuggestedPair]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SUGGESTED PAIRS:".bright_cyan().bold(),
        difficulty.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if pairs.is_empty() {
        println!("\n{}", "No suitable pairs found".red());
        return;
    }
    println!();
    for (i, pair) in pairs.iter().enumerate() {
        println!(
            "   {}. {} → {}  ({} steps)",
            (i + 1).to_string().bright_black(),
            pair.start.text().to_uppercase().bright_white().bold(),
            pair.target.text().to_uppercase().bright_white().bold(),
            pair.length
        );
    }
}

/// Print a word's neighbors
pub fn print_neighbor_report(report: &NeighborReport) {
    println!(
        "\n{} (key {})",
        report.word.text().to_uppercase().bright_yellow().bold(),
        report.heuristic
    );
    if report.neighbors.is_empty() {
        println!("   {}", "no neighbors".bright_black());
        return;
    }
    for (word, key) in &report.neighbors {
        println!("   • {:<12} {key}", word.text());
    }
    println!("\n{} neighbors", report.neighbors.len());
}

/// Print graph nodes and edges
pub fn print_graph(graph: &LadderGraph) {
    println!("\n📊 {}", "Nodes:".bright_cyan().bold());
    for node in graph.nodes() {
        let key = graph.heuristic_of(node.text()).unwrap_or_default();
        println!("   {:<12} key {key:<4} degree {}", node.text(), graph.degree(node));
    }
    println!("\n🔗 {}", "Edges:".bright_cyan().bold());
    for (a, b) in graph.edges() {
        println!("   {a} — {b}");
    }
    println!(
        "\n{} nodes, {} edges",
        graph.nodes().len(),
        graph.edges().len()
    );
}

/// Print the intro for a new round
pub fn print_round_intro(session: &GameSession) {
    let (Some(start), Some(target)) = (session.start_word(), session.target_word()) else {
        return;
    };
    println!("{}", "─".repeat(60).cyan());
    println!(
        "{} → {}   ({})",
        start.text().to_uppercase().bright_yellow().bold(),
        target.text().to_uppercase().bright_green().bold(),
        session.difficulty()
    );
    let hints = session
        .hints_remaining()
        .map_or_else(|| "unlimited".to_string(), |n| n.to_string());
    let time = session
        .get_time_remaining()
        .map_or_else(|| "none".to_string(), format_duration);
    println!("Hints: {hints}   Time limit: {time}");
    println!("{}\n", "─".repeat(60).cyan());
}

/// Print the ladder so far
pub fn print_path_progress(session: &GameSession) {
    let path = session.path_history();
    let target = session
        .target_word()
        .map(|t| t.text().to_uppercase())
        .unwrap_or_default();
    println!(
        "   {}  ⋯  {}  ({} moves)\n",
        format_path(path).bright_white(),
        target.bright_green(),
        path.len().saturating_sub(1)
    );
}

/// Print a score breakdown
pub fn print_score(score: &ScoreBreakdown) {
    println!("\n  {}", "Score:".bright_cyan().bold());
    println!("    Base:            {:>6}", score.base);
    println!("    Path bonus:      {:>+6}", score.path_bonus);
    println!("    Time:            {:>+6}", score.time_adjustment);
    println!(
        "    Extra moves:     {:>+6}  ({} over optimal)",
        -score.move_penalty, score.extra_moves
    );
    println!("    Hints:           {:>+6}", -score.hint_penalty);
    println!(
        "    Total:           {}",
        format!("{:>6}", score.total).bright_yellow().bold()
    );
}

/// Print the player's ladder next to each algorithm's
pub fn print_comparison(user_path: &[Word], runs: &[AlgorithmRun]) {
    println!("\n  {}", "Ladders:".bright_cyan().bold());
    println!(
        "   {} {} steps  {}",
        format!("{:<18}", "You").bright_green(),
        user_path.len().saturating_sub(1).to_string().bright_yellow().bold(),
        format_path(user_path)
    );
    print_runs(runs);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:     {}", result.pairs);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Pairs/second:     {:.1}", result.pairs_per_second);

    let most_expanded = result
        .summaries
        .iter()
        .map(AlgorithmSummary::average_expanded)
        .fold(0.0, f64::max);

    for summary in &result.summaries {
        println!("\n📈 {}", summary.algorithm.label().bright_cyan().bold());
        println!("   Solved:           {}/{}", summary.solved, result.pairs);
        println!(
            "   Average length:   {}",
            format!("{:.2}", summary.average_length())
                .bright_yellow()
                .bold()
        );
        println!(
            "   Shortest found:   {}",
            summary.shortest.to_string().green()
        );
        println!(
            "   Expanded:         {} {:.1}",
            create_progress_bar(summary.average_expanded(), most_expanded, 30).green(),
            summary.average_expanded()
        );
        println!(
            "   Average time:     {:.3}ms",
            summary.average_duration().as_secs_f64() * 1000.0
        );
    }
}
