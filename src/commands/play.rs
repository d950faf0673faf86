//! Console game mode
//!
//! Line-based play on a [`GameSession`]: each line is a move or a command.

use crate::core::Difficulty;
use crate::game::{GameSession, GameState};
use crate::output::display::{
    print_comparison, print_path_progress, print_round_intro, print_score,
};
use crate::output::formatters::format_duration;
use crate::solver::{Algorithm, compare_algorithms};
use colored::Colorize;
use log::debug;
use std::io::{self, Write};

/// Suggested pairs tried before asking the player for one
const SUGGESTION_ROUNDS: usize = 10;

/// What the player asked for after a round ended
enum Next {
    Again,
    Quit,
}

/// Run the console game
///
/// Plays `pair` first if given, otherwise a suggested pair; later rounds always
/// use suggestions. A pair that cannot start a game, or a difficulty with no
/// usable suggestion, leads to a prompt for another pair instead of an exit.
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn run_play(
    session: &mut GameSession,
    difficulty: Difficulty,
    pair: Option<(String, String)>,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Word Ladder                              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Change one letter at a time until you reach the target word.");
    println!("Commands: 'hint [a-star|greedy|uniform]', 'path', 'time', 'new', 'quit'\n");

    let mut pair = pair;
    loop {
        if let Next::Quit = begin_round(session, difficulty, pair.take())? {
            break;
        }
        print_round_intro(session);

        if let Next::Quit = play_round(session)? {
            break;
        }
        println!("\n🔄 New game started!\n");
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

/// Start a round from `pair`, falling back to suggestions and then to the
/// player until one starts
fn begin_round(
    session: &mut GameSession,
    difficulty: Difficulty,
    mut pair: Option<(String, String)>,
) -> Result<Next, String> {
    loop {
        let started = match pair.take() {
            Some((start, target)) => session
                .start_game(start.trim(), target.trim(), difficulty)
                .map_err(|e| e.to_string()),
            None => start_suggested_round(session, difficulty),
        };
        match started {
            Ok(()) => return Ok(Next::Again),
            Err(e) => println!("❌ {e}\n"),
        }

        let input = get_user_input("Start and target words (blank for a suggestion)")?;
        if matches!(input.to_lowercase().as_str(), "quit" | "q" | "exit") {
            return Ok(Next::Quit);
        }
        pair = parse_pair(&input);
    }
}

/// Start a round on a suggested pair, retrying when a suggestion fails or the
/// session rejects it
///
/// Challenge rounds draw fresh bans on start, which can cut the suggested
/// ladder.
fn start_suggested_round(session: &mut GameSession, difficulty: Difficulty) -> Result<(), String> {
    for attempt in 1..=SUGGESTION_ROUNDS {
        let Some((start, target)) = session.suggest_pair(difficulty) else {
            debug!("No {difficulty} suggestion on attempt {attempt}");
            continue;
        };
        match session.start_game(start.text(), target.text(), difficulty) {
            Ok(()) => return Ok(()),
            Err(e) => debug!("Suggested {start} -> {target} rejected: {e}"),
        }
    }
    Err(format!("Could not find a {difficulty} word pair"))
}

/// Two whitespace-separated words, or `None`
fn parse_pair(input: &str) -> Option<(String, String)> {
    let mut words = input.split_whitespace();
    match (words.next(), words.next(), words.next()) {
        (Some(start), Some(target), None) => Some((start.to_string(), target.to_string())),
        _ => None,
    }
}

fn play_round(session: &mut GameSession) -> Result<Next, String> {
    while !session.is_game_over() {
        let input = get_user_input("Next word")?.to_lowercase();
        let (command, argument) = input
            .split_once(char::is_whitespace)
            .map_or((input.as_str(), ""), |(c, a)| (c, a.trim()));

        match command {
            "quit" | "q" | "exit" => return Ok(Next::Quit),
            "new" | "n" => return Ok(Next::Again),
            "path" | "p" => print_path_progress(session),
            "time" | "t" => print_time(session),
            "hint" | "h" => {
                let algorithm = if argument.is_empty() {
                    Algorithm::AStar
                } else {
                    Algorithm::from_name(argument)
                };
                match session.get_hint(algorithm) {
                    Ok(word) => println!(
                        "💡 {} suggests: {}\n",
                        algorithm.label(),
                        word.text().to_uppercase().bright_yellow().bold()
                    ),
                    Err(e) => println!("❌ {e}\n"),
                }
            }
            word => match session.make_move(word) {
                Ok(()) => print_path_progress(session),
                Err(e) => println!("❌ {e}\n"),
            },
        }
    }

    match session.state() {
        GameState::Won => finish_round(session),
        _ => println!("\n{}", "⏰ Time is up!".red().bold()),
    }
    ask_play_again()
}

fn finish_round(session: &GameSession) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "              🎉  L A D D E R   C O M P L E T E !  🎉              "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    if let Some(score) = session.score() {
        print_score(score);
    }
    if let (Some(start), Some(target)) = (session.start_word(), session.target_word()) {
        let runs = compare_algorithms(session.index(), start, target);
        print_comparison(session.path_history(), &runs);
    }
    println!("\n{}", "═".repeat(70).bright_cyan());
}

fn print_time(session: &GameSession) {
    let elapsed = session.elapsed().unwrap_or_default();
    match session.get_time_remaining() {
        Some(remaining) => println!(
            "⏱  {} elapsed, {} remaining\n",
            format_duration(elapsed),
            format_duration(remaining).bright_yellow()
        ),
        None => println!("⏱  {} elapsed (no time limit)\n", format_duration(elapsed)),
    }
}

fn ask_play_again() -> Result<Next, String> {
    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
        "yes" | "y" => Ok(Next::Again),
        _ => Ok(Next::Quit),
    }
}

/// Get user input with a prompt; end of input reads as "quit"
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
