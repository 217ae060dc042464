//! Snowman Player CLI
//!
//! Interactive advisor and offline evaluation for the entropy letter guesser.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use snowman_player::simulate::{benchmark, play_word, DEFAULT_MAX_MISSES};
use snowman_player::{
    load_dictionary, load_word_list, Alphabet, CorpusIndex, EntropySelector, GameConfig,
    PlayerError,
};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

#[derive(Debug, Parser)]
#[command(name = "snowman-player", about = "Entropy-driven letter guessing for masked-word games")]
struct Args {
    /// Word list, one word per line. Defaults to the built-in dictionary.
    #[arg(long)]
    words: Option<PathBuf>,
    /// Allowed letters, in tie-break order.
    #[arg(long, default_value = "abcdefghijklmnopqrstuvwxyz")]
    alphabet: String,
    #[arg(long, default_value_t = snowman_player::config::DEFAULT_MIN_LENGTH)]
    min_length: usize,
    #[arg(long, default_value_t = snowman_player::config::DEFAULT_MAX_LENGTH)]
    max_length: usize,
    /// Wrong guesses allowed in simulated games.
    #[arg(long, default_value_t = DEFAULT_MAX_MISSES)]
    max_misses: usize,
    /// Print per-turn diagnostics to stderr.
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Simulate a game against a known word
    Solve { word: String },
    /// Suggest the next letter for a pattern such as "c**" and the letters guessed so far
    Suggest {
        pattern: String,
        #[arg(default_value = "")]
        guessed: String,
    },
    /// Play every indexed word and report the results
    Bench {
        /// Only play the first N words
        #[arg(long)]
        limit: Option<usize>,
    },
}

struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Spinner {
    fn new(message: &'static str) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();
        let handle = thread::spawn(move || {
            let frames = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
            let mut i = 0;
            let mut stdout = io::stdout();
            while running_clone.load(Ordering::Relaxed) {
                print!("\r{} {}", frames[i % frames.len()], message);
                let _ = stdout.flush();
                thread::sleep(Duration::from_millis(80));
                i += 1;
            }
            print!("\r{}\r", " ".repeat(message.len() + 3));
            let _ = stdout.flush();
        });
        Self {
            running,
            handle: Some(handle),
        }
    }

    fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                eprintln!("progress spinner thread panicked");
            }
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.running.store(false, Ordering::Relaxed);
    }
}

fn build_index(args: &Args) -> Result<CorpusIndex> {
    let words = match &args.words {
        Some(path) => load_word_list(path)
            .with_context(|| format!("failed to read word list {}", path.display()))?,
        None => load_dictionary(),
    };
    let config = GameConfig::new()
        .with_alphabet(Alphabet::new(&args.alphabet)?)
        .with_length_range(args.min_length, args.max_length)
        .with_verbose(args.verbose);
    let index = CorpusIndex::build(&words, config)?;
    if index.word_count() == 0 {
        bail!("no usable words in the word list");
    }
    Ok(index)
}

fn print_solve(index: &CorpusIndex, word: &str, max_misses: usize) -> Result<()> {
    let target = word.to_lowercase();
    let record = play_word(index, &target, max_misses)
        .with_context(|| format!("cannot play {}", target.to_uppercase()))?;

    println!("Solving for: {}", target.to_uppercase());
    println!();
    let mut guessed = String::new();
    for (i, &letter) in record.guesses.iter().enumerate() {
        guessed.push(letter);
        let hit = target.contains(letter);
        println!(
            "Guess {:>2}: {} → {} {}",
            i + 1,
            letter,
            snowman_player::simulate::reveal(&target, &guessed, index.config().wildcard),
            if hit { "✓" } else { "✗" }
        );
    }
    println!();
    if record.won {
        println!(
            "✓ Solved in {} guesses with {} misses.",
            record.guesses.len(),
            record.misses
        );
    } else {
        println!("✗ Lost after {} misses.", record.misses);
    }
    Ok(())
}

fn print_bench(index: &CorpusIndex, limit: Option<usize>, max_misses: usize) {
    let mut targets: Vec<&str> = index
        .lengths()
        .flat_map(|length| index.words_of_length(length))
        .collect();
    if let Some(limit) = limit {
        targets.truncate(limit);
    }

    println!();
    println!("Running benchmark on {} words...", targets.len());

    let spinner = Spinner::new("Computing...");
    let start = std::time::Instant::now();
    let report = benchmark(index, &targets, max_misses);
    let elapsed = start.elapsed();
    spinner.stop();

    println!("Results:");
    println!("{}", "=".repeat(40));
    println!();
    println!("Miss distribution:");
    let played = (report.games - report.errors).max(1);
    for (misses, count) in &report.miss_distribution {
        let pct = *count as f64 / played as f64 * 100.0;
        let bar = "█".repeat((*count * 40 / played).max(1));
        println!("  {:>2} misses: {:>5} ({:>5.1}%) {}", misses, count, pct, bar);
    }
    println!();
    println!("Win rate: {:.1}%", report.win_rate() * 100.0);
    println!("Average misses: {:.3}", report.average_misses());
    println!("Total words: {}", report.games);
    if report.errors > 0 {
        println!("Words that could not be played: {}", report.errors);
    }
    println!("Time elapsed: {:.2?}", elapsed);
    println!();
}

fn print_suggestion(selector: &mut EntropySelector<'_>, pattern: &str, guessed: &str) {
    match selector.next_guess(pattern, guessed) {
        Ok(letter) => {
            println!();
            println!("Next guess: {}", letter);
            println!("Remaining possibilities: {}", selector.remaining_count());
            println!();
        }
        Err(PlayerError::ExhaustedCandidates) => {
            println!("⚠️  No words match this pattern!");
            println!("The word may not be in the dictionary. Use 'new' to start over.");
        }
        Err(e) => println!("{}", e),
    }
}

fn run_interactive(index: &CorpusIndex, max_misses: usize) -> Result<()> {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
    println!(
        "Loaded {} words ({} skipped).",
        index.word_count(),
        index.skipped_count()
    );
    println!("Type 'help' for commands or 'new <length>' to get started.");
    println!();

    let mut selector = EntropySelector::new(index);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "help" | "h" | "?" => println!("{}", BANNER_TEXT),
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "new" | "n" => {
                let Some(length) = parts.get(1).and_then(|s| s.parse::<usize>().ok()) else {
                    println!("Usage: new <length>");
                    continue;
                };
                match selector.start_word(length) {
                    Ok(()) => println!(
                        "New word of length {}: {} candidates.",
                        length,
                        selector.remaining_count()
                    ),
                    Err(e) => println!("{}", e),
                }
            }
            "suggest" | "s" => {
                let Some(pattern) = parts.get(1) else {
                    println!("Usage: suggest <pattern> [guessed]");
                    println!("Example: suggest c** ce");
                    continue;
                };
                let guessed = parts.get(2).copied().unwrap_or("").to_lowercase();
                print_suggestion(&mut selector, &pattern.to_lowercase(), &guessed);
            }
            "top" | "t" => {
                let n: usize = parts.get(1).and_then(|s| s.parse().ok()).unwrap_or(5);
                let top = selector.letter_analysis();
                if top.is_empty() {
                    println!("No letters scored yet.");
                    continue;
                }
                println!();
                println!("{:>4} {:>6} {:>10} {:>6} {:>6}", "#", "Letter", "Score", "Hit", "Miss");
                println!("{}", "-".repeat(36));
                for (i, analysis) in top.iter().take(n).enumerate() {
                    println!(
                        "{:>4} {:>6} {:>10.4} {:>6} {:>6}",
                        i + 1,
                        analysis.letter,
                        analysis.score,
                        analysis.occurrences,
                        analysis.non_occurrences
                    );
                }
                println!();
            }
            "remaining" | "r" | "left" => {
                let remaining: Vec<&str> = selector.candidates().collect();
                println!();
                println!("Remaining possibilities: {}", remaining.len());
                if remaining.len() <= 40 {
                    for (i, word) in remaining.iter().enumerate() {
                        if i > 0 && i % 8 == 0 {
                            println!();
                        }
                        print!("{:>12}", word);
                    }
                    println!();
                }
                println!();
            }
            "solve" => match parts.get(1) {
                Some(word) => {
                    if let Err(e) = print_solve(index, word, max_misses) {
                        println!("{:#}", e);
                    }
                }
                None => println!("Usage: solve <word>"),
            },
            "bench" => {
                let limit = parts.get(1).and_then(|s| s.parse().ok());
                print_bench(index, limit, max_misses);
            }
            _ => {
                println!("Unknown command: {}", parts[0]);
                println!("Type 'help' for available commands.");
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let index = build_index(&args)?;

    match &args.command {
        None => run_interactive(&index, args.max_misses)?,
        Some(Command::Solve { word }) => print_solve(&index, word, args.max_misses)?,
        Some(Command::Suggest { pattern, guessed }) => {
            let pattern = pattern.to_lowercase();
            let mut selector = EntropySelector::new(&index);
            if guessed.is_empty() {
                selector.start_word(pattern.chars().count())?;
            } else {
                selector.resume_word(pattern.chars().count())?;
            }
            let letter = selector.next_guess(&pattern, &guessed.to_lowercase())?;
            println!("{}", letter);
        }
        Some(Command::Bench { limit }) => print_bench(&index, *limit, args.max_misses),
    }
    Ok(())
}
