//! Wordle Guesser CLI
//!
//! Interactive and one-shot front ends for the guessing engine.

use std::io::{self, BufRead, Write};
use std::process;

use wordle_guesser::{
    load_dictionary, ExhaustionReason, FeedbackPattern, GameConfig, GameOutcome, GameRecord,
    GuessSelector, Strategy, Word, WordPool,
};

const USAGE_TEXT: &str = include_str!("text/usage.txt");

struct CliOptions {
    words_file: Option<String>,
    config: GameConfig,
    command: Command,
}

enum Command {
    Interactive,
    Solve(String),
    Suggest,
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut words_file = None;
    let mut config = GameConfig::default();
    let mut command = Command::Interactive;
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "--words" => {
                i += 1;
                let path = args.get(i).ok_or("--words requires a file path")?;
                words_file = Some(path.clone());
            }
            "--strategy" => {
                i += 1;
                let value = args.get(i).ok_or("--strategy requires a value")?;
                config.strategy = value.parse()?;
            }
            "--workers" => {
                i += 1;
                let value = args.get(i).ok_or("--workers requires a number")?;
                config.worker_count = parse_positive(value, "--workers")?;
            }
            "--max-guesses" => {
                i += 1;
                let value = args.get(i).ok_or("--max-guesses requires a number")?;
                config.max_guesses = parse_positive(value, "--max-guesses")?;
            }
            "solve" => {
                i += 1;
                let word = args.get(i).ok_or("usage: wordle-guesser solve <word>")?;
                command = Command::Solve(word.clone());
            }
            "suggest" => {
                command = Command::Suggest;
            }
            other => {
                return Err(format!("unknown argument: {other} (use --help)"));
            }
        }
        i += 1;
    }

    Ok(CliOptions {
        words_file,
        config,
        command,
    })
}

fn parse_positive(value: &str, flag: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(format!("{flag} must be an integer >= 1, got \"{value}\"")),
    }
}

fn load_pool(words_file: Option<&str>) -> WordPool {
    match words_file {
        Some(path) => match WordPool::load(path) {
            Ok(pool) => pool,
            Err(e) => {
                eprintln!("Failed to load word list from {path}: {e}");
                process::exit(1);
            }
        },
        None => load_dictionary(),
    }
}

/// Progress sink for long scoring passes, rendered as a hash bar over `\r`.
fn render_progress(done: usize, total: usize) {
    const WIDTH: usize = 40;
    let filled = WIDTH * done / total.max(1);
    print!(
        "\rScoring guesses: [{}{}] {}/{}",
        "#".repeat(filled),
        ".".repeat(WIDTH - filled),
        done,
        total
    );
    if done == total {
        // Clear the bar before the round's result is printed.
        print!("\r{}\r", " ".repeat(WIDTH + 30));
    }
    let _ = io::stdout().flush();
}

fn print_record(record: &GameRecord) {
    for (i, (guess, pattern, remaining)) in record.guesses.iter().enumerate() {
        println!(
            "Guess {}: {} {} ({} possibilities left)",
            i + 1,
            guess,
            pattern,
            remaining
        );
    }
    println!();
    match record.outcome {
        GameOutcome::Solved { rounds } => println!("SOLVED in {rounds} guesses"),
        GameOutcome::Exhausted {
            reason: ExhaustionReason::OutOfGuesses,
            rounds,
        } => println!("FAILED: guess budget spent after {rounds} guesses"),
        GameOutcome::Exhausted {
            reason: ExhaustionReason::Contradiction,
            rounds,
        } => println!(
            "FAILED after {rounds} guesses: no word in the list matches the feedback \
             (is the solution in the word list?)"
        ),
    }
}

fn new_selector(pool: WordPool, config: GameConfig) -> GuessSelector {
    match GuessSelector::new(pool, config) {
        Ok(selector) => selector.with_progress(Box::new(render_progress)),
        Err(e) => {
            eprintln!("Failed to start worker pool: {e}");
            process::exit(1);
        }
    }
}

fn run_solve(options: &CliOptions, word: &str) {
    let solution: Word = match word.parse() {
        Ok(w) => w,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let pool = load_pool(options.words_file.as_deref());
    if !pool.contains(&solution) {
        eprintln!("Warning: \"{solution}\" is not in the word list; the bot cannot win.");
    }

    let mut selector = new_selector(pool, options.config.clone());
    println!("Guessing \"{solution}\"...");
    println!();
    let record = selector.play_for_solution(&solution);
    print_record(&record);
}

fn run_suggest(options: &CliOptions) {
    let pool = load_pool(options.words_file.as_deref());
    let mut config = options.config.clone();
    config.strategy = Strategy::Informed;

    let selector = new_selector(pool, config);
    match selector.choose_guess() {
        Some(word) => println!("Suggested opening guess: {word}"),
        None => {
            eprintln!("The word list is empty.");
            process::exit(1);
        }
    }
}

fn prompt(question: &str) -> Option<String> {
    print!("{question}");
    let _ = io::stdout().flush();
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).ok()? == 0 {
        return None;
    }
    Some(line.trim().to_string())
}

fn run_interactive(options: &CliOptions) {
    let pool = load_pool(options.words_file.as_deref());
    println!("Loaded {} words.", pool.len());
    println!();

    let mut config = options.config.clone();
    let mut selector: Option<GuessSelector> = None;

    loop {
        let answer = match prompt(
            "Would you like the bot to guess randomly (R) or by expected information (I)? ",
        ) {
            Some(a) => a,
            None => return,
        };
        match answer.to_lowercase().as_str() {
            "exit" | "quit" | "q" => return,
            other => match other.parse::<Strategy>() {
                Ok(strategy) => config.strategy = strategy,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            },
        }

        let solution: Word = match prompt("Enter a word for the bot to guess: ") {
            Some(answer) => match answer.parse() {
                Ok(word) => word,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            },
            None => return,
        };

        // The worker pool is built once and kept across games.
        let selector = selector.get_or_insert_with(|| new_selector(pool.clone(), config.clone()));
        selector.set_strategy(config.strategy);
        selector.reset();

        println!();
        let record = selector.play(|guess| FeedbackPattern::calculate(guess, &solution));
        print_record(&record);
        println!();
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{USAGE_TEXT}");
        return;
    }

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Use --help for usage information.");
            process::exit(1);
        }
    };

    match &options.command {
        Command::Interactive => run_interactive(&options),
        Command::Solve(word) => run_solve(&options, word),
        Command::Suggest => run_suggest(&options),
    }
}
