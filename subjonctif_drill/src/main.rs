// Subjonctif drill — CLI entry point.
//
// Runs drill rounds in the terminal: prints the verb to place, whether
// the completion must be negated, and the sentence opening with a
// blank; reads the answer from stdin and reports the expected form.
//
// Usage:
//   cargo run -p subjonctif_drill -- [--rounds N] [--seed N]
//     [--verbs FILE] [--conjugations FILE]
//
// Without --seed the run is seeded from the clock and the seed is
// printed, so any session can be replayed.

use std::io::{BufRead, Write};
use std::path::PathBuf;
use subjonctif_drill::{DrillError, DrillSession};
use subjonctif_prng::DrillRng;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let rounds: u64 = parse_flag(&args, "--rounds").unwrap_or(10);
    let seed: Option<u64> = parse_flag(&args, "--seed");
    let verbs: Option<PathBuf> = parse_flag(&args, "--verbs");
    let conjugations: Option<PathBuf> = parse_flag(&args, "--conjugations");

    let seed = match seed {
        Some(s) => s,
        None => DrillRng::from_entropy().1,
    };

    println!("=== infinitive or subjunctive? ===");
    println!("Seed: {seed} (replay with --seed {seed})");
    println!();

    let mut session = DrillSession::with_sources(seed, verbs, conjugations);
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut score = 0u64;
    let mut played = 0u64;

    for round in 1..=rounds {
        let draft = match session.new_round() {
            Ok(draft) => draft,
            Err(e) => {
                eprintln!("unable to generate a sentence: {e}");
                std::process::exit(1);
            }
        };

        println!("Round {round}/{rounds}");
        println!("  verb: {}", draft.asked_verb);
        println!(
            "  {}",
            if draft.negated { "negation" } else { "no negation" }
        );
        print!("  {}____: ", draft.opening);
        if std::io::stdout().flush().is_err() {
            break;
        }

        let answer = match lines.next() {
            Some(Ok(line)) => line,
            _ => {
                println!();
                break;
            }
        };

        match session.submit_answer(&answer) {
            Ok(result) => {
                played += 1;
                if result.correct {
                    score += 1;
                    println!("  correct!");
                } else {
                    println!(
                        "  got {}, expected {}",
                        result.normalized_answer, result.normalized_expected
                    );
                }
            }
            Err(DrillError::NoActiveRound) => break,
            Err(e) => {
                eprintln!("grading failed: {e}");
                std::process::exit(1);
            }
        }
        println!();
    }

    println!("Score: {score}/{played}");
}

fn parse_flag<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|v| v.parse().ok())
}
