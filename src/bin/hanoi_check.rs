//! Check a solution file: replay every move and report the first broken rule.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use hanoi_tower::core::pegs::{render_discs, PegState};
use hanoi_tower::format::open_solution;
use hanoi_tower::logging;
use hanoi_tower::verify::{Rejection, SequenceValidator, ValidationReport, Verdict};

#[derive(Parser, Debug)]
#[command(name = "hanoi-check", about = "Verify a Tower of Hanoi move sequence")]
struct Args {
    /// Solution file: `n t s d` followed by `disc from to` triples
    file: PathBuf,

    /// Print the report as JSON instead of the step-by-step transcript
    #[arg(long, default_value_t = false)]
    json: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{e:#}");
            std::process::exit(2);
        }
    }
}

/// `Ok(correct?)`; `Err` only when the input could not be read as a sequence at all.
fn run(args: &Args) -> Result<bool> {
    let (puzzle, moves) = open_solution(&args.file)?;
    let mut validator = SequenceValidator::new(puzzle)
        .with_context(|| format!("header of {}", args.file.display()))?;

    if !args.json {
        println!("Reading the file {}", args.file.display());
        println!("\nThe status of all the towers at the start is as follows:");
        print!("{}", validator.state());
    }

    for mv in moves {
        let mv = mv?;
        if !args.json {
            println!("\nMove: {mv}");
        }
        match validator.check(mv) {
            Ok(()) => {
                if !args.json {
                    println!("After the move:");
                    print_two_towers(validator.state(), mv.from, mv.to);
                }
            }
            Err(_) => break,
        }
    }

    let report = validator.finish();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    } else {
        print_outcome(&report);
    }

    Ok(report.is_correct())
}

fn print_two_towers(state: &PegState, from: u32, to: u32) {
    println!("Source tower {from}: {}", render_discs(state.peg(from)));
    println!("Destination tower {to}: {}", render_discs(state.peg(to)));
}

fn print_rejection(r: &Rejection) {
    if let Some(mv) = r.mv {
        if let (true, Some(src), Some(dst)) =
            (r.shows_towers(), &r.source_tower, &r.destination_tower)
        {
            println!("Before the move:");
            println!("Source tower {}: {}", mv.from, render_discs(src));
            println!("Destination tower {}: {}", mv.to, render_discs(dst));
        }
        println!("Move error: {}", r.violation);
    } else {
        println!("\nSequence error: {}", r.violation);
    }
}

fn print_outcome(report: &ValidationReport) {
    match &report.verdict {
        Verdict::Correct => {
            println!("\nThe status of all the towers at the end is as follows:");
            print!("{}", report.final_state);
            println!("\nThe sequence of moves is correct.");
        }
        Verdict::Incorrect(r) => {
            print_rejection(r);
            println!("\nThe status of all the towers is as follows:");
            print!("{}", report.final_state);
            println!("\nThe sequence of moves is incorrect.");
        }
    }
}
