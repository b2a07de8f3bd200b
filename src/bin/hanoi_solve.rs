//! Solve a generalised Tower of Hanoi instance and write the moves to a solution file.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use hanoi_tower::format::{export_solution, write_solution, ExportOptions};
use hanoi_tower::logging;
use hanoi_tower::puzzle::Puzzle;
use hanoi_tower::solve::{generate, predicted_move_count};

#[derive(Parser, Debug)]
#[command(name = "hanoi-solve", about = "Generate a move sequence for n discs on t towers")]
struct Args {
    /// Number of discs (n >= 1)
    n: u32,

    /// Number of towers (t >= 3)
    t: u32,

    /// Source tower (1..=t)
    s: u32,

    /// Destination tower (1..=t, different from s)
    d: u32,

    /// Directory the solution file is written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Overwrite an existing solution file
    #[arg(long, default_value_t = false)]
    force: bool,

    /// Write the solution to stdout instead of a file
    #[arg(long, default_value_t = false, conflicts_with = "count_only")]
    stdout: bool,

    /// Only print how many moves the solution has
    #[arg(long, default_value_t = false)]
    count_only: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let puzzle = Puzzle::new(args.n, args.t, args.s, args.d);
    if let Err(e) = puzzle.validate_for_solver() {
        eprintln!("{e}");
        eprintln!("Please enter proper parameters. (n>=1; t>=3; 1<=s<=t; 1<=d<=t; s!=d)");
        std::process::exit(2);
    }

    if args.count_only {
        match predicted_move_count(puzzle.discs, puzzle.towers) {
            Some(c) => println!("{c}"),
            None => println!("more than {} moves", u64::MAX),
        }
        return Ok(());
    }

    let moves = generate(&puzzle).with_context(|| format!("solving {puzzle}"))?;

    if args.stdout {
        let stdout = io::stdout();
        let mut w = BufWriter::new(stdout.lock());
        write_solution(&mut w, &puzzle, &moves).context("writing solution to stdout")?;
        w.flush().context("flushing stdout")?;
        return Ok(());
    }

    let path = export_solution(
        &args.out_dir,
        &puzzle,
        &moves,
        ExportOptions { force: args.force },
    )?;

    println!("Solved {puzzle} in {} moves", moves.len());
    println!("Wrote {}", path.display());
    Ok(())
}
