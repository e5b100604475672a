use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;

use rusty_queues::client::{self, Tokens};

/// Reads whitespace-separated items from standard input and prints K of them,
/// chosen uniformly at random, one per line.
#[derive(Parser, Debug)]
#[command(name = "permutation", version)]
struct Cli {
    /// Number of items to print (at most the number of items read)
    k: usize,

    /// Seed for a reproducible run
    #[arg(long, env = "RUSTY_QUEUES_SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    rusty_queues::logging::init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let items = client::permutation(Tokens::new(stdin.lock()), cli.k, client::generator(cli.seed))
        .context("unable to print a random permutation")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for item in items {
        writeln!(out, "{}", item)?;
    }
    out.flush()?;
    Ok(())
}
