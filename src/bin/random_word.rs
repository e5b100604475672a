use std::io;

use anyhow::{Context, Result};
use clap::Parser;

use rusty_queues::client::{self, Tokens};

/// Reads whitespace-separated words from standard input and prints one of
/// them, chosen uniformly at random.
#[derive(Parser, Debug)]
#[command(name = "random-word", version)]
struct Cli {
    /// Seed for a reproducible run
    #[arg(long, env = "RUSTY_QUEUES_SEED")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    rusty_queues::logging::init();
    let cli = Cli::parse();

    let mut random = client::generator(cli.seed);
    let stdin = io::stdin();
    let word = client::random_word(Tokens::new(stdin.lock()), &mut random)
        .context("unable to pick a word")?;
    println!("{}", word);
    Ok(())
}
