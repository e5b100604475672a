use clap::Parser;

use rusty_queues::client;

/// Greets two people in order and bids them farewell in reverse order.
#[derive(Parser, Debug)]
#[command(name = "hello-goodbye", version)]
struct Cli {
    first: String,
    second: String,
}

fn main() {
    rusty_queues::logging::init();
    let cli = Cli::parse();
    for line in client::hello_goodbye(&cli.first, &cli.second) {
        println!("{}", line);
    }
}
