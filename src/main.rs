mod answers;
mod cli;
mod error;
mod git;
mod license;
mod manifest;
mod prompt;
mod readme;
mod report;
mod setup;
mod template;

use clap::Parser;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = cli::Cli::parse();
    setup::run(cli)
}
