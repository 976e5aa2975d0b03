// Tally CLI entry point

use clap::Parser;
use tally_cli::output::OutputStyle;
use tally_cli::{logging, repl};

/// Interactive console integer with undoable operations
#[derive(Debug, Parser)]
#[command(name = "tally", version, about)]
struct Cli {
    /// Initial value; prompted for interactively when omitted
    #[arg(long)]
    initial: Option<i64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.quiet);

    let style = if cli.no_color {
        OutputStyle::plain()
    } else {
        OutputStyle::default()
    };

    let result = run(&cli, style);

    if let Err(e) = result {
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

fn run(cli: &Cli, style: OutputStyle) -> tally_cli::CliResult<()> {
    let initial = match cli.initial {
        Some(value) => value,
        None => repl::prompt_initial_value(&style)?,
    };

    let mut repl = repl::Repl::new(initial, style);
    repl.start()
}
