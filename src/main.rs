use clap::Parser;
use colored::Colorize;
use random_wiki::{
    cli::{Args, CommandHandler},
    page::WikipediaSource,
};
use std::io;

fn main() {
    let args = Args::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    setup_logging(&args);

    let source = match WikipediaSource::new() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{} Failed to set up HTTP client: {}", "[!]".red(), e);
            std::process::exit(1);
        }
    };

    let handler = CommandHandler::new();
    if let Err(e) = handler.execute(&args, &source, &mut io::stdout()) {
        eprintln!("{} {}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn setup_logging(args: &Args) {
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .init();
}
