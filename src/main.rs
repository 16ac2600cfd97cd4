//! Dictionary Curator - word-game dictionary build step
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use dictionary_curator::cli::Args;
use dictionary_curator::processor::{Processor, ProcessorConfig};
use dictionary_curator::progress::{
    print_banner, print_bullet, print_error, print_header, print_info, print_stats,
};

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_env("RUST_LOG")
        .init();

    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        for cause in e.chain().skip(1) {
            print_error(&format!("  Caused by: {}", cause));
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    if args.verbose {
        print_banner();
    }

    let config = ProcessorConfig::from_args(&args);

    if args.verbose {
        print_config(&config);
    }

    let processor = Processor::new(config);
    let summary = processor.process()?;

    if args.stats {
        print_stats(&summary.stats, summary.source_bytes, summary.elapsed);
    }

    println!("{}", summary);

    Ok(())
}

/// Print configuration summary
fn print_config(config: &ProcessorConfig) {
    print_header("Configuration");

    print_info(&format!("Wordlist:     {:?}", config.wordlist));
    print_info(&format!("Dataset:      {:?}", config.dataset));
    print_info(&format!("Output:       {:?}", config.output));

    match config.denylist {
        Some(ref path) => print_info(&format!("Denylist:     {:?}", path)),
        None => print_bullet("Denylist disabled"),
    }
    match config.proper_names {
        Some(ref path) => print_info(&format!("Proper names: {:?}", path)),
        None => print_bullet("Proper names disabled"),
    }

    print_info(&format!("Dry run:      {}", config.dry_run));
    println!();
}
