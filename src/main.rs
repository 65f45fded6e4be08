//! dwscan - dirty word scanner
//!
//! Main entry point for the command-line application.

use clap::Parser;
use std::process;

use dwscan::cli::{Args, Command};
use dwscan::report::{print_banner, print_error, print_header, print_info, print_success, print_warning};
use dwscan::{scan_dir, scan_file, MatchSet, ScanError, ScanOutcome};

/// Nothing found.
const EXIT_CLEAN: i32 = 0;
/// Bad input: missing paths, wrong path kinds, empty word list.
const EXIT_BAD_INPUT: i32 = 1;
/// Runtime failure mid-scan.
const EXIT_FAILURE: i32 = 2;
/// Dirty words found.
const EXIT_FOUND: i32 = 3;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if !args.quiet {
        print_banner();
    }

    // Run the scan
    match run(&args) {
        Ok(ScanOutcome::Clean) => {
            if !args.quiet {
                print_success("No dirty words found");
            }
            process::exit(EXIT_CLEAN);
        }
        Ok(ScanOutcome::Found) => {
            if !args.quiet {
                print_warning("Dirty words found - see stderr for details");
            }
            process::exit(EXIT_FOUND);
        }
        Err(e) => {
            print_error(&format!("{}", e));

            // Print chain of errors
            let mut source = e.source();
            while let Some(err) = source {
                print_error(&format!("  Caused by: {}", err));
                source = err.source();
            }

            process::exit(exit_code_for(&e));
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ScanOutcome> {
    match &args.command {
        Command::File { file, scan } => {
            let words = MatchSet::load(&scan.words)?;
            if !args.quiet {
                print_header("Scanning file...");
                print_info(&format!("Target:    {:?}", file));
                print_info(&format!("Words:     {}", words.len()));
                print_info(&format!("Encoding:  {}", scan.encoding));
            }
            Ok(scan_file(file, &words, scan.encoding, !scan.ignore_case)?)
        }
        Command::Dir {
            dir,
            recursive,
            scan,
        } => {
            let words = MatchSet::load(&scan.words)?;
            if !args.quiet {
                print_header("Scanning directory...");
                print_info(&format!("Target:    {:?}", dir));
                print_info(&format!("Words:     {}", words.len()));
                print_info(&format!("Encoding:  {}", scan.encoding));
                print_info(&format!("Recursive: {}", recursive));
            }
            Ok(scan_dir(
                dir,
                &words,
                scan.encoding,
                !scan.ignore_case,
                *recursive,
            )?)
        }
    }
}

/// Map an error to the process exit status: validation problems are bad
/// input, everything else is a runtime failure.
fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<ScanError>() {
        Some(scan_err) if scan_err.is_validation() => EXIT_BAD_INPUT,
        _ => EXIT_FAILURE,
    }
}
