use clap::{CommandFactory, Parser};
use std::process;
use utility_knowledge::cli::{args::Args, commands};

/// Exit code for errors caused by the caller's input (not found, bad format)
const EXIT_CLIENT_ERROR: i32 = 2;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help
    if args.command.is_none() {
        let _ = Args::command().print_help();
        println!();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {:#}", error);
            let code = match error.downcast_ref::<utility_knowledge::Error>() {
                Some(e) if e.is_client_error() => EXIT_CLIENT_ERROR,
                _ => 1,
            };
            process::exit(code);
        }
    }
}
