//! Entry point for the `rolodex` binary. Everything lives in `cli/`; this file
//! only runs it and turns an error into an exit code.

mod cli;

fn main() {
    if let Err(e) = cli::commands::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
