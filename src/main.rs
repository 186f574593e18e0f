use std::env;
use std::process::ExitCode;

mod cli;
mod config;
mod pass;

fn main() -> ExitCode {
    // Keep password memory out of core dumps.
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    let args: Vec<String> = env::args().collect();
    cli::run(&args)
}
