// crates/predbatch-cli/src/main.rs
#![feature(error_generic_member_access)]
use clap::Parser;
use predbatch_cli::{Args, Options, run_batch};

fn main() {
    env_logger::init();

    let args = Args::parse();
    let opts = match Options::from_args_and_config(args) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match run_batch(&opts) {
        // Per-file failures are logged as they happen and do not fail the job.
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
