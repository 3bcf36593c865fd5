use std::io;
use std::process::ExitCode;

use clap::Parser;
use stree::cli::{self, Cli, Invocation, VERSION};
use stree::fs::RealFileSystem;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match cli::scan_args(std::env::args_os()) {
        Invocation::Version => {
            println!("stree@{VERSION}");
            return ExitCode::SUCCESS;
        }
        Invocation::Help => {
            print!("{}", cli::help_text());
            return ExitCode::SUCCESS;
        }
        Invocation::Parse(args) => args,
    };

    let config = Cli::parse_from(args).into_config();
    let mut stdout = io::stdout().lock();

    match stree::run(&RealFileSystem, &config, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("stree: {err:#}");
            ExitCode::from(1)
        }
    }
}
