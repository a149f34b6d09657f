use std::process::exit;

use clap::Parser;

mod config;
mod plugins;
mod toolchain;
mod utils;

use toolchain::Configured;
use utils::{TaskError, TaskResult};

#[macro_use]
extern crate log;

/// Project tasks for the lofi radio CLI.
#[derive(Parser, Debug)]
#[command(name = "lofi-xtask", version)]
struct Cli {
    /// Target to run: help, run, build, fmt, lint or clean
    #[arg(default_value = plugins::DEFAULT_TASK)]
    target: String,

    /// Print the toolchain command instead of running it
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match try_main(&cli) {
        Ok(code) => exit(code),
        Err(e) => {
            error!("{}", e);
            if matches!(e, TaskError::TaskNotFound(_)) {
                print_targets();
            }
            exit(e.exit_code());
        }
    }
}

fn try_main(cli: &Cli) -> TaskResult<i32> {
    let plugin = plugins::fetch_task(&cli.target)?;
    debug!("Task: {} ({})", plugin.name(), plugin.description());
    plugin.execute(&Configured::new(cli.dry_run))
}

fn print_targets() {
    eprintln!("Available targets:");
    for task in plugins::list_tasks() {
        eprintln!("  {:<5} - {}", task, plugins::task_descriptions(task));
    }
}
