mod cmd;
mod modules;

use crate::cmd::{
    browse::{self, BrowseArgs},
    list::{self, ListArgs},
};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::io;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::{self, time::OffsetTime},
};

#[derive(Debug, Parser)]
#[command(name = "leetvault")]
#[command(about = "LeetVault: track your LeetCode progress")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the problems matching the given filters
    List(ListArgs),
    /// Browse the problems interactively, changing filters from stdin
    Browse(BrowseArgs),
}

fn main() {
    dotenv().ok();

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let format = fmt::format()
        .with_level(true)
        .with_target(true)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_timer(OffsetTime::local_rfc_3339().expect("couldn't determine local time offset"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(format)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("failed to set tracing subscriber");

    let result = match Cli::parse().command {
        Commands::List(args) => list::run(args),
        Commands::Browse(args) => browse::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
