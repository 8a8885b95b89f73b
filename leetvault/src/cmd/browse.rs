use crate::{
    cmd::{load_store, DataArgs},
    modules::{
        render::{OutputFormat, RenderOptions},
        session::BrowseSession,
    },
};
use anyhow::{Context, Result};
use clap::Args;
use std::io;

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Append per-value counts for each filter after every render
    #[arg(long)]
    facet: bool,
    #[command(flatten)]
    data: DataArgs,
}

pub fn run(args: BrowseArgs) -> Result<()> {
    let store = load_store(&args.data)?;
    let options = RenderOptions::new(OutputFormat::Text, args.facet, None)?;

    tracing::info!("browse {} problems, type `help` for commands", store.len());
    let mut session = BrowseSession::new(&store, options);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.run(stdin.lock(), &mut out).with_context(|| {
        let message = "browse session failed";
        tracing::error!(message);
        message
    })
}
