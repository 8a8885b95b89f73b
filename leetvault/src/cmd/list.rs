use crate::{
    cmd::{load_store, DataArgs},
    modules::render::{render_error, render_list, OutputFormat, RenderOptions},
};
use anyhow::{Context, Result};
use clap::Args;
use leetvault_libs::catalog::{Category, Difficulty, FilterState, Selection, Status};
use std::io::{self, Write};

#[derive(Debug, Args)]
pub struct ListArgs {
    /// All, Easy, Medium or Hard
    #[arg(long, default_value = "All")]
    difficulty: Selection<Difficulty>,
    /// All, Solved, "In Progress" or "Not Started"
    #[arg(long, default_value = "All")]
    status: Selection<Status>,
    /// All or a category name, e.g. "Linked List" or linked-list
    #[arg(long, default_value = "All")]
    category: Selection<Category>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Append per-value counts for each filter
    #[arg(long)]
    facet: bool,
    /// Comma separated columns of the tsv output
    #[arg(long, value_delimiter = ',')]
    columns: Option<Vec<String>>,
    #[command(flatten)]
    data: DataArgs,
}

impl ListArgs {
    fn filter(&self) -> FilterState {
        FilterState {
            difficulty: self.difficulty,
            status: self.status,
            category: self.category,
        }
    }
}

pub fn run(args: ListArgs) -> Result<()> {
    let filter = args.filter();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let store = match load_store(&args.data) {
        Ok(store) => store,
        Err(e) => {
            if args.format == OutputFormat::Json {
                render_error(&mut out, &filter, format!("{:#}", e))?;
                out.flush()?;
            }
            return Err(e);
        }
    };
    let options = RenderOptions::new(args.format, args.facet, args.columns)?;

    render_list(&mut out, &store, &filter, &options).with_context(|| {
        let message = "failed to render problem list";
        tracing::error!(message);
        message
    })?;
    out.flush()?;

    Ok(())
}
