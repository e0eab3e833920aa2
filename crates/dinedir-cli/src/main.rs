mod directory;

use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use dinedir_core::FacetVocabulary;
use tracing_subscriber::EnvFilter;

use crate::directory::{Directory, FilterArgs};

#[derive(Debug, Parser)]
#[command(name = "dinedir-cli")]
#[command(about = "Restaurant directory command line interface")]
struct Cli {
    /// Dataset to load instead of `DINEDIR_DATA_PATH`
    #[arg(long, global = true, value_name = "PATH")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print one page of matching restaurants
    List {
        #[command(flatten)]
        filters: FilterArgs,
        /// Page to show, starting at 1
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Cards per page (defaults to `DINEDIR_PAGE_SIZE`)
        #[arg(long)]
        page_size: Option<usize>,
        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print every facet option with its count
    Facets {
        #[command(flatten)]
        filters: FilterArgs,
        /// Print the facet index as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one restaurant with its weekly hours
    Show {
        /// Restaurant id
        id: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let config = dinedir_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let vocabulary = match &config.vocabulary_path {
        Some(path) => dinedir_core::load_vocabulary(path)?,
        None => FacetVocabulary::builtin(),
    };
    let data_path = cli.data.unwrap_or_else(|| config.data_path.clone());
    let records = dinedir_ingest::load_dataset(&data_path)?;
    tracing::debug!(
        env = %config.env,
        records = records.len(),
        timezone = %config.timezone,
        "directory ready"
    );

    let directory = Directory {
        records,
        vocabulary,
        timezone: config.timezone,
    };

    match command {
        Commands::List {
            filters,
            page,
            page_size,
            json,
        } => directory::run_list(
            &directory,
            &filters,
            page,
            page_size.unwrap_or(config.page_size),
            json,
        ),
        Commands::Facets { filters, json } => directory::run_facets(&directory, &filters, json),
        Commands::Show { id, json } => directory::run_show(&directory, &id, json),
    }
}

#[cfg(test)]
mod tests;
