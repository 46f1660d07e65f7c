mod appliances;
mod common;
mod filter;
mod inventory;
mod list;
mod matrix;
mod text;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// XOR two built-in matrices bit by bit and sum column extremes.
    Matrix(matrix::Bitwise),
    /// Remove words of a given length that start with a consonant.
    Filter(filter::Filter),
    /// Parse text into sentences and remove words through the text model.
    ///
    /// Uses a built-in sample when no input file is given.
    Text(text::TextModel),
    /// Sort a sport inventory catalog and search it for an identical item.
    Inventory(inventory::Inventory),
    /// Power up an apartment and find appliances by emission range.
    Appliances(appliances::Appliances),
    /// Walk through the chain list operations on a list of appliances.
    List(list::List),
}

// LABS_LOG takes the usual env filter directives, for instance
// `LABS_LOG=labs=debug`.
fn init_logging() {
    let env_filter =
        EnvFilter::try_from_env("LABS_LOG").unwrap_or_else(|_| EnvFilter::new("labs=info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Matrix(matrix) => {
            matrix.run()?;
        }
        Commands::Filter(filter) => {
            filter.run()?;
        }
        Commands::Text(text) => {
            text.run()?;
        }
        Commands::Inventory(inventory) => {
            inventory.run()?;
        }
        Commands::Appliances(appliances) => {
            appliances.run()?;
        }
        Commands::List(list) => {
            list.run()?;
        }
    }
    Ok(())
}
