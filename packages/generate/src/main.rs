#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI tool for generating mock subdivision data.
//!
//! Prints generated houses for a single zone, or a whole generated
//! subdivision, as JSON on stdout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use subdivision_map_generate::{MockGenerator, generate_store, store_to_json};
use subdivision_map_zone::registry::{default_definition, load_definition};

#[derive(Parser)]
#[command(name = "subdivision_map_generate", about = "Mock data generation tool")]
struct Cli {
    /// RNG seed. A random seed is used (and logged) when omitted.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate houses for a single zone
    Houses {
        /// House id prefix (ids are `{prefix}-1` .. `{prefix}-{count}`)
        #[arg(long, default_value = "A1")]
        prefix: String,
        /// Number of houses
        #[arg(long, default_value_t = 10)]
        count: u32,
    },
    /// Generate a whole subdivision from a definition
    Subdivision {
        /// Definition TOML file (defaults to the embedded definition)
        #[arg(long)]
        definition: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let mut generator = cli
        .seed
        .map_or_else(MockGenerator::from_entropy, MockGenerator::seeded);

    let json = match cli.command {
        Commands::Houses { prefix, count } => {
            serde_json::to_string_pretty(&generator.generate_houses(&prefix, count))?
        }
        Commands::Subdivision { definition } => {
            let definition = match definition {
                Some(path) => load_definition(&path)?,
                None => default_definition(),
            };
            let store = generate_store(&definition, &mut generator)?;
            store_to_json(&store)?
        }
    };

    println!("{json}");

    Ok(())
}
