#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive CLI for the subdivision map toolchain.
//!
//! Provides a unified entry point that lets users interactively select
//! which tool to run (server, terminal browser, dashboard, mock data
//! generation) and guides them through the configuration for each.

mod browse;

use dialoguer::Select;

/// Top-level tool selection for the subdivision map toolchain.
enum Tool {
    Server,
    Browse,
    Dashboard,
    Generate,
}

impl Tool {
    const ALL: &[Self] = &[Self::Server, Self::Browse, Self::Dashboard, Self::Generate];

    #[must_use]
    const fn label(&self) -> &'static str {
        match self {
            Self::Server => "Start server",
            Self::Browse => "Browse zones and houses",
            Self::Dashboard => "Show admin dashboard",
            Self::Generate => "Generate mock data",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    println!("Subdivision Map Toolchain");
    println!();

    let labels: Vec<&str> = Tool::ALL.iter().map(Tool::label).collect();

    let idx = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    match Tool::ALL[idx] {
        Tool::Server => {
            // The server uses actix-web's runtime, so we need to run it
            // in a blocking task to avoid nesting tokio runtimes.
            tokio::task::spawn_blocking(|| {
                actix_web::rt::System::new().block_on(subdivision_map_server::interactive::run())
            })
            .await??;
        }
        Tool::Browse => browse::run()?,
        Tool::Dashboard => browse::dashboard()?,
        Tool::Generate => subdivision_map_generate::interactive::run()?,
    }

    Ok(())
}
