//! Interactive menu for the generate tool.
//!
//! Lets users generate a batch of mock houses or a whole mock subdivision
//! from a `dialoguer` prompt instead of memorizing CLI flags.

use dialoguer::{Input, Select};
use subdivision_map_zone::registry::default_definition;

use crate::{MockGenerator, generate_store};

/// Runs the interactive generation menu and prints the result as JSON.
///
/// # Errors
///
/// Returns an error if user input, generation, or serialization fails.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let choices = &["Generate houses for one zone", "Generate whole subdivision"];

    let selection = Select::new()
        .with_prompt("What would you like to generate?")
        .items(choices)
        .default(0)
        .interact()?;

    let seed_str: String = Input::new()
        .with_prompt("Seed (leave empty for random)")
        .allow_empty(true)
        .interact_text()?;

    let mut generator = if seed_str.trim().is_empty() {
        MockGenerator::from_entropy()
    } else {
        MockGenerator::seeded(
            seed_str
                .trim()
                .parse()
                .map_err(|e| format!("Invalid seed '{seed_str}': {e}"))?,
        )
    };

    let json = if selection == 0 {
        let prefix: String = Input::new()
            .with_prompt("House id prefix")
            .default("A1".to_string())
            .interact_text()?;
        let count: u32 = Input::new()
            .with_prompt("Number of houses")
            .default(10)
            .interact_text()?;

        serde_json::to_string_pretty(&generator.generate_houses(&prefix, count))?
    } else {
        let store = generate_store(&default_definition(), &mut generator)?;
        crate::store_to_json(&store)?
    };

    println!("{json}");

    Ok(())
}
