//! Terminal browser for the subdivision.
//!
//! Walks the same zone -> house selection flow as the map frontend, and
//! prints the admin dashboard, using the store the server would load.

use std::fmt::Write as _;

use dialoguer::Select;
use subdivision_map_zone::{
    ZoneStore,
    dashboard::{AdminDashboard, admin_dashboard},
    select::{HouseDetail, Selection, ZoneDetail},
};

/// Runs the interactive zone/house browser.
///
/// # Errors
///
/// Returns an error if the store cannot be built or user input fails.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let store = subdivision_map_server::load_store()?;
    let mut selection = Selection::new();

    println!("{}", store.name());
    println!();

    loop {
        let mut items: Vec<String> = store
            .zones()
            .iter()
            .map(|z| format!("{} - {} ({} houses)", z.id, z.name, z.houses.len()))
            .collect();
        items.push("Done".to_string());

        let idx = Select::new()
            .with_prompt("Select a zone")
            .items(&items)
            .default(0)
            .interact()?;

        let Some(zone) = store.zones().get(idx) else {
            break;
        };

        let detail = selection.select_zone(&store, &zone.id)?;
        println!("{}", format_zone(detail));

        browse_houses(&store, &mut selection)?;
    }

    selection.clear();
    Ok(())
}

fn browse_houses(
    store: &ZoneStore,
    selection: &mut Selection,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let Some(zone) = selection.zone() else {
            return Ok(());
        };
        if zone.houses.is_empty() {
            println!("No houses in this zone.");
            return Ok(());
        }

        let mut items: Vec<String> = zone
            .houses
            .iter()
            .map(|h| {
                format!(
                    "{} - {} ({} occupants)",
                    h.id,
                    h.status.label(),
                    h.occupant_count
                )
            })
            .collect();
        items.push("Back to zones".to_string());

        let idx = Select::new()
            .with_prompt(format!("Select a house in {}", zone.name))
            .items(&items)
            .default(0)
            .interact()?;

        let Some(house_id) = zone.houses.get(idx).map(|h| h.id.clone()) else {
            selection.clear_house();
            return Ok(());
        };

        let house = selection.select_house(store, &house_id)?;
        println!("{}", format_house(house));
    }
}

/// Prints the admin dashboard.
///
/// # Errors
///
/// Returns an error if the store cannot be built.
pub fn dashboard() -> Result<(), Box<dyn std::error::Error>> {
    let store = subdivision_map_server::load_store()?;
    println!("{}", format_dashboard(&admin_dashboard(&store)));
    Ok(())
}

fn format_zone(zone: &ZoneDetail) -> String {
    let mut out = String::new();
    writeln!(out, "{} ({})", zone.name, zone.category).unwrap();
    writeln!(out, "  Households: {}", zone.number_of_households).unwrap();
    writeln!(out, "  Residents:  {}", zone.number_of_residents).unwrap();
    writeln!(out, "  Incidents:  {}", zone.incident_count).unwrap();
    for count in zone.status_counts.iter().filter(|c| c.count > 0) {
        writeln!(out, "  {:<22} {}", count.status.label(), count.count).unwrap();
    }
    out
}

fn format_house(house: &HouseDetail) -> String {
    let mut out = String::new();
    writeln!(out, "{} in {}", house.id, house.zone_name).unwrap();
    writeln!(
        out,
        "  Status:    {} since {}",
        house.status_label, house.since_date
    )
    .unwrap();
    writeln!(out, "  Occupants: {}", house.occupant_count).unwrap();
    if house.incidents.is_empty() {
        writeln!(out, "  No incidents").unwrap();
    }
    for incident in &house.incidents {
        writeln!(
            out,
            "  {} [{}] {}",
            incident.date, incident.category, incident.description
        )
        .unwrap();
    }
    out
}

fn format_dashboard(dashboard: &AdminDashboard) -> String {
    let mut out = String::new();
    writeln!(out, "{}", dashboard.subdivision).unwrap();
    writeln!(
        out,
        "  {} zones, {} households, {} residents, {:.1}% occupied",
        dashboard.zone_count,
        dashboard.household_count,
        dashboard.resident_count,
        dashboard.occupancy_rate * 100.0
    )
    .unwrap();
    writeln!(
        out,
        "  Guards on duty: {}/{}",
        dashboard.guards.on_duty, dashboard.guards.total
    )
    .unwrap();
    writeln!(
        out,
        "  Dues collected: {}  outstanding: {}",
        format_cents(dashboard.payments.collected_cents),
        format_cents(dashboard.payments.outstanding_cents())
    )
    .unwrap();
    writeln!(out).unwrap();
    for zone in &dashboard.zones {
        writeln!(
            out,
            "  {:<8} {:<28} {:>4} houses {:>4} residents {:>3} incidents",
            zone.zone_id, zone.name, zone.households, zone.residents, zone.incidents
        )
        .unwrap();
    }
    out
}

/// Formats an amount in cents as `1,234.56`.
fn format_cents(cents: u64) -> String {
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{grouped}.{:02}", cents % 100)
}
