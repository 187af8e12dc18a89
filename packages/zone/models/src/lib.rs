#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Zone, house, incident, payment, and guard roster types.
//!
//! Also defines the TOML schema for subdivision definitions: the zone
//! polygons, declared statistics and security entrances that the store is
//! populated from at startup. Domain types serialize as `camelCase` JSON
//! and accept `snake_case` keys as aliases so they can be written inline
//! in TOML definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use subdivision_map_status_models::{DutyStatus, HouseStatus, IncidentCategory, PaymentStatus};

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// Creates a new coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Declared statistics of a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneStats {
    /// Number of households the zone is declared to have. Must equal the
    /// number of houses once the zone is in a store.
    #[serde(alias = "household_count")]
    pub household_count: u32,
    /// Declared number of residents. Informational only.
    #[serde(alias = "resident_count")]
    pub resident_count: u32,
    /// Year the zone was established.
    #[serde(alias = "year_established")]
    pub year_established: u16,
}

/// A polygonal area of the subdivision and the houses inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    /// Unique zone identifier (e.g. `"Zone1"`).
    pub id: String,
    /// Polygon vertices in drawing order. The ring is not closed; the
    /// first vertex is not repeated at the end.
    pub positions: Vec<LatLng>,
    /// Human-readable name (e.g. `"Phase 1 - Block A"`).
    pub name: String,
    /// Zone category (e.g. `"Residential"`, `"Amenity"`).
    pub category: String,
    /// Fill color of the zone polygon (CSS color).
    pub color: String,
    /// Declared statistics.
    pub stats: ZoneStats,
    /// Houses in insertion order.
    pub houses: Vec<House>,
}

impl Zone {
    /// Looks up a house in this zone by identifier.
    #[must_use]
    pub fn house(&self, house_id: &str) -> Option<&House> {
        self.houses.iter().find(|h| h.id == house_id)
    }
}

/// Status of a house and the date it took effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseStatusRecord {
    /// Current occupancy/construction state.
    pub category: HouseStatus,
    /// When the state took effect, as a display string (e.g. `"March 2023"`).
    #[serde(alias = "since_date")]
    pub since_date: String,
}

/// A single household unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    /// Identifier, unique within its zone (e.g. `"A1-1"`).
    pub id: String,
    /// Number of people living in the house.
    #[serde(alias = "occupant_count")]
    pub occupant_count: u32,
    /// Current status.
    pub status: HouseStatusRecord,
    /// Incident history, oldest first.
    #[serde(default)]
    pub incidents: Vec<Incident>,
}

impl House {
    /// Whether the occupancy invariant holds: a house is `Unoccupied`
    /// exactly when it has no occupants, and unoccupied houses carry no
    /// incidents.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let vacant = self.status.category.is_vacant();
        vacant == (self.occupant_count == 0) && (!vacant || self.incidents.is_empty())
    }
}

/// An event logged against a house.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Incident category.
    pub category: IncidentCategory,
    /// Short description.
    pub description: String,
    /// Calendar date the incident was logged.
    pub date: NaiveDate,
}

/// A dues payment owed by a household.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Unique payment identifier.
    pub id: String,
    /// Zone of the paying household.
    pub zone_id: String,
    /// Paying household.
    pub house_id: String,
    /// What the payment is for (e.g. `"Monthly dues - March 2024"`).
    pub description: String,
    /// Amount in cents.
    pub amount_cents: u64,
    /// Date the payment is due.
    pub due_date: NaiveDate,
    /// Settlement state.
    pub status: PaymentStatus,
}

/// A guard assigned to a security entrance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guard {
    /// Guard identifier.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Shift description (e.g. `"06:00-14:00"`).
    pub shift: String,
    /// Whether the guard is on duty.
    #[serde(alias = "duty_status")]
    pub duty_status: DutyStatus,
    /// Contact number.
    pub contact: String,
}

/// A gate of the subdivision and its guard roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityEntrance {
    /// Entrance identifier.
    pub id: String,
    /// Human-readable name (e.g. `"Main Gate"`).
    pub name: String,
    /// Location of the gate.
    pub position: LatLng,
    /// Guards assigned to this gate.
    #[serde(default)]
    pub guards: Vec<Guard>,
}

/// A subdivision definition, deserialized from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubdivisionDefinition {
    /// Subdivision name.
    pub name: String,
    /// Dues billing configuration.
    #[serde(default)]
    pub billing: Option<BillingDefinition>,
    /// Zone definitions in display order.
    pub zones: Vec<ZoneDefinition>,
    /// Security entrances and their rosters.
    #[serde(default)]
    pub entrances: Vec<SecurityEntrance>,
}

/// How dues payments are generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingDefinition {
    /// Monthly dues per household in cents.
    pub monthly_dues_cents: u64,
    /// Billing due dates, one payment per household per date.
    pub due_dates: Vec<NaiveDate>,
}

/// A zone definition, deserialized from TOML.
///
/// When `houses` is empty, `household_count` houses are generated with
/// ids `"{house_prefix}-{n}"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneDefinition {
    /// Unique zone identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Zone category.
    pub category: String,
    /// Fill color of the zone polygon.
    pub color: String,
    /// Prefix for generated house ids.
    pub house_prefix: String,
    /// Polygon vertices.
    pub positions: Vec<LatLng>,
    /// Declared statistics.
    pub stats: ZoneStats,
    /// Explicit houses. Generated when empty.
    #[serde(default)]
    pub houses: Vec<House>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn house(status: HouseStatus, occupants: u32, incidents: usize) -> House {
        House {
            id: "A1-1".to_string(),
            occupant_count: occupants,
            status: HouseStatusRecord {
                category: status,
                since_date: "March 2023".to_string(),
            },
            incidents: (0..incidents)
                .map(|_| Incident {
                    category: IncidentCategory::Noise,
                    description: "Loud music".to_string(),
                    date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                })
                .collect(),
        }
    }

    #[test]
    fn occupancy_invariant() {
        assert!(house(HouseStatus::Occupied, 3, 2).is_consistent());
        assert!(house(HouseStatus::Unoccupied, 0, 0).is_consistent());
        assert!(house(HouseStatus::UnderConstruction, 1, 0).is_consistent());
        assert!(!house(HouseStatus::Unoccupied, 2, 0).is_consistent());
        assert!(!house(HouseStatus::Unoccupied, 0, 1).is_consistent());
        assert!(!house(HouseStatus::Occupied, 0, 0).is_consistent());
    }

    #[test]
    fn house_json_is_camel_case() {
        let json = serde_json::to_value(house(HouseStatus::Occupied, 4, 0)).unwrap();
        assert_eq!(json["occupantCount"], 4);
        assert_eq!(json["status"]["category"], "OCCUPIED");
        assert_eq!(json["status"]["sinceDate"], "March 2023");
    }

    #[test]
    fn zone_definition_accepts_snake_case_houses() {
        let def: ZoneDefinition = toml::from_str(
            r##"
            id = "Zone1"
            name = "Block A"
            category = "Residential"
            color = "#3b82f6"
            house_prefix = "A1"
            positions = [
                { lat = 14.0, lng = 121.0 },
                { lat = 14.0, lng = 121.1 },
                { lat = 14.1, lng = 121.1 },
            ]
            stats = { household_count = 1, resident_count = 2, year_established = 2019 }

            [[houses]]
            id = "A1-1"
            occupant_count = 2
            status = { category = "Under Renovation", since_date = "May 2024" }
            incidents = [
                { category = "MAINTENANCE", description = "Leaking pipe", date = "2024-02-11" },
            ]
            "##,
        )
        .unwrap();

        assert_eq!(def.stats.household_count, 1);
        assert_eq!(def.houses.len(), 1);
        assert_eq!(def.houses[0].status.category, HouseStatus::UnderRenovation);
        assert_eq!(def.houses[0].incidents.len(), 1);
    }
}
