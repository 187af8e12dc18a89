#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Seedable mock data generator for subdivision houses, incidents, and
//! payments.
//!
//! All randomness flows through a [`MockGenerator`], which is generic over
//! any [`rand::Rng`]. Use [`MockGenerator::seeded`] for reproducible runs
//! (`ChaCha8Rng`, identical output on every platform for the same seed)
//! and inject a fixed-sequence RNG in tests.

pub mod interactive;

use chrono::NaiveDate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use subdivision_map_status_models::{HouseStatus, IncidentCategory, PaymentStatus};
use subdivision_map_zone::{ZoneError, ZoneStore};
use subdivision_map_zone_models::{
    BillingDefinition, House, HouseStatusRecord, Incident, Payment, SubdivisionDefinition, Zone,
};

/// Probability that a generated house is occupied.
const OCCUPIED_WEIGHT: f64 = 0.6;
/// Probability that a generated house is unoccupied.
const UNOCCUPIED_WEIGHT: f64 = 0.3;
/// Probability that a non-vacant house has any incidents.
const INCIDENT_PROBABILITY: f64 = 0.4;
/// Maximum number of incidents per house.
const MAX_INCIDENTS: usize = 3;
/// Maximum number of occupants per house.
const MAX_OCCUPANTS: u32 = 6;

/// Probability that a dues payment is settled.
const PAID_WEIGHT: f64 = 0.7;
/// Probability that a dues payment is pending (the rest are overdue).
const PENDING_WEIGHT: f64 = 0.2;

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const SINCE_YEARS: [u16; 3] = [2022, 2023, 2024];

const INCIDENT_YEARS: std::ops::RangeInclusive<i32> = 2023..=2024;

/// Fixed description pool per incident category.
#[must_use]
pub const fn incident_descriptions(category: IncidentCategory) -> &'static [&'static str; 5] {
    match category {
        IncidentCategory::Maintenance => &[
            "Leaking faucet",
            "Clogged drainage",
            "Roof leak during heavy rain",
            "Electrical outlet not working",
            "Broken streetlight in front of the house",
        ],
        IncidentCategory::Noise => &[
            "Loud music late at night",
            "Barking dogs",
            "Karaoke past curfew",
            "Revving motorcycles",
            "Loud party on the weekend",
        ],
        IncidentCategory::Construction => &[
            "Debris left on the road",
            "Work outside permitted hours",
            "Driveway blocked by materials",
            "Dust from cement mixing",
            "Unpermitted extension",
        ],
        IncidentCategory::Other => &[
            "Stray animals",
            "Suspicious person reported",
            "Illegal parking",
            "Uncollected garbage",
            "Lost package",
        ],
    }
}

/// Generates mock houses, incidents and payments from an injected RNG.
pub struct MockGenerator<R> {
    rng: R,
}

impl MockGenerator<ChaCha8Rng> {
    /// Creates a reproducible generator seeded from `seed`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a generator with a random seed. The seed is logged so the
    /// run can be reproduced with [`Self::seeded`].
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::random();
        log::info!("Generating mock data with seed {seed}");
        Self::seeded(seed)
    }
}

impl<R: Rng> MockGenerator<R> {
    /// Wraps an arbitrary RNG.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draws a house status: 60% occupied, 30% unoccupied, and the rest
    /// split evenly across the four construction/renovation states.
    pub fn house_status(&mut self) -> HouseStatus {
        let roll: f64 = self.rng.gen_range(0.0..1.0);
        if roll < OCCUPIED_WEIGHT {
            HouseStatus::Occupied
        } else if roll < OCCUPIED_WEIGHT + UNOCCUPIED_WEIGHT {
            HouseStatus::Unoccupied
        } else {
            let works = HouseStatus::works();
            works[self.rng.gen_range(0..works.len())]
        }
    }

    /// Generates `count` houses with ids `"{prefix}-1"` through
    /// `"{prefix}-{count}"`.
    pub fn generate_houses(&mut self, prefix: &str, count: u32) -> Vec<House> {
        (1..=count)
            .map(|n| self.generate_house(format!("{prefix}-{n}")))
            .collect()
    }

    fn generate_house(&mut self, id: String) -> House {
        let category = self.house_status();
        let vacant = category.is_vacant();

        let occupant_count = if vacant {
            0
        } else {
            self.rng.gen_range(1..=MAX_OCCUPANTS)
        };

        let since_date = format!(
            "{} {}",
            MONTHS[self.rng.gen_range(0..MONTHS.len())],
            SINCE_YEARS[self.rng.gen_range(0..SINCE_YEARS.len())],
        );

        let incidents = if !vacant && self.rng.gen_bool(INCIDENT_PROBABILITY) {
            let count = self.rng.gen_range(1..=MAX_INCIDENTS);
            let mut incidents: Vec<Incident> =
                (0..count).filter_map(|_| self.generate_incident()).collect();
            incidents.sort_by_key(|i| i.date);
            incidents
        } else {
            Vec::new()
        };

        House {
            id,
            occupant_count,
            status: HouseStatusRecord {
                category,
                since_date,
            },
            incidents,
        }
    }

    fn generate_incident(&mut self) -> Option<Incident> {
        let categories = IncidentCategory::all();
        let category = categories[self.rng.gen_range(0..categories.len())];
        let descriptions = incident_descriptions(category);
        let description = descriptions[self.rng.gen_range(0..descriptions.len())];

        let year = self.rng.gen_range(INCIDENT_YEARS);
        let month = self.rng.gen_range(1..=12);
        let day = self.rng.gen_range(1..=28);

        Some(Incident {
            category,
            description: description.to_string(),
            date: NaiveDate::from_ymd_opt(year, month, day)?,
        })
    }

    /// Generates one dues payment per billing date for every non-vacant
    /// house: 70% paid, 20% pending, 10% overdue.
    pub fn generate_payments(
        &mut self,
        zone_id: &str,
        houses: &[House],
        billing: &BillingDefinition,
    ) -> Vec<Payment> {
        let mut payments = Vec::new();

        for house in houses.iter().filter(|h| !h.status.category.is_vacant()) {
            for due_date in &billing.due_dates {
                let roll: f64 = self.rng.gen_range(0.0..1.0);
                let status = if roll < PAID_WEIGHT {
                    PaymentStatus::Paid
                } else if roll < PAID_WEIGHT + PENDING_WEIGHT {
                    PaymentStatus::Pending
                } else {
                    PaymentStatus::Overdue
                };

                payments.push(Payment {
                    id: format!("{zone_id}-{}-{}", house.id, due_date.format("%Y%m%d")),
                    zone_id: zone_id.to_string(),
                    house_id: house.id.clone(),
                    description: format!("Monthly dues - {}", due_date.format("%B %Y")),
                    amount_cents: billing.monthly_dues_cents,
                    due_date: *due_date,
                    status,
                });
            }
        }

        payments
    }
}

/// Populates a [`ZoneStore`] from a subdivision definition.
///
/// Zones that list explicit houses keep them verbatim; every other zone
/// gets `household_count` generated houses. Payments are generated when
/// the definition has a billing section.
///
/// # Errors
///
/// Returns [`ZoneError`] if the resulting data fails store validation
/// (e.g. explicit houses disagree with the declared household count).
pub fn generate_store<R: Rng>(
    definition: &SubdivisionDefinition,
    generator: &mut MockGenerator<R>,
) -> Result<ZoneStore, ZoneError> {
    let mut zones = Vec::with_capacity(definition.zones.len());
    let mut payments = Vec::new();

    for def in &definition.zones {
        let houses = if def.houses.is_empty() {
            generator.generate_houses(&def.house_prefix, def.stats.household_count)
        } else {
            def.houses.clone()
        };
        log::debug!("Zone {}: {} houses", def.id, houses.len());

        if let Some(billing) = &definition.billing {
            payments.extend(generator.generate_payments(&def.id, &houses, billing));
        }

        zones.push(Zone {
            id: def.id.clone(),
            positions: def.positions.clone(),
            name: def.name.clone(),
            category: def.category.clone(),
            color: def.color.clone(),
            stats: def.stats,
            houses,
        });
    }

    ZoneStore::new(
        definition.name.clone(),
        zones,
        definition.entrances.clone(),
        payments,
    )
}

/// Serializes the contents of a store as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn store_to_json(store: &ZoneStore) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "name": store.name(),
        "zones": store.zones(),
        "entrances": store.entrances(),
        "payments": store.payments(),
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::rngs::mock::StepRng;
    use subdivision_map_zone::registry::default_definition;

    use super::*;

    #[test]
    fn generated_houses_hold_invariants() {
        for seed in 0..50 {
            let mut generator = MockGenerator::seeded(seed);
            let houses = generator.generate_houses("A1", 100);

            assert_eq!(houses.len(), 100);
            for (idx, house) in houses.iter().enumerate() {
                assert_eq!(house.id, format!("A1-{}", idx + 1));
                assert!(house.is_consistent(), "seed {seed}: {house:?}");
                assert!(house.occupant_count <= MAX_OCCUPANTS);
                assert!(house.incidents.len() <= MAX_INCIDENTS);
                assert!(
                    SINCE_YEARS
                        .iter()
                        .any(|y| house.status.since_date.ends_with(&y.to_string())),
                    "{}",
                    house.status.since_date
                );
                for incident in &house.incidents {
                    assert!(
                        incident_descriptions(incident.category)
                            .contains(&incident.description.as_str())
                    );
                    assert!(INCIDENT_YEARS.contains(&chrono::Datelike::year(&incident.date)));
                }
            }
        }
    }

    #[test]
    fn same_seed_same_output() {
        let a = MockGenerator::seeded(42).generate_houses("B1", 30);
        let b = MockGenerator::seeded(42).generate_houses("B1", 30);
        assert_eq!(a, b);
    }

    #[test]
    fn status_distribution_follows_weights() {
        let mut generator = MockGenerator::seeded(7);
        let n = 20_000;
        let mut occupied = 0;
        let mut unoccupied = 0;
        let mut works = 0;
        for _ in 0..n {
            match generator.house_status() {
                HouseStatus::Occupied => occupied += 1,
                HouseStatus::Unoccupied => unoccupied += 1,
                _ => works += 1,
            }
        }

        let frac = |c: i32| f64::from(c) / f64::from(n);
        assert!((frac(occupied) - 0.6).abs() < 0.03, "{}", frac(occupied));
        assert!((frac(unoccupied) - 0.3).abs() < 0.03, "{}", frac(unoccupied));
        assert!((frac(works) - 0.1).abs() < 0.03, "{}", frac(works));
    }

    #[test]
    fn injected_rng_is_deterministic() {
        let mut generator = MockGenerator::new(StepRng::new(0, 0));
        let houses = generator.generate_houses("C1", 5);

        for house in &houses {
            assert_eq!(house.status.category, HouseStatus::Occupied);
            assert_eq!(house.occupant_count, 1);
            assert_eq!(house.status.since_date, "January 2022");
        }
    }

    #[test]
    fn zero_count_generates_nothing() {
        assert!(MockGenerator::seeded(1).generate_houses("Z", 0).is_empty());
    }

    #[test]
    fn payments_skip_vacant_houses() {
        let billing = BillingDefinition {
            monthly_dues_cents: 150_000,
            due_dates: vec![
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                NaiveDate::from_ymd_opt(2024, 2, 5).unwrap(),
            ],
        };
        let mut generator = MockGenerator::seeded(3);
        let houses = generator.generate_houses("A1", 40);
        let payments = generator.generate_payments("Zone1", &houses, &billing);

        let non_vacant = houses
            .iter()
            .filter(|h| !h.status.category.is_vacant())
            .count();
        assert_eq!(payments.len(), non_vacant * 2);
        for payment in &payments {
            let house = houses.iter().find(|h| h.id == payment.house_id).unwrap();
            assert!(!house.status.category.is_vacant());
            assert_eq!(payment.amount_cents, 150_000);
        }
    }

    #[test]
    fn payment_ids_are_unique_across_zones() {
        let mut def = default_definition();
        let zone2 = def.zones.iter_mut().find(|z| z.id == "Zone2").unwrap();
        zone2.house_prefix = "A1".to_string();

        let store = generate_store(&def, &mut MockGenerator::seeded(5)).unwrap();

        let mut ids = BTreeSet::new();
        for payment in store.payments() {
            assert!(ids.insert(payment.id.as_str()), "{}", payment.id);
        }
        assert!(store.payments().iter().any(|p| p.zone_id == "Zone2"));
    }

    #[test]
    fn payment_ids_are_unique_within_a_month() {
        let billing = BillingDefinition {
            monthly_dues_cents: 150_000,
            due_dates: vec![
                NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            ],
        };
        let mut generator = MockGenerator::seeded(9);
        let houses = generator.generate_houses("A1", 10);
        let payments = generator.generate_payments("Zone1", &houses, &billing);

        let ids: BTreeSet<&str> = payments.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), payments.len());
        assert!(payments.iter().all(|p| p.id.starts_with("Zone1-A1-")));
    }

    #[test]
    fn default_definition_builds_store() {
        let def = default_definition();
        let store = generate_store(&def, &mut MockGenerator::seeded(11)).unwrap();

        assert_eq!(store.zones().len(), def.zones.len());
        for zone in store.zones() {
            assert_eq!(zone.houses.len(), zone.stats.household_count as usize);
        }

        let model_homes = store.zone("Zone5").unwrap();
        let ids: Vec<&str> = model_homes.houses.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, ["M1-1", "M1-2", "M1-3"]);
        assert!(!store.payments().is_empty());
    }

    #[test]
    fn explicit_house_count_mismatch_fails() {
        let mut def = default_definition();
        let zone5 = def.zones.iter_mut().find(|z| z.id == "Zone5").unwrap();
        zone5.stats.household_count = 10;

        assert!(matches!(
            generate_store(&def, &mut MockGenerator::seeded(1)),
            Err(ZoneError::HouseholdCountMismatch { .. })
        ));
    }
}
