//! The validated in-memory subdivision store.

use std::collections::{BTreeMap, BTreeSet};

use subdivision_map_zone_models::{Payment, SecurityEntrance, Zone};

use crate::ZoneError;

/// Owns every zone, house, payment and security entrance of a
/// subdivision.
///
/// Constructed once through [`ZoneStore::new`], which rejects data that
/// breaks the model invariants, and read-only afterwards.
#[derive(Debug, Clone)]
pub struct ZoneStore {
    name: String,
    zones: Vec<Zone>,
    zone_index: BTreeMap<String, usize>,
    entrances: Vec<SecurityEntrance>,
    payments: Vec<Payment>,
}

impl ZoneStore {
    /// Builds a store, validating every zone, house and payment.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError`] if zone ids or house ids (within a zone)
    /// repeat, a polygon has fewer than three vertices, a zone's declared
    /// household count differs from its number of houses, a house breaks
    /// the occupancy invariant, a payment id repeats, or a payment
    /// references an unknown house.
    pub fn new(
        name: impl Into<String>,
        zones: Vec<Zone>,
        entrances: Vec<SecurityEntrance>,
        payments: Vec<Payment>,
    ) -> Result<Self, ZoneError> {
        let mut zone_index = BTreeMap::new();

        for (idx, zone) in zones.iter().enumerate() {
            validate_zone(zone)?;
            if zone_index.insert(zone.id.clone(), idx).is_some() {
                return Err(ZoneError::DuplicateZone {
                    zone_id: zone.id.clone(),
                });
            }
        }

        let store = Self {
            name: name.into(),
            zones,
            zone_index,
            entrances,
            payments,
        };

        let mut payment_ids = BTreeSet::new();
        for payment in &store.payments {
            if !payment_ids.insert(payment.id.as_str()) {
                return Err(ZoneError::DuplicatePayment {
                    payment_id: payment.id.clone(),
                });
            }
            if store
                .zone(&payment.zone_id)
                .and_then(|z| z.house(&payment.house_id))
                .is_none()
            {
                return Err(ZoneError::UnknownPaymentHouse {
                    payment_id: payment.id.clone(),
                    zone_id: payment.zone_id.clone(),
                    house_id: payment.house_id.clone(),
                });
            }
        }

        log::info!(
            "Built store for {}: {} zones, {} houses, {} payments, {} entrances",
            store.name,
            store.zones.len(),
            store.zones.iter().map(|z| z.houses.len()).sum::<usize>(),
            store.payments.len(),
            store.entrances.len(),
        );

        Ok(store)
    }

    /// Subdivision name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All zones in definition order.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Looks up a zone by identifier.
    #[must_use]
    pub fn zone(&self, zone_id: &str) -> Option<&Zone> {
        self.zone_index.get(zone_id).map(|idx| &self.zones[*idx])
    }

    /// Security entrances and their guard rosters.
    #[must_use]
    pub fn entrances(&self) -> &[SecurityEntrance] {
        &self.entrances
    }

    /// All dues payments.
    #[must_use]
    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    /// Payments owed by a single household.
    pub fn payments_for<'a>(
        &'a self,
        zone_id: &'a str,
        house_id: &'a str,
    ) -> impl Iterator<Item = &'a Payment> + 'a {
        self.payments
            .iter()
            .filter(move |p| p.zone_id == zone_id && p.house_id == house_id)
    }
}

fn validate_zone(zone: &Zone) -> Result<(), ZoneError> {
    if zone.positions.len() < 3 {
        return Err(ZoneError::DegeneratePolygon {
            zone_id: zone.id.clone(),
            vertices: zone.positions.len(),
        });
    }

    if usize::try_from(zone.stats.household_count).ok() != Some(zone.houses.len()) {
        return Err(ZoneError::HouseholdCountMismatch {
            zone_id: zone.id.clone(),
            declared: zone.stats.household_count,
            actual: zone.houses.len(),
        });
    }

    let mut seen = BTreeSet::new();
    for house in &zone.houses {
        if !seen.insert(house.id.as_str()) {
            return Err(ZoneError::DuplicateHouse {
                zone_id: zone.id.clone(),
                house_id: house.id.clone(),
            });
        }
        if !house.is_consistent() {
            return Err(ZoneError::InconsistentOccupancy {
                zone_id: zone.id.clone(),
                house_id: house.id.clone(),
            });
        }
    }

    Ok(())
}
