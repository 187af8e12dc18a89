//! Zone and house detail projections for the map view.
//!
//! [`select_zone`] and [`select_house`] are pure lookups over a
//! [`ZoneStore`]. The currently selected zone/house is held by the caller
//! in a [`Selection`].

use serde::Serialize;
use subdivision_map_status_models::{HouseStatus, StatusStyle, classify};
use subdivision_map_zone_models::{House, Incident, LatLng, Zone, ZoneStats};

use crate::{LookupError, ZoneStore};

/// Number of houses in a single status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    /// Status being counted.
    pub status: HouseStatus,
    /// Map color and badge of the status.
    pub style: StatusStyle,
    /// Houses currently in the status.
    pub count: usize,
}

/// An incident tagged with the house it was logged against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneIncident {
    /// Zone of the house.
    pub zone_id: String,
    /// House the incident was logged against.
    pub house_id: String,
    /// The incident itself, flattened into this object.
    #[serde(flatten)]
    pub incident: Incident,
}

/// One row of the house list in a zone detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseSummary {
    /// House identifier, unique within its zone.
    pub id: String,
    /// Number of occupants.
    pub occupant_count: u32,
    /// Current status.
    pub status: HouseStatus,
    /// When the current status began, e.g. `"June 2023"`.
    pub since_date: String,
    /// Map color and badge of the status.
    pub style: StatusStyle,
    /// Number of incidents logged against the house.
    pub incident_count: usize,
}

impl From<&House> for HouseSummary {
    fn from(house: &House) -> Self {
        Self {
            id: house.id.clone(),
            occupant_count: house.occupant_count,
            status: house.status.category,
            since_date: house.status.since_date.clone(),
            style: classify(house.status.category),
            incident_count: house.incidents.len(),
        }
    }
}

/// Read-only projection of a selected zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneDetail {
    /// Zone identifier.
    pub id: String,
    /// Zone name.
    pub name: String,
    /// Zone category.
    pub category: String,
    /// Polygon fill color.
    pub color: String,
    /// Polygon vertices (unclosed).
    pub positions: Vec<LatLng>,
    /// Declared statistics.
    pub stats: ZoneStats,
    /// Number of houses in the zone.
    pub number_of_households: usize,
    /// Sum of occupant counts over all houses.
    pub number_of_residents: u64,
    /// House count per status, one entry per status in enum order.
    pub status_counts: Vec<StatusCount>,
    /// Total incidents across all houses.
    pub incident_count: usize,
    /// All incidents of the zone, newest first.
    pub incidents: Vec<ZoneIncident>,
    /// Houses in insertion order.
    pub houses: Vec<HouseSummary>,
}

impl From<&Zone> for ZoneDetail {
    fn from(zone: &Zone) -> Self {
        let mut incidents = zone_incidents(zone);
        incidents.sort_by(|a, b| b.incident.date.cmp(&a.incident.date));

        Self {
            id: zone.id.clone(),
            name: zone.name.clone(),
            category: zone.category.clone(),
            color: zone.color.clone(),
            positions: zone.positions.clone(),
            stats: zone.stats,
            number_of_households: zone.houses.len(),
            number_of_residents: resident_total(&zone.houses),
            status_counts: status_counts(&zone.houses),
            incident_count: incidents.len(),
            incidents,
            houses: zone.houses.iter().map(HouseSummary::from).collect(),
        }
    }
}

/// Read-only projection of a selected house.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseDetail {
    /// Containing zone identifier.
    pub zone_id: String,
    /// Containing zone name.
    pub zone_name: String,
    /// House identifier.
    pub id: String,
    /// Number of occupants.
    pub occupant_count: u32,
    /// Current status.
    pub status: HouseStatus,
    /// Display label of the status.
    pub status_label: &'static str,
    /// When the current status began.
    pub since_date: String,
    /// Map color and badge of the status.
    pub style: StatusStyle,
    /// Incidents, oldest first.
    pub incidents: Vec<Incident>,
}

impl HouseDetail {
    fn new(zone: &Zone, house: &House) -> Self {
        Self {
            zone_id: zone.id.clone(),
            zone_name: zone.name.clone(),
            id: house.id.clone(),
            occupant_count: house.occupant_count,
            status: house.status.category,
            status_label: house.status.category.label(),
            since_date: house.status.since_date.clone(),
            style: classify(house.status.category),
            incidents: house.incidents.clone(),
        }
    }
}

/// Looks up a zone and projects its detail.
///
/// # Errors
///
/// Returns [`LookupError::ZoneNotFound`] if no zone has `zone_id`.
pub fn select_zone(store: &ZoneStore, zone_id: &str) -> Result<ZoneDetail, LookupError> {
    log::debug!("Selecting zone {zone_id}");
    store
        .zone(zone_id)
        .map(ZoneDetail::from)
        .ok_or_else(|| LookupError::ZoneNotFound {
            zone_id: zone_id.to_string(),
        })
}

/// Looks up a house within a zone and projects its detail.
///
/// # Errors
///
/// Returns [`LookupError::ZoneNotFound`] if the zone does not exist, or
/// [`LookupError::HouseNotFound`] if the zone has no such house.
pub fn select_house(
    store: &ZoneStore,
    zone_id: &str,
    house_id: &str,
) -> Result<HouseDetail, LookupError> {
    log::debug!("Selecting house {house_id} in zone {zone_id}");
    let zone = store
        .zone(zone_id)
        .ok_or_else(|| LookupError::ZoneNotFound {
            zone_id: zone_id.to_string(),
        })?;
    let house = zone
        .house(house_id)
        .ok_or_else(|| LookupError::HouseNotFound {
            zone_id: zone_id.to_string(),
            house_id: house_id.to_string(),
        })?;

    Ok(HouseDetail::new(zone, house))
}

/// The caller-held map selection.
///
/// A failed selection leaves the previous selection untouched. Selecting
/// a zone drops any selected house.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    zone: Option<ZoneDetail>,
    house: Option<HouseDetail>,
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            zone: None,
            house: None,
        }
    }

    /// Currently selected zone.
    #[must_use]
    pub const fn zone(&self) -> Option<&ZoneDetail> {
        self.zone.as_ref()
    }

    /// Currently selected house.
    #[must_use]
    pub const fn house(&self) -> Option<&HouseDetail> {
        self.house.as_ref()
    }

    /// Selects a zone.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::ZoneNotFound`] if the zone does not exist.
    pub fn select_zone(
        &mut self,
        store: &ZoneStore,
        zone_id: &str,
    ) -> Result<&ZoneDetail, LookupError> {
        let detail = select_zone(store, zone_id)?;
        self.house = None;
        Ok(self.zone.insert(detail))
    }

    /// Selects a house within the currently selected zone.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NoZoneSelected`] if no zone is selected, or
    /// the errors of [`select_house`].
    pub fn select_house(
        &mut self,
        store: &ZoneStore,
        house_id: &str,
    ) -> Result<&HouseDetail, LookupError> {
        let zone_id = self
            .zone
            .as_ref()
            .map(|z| z.id.as_str())
            .ok_or(LookupError::NoZoneSelected)?;
        let detail = select_house(store, zone_id, house_id)?;
        Ok(self.house.insert(detail))
    }

    /// Closes the house detail, keeping the zone selected.
    pub fn clear_house(&mut self) {
        self.house = None;
    }

    /// Clears the whole selection.
    pub fn clear(&mut self) {
        self.zone = None;
        self.house = None;
    }
}

pub(crate) fn resident_total(houses: &[House]) -> u64 {
    houses.iter().map(|h| u64::from(h.occupant_count)).sum()
}

pub(crate) fn status_counts<'a>(houses: impl IntoIterator<Item = &'a House>) -> Vec<StatusCount> {
    let mut counts = [0usize; 6];
    for house in houses {
        if let Some(idx) = HouseStatus::all()
            .iter()
            .position(|s| *s == house.status.category)
        {
            counts[idx] += 1;
        }
    }

    HouseStatus::all()
        .iter()
        .zip(counts)
        .map(|(status, count)| StatusCount {
            status: *status,
            style: classify(*status),
            count,
        })
        .collect()
}

pub(crate) fn zone_incidents(zone: &Zone) -> Vec<ZoneIncident> {
    zone.houses
        .iter()
        .flat_map(|house| {
            house.incidents.iter().map(|incident| ZoneIncident {
                zone_id: zone.id.clone(),
                house_id: house.id.clone(),
                incident: incident.clone(),
            })
        })
        .collect()
}
