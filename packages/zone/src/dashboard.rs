//! Admin and household-owner dashboard rollups.

use chrono::NaiveDate;
use serde::Serialize;
use subdivision_map_status_models::{DutyStatus, IncidentCategory, PaymentStatus};
use subdivision_map_zone_models::{Payment, SecurityEntrance, Zone};

use crate::select::{
    HouseDetail, StatusCount, ZoneIncident, resident_total, select_house, status_counts,
    zone_incidents,
};
use crate::{LookupError, ZoneStore};

/// Number of incidents listed in the admin "recent incidents" panel.
pub const RECENT_INCIDENT_LIMIT: usize = 10;

/// Per-zone figures shown in dashboard tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRollup {
    pub zone_id: String,
    pub name: String,
    pub households: usize,
    pub residents: u64,
    /// Houses with at least one occupant.
    pub occupied: usize,
    pub incidents: usize,
    /// `occupied / households`, `0.0` for a zone without houses.
    pub occupancy_rate: f64,
}

impl From<&Zone> for ZoneRollup {
    fn from(zone: &Zone) -> Self {
        let households = zone.houses.len();
        let occupied = zone.houses.iter().filter(|h| h.occupant_count > 0).count();

        Self {
            zone_id: zone.id.clone(),
            name: zone.name.clone(),
            households,
            residents: resident_total(&zone.houses),
            occupied,
            incidents: zone.houses.iter().map(|h| h.incidents.len()).sum(),
            occupancy_rate: ratio(occupied, households),
        }
    }
}

/// Count of incidents in a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentCategoryCount {
    pub category: IncidentCategory,
    pub count: usize,
}

/// Totals of a set of payments, by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummary {
    pub collected_cents: u64,
    pub pending_cents: u64,
    pub overdue_cents: u64,
    pub paid_count: usize,
    pub pending_count: usize,
    pub overdue_count: usize,
}

impl PaymentSummary {
    /// Sums the given payments.
    #[must_use]
    pub fn from_payments<'a>(payments: impl IntoIterator<Item = &'a Payment>) -> Self {
        payments
            .into_iter()
            .fold(Self::default(), |mut acc, p| {
                match p.status {
                    PaymentStatus::Paid => {
                        acc.collected_cents += p.amount_cents;
                        acc.paid_count += 1;
                    }
                    PaymentStatus::Pending => {
                        acc.pending_cents += p.amount_cents;
                        acc.pending_count += 1;
                    }
                    PaymentStatus::Overdue => {
                        acc.overdue_cents += p.amount_cents;
                        acc.overdue_count += 1;
                    }
                }
                acc
            })
    }

    /// Amount still owed (pending plus overdue).
    #[must_use]
    pub const fn outstanding_cents(&self) -> u64 {
        self.pending_cents + self.overdue_cents
    }
}

/// Guard headcount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardSummary {
    pub total: usize,
    pub on_duty: usize,
}

impl GuardSummary {
    fn from_entrances(entrances: &[SecurityEntrance]) -> Self {
        let guards = entrances.iter().flat_map(|e| &e.guards);
        let mut summary = Self::default();
        for guard in guards {
            summary.total += 1;
            if guard.duty_status == DutyStatus::OnDuty {
                summary.on_duty += 1;
            }
        }
        summary
    }
}

/// Subdivision-wide rollup for the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    pub subdivision: String,
    pub zone_count: usize,
    pub household_count: usize,
    pub resident_count: u64,
    /// `occupied / households` across the subdivision.
    pub occupancy_rate: f64,
    pub status_counts: Vec<StatusCount>,
    pub incidents_by_category: Vec<IncidentCategoryCount>,
    /// Most recent incidents, newest first.
    pub recent_incidents: Vec<ZoneIncident>,
    pub zones: Vec<ZoneRollup>,
    pub payments: PaymentSummary,
    pub guards: GuardSummary,
}

/// Builds the admin dashboard.
#[must_use]
pub fn admin_dashboard(store: &ZoneStore) -> AdminDashboard {
    let zones: Vec<ZoneRollup> = store.zones().iter().map(ZoneRollup::from).collect();
    let household_count: usize = zones.iter().map(|z| z.households).sum();
    let occupied: usize = zones.iter().map(|z| z.occupied).sum();

    let mut incidents: Vec<ZoneIncident> = store.zones().iter().flat_map(zone_incidents).collect();

    let incidents_by_category = IncidentCategory::all()
        .iter()
        .map(|category| IncidentCategoryCount {
            category: *category,
            count: incidents
                .iter()
                .filter(|i| i.incident.category == *category)
                .count(),
        })
        .collect();

    incidents.sort_by(|a, b| b.incident.date.cmp(&a.incident.date));
    incidents.truncate(RECENT_INCIDENT_LIMIT);

    AdminDashboard {
        subdivision: store.name().to_string(),
        zone_count: zones.len(),
        household_count,
        resident_count: zones.iter().map(|z| z.residents).sum(),
        occupancy_rate: ratio(occupied, household_count),
        status_counts: status_counts(store.zones().iter().flat_map(|z| &z.houses)),
        incidents_by_category,
        recent_incidents: incidents,
        zones,
        payments: PaymentSummary::from_payments(store.payments()),
        guards: GuardSummary::from_entrances(store.entrances()),
    }
}

/// Rollup for a single household owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDashboard {
    pub house: HouseDetail,
    pub zone: ZoneRollup,
    /// The household's payments ordered by due date.
    pub payments: Vec<Payment>,
    pub payment_summary: PaymentSummary,
    /// Pending plus overdue amount.
    pub balance_due_cents: u64,
    /// Earliest due date among unpaid payments.
    pub next_due_date: Option<NaiveDate>,
}

/// Builds the dashboard of the owner of `house_id` in `zone_id`.
///
/// # Errors
///
/// Returns [`LookupError`] if the zone or house does not exist.
pub fn owner_dashboard(
    store: &ZoneStore,
    zone_id: &str,
    house_id: &str,
) -> Result<OwnerDashboard, LookupError> {
    let house = select_house(store, zone_id, house_id)?;
    let zone = store
        .zone(zone_id)
        .map(ZoneRollup::from)
        .ok_or_else(|| LookupError::ZoneNotFound {
            zone_id: zone_id.to_string(),
        })?;

    let mut payments: Vec<Payment> = store.payments_for(zone_id, house_id).cloned().collect();
    payments.sort_by_key(|p| p.due_date);

    let payment_summary = PaymentSummary::from_payments(&payments);
    let next_due_date = payments
        .iter()
        .filter(|p| p.status.is_outstanding())
        .map(|p| p.due_date)
        .min();

    Ok(OwnerDashboard {
        house,
        zone,
        balance_due_cents: payment_summary.outstanding_cents(),
        payment_summary,
        payments,
        next_due_date,
    })
}

#[allow(clippy::cast_precision_loss)]
fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

#[cfg(test)]
mod tests {
    use subdivision_map_status_models::HouseStatus;

    use super::*;
    use crate::fixtures::{date, house, payment, zone, zone1_store};

    #[test]
    fn admin_totals() {
        let store = zone1_store();
        let dashboard = admin_dashboard(&store);

        assert_eq!(dashboard.subdivision, "Test Subdivision");
        assert_eq!(dashboard.zone_count, 1);
        assert_eq!(dashboard.household_count, 2);
        assert_eq!(dashboard.resident_count, 7);
        assert!((dashboard.occupancy_rate - 1.0).abs() < f64::EPSILON);
        assert_eq!(dashboard.recent_incidents.len(), 1);
        assert_eq!(dashboard.payments.paid_count, 1);
        assert_eq!(dashboard.payments.pending_count, 1);
        assert_eq!(dashboard.payments.collected_cents, 150_000);
        assert_eq!(dashboard.guards, GuardSummary { total: 2, on_duty: 1 });

        let maintenance = dashboard
            .incidents_by_category
            .iter()
            .find(|c| c.category == IncidentCategory::Maintenance)
            .unwrap();
        assert_eq!(maintenance.count, 1);
        assert_eq!(dashboard.incidents_by_category.len(), 4);
    }

    #[test]
    fn empty_store_has_no_nan() {
        let store = ZoneStore::new("Empty", vec![zone("Park", vec![])], vec![], vec![]).unwrap();
        let dashboard = admin_dashboard(&store);

        assert_eq!(dashboard.household_count, 0);
        assert_eq!(dashboard.resident_count, 0);
        assert!(dashboard.occupancy_rate.abs() < f64::EPSILON);
        assert!(!dashboard.zones[0].occupancy_rate.is_nan());
        assert_eq!(dashboard.payments, PaymentSummary::default());
    }

    #[test]
    fn resident_count_exceeds_u32() {
        let a = zone("Zone1", vec![house("A1-1", HouseStatus::Occupied, u32::MAX, 0)]);
        let b = zone("Zone2", vec![house("B1-1", HouseStatus::Occupied, u32::MAX, 0)]);
        let store = ZoneStore::new("Crowded", vec![a, b], vec![], vec![]).unwrap();
        let dashboard = admin_dashboard(&store);

        assert_eq!(dashboard.zones[0].residents, u64::from(u32::MAX));
        assert_eq!(dashboard.resident_count, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn recent_incidents_are_capped_and_sorted() {
        let z = zone("Zone1", vec![house("A1-1", HouseStatus::Occupied, 2, 15)]);
        let store = ZoneStore::new("Busy", vec![z], vec![], vec![]).unwrap();
        let dashboard = admin_dashboard(&store);

        assert_eq!(dashboard.recent_incidents.len(), RECENT_INCIDENT_LIMIT);
        assert_eq!(dashboard.recent_incidents[0].incident.date, date(2024, 1, 15));
    }

    #[test]
    fn owner_balance_and_next_due() {
        let z = zone("Zone1", vec![house("A1-1", HouseStatus::Occupied, 2, 0)]);
        let mut late = payment("P-1", "Zone1", "A1-1");
        late.status = PaymentStatus::Overdue;
        late.due_date = date(2024, 2, 5);
        let mut upcoming = payment("P-2", "Zone1", "A1-1");
        upcoming.status = PaymentStatus::Pending;
        upcoming.due_date = date(2024, 4, 5);
        let paid = payment("P-3", "Zone1", "A1-1");

        let store = ZoneStore::new("Test", vec![z], vec![], vec![upcoming, paid, late]).unwrap();
        let dashboard = owner_dashboard(&store, "Zone1", "A1-1").unwrap();

        assert_eq!(dashboard.balance_due_cents, 300_000);
        assert_eq!(dashboard.next_due_date, Some(date(2024, 2, 5)));
        let ids: Vec<&str> = dashboard.payments.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P-1", "P-3", "P-2"]);
    }

    #[test]
    fn owner_of_unknown_house_is_not_found() {
        let store = zone1_store();
        assert!(matches!(
            owner_dashboard(&store, "Zone1", "A1-999"),
            Err(LookupError::HouseNotFound { .. })
        ));
    }
}
