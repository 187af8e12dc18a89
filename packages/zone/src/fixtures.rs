//! Shared test data.

use chrono::NaiveDate;
use subdivision_map_status_models::{DutyStatus, HouseStatus, IncidentCategory, PaymentStatus};
use subdivision_map_zone_models::{
    Guard, House, HouseStatusRecord, Incident, LatLng, Payment, SecurityEntrance, Zone, ZoneStats,
};

use crate::ZoneStore;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn house(id: &str, status: HouseStatus, occupants: u32, incidents: usize) -> House {
    House {
        id: id.to_string(),
        occupant_count: occupants,
        status: HouseStatusRecord {
            category: status,
            since_date: "March 2023".to_string(),
        },
        incidents: (0..incidents)
            .map(|i| Incident {
                category: IncidentCategory::Maintenance,
                description: "Leaking pipe".to_string(),
                date: date(2024, 1, u32::try_from(i).unwrap() + 1),
            })
            .collect(),
    }
}

pub fn zone(id: &str, houses: Vec<House>) -> Zone {
    Zone {
        id: id.to_string(),
        positions: vec![
            LatLng::new(14.0, 121.0),
            LatLng::new(14.0, 121.01),
            LatLng::new(14.01, 121.01),
            LatLng::new(14.01, 121.0),
        ],
        name: format!("{id} Block"),
        category: "Residential".to_string(),
        color: "#3b82f6".to_string(),
        stats: ZoneStats {
            household_count: u32::try_from(houses.len()).unwrap(),
            resident_count: 10,
            year_established: 2019,
        },
        houses,
    }
}

pub fn payment(id: &str, zone_id: &str, house_id: &str) -> Payment {
    Payment {
        id: id.to_string(),
        zone_id: zone_id.to_string(),
        house_id: house_id.to_string(),
        description: "Monthly dues".to_string(),
        amount_cents: 150_000,
        due_date: date(2024, 3, 5),
        status: PaymentStatus::Paid,
    }
}

/// `Zone1` with `A1-1` (occupied, 4 occupants) and `A1-2` (under
/// renovation, 3 occupants, 1 incident).
pub fn zone1_store() -> ZoneStore {
    let z = zone(
        "Zone1",
        vec![
            house("A1-1", HouseStatus::Occupied, 4, 0),
            house("A1-2", HouseStatus::UnderRenovation, 3, 1),
        ],
    );

    let mut pending = payment("P-2", "Zone1", "A1-2");
    pending.status = PaymentStatus::Pending;

    let entrance = SecurityEntrance {
        id: "gate-1".to_string(),
        name: "Main Gate".to_string(),
        position: LatLng::new(14.0, 121.0),
        guards: vec![
            Guard {
                id: "g-1".to_string(),
                name: "Ramon Cruz".to_string(),
                shift: "06:00-14:00".to_string(),
                duty_status: DutyStatus::OnDuty,
                contact: "0917-000-0001".to_string(),
            },
            Guard {
                id: "g-2".to_string(),
                name: "Liza Santos".to_string(),
                shift: "14:00-22:00".to_string(),
                duty_status: DutyStatus::OffDuty,
                contact: "0917-000-0002".to_string(),
            },
        ],
    };

    ZoneStore::new(
        "Test Subdivision",
        vec![z],
        vec![entrance],
        vec![payment("P-1", "Zone1", "A1-1"), pending],
    )
    .unwrap()
}
