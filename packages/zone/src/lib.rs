#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! In-memory subdivision store, zone/house detail presenters, and
//! dashboard rollups.
//!
//! The [`store::ZoneStore`] is built once at startup from a subdivision
//! definition and validated; everything else in this crate is a pure
//! read-only projection over it. Selection state is never held here:
//! callers keep a [`select::Selection`] value of their own.

pub mod dashboard;
pub mod registry;
pub mod select;
pub mod store;

#[cfg(test)]
pub(crate) mod fixtures;

use thiserror::Error;

pub use store::ZoneStore;

/// Errors that can occur while loading a definition or building a store.
#[derive(Debug, Error)]
pub enum ZoneError {
    /// Reading a definition file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A definition file is not valid TOML for the schema.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Two zones share an identifier.
    #[error("Duplicate zone id: {zone_id}")]
    DuplicateZone {
        /// The repeated identifier.
        zone_id: String,
    },

    /// Two houses in the same zone share an identifier.
    #[error("Duplicate house id {house_id} in zone {zone_id}")]
    DuplicateHouse {
        /// Zone containing the duplicates.
        zone_id: String,
        /// The repeated identifier.
        house_id: String,
    },

    /// A zone polygon has fewer than three vertices.
    #[error("Zone {zone_id} has {vertices} vertices, expected at least 3")]
    DegeneratePolygon {
        /// Offending zone.
        zone_id: String,
        /// Number of vertices found.
        vertices: usize,
    },

    /// The declared household count does not match the number of houses.
    #[error("Zone {zone_id} declares {declared} households but has {actual} houses")]
    HouseholdCountMismatch {
        /// Offending zone.
        zone_id: String,
        /// Declared `householdCount`.
        declared: u32,
        /// Number of houses present.
        actual: usize,
    },

    /// A house breaks the occupancy invariant (`Unoccupied` exactly when
    /// there are no occupants, and no incidents while unoccupied).
    #[error("House {house_id} in zone {zone_id} has inconsistent occupancy")]
    InconsistentOccupancy {
        /// Zone containing the house.
        zone_id: String,
        /// Offending house.
        house_id: String,
    },

    /// A payment references a house that is not in the store.
    #[error("Payment {payment_id} references unknown house {house_id} in zone {zone_id}")]
    UnknownPaymentHouse {
        /// Offending payment.
        payment_id: String,
        /// Referenced zone.
        zone_id: String,
        /// Referenced house.
        house_id: String,
    },

    /// Two payments share an identifier.
    #[error("Duplicate payment id: {payment_id}")]
    DuplicatePayment {
        /// The repeated identifier.
        payment_id: String,
    },
}

/// A zone or house lookup that did not resolve.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No zone has the requested identifier.
    #[error("Zone not found: {zone_id}")]
    ZoneNotFound {
        /// Requested zone.
        zone_id: String,
    },

    /// The zone exists but has no house with the requested identifier.
    #[error("House {house_id} not found in zone {zone_id}")]
    HouseNotFound {
        /// Zone that was searched.
        zone_id: String,
        /// Requested house.
        house_id: String,
    },

    /// A house was selected before any zone.
    #[error("No zone selected")]
    NoZoneSelected,
}
