#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Household status taxonomy, incident categories, and display
//! classification.
//!
//! This crate defines the closed enumerations shared across the whole
//! subdivision map: the six occupancy/construction states a house can be
//! in, the incident categories logged against houses, payment and guard
//! duty states, and the fixed mapping from a house status to the color
//! token and badge variant the map and dashboards render it with.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Occupancy or construction state of a single house.
///
/// Deserialization is lenient: any label that does not name one of the
/// six states falls back to [`HouseStatus::Occupied`] (see
/// [`HouseStatus::from_label`]).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", from = "String")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HouseStatus {
    /// Residents currently live in the house.
    Occupied,
    /// Nobody lives in the house.
    Unoccupied,
    /// Renovation work is in progress.
    UnderRenovation,
    /// Renovation work is scheduled.
    UpcomingRenovation,
    /// The house is being built.
    UnderConstruction,
    /// Construction is scheduled on the lot.
    UpcomingConstruction,
}

impl HouseStatus {
    /// The status used when a label cannot be recognized.
    pub const DEFAULT: Self = Self::Occupied;

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Occupied,
            Self::Unoccupied,
            Self::UnderRenovation,
            Self::UpcomingRenovation,
            Self::UnderConstruction,
            Self::UpcomingConstruction,
        ]
    }

    /// Returns the statuses that describe building work, i.e. everything
    /// except [`Self::Occupied`] and [`Self::Unoccupied`].
    #[must_use]
    pub const fn works() -> &'static [Self] {
        &[
            Self::UnderRenovation,
            Self::UpcomingRenovation,
            Self::UnderConstruction,
            Self::UpcomingConstruction,
        ]
    }

    /// Human-readable label (e.g. `"Under Renovation"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Occupied => "Occupied",
            Self::Unoccupied => "Unoccupied",
            Self::UnderRenovation => "Under Renovation",
            Self::UpcomingRenovation => "Upcoming Renovation",
            Self::UnderConstruction => "Under Construction",
            Self::UpcomingConstruction => "Upcoming Construction",
        }
    }

    /// Parses a free-form status label.
    ///
    /// Accepts the canonical `SCREAMING_SNAKE_CASE` name as well as
    /// `PascalCase`, kebab-case and space separated labels such as
    /// `"Under Renovation"`. Unrecognized labels fall back to
    /// [`Self::DEFAULT`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        normalize_label(label).parse().unwrap_or_else(|_| {
            log::warn!(
                "Unrecognized house status {label:?}, defaulting to {}",
                Self::DEFAULT
            );
            Self::DEFAULT
        })
    }

    /// Whether the house has residents in this state.
    #[must_use]
    pub const fn is_vacant(self) -> bool {
        matches!(self, Self::Unoccupied)
    }
}

impl From<String> for HouseStatus {
    fn from(value: String) -> Self {
        Self::from_label(&value)
    }
}

/// Converts `"Under Renovation"`, `"UnderRenovation"` or
/// `"under-renovation"` into `"UNDER_RENOVATION"`.
fn normalize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len() + 4);
    let mut prev_lower = false;

    for ch in label.trim().chars() {
        if ch.is_alphanumeric() {
            if ch.is_uppercase() && prev_lower {
                out.push('_');
            }
            out.extend(ch.to_uppercase());
            prev_lower = ch.is_lowercase();
        } else {
            if !out.ends_with('_') {
                out.push('_');
            }
            prev_lower = false;
        }
    }

    out
}

/// Color token a status is painted with on the map and in dashboards.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorToken {
    /// Green, used for occupied houses.
    Emerald,
    /// Neutral gray, used for vacant houses.
    Slate,
    /// Yellow-orange, used for ongoing renovation.
    Amber,
    /// Light blue, used for scheduled renovation.
    Sky,
    /// Orange, used for ongoing construction.
    Orange,
    /// Purple, used for scheduled construction.
    Violet,
}

impl ColorToken {
    /// Returns the CSS hex color for this token.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Emerald => "#10b981",
            Self::Slate => "#64748b",
            Self::Amber => "#f59e0b",
            Self::Sky => "#0ea5e9",
            Self::Orange => "#f97316",
            Self::Violet => "#8b5cf6",
        }
    }
}

/// Badge variant a status is labelled with in detail views.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BadgeVariant {
    Success,
    Secondary,
    Warning,
    Info,
    Destructive,
    Outline,
}

/// The display style derived from a [`HouseStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusStyle {
    /// Map and chart color token.
    pub color: ColorToken,
    /// Badge variant for detail views.
    pub badge: BadgeVariant,
}

/// Derives the display style of a house status.
///
/// The mapping is a fixed table with one distinct entry per status.
#[must_use]
pub const fn classify(status: HouseStatus) -> StatusStyle {
    let (color, badge) = match status {
        HouseStatus::Occupied => (ColorToken::Emerald, BadgeVariant::Success),
        HouseStatus::Unoccupied => (ColorToken::Slate, BadgeVariant::Secondary),
        HouseStatus::UnderRenovation => (ColorToken::Amber, BadgeVariant::Warning),
        HouseStatus::UpcomingRenovation => (ColorToken::Sky, BadgeVariant::Info),
        HouseStatus::UnderConstruction => (ColorToken::Orange, BadgeVariant::Destructive),
        HouseStatus::UpcomingConstruction => (ColorToken::Violet, BadgeVariant::Outline),
    };

    StatusStyle { color, badge }
}

/// Derives the display style of a free-form status label, defaulting to
/// the [`HouseStatus::DEFAULT`] style for unrecognized labels.
#[must_use]
pub fn classify_label(label: &str) -> StatusStyle {
    classify(HouseStatus::from_label(label))
}

/// Category of an incident logged against a house.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum IncidentCategory {
    /// Repairs and upkeep (plumbing, electrical, roofing)
    Maintenance,
    /// Noise complaints
    Noise,
    /// Construction-related disturbances
    Construction,
    /// Anything else
    Other,
}

impl IncidentCategory {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Maintenance, Self::Noise, Self::Construction, Self::Other]
    }
}

/// Settlement state of a dues payment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

impl PaymentStatus {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Paid, Self::Pending, Self::Overdue]
    }

    /// Whether the payment still counts towards the balance due.
    #[must_use]
    pub const fn is_outstanding(self) -> bool {
        matches!(self, Self::Pending | Self::Overdue)
    }
}

/// Whether a guard is currently on shift.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DutyStatus {
    OnDuty,
    OffDuty,
}
