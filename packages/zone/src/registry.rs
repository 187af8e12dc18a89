//! Subdivision definitions: the embedded default and file overrides.
//!
//! The default layout is a TOML file embedded at compile time via
//! `include_str!`. Deployments can point at their own definition file
//! instead (see [`load_definition`]).

use std::path::Path;

use subdivision_map_zone_models::SubdivisionDefinition;

use crate::ZoneError;

/// Embedded default subdivision definition.
const DEFAULT_DEFINITION: &str = include_str!("../definitions/subdivision.toml");

/// Returns the embedded default subdivision definition.
///
/// # Panics
///
/// Panics if the embedded TOML file fails to parse. Since it is a
/// compile-time constant, a parse failure indicates a development error
/// and is caught by the tests below.
#[must_use]
pub fn default_definition() -> SubdivisionDefinition {
    parse_definition(DEFAULT_DEFINITION)
        .unwrap_or_else(|e| panic!("Failed to parse embedded subdivision definition: {e}"))
}

/// Parses a subdivision definition from TOML text.
///
/// # Errors
///
/// Returns [`ZoneError::Toml`] if the text does not match the schema.
pub fn parse_definition(toml_str: &str) -> Result<SubdivisionDefinition, ZoneError> {
    Ok(toml::de::from_str(toml_str)?)
}

/// Reads and parses a subdivision definition file.
///
/// # Errors
///
/// Returns [`ZoneError::Io`] if the file cannot be read, or
/// [`ZoneError::Toml`] if it does not match the schema.
pub fn load_definition(path: &Path) -> Result<SubdivisionDefinition, ZoneError> {
    log::info!("Loading subdivision definition from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    parse_definition(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn loads_default_definition() {
        let def = default_definition();
        assert_eq!(def.name, "Greenfield Heights");
        assert_eq!(def.zones.len(), 6);
        assert_eq!(def.entrances.len(), 2);
        assert!(def.billing.is_some());
    }

    #[test]
    fn zone_ids_and_prefixes_are_unique() {
        let def = default_definition();
        let mut ids = BTreeSet::new();
        let mut prefixes = BTreeSet::new();
        for zone in &def.zones {
            assert!(ids.insert(&zone.id), "Duplicate zone ID: {}", zone.id);
            assert!(
                prefixes.insert(&zone.house_prefix),
                "Duplicate house prefix: {}",
                zone.house_prefix
            );
        }
    }

    #[test]
    fn all_zones_are_polygons() {
        for zone in &default_definition().zones {
            assert!(
                zone.positions.len() >= 3,
                "Zone {} has only {} vertices",
                zone.id,
                zone.positions.len()
            );
        }
    }

    #[test]
    fn explicit_houses_match_declared_count() {
        for zone in &default_definition().zones {
            if !zone.houses.is_empty() {
                assert_eq!(
                    zone.houses.len(),
                    zone.stats.household_count as usize,
                    "Zone {} explicit houses do not match householdCount",
                    zone.id
                );
                assert!(zone.houses.iter().all(|h| h.is_consistent()));
            }
        }
    }

    #[test]
    fn rejects_malformed_definition() {
        assert!(matches!(
            parse_definition("name = 3"),
            Err(ZoneError::Toml(_))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_definition(Path::new("/nonexistent/subdivision.toml")),
            Err(ZoneError::Io(_))
        ));
    }
}
