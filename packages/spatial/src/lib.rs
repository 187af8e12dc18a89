#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Zone polygon index for map click resolution, and `GeoJSON` export of
//! the zone layer.
//!
//! Zone polygons are stored as unclosed vertex lists in `(lat, lng)`
//! order. Here they become `geo` polygons in `(x = lng, y = lat)` order,
//! indexed by an R-tree over their bounding boxes so that a click on the
//! map resolves to a zone with a point-in-polygon test.

use geo::{Area, BoundingRect, Centroid, Contains, LineString, Point, Polygon};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value, feature::Id};
use rstar::{AABB, RTree, RTreeObject};
use subdivision_map_zone_models::{LatLng, Zone};

/// A zone polygon stored in the R-tree with its identifier.
struct ZoneEntry {
    zone_id: String,
    area: f64,
    envelope: AABB<[f64; 2]>,
    polygon: Polygon<f64>,
}

impl RTreeObject for ZoneEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

/// Spatial index over zone polygons.
pub struct ZoneIndex {
    zones: RTree<ZoneEntry>,
}

impl ZoneIndex {
    /// Builds the index from a set of zones.
    #[must_use]
    pub fn build(zones: &[Zone]) -> Self {
        let entries: Vec<ZoneEntry> = zones
            .iter()
            .map(|zone| {
                let polygon = zone_polygon(zone);
                ZoneEntry {
                    zone_id: zone.id.clone(),
                    area: polygon.unsigned_area(),
                    envelope: compute_envelope(&polygon),
                    polygon,
                }
            })
            .collect();

        let index = Self {
            zones: RTree::bulk_load(entries),
        };
        log::info!("Loaded {} zones into spatial index", index.len());
        index
    }

    /// Number of indexed zones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.size()
    }

    /// Whether the index has no zones.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up the zone containing a point.
    ///
    /// When zones overlap, the smallest one wins so that a small zone drawn
    /// on top of a larger one stays clickable.
    #[must_use]
    pub fn locate(&self, lat: f64, lng: f64) -> Option<&str> {
        let point = Point::new(lng, lat);
        let query_env = AABB::from_point([lng, lat]);

        let mut best: Option<&ZoneEntry> = None;

        for entry in self.zones.locate_in_envelope_intersecting(&query_env) {
            if entry.polygon.contains(&point) {
                match best {
                    None => best = Some(entry),
                    Some(current) if entry.area < current.area => {
                        best = Some(entry);
                    }
                    _ => {}
                }
            }
        }

        best.map(|e| e.zone_id.as_str())
    }
}

/// Converts a zone's vertex list into a closed `geo` polygon.
#[must_use]
pub fn zone_polygon(zone: &Zone) -> Polygon<f64> {
    let exterior: LineString<f64> = zone.positions.iter().map(|p| (p.lng, p.lat)).collect();
    Polygon::new(exterior, vec![])
}

/// Centroid of a zone polygon, for placing its map label.
#[must_use]
pub fn zone_centroid(zone: &Zone) -> Option<LatLng> {
    zone_polygon(zone)
        .centroid()
        .map(|c| LatLng::new(c.y(), c.x()))
}

/// Exports zones as a `GeoJSON` `FeatureCollection` for the map layer.
///
/// Rings are closed and use `[lng, lat]` positions as `GeoJSON` requires.
#[must_use]
pub fn zones_to_geojson(zones: &[Zone]) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: zones.iter().map(zone_feature).collect(),
        foreign_members: None,
    }
}

fn zone_feature(zone: &Zone) -> Feature {
    let mut ring: Vec<Vec<f64>> = zone.positions.iter().map(|p| vec![p.lng, p.lat]).collect();
    if let Some(first) = ring.first().cloned() {
        if ring.last() != Some(&first) {
            ring.push(first);
        }
    }

    let mut properties = JsonObject::new();
    properties.insert("id".to_string(), zone.id.clone().into());
    properties.insert("name".to_string(), zone.name.clone().into());
    properties.insert("category".to_string(), zone.category.clone().into());
    properties.insert("color".to_string(), zone.color.clone().into());
    properties.insert("householdCount".to_string(), zone.houses.len().into());
    if let Some(centroid) = zone_centroid(zone) {
        properties.insert(
            "centroid".to_string(),
            serde_json::json!({ "lat": centroid.lat, "lng": centroid.lng }),
        );
    }

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![ring]))),
        id: Some(Id::String(zone.id.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}

/// Compute the bounding box envelope for a [`Polygon`].
fn compute_envelope(polygon: &Polygon<f64>) -> AABB<[f64; 2]> {
    polygon.bounding_rect().map_or_else(
        || AABB::from_point([0.0, 0.0]),
        |rect| AABB::from_corners([rect.min().x, rect.min().y], [rect.max().x, rect.max().y]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use subdivision_map_zone_models::ZoneStats;

    fn zone(id: &str, positions: &[(f64, f64)]) -> Zone {
        Zone {
            id: id.to_string(),
            positions: positions
                .iter()
                .map(|(lat, lng)| LatLng::new(*lat, *lng))
                .collect(),
            name: id.to_string(),
            category: "Residential".to_string(),
            color: "#3b82f6".to_string(),
            stats: ZoneStats {
                household_count: 0,
                resident_count: 0,
                year_established: 2020,
            },
            houses: vec![],
        }
    }

    fn square(id: &str, lat: f64, lng: f64, size: f64) -> Zone {
        zone(
            id,
            &[
                (lat, lng),
                (lat, lng + size),
                (lat + size, lng + size),
                (lat + size, lng),
            ],
        )
    }

    #[test]
    fn locates_point_inside_zone() {
        let zones = vec![
            square("Zone1", 14.0, 121.0, 0.01),
            square("Zone2", 14.0, 121.02, 0.01),
        ];
        let index = ZoneIndex::build(&zones);

        assert_eq!(index.len(), 2);
        assert_eq!(index.locate(14.005, 121.005), Some("Zone1"));
        assert_eq!(index.locate(14.005, 121.025), Some("Zone2"));
        assert_eq!(index.locate(14.005, 121.015), None);
        assert_eq!(index.locate(15.0, 121.005), None);
    }

    #[test]
    fn smallest_overlapping_zone_wins() {
        let zones = vec![
            square("Big", 14.0, 121.0, 0.1),
            square("Small", 14.04, 121.04, 0.02),
        ];
        let index = ZoneIndex::build(&zones);

        assert_eq!(index.locate(14.05, 121.05), Some("Small"));
        assert_eq!(index.locate(14.01, 121.01), Some("Big"));
    }

    #[test]
    fn triangle_excludes_bounding_box_corner() {
        let zones = vec![zone("Tri", &[(14.0, 121.0), (14.0, 121.1), (14.1, 121.0)])];
        let index = ZoneIndex::build(&zones);

        assert_eq!(index.locate(14.02, 121.02), Some("Tri"));
        assert_eq!(index.locate(14.09, 121.09), None);
    }

    #[test]
    fn geojson_rings_are_closed_lng_first() {
        let zones = vec![square("Zone1", 14.0, 121.0, 0.01)];
        let collection = zones_to_geojson(&zones);

        assert_eq!(collection.features.len(), 1);
        let feature = &collection.features[0];
        let Some(Value::Polygon(rings)) = feature.geometry.as_ref().map(|g| &g.value) else {
            panic!("expected polygon geometry");
        };
        let ring = &rings[0];
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
        assert_eq!(ring[0], vec![121.0, 14.0]);

        let props = feature.properties.as_ref().unwrap();
        assert_eq!(props["id"], "Zone1");
        assert_eq!(props["householdCount"], 0);
    }

    #[test]
    fn centroid_of_square() {
        let c = zone_centroid(&square("Zone1", 14.0, 121.0, 0.02)).unwrap();
        assert!((c.lat - 14.01).abs() < 1e-9);
        assert!((c.lng - 121.01).abs() < 1e-9);
    }

    #[test]
    fn empty_index() {
        let index = ZoneIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.locate(14.0, 121.0), None);
    }
}
