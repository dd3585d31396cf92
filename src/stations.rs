use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// One weather station: integer id (the dedup key), display name, coordinates.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StationRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

/// Embedded catalog of the Hungarian synoptic stations the service knows.
/// Loaded once per process; never mutated at runtime.
const STATIONS: &[(i64, &str, f64, f64)] = &[
    (12756, "Szecseny", 48.1167, 19.5167),
    (12840, "Budapest Met Center", 47.5167, 19.0333),
    (12882, "Debrecen", 47.4833, 21.6),
    (12846, "Agard", 47.1833, 18.6167),
    (12942, "Pecs / Pogany", 46.1, 18.2333),
    (12822, "Gyor", 47.7167, 17.6833),
    (12825, "Papa", 47.2, 17.5),
    (12982, "Szeged", 46.25, 20.1),
    (12892, "Nyiregyhaza / Napkor", 47.9667, 21.9833),
    (12970, "Kecskemet", 46.9167, 19.75),
    (12812, "Szombathely", 47.2667, 16.6333),
    (12772, "Miskolc", 48.0833, 20.7667),
    (12930, "Kaposvar", 46.3833, 17.8333),
    (12839, "Budapest / Ferihegy", 47.4333, 19.2667),
    (12805, "Sopron", 47.6833, 16.6),
    (12836, "Tata", 47.65, 18.3167),
    (12866, "Poroszlo", 47.65, 20.6333),
    (12915, "Zalaegerszeg / Andrashida", 46.8667, 16.8),
    (12992, "Bekescsaba", 46.6833, 21.1667),
    (12870, "Eger", 47.9, 20.3833),
    (12925, "Nagykanizsa", 46.45, 16.9667),
    (12935, "Siofok", 46.9167, 18.05),
    (12950, "Paks", 46.5833, 18.85),
];

/// Deduplicated read view over the embedded catalog, in catalog order.
pub fn list_stations() -> Vec<StationRecord> {
    dedup_by_id(STATIONS.iter().map(|&(id, name, latitude, longitude)| {
        StationRecord {
            id,
            name: name.to_string(),
            latitude,
            longitude,
        }
    }))
}

/// Collapse duplicate ids: the last occurrence of an id wins the slot, the
/// slot stays where the id was first seen. Every collection handed to the UI
/// goes through this fold, so station ids are unique wherever they surface.
pub fn dedup_by_id<I>(records: I) -> Vec<StationRecord>
where
    I: IntoIterator<Item = StationRecord>,
{
    let mut slots: HashMap<i64, usize> = HashMap::new();
    let mut out: Vec<StationRecord> = Vec::new();
    for record in records {
        match slots.entry(record.id) {
            Entry::Occupied(slot) => out[*slot.get()] = record,
            Entry::Vacant(slot) => {
                slot.insert(out.len());
                out.push(record);
            }
        }
    }
    out
}

/// Decode a remote station payload. Elements that are not station-shaped
/// (non-integer id, missing name) are skipped rather than failing the list;
/// a non-array body decodes to an empty list.
pub fn decode_stations(body: &Value) -> Vec<StationRecord> {
    let items = match body.as_array() {
        Some(items) => items,
        None => return Vec::new(),
    };
    dedup_by_id(
        items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(id: i64, name: &str) -> StationRecord {
        StationRecord {
            id,
            name: name.to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[test]
    fn last_write_wins_keeps_first_position() {
        let input = vec![record(1, "A"), record(2, "B"), record(1, "A2")];
        let out = dedup_by_id(input);
        assert_eq!(out, vec![record(1, "A2"), record(2, "B")]);
    }

    #[test]
    fn dedup_is_deterministic() {
        let input = vec![
            record(7, "x"),
            record(3, "y"),
            record(7, "z"),
            record(3, "y2"),
            record(9, "w"),
        ];
        let first = dedup_by_id(input.clone());
        let second = dedup_by_id(input);
        assert_eq!(first, second);
        let mut ids: Vec<i64> = first.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), first.len());
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(dedup_by_id(Vec::new()).is_empty());
    }

    #[test]
    fn embedded_catalog_ids_are_unique() {
        let stations = list_stations();
        assert_eq!(stations.len(), 23);
        let mut ids: Vec<i64> = stations.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), stations.len());
    }

    #[test]
    fn catalog_keeps_source_order() {
        let stations = list_stations();
        assert_eq!(stations[0].name, "Szecseny");
        assert_eq!(stations[1].id, 12840);
        assert_eq!(stations.last().unwrap().name, "Paks");
    }

    #[test]
    fn decode_skips_junk_and_dedups() {
        let body = json!([
            { "id": 1, "name": "Alpha", "latitude": 47.0, "longitude": 19.0 },
            { "id": "not-an-int", "name": "Bogus" },
            { "name": "No id at all" },
            { "id": 2, "name": "Beta" },
            { "id": 1, "name": "Alpha v2" },
        ]);
        let out = decode_stations(&body);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, 1);
        assert_eq!(out[0].name, "Alpha v2");
        assert_eq!(out[1].name, "Beta");
        // lat/lon default to 0 when the payload omits them
        assert_eq!(out[1].latitude, 0.0);
    }

    #[test]
    fn decode_non_array_is_empty() {
        assert!(decode_stations(&json!({ "error": "nope" })).is_empty());
        assert!(decode_stations(&json!(null)).is_empty());
    }
}
