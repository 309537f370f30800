//! Key projection for the minified database view.
//!
//! Works on the generic YAML value tree rather than the typed records so
//! that keys the converter never emits (hand-added enrichments like
//! `console_compat`) survive minification when present.

use serde_yaml::{Mapping, Value};

/// Top-level keys kept per record. `oldrim` and `sse` are special-cased.
const WANTED_KEYS: [&str; 5] = ["deprecated", "category", "id", "name", "tags"];

const OLDRIM_WANTED_KEYS: [&str; 1] = ["is_available"];

const SSE_WANTED_KEYS: [&str; 2] = ["console_compat", "is_available"];

/// Project every record down to the reduced key set. Idempotent: running
/// this on its own output changes nothing.
pub fn minify(database: Vec<Mapping>) -> Vec<Mapping> {
    database.into_iter().map(minify_record).collect()
}

fn minify_record(record: Mapping) -> Mapping {
    let mut out = keep_keys(&record, &WANTED_KEYS);
    out.insert(
        Value::from("oldrim"),
        Value::Mapping(keep_sub_keys(&record, "oldrim", &OLDRIM_WANTED_KEYS)),
    );
    out.insert(
        Value::from("sse"),
        Value::Mapping(keep_sub_keys(&record, "sse", &SSE_WANTED_KEYS)),
    );
    out
}

fn keep_keys(map: &Mapping, wanted: &[&str]) -> Mapping {
    let mut out = Mapping::new();
    for key in wanted {
        if let Some(value) = map.get(*key) {
            out.insert(Value::from(*key), value.clone());
        }
    }
    out
}

fn keep_sub_keys(record: &Mapping, field: &str, wanted: &[&str]) -> Mapping {
    match record.get(field) {
        Some(Value::Mapping(sub)) => keep_keys(sub, wanted),
        _ => Mapping::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_record() -> Mapping {
        serde_yaml::from_str(
            r#"
            id: 4
            name: Climates of Tamriel
            description: Weather overhaul.
            notes: [Recommended]
            category: 1. Graphics
            media:
              images: [https://example.com/shot.jpg]
              videos: []
            oldrim:
              is_available: true
              webpages:
                steam: null
                nexus: https://www.nexusmods.com/skyrim/mods/17802
                bethesda: null
                others: []
              requirements: []
            sse:
              is_available: false
              console_compat: true
              webpages:
                steam: null
                nexus: null
                bethesda: null
                others: []
              requirements: []
            tags: []
            deprecated: false
            verified: false
            "#,
        )
        .unwrap()
    }

    #[test]
    fn keeps_only_allowed_keys() {
        let minified = minify(vec![full_record()]);
        let record = &minified[0];

        assert!(record.contains_key("id"));
        assert!(record.contains_key("name"));
        assert!(record.contains_key("category"));
        assert!(record.contains_key("tags"));
        assert!(record.contains_key("deprecated"));
        assert!(!record.contains_key("description"));
        assert!(!record.contains_key("notes"));
        assert!(!record.contains_key("media"));
        assert!(!record.contains_key("verified"));
    }

    #[test]
    fn sub_mappings_are_filtered_independently() {
        let minified = minify(vec![full_record()]);
        let record = &minified[0];

        let oldrim = record.get("oldrim").unwrap().as_mapping().unwrap();
        assert_eq!(oldrim.len(), 1);
        assert_eq!(oldrim.get("is_available"), Some(&Value::from(true)));

        let sse = record.get("sse").unwrap().as_mapping().unwrap();
        assert_eq!(sse.len(), 2);
        assert_eq!(sse.get("console_compat"), Some(&Value::from(true)));
        assert_eq!(sse.get("is_available"), Some(&Value::from(false)));
        assert!(sse.get("webpages").is_none());
    }

    #[test]
    fn minify_is_idempotent() {
        let once = minify(vec![full_record()]);
        let twice = minify(once.clone());
        assert_eq!(twice, once);
    }

    #[test]
    fn missing_sub_mapping_becomes_empty() {
        let record: Mapping = serde_yaml::from_str("id: 9\nname: Bare entry\n").unwrap();
        let minified = minify(vec![record]);
        let sse = minified[0].get("sse").unwrap().as_mapping().unwrap();
        assert!(sse.is_empty());
    }
}
