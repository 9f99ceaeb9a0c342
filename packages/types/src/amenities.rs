//! # Amenity normalization
//!
//! The amenity list reaches read sites in more than one shape: a native JSON
//! array, a JSON-encoded string (the storage convention for the
//! `hosts.amenities` column), or nothing at all. These helpers normalize any
//! of those to a `Vec<String>` and never fail — unparsable or unrecognized
//! input degrades to an empty list, which every consumer treats as a valid
//! "no amenities" state.

use serde_json::Value;

/// Normalize an amenity value of unknown shape to a list of strings.
///
/// - a JSON array yields its string elements (non-strings are skipped);
/// - a JSON string is decoded as an encoded `Vec<String>`;
/// - anything else (absent, null, objects, numbers, malformed text) yields
///   an empty list.
pub fn parse_amenities(raw: Option<&Value>) -> Vec<String> {
    match raw {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        Some(Value::String(encoded)) => parse_amenities_text(Some(encoded)),
        _ => Vec::new(),
    }
}

/// Normalize the raw text of an amenities column.
///
/// The column holds a JSON-encoded array of strings; anything else decodes
/// to an empty list.
pub fn parse_amenities_text(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str::<Vec<String>>(s).ok())
        .unwrap_or_default()
}

/// Encode an amenity list for storage.
pub fn encode_amenities(amenities: &[String]) -> String {
    serde_json::to_string(amenities).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_value_is_empty() {
        assert!(parse_amenities(None).is_empty());
    }

    #[test]
    fn null_is_empty() {
        assert!(parse_amenities(Some(&Value::Null)).is_empty());
    }

    #[test]
    fn unparsable_text_is_empty() {
        assert!(parse_amenities(Some(&json!("not json"))).is_empty());
        assert!(parse_amenities_text(Some("not json")).is_empty());
    }

    #[test]
    fn non_array_json_is_empty() {
        assert!(parse_amenities(Some(&json!("{}"))).is_empty());
        assert!(parse_amenities_text(Some("{}")).is_empty());
    }

    #[test]
    fn native_array_passes_through() {
        let raw = json!(["wifi", "kitchen", "parking"]);
        assert_eq!(
            parse_amenities(Some(&raw)),
            vec!["wifi", "kitchen", "parking"]
        );
    }

    #[test]
    fn native_array_skips_non_strings() {
        let raw = json!(["wifi", 3, null, "kitchen"]);
        assert_eq!(parse_amenities(Some(&raw)), vec!["wifi", "kitchen"]);
    }

    #[test]
    fn encoded_array_string_is_decoded() {
        let raw = json!("[\"wifi\",\"garden\"]");
        assert_eq!(parse_amenities(Some(&raw)), vec!["wifi", "garden"]);
        assert_eq!(
            parse_amenities_text(Some("[\"wifi\",\"garden\"]")),
            vec!["wifi", "garden"]
        );
    }

    #[test]
    fn encode_round_trips_through_text_parser() {
        let amenities = vec!["wifi".to_string(), "sauna".to_string()];
        let encoded = encode_amenities(&amenities);
        assert_eq!(parse_amenities_text(Some(&encoded)), amenities);
    }
}
