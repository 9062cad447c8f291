//! Best-effort recovery of structured records from completion text.
//!
//! The completion service returns free text that usually, but not always,
//! contains a JSON array, sometimes wrapped in a fenced code block and
//! surrounded by prose. Extraction strips the fence, takes the outermost
//! `[` .. `]` span, parses it, and coerces every element into a
//! [`Recommendation`] without ever dropping one. The bracket heuristic is
//! deliberately isolated here so it can be hardened later without touching
//! callers.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::currency::convert_currency;
use crate::error::ExtractError;
use crate::types::{Category, Pricing, Recommendation, RecommendationId, NOT_AVAILABLE};

/// Maximum number of suggestions returned from a single completion.
pub const MAX_SUGGESTIONS: usize = 5;

/// Regex to strip a fenced code block wrapper around the JSON payload.
static CODE_FENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json)?\s*(.*?)\s*```").expect("Invalid code fence regex")
});

/// Extract and normalize recommendation records from raw completion text.
///
/// An empty outer array is a success with no records; text with no bracketed
/// span fails with [`ExtractError::NoJsonFound`], and a span that does not
/// parse fails with [`ExtractError::InvalidJson`]. Field-level problems are
/// never errors: each element always yields a record.
pub fn extract_recommendations(
    raw: &str,
    exchange_rate: f64,
) -> Result<Vec<Recommendation>, ExtractError> {
    let elements = parse_outermost_array(raw)?;

    Ok(elements
        .iter()
        .enumerate()
        .map(|(index, element)| normalize_record(index, element, exchange_rate))
        .collect())
}

/// Extract completion suggestions from raw completion text.
///
/// The model replies with a JSON object whose `suggestions` field is the
/// only bracketed span, so the same outermost-array heuristic applies.
/// Non-string elements are skipped; at most [`MAX_SUGGESTIONS`] are kept.
pub fn extract_suggestions(raw: &str) -> Result<Vec<String>, ExtractError> {
    let elements = parse_outermost_array(raw)?;

    Ok(elements
        .iter()
        .filter_map(Value::as_str)
        .map(|s| s.to_string())
        .take(MAX_SUGGESTIONS)
        .collect())
}

/// Strip a fenced code block wrapper if present.
fn strip_code_fence(raw: &str) -> &str {
    match CODE_FENCE_REGEX.captures(raw) {
        Some(cap) => cap.get(1).map(|m| m.as_str()).unwrap_or(raw),
        None => raw,
    }
}

/// Locate the outermost `[` .. `]` span and parse it as a JSON array.
fn parse_outermost_array(raw: &str) -> Result<Vec<Value>, ExtractError> {
    let text = strip_code_fence(raw);

    let span = match (text.find('['), text.rfind(']')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => return Err(ExtractError::NoJsonFound),
    };

    let value: Value =
        serde_json::from_str(span).map_err(|e| ExtractError::InvalidJson(e.to_string()))?;

    match value {
        Value::Array(elements) => Ok(elements),
        _ => Err(ExtractError::InvalidJson(
            "located span is not a JSON array".to_string(),
        )),
    }
}

/// Coerce one parsed array element into a [`Recommendation`].
///
/// Total: every element produces a record. Missing or mistyped scalar fields
/// become the "N/A" sentinel, array fields become empty, and a missing id
/// falls back to the element's index within the batch. Multi-word fields
/// accept both the camelCase and snake_case spellings seen in the wild.
fn normalize_record(index: usize, element: &Value, exchange_rate: f64) -> Recommendation {
    let id = match element.get("id") {
        Some(Value::Number(n)) => n
            .as_i64()
            .map(RecommendationId::Int)
            .unwrap_or(RecommendationId::Int(index as i64)),
        Some(Value::String(s)) => RecommendationId::Text(s.clone()),
        _ => RecommendationId::Int(index as i64),
    };

    let price_range = string_field(element, &["priceRange", "price_range"]);

    Recommendation {
        id,
        name: string_field(element, &["name"]),
        category: Category::parse(&string_field(element, &["category"])),
        description: string_field(element, &["description"]),
        official_website: normalize_website(field(element, &["officialWebsite", "official_website"])),
        pricing: Pricing::parse(&string_field(element, &["pricing"])),
        price_range: convert_currency(&price_range, exchange_rate),
        platforms: string_array_field(element, &["platforms"]),
        features: string_array_field(element, &["features", "key_features"]),
        best_for: string_array_field(element, &["bestFor", "best_for"]),
        alternatives: string_array_field(element, &["alternatives"]),
    }
}

/// Look up the first present key among the accepted spellings.
fn field<'a>(element: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| element.get(key))
}

/// A scalar field: the string value if present, else the sentinel.
fn string_field(element: &Value, keys: &[&str]) -> String {
    field(element, keys)
        .and_then(Value::as_str)
        .map(|s| s.to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// An array-of-strings field: missing or mistyped becomes empty, and a bare
/// string (the model sometimes sends 'N/A' alone) becomes a single entry.
fn string_array_field(element: &Value, keys: &[&str]) -> Vec<String> {
    match field(element, keys) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(|s| s.to_string())
            .collect(),
        Some(Value::String(s)) => vec![s.clone()],
        _ => Vec::new(),
    }
}

/// Website URLs must carry an http(s) scheme; anything else is unknown.
fn normalize_website(value: Option<&Value>) -> String {
    match value.and_then(Value::as_str) {
        Some(url) if url.starts_with("http://") || url.starts_with("https://") => url.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: f64 = 325.0;

    #[test]
    fn test_plain_array_extracts() {
        let raw = r#"[{"id": 1, "name": "VLC", "category": "Multimedia", "description": "Media player",
            "officialWebsite": "https://www.videolan.org", "pricing": "Free", "priceRange": "Free",
            "platforms": ["Windows"], "features": ["Playback"], "bestFor": ["Everyone"], "alternatives": []}]"#;

        let records = extract_recommendations(raw, RATE).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "VLC");
        assert_eq!(records[0].category, Category::Multimedia);
        assert_eq!(records[0].official_website, "https://www.videolan.org");
        assert_eq!(records[0].platforms, vec!["Windows"]);
    }

    #[test]
    fn test_fenced_block_with_prose_extracts() {
        let raw = "Sure! Here are my picks:\n\n```json\n[{\"name\": \"Figma\"}]\n```\nLet me know if you need more.";

        let records = extract_recommendations(raw, RATE).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Figma");
    }

    #[test]
    fn test_fence_without_language_tag() {
        let raw = "```\n[{\"name\": \"Slack\"}]\n```";
        let records = extract_recommendations(raw, RATE).unwrap();
        assert_eq!(records[0].name, "Slack");
    }

    #[test]
    fn test_prose_wrapped_array_extracts() {
        let raw = "The recommendations are [{\"name\": \"Zed\"}] as requested.";
        let records = extract_recommendations(raw, RATE).unwrap();
        assert_eq!(records[0].name, "Zed");
    }

    #[test]
    fn test_no_brackets_is_no_json_found() {
        let raw = "I could not come up with anything for that task.";
        assert!(matches!(
            extract_recommendations(raw, RATE),
            Err(ExtractError::NoJsonFound)
        ));
    }

    #[test]
    fn test_truncated_json_is_invalid_json() {
        // A closing bracket exists but the span between is cut off mid-record.
        let raw = r#"[{"name": "GIMP", "platforms": ["Linux"]"#.to_string() + "]";
        assert!(matches!(
            extract_recommendations(&raw, RATE),
            Err(ExtractError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_empty_array_is_success() {
        let records = extract_recommendations("[]", RATE).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_missing_fields_normalize_to_sentinels() {
        let raw = r#"[{"name": "Mystery Tool"}]"#;
        let records = extract_recommendations(raw, RATE).unwrap();

        let record = &records[0];
        assert_eq!(record.name, "Mystery Tool");
        assert_eq!(record.description, NOT_AVAILABLE);
        assert_eq!(record.category, Category::NA);
        assert_eq!(record.pricing, Pricing::NA);
        assert_eq!(record.official_website, NOT_AVAILABLE);
        assert_eq!(record.price_range, NOT_AVAILABLE);
        assert!(record.platforms.is_empty());
        assert!(record.features.is_empty());
        assert!(record.best_for.is_empty());
        assert!(record.alternatives.is_empty());
    }

    #[test]
    fn test_null_and_mistyped_fields_normalize() {
        let raw = r#"[{"name": null, "platforms": 7, "description": 42, "pricing": "cheap"}]"#;
        let records = extract_recommendations(raw, RATE).unwrap();

        let record = &records[0];
        assert_eq!(record.name, NOT_AVAILABLE);
        assert_eq!(record.description, NOT_AVAILABLE);
        assert_eq!(record.pricing, Pricing::NA);
        assert!(record.platforms.is_empty());
    }

    #[test]
    fn test_bad_element_does_not_drop_the_batch() {
        let raw = r#"[{"name": "Good"}, "just a string", {"name": "Also good"}]"#;
        let records = extract_recommendations(raw, RATE).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].name, "Good");
        assert_eq!(records[1].name, NOT_AVAILABLE);
        assert_eq!(records[2].name, "Also good");
    }

    #[test]
    fn test_website_without_http_scheme_is_rejected() {
        let raw = r#"[{"official_website": "ftp://x.com"}, {"official_website": "www.x.com"}]"#;
        let records = extract_recommendations(raw, RATE).unwrap();

        assert_eq!(records[0].official_website, NOT_AVAILABLE);
        assert_eq!(records[1].official_website, NOT_AVAILABLE);
    }

    #[test]
    fn test_website_accepts_both_key_spellings() {
        let raw = r#"[{"official_website": "https://x.com"}, {"officialWebsite": "http://y.com"}]"#;
        let records = extract_recommendations(raw, RATE).unwrap();

        assert_eq!(records[0].official_website, "https://x.com");
        assert_eq!(records[1].official_website, "http://y.com");
    }

    #[test]
    fn test_snake_case_field_spellings_accepted() {
        let raw = r#"[{"price_range": "$10/month", "key_features": ["Sync"], "best_for": ["Teams"]}]"#;
        let records = extract_recommendations(raw, RATE).unwrap();

        let record = &records[0];
        assert!(record.price_range.starts_with("$10/month"));
        assert_eq!(record.features, vec!["Sync"]);
        assert_eq!(record.best_for, vec!["Teams"]);
    }

    #[test]
    fn test_price_range_gets_currency_conversion() {
        let raw = r#"[{"priceRange": "$50/month"}]"#;
        let records = extract_recommendations(raw, RATE).unwrap();
        assert_eq!(records[0].price_range, "$50/month (~LKR 16250)");
    }

    #[test]
    fn test_platforms_bare_na_string_becomes_single_entry() {
        let raw = r#"[{"platforms": "N/A"}]"#;
        let records = extract_recommendations(raw, RATE).unwrap();
        assert_eq!(records[0].platforms, vec![NOT_AVAILABLE]);
    }

    #[test]
    fn test_id_variants() {
        let raw = r#"[{"id": 7}, {"id": "seven"}, {"name": "no id"}]"#;
        let records = extract_recommendations(raw, RATE).unwrap();

        assert_eq!(records[0].id, RecommendationId::Int(7));
        assert_eq!(records[1].id, RecommendationId::Text("seven".to_string()));
        assert_eq!(records[2].id, RecommendationId::Int(2));
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let raw = r#"[{"id": 1, "name": "Notion", "category": "productivity", "priceRange": "$8/month",
            "official_website": "https://notion.so", "platforms": "N/A"}]"#;
        let first = extract_recommendations(raw, RATE).unwrap();

        let reserialized = serde_json::to_string(&first).unwrap();
        let second = extract_recommendations(&reserialized, RATE).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_suggestions_extract_from_object_response() {
        let raw = r#"{"completed_text": "edit videos", "suggestions": ["edit videos for youtube", "edit videos quickly", "edit videos free"]}"#;
        let suggestions = extract_suggestions(raw).unwrap();

        assert_eq!(
            suggestions,
            vec![
                "edit videos for youtube",
                "edit videos quickly",
                "edit videos free"
            ]
        );
    }

    #[test]
    fn test_suggestions_from_fenced_response() {
        let raw = "```json\n{\"suggestions\": [\"write documentation\"]}\n```";
        let suggestions = extract_suggestions(raw).unwrap();
        assert_eq!(suggestions, vec!["write documentation"]);
    }

    #[test]
    fn test_suggestions_capped() {
        let raw = r#"{"suggestions": ["a", "b", "c", "d", "e", "f", "g"]}"#;
        let suggestions = extract_suggestions(raw).unwrap();
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_suggestions_skip_non_strings() {
        let raw = r#"{"suggestions": ["keep", 42, null, "also keep"]}"#;
        let suggestions = extract_suggestions(raw).unwrap();
        assert_eq!(suggestions, vec!["keep", "also keep"]);
    }

    #[test]
    fn test_suggestions_without_array_is_no_json_found() {
        let raw = r#"{"completed_text": "nothing here"}"#;
        assert!(matches!(
            extract_suggestions(raw),
            Err(ExtractError::NoJsonFound)
        ));
    }
}
