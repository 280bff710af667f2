//! Normalization of loosely typed image lists.
//!
//! Image columns hold a JSON array of URLs, but clients have historically sent
//! a bare URL, a JSON-encoded array string, an array of `{ "url": ... }`
//! objects or nothing at all. Everything is reduced to `Vec<String>`; input that
//! looks like JSON but does not parse degrades to an empty list.

use serde_json::Value;

/// Normalize an image list received in a request body.
pub fn normalize_value(value: &Value) -> Vec<String> {
    match value {
        Value::Null => Vec::new(),
        Value::Array(items) => items.iter().filter_map(image_url).collect(),
        Value::String(s) => normalize_str(s),
        Value::Object(_) => image_url(value).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// Normalize an image list read back from storage.
pub fn normalize_stored(raw: Option<&str>) -> Vec<String> {
    raw.map(normalize_str).unwrap_or_default()
}

/// Encode an image list for storage.
pub fn encode(images: &[String]) -> String {
    Value::from(images.to_vec()).to_string()
}

fn normalize_str(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if looks_like_json(trimmed) {
        return match serde_json::from_str::<Value>(trimmed) {
            Ok(Value::String(inner)) => normalize_str(&inner),
            Ok(value) => normalize_value(&value),
            Err(_) => Vec::new(),
        };
    }
    vec![trimmed.to_string()]
}

fn looks_like_json(s: &str) -> bool {
    s.starts_with('[') || s.starts_with('{') || s.starts_with('"')
}

fn image_url(item: &Value) -> Option<String> {
    let url = match item {
        Value::String(s) => s.trim(),
        Value::Object(map) => map.get("url")?.as_str()?.trim(),
        _ => return None,
    };
    (!url.is_empty()).then(|| url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_arrays_of_strings_and_objects() {
        let v = json!(["/a.jpg", { "url": "/b.jpg" }, "", 42]);
        assert_eq!(normalize_value(&v), vec!["/a.jpg", "/b.jpg"]);
    }

    #[test]
    fn accepts_encoded_array_strings() {
        let v = json!("[\"/a.jpg\",\"/b.jpg\"]");
        assert_eq!(normalize_value(&v), vec!["/a.jpg", "/b.jpg"]);
    }

    #[test]
    fn bare_url_becomes_single_item() {
        assert_eq!(normalize_stored(Some("/cover.png")), vec!["/cover.png"]);
    }

    #[test]
    fn broken_json_degrades_to_empty() {
        assert!(normalize_stored(Some("[\"/a.jpg\"")).is_empty());
        assert!(normalize_stored(None).is_empty());
        assert!(normalize_value(&Value::Null).is_empty());
    }

    #[test]
    fn encode_produces_json_array() {
        let encoded = encode(&["/a.jpg".to_string()]);
        assert_eq!(encoded, "[\"/a.jpg\"]");
        assert_eq!(normalize_stored(Some(&encoded)), vec!["/a.jpg"]);
    }
}
