//! Typed site settings.
//!
//! Settings are persisted as `(key, text value, type tag)` rows. The tag is
//! decoded exactly once, here, into a [`SettingValue`]; everything above the
//! repository works with typed values or with [`SiteIdentity`].

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as Json};
use std::{fmt, str::FromStr};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingType {
    Boolean,
    Number,
    Json,
    #[default]
    Text,
}

impl SettingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingType::Boolean => "boolean",
            SettingType::Number => "number",
            SettingType::Json => "json",
            SettingType::Text => "text",
        }
    }
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingType {
    type Err = std::convert::Infallible;

    /// Unknown tags fall back to `text`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "boolean" | "bool" => SettingType::Boolean,
            "number" => SettingType::Number,
            "json" => SettingType::Json,
            _ => SettingType::Text,
        })
    }
}

/// A setting value decoded according to its [`SettingType`].
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Bool(bool),
    /// `None` when the stored text is not a finite number.
    Number(Option<f64>),
    Json(Json),
    Text(Option<String>),
}

impl SettingValue {
    /// Decode a stored value.
    ///
    /// * boolean: only the exact string `"true"` is true
    /// * number: longest leading float, no numeric prefix or missing gives `None`
    /// * json: missing gives `{}`, malformed JSON is an error
    /// * text: passthrough
    pub fn decode(kind: SettingType, raw: Option<&str>) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            SettingType::Boolean => SettingValue::Bool(raw == Some("true")),
            SettingType::Number => {
                SettingValue::Number(raw.and_then(parse_float_prefix).filter(|n| n.is_finite()))
            }
            SettingType::Json => match raw {
                None => SettingValue::Json(Json::Object(Map::new())),
                Some(s) => SettingValue::Json(serde_json::from_str(s)?),
            },
            SettingType::Text => SettingValue::Text(raw.map(str::to_string)),
        })
    }

    pub fn into_json(self) -> Json {
        match self {
            SettingValue::Bool(b) => Json::Bool(b),
            SettingValue::Number(n) => n.map(Json::from).unwrap_or(Json::Null),
            SettingValue::Json(v) => v,
            SettingValue::Text(s) => s.map(Json::String).unwrap_or(Json::Null),
        }
    }
}

/// Parse the longest leading decimal number of `raw`, so `"12px"` reads as `12`.
///
/// Accepts an optional sign, digits with an optional fraction, and an exponent
/// only when digits follow it. Leading whitespace is skipped.
fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while bytes.get(i).is_some_and(u8::is_ascii_digit) {
            i += 1;
        }
        i
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    s[..end].parse().ok()
}

/// Body of `PUT /cms/settings/{key}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpsertSetting {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub setting_value: Option<Option<String>>,
    pub setting_type: Option<SettingType>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub category: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub description: Option<Option<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SettingEntry {
    #[validate(length(min = 1, max = 128, message = "setting_key length must be 1..=128"))]
    pub setting_key: String,
    #[serde(flatten)]
    pub upsert: UpsertSetting,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkSettings {
    #[validate(length(min = 1, message = "settings is required"), nested)]
    pub settings: Vec<SettingEntry>,
}

/// Typed view over the well-known identity settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteIdentity {
    pub site_name: String,
    pub site_tagline: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub contact_address: Option<String>,
    pub maintenance_mode: bool,
}

impl Default for SiteIdentity {
    fn default() -> Self {
        SiteIdentity {
            site_name: SiteIdentity::site_name_default(),
            site_tagline: None,
            contact_email: None,
            contact_phone: None,
            contact_address: None,
            maintenance_mode: false,
        }
    }
}

impl SiteIdentity {
    fn site_name_default() -> String {
        "Site CMS".into()
    }

    /// Build from a decoded settings map. Missing or empty keys keep their defaults.
    pub fn from_settings(settings: &Map<String, Json>) -> Self {
        let text = |key: &str| {
            settings
                .get(key)
                .and_then(Json::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let flag = |key: &str| match settings.get(key) {
            Some(Json::Bool(b)) => *b,
            Some(Json::String(s)) => s == "true",
            _ => false,
        };
        SiteIdentity {
            site_name: text("site_name").unwrap_or_else(SiteIdentity::site_name_default),
            site_tagline: text("site_tagline"),
            contact_email: text("contact_email"),
            contact_phone: text("contact_phone"),
            contact_address: text("contact_address"),
            maintenance_mode: flag("maintenance_mode"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn boolean_is_strict_true_comparison() {
        let decode = |raw| SettingValue::decode(SettingType::Boolean, raw).unwrap();
        assert_eq!(decode(Some("true")), SettingValue::Bool(true));
        assert_eq!(decode(Some("TRUE")), SettingValue::Bool(false));
        assert_eq!(decode(Some("1")), SettingValue::Bool(false));
        assert_eq!(decode(None), SettingValue::Bool(false));
    }

    #[test]
    fn number_parses_floats_or_yields_null() {
        let decode = |raw| {
            SettingValue::decode(SettingType::Number, raw)
                .unwrap()
                .into_json()
        };
        assert_eq!(decode(Some("4.5")), json!(4.5));
        assert_eq!(decode(Some(" 7 ")), json!(7.0));
        assert_eq!(decode(Some("abc")), Json::Null);
        assert_eq!(decode(Some("px12")), Json::Null);
        assert_eq!(decode(Some("-")), Json::Null);
        assert_eq!(decode(Some("NaN")), Json::Null);
        assert_eq!(decode(None), Json::Null);
    }

    #[test]
    fn number_reads_leading_numeric_prefix() {
        let decode = |raw| {
            SettingValue::decode(SettingType::Number, Some(raw))
                .unwrap()
                .into_json()
        };
        assert_eq!(decode("12px"), json!(12.0));
        assert_eq!(decode("4.5e2abc"), json!(450.0));
        assert_eq!(decode("-.5"), json!(-0.5));
        assert_eq!(decode("1e"), json!(1.0));
        assert_eq!(decode("3.em"), json!(3.0));
        assert_eq!(decode("+2E-1rem"), json!(0.2));
        assert_eq!(decode("1e999"), Json::Null);
    }

    #[test]
    fn bulk_settings_require_a_non_empty_list() {
        let empty: BulkSettings = serde_json::from_str(r#"{"settings":[]}"#).unwrap();
        assert!(empty.validate().is_err());

        let bulk: BulkSettings = serde_json::from_str(
            r#"{"settings":[{"setting_key":"site_name","setting_value":"Acme"}]}"#,
        )
        .unwrap();
        assert!(bulk.validate().is_ok());
        assert_eq!(
            bulk.settings[0].upsert.setting_value,
            Some(Some("Acme".into()))
        );

        let blank_key: BulkSettings =
            serde_json::from_str(r#"{"settings":[{"setting_key":""}]}"#).unwrap();
        assert!(blank_key.validate().is_err());
    }

    #[test]
    fn json_null_is_empty_object_and_garbage_fails() {
        let empty = SettingValue::decode(SettingType::Json, None).unwrap();
        assert_eq!(empty.into_json(), json!({}));
        assert!(SettingValue::decode(SettingType::Json, Some("{oops")).is_err());
        let list = SettingValue::decode(SettingType::Json, Some("[1,2]")).unwrap();
        assert_eq!(list.into_json(), json!([1, 2]));
    }

    #[test]
    fn unknown_type_tag_is_text() {
        assert_eq!("weird".parse::<SettingType>().unwrap(), SettingType::Text);
        assert_eq!("Boolean".parse::<SettingType>().unwrap(), SettingType::Boolean);
    }

    #[test]
    fn identity_defaults_missing_keys() {
        let mut map = Map::new();
        map.insert("contact_email".into(), json!("hi@example.com"));
        map.insert("maintenance_mode".into(), json!(true));
        map.insert("site_name".into(), json!(""));
        let identity = SiteIdentity::from_settings(&map);
        assert_eq!(identity.site_name, "Site CMS");
        assert_eq!(identity.contact_email.as_deref(), Some("hi@example.com"));
        assert!(identity.maintenance_mode);
        assert_eq!(identity.contact_phone, None);
    }
}
