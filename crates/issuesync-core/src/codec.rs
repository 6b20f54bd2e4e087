// SPDX-License-Identifier: Apache-2.0

//! Date-aware JSON decoding.
//!
//! GraphQL responses carry dates as plain strings nested at arbitrary depth
//! inside `data`. [`decode`] parses a response body and turns every string
//! that starts with a `YYYY-MM-DD` calendar date into a [`Value::Date`]. The
//! calendar date is taken as given; no time zone is applied and any
//! time-of-day suffix is ignored for date purposes. The full text is kept
//! alongside, so fields read back as strings are unchanged.
//!
//! Typed structs read date fields through [`calendar_date`] and
//! [`optional_calendar_date`].

use std::collections::BTreeMap;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use serde::de::{self, DeserializeOwned, Deserializer};

use crate::error::SyncError;

/// Calendar date format recognised at the start of strings.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Anchored at the start only; ASCII digits so the match is always 10 bytes.
static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}").expect("valid date regex"));

/// A decoded JSON value in which date-shaped strings have become dates.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// JSON `null`.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number, kept in its original representation.
    Number(serde_json::Number),
    /// String that does not start with a calendar date.
    String(String),
    /// String that started with a `YYYY-MM-DD` calendar date.
    Date {
        /// The leading calendar date.
        date: NaiveDate,
        /// The string exactly as received.
        raw: String,
    },
    /// JSON array.
    Array(Vec<Value>),
    /// JSON object.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Looks up a field of an object. Returns `None` for non-objects.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Returns the text of a string, including strings decoded as dates.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) | Value::Date { raw: s, .. } => Some(s),
            _ => None,
        }
    }

    /// Returns the date, if this value was decoded as one.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date { date, .. } => Some(*date),
            _ => None,
        }
    }

    /// Returns the elements, if this is an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns true for JSON `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Converts back to plain JSON. Dates are emitted as the text received.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => serde_json::Value::Number(n.clone()),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Date { raw, .. } => serde_json::Value::String(raw.clone()),
            Value::Array(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Object(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }

    /// Converts this value into a typed structure.
    ///
    /// Dates reach serde as their original text; `NaiveDate` fields should
    /// use [`calendar_date`] to accept timestamps.
    pub fn to_typed<T: DeserializeOwned>(&self) -> Result<T, SyncError> {
        Ok(serde_json::from_value(self.to_json())?)
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        revive(value)
    }
}

/// Parses a date from the start of `s`, if it begins with a real calendar date.
#[must_use]
pub fn parse_date_prefix(s: &str) -> Option<NaiveDate> {
    let m = DATE_PREFIX.find(s)?;
    NaiveDate::parse_from_str(m.as_str(), DATE_FORMAT).ok()
}

/// Recursively converts plain JSON into a [`Value`], reviving dates at every depth.
#[must_use]
pub fn revive(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n),
        serde_json::Value::String(s) => match parse_date_prefix(&s) {
            Some(date) => Value::Date { date, raw: s },
            None => Value::String(s),
        },
        serde_json::Value::Array(items) => Value::Array(items.into_iter().map(revive).collect()),
        serde_json::Value::Object(map) => {
            Value::Object(map.into_iter().map(|(k, v)| (k, revive(v))).collect())
        }
    }
}

/// Serde adapter reading a `NaiveDate` from any string with a date prefix.
///
/// Use with `#[serde(deserialize_with = "calendar_date")]`.
pub fn calendar_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
    let text = String::deserialize(deserializer)?;
    parse_date_prefix(&text)
        .ok_or_else(|| de::Error::custom(format!("expected a YYYY-MM-DD date, got {text:?}")))
}

/// Like [`calendar_date`], for nullable fields.
pub fn optional_calendar_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error> {
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(text) => parse_date_prefix(&text).map(Some).ok_or_else(|| {
            de::Error::custom(format!("expected a YYYY-MM-DD date, got {text:?}"))
        }),
    }
}

/// Decodes a raw JSON text, converting date-shaped strings to dates.
///
/// # Errors
///
/// Returns `SyncError::MalformedResponse` if `text` is not valid JSON.
pub fn decode(text: &str) -> Result<Value, SyncError> {
    let raw: serde_json::Value = serde_json::from_str(text)?;
    Ok(revive(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn revived(y: i32, m: u32, d: u32, raw: &str) -> Value {
        Value::Date {
            date: date(y, m, d),
            raw: raw.to_string(),
        }
    }

    #[test]
    fn top_level_date_string_becomes_date() {
        assert_eq!(
            decode(r#""2023-01-01""#).unwrap(),
            revived(2023, 1, 1, "2023-01-01")
        );
    }

    #[test]
    fn timestamp_keeps_calendar_date_only() {
        let value = decode(r#"{"created":"2023-03-04T23:59:00-08:00"}"#).unwrap();
        let created = value.get("created").unwrap();
        assert_eq!(created.as_date(), Some(date(2023, 3, 4)));
        assert_eq!(created.as_str(), Some("2023-03-04T23:59:00-08:00"));
    }

    #[test]
    fn nested_dates_are_revived_at_every_depth() {
        let value = decode(
            r#"{"data":{"issueList":[{"created":"2023-01-01","meta":{"history":["2022-12-31"]}}]}}"#,
        )
        .unwrap();

        let issue = &value.get("data").unwrap().get("issueList").unwrap().as_array().unwrap()[0];
        assert_eq!(issue.get("created").unwrap().as_date(), Some(date(2023, 1, 1)));

        let history = issue.get("meta").unwrap().get("history").unwrap();
        assert_eq!(history.as_array().unwrap()[0], revived(2022, 12, 31, "2022-12-31"));
    }

    #[test]
    fn non_matching_values_pass_through() {
        let value =
            decode(r#"{"title":"Fix 2023-01-01 bug","n":3,"f":1.5,"b":true,"z":null}"#).unwrap();

        assert_eq!(value.get("title").unwrap().as_str(), Some("Fix 2023-01-01 bug"));
        assert_eq!(value.get("n"), Some(&Value::Number(3.into())));
        assert_eq!(value.get("b"), Some(&Value::Bool(true)));
        assert!(value.get("z").unwrap().is_null());
        assert_eq!(value.get("f").unwrap().to_json(), serde_json::json!(1.5));
    }

    #[test]
    fn date_shaped_but_invalid_stays_string() {
        let value = decode(r#"["2023-13-40", "20230101", "1-01-01"]"#).unwrap();
        let items = value.as_array().unwrap();
        assert_eq!(items[0].as_str(), Some("2023-13-40"));
        assert_eq!(items[1].as_str(), Some("20230101"));
        assert_eq!(items[2].as_str(), Some("1-01-01"));
    }

    #[test]
    fn non_ascii_digits_are_not_dates() {
        let value = decode(r#""٢٠٢٣-٠١-٠١""#).unwrap();
        assert!(matches!(value, Value::String(_)));
    }

    #[test]
    fn invalid_json_is_malformed_response() {
        let err = decode("<html>502 Bad Gateway</html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[test]
    fn decoding_is_idempotent_on_its_own_output() {
        let first = decode(
            r#"{"a":"2024-02-29T10:00:00Z","b":["x",{"c":"2020-01-01"}],"d":42,"e":null}"#,
        )
        .unwrap();
        let reencoded = serde_json::to_string(&first.to_json()).unwrap();
        let second = decode(&reencoded).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn date_prefixed_text_is_kept_verbatim() {
        let value = decode(r#"{"title":"2024-05-01 release checklist"}"#).unwrap();
        let title = value.get("title").unwrap();

        assert_eq!(title.as_date(), Some(date(2024, 5, 1)));
        assert_eq!(title.as_str(), Some("2024-05-01 release checklist"));
        assert_eq!(
            value.to_json(),
            serde_json::json!({"title": "2024-05-01 release checklist"})
        );
    }

    #[test]
    fn to_typed_reads_dates_and_text() {
        #[derive(serde::Deserialize)]
        struct Row {
            #[serde(deserialize_with = "calendar_date")]
            when: NaiveDate,
            #[serde(default, deserialize_with = "optional_calendar_date")]
            maybe: Option<NaiveDate>,
            #[serde(default, deserialize_with = "optional_calendar_date")]
            later: Option<NaiveDate>,
            label: String,
        }

        let value = decode(
            r#"{"when":"2023-05-06T08:00:00Z","maybe":null,"later":"2023-06-01","label":"2023-01-01 kickoff"}"#,
        )
        .unwrap();
        let row: Row = value.to_typed().unwrap();
        assert_eq!(row.when, date(2023, 5, 6));
        assert!(row.maybe.is_none());
        assert_eq!(row.later, Some(date(2023, 6, 1)));
        assert_eq!(row.label, "2023-01-01 kickoff");
    }

    #[test]
    fn calendar_date_rejects_text_without_date() {
        #[derive(Debug, serde::Deserialize)]
        struct Row {
            #[serde(deserialize_with = "calendar_date")]
            #[allow(dead_code)]
            when: NaiveDate,
        }

        let value = decode(r#"{"when":"soon"}"#).unwrap();
        let err = value.to_typed::<Row>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }
}
