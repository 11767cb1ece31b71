use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{ModelError, Result};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

static TIMESTAMP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z$").expect("valid timestamp regex")
});

static ATTR_MAP: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("localDate", "local_date"),
        ("localTime", "local_time"),
        ("dateTime", "date_time"),
        ("dateTBD", "date_tbd"),
        ("startTBD", "start_tbd"),
        ("dateTBA", "date_tba"),
        ("timeTBA", "time_tba"),
        ("noSpecificTime", "no_specific_time"),
        ("spanMultipleDays", "span_multiple_days"),
        ("startDateTime", "start_date_time"),
        ("startApproximate", "start_approximate"),
        ("endDateTime", "end_date_time"),
        ("endApproximate", "end_approximate"),
        ("postalCode", "postal_code"),
        ("stateCode", "state_code"),
        ("countryCode", "country_code"),
        ("line1", "line_1"),
        ("line2", "line_2"),
        ("line3", "line_3"),
        ("additionalInfo", "additional_info"),
        ("pleaseNote", "please_note"),
        ("priceRanges", "price_ranges"),
        ("parkingDetail", "parking_detail"),
        ("accessibleSeatingDetail", "accessible_seating_detail"),
        ("boxOfficeInfo", "box_office_info"),
        ("generalInfo", "general_info"),
        ("subType", "subtype"),
        ("subGenre", "subgenre"),
        ("phoneNumberDetail", "phone_number_detail"),
        ("openHoursDetail", "open_hours_detail"),
        ("acceptedPaymentDetail", "accepted_payment_detail"),
        ("willCallDetail", "will_call_detail"),
        ("generalRule", "general_rule"),
        ("childRule", "child_rule"),
    ])
});

/// Canonical name for a wire key, if the key is one the API renames.
pub fn canonical_name(wire: &str) -> Option<&'static str> {
    ATTR_MAP.get(wire).copied()
}

/// Parses an instant in the API's fixed `YYYY-MM-DDTHH:MM:SSZ` form.
pub fn parse_utc_timestamp(field: &str, text: &str) -> Result<DateTime<Utc>> {
    let malformed = || ModelError::MalformedTimestamp {
        field: field.to_string(),
        value: text.to_string(),
    };
    if !TIMESTAMP_RE.is_match(text) {
        return Err(malformed());
    }
    let naive = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).map_err(|_| malformed())?;
    // chrono folds `:60` into a leap-second nanosecond; the wire format has none.
    if naive.nanosecond() >= 1_000_000_000 {
        return Err(malformed());
    }
    Ok(naive.and_utc())
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Json(Value),
    Timestamp(DateTime<Utc>),
}

/// A payload object after renaming, keyed by canonical field names.
///
/// Every accessor treats a missing key and an explicit JSON `null` the same
/// way: the field reads as `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields {
    record: &'static str,
    values: BTreeMap<String, FieldValue>,
}

/// Renames wire keys to canonical names and parses the renamed `date_time`
/// fields.
///
/// Keys outside the lookup table, canonical ones included, are carried
/// through untouched.
pub fn normalize(record: &'static str, object: &Map<String, Value>) -> Result<Fields> {
    let mut values = BTreeMap::new();
    for (key, value) in object {
        let (value, name) = match canonical_name(key) {
            Some(name) if name.contains("date_time") => (timestamp_value(name, value)?, name),
            Some(name) => (FieldValue::Json(value.clone()), name),
            None => (FieldValue::Json(value.clone()), key.as_str()),
        };
        values.insert(name.to_string(), value);
    }
    Ok(Fields { record, values })
}

fn timestamp_value(name: &str, value: &Value) -> Result<FieldValue> {
    match value {
        Value::Null => Ok(FieldValue::Json(Value::Null)),
        Value::String(text) => parse_utc_timestamp(name, text).map(FieldValue::Timestamp),
        other => Err(ModelError::MalformedTimestamp {
            field: name.to_string(),
            value: other.to_string(),
        }),
    }
}

impl Fields {
    pub fn record(&self) -> &'static str {
        self.record
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        match self.values.get(key)? {
            FieldValue::Json(Value::Null) => None,
            value => Some(value),
        }
    }

    pub fn json(&self, key: &str) -> Option<&Value> {
        match self.get(key)? {
            FieldValue::Json(value) => Some(value),
            FieldValue::Timestamp(_) => None,
        }
    }

    /// Strings as-is; numbers are stringified so identifiers and coordinates
    /// keep the precision the payload sent.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.json(key)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.json(key)? {
            Value::Bool(flag) => Some(*flag),
            Value::String(text) => text.parse().ok(),
            _ => None,
        }
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        match self.json(key)? {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn integer(&self, key: &str) -> Option<u64> {
        match self.json(key)? {
            Value::Number(number) => number.as_u64(),
            Value::String(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        match self.get(key)? {
            FieldValue::Timestamp(instant) => Some(*instant),
            FieldValue::Json(_) => None,
        }
    }

    pub fn object(&self, key: &str) -> Result<Option<&Map<String, Value>>> {
        match self.json(key) {
            None => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(_) => Err(self.unexpected(key, "an object")),
        }
    }

    pub fn array(&self, key: &str) -> Result<Option<&Vec<Value>>> {
        match self.json(key) {
            None => Ok(None),
            Some(Value::Array(items)) => Ok(Some(items)),
            Some(_) => Err(self.unexpected(key, "an array")),
        }
    }

    /// Mandatory text field; absence is a hard error.
    pub fn required_text(&self, key: &'static str) -> Result<String> {
        self.text(key).ok_or(ModelError::MissingField {
            record: self.record,
            field: key,
        })
    }

    pub(crate) fn unexpected(&self, key: &str, expected: &'static str) -> ModelError {
        ModelError::UnexpectedType {
            record: self.record,
            field: key.to_string(),
            expected,
        }
    }

    pub fn into_values(self) -> BTreeMap<String, FieldValue> {
        self.values
    }
}
