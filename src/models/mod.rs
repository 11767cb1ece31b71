pub mod attraction;
pub mod classification;
pub mod common;
pub mod dates;
pub mod event;
pub mod page;
pub mod venue;

use serde_json::{Map, Value};

use crate::error::{ModelError, Result};
use crate::links::{extract_links, Links};
use crate::normalize::{normalize, Fields};

pub use attraction::Attraction;
pub use classification::{
    Classification, ClassificationSubType, ClassificationType, EventClassification, Genre,
    Segment, SubGenre,
};
pub use common::{
    Address, Area, BoxOfficeInfo, City, Country, Dma, GeneralInfo, Image, Location, Market, Place,
    Price, Promoter, State,
};
pub use dates::{Access, Dates, End, Presale, PublicSale, Sales, Start, Status};
pub use event::Event;
pub use page::{Page, Record};
pub use venue::Venue;

/// A record that can be built from one Discovery payload object.
pub trait FromJson: Sized {
    /// Record name used in error messages.
    const RECORD: &'static str;

    fn from_fields(fields: &Fields) -> Result<Self>;

    fn from_json(json: &Value) -> Result<Self> {
        match json {
            Value::Object(object) => from_object(object),
            _ => Err(ModelError::UnexpectedType {
                record: Self::RECORD,
                field: "<payload>".to_string(),
                expected: "an object",
            }),
        }
    }
}

fn from_object<T: FromJson>(object: &Map<String, Value>) -> Result<T> {
    let fields = normalize(T::RECORD, object)?;
    T::from_fields(&fields)
}

/// Nested record under `key`. Missing, null and `{}` all read as absent.
pub(crate) fn nested<T: FromJson>(fields: &Fields, key: &str) -> Result<Option<T>> {
    match fields.object(key)? {
        Some(object) if !object.is_empty() => from_object(object).map(Some),
        _ => Ok(None),
    }
}

/// List of records under `key`; absent stays `None`, `[]` stays empty.
pub(crate) fn nested_list<T: FromJson>(fields: &Fields, key: &str) -> Result<Option<Vec<T>>> {
    match fields.array(key)? {
        Some(items) => build_list(fields, key, items).map(Some),
        None => Ok(None),
    }
}

/// List of records under `_embedded.<key>`.
pub(crate) fn embedded_list<T: FromJson>(fields: &Fields, key: &str) -> Result<Option<Vec<T>>> {
    let Some(embedded) = fields.object("_embedded")? else {
        return Ok(None);
    };
    let label = format!("_embedded.{key}");
    match embedded.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => build_list(fields, &label, items).map(Some),
        Some(_) => Err(fields.unexpected(&label, "an array")),
    }
}

fn build_list<T: FromJson>(fields: &Fields, label: &str, items: &[Value]) -> Result<Vec<T>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(object) => from_object(object),
            _ => Err(fields.unexpected(&format!("{label}[{index}]"), "an object")),
        })
        .collect()
}

pub(crate) fn record_links(fields: &Fields) -> Links {
    extract_links(fields.json("_links"), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object_payloads() {
        let err = Image::from_json(&json!(["not", "an", "image"])).expect_err("array payload");
        assert!(matches!(
            err,
            ModelError::UnexpectedType { record: "Image", .. }
        ));
    }

    #[test]
    fn list_elements_must_be_objects() {
        let err = Venue::from_json(&json!({ "markets": [{ "id": "10" }, "11"] }))
            .expect_err("string market");
        assert_eq!(
            err,
            ModelError::UnexpectedType {
                record: "Venue",
                field: "markets[1]".to_string(),
                expected: "an object",
            }
        );
    }
}
