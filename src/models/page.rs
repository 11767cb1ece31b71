use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::trace;

use super::{Attraction, Classification, Event, FromJson, Venue};
use crate::error::{ModelError, Result};
use crate::links::{extract_links, Links};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Record {
    Event(Event),
    Venue(Venue),
    Attraction(Attraction),
    Classification(Classification),
}

/// One page of search results.
///
/// Metadata is fixed at construction; records accumulate in payload order.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Page {
    pub number: u64,
    pub size: u64,
    pub total_pages: u64,
    pub total_elements: u64,
    pub links: Links,
    records: Vec<Record>,
}

impl Page {
    pub fn new(number: u64, size: u64, total_pages: u64, total_elements: u64, links: Links) -> Self {
        Self {
            number,
            size,
            total_pages,
            total_elements,
            links,
            records: Vec::new(),
        }
    }

    /// Assembles a page from a search response.
    ///
    /// `base_url` is prefixed to the pagination links. Any record that fails
    /// to build fails the whole page.
    pub fn from_json(json: &Value, base_url: Option<&str>) -> Result<Self> {
        let Value::Object(root) = json else {
            return Err(ModelError::UnexpectedType {
                record: "Page",
                field: "<payload>".to_string(),
                expected: "an object",
            });
        };

        let meta = match root.get("page") {
            None | Some(Value::Null) => {
                return Err(ModelError::MissingField {
                    record: "Page",
                    field: "page",
                })
            }
            Some(Value::Object(meta)) => meta,
            Some(_) => {
                return Err(ModelError::UnexpectedType {
                    record: "Page",
                    field: "page".to_string(),
                    expected: "an object",
                })
            }
        };

        let mut page = Page::new(
            counter(meta, "number")?,
            counter(meta, "size")?,
            counter(meta, "totalPages")?,
            counter(meta, "totalElements")?,
            extract_links(root.get("_links"), base_url),
        );

        let embedded = match root.get("_embedded") {
            None | Some(Value::Null) => return Ok(page),
            Some(Value::Object(embedded)) => embedded,
            Some(_) => {
                return Err(ModelError::UnexpectedType {
                    record: "Page",
                    field: "_embedded".to_string(),
                    expected: "an object",
                })
            }
        };

        for (collection, items) in embedded {
            let build: fn(&Value) -> Result<Record> = match collection.as_str() {
                "events" => |item: &Value| Event::from_json(item).map(Record::Event),
                "venues" => |item: &Value| Venue::from_json(item).map(Record::Venue),
                "attractions" => {
                    |item: &Value| Attraction::from_json(item).map(Record::Attraction)
                }
                "classifications" => {
                    |item: &Value| Classification::from_json(item).map(Record::Classification)
                }
                _ => {
                    trace!(collection = %collection, "ignoring unrecognized embedded collection");
                    continue;
                }
            };
            let Value::Array(items) = items else {
                return Err(ModelError::UnexpectedType {
                    record: "Page",
                    field: format!("_embedded.{collection}"),
                    expected: "an array",
                });
            };
            for item in items {
                page.push(build(item)?);
            }
        }

        trace!(
            number = page.number,
            total_pages = page.total_pages,
            records = page.len(),
            "assembled page"
        );
        Ok(page)
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    pub fn events(&self) -> impl Iterator<Item = &Event> {
        self.records.iter().filter_map(|record| match record {
            Record::Event(event) => Some(event),
            _ => None,
        })
    }

    pub fn venues(&self) -> impl Iterator<Item = &Venue> {
        self.records.iter().filter_map(|record| match record {
            Record::Venue(venue) => Some(venue),
            _ => None,
        })
    }

    pub fn attractions(&self) -> impl Iterator<Item = &Attraction> {
        self.records.iter().filter_map(|record| match record {
            Record::Attraction(attraction) => Some(attraction),
            _ => None,
        })
    }

    pub fn classifications(&self) -> impl Iterator<Item = &Classification> {
        self.records.iter().filter_map(|record| match record {
            Record::Classification(classification) => Some(classification),
            _ => None,
        })
    }

    pub fn has_next(&self) -> bool {
        self.number.saturating_add(1) < self.total_pages
    }
}

fn counter(meta: &Map<String, Value>, key: &'static str) -> Result<u64> {
    match meta.get(key) {
        None | Some(Value::Null) => Err(ModelError::MissingField {
            record: "Page",
            field: key,
        }),
        Some(value) => value.as_u64().ok_or_else(|| ModelError::UnexpectedType {
            record: "Page",
            field: format!("page.{key}"),
            expected: "a non-negative integer",
        }),
    }
}

impl Deref for Page {
    type Target = [Record];

    fn deref(&self) -> &[Record] {
        &self.records
    }
}

impl Extend<Record> for Page {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl IntoIterator for Page {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Page {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page {}/{}, Size: {}, Total elements: {}",
            self.number, self.total_pages, self.size, self.total_elements
        )
    }
}
