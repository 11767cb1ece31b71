//! Maps decoded Discovery API payloads into typed event, venue, attraction
//! and classification records.
//!
//! Every builder is a pure function over an in-memory `serde_json::Value`;
//! transport, paging requests and retries live with the caller.

pub mod config;
pub mod error;
pub mod links;
pub mod models;
pub mod normalize;

pub use config::MapperConfig;
pub use error::{ModelError, Result};
pub use links::{extract_links, Link, Links};
pub use models::{
    Attraction, Classification, Event, EventClassification, FromJson, Genre, Page, Record,
    Segment, SubGenre, Venue,
};
pub use normalize::{normalize, parse_utc_timestamp, FieldValue, Fields};
