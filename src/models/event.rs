use std::fmt;

use serde::{Deserialize, Serialize};

use super::classification::EventClassification;
use super::common::{Image, Place, Price, Promoter};
use super::dates::{Dates, Sales};
use super::venue::Venue;
use super::{embedded_list, nested, nested_list, record_links, FromJson};
use crate::error::Result;
use crate::links::Links;
use crate::normalize::Fields;

/// An event as returned by event search.
///
/// Venues come from `_embedded.venues` and are owned copies; nothing links a
/// venue back to the event that carried it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Event {
    pub id: Option<String>,
    pub name: Option<String>,
    pub event_type: Option<String>,
    pub url: Option<String>,
    pub locale: Option<String>,
    pub description: Option<String>,
    pub additional_info: Option<String>,
    pub info: Option<String>,
    pub please_note: Option<String>,
    pub distance: Option<f64>,
    pub units: Option<String>,
    pub test: Option<bool>,
    pub images: Option<Vec<Image>>,
    pub sales: Option<Sales>,
    pub dates: Option<Dates>,
    pub classifications: Option<Vec<EventClassification>>,
    pub promoter: Option<Promoter>,
    pub promoters: Option<Vec<Promoter>>,
    pub price_ranges: Option<Vec<Price>>,
    pub venues: Option<Vec<Venue>>,
    pub place: Option<Place>,
    pub links: Links,
}

impl FromJson for Event {
    const RECORD: &'static str = "Event";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            id: fields.text("id"),
            name: fields.text("name"),
            event_type: fields.text("type"),
            url: fields.text("url"),
            locale: fields.text("locale"),
            description: fields.text("description"),
            additional_info: fields.text("additional_info"),
            info: fields.text("info"),
            please_note: fields.text("please_note"),
            distance: fields.number("distance"),
            units: fields.text("units"),
            test: fields.flag("test"),
            images: nested_list(fields, "images")?,
            sales: nested(fields, "sales")?,
            dates: nested(fields, "dates")?,
            classifications: nested_list(fields, "classifications")?,
            promoter: nested(fields, "promoter")?,
            promoters: nested_list(fields, "promoters")?,
            price_ranges: nested_list(fields, "price_ranges")?,
            venues: embedded_list(fields, "venues")?,
            place: nested(fields, "place")?,
            links: record_links(fields),
        })
    }
}

impl Event {
    pub fn local_start_date(&self) -> Option<&str> {
        self.dates.as_ref()?.start.as_ref()?.local_date.as_deref()
    }

    pub fn status(&self) -> Option<&str> {
        self.dates.as_ref()?.status.as_ref()?.code.as_deref()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let venues = self
            .venues
            .iter()
            .flatten()
            .filter_map(|venue| venue.name.as_deref())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "{} ({}) at {} [{}]",
            self.name.as_deref().unwrap_or("Untitled Event"),
            self.local_start_date().unwrap_or("date TBD"),
            if venues.is_empty() { "unknown venue" } else { venues.as_str() },
            self.status().unwrap_or("unknown status"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ModelError;
    use crate::links::Link;
    use chrono::{TimeZone, Utc};
    use serde_json::{json, Value};

    const SAMPLE_EVENT: &str = r#"{
        "name": "Khalid: Free Spirit World Tour",
        "type": "event",
        "id": "Z7r9jZ1AeFAPf",
        "test": false,
        "url": "https://www.ticketmaster.com/khalid-atlanta",
        "locale": "en-us",
        "images": [
            { "ratio": "16_9", "url": "https://s1.ticketm.net/a.jpg", "width": 1024, "height": 576, "fallback": false }
        ],
        "sales": {
            "public": { "startDateTime": "2019-01-11T15:00:00Z", "startTBD": false, "endDateTime": "2019-04-02T01:00:00Z" },
            "presales": [ { "name": "Verified Fan Presale", "startDateTime": "2019-01-08T15:00:00Z" } ]
        },
        "dates": {
            "start": { "localDate": "2019-04-01", "localTime": "19:00:00", "dateTime": "2019-04-01T23:00:00Z" },
            "timezone": "America/New_York",
            "status": { "code": "onsale" }
        },
        "classifications": [
            { "primary": true, "segment": { "id": "KZFzniwnSyZfZ7v7nJ", "name": "Music" }, "genre": { "id": "KnvZfZ7vAeA", "name": "Rock" } },
            { "genre": { "id": "KnvZfZ7vAvF", "name": "Funk" } }
        ],
        "promoter": { "id": "494", "name": "PROMOTED BY VENUE" },
        "promoters": [ { "id": "494", "name": "PROMOTED BY VENUE" } ],
        "pleaseNote": "No refunds.",
        "priceRanges": [ { "type": "standard", "currency": "USD", "min": 10.0, "max": 25.0 } ],
        "_links": {
            "self": { "href": "/discovery/v2/events/Z7r9jZ1AeFAPf?locale=en-us" },
            "attractions": [ { "href": "/discovery/v2/attractions/K8vZ9171oZf?locale=en-us" } ]
        },
        "_embedded": {
            "venues": [
                { "name": "The Tabernacle", "id": "KovZpaFEZe", "postalCode": "30303" },
                { "name": "State Farm Arena", "id": "KovZpZAFFE1A", "city": { "name": "Atlanta" } }
            ]
        }
    }"#;

    fn sample() -> Value {
        serde_json::from_str(SAMPLE_EVENT).expect("fixture json")
    }

    #[test]
    fn builds_event_with_embedded_venues() {
        let event = Event::from_json(&sample()).expect("event");

        assert_eq!(event.id.as_deref(), Some("Z7r9jZ1AeFAPf"));
        assert_eq!(event.please_note.as_deref(), Some("No refunds."));

        let venues = event.venues.as_ref().expect("venues");
        assert_eq!(venues.len(), 2);
        assert_eq!(venues[0].name.as_deref(), Some("The Tabernacle"));
        assert_eq!(venues[0].postal_code.as_deref(), Some("30303"));
        assert_eq!(
            venues[1].city.as_ref().and_then(|c| c.name.as_deref()),
            Some("Atlanta")
        );

        let classifications = event.classifications.as_ref().expect("classifications");
        assert_eq!(classifications.len(), 2);
        assert_eq!(classifications[1].genre.as_ref().map(|g| g.name.as_str()), Some("Funk"));

        let prices = event.price_ranges.as_ref().expect("price ranges");
        assert_eq!(prices[0].currency.as_deref(), Some("USD"));
        assert_eq!(prices[0].max, Some(25.0));

        assert_eq!(
            event.promoter.as_ref().and_then(|p| p.name.as_deref()),
            Some("PROMOTED BY VENUE")
        );
        assert_eq!(event.promoters.as_ref().map(Vec::len), Some(1));

        let sales = event.sales.as_ref().expect("sales");
        assert_eq!(
            sales.public.as_ref().and_then(|p| p.end_date_time),
            Some(Utc.with_ymd_and_hms(2019, 4, 2, 1, 0, 0).unwrap())
        );
        assert_eq!(sales.presales.as_ref().map(Vec::len), Some(1));

        assert_eq!(event.local_start_date(), Some("2019-04-01"));
        assert_eq!(event.status(), Some("onsale"));

        assert_eq!(
            event.links["self"].href(),
            Some("/discovery/v2/events/Z7r9jZ1AeFAPf?locale=en-us")
        );
        assert!(matches!(
            event.links["attractions"],
            Link::Raw { raw: Value::Array(_) }
        ));

        assert_eq!(
            event.to_string(),
            "Khalid: Free Spirit World Tour (2019-04-01) at The Tabernacle, State Farm Arena [onsale]"
        );
    }

    #[test]
    fn bare_event_has_every_field_absent() {
        let event = Event::from_json(&json!({})).expect("event");
        assert_eq!(
            event,
            Event {
                id: None,
                name: None,
                event_type: None,
                url: None,
                locale: None,
                description: None,
                additional_info: None,
                info: None,
                please_note: None,
                distance: None,
                units: None,
                test: None,
                images: None,
                sales: None,
                dates: None,
                classifications: None,
                promoter: None,
                promoters: None,
                price_ranges: None,
                venues: None,
                place: None,
                links: Links::new(),
            }
        );
    }

    #[test]
    fn embedded_block_without_venues_keeps_venues_absent() {
        let event = Event::from_json(&json!({ "_embedded": { "attractions": [] } })).expect("event");
        assert_eq!(event.venues, None);
    }

    #[test]
    fn bad_venue_aborts_event() {
        let mut payload = sample();
        payload["_embedded"]["venues"][1]["boxOfficeInfo"] = json!("call us");
        let err = Event::from_json(&payload).expect_err("box office must be an object");
        assert_eq!(
            err,
            ModelError::UnexpectedType {
                record: "Venue",
                field: "box_office_info".to_string(),
                expected: "an object",
            }
        );
    }

    #[test]
    fn serializes_for_callers() {
        let event = Event::from_json(&sample()).expect("event");
        let encoded = serde_json::to_value(&event).expect("serialize");
        assert_eq!(encoded["dates"]["start"]["date_time"], json!("2019-04-01T23:00:00Z"));
        assert_eq!(
            encoded["links"]["self"],
            json!("/discovery/v2/events/Z7r9jZ1AeFAPf?locale=en-us")
        );
        let decoded: Event = serde_json::from_value(encoded).expect("deserialize");
        assert_eq!(decoded, event);
    }
}
