use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{
    Address, BoxOfficeInfo, City, Country, Dma, GeneralInfo, Image, Location, Market, State,
};
use super::{nested, nested_list, record_links, FromJson};
use crate::error::Result;
use crate::links::Links;
use crate::normalize::Fields;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Venue {
    pub id: Option<String>,
    pub name: Option<String>,
    pub venue_type: Option<String>,
    pub url: Option<String>,
    pub locale: Option<String>,
    pub description: Option<String>,
    pub additional_info: Option<String>,
    pub distance: Option<f64>,
    pub units: Option<String>,
    pub currency: Option<String>,
    pub test: Option<bool>,
    pub postal_code: Option<String>,
    pub timezone: Option<String>,
    pub address: Option<Address>,
    pub city: Option<City>,
    pub state: Option<State>,
    pub country: Option<Country>,
    pub location: Option<Location>,
    pub box_office_info: Option<BoxOfficeInfo>,
    pub general_info: Option<GeneralInfo>,
    pub parking_detail: Option<String>,
    pub accessible_seating_detail: Option<String>,
    /// Kept as sent; the shape varies per network.
    pub social: Option<Value>,
    pub markets: Option<Vec<Market>>,
    pub dmas: Option<Vec<Dma>>,
    pub images: Option<Vec<Image>>,
    pub links: Links,
}

impl FromJson for Venue {
    const RECORD: &'static str = "Venue";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            id: fields.text("id"),
            name: fields.text("name"),
            venue_type: fields.text("type"),
            url: fields.text("url"),
            locale: fields.text("locale"),
            description: fields.text("description"),
            additional_info: fields.text("additional_info"),
            distance: fields.number("distance"),
            units: fields.text("units"),
            currency: fields.text("currency"),
            test: fields.flag("test"),
            postal_code: fields.text("postal_code"),
            timezone: fields.text("timezone"),
            address: nested(fields, "address")?,
            city: nested(fields, "city")?,
            state: nested(fields, "state")?,
            country: nested(fields, "country")?,
            location: nested(fields, "location")?,
            box_office_info: nested(fields, "box_office_info")?,
            general_info: nested(fields, "general_info")?,
            parking_detail: fields.text("parking_detail"),
            accessible_seating_detail: fields.text("accessible_seating_detail"),
            social: fields.json("social").cloned(),
            markets: nested_list(fields, "markets")?,
            dmas: nested_list(fields, "dmas")?,
            images: nested_list(fields, "images")?,
            links: record_links(fields),
        })
    }
}

impl fmt::Display for Venue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("Unknown venue");
        let address = self.address.as_ref().map(Address::to_string);
        let city = self.city.as_ref().and_then(|c| c.name.as_deref());
        let state = self.state.as_ref().and_then(|s| s.state_code.as_deref());
        write!(f, "{name}")?;
        if let Some(address) = address.filter(|a| !a.is_empty()) {
            write!(f, " at {address}")?;
        }
        match (city, state) {
            (Some(city), Some(state)) => write!(f, " in {city} {state}"),
            (Some(city), None) => write!(f, " in {city}"),
            (None, Some(state)) => write!(f, " in {state}"),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE_VENUE: &str = r#"{
        "name": "The Tabernacle",
        "type": "venue",
        "id": "KovZpaFEZe",
        "test": false,
        "url": "http://www.ticketmaster.com/venue/115031",
        "locale": "en-us",
        "postalCode": "30303",
        "timezone": "America/New_York",
        "city": { "name": "Atlanta" },
        "state": { "name": "Georgia", "stateCode": "GA" },
        "country": { "name": "United States Of America", "countryCode": "US" },
        "address": { "line1": "152 Luckie Street" },
        "location": { "longitude": "-84.391449", "latitude": "33.758688" },
        "markets": [ { "id": "10" } ],
        "dmas": [ { "id": 220 } ],
        "social": { "twitter": { "handle": "@TabernacleATL" } },
        "boxOfficeInfo": {
            "phoneNumberDetail": "Tabernacle Box Office (404) 659-9022",
            "openHoursDetail": "Box office opens at noon on show days",
            "acceptedPaymentDetail": "Cash, Visa, MC",
            "willCallDetail": "Will call opens with doors"
        },
        "parkingDetail": "Several paid lots nearby",
        "generalInfo": { "generalRule": "No re-entry", "childRule": "All ages" },
        "upcomingEvents": { "_total": 31, "ticketmaster": 31 },
        "_links": { "self": { "href": "/discovery/v2/venues/KovZpaFEZe?locale=en-us" } }
    }"#;

    #[test]
    fn builds_full_venue() {
        let payload: Value = serde_json::from_str(SAMPLE_VENUE).expect("fixture json");
        let venue = Venue::from_json(&payload).expect("venue");

        assert_eq!(venue.id.as_deref(), Some("KovZpaFEZe"));
        assert_eq!(venue.venue_type.as_deref(), Some("venue"));
        assert_eq!(venue.postal_code.as_deref(), Some("30303"));
        assert_eq!(
            venue.address.as_ref().and_then(|a| a.line_1.as_deref()),
            Some("152 Luckie Street")
        );
        assert_eq!(venue.state.as_ref().and_then(|s| s.state_code.as_deref()), Some("GA"));
        assert_eq!(
            venue.country.as_ref().and_then(|c| c.country_code.as_deref()),
            Some("US")
        );
        let location = venue.location.as_ref().expect("location");
        assert_eq!(location.latitude.as_deref(), Some("33.758688"));
        assert_eq!(location.longitude.as_deref(), Some("-84.391449"));
        assert_eq!(
            venue.markets,
            Some(vec![Market {
                id: Some("10".to_string())
            }])
        );
        assert_eq!(
            venue.dmas,
            Some(vec![Dma {
                id: Some("220".to_string())
            }])
        );
        assert_eq!(
            venue
                .box_office_info
                .as_ref()
                .and_then(|b| b.will_call_detail.as_deref()),
            Some("Will call opens with doors")
        );
        assert_eq!(
            venue.general_info.as_ref().and_then(|g| g.child_rule.as_deref()),
            Some("All ages")
        );
        assert_eq!(venue.parking_detail.as_deref(), Some("Several paid lots nearby"));
        assert_eq!(
            venue.social,
            Some(json!({ "twitter": { "handle": "@TabernacleATL" } }))
        );
        assert_eq!(venue.test, Some(false));
        assert_eq!(
            venue.links["self"].href(),
            Some("/discovery/v2/venues/KovZpaFEZe?locale=en-us")
        );
        assert_eq!(
            venue.to_string(),
            "The Tabernacle at 152 Luckie Street in Atlanta GA"
        );
    }

    #[test]
    fn missing_fields_are_absent() {
        let venue = Venue::from_json(&json!({ "name": "The Tabernacle" })).expect("venue");
        assert_eq!(venue.id, None);
        assert_eq!(venue.address, None);
        assert_eq!(venue.location, None);
        assert_eq!(venue.markets, None);
        assert_eq!(venue.dmas, None);
        assert_eq!(venue.images, None);
        assert_eq!(venue.box_office_info, None);
        assert!(venue.links.is_empty());
        assert_eq!(venue.to_string(), "The Tabernacle");
    }

    #[test]
    fn empty_nested_objects_read_as_absent() {
        let venue = Venue::from_json(&json!({ "address": {}, "markets": [] })).expect("venue");
        assert_eq!(venue.address, None);
        assert_eq!(venue.markets, Some(Vec::new()));
    }
}
