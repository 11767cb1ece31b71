use serde::{Deserialize, Serialize};

use super::{nested, FromJson};
use crate::error::Result;
use crate::normalize::Fields;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Image {
    pub url: Option<String>,
    pub ratio: Option<String>,
    pub width: Option<u64>,
    pub height: Option<u64>,
    pub fallback: Option<bool>,
    pub attribution: Option<String>,
}

impl FromJson for Image {
    const RECORD: &'static str = "Image";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            url: fields.text("url"),
            ratio: fields.text("ratio"),
            width: fields.integer("width"),
            height: fields.integer("height"),
            fallback: fields.flag("fallback"),
            attribution: fields.text("attribution"),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Price {
    pub price_type: Option<String>,
    pub currency: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FromJson for Price {
    const RECORD: &'static str = "Price";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            price_type: fields.text("type"),
            currency: fields.text("currency"),
            min: fields.number("min"),
            max: fields.number("max"),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Promoter {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl FromJson for Promoter {
    const RECORD: &'static str = "Promoter";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            id: fields.text("id"),
            name: fields.text("name"),
            description: fields.text("description"),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Address {
    pub line_1: Option<String>,
    pub line_2: Option<String>,
    pub line_3: Option<String>,
}

impl FromJson for Address {
    const RECORD: &'static str = "Address";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            line_1: fields.text("line_1"),
            line_2: fields.text("line_2"),
            line_3: fields.text("line_3"),
        })
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines: Vec<&str> = [&self.line_1, &self.line_2, &self.line_3]
            .into_iter()
            .filter_map(|line| line.as_deref())
            .collect();
        write!(f, "{}", lines.join(", "))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct City {
    pub name: Option<String>,
}

impl FromJson for City {
    const RECORD: &'static str = "City";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            name: fields.text("name"),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Area {
    pub name: Option<String>,
}

impl FromJson for Area {
    const RECORD: &'static str = "Area";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            name: fields.text("name"),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct State {
    /// Two-letter code, e.g. `GA`.
    pub state_code: Option<String>,
    pub name: Option<String>,
}

impl FromJson for State {
    const RECORD: &'static str = "State";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            state_code: fields.text("state_code"),
            name: fields.text("name"),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Country {
    pub country_code: Option<String>,
    pub name: Option<String>,
}

impl FromJson for Country {
    const RECORD: &'static str = "Country";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            country_code: fields.text("country_code"),
            name: fields.text("name"),
        })
    }
}

/// Coordinates stay textual so the source precision survives.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Location {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl FromJson for Location {
    const RECORD: &'static str = "Location";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            latitude: fields.text("latitude"),
            longitude: fields.text("longitude"),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Market {
    pub id: Option<String>,
}

impl FromJson for Market {
    const RECORD: &'static str = "Market";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            id: fields.text("id"),
        })
    }
}

/// Designated market area.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Dma {
    pub id: Option<String>,
}

impl FromJson for Dma {
    const RECORD: &'static str = "Dma";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            id: fields.text("id"),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BoxOfficeInfo {
    pub phone_number_detail: Option<String>,
    pub open_hours_detail: Option<String>,
    pub accepted_payment_detail: Option<String>,
    pub will_call_detail: Option<String>,
}

impl FromJson for BoxOfficeInfo {
    const RECORD: &'static str = "BoxOfficeInfo";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            phone_number_detail: fields.text("phone_number_detail"),
            open_hours_detail: fields.text("open_hours_detail"),
            accepted_payment_detail: fields.text("accepted_payment_detail"),
            will_call_detail: fields.text("will_call_detail"),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeneralInfo {
    pub general_rule: Option<String>,
    pub child_rule: Option<String>,
}

impl FromJson for GeneralInfo {
    const RECORD: &'static str = "GeneralInfo";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            general_rule: fields.text("general_rule"),
            child_rule: fields.text("child_rule"),
        })
    }
}

/// Free-form location attached to events that have no venue.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Place {
    pub name: Option<String>,
    pub area: Option<Area>,
    pub address: Option<Address>,
    pub city: Option<City>,
    pub state: Option<State>,
    pub country: Option<Country>,
    pub postal_code: Option<String>,
    pub location: Option<Location>,
}

impl FromJson for Place {
    const RECORD: &'static str = "Place";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            name: fields.text("name"),
            area: nested(fields, "area")?,
            address: nested(fields, "address")?,
            city: nested(fields, "city")?,
            state: nested(fields, "state")?,
            country: nested(fields, "country")?,
            postal_code: fields.text("postal_code"),
            location: nested(fields, "location")?,
        })
    }
}
