use std::fmt;

use serde::{Deserialize, Serialize};

use super::classification::Classification;
use super::common::Image;
use super::{nested_list, record_links, FromJson};
use crate::error::Result;
use crate::links::Links;
use crate::normalize::Fields;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Attraction {
    pub id: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub locale: Option<String>,
    pub test: Option<bool>,
    pub classifications: Option<Vec<Classification>>,
    pub images: Option<Vec<Image>>,
    pub links: Links,
}

impl FromJson for Attraction {
    const RECORD: &'static str = "Attraction";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            id: fields.text("id"),
            name: fields.text("name"),
            url: fields.text("url"),
            locale: fields.text("locale"),
            test: fields.flag("test"),
            classifications: nested_list(fields, "classifications")?,
            images: nested_list(fields, "images")?,
            links: record_links(fields),
        })
    }
}

impl fmt::Display for Attraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or("Unknown"))
    }
}
