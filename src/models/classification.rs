//! Segment → genre → subgenre hierarchy and the two wire shapes that carry it.
//!
//! Classification search returns [`Classification`], with the tree nested
//! under `segment._embedded`. Event search flattens the same levels onto the
//! classification itself, which is what [`EventClassification`] models. The
//! caller picks the builder; payloads are never sniffed.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{embedded_list, nested, record_links, FromJson};
use crate::error::Result;
use crate::links::Links;
use crate::normalize::Fields;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Segment {
    pub id: String,
    pub name: String,
    pub genres: Option<Vec<Genre>>,
    pub links: Links,
}

impl FromJson for Segment {
    const RECORD: &'static str = "Segment";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            id: fields.required_text("id")?,
            name: fields.required_text("name")?,
            genres: embedded_list(fields, "genres")?,
            links: record_links(fields),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Genre {
    pub id: String,
    pub name: String,
    pub subgenres: Option<Vec<SubGenre>>,
    pub links: Links,
}

impl FromJson for Genre {
    const RECORD: &'static str = "Genre";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            id: fields.required_text("id")?,
            name: fields.required_text("name")?,
            subgenres: embedded_list(fields, "subgenres")?,
            links: record_links(fields),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SubGenre {
    pub id: String,
    pub name: String,
    pub links: Links,
}

impl FromJson for SubGenre {
    const RECORD: &'static str = "SubGenre";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            id: fields.required_text("id")?,
            name: fields.required_text("name")?,
            links: record_links(fields),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClassificationType {
    pub id: Option<String>,
    pub name: Option<String>,
    pub subtypes: Option<Vec<ClassificationSubType>>,
}

impl FromJson for ClassificationType {
    const RECORD: &'static str = "ClassificationType";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            id: fields.text("id"),
            name: fields.text("name"),
            subtypes: embedded_list(fields, "subtypes")?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClassificationSubType {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl FromJson for ClassificationSubType {
    const RECORD: &'static str = "ClassificationSubType";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            id: fields.text("id"),
            name: fields.text("name"),
        })
    }
}

/// Classification as returned by classification search.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Classification {
    pub segment: Option<Segment>,
    pub classification_type: Option<ClassificationType>,
    pub subtype: Option<ClassificationSubType>,
    pub primary: Option<bool>,
    pub links: Links,
}

impl FromJson for Classification {
    const RECORD: &'static str = "Classification";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            segment: nested(fields, "segment")?,
            classification_type: nested(fields, "type")?,
            subtype: nested(fields, "subtype")?,
            primary: fields.flag("primary"),
            links: record_links(fields),
        })
    }
}

/// Classification as embedded in event search results.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventClassification {
    pub segment: Option<Segment>,
    pub genre: Option<Genre>,
    pub subgenre: Option<SubGenre>,
    pub classification_type: Option<ClassificationType>,
    pub subtype: Option<ClassificationSubType>,
    pub primary: Option<bool>,
    pub family: Option<bool>,
    pub links: Links,
}

impl FromJson for EventClassification {
    const RECORD: &'static str = "EventClassification";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            segment: nested(fields, "segment")?,
            genre: nested(fields, "genre")?,
            subgenre: nested(fields, "subgenre")?,
            classification_type: nested(fields, "type")?,
            subtype: nested(fields, "subtype")?,
            primary: fields.flag("primary"),
            family: fields.flag("family"),
            links: record_links(fields),
        })
    }
}

fn name_or_unknown(name: Option<&str>) -> &str {
    name.unwrap_or("Unknown")
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for SubGenre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for ClassificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(name_or_unknown(self.name.as_deref()))
    }
}

impl fmt::Display for ClassificationSubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(name_or_unknown(self.name.as_deref()))
    }
}

impl fmt::Display for EventClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segment = self.segment.as_ref().map(|s| s.name.as_str());
        let genre = self.genre.as_ref().map(|g| g.name.as_str());
        let subgenre = self.subgenre.as_ref().map(|s| s.name.as_str());
        let kind = self.classification_type.as_ref().and_then(|t| t.name.as_deref());
        let subtype = self.subtype.as_ref().and_then(|t| t.name.as_deref());
        write!(
            f,
            "Segment: {} / Genre: {} / Subgenre: {} / Type: {} / Subtype: {}",
            name_or_unknown(segment),
            name_or_unknown(genre),
            name_or_unknown(subgenre),
            name_or_unknown(kind),
            name_or_unknown(subtype),
        )
    }
}
