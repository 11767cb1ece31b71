use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{nested, nested_list, FromJson};
use crate::error::Result;
use crate::normalize::Fields;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Start {
    pub local_date: Option<String>,
    pub local_time: Option<String>,
    pub date_time: Option<DateTime<Utc>>,
    pub date_tbd: Option<bool>,
    pub date_tba: Option<bool>,
    pub time_tba: Option<bool>,
    pub no_specific_time: Option<bool>,
}

impl FromJson for Start {
    const RECORD: &'static str = "Start";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            local_date: fields.text("local_date"),
            local_time: fields.text("local_time"),
            date_time: fields.timestamp("date_time"),
            date_tbd: fields.flag("date_tbd"),
            date_tba: fields.flag("date_tba"),
            time_tba: fields.flag("time_tba"),
            no_specific_time: fields.flag("no_specific_time"),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct End {
    pub local_date: Option<String>,
    pub local_time: Option<String>,
    pub date_time: Option<DateTime<Utc>>,
    pub approximate: Option<bool>,
    pub no_specific_time: Option<bool>,
}

impl FromJson for End {
    const RECORD: &'static str = "End";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            local_date: fields.text("local_date"),
            local_time: fields.text("local_time"),
            date_time: fields.timestamp("date_time"),
            approximate: fields.flag("approximate"),
            no_specific_time: fields.flag("no_specific_time"),
        })
    }
}

/// Door/access window.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Access {
    pub start_date_time: Option<DateTime<Utc>>,
    pub start_approximate: Option<bool>,
    pub end_date_time: Option<DateTime<Utc>>,
    pub end_approximate: Option<bool>,
}

impl FromJson for Access {
    const RECORD: &'static str = "Access";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            start_date_time: fields.timestamp("start_date_time"),
            start_approximate: fields.flag("start_approximate"),
            end_date_time: fields.timestamp("end_date_time"),
            end_approximate: fields.flag("end_approximate"),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Status {
    /// `onsale`, `offsale`, `cancelled`, `postponed`, `rescheduled`...
    pub code: Option<String>,
}

impl FromJson for Status {
    const RECORD: &'static str = "Status";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            code: fields.text("code"),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Dates {
    pub start: Option<Start>,
    pub end: Option<End>,
    pub access: Option<Access>,
    pub timezone: Option<String>,
    pub status: Option<Status>,
    pub span_multiple_days: Option<bool>,
}

impl FromJson for Dates {
    const RECORD: &'static str = "Dates";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            start: nested(fields, "start")?,
            end: nested(fields, "end")?,
            access: nested(fields, "access")?,
            timezone: fields.text("timezone"),
            status: nested(fields, "status")?,
            span_multiple_days: fields.flag("span_multiple_days"),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PublicSale {
    pub start_date_time: Option<DateTime<Utc>>,
    pub end_date_time: Option<DateTime<Utc>>,
    pub start_tbd: Option<bool>,
}

impl FromJson for PublicSale {
    const RECORD: &'static str = "PublicSale";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            start_date_time: fields.timestamp("start_date_time"),
            end_date_time: fields.timestamp("end_date_time"),
            start_tbd: fields.flag("start_tbd"),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Presale {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub start_date_time: Option<DateTime<Utc>>,
    pub end_date_time: Option<DateTime<Utc>>,
}

impl FromJson for Presale {
    const RECORD: &'static str = "Presale";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            name: fields.text("name"),
            description: fields.text("description"),
            url: fields.text("url"),
            start_date_time: fields.timestamp("start_date_time"),
            end_date_time: fields.timestamp("end_date_time"),
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Sales {
    pub public: Option<PublicSale>,
    pub presales: Option<Vec<Presale>>,
}

impl FromJson for Sales {
    const RECORD: &'static str = "Sales";

    fn from_fields(fields: &Fields) -> Result<Self> {
        Ok(Self {
            public: nested(fields, "public")?,
            presales: nested_list(fields, "presales")?,
        })
    }
}
