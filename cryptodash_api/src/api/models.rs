use std::fmt::{Display, Formatter};
use std::fmt;

use chrono::{DateTime, Utc};
use chrono::serde::ts_milliseconds;
use serde::{Serialize, Serializer};
use serde_with::{serde_as, DisplayFromStr, SerializeAs};

use cryptodash_ext_serde::EmptyMapIfNone;

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
}

impl Display for ResponseStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self {
            ResponseStatus::Success => f.write_str("success"),
        }
    }
}

/// Body of every non-2xx response: `{"error": "..."}`
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> ErrorResponse {
        ErrorResponse {
            error: error.into(),
        }
    }
}

//

#[serde_as]
#[derive(Serialize)]
pub struct PingResponse {
    #[serde_as(as = "DisplayFromStr")]
    pub status: ResponseStatus,

    #[serde(with = "ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

//

/// An optional snapshot field served on its own endpoint: the value, or `{}`.
pub struct ObjectOrEmpty<'a, T>(pub &'a Option<T>);

impl<'a, T: Serialize> Serialize for ObjectOrEmpty<'a, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        EmptyMapIfNone::serialize_as(self.0, serializer)
    }
}
