use chrono::{DateTime, Utc};
use chrono::serde::ts_seconds;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FearGreed {
    /// 0 (extreme fear) to 100 (extreme greed)
    pub value: u8,
    pub classification: String,

    #[serde(with = "ts_seconds")]
    pub timestamp: DateTime<Utc>,
}
