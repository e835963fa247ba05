use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{player::Player, segment::Segment};

/// One cell of the availability grid as stored and transferred: a player's
/// yes/no for a (date, segment) pair. Uniquely keyed by (nickname, date,
/// segment); later writes overwrite earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityEntry {
    pub nickname: Player,
    pub date: NaiveDate,
    pub segment: Segment,
    pub available: bool,
}

/// A (date, segment) pair every active player marked available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommonCell {
    pub date: NaiveDate,
    pub segment: Segment,
}

/// A single cell mutation inside a batched write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub date: NaiveDate,
    pub segment: Segment,
    pub available: bool,
}

/// Body of `POST /api/availability/batch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub room_code: Option<String>,
    pub nickname: String,
    #[serde(default)]
    pub changes: Vec<CellChange>,
}

/// Response of `GET /api/availability/month`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthResponse {
    pub success: bool,
    #[serde(default)]
    pub entries: Vec<AvailabilityEntry>,
    #[serde(default)]
    pub common: Vec<CommonCell>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Generic write acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Ack {
    pub fn ok() -> Self {
        Ack { success: true, error: None }
    }
}
