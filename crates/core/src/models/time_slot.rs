use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/submit-time`, the legacy per-interval form. Superseded
/// by the segment grid but kept wire-compatible for older pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitTimeRequest {
    pub room_code: Option<String>,
    pub nickname: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// One submitted interval as returned by `GET /api/get-times/{room_code}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlotEntry {
    pub nickname: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTimesResponse {
    pub success: bool,
    #[serde(default)]
    pub times: Vec<TimeSlotEntry>,
}

/// An interval on one date where every submitting player overlaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonTime {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonTimesResponse {
    pub success: bool,
    #[serde(default)]
    pub common_times: Vec<CommonTime>,
}
