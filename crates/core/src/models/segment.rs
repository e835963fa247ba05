use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::errors::TimeError;

/// One of the four fixed daily time windows, the atomic granularity of
/// availability. Wire ids are lowercase; display ranges are informational
/// only (the grid never does interval arithmetic on them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    Morning,
    Noon,
    Afternoon,
    Evening,
}

impl Segment {
    /// All segments in display (column) order.
    pub const ALL: [Segment; 4] = [
        Segment::Morning,
        Segment::Noon,
        Segment::Afternoon,
        Segment::Evening,
    ];

    /// Stable wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Segment::Morning => "morning",
            Segment::Noon => "noon",
            Segment::Afternoon => "afternoon",
            Segment::Evening => "evening",
        }
    }

    /// Column header label.
    pub fn label(&self) -> &'static str {
        match self {
            Segment::Morning => "Morning",
            Segment::Noon => "Noon",
            Segment::Afternoon => "Afternoon",
            Segment::Evening => "Evening",
        }
    }

    /// Wall-clock range shown under the column header.
    pub fn display_range(&self) -> (NaiveTime, NaiveTime) {
        let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
        match self {
            Segment::Morning => (t(8, 0), t(12, 0)),
            Segment::Noon => (t(12, 0), t(14, 0)),
            Segment::Afternoon => (t(14, 0), t(18, 0)),
            Segment::Evening => (t(18, 0), t(23, 0)),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Segment {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Segment::ALL
            .into_iter()
            .find(|seg| seg.id() == s)
            .ok_or_else(|| TimeError::Validation(format!("Unknown segment: {s}")))
    }
}
