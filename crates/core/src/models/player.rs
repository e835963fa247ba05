use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::TimeError;

/// One of the four fixed participants sharing the group.
///
/// The catalog is immutable: players are never created or renamed at runtime,
/// and the wire nickname doubles as the stable identifier in both the HTTP
/// API and the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    #[serde(rename = "Player 1")]
    One,
    #[serde(rename = "Player 2")]
    Two,
    #[serde(rename = "Player 3")]
    Three,
    #[serde(rename = "Player 4")]
    Four,
}

impl Player {
    /// All players in seat order.
    pub const ALL: [Player; 4] = [Player::One, Player::Two, Player::Three, Player::Four];

    /// Stable wire identifier, also used as the display label.
    pub fn nickname(&self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
            Player::Three => "Player 3",
            Player::Four => "Player 4",
        }
    }

    /// Color token for the per-player dot indicator in grid cells.
    pub fn tag(&self) -> &'static str {
        match self {
            Player::One => "#e74c3c",
            Player::Two => "#3498db",
            Player::Three => "#2ecc71",
            Player::Four => "#f39c12",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nickname())
    }
}

impl FromStr for Player {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Player::ALL
            .into_iter()
            .find(|p| p.nickname() == s)
            .ok_or_else(|| TimeError::Validation(format!("Unknown player nickname: {s}")))
    }
}
