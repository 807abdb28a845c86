use serde::{Deserialize, Serialize};

use crate::core::palette::Palette;

/// Display identity of one player.
///
/// The engine never interprets `color`; presentation layers parse it
/// (`#rrggbb` in the reference configuration).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSpec {
    pub name: String,
    pub color: String,
}

impl PlayerSpec {
    #[must_use]
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_owned(),
            color: color.to_owned(),
        }
    }
}

/// Construction-time configuration of a session.
///
/// `grid` is fixed for the board's lifetime; `players` is the ordered turn
/// sequence; `palette` drives both classification and point values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid: usize,
    pub players: Vec<PlayerSpec>,
    pub palette: Palette,
}

impl Default for GameConfig {
    /// The reference configuration: 7×7, two players, calibrated palette.
    fn default() -> Self {
        Self {
            grid: 7,
            players: vec![
                PlayerSpec::new("Player 1", "#1e88e5"),
                PlayerSpec::new("Player 2", "#e53935"),
            ],
            palette: Palette::reference(),
        }
    }
}
