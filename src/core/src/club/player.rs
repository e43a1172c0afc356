use crate::shared::FullName;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result};
use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlayerPositionType {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerPositionType {
    pub fn short_name(&self) -> &'static str {
        match self {
            PlayerPositionType::Goalkeeper => "GK",
            PlayerPositionType::Defender => "DF",
            PlayerPositionType::Midfielder => "MF",
            PlayerPositionType::Forward => "FW",
        }
    }

    #[inline]
    pub fn is_goalkeeper(&self) -> bool {
        *self == PlayerPositionType::Goalkeeper
    }
}

/// Cumulative season statistics. Counters only grow during a season and
/// are reset only when the player is generated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PlayerStatistics {
    pub goals: u16,
    pub assists: u16,
    pub played: u16,
}

#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub id: u32,
    pub full_name: FullName,
    pub position: PlayerPositionType,
    pub statistics: PlayerStatistics,
}

impl Player {
    pub fn new(id: u32, full_name: FullName, position: PlayerPositionType) -> Self {
        Player {
            id,
            full_name,
            position,
            statistics: PlayerStatistics::default(),
        }
    }

    #[inline]
    pub fn position(&self) -> PlayerPositionType {
        self.position
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}, {}", self.full_name, self.position.short_name())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerCollection {
    pub players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerCollection { players }
    }

    pub fn by_position(&self, position: PlayerPositionType) -> Vec<&Player> {
        self.players
            .iter()
            .filter(|p| p.position == position)
            .collect()
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl Index<u32> for PlayerCollection {
    type Output = Player;

    fn index(&self, player_id: u32) -> &Self::Output {
        self.players
            .iter()
            .find(|p| p.id == player_id)
            .unwrap_or_else(|| panic!("no player with id = {}", player_id))
    }
}
