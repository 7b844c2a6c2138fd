use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::gamelog::{PlayerId, TeamId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: PlayerId,
    pub full_name: String,
    pub team_id: TeamId,
    pub on_roster: bool,
}

/// Maps provider player names onto game log player ids.
pub trait PlayerDirectory: Send + Sync {
    /// Every id matching the name; more than one means the name is ambiguous
    fn resolve_player_ids(&self, name: &str) -> Vec<PlayerId>;

    fn team_of(&self, player_id: PlayerId) -> Option<TeamId>;
}

/// In-memory implementation of PlayerDirectory for development and testing
#[derive(Debug, Default)]
pub struct InMemoryPlayerDirectory {
    players: Vec<PlayerProfile>,
}

impl InMemoryPlayerDirectory {
    pub fn new(players: Vec<PlayerProfile>) -> Self {
        Self { players }
    }

    fn rostered(&self) -> impl Iterator<Item = &PlayerProfile> {
        self.players.iter().filter(|player| player.on_roster)
    }
}

impl PlayerDirectory for InMemoryPlayerDirectory {
    fn resolve_player_ids(&self, name: &str) -> Vec<PlayerId> {
        let exact: Vec<PlayerId> = self
            .rostered()
            .filter(|player| player.full_name == name)
            .map(|player| player.id)
            .collect();

        if !exact.is_empty() {
            return exact;
        }

        // Closest rostered name by edit distance
        let closest = self
            .rostered()
            .min_by_key(|player| strsim::levenshtein(name, &player.full_name));

        match closest {
            Some(player) => {
                debug!(
                    requested = name,
                    matched = %player.full_name,
                    "Resolved player by closest name"
                );
                vec![player.id]
            }
            None => Vec::new(),
        }
    }

    fn team_of(&self, player_id: PlayerId) -> Option<TeamId> {
        self.players
            .iter()
            .find(|player| player.id == player_id)
            .map(|player| player.team_id)
    }
}
