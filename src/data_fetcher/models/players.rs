use serde::{Deserialize, Serialize};

/// A player as returned by search: site identifier plus display details.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct PlayerIdentity {
    pub id: String,
    #[serde(rename = "name")]
    pub full_name: String,
    pub team: String,
    pub position: String,
}

impl PlayerIdentity {
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        team: impl Into<String>,
        position: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            team: team.into(),
            position: position.into(),
        }
    }

    /// Case-insensitive substring match on the full name.
    pub fn name_matches(&self, query: &str) -> bool {
        self.full_name
            .to_lowercase()
            .contains(&query.trim().to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_serialization_uses_name_key() {
        let player = PlayerIdentity::new("youngtr01", "Trae Young", "Atlanta Hawks", "PG");

        let json = serde_json::to_string(&player).unwrap();
        assert!(json.contains("\"id\":\"youngtr01\""));
        assert!(json.contains("\"name\":\"Trae Young\""));
        assert!(!json.contains("full_name"));

        let deserialized: PlayerIdentity = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, player);
    }

    #[test]
    fn test_name_matches() {
        let player = PlayerIdentity::new("doncilu01", "Luka Dončić", "Dallas Mavericks", "PG");
        assert!(player.name_matches("luka"));
        assert!(player.name_matches("DONČ"));
        assert!(!player.name_matches("lebron"));
    }
}
