//! Static fallback roster used when the live search is unavailable.

use crate::data_fetcher::models::PlayerIdentity;
use once_cell::sync::Lazy;

/// (id, name, team, position)
const ROSTER_ENTRIES: &[(&str, &str, &str, &str)] = &[
    ("jamesle01", "LeBron James", "Los Angeles Lakers", "SF"),
    ("curryst01", "Stephen Curry", "Golden State Warriors", "PG"),
    ("duranke01", "Kevin Durant", "Phoenix Suns", "SF"),
    ("antetgi01", "Giannis Antetokounmpo", "Milwaukee Bucks", "PF"),
    ("doncilu01", "Luka Dončić", "Dallas Mavericks", "PG"),
    ("jokicni01", "Nikola Jokić", "Denver Nuggets", "C"),
    ("embiijo01", "Joel Embiid", "Philadelphia 76ers", "C"),
    ("lillada01", "Damian Lillard", "Milwaukee Bucks", "PG"),
    ("tatumja01", "Jayson Tatum", "Boston Celtics", "SF"),
    ("moranja01", "Ja Morant", "Memphis Grizzlies", "PG"),
    ("youngtr01", "Trae Young", "Atlanta Hawks", "PG"),
    ("edwaran01", "Anthony Edwards", "Minnesota Timberwolves", "SG"),
    ("foxde01", "De'Aaron Fox", "Sacramento Kings", "PG"),
    ("georgpa01", "Paul George", "Philadelphia 76ers", "SF"),
    ("bookede01", "Devin Booker", "Phoenix Suns", "SG"),
];

static DEFAULT_ROSTER: Lazy<Roster> = Lazy::new(|| {
    Roster::new(
        ROSTER_ENTRIES
            .iter()
            .map(|(id, name, team, position)| PlayerIdentity::new(*id, *name, *team, *position))
            .collect(),
    )
});

/// Fixed list of well known players searched by name.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    players: Vec<PlayerIdentity>,
}

impl Roster {
    pub fn new(players: Vec<PlayerIdentity>) -> Self {
        Self { players }
    }

    /// The built-in roster shared by the CLI and the HTTP API.
    pub fn builtin() -> &'static Roster {
        &DEFAULT_ROSTER
    }

    /// Players whose name contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<PlayerIdentity> {
        self.players
            .iter()
            .filter(|player| player.name_matches(query))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
