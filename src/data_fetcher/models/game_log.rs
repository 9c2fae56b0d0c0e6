use crate::constants::game_log::{DID_NOT_DRESS, DID_NOT_PLAY, INACTIVE};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

/// Why a scheduled game has no statistics for the player.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DidNotPlayReason {
    DidNotPlay,
    Inactive,
    DidNotDress,
    /// Reason cell text that is not one of the known markers
    Other(String),
}

impl DidNotPlayReason {
    /// Matches the reason cell text exactly against the known markers.
    pub fn from_marker(text: &str) -> Option<Self> {
        match text {
            DID_NOT_PLAY => Some(Self::DidNotPlay),
            INACTIVE => Some(Self::Inactive),
            DID_NOT_DRESS => Some(Self::DidNotDress),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::DidNotPlay => DID_NOT_PLAY,
            Self::Inactive => INACTIVE,
            Self::DidNotDress => DID_NOT_DRESS,
            Self::Other(text) => text,
        }
    }
}

impl fmt::Display for DidNotPlayReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core stat line of a game. Either all three stats are known, the game
/// carries a did-not-play reason, or the row could not be read completely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameLine {
    Played {
        points: u32,
        assists: u32,
        rebounds: u32,
    },
    DidNotPlay {
        reason: DidNotPlayReason,
    },
    /// Row without a reason whose core stats could not all be read
    Incomplete,
}

impl GameLine {
    /// Builds a played line when all three stats are present. Otherwise a
    /// non-empty reason text makes it a did-not-play line and anything else
    /// is incomplete.
    pub fn from_stats(
        points: Option<u32>,
        assists: Option<u32>,
        rebounds: Option<u32>,
        reason_text: Option<&str>,
    ) -> Self {
        match (points, assists, rebounds) {
            (Some(points), Some(assists), Some(rebounds)) => GameLine::Played {
                points,
                assists,
                rebounds,
            },
            _ => match reason_text.filter(|text| !text.is_empty()) {
                Some(text) => GameLine::DidNotPlay {
                    reason: DidNotPlayReason::Other(text.to_string()),
                },
                None => GameLine::Incomplete,
            },
        }
    }
}

/// Where the game was played, from the player's team's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Venue {
    Home,
    Away,
    Neutral,
}

impl Venue {
    /// Interprets the raw location cell: `@` is away, empty is home, `N` is neutral.
    pub fn from_cell(text: &str) -> Option<Self> {
        match text.trim() {
            "" => Some(Venue::Home),
            "@" => Some(Venue::Away),
            "N" => Some(Venue::Neutral),
            _ => None,
        }
    }

    /// Parses a caller-facing single letter code (`H`, `A`, `N`), case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_uppercase().as_str() {
            "H" => Some(Venue::Home),
            "A" => Some(Venue::Away),
            "N" => Some(Venue::Neutral),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Venue::Home => "H",
            Venue::Away => "A",
            Venue::Neutral => "N",
        }
    }
}

/// One played or missed game from a season game log.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub date: NaiveDate,
    /// Season label such as `2024-2025`
    pub season: String,
    /// Three letter team code
    pub opponent: Option<String>,
    /// Raw location cell text
    pub location: Option<String>,
    pub line: GameLine,
    /// Minutes played as shown on the page (`MM:SS`)
    pub minutes_played: Option<String>,
    /// Every `data-stat` cell of the row, verbatim
    pub raw_cells: BTreeMap<String, String>,
}

impl GameRecord {
    pub fn points(&self) -> Option<u32> {
        match self.line {
            GameLine::Played { points, .. } => Some(points),
            _ => None,
        }
    }

    pub fn assists(&self) -> Option<u32> {
        match self.line {
            GameLine::Played { assists, .. } => Some(assists),
            _ => None,
        }
    }

    pub fn rebounds(&self) -> Option<u32> {
        match self.line {
            GameLine::Played { rebounds, .. } => Some(rebounds),
            _ => None,
        }
    }

    pub fn did_not_play_reason(&self) -> Option<&DidNotPlayReason> {
        match &self.line {
            GameLine::DidNotPlay { reason } => Some(reason),
            _ => None,
        }
    }

    /// True when all three core stats are present.
    pub fn is_complete(&self) -> bool {
        matches!(self.line, GameLine::Played { .. })
    }

    pub fn venue(&self) -> Option<Venue> {
        self.location.as_deref().and_then(Venue::from_cell)
    }

    /// `W` or `L` from the result cell (e.g. `W (+12)`), if present.
    pub fn result(&self) -> Option<&'static str> {
        let text = self.raw_cells.get(crate::constants::columns::RESULT)?;
        match text.trim_start().chars().next() {
            Some('W') => Some("W"),
            Some('L') => Some("L"),
            _ => None,
        }
    }
}
