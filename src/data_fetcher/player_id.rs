//! Site player identifiers.
//!
//! The site keys players by an identifier built from the name:
//! the first five letters of the last name, the first two letters of the
//! first name and a two digit counter, e.g. `jamesle01`. Pages live under a
//! directory named after the first letter of the last name (`j/jamesle01`).
//!
//! Deriving the identifier is a heuristic. Players sharing a prefix get
//! counters other than `01`, and those cannot be derived from a name; callers
//! that know the real identifier pass it through [`PlayerLookup::Id`].

use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^)]*\)").expect("parenthetical pattern is valid"));

const LAST_NAME_CHARS: usize = 5;
const FIRST_NAME_CHARS: usize = 2;
const DERIVED_SUFFIX: &str = "01";

/// A canonical site identifier such as `jamesle01`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerId(String);

impl PlayerId {
    /// Derives the identifier from a full name.
    ///
    /// # Examples
    /// ```
    /// use prop_scout::data_fetcher::player_id::PlayerId;
    ///
    /// let id = PlayerId::from_name("Trae Young").unwrap();
    /// assert_eq!(id.as_str(), "youngtr01");
    /// assert_eq!(id.path(), "y/youngtr01");
    ///
    /// // Middle names are ignored and years in parentheses are stripped
    /// let id = PlayerId::from_name("Karl-Anthony Towns (2016-2025)").unwrap();
    /// assert_eq!(id.as_str(), "townska01");
    /// ```
    ///
    /// # Errors
    /// `AppError::InvalidName` when fewer than two name tokens remain.
    pub fn from_name(full_name: &str) -> Result<Self, AppError> {
        let cleaned = strip_parenthetical(full_name);
        let tokens: Vec<&str> = cleaned.split_whitespace().collect();

        let (first, last) = match tokens.as_slice() {
            [first, .., last] => (first, last),
            _ => return Err(AppError::invalid_name(full_name.trim())),
        };

        let last: String = last.to_lowercase().chars().take(LAST_NAME_CHARS).collect();
        let first: String = first.to_lowercase().chars().take(FIRST_NAME_CHARS).collect();

        Ok(PlayerId(format!("{last}{first}{DERIVED_SUFFIX}")))
    }

    /// Accepts an identifier supplied by the caller, with or without the
    /// leading directory segment (`jamesle01` or `j/jamesle01`).
    ///
    /// # Errors
    /// `AppError::InvalidPlayerId` for empty identifiers or identifiers
    /// containing anything but letters and digits.
    pub fn from_raw(raw: &str) -> Result<Self, AppError> {
        let trimmed = raw.trim().trim_matches('/');
        let slug = trimmed
            .rsplit('/')
            .next()
            .unwrap_or(trimmed)
            .trim_end_matches(".html")
            .to_lowercase();

        if slug.is_empty() || !slug.chars().all(char::is_alphanumeric) {
            return Err(AppError::invalid_player_id(raw.trim()));
        }

        Ok(PlayerId(slug))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Directory letter plus identifier, e.g. `j/jamesle01`.
    pub fn path(&self) -> String {
        let letter: String = self.0.chars().take(1).collect();
        format!("{letter}/{}", self.0)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the caller identifies the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerLookup {
    /// Derive the identifier from a full name
    Name(String),
    /// Use a known identifier as-is
    Id(String),
}

impl PlayerLookup {
    /// Prefers a non-empty explicit identifier over the name.
    pub fn from_parts(name: &str, id: Option<&str>) -> Self {
        match id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => PlayerLookup::Id(id.to_string()),
            None => PlayerLookup::Name(name.to_string()),
        }
    }

    pub fn resolve(&self) -> Result<PlayerId, AppError> {
        match self {
            PlayerLookup::Name(name) => PlayerId::from_name(name),
            PlayerLookup::Id(id) => PlayerId::from_raw(id),
        }
    }
}

/// Removes parenthetical suffixes such as `(2019-2025)` and surrounding whitespace.
pub fn strip_parenthetical(name: &str) -> String {
    PARENTHETICAL.replace_all(name, "").trim().to_string()
}
