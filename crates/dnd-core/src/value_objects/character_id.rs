//! Character ID - time-ordered 128-bit identifier
//!
//! Wraps a UUID version 7: the leading 48 bits hold the Unix timestamp in
//! milliseconds, so ids generated later sort after ids generated earlier.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity of a character aggregate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(Uuid);

impl CharacterId {
    /// UUID version used for newly generated ids
    pub const VERSION: usize = 7;

    /// Generate a fresh time-ordered id
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Wrap an existing UUID (e.g. one loaded from storage)
    #[inline]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the inner UUID
    #[inline]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }

    /// Whether the id follows the time-ordered scheme
    pub fn is_time_ordered(&self) -> bool {
        self.0.get_version_num() == Self::VERSION
    }

    /// Creation time embedded in the id, if it carries one
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let (secs, nanos) = self.0.get_timestamp()?.to_unix();
        Utc.timestamp_opt(i64::try_from(secs).ok()?, nanos).single()
    }

    /// Parse from the hyphenated or simple string form
    pub fn parse(s: &str) -> Result<Self, CharacterIdParseError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| CharacterIdParseError::InvalidFormat)
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

/// Error when parsing a CharacterId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CharacterIdParseError {
    #[error("invalid character id format")]
    InvalidFormat,
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0.hyphenated(), f)
    }
}

impl FromStr for CharacterId {
    type Err = CharacterIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for CharacterId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl From<CharacterId> for Uuid {
    fn from(id: CharacterId) -> Self {
        id.0
    }
}
