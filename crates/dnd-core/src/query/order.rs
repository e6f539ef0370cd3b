//! Ordering primitives

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::entities::Character;
use crate::error::DomainError;

/// Requested ordering as received from a caller: an unchecked key and a direction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Order {
    pub key: String,
    pub ascending: bool,
}

impl Order {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ascending: true,
        }
    }

    pub fn descending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ascending: false,
        }
    }

    /// The recognised key, if any
    pub fn order_key(&self) -> Option<OrderKey> {
        OrderKey::parse(&self.key)
    }

    pub fn direction(&self) -> SortDirection {
        SortDirection::from_ascending(self.ascending)
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::ascending(OrderKey::Id.as_str())
    }
}

/// Sortable character attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderKey {
    #[default]
    Id,
    Name,
    Specie,
    MainClass,
}

impl OrderKey {
    pub const ALL: [OrderKey; 4] = [Self::Id, Self::Name, Self::Specie, Self::MainClass];

    /// Canonical property name
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Id => "Id",
            Self::Name => "Name",
            Self::Specie => "Specie",
            Self::MainClass => "MainClass",
        }
    }

    /// Case-insensitive lookup against the allow list
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(key))
    }

    /// Lenient lookup used when building orderings: also accepts `Species`
    pub fn resolve(key: &str) -> Option<Self> {
        if key.eq_ignore_ascii_case("Species") {
            return Some(Self::Specie);
        }
        Self::parse(key)
    }
}

impl fmt::Display for OrderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::ValidationError(format!("unknown order key '{s}'")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    pub fn is_ascending(self) -> bool {
        self == Self::Ascending
    }

    /// Orient an ascending comparison
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// A resolved sort: one recognised key, one direction, id as tiebreaker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharacterOrdering {
    pub key: OrderKey,
    pub direction: SortDirection,
}

impl CharacterOrdering {
    pub fn new(key: OrderKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Compare two characters; equal keys fall back to the id in the same direction
    pub fn compare(&self, a: &Character, b: &Character) -> Ordering {
        let primary = match self.key {
            OrderKey::Id => Ordering::Equal,
            OrderKey::Name => a.name.cmp(&b.name),
            OrderKey::Specie => a.species.name.cmp(&b.species.name),
            OrderKey::MainClass => a.main_class.name.cmp(&b.main_class.name),
        };
        self.direction.apply(primary.then_with(|| a.id.cmp(&b.id)))
    }

    /// Sort a slice in place
    pub fn sort(&self, characters: &mut [Character]) {
        characters.sort_by(|a, b| self.compare(a, b));
    }
}
