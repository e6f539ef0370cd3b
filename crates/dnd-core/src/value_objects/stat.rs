//! Ability scores

use std::fmt;

use crate::error::DomainError;

/// The six ability scores of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatType {
    Strength,
    Dexterity,
    Constitution,
    Intelligence,
    Wisdom,
    Charisma,
}

impl StatType {
    pub const ALL: [StatType; 6] = [
        Self::Strength,
        Self::Dexterity,
        Self::Constitution,
        Self::Intelligence,
        Self::Wisdom,
        Self::Charisma,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Dexterity => "dexterity",
            Self::Constitution => "constitution",
            Self::Intelligence => "intelligence",
            Self::Wisdom => "wisdom",
            Self::Charisma => "charisma",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single ability score, at most 18
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Stat(u8);

impl Stat {
    pub const MAX: u8 = 18;
    pub const DEFAULT: u8 = 8;

    pub fn new(value: i32) -> Result<Self, DomainError> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX => Ok(Self(v)),
            _ => Err(DomainError::InvalidStat(value)),
        }
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Roll modifier: `floor(value / 2) - 5`
    pub fn modifier(self) -> i8 {
        (self.0 / 2) as i8 - 5
    }
}

impl Default for Stat {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

/// Full set of ability scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats([Stat; 6]);

impl Stats {
    /// Point-buy budget: 27 points on top of the default 8 in every stat
    pub const ASSIGNABLE_POINTS: u32 = 27 + Stat::DEFAULT as u32 * 6;

    pub fn get(&self, stat: StatType) -> Stat {
        self.0[stat.index()]
    }

    pub fn set(&mut self, stat: StatType, value: Stat) {
        self.0[stat.index()] = value;
    }

    /// Builder-style variant of [`Stats::set`]
    pub fn with(mut self, stat: StatType, value: Stat) -> Self {
        self.set(stat, value);
        self
    }

    /// Sum of all six scores
    pub fn total(&self) -> u32 {
        self.0.iter().map(|s| u32::from(s.value())).sum()
    }

    pub fn is_within_budget(&self) -> bool {
        self.total() <= Self::ASSIGNABLE_POINTS
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatType, Stat)> + '_ {
        StatType::ALL.iter().map(move |&t| (t, self.get(t)))
    }
}
