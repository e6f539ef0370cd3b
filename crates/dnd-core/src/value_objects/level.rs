//! Class level with experience tracking

use crate::error::DomainError;

/// Level of a character in one class, in the inclusive range 1..=20
///
/// Experience accumulates towards the next level. Reaching the requirement
/// (`level * 100`) advances exactly one level and carries the remainder over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level {
    value: u8,
    experience: u32,
}

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    /// Experience needed per level to advance
    const EXPERIENCE_PER_LEVEL: u32 = 100;

    /// Create a level with no accumulated experience
    pub fn new(value: i32) -> Result<Self, DomainError> {
        Self::with_experience(value, 0)
    }

    /// Create a level carrying some experience towards the next one
    pub fn with_experience(value: i32, experience: u32) -> Result<Self, DomainError> {
        match u8::try_from(value) {
            Ok(v) if Self::is_in_range(v) => Ok(Self {
                value: v,
                experience: if v == Self::MAX { 0 } else { experience },
            }),
            _ => Err(DomainError::InvalidLevel(value)),
        }
    }

    /// The lowest level
    pub const fn min() -> Self {
        Self {
            value: Self::MIN,
            experience: 0,
        }
    }

    /// The highest level
    pub const fn max() -> Self {
        Self {
            value: Self::MAX,
            experience: 0,
        }
    }

    /// Check whether an integer is an acceptable level
    pub fn is_valid(value: i32) -> bool {
        u8::try_from(value).is_ok_and(Self::is_in_range)
    }

    fn is_in_range(value: u8) -> bool {
        (Self::MIN..=Self::MAX).contains(&value)
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.value
    }

    #[inline]
    pub const fn experience(&self) -> u32 {
        self.experience
    }

    #[inline]
    pub const fn is_max(&self) -> bool {
        self.value == Self::MAX
    }

    /// Experience needed to reach the next level
    pub fn required_experience(&self) -> u32 {
        u32::from(self.value) * Self::EXPERIENCE_PER_LEVEL
    }

    /// Gain experience, advancing at most one level
    ///
    /// Gaining experience at the maximum level changes nothing.
    pub fn add_experience(self, amount: u32) -> Self {
        if self.is_max() {
            return self;
        }

        let current = self.experience.saturating_add(amount);
        let required = self.required_experience();
        if current < required {
            return Self {
                value: self.value,
                experience: current,
            };
        }

        let value = self.value + 1;
        Self {
            value,
            experience: if value == Self::MAX { 0 } else { current - required },
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::min()
    }
}

impl TryFrom<i32> for Level {
    type Error = DomainError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        i32::from(level.value)
    }
}
