//! Species entity - reference data describing a character's kind

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Body size category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Size {
    Tiny,
    Small,
    #[default]
    Medium,
    Large,
    Huge,
    Gargantuan,
}

impl Size {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tiny => "tiny",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Huge => "huge",
            Self::Gargantuan => "gargantuan",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tiny" => Ok(Self::Tiny),
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            "huge" => Ok(Self::Huge),
            "gargantuan" => Ok(Self::Gargantuan),
            other => Err(DomainError::ValidationError(format!("unknown size '{other}'"))),
        }
    }
}

/// Species entity, looked up by name and never created by the workflows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Species {
    pub name: String,
    /// Walking speed in feet per round
    pub speed: u32,
    pub size: Size,
}

impl Species {
    pub fn new(name: impl Into<String>, speed: u32, size: Size) -> Self {
        Self {
            name: name.into(),
            speed,
            size,
        }
    }

    /// Case-insensitive name comparison
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_uppercase() == name.to_uppercase()
    }
}
