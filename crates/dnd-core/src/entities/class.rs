//! Class entities - catalog entries and character memberships

use crate::value_objects::Level;

/// A class known to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDefinition {
    pub name: String,
}

impl ClassDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Case-insensitive name comparison, using the same folding as memberships
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_uppercase() == name.to_uppercase()
    }
}

/// A character's membership in a class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DndClass {
    pub name: String,
    pub level: Level,
}

impl DndClass {
    pub fn new(name: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Membership at level 1
    pub fn starting(name: impl Into<String>) -> Self {
        Self::new(name, Level::min())
    }

    /// Upper-cased name used for case-insensitive comparisons
    pub fn normalized_name(&self) -> String {
        self.name.to_uppercase()
    }
}
