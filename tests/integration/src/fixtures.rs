//! Test fixtures and data generators
//!
//! Request builders and the response shapes the tests read back.

use serde::{Deserialize, Serialize};

/// Unique suffix so runs against a shared database never collide
pub fn unique_suffix() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..12].to_string()
}

/// Class entry of a create request
#[derive(Debug, Clone, Serialize)]
pub struct ClassEntry {
    pub name: String,
    pub level: i32,
}

/// Create character request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCharacter {
    pub name: String,
    pub player_name: String,
    pub specie_name: String,
    pub classes: Vec<ClassEntry>,
}

impl NewCharacter {
    pub fn new(name: impl Into<String>, specie: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            player_name: "Integration".to_string(),
            specie_name: specie.into(),
            classes: Vec::new(),
        }
    }

    /// A character with a unique name, one Bard level
    pub fn unique() -> Self {
        Self::new(format!("Hero {}", unique_suffix()), "Human").with_class("Bard", 1)
    }

    pub fn with_class(mut self, name: impl Into<String>, level: i32) -> Self {
        self.classes.push(ClassEntry {
            name: name.into(),
            level,
        });
        self
    }
}

/// Create response
#[derive(Debug, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Class with level
#[derive(Debug, Deserialize)]
pub struct ClassLevel {
    pub name: String,
    pub level: u8,
}

/// Character response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterBody {
    pub id: String,
    pub name: String,
    pub player_name: String,
    pub species: String,
    pub main_class: ClassLevel,
    pub classes: Vec<ClassLevel>,
}

/// Listing pagination metadata
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetaBody {
    pub total_amount: u64,
    pub page_index: Option<i32>,
    pub page_size: Option<i32>,
    pub has_more: bool,
}

/// Listing response
#[derive(Debug, Deserialize)]
pub struct CharacterPage {
    pub data: Vec<CharacterBody>,
    pub pagination: PageMetaBody,
}

/// Catalog entry
#[derive(Debug, Deserialize)]
pub struct NamedEntry {
    pub name: String,
}
