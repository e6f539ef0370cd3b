//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use dnd_core::entities::{Character, ClassDefinition, DndClass, Species};
use dnd_core::query::{Page, PaginatedResult};
use dnd_core::value_objects::CharacterId;

// ============================================================================
// Common Response Types
// ============================================================================

/// One page of results with its pagination metadata
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, page: Page, total_amount: u64) -> Self {
        Self {
            pagination: PageMeta::new(page, total_amount),
            data,
        }
    }

    /// Convert a repository page, mapping every value
    pub fn from_result<U>(result: PaginatedResult<U>, page: Page) -> Self
    where
        T: From<U>,
    {
        let total = result.total_amount;
        Self::new(result.values.into_iter().map(T::from).collect(), page, total)
    }
}

/// Pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Rows matching the filter, ignoring pagination
    pub total_amount: u64,
    /// Absent when every row was returned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i32>,
    /// Whether rows exist past this page
    pub has_more: bool,
}

impl PageMeta {
    pub fn new(page: Page, total_amount: u64) -> Self {
        if page.is_infinite() {
            return Self {
                total_amount,
                page_index: None,
                page_size: None,
                has_more: false,
            };
        }
        Self {
            total_amount,
            page_index: Some(page.index),
            page_size: Some(page.size),
            has_more: u64::try_from(page.ending_index()).is_ok_and(|end| end < total_amount),
        }
    }
}

// ============================================================================
// Character Responses
// ============================================================================

/// Id of a newly created character
#[derive(Debug, Clone, Serialize)]
pub struct CreatedCharacterResponse {
    pub id: CharacterId,
}

/// Class membership with its level
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassLevelResponse {
    pub name: String,
    pub level: u8,
}

impl From<&DndClass> for ClassLevelResponse {
    fn from(class: &DndClass) -> Self {
        Self {
            name: class.name.clone(),
            level: class.level.value(),
        }
    }
}

/// Ability score with its modifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatResponse {
    pub name: &'static str,
    pub value: u8,
    pub modifier: i8,
}

/// Character as returned by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterResponse {
    pub id: CharacterId,
    pub name: String,
    pub player_name: String,
    pub species: String,
    pub main_class: ClassLevelResponse,
    pub classes: Vec<ClassLevelResponse>,
    pub stats: Vec<StatResponse>,
}

impl From<&Character> for CharacterResponse {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            player_name: character.player_name.clone(),
            species: character.species.name.clone(),
            main_class: ClassLevelResponse::from(&character.main_class),
            classes: character.classes.iter().map(ClassLevelResponse::from).collect(),
            stats: character
                .stats
                .iter()
                .map(|(stat_type, stat)| StatResponse {
                    name: stat_type.as_str(),
                    value: stat.value(),
                    modifier: stat.modifier(),
                })
                .collect(),
        }
    }
}

impl From<Character> for CharacterResponse {
    fn from(character: Character) -> Self {
        Self::from(&character)
    }
}

// ============================================================================
// Reference Data Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesResponse {
    pub name: String,
    pub speed: u32,
    pub size: &'static str,
}

impl From<Species> for SpeciesResponse {
    fn from(species: Species) -> Self {
        Self {
            size: species.size.as_str(),
            speed: species.speed,
            name: species.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassResponse {
    pub name: String,
}

impl From<ClassDefinition> for ClassResponse {
    fn from(class: ClassDefinition) -> Self {
        Self { name: class.name }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub storage: String,
}

impl ReadinessResponse {
    pub fn ready(storage_healthy: bool) -> Self {
        Self {
            status: if storage_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                storage: if storage_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
