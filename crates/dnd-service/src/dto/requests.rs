//! Request DTOs for the character workflows
//!
//! Each request implements `validator::Validate`, reporting every broken rule
//! with its own machine-readable code.

use std::borrow::Cow;
use std::collections::HashSet;

use dnd_core::query::{CharacterFilter, Order, OrderKey, Page};
use dnd_core::value_objects::Level;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn into_result(errors: ValidationErrors) -> Result<(), ValidationErrors> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

// ============================================================================
// Create Character
// ============================================================================

/// One requested class membership
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassRequest {
    pub name: String,
    pub level: i32,
}

impl ClassRequest {
    pub fn new(name: impl Into<String>, level: i32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }
}

/// Create character request
///
/// The first class becomes the main class.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateCharacterRequest {
    pub name: String,
    pub player_name: String,
    pub specie_name: String,
    pub classes: Vec<ClassRequest>,
}

impl Validate for CreateCharacterRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if is_blank(&self.name) {
            errors.add(
                "name",
                rule("CreateCharacterError.EmptyName", "Name can't be empty"),
            );
        }
        if is_blank(&self.player_name) {
            errors.add(
                "playerName",
                rule(
                    "CreateCharacterError.EmptyPlayerName",
                    "Player name can't be empty",
                ),
            );
        }
        if is_blank(&self.specie_name) {
            errors.add(
                "specieName",
                rule(
                    "CreateCharacterError.EmptySpecieName",
                    "Specie name can't be empty",
                ),
            );
        }

        if self.classes.is_empty() {
            errors.add(
                "classes",
                rule(
                    "CreateCharacterError.EmptyClasses",
                    "At least one class is required",
                ),
            );
        } else {
            if self
                .classes
                .iter()
                .any(|c| is_blank(&c.name) || !Level::is_valid(c.level))
            {
                errors.add(
                    "classes",
                    rule(
                        "CreateCharacterError.InvalidClasses",
                        "All classes must have a non empty name and a level between 1 and 20",
                    ),
                );
            }

            let unique: HashSet<String> = self
                .classes
                .iter()
                .map(|c| c.name.trim().to_uppercase())
                .collect();
            if unique.len() != self.classes.len() {
                errors.add(
                    "classes",
                    rule(
                        "CreateCharacterError.NonUniqueClasses",
                        "Class names must be unique",
                    ),
                );
            }
        }

        into_result(errors)
    }
}

// ============================================================================
// Get Characters
// ============================================================================

/// List characters request
///
/// `None` page means every row, `None` order means ascending by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCharactersRequest {
    pub page: Option<Page>,
    pub order: Option<Order>,
    pub filter: CharacterFilter,
}

impl GetCharactersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    pub fn with_filter(mut self, filter: CharacterFilter) -> Self {
        self.filter = filter;
        self
    }
}

impl Validate for GetCharactersRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(order) = &self.order {
            if OrderKey::parse(&order.key).is_none() {
                errors.add(
                    "order",
                    rule(
                        "GetCharactersError.InvalidOrderKey",
                        "Key to order by isn't valid",
                    ),
                );
            }
        }

        if let Some(page) = &self.page {
            if !page.is_valid() {
                errors.add(
                    "page",
                    rule(
                        "GetCharactersError.InvalidPage",
                        "Pagination index must be greater than 1 and size must be greater than 0",
                    ),
                );
            }
        }

        if self.filter.classes.iter().any(|c| is_blank(c)) {
            errors.add(
                "classes",
                rule("GetCharactersError.BlankClass", "All classes must have a value"),
            );
        }
        if self.filter.species.iter().any(|s| is_blank(s)) {
            errors.add(
                "species",
                rule(
                    "GetCharactersError.BlankSpecies",
                    "All species must have a value",
                ),
            );
        }

        into_result(errors)
    }
}
