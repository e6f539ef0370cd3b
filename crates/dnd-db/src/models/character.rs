//! Character database models

use sqlx::FromRow;
use uuid::Uuid;

/// Row of `characters` joined with its species
#[derive(Debug, Clone, FromRow)]
pub struct CharacterModel {
    pub id: Uuid,
    pub name: String,
    pub player_name: String,
    pub strength: i16,
    pub dexterity: i16,
    pub constitution: i16,
    pub intelligence: i16,
    pub wisdom: i16,
    pub charisma: i16,
    pub species_name: String,
    pub species_speed: i32,
    pub species_size: String,
}

/// Row of `character_classes` joined with the class name
#[derive(Debug, Clone, FromRow)]
pub struct CharacterClassModel {
    pub character_id: Uuid,
    pub class_name: String,
    pub level: i16,
    pub position: i16,
    pub is_main_class: bool,
}
