//! Species database model

use sqlx::FromRow;

/// Database model for species table
#[derive(Debug, Clone, FromRow)]
pub struct SpeciesModel {
    pub id: i32,
    pub name: String,
    pub speed: i32,
    pub size: String,
}
