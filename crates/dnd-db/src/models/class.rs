//! Class database model

use sqlx::FromRow;

/// Database model for classes table
#[derive(Debug, Clone, FromRow)]
pub struct ClassModel {
    pub id: i32,
    pub name: String,
}
