//! PostgreSQL implementation of ClassRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use dnd_core::entities::ClassDefinition;
use dnd_core::traits::{ClassRepository, RepoResult};

use crate::models::ClassModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ClassRepository
#[derive(Clone)]
pub struct PgClassRepository {
    pool: PgPool,
}

impl PgClassRepository {
    /// Create a new PgClassRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClassRepository for PgClassRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<ClassDefinition>> {
        let result = sqlx::query_as::<_, ClassModel>(
            "SELECT id, name FROM classes WHERE UPPER(name) = UPPER($1)",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(ClassDefinition::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<ClassDefinition>> {
        let results = sqlx::query_as::<_, ClassModel>("SELECT id, name FROM classes ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(ClassDefinition::from).collect())
    }
}
