//! PostgreSQL implementation of SpeciesRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use dnd_core::entities::Species;
use dnd_core::traits::{RepoResult, SpeciesRepository};

use crate::models::SpeciesModel;

use super::error::map_db_error;

/// PostgreSQL implementation of SpeciesRepository
#[derive(Clone)]
pub struct PgSpeciesRepository {
    pool: PgPool,
}

impl PgSpeciesRepository {
    /// Create a new PgSpeciesRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpeciesRepository for PgSpeciesRepository {
    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Species>> {
        let result = sqlx::query_as::<_, SpeciesModel>(
            r"
            SELECT id, name, speed, size
            FROM species
            WHERE UPPER(name) = UPPER($1)
            ",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Species::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Species>> {
        let results = sqlx::query_as::<_, SpeciesModel>(
            r"
            SELECT id, name, speed, size
            FROM species
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Species::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgSpeciesRepository>();
    }
}
