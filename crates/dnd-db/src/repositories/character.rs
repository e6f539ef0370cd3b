//! PostgreSQL implementation of CharacterRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::{debug, instrument};
use uuid::Uuid;

use dnd_core::entities::Character;
use dnd_core::query::{
    CharacterFilter, CharacterFilterBuilder, CharacterOrderBuilder, FilterBuilder, Order,
    OrderBuilder, Page, PaginatedResult,
};
use dnd_core::traits::{CharacterRepository, RepoResult, UnitOfWork};
use dnd_core::value_objects::CharacterId;

use crate::mappers::character_with_classes;
use crate::models::{CharacterClassModel, CharacterModel};

use super::error::{invalid_page, map_db_error};
use super::query::{push_order_by, push_page, push_where, CHARACTER_COLUMNS, CHARACTER_FROM};
use super::unit_of_work::PgUnitOfWork;

/// PostgreSQL implementation of CharacterRepository
#[derive(Clone)]
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    /// Create a new PgCharacterRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load memberships for the given characters and assemble the entities in input order
    async fn hydrate(&self, models: Vec<CharacterModel>) -> RepoResult<Vec<Character>> {
        if models.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = models.iter().map(|m| m.id).collect();
        let rows = sqlx::query_as::<_, CharacterClassModel>(
            r"
            SELECT cc.character_id, cl.name AS class_name, cc.level, cc.position, cc.is_main_class
            FROM character_classes cc
            JOIN classes cl ON cl.id = cc.class_id
            WHERE cc.character_id = ANY($1)
            ORDER BY cc.character_id, cc.position
            ",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut by_character: HashMap<Uuid, Vec<CharacterClassModel>> = HashMap::new();
        for row in rows {
            by_character.entry(row.character_id).or_default().push(row);
        }

        models
            .into_iter()
            .map(|model| {
                let classes = by_character.remove(&model.id).unwrap_or_default();
                character_with_classes(model, classes)
            })
            .collect()
    }
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    #[instrument(skip(self))]
    async fn exists(&self, name: &str, player_name: &str) -> RepoResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r"
            SELECT EXISTS(SELECT 1 FROM characters WHERE name = $1 AND player_name = $2)
            ",
        )
        .bind(name)
        .bind(player_name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CharacterId) -> RepoResult<Option<Character>> {
        let mut builder = QueryBuilder::<Postgres>::new(CHARACTER_COLUMNS);
        builder
            .push(CHARACTER_FROM)
            .push(" WHERE c.id = ")
            .push_bind(id.into_inner());

        let model = builder
            .build_query_as::<CharacterModel>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        match model {
            Some(model) => Ok(self.hydrate(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn find_page(
        &self,
        page: Page,
        order: &Order,
        filter: &CharacterFilter,
    ) -> RepoResult<PaginatedResult<Character>> {
        if !page.is_valid() {
            return Err(invalid_page(page.index, page.size));
        }

        let predicate = CharacterFilterBuilder::new(filter).build();
        let ordering = CharacterOrderBuilder::new(order).build();

        let mut count = QueryBuilder::<Postgres>::new("SELECT COUNT(*)");
        count.push(CHARACTER_FROM);
        push_where(&mut count, &predicate);
        let total: i64 = count
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)?;

        let mut select = QueryBuilder::<Postgres>::new(CHARACTER_COLUMNS);
        select.push(CHARACTER_FROM);
        push_where(&mut select, &predicate);
        push_order_by(&mut select, &ordering);
        push_page(&mut select, page);
        let models = select
            .build_query_as::<CharacterModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        debug!(total, returned = models.len(), "Character page loaded");

        let characters = self.hydrate(models).await?;
        Ok(PaginatedResult::new(
            characters,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    fn begin(&self) -> Box<dyn UnitOfWork> {
        Box::new(PgUnitOfWork::new(self.pool.clone()))
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
