//! Transactional writes for characters

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{info, instrument};

use dnd_core::entities::Character;
use dnd_core::error::DomainError;
use dnd_core::traits::{RepoResult, UnitOfWork};

use crate::mappers::{CharacterClassInsert, CharacterInsert};

use super::error::{map_db_error, map_unique_violation};

/// Stages characters and writes them in a single transaction on commit
///
/// Dropping an uncommitted `sqlx::Transaction` rolls it back, so a cancelled
/// commit leaves nothing behind.
pub struct PgUnitOfWork {
    pool: PgPool,
    staged: Vec<Character>,
}

impl PgUnitOfWork {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            staged: Vec::new(),
        }
    }
}

async fn insert_character(
    tx: &mut Transaction<'_, Postgres>,
    character: &Character,
) -> RepoResult<u64> {
    let row = CharacterInsert::new(character);
    let [strength, dexterity, constitution, intelligence, wisdom, charisma] = row.stats;

    let inserted = sqlx::query(
        r"
        INSERT INTO characters (id, name, player_name, specie_id,
                                strength, dexterity, constitution, intelligence, wisdom, charisma)
        SELECT $1, $2, $3, s.id, $5, $6, $7, $8, $9, $10
        FROM species s
        WHERE UPPER(s.name) = UPPER($4)
        ",
    )
    .bind(row.id)
    .bind(row.name)
    .bind(row.player_name)
    .bind(row.species_name)
    .bind(strength)
    .bind(dexterity)
    .bind(constitution)
    .bind(intelligence)
    .bind(wisdom)
    .bind(charisma)
    .execute(&mut **tx)
    .await
    .map_err(|e| map_unique_violation(e, || DomainError::CharacterAlreadyExists))?
    .rows_affected();

    if inserted == 0 {
        return Err(DomainError::NonExistingSpecie(row.species_name.to_string()));
    }

    let mut affected = inserted;
    for membership in CharacterClassInsert::for_character(character) {
        let inserted = sqlx::query(
            r"
            INSERT INTO character_classes (character_id, class_id, level, position, is_main_class)
            SELECT $1, cl.id, $3, $4, $5
            FROM classes cl
            WHERE UPPER(cl.name) = UPPER($2)
            ",
        )
        .bind(membership.character_id)
        .bind(membership.class_name)
        .bind(membership.level)
        .bind(membership.position)
        .bind(membership.is_main_class)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::DuplicateClass(membership.class_name.to_string())
            })
        })?
        .rows_affected();

        if inserted == 0 {
            return Err(DomainError::NonExistingClass(
                membership.class_name.to_string(),
            ));
        }
        affected += inserted;
    }

    Ok(affected)
}

#[async_trait]
impl UnitOfWork for PgUnitOfWork {
    fn save_character(&mut self, character: Character) {
        self.staged.push(character);
    }

    fn pending(&self) -> usize {
        self.staged.len()
    }

    #[instrument(skip(self))]
    async fn commit(&mut self) -> RepoResult<u64> {
        if self.staged.is_empty() {
            return Ok(0);
        }

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let mut affected = 0;
        for character in &self.staged {
            affected += insert_character(&mut tx, character).await?;
        }

        tx.commit().await.map_err(map_db_error)?;
        let characters = self.staged.len();
        self.staged.clear();

        info!(affected, characters, "Unit of work committed");
        Ok(affected)
    }
}
