//! Character entity <-> model mapper

use dnd_core::entities::{Character, DndClass, Species};
use dnd_core::error::DomainError;
use dnd_core::traits::RepoResult;
use dnd_core::value_objects::{CharacterId, Level, Stat, StatType, Stats};
use uuid::Uuid;

use crate::models::{CharacterClassModel, CharacterModel};

/// Assemble a Character from its row and its class membership rows
///
/// Memberships are ordered by position; the row flagged as main becomes the main class.
pub fn character_with_classes(
    model: CharacterModel,
    mut classes: Vec<CharacterClassModel>,
) -> RepoResult<Character> {
    classes.sort_by_key(|c| c.position);

    let main_index = classes
        .iter()
        .position(|c| c.is_main_class)
        .ok_or_else(|| {
            DomainError::DatabaseError(format!("character {} has no main class", model.id))
        })?;
    let main_class = to_class(classes.remove(main_index))?;
    let secondary = classes
        .into_iter()
        .map(to_class)
        .collect::<RepoResult<Vec<_>>>()?;

    let stats = Stats::default()
        .with(StatType::Strength, Stat::new(model.strength.into())?)
        .with(StatType::Dexterity, Stat::new(model.dexterity.into())?)
        .with(StatType::Constitution, Stat::new(model.constitution.into())?)
        .with(StatType::Intelligence, Stat::new(model.intelligence.into())?)
        .with(StatType::Wisdom, Stat::new(model.wisdom.into())?)
        .with(StatType::Charisma, Stat::new(model.charisma.into())?);

    let species = Species {
        name: model.species_name,
        speed: u32::try_from(model.species_speed).unwrap_or_default(),
        size: model.species_size.parse().unwrap_or_default(),
    };

    Ok(Character::new(
        CharacterId::from_uuid(model.id),
        model.name,
        model.player_name,
        species,
        main_class,
        secondary,
    )?
    .with_stats(stats))
}

fn to_class(model: CharacterClassModel) -> RepoResult<DndClass> {
    Ok(DndClass::new(model.class_name, Level::new(model.level.into())?))
}

/// Character values for insertion into `characters`
pub struct CharacterInsert<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub player_name: &'a str,
    pub species_name: &'a str,
    /// Ability scores in `StatType::ALL` order
    pub stats: [i16; 6],
}

impl<'a> CharacterInsert<'a> {
    pub fn new(character: &'a Character) -> Self {
        Self {
            id: character.id.into_inner(),
            name: &character.name,
            player_name: &character.player_name,
            species_name: &character.species.name,
            stats: StatType::ALL.map(|t| i16::from(character.stats.get(t).value())),
        }
    }
}

/// One `character_classes` row
pub struct CharacterClassInsert<'a> {
    pub character_id: Uuid,
    pub class_name: &'a str,
    pub level: i16,
    pub position: i16,
    pub is_main_class: bool,
}

impl<'a> CharacterClassInsert<'a> {
    /// Rows for every membership, main class first at position 0
    pub fn for_character(character: &'a Character) -> Vec<Self> {
        character
            .all_classes()
            .enumerate()
            .map(|(position, class)| Self {
                character_id: character.id.into_inner(),
                class_name: &class.name,
                level: i16::from(class.level.value()),
                position: position as i16,
                is_main_class: position == 0,
            })
            .collect()
    }
}
