//! Character service
//!
//! The create and list workflows. Validation runs before any repository call;
//! the create workflow then checks existence, species and classes in that
//! order, stopping at the first failure.

use dnd_core::entities::{Character, DndClass};
use dnd_core::error::DomainError;
use dnd_core::query::Page;
use dnd_core::value_objects::{CharacterId, Level};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use crate::dto::{
    CharacterResponse, CreateCharacterRequest, CreatedCharacterResponse, GetCharactersRequest,
    PaginatedResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Character service
pub struct CharacterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CharacterService<'a> {
    /// Create a new CharacterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a character and return its new id
    #[instrument(skip(self, request), fields(name = %request.name, player = %request.player_name))]
    pub async fn create_character(
        &self,
        request: CreateCharacterRequest,
    ) -> ServiceResult<CreatedCharacterResponse> {
        request.validate()?;

        let characters = self.ctx.character_repo();
        if characters
            .exists(&request.name, &request.player_name)
            .await?
        {
            warn!("Character already exists");
            return Err(DomainError::CharacterAlreadyExists.into());
        }

        let species = self
            .ctx
            .species_repo()
            .find_by_name(&request.specie_name)
            .await?
            .ok_or_else(|| DomainError::NonExistingSpecie(request.specie_name.clone()))?;

        let mut classes = Vec::with_capacity(request.classes.len());
        for class in &request.classes {
            let definition = self
                .ctx
                .class_repo()
                .find_by_name(&class.name)
                .await?
                .ok_or_else(|| DomainError::NonExistingClass(class.name.clone()))?;
            classes.push(DndClass::new(definition.name, Level::new(class.level)?));
        }

        let mut classes = classes.into_iter();
        let main_class = classes
            .next()
            .ok_or_else(|| ServiceError::internal("validated request has no classes"))?;
        let character = Character::new(
            CharacterId::new(),
            request.name,
            request.player_name,
            species,
            main_class,
            classes.collect(),
        )?;
        let id = character.id;

        let mut unit_of_work = characters.begin();
        unit_of_work.save_character(character);
        let affected = unit_of_work.commit().await?;

        info!(character_id = %id, affected, "Character created");
        Ok(CreatedCharacterResponse { id })
    }

    /// List characters matching a filter, ordered and paged
    #[instrument(skip(self))]
    pub async fn get_characters(
        &self,
        request: GetCharactersRequest,
    ) -> ServiceResult<PaginatedResponse<CharacterResponse>> {
        request.validate()?;

        let page = request.page.unwrap_or(Page::INFINITE);
        let order = request.order.unwrap_or_default();

        let result = self
            .ctx
            .character_repo()
            .find_page(page, &order, &request.filter)
            .await?;

        debug!(total = result.total_amount, returned = result.len(), "Characters listed");
        Ok(PaginatedResponse::from_result(result, page))
    }

    /// Get a single character
    #[instrument(skip(self))]
    pub async fn get_character(&self, id: CharacterId) -> ServiceResult<CharacterResponse> {
        let character = self
            .ctx
            .character_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::CharacterNotFound(id))?;

        Ok(CharacterResponse::from(character))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::ClassRequest;
    use dnd_core::entities::{Size, Species};
    use dnd_core::query::{CharacterFilter, Order};
    use dnd_core::ErrorKind;
    use dnd_db::InMemoryStore;

    fn context(store: &InMemoryStore) -> ServiceContext {
        ServiceContext::builder().store(store.clone()).build().unwrap()
    }

    fn request(name: &str, player: &str, species: &str, classes: &[&str]) -> CreateCharacterRequest {
        CreateCharacterRequest {
            name: name.to_string(),
            player_name: player.to_string(),
            specie_name: species.to_string(),
            classes: classes.iter().map(|c| ClassRequest::new(*c, 1)).collect(),
        }
    }

    fn names(response: &PaginatedResponse<CharacterResponse>) -> Vec<&str> {
        response.data.iter().map(|c| c.name.as_str()).collect()
    }

    // ========================================================================
    // Create
    // ========================================================================

    #[tokio::test]
    async fn test_create_character() {
        let store = InMemoryStore::seeded();
        let ctx = context(&store);
        let service = CharacterService::new(&ctx);

        let created = service
            .create_character(request("Aria", "P1", "Human", &["Bard"]))
            .await
            .unwrap();

        assert!(created.id.is_time_ordered());
        let stored = store.characters();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, created.id);
        assert_eq!(stored[0].species.name, "Human");
        assert_eq!(stored[0].main_class.name, "Bard");
        assert!(stored[0].classes.is_empty());
    }

    #[tokio::test]
    async fn test_create_uses_catalog_names_and_levels() {
        let store = InMemoryStore::seeded();
        let ctx = context(&store);
        let service = CharacterService::new(&ctx);
        let mut req = request("Thorin", "P2", "dwarf", &["barbarian"]);
        req.classes.push(ClassRequest::new("BARD", 4));

        service.create_character(req).await.unwrap();

        let stored = &store.characters()[0];
        assert_eq!(stored.species.name, "Dwarf");
        assert_eq!(stored.main_class.name, "Barbarian");
        assert_eq!(stored.classes[0].name, "Bard");
        assert_eq!(stored.classes[0].level.value(), 4);
        assert_eq!(stored.class_count(), 2);
    }

    #[tokio::test]
    async fn test_create_twice_conflicts() {
        let store = InMemoryStore::seeded();
        let ctx = context(&store);
        let service = CharacterService::new(&ctx);

        service
            .create_character(request("Aria", "P1", "Human", &["Bard"]))
            .await
            .unwrap();
        let err = service
            .create_character(request("Aria", "P1", "Human", &["Bard"]))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.code(), "CharacterError.AlreadyExists");
        assert_eq!(store.characters().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_species_writes_nothing() {
        let store = InMemoryStore::seeded();
        let ctx = context(&store);
        let service = CharacterService::new(&ctx);

        let err = service
            .create_character(request("Aria", "P1", "Atlantean", &["Bard"]))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.code(), "CharacterError.NonExistingSpecie");
        assert!(store.characters().is_empty());
    }

    #[tokio::test]
    async fn test_first_unknown_class_is_reported() {
        let store = InMemoryStore::seeded();
        let ctx = context(&store);
        let service = CharacterService::new(&ctx);

        let err = service
            .create_character(request("Aria", "P1", "Human", &["Bard", "Imaginary", "Unknown"]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Domain(DomainError::NonExistingClass(ref name)) if name == "Imaginary"
        ));
        assert_eq!(err.status_code(), 404);
        assert!(store.characters().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_request_is_rejected_before_io() {
        let store = InMemoryStore::new();
        let ctx = context(&store);
        let service = CharacterService::new(&ctx);
        let mut req = request("", "P1", "Human", &["Bard", "bard"]);
        req.classes[0].level = 21;

        let err = service.create_character(req).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
        let codes: Vec<&str> = err.failures().iter().map(|f| f.code.as_str()).collect();
        assert_eq!(
            codes,
            vec![
                "CreateCharacterError.InvalidClasses",
                "CreateCharacterError.NonUniqueClasses",
                "CreateCharacterError.EmptyName",
            ]
        );
    }

    // ========================================================================
    // List
    // ========================================================================

    fn populated() -> InMemoryStore {
        let store = InMemoryStore::seeded().with_species(Species::new("Elf", 30, Size::Medium));
        let seed = [
            ("Aragorn", "Human", "Bard"),
            ("Legolas", "Elf", "Bard"),
            ("Gimli", "Dwarf", "Barbarian"),
            ("Boromir", "Human", "Barbarian"),
            ("Elrond", "elf", "Artificer"),
            ("Thorin", "Dwarf", "Barbarian"),
            ("Smaug", "Dragonborn", "Artificer"),
            ("Arwen", "Elf", "Bard"),
            ("Faramir", "Human", "Bard"),
            ("Balin", "Dwarf", "Artificer"),
        ];
        for (name, species, class) in seed {
            let character = Character::new(
                CharacterId::new(),
                name,
                "P1",
                Species::new(species, 30, Size::Medium),
                DndClass::starting(class),
                vec![],
            )
            .unwrap();
            store.insert_character(character).unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_species_filter_counts_whole_subset() {
        let store = populated();
        let ctx = context(&store);
        let service = CharacterService::new(&ctx);

        let response = service
            .get_characters(
                GetCharactersRequest::new()
                    .with_page(Page::new(0, 2))
                    .with_order(Order::ascending("Name"))
                    .with_filter(CharacterFilter::new().with_species(["Elf", "Dwarf"])),
            )
            .await
            .unwrap();

        assert_eq!(response.pagination.total_amount, 6);
        assert_eq!(names(&response), vec!["Arwen", "Balin"]);
        assert!(response.pagination.has_more);

        let all = service
            .get_characters(
                GetCharactersRequest::new()
                    .with_order(Order::ascending("Name"))
                    .with_filter(CharacterFilter::new().with_species(["elf", "DWARF"])),
            )
            .await
            .unwrap();
        assert_eq!(
            names(&all),
            vec!["Arwen", "Balin", "Elrond", "Gimli", "Legolas", "Thorin"]
        );
    }

    #[tokio::test]
    async fn test_second_page_of_three_over_four_rows() {
        let store = populated();
        let ctx = context(&store);
        let service = CharacterService::new(&ctx);

        let response = service
            .get_characters(
                GetCharactersRequest::new()
                    .with_page(Page::new(1, 3))
                    .with_order(Order::ascending("name"))
                    .with_filter(CharacterFilter::new().with_classes(["Bard"])),
            )
            .await
            .unwrap();

        assert_eq!(response.pagination.total_amount, 4);
        assert_eq!(names(&response), vec!["Legolas"]);
        assert!(!response.pagination.has_more);
    }

    #[tokio::test]
    async fn test_defaults_return_everything_by_id() {
        let store = populated();
        let ctx = context(&store);
        let service = CharacterService::new(&ctx);

        let response = service
            .get_characters(GetCharactersRequest::new())
            .await
            .unwrap();

        assert_eq!(response.data.len(), 10);
        assert_eq!(response.pagination.total_amount, 10);
        let ids: Vec<_> = response.data.iter().map(|c| c.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }

    #[tokio::test]
    async fn test_more_criteria_never_widen_results() {
        let store = populated();
        let ctx = context(&store);
        let service = CharacterService::new(&ctx);

        let mut filter = CharacterFilter::new();
        let mut previous = u64::MAX;
        for step in 0..3 {
            filter = match step {
                0 => filter.with_name("r"),
                1 => filter.with_species(["Human", "Elf"]),
                _ => filter.with_classes(["Bard"]),
            };
            let total = service
                .get_characters(GetCharactersRequest::new().with_filter(filter.clone()))
                .await
                .unwrap()
                .pagination
                .total_amount;
            assert!(total <= previous);
            previous = total;
        }
        assert_eq!(previous, 3);
    }

    #[tokio::test]
    async fn test_invalid_list_request() {
        let store = populated();
        let ctx = context(&store);
        let service = CharacterService::new(&ctx);

        let err = service
            .get_characters(
                GetCharactersRequest::new()
                    .with_page(Page::new(-1, 0))
                    .with_order(Order::ascending("Level")),
            )
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 400);
        assert_eq!(err.failures().len(), 2);
    }

    #[tokio::test]
    async fn test_get_character() {
        let store = populated();
        let ctx = context(&store);
        let service = CharacterService::new(&ctx);
        let id = store.characters()[0].id;

        assert_eq!(service.get_character(id).await.unwrap().name, "Aragorn");

        let err = service.get_character(CharacterId::new()).await.unwrap_err();
        assert_eq!(err.code(), "CharacterError.NotFound");
    }
}
