//! API Integration Tests
//!
//! In-memory tests always run. PostgreSQL tests require DATABASE_URL and
//! skip otherwise.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_error, assert_json, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start_in_memory().await.expect("Failed to start server");

    let response = server.get("/health").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let response = server.get("/health/ready").await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

// ============================================================================
// In-memory Character Tests
// ============================================================================

#[tokio::test]
async fn test_create_then_fetch_character() {
    let server = TestServer::start_in_memory().await.unwrap();
    let request = NewCharacter::new("Thorin", "dwarf")
        .with_class("barbarian", 5)
        .with_class("Bard", 2);

    let response = server.post("/api/characters", &request).await.unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get(&format!("/api/characters/{}", created.id))
        .await
        .unwrap();
    let character: CharacterBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(character.id, created.id);
    assert_eq!(character.name, "Thorin");
    assert_eq!(character.player_name, "Integration");
    // catalog spelling wins over the request's
    assert_eq!(character.species, "Dwarf");
    assert_eq!(character.main_class.name, "Barbarian");
    assert_eq!(character.main_class.level, 5);
    assert_eq!(1 + character.classes.len(), request.classes.len());
    assert_eq!(character.classes[0].name, "Bard");
    assert_eq!(character.classes[0].level, 2);
}

#[tokio::test]
async fn test_create_rejects_invalid_levels() {
    let server = TestServer::start_in_memory().await.unwrap();
    let request = NewCharacter::new("Kara", "Human").with_class("Bard", 21);

    let response = server.post("/api/characters", &request).await.unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(code, "Validation.General");
}

#[tokio::test]
async fn test_listing_pages_through_results() {
    let server = TestServer::start_in_memory().await.unwrap();
    for name in ["Aria", "Bram", "Cade", "Dara", "Eryn"] {
        let request = NewCharacter::new(name, "Human").with_class("Bard", 1);
        let response = server.post("/api/characters", &request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = server
        .get("/api/characters?order-asc=false&order-key=name&page-index=1&page-size=2")
        .await
        .unwrap();
    let page: CharacterPage = assert_json(response, StatusCode::OK).await.unwrap();

    let names: Vec<&str> = page.data.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Cade", "Bram"]);
    assert_eq!(page.pagination.total_amount, 5);
    assert_eq!(page.pagination.page_index, Some(1));
    assert_eq!(page.pagination.page_size, Some(2));
    assert!(page.pagination.has_more);
}

#[tokio::test]
async fn test_listing_rejects_negative_page() {
    let server = TestServer::start_in_memory().await.unwrap();

    let response = server
        .get("/api/characters?page-index=-1&page-size=5")
        .await
        .unwrap();
    let code = assert_error(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(code, "Validation.General");
}

#[tokio::test]
async fn test_catalog_endpoints() {
    let server = TestServer::start_in_memory().await.unwrap();

    let response = server.get("/api/species").await.unwrap();
    let species: Vec<NamedEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(species.iter().any(|s| s.name == "Dragonborn"));

    let response = server.get("/api/classes").await.unwrap();
    let classes: Vec<NamedEntry> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(classes.iter().any(|c| c.name == "Artificer"));
}

// ============================================================================
// PostgreSQL Character Tests
// ============================================================================

#[tokio::test]
async fn test_postgres_create_and_conflict() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = NewCharacter::unique();

    let response = server.post("/api/characters", &request).await.unwrap();
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(!created.id.is_empty());

    let response = server.post("/api/characters", &request).await.unwrap();
    let code = assert_error(response, StatusCode::CONFLICT).await.unwrap();
    assert_eq!(code, "CharacterError.AlreadyExists");
}

#[tokio::test]
async fn test_postgres_unknown_references() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = NewCharacter::new(format!("Lost {}", unique_suffix()), "Gnome")
        .with_class("Bard", 1);
    let response = server.post("/api/characters", &request).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "CharacterError.NonExistingSpecie");

    let request = NewCharacter::new(format!("Lost {}", unique_suffix()), "Human")
        .with_class("Necromancer", 1);
    let response = server.post("/api/characters", &request).await.unwrap();
    let code = assert_error(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(code, "CharacterError.NonExistingClass");
}

#[tokio::test]
async fn test_postgres_listing_filters_by_name() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let tag = unique_suffix();

    for (prefix, specie, class) in [("Ash", "Dwarf", "Bard"), ("Birch", "Human", "Barbarian")] {
        let request = NewCharacter::new(format!("{prefix} {tag}"), specie).with_class(class, 3);
        let response = server.post("/api/characters", &request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = server
        .get(&format!("/api/characters?filter-name={tag}&order-asc=true&order-key=Name"))
        .await
        .unwrap();
    let page: CharacterPage = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.pagination.total_amount, 2);
    assert_eq!(page.data[0].name, format!("Ash {tag}"));

    let response = server
        .get(&format!("/api/characters?filter-name={tag}&filter-classes=barbarian"))
        .await
        .unwrap();
    let page: CharacterPage = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(page.pagination.total_amount, 1);
    assert_eq!(page.data[0].species, "Human");
}
