//! `pokedex categories` and `pokedex config`.

use anyhow::Result;
use pokedex_testing::{MockPokeApi, TestWorld, fixtures};
use predicates::prelude::*;

#[test]
fn test_categories_sorted_with_counts() -> Result<()> {
    let api = MockPokeApi::start(fixtures::starter_entities())?;
    let world = TestWorld::new().with_api(&api);

    let result = world.run(&["categories", "--format", "json"])?;

    assert!(result.success(), "categories failed: {}", result.stderr());
    let json = result.json()?;
    let categories = json["content"]["categories"]
        .as_array()
        .expect("categories array");
    let names: Vec<&str> = categories
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();
    assert_eq!(
        names,
        vec!["bug", "electric", "fire", "flying", "grass", "poison", "water"]
    );

    let fire = categories
        .iter()
        .find(|c| c["name"] == "fire")
        .expect("fire entry");
    assert_eq!(fire["count"], 3);

    Ok(())
}

#[test]
fn test_config_init_then_show() -> Result<()> {
    let world = TestWorld::new();

    // When: init writes defaults
    let result = world.run(&["config", "init"])?;
    assert!(result.success(), "init failed: {}", result.stderr());
    assert!(world.config_path().exists());

    let written = std::fs::read_to_string(world.config_path())?;
    assert!(predicate::str::contains("[api]").eval(&written));
    assert!(predicate::str::contains("page_size = 12").eval(&written));

    // Then: a second init refuses to overwrite
    let again = world.run(&["config", "init"])?;
    assert_eq!(again.status.code(), Some(1));
    assert!(again.stderr().contains("already exists"));

    let forced = world.run(&["config", "init", "--force", "--format", "json"])?;
    assert!(forced.success());
    assert_eq!(forced.json()?["content"]["overwritten"], true);

    Ok(())
}

#[test]
fn test_config_file_values_and_overrides() -> Result<()> {
    let world = TestWorld::new().with_config(
        r#"
[api]
base_url = "http://127.0.0.1:9/api/v2"
roster_limit = 30

[view]
page_size = 5
"#,
    );

    let result = world.run(&["config", "show", "--format", "json"])?;
    assert!(result.success(), "show failed: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(json["content"]["file_exists"], true);
    assert_eq!(json["content"]["api_base_url"], "http://127.0.0.1:9/api/v2");
    assert_eq!(json["content"]["roster_limit"], 30);
    assert_eq!(json["content"]["page_size"], 5);

    let overridden = world.run(&["--page-size", "20", "config", "show", "--format", "json"])?;
    assert_eq!(overridden.json()?["content"]["page_size"], 20);

    Ok(())
}

#[test]
fn test_config_page_size_applies_to_list() -> Result<()> {
    let api = MockPokeApi::start(fixtures::starter_entities())?;
    let world = TestWorld::new()
        .with_config("[view]\npage_size = 5\n")
        .with_api(&api);

    let result = world.run(&["list", "--format", "json"])?;

    assert!(result.success(), "list failed: {}", result.stderr());
    let json = result.json()?;
    assert_eq!(json["content"]["items"].as_array().map(Vec::len), Some(5));
    assert_eq!(json["content"]["pagination"]["total_pages"], 3);

    Ok(())
}

#[test]
fn test_invalid_config_is_reported() -> Result<()> {
    let world = TestWorld::new().with_config("[view]\npage_size = \"lots\"\n");

    let result = world.run(&["config", "show"])?;

    assert_eq!(result.status.code(), Some(1));
    assert!(result.stderr().contains("Invalid config file"));

    Ok(())
}
