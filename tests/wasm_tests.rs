//! Tests for the JavaScript-facing shelter, checked through its JSON output.

use animal_rescue::wasm::{get_version, WasmShelter};
use animal_rescue::RescueError;
use serde_json::{json, Value};

fn parse(text: &str) -> Value {
    serde_json::from_str(text).expect("bindings return valid JSON")
}

fn scenario_shelter() -> WasmShelter {
    let mut shelter = WasmShelter::new();
    shelter.rescue("Rex", "dog", 5);
    shelter.rescue("Milo", "cat", 9);
    shelter.rescue("Coco", "rabbit", 3);
    shelter
}

#[test]
fn test_rescue_returns_animal_json() {
    let mut shelter = WasmShelter::new();
    let rescued = parse(&shelter.rescue("Nibbles", "hamster", 2));

    assert_eq!(
        rescued,
        json!({"name": "Nibbles", "species": "hamster", "priority": 2, "recognized": false})
    );
    assert_eq!(shelter.size(), 1);
}

#[test]
fn test_search_lookup_json() {
    let shelter = scenario_shelter();

    let found = parse(&shelter.search("Milo"));
    assert_eq!(found["found"], json!(true));
    assert_eq!(found["animal"]["name"], json!("Milo"));
    assert_eq!(found["animal"]["priority"], json!(9));
    assert_eq!(found["message"], json!("Found Milo in the rescue system!"));

    let missing = parse(&shelter.search("Ghost"));
    assert_eq!(missing["found"], json!(false));
    assert_eq!(missing["animal"], Value::Null);
    assert_eq!(missing["message"], json!("No animal found with the name Ghost"));
}

#[test]
fn test_list_is_name_ordered() {
    let shelter = scenario_shelter();
    let listed = parse(&shelter.list());

    let names: Vec<&str> = listed
        .as_array()
        .expect("list is a JSON array")
        .iter()
        .map(|a| a["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Coco", "Milo", "Rex"]);
}

#[test]
fn test_adopt_by_name_keeps_animal_listed() {
    let shelter = scenario_shelter();

    let adopted = parse(&shelter.adopt_by_name("Rex"));
    assert_eq!(adopted["found"], json!(true));
    assert_eq!(adopted["message"], json!("Rex has been adopted!"));

    assert_eq!(parse(&shelter.list()).as_array().unwrap().len(), 3);
    assert_eq!(parse(&shelter.search("Rex"))["found"], json!(true));
    assert_eq!(parse(&shelter.adopt_by_name("Ghost"))["found"], json!(false));
}

#[test]
fn test_priority_adoption_and_empty_heap() {
    let mut shelter = scenario_shelter();

    assert_eq!(parse(&shelter.peek_priority())["name"], json!("Milo"));

    let order: Vec<Value> = (0..3)
        .map(|_| parse(&shelter.adopt_by_priority())["name"].clone())
        .collect();
    assert_eq!(order, [json!("Milo"), json!("Rex"), json!("Coco")]);

    assert_eq!(parse(&shelter.peek_priority()), Value::Null);
    assert_eq!(parse(&shelter.adopt_by_priority()), Value::Null);
    // The tree still holds every record
    assert_eq!(shelter.size(), 3);
}

#[test]
fn test_rescue_text_priority() {
    let mut shelter = WasmShelter::new();

    let rescued = parse(&shelter.rescue_text("Rex", "dog", " 7 ").expect("whole number"));
    assert_eq!(rescued["priority"], json!(7));

    match shelter.rescue_text("Milo", "cat", "urgent") {
        Err(RescueError::InvalidPriority(text)) => assert_eq!(text, "urgent"),
        other => panic!("expected InvalidPriority, got {other:?}"),
    }
    assert_eq!(shelter.size(), 1);
}

#[test]
fn test_get_version() {
    assert_eq!(get_version(), env!("CARGO_PKG_VERSION"));
}
