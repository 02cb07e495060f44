//! Tests for the shelter's paired tree and heap.

use std::rc::Rc;

use animal_rescue::models::RosterRow;
use animal_rescue::shelter::Shelter;

fn scenario_shelter() -> Shelter {
    let mut shelter = Shelter::new();
    shelter.rescue("Rex", "dog", 5);
    shelter.rescue("Milo", "cat", 9);
    shelter.rescue("Coco", "rabbit", 3);
    shelter
}

#[test]
fn test_rescue_inserts_into_both_structures() {
    let shelter = scenario_shelter();

    assert_eq!(shelter.tree().len(), 3);
    assert_eq!(shelter.heap().len(), 3);

    let names: Vec<String> = shelter.list().iter().map(|a| a.name().to_string()).collect();
    assert_eq!(names, ["Coco", "Milo", "Rex"]);
    assert_eq!(shelter.peek_priority().map(|a| a.priority()), Some(9));
}

#[test]
fn test_record_is_shared_not_copied() {
    let mut shelter = Shelter::new();
    let rex = shelter.rescue("Rex", "dog", 5);

    let in_tree = shelter.search("Rex").expect("Rex is in the tree");
    let in_heap = shelter.peek_priority().expect("Rex is in the heap");
    assert!(Rc::ptr_eq(&rex, in_tree));
    assert!(Rc::ptr_eq(in_tree, in_heap));
    // The returned handle, the tree node and the heap slot
    assert_eq!(Rc::strong_count(&rex), 3);
}

#[test]
fn test_adopt_by_name_does_not_remove() {
    let shelter = scenario_shelter();

    let adopted = shelter.adopt_by_name("Milo").map(|a| a.name().to_string());
    assert_eq!(adopted.as_deref(), Some("Milo"));
    assert!(shelter.search("Milo").is_some());
    assert_eq!(shelter.list().len(), 3);
    assert_eq!(shelter.peek_priority().map(|a| a.name()), Some("Milo"));
}

#[test]
fn test_adopt_by_name_missing() {
    let shelter = scenario_shelter();
    assert!(shelter.adopt_by_name("Ghost").is_none());
    assert!(shelter.search("Ghost").is_none());
}

#[test]
fn test_adopt_by_priority_leaves_tree_alone() {
    let mut shelter = scenario_shelter();

    let order: Vec<String> = std::iter::from_fn(|| shelter.adopt_by_priority())
        .map(|a| a.name().to_string())
        .collect();
    assert_eq!(order, ["Milo", "Rex", "Coco"]);

    assert!(shelter.peek_priority().is_none());
    assert!(shelter.adopt_by_priority().is_none());
    assert_eq!(shelter.tree().len(), 3);
    assert!(shelter.search("Milo").is_some());
}

#[test]
fn test_unrecognized_species_is_stored() {
    let mut shelter = Shelter::new();
    shelter.rescue("Nibbles", "hamster", 2);

    let nibbles = shelter.search("Nibbles").expect("stored despite unknown species");
    assert_eq!(nibbles.species().as_str(), "hamster");
    assert!(!nibbles.species().is_recognized());
}

#[test]
fn test_extend_from_roster() {
    let rows = vec![
        RosterRow {
            name: "Hazel".to_string(),
            species: "rabbit".to_string(),
            priority: 8,
        },
        RosterRow {
            name: "Biscuit".to_string(),
            species: "dog".to_string(),
            priority: 7,
        },
    ];

    let mut shelter = Shelter::new();
    assert_eq!(shelter.extend_from_roster(rows), 2);
    assert_eq!(shelter.heap().len(), 2);
    assert_eq!(shelter.peek_priority().map(|a| a.name()), Some("Hazel"));
    assert_eq!(shelter.list()[0].name(), "Biscuit");
}

#[test]
fn test_empty_shelter() {
    let mut shelter = Shelter::new();
    assert!(shelter.list().is_empty());
    assert!(shelter.peek_priority().is_none());
    assert!(shelter.adopt_by_priority().is_none());
    assert!(shelter.search("Rex").is_none());
}
