//! Tests for the priority max-heap.

use animal_rescue::heap::PriorityHeap;
use animal_rescue::models::Animal;

fn heap_of(priorities: &[i32]) -> PriorityHeap {
    let mut heap = PriorityHeap::new();
    for (i, priority) in priorities.iter().enumerate() {
        heap.insert(Animal::new(format!("pet{i}"), "cat", *priority).shared());
    }
    heap
}

fn drain(heap: &mut PriorityHeap) -> Vec<i32> {
    std::iter::from_fn(|| heap.remove_max())
        .map(|a| a.priority())
        .collect()
}

fn assert_heap_property(heap: &PriorityHeap) {
    let slots: Vec<i32> = heap.iter().map(|a| a.priority()).collect();
    for i in 0..slots.len() {
        for child in [2 * i + 1, 2 * i + 2] {
            if child < slots.len() {
                assert!(
                    slots[i] >= slots[child],
                    "slot {i} ({}) below child {child} ({})",
                    slots[i],
                    slots[child]
                );
            }
        }
    }
}

#[test]
fn test_remove_max_scenario() {
    let mut heap = PriorityHeap::new();
    heap.insert(Animal::new("Rex", "dog", 5).shared());
    heap.insert(Animal::new("Milo", "cat", 9).shared());
    heap.insert(Animal::new("Coco", "rabbit", 3).shared());

    assert_eq!(heap.peek_max().map(|a| a.name()), Some("Milo"));

    let order: Vec<String> = std::iter::from_fn(|| heap.remove_max())
        .map(|a| a.name().to_string())
        .collect();
    assert_eq!(order, ["Milo", "Rex", "Coco"]);
}

#[test]
fn test_remove_max_is_non_increasing() {
    let mut state: u64 = 7;
    let priorities: Vec<i32> = (0..200)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 40) % 21) as i32 - 10
        })
        .collect();

    let mut heap = heap_of(&priorities);
    assert_heap_property(&heap);

    let drained = drain(&mut heap);
    let mut expected = priorities.clone();
    expected.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(drained, expected);
}

#[test]
fn test_size_after_inserts_and_removals() {
    let mut heap = heap_of(&[4, 8, 1, 9, 9, 2, 7]);
    assert_eq!(heap.len(), 7);

    for removed in 1..=3 {
        heap.remove_max();
        assert_eq!(heap.len(), 7 - removed);
        assert_heap_property(&heap);
    }
}

#[test]
fn test_peek_does_not_change_size() {
    let heap = heap_of(&[3, 6, 1]);
    for _ in 0..3 {
        assert_eq!(heap.peek_max().map(|a| a.priority()), Some(6));
    }
    assert_eq!(heap.len(), 3);
}

#[test]
fn test_empty_heap_returns_none() {
    let mut heap = PriorityHeap::new();
    assert!(heap.peek_max().is_none());
    assert!(heap.remove_max().is_none());
    assert!(heap.is_empty());

    heap.insert(Animal::new("Solo", "dog", 1).shared());
    assert!(heap.remove_max().is_some());
    assert!(heap.remove_max().is_none());
    assert_eq!(heap.len(), 0);
}

#[test]
fn test_equal_priorities_all_come_out() {
    let mut heap = heap_of(&[5, 5, 5, 5]);
    assert_eq!(drain(&mut heap), [5, 5, 5, 5]);
}

#[test]
fn test_interleaved_operations_keep_heap_property() {
    let mut heap = PriorityHeap::new();
    let mut inserted = 0;
    let mut removed = 0;
    for step in 0..60i32 {
        heap.insert(Animal::new(format!("pet{step}"), "dog", (step * 37) % 11).shared());
        inserted += 1;
        if step % 3 == 0 && heap.remove_max().is_some() {
            removed += 1;
        }
        assert_heap_property(&heap);
        assert_eq!(heap.len(), inserted - removed);
    }
}
