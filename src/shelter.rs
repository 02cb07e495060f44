//! The rescue shelter: a name tree and a priority heap filled in lockstep.
//!
//! Every rescued animal is inserted into both structures as the same
//! [`SharedAnimal`] handle. After that the two are independent. Adopting by
//! name is a lookup only, and adopting by priority removes the record from
//! the heap while leaving it in the tree.

use tracing::debug;

use crate::heap::PriorityHeap;
use crate::models::{Animal, RosterRow, SharedAnimal};
use crate::tree::NameTree;

/// Shelter state for one session.
///
/// # Example
///
/// ```
/// use animal_rescue::shelter::Shelter;
///
/// let mut shelter = Shelter::new();
/// shelter.rescue("Rex", "dog", 5);
/// shelter.rescue("Milo", "cat", 9);
///
/// assert!(shelter.search("Rex").is_some());
/// assert_eq!(shelter.peek_priority().map(|a| a.name()), Some("Milo"));
///
/// // Priority adoption only touches the heap.
/// shelter.adopt_by_priority();
/// assert!(shelter.search("Milo").is_some());
/// ```
#[derive(Debug, Default)]
pub struct Shelter {
    by_name: NameTree,
    by_priority: PriorityHeap,
}

impl Shelter {
    /// Creates an empty shelter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a record and inserts it into both the tree and the heap.
    pub fn rescue(&mut self, name: &str, species: &str, priority: i32) -> SharedAnimal {
        self.admit(Animal::new(name, species, priority))
    }

    /// Inserts an already built record into both structures.
    pub fn admit(&mut self, animal: Animal) -> SharedAnimal {
        let animal = animal.shared();
        self.by_name.insert(SharedAnimal::clone(&animal));
        self.by_priority.insert(SharedAnimal::clone(&animal));
        debug!(
            name = animal.name(),
            species = %animal.species(),
            priority = animal.priority(),
            tree_height = self.by_name.height(),
            "animal rescued"
        );
        animal
    }

    /// Admits every row of a roster, in file order.
    pub fn extend_from_roster<I>(&mut self, rows: I) -> usize
    where
        I: IntoIterator<Item = RosterRow>,
    {
        let mut admitted = 0;
        for row in rows {
            self.admit(Animal::from(row));
            admitted += 1;
        }
        admitted
    }

    /// Looks an animal up by exact name.
    pub fn search(&self, name: &str) -> Option<&SharedAnimal> {
        self.by_name.search(name)
    }

    /// All animals in the tree, in ascending name order.
    pub fn list(&self) -> Vec<SharedAnimal> {
        self.by_name.to_vec()
    }

    /// Adopts an animal by name.
    ///
    /// This is a lookup: the record stays in the tree and in the heap.
    pub fn adopt_by_name(&self, name: &str) -> Option<&SharedAnimal> {
        let adopted = self.by_name.search(name);
        debug!(name, found = adopted.is_some(), "adoption by name");
        adopted
    }

    /// The animal with the highest rescue priority, if any.
    pub fn peek_priority(&self) -> Option<&SharedAnimal> {
        self.by_priority.peek_max()
    }

    /// Removes the highest-priority animal from the heap.
    ///
    /// The record remains searchable and listable through the tree.
    pub fn adopt_by_priority(&mut self) -> Option<SharedAnimal> {
        let adopted = self.by_priority.remove_max();
        if let Some(animal) = &adopted {
            debug!(
                name = animal.name(),
                priority = animal.priority(),
                remaining = self.by_priority.len(),
                "adoption by priority"
            );
        }
        adopted
    }

    /// The name tree.
    pub fn tree(&self) -> &NameTree {
        &self.by_name
    }

    /// The priority heap.
    pub fn heap(&self) -> &PriorityHeap {
        &self.by_priority
    }
}
