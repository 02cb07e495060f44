//! Data models and structures for the rescue shelter.
//!
//! This module contains the animal record shared by the search tree and the
//! priority heap, the species classification used for display, and the CSV
//! row structure used when seeding the shelter from a roster file.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// A handle to an [`Animal`] shared between the name tree and the priority heap.
///
/// Both containers hold clones of the same handle, so a record is stored once
/// no matter how many structures refer to it.
pub type SharedAnimal = Rc<Animal>;

/// The species of a rescued animal.
///
/// Only dogs, cats and rabbits are recognized; anything else is kept verbatim
/// so the record can still be stored and listed.
///
/// # Example
///
/// ```
/// use animal_rescue::models::Species;
///
/// assert_eq!(Species::parse("dog"), Species::Dog);
/// assert_eq!(Species::parse("ferret"), Species::Other("ferret".to_string()));
/// assert_eq!(Species::parse("cat").badge(), "🐱");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Species {
    /// A dog
    Dog,
    /// A cat
    Cat,
    /// A rabbit
    Rabbit,
    /// Any species the shelter has no badge for
    Other(String),
}

impl Species {
    /// Classifies a typed species string. Matching is exact and case-sensitive.
    pub fn parse(species: &str) -> Self {
        match species {
            "dog" => Species::Dog,
            "cat" => Species::Cat,
            "rabbit" => Species::Rabbit,
            other => Species::Other(other.to_string()),
        }
    }

    /// Returns the species as it was typed.
    pub fn as_str(&self) -> &str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
            Species::Rabbit => "rabbit",
            Species::Other(name) => name,
        }
    }

    /// Returns the cosmetic badge printed after a record line.
    pub fn badge(&self) -> &'static str {
        match self {
            Species::Dog => "🐶",
            Species::Cat => "🐱",
            Species::Rabbit => "🐰",
            Species::Other(_) => "Species not recognized",
        }
    }

    /// Whether the species has a dedicated badge.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Species::Other(_))
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rescued animal.
///
/// Records are immutable once created. The tree orders them by `name` and the
/// heap orders them by `priority`.
///
/// # Example
///
/// ```
/// use animal_rescue::models::{Animal, Species};
///
/// let rex = Animal::new("Rex", "dog", 5);
///
/// assert_eq!(rex.name(), "Rex");
/// assert_eq!(rex.species(), &Species::Dog);
/// assert_eq!(rex.priority(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Animal {
    name: String,
    species: Species,
    priority: i32,
}

impl Animal {
    /// Creates a new record. Priority is not range-checked.
    pub fn new(name: impl Into<String>, species: &str, priority: i32) -> Self {
        Animal {
            name: name.into(),
            species: Species::parse(species),
            priority,
        }
    }

    /// Wraps the record in a [`SharedAnimal`] handle.
    pub fn shared(self) -> SharedAnimal {
        Rc::new(self)
    }

    /// The animal's name, the search tree key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The animal's species.
    pub fn species(&self) -> &Species {
        &self.species
    }

    /// Rescue priority, the heap key. Higher is more urgent.
    pub fn priority(&self) -> i32 {
        self.priority
    }
}

/// JSON view of an [`Animal`], used by the WebAssembly bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimalView {
    /// Animal name
    pub name: String,
    /// Species as typed
    pub species: String,
    /// Rescue priority
    pub priority: i32,
    /// Whether the species has a badge
    pub recognized: bool,
}

impl From<&Animal> for AnimalView {
    fn from(animal: &Animal) -> Self {
        AnimalView {
            name: animal.name.clone(),
            species: animal.species.as_str().to_string(),
            priority: animal.priority,
            recognized: animal.species.is_recognized(),
        }
    }
}

// ============================================================================
// CSV Row Structures
// ============================================================================

/// CSV row structure for a roster file.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterRow {
    /// Animal name
    pub name: String,
    /// Species as typed
    pub species: String,
    /// Rescue priority
    pub priority: i32,
}

impl From<RosterRow> for Animal {
    fn from(row: RosterRow) -> Self {
        Animal::new(row.name, &row.species, row.priority)
    }
}
