//! # Animal Rescue
//!
//! A command-line game and library that manages a toy animal rescue shelter
//! with two classic data structures:
//!
//! - An unbalanced binary search tree ordered by animal name
//! - An array-backed binary max-heap ordered by rescue priority
//!
//! Every rescued animal is inserted into both structures as one shared record.
//! After that the two structures are independent: adopting by name only looks
//! the animal up, and adopting by priority removes it from the heap alone.
//!
//! ## Modules
//!
//! - [`models`] - The animal record, species badges and roster rows
//! - [`tree`] - Binary search tree keyed by name
//! - [`heap`] - Max-heap keyed by priority
//! - [`shelter`] - Both structures filled in lockstep
//! - [`menu`] - The interactive menu loop
//! - [`display`] - Output formatting and display utilities
//! - [`data`] - CSV roster loading
//! - [`error`] - Error types
//! - [`wasm`] - JavaScript bindings
//!
//! ## Example Usage
//!
//! ```
//! use animal_rescue::{display::format_animal, shelter::Shelter};
//!
//! let mut shelter = Shelter::new();
//! shelter.rescue("Rex", "dog", 5);
//! shelter.rescue("Milo", "cat", 9);
//! shelter.rescue("Coco", "rabbit", 3);
//!
//! // Ascending name order from the tree
//! let names: Vec<String> = shelter.list().iter().map(|a| a.name().to_string()).collect();
//! assert_eq!(names, ["Coco", "Milo", "Rex"]);
//!
//! // Highest priority from the heap
//! let top = shelter.peek_priority().unwrap();
//! assert_eq!(format_animal(top), "Milo (cat) - Priority: 9 🐱");
//! ```

pub mod data;
pub mod display;
pub mod error;
pub mod heap;
pub mod menu;
pub mod models;
pub mod shelter;
pub mod tree;
pub mod wasm;

pub use error::{RescueError, Result};
