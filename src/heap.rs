//! Array-backed binary max-heap keyed by rescue priority.
//!
//! The children of slot `i` live at `2i + 1` and `2i + 2`. Records with equal
//! priority have no defined relative order.

use crate::models::SharedAnimal;

/// A max-heap of animals ordered by priority.
///
/// # Example
///
/// ```
/// use animal_rescue::heap::PriorityHeap;
/// use animal_rescue::models::Animal;
///
/// let mut heap = PriorityHeap::new();
/// heap.insert(Animal::new("Rex", "dog", 5).shared());
/// heap.insert(Animal::new("Milo", "cat", 9).shared());
/// heap.insert(Animal::new("Coco", "rabbit", 3).shared());
///
/// assert_eq!(heap.peek_max().map(|a| a.name()), Some("Milo"));
/// assert_eq!(heap.remove_max().map(|a| a.priority()), Some(9));
/// assert_eq!(heap.remove_max().map(|a| a.priority()), Some(5));
/// assert_eq!(heap.remove_max().map(|a| a.priority()), Some(3));
/// assert!(heap.remove_max().is_none());
/// ```
#[derive(Debug, Default)]
pub struct PriorityHeap {
    slots: Vec<SharedAnimal>,
}

impl PriorityHeap {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an animal and sifts it up to restore the heap property.
    pub fn insert(&mut self, animal: SharedAnimal) {
        self.slots.push(animal);
        self.sift_up(self.slots.len() - 1);
    }

    /// Returns the highest-priority animal without removing it.
    pub fn peek_max(&self) -> Option<&SharedAnimal> {
        self.slots.first()
    }

    /// Removes and returns the highest-priority animal.
    ///
    /// The last slot is moved into the root and sifted down.
    pub fn remove_max(&mut self) -> Option<SharedAnimal> {
        if self.slots.is_empty() {
            return None;
        }
        let max = self.slots.swap_remove(0);
        self.sift_down(0);
        Some(max)
    }

    /// Number of animals waiting in the heap.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the heap holds no animals.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over the backing slots in storage order, not priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, SharedAnimal> {
        self.slots.iter()
    }

    fn priority(&self, index: usize) -> i32 {
        self.slots[index].priority()
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.priority(index) > self.priority(parent) {
                self.slots.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;

            if left < len && self.priority(left) > self.priority(largest) {
                largest = left;
            }
            // Strict comparison keeps ties on the left child.
            if right < len && self.priority(right) > self.priority(largest) {
                largest = right;
            }

            if largest == index {
                break;
            }
            self.slots.swap(index, largest);
            index = largest;
        }
    }
}
