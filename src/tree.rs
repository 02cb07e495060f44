//! Binary search tree keyed by animal name.
//!
//! The tree is deliberately unbalanced: nodes are attached wherever the
//! descent ends, so sorted insertion order degrades it to a linked list.
//! Names that compare equal are placed in the right subtree.

use crate::models::SharedAnimal;

type Link = Option<Box<Node>>;

#[derive(Debug)]
struct Node {
    animal: SharedAnimal,
    left: Link,
    right: Link,
}

impl Node {
    fn leaf(animal: SharedAnimal) -> Box<Self> {
        Box::new(Node {
            animal,
            left: None,
            right: None,
        })
    }
}

/// An unbalanced binary search tree of animals ordered by name.
///
/// # Example
///
/// ```
/// use animal_rescue::models::Animal;
/// use animal_rescue::tree::NameTree;
///
/// let mut tree = NameTree::new();
/// tree.insert(Animal::new("Rex", "dog", 5).shared());
/// tree.insert(Animal::new("Milo", "cat", 9).shared());
/// tree.insert(Animal::new("Coco", "rabbit", 3).shared());
///
/// let names: Vec<&str> = tree.iter().map(|a| a.name()).collect();
/// assert_eq!(names, ["Coco", "Milo", "Rex"]);
/// assert!(tree.search("Ghost").is_none());
/// ```
#[derive(Debug, Default)]
pub struct NameTree {
    root: Link,
    len: usize,
}

impl NameTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an animal as a new leaf.
    ///
    /// Descends left while the new name is strictly less than the node's
    /// name, right otherwise. Duplicate names are kept.
    pub fn insert(&mut self, animal: SharedAnimal) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if animal.name() < node.animal.name() {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(Node::leaf(animal));
        self.len += 1;
    }

    /// Finds the animal with exactly this name.
    ///
    /// When duplicates exist, the one closest to the root (the first
    /// inserted) is returned.
    pub fn search(&self, name: &str) -> Option<&SharedAnimal> {
        let mut link = &self.root;
        while let Some(node) = link {
            let key = node.animal.name();
            if name == key {
                return Some(&node.animal);
            }
            link = if name < key { &node.left } else { &node.right };
        }
        None
    }

    /// Returns whether an animal with this name is stored.
    pub fn contains(&self, name: &str) -> bool {
        self.search(name).is_some()
    }

    /// Iterates over all animals in ascending name order.
    ///
    /// The walk is lazy and can be restarted by calling `iter` again.
    pub fn iter(&self) -> InOrder<'_> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left(&self.root);
        iter
    }

    /// Collects the in-order traversal into a vector of handles.
    pub fn to_vec(&self) -> Vec<SharedAnimal> {
        self.iter().cloned().collect()
    }

    /// Number of stored animals.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no animal has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes on the longest root-to-leaf path. Zero when empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node> = self.root.iter().map(|n| &**n).collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .into_iter()
                .flat_map(|n| n.left.iter().chain(n.right.iter()))
                .map(|n| &**n)
                .collect();
        }
        height
    }
}

impl Drop for NameTree {
    // Unlinks nodes one at a time; the default recursive drop can overflow
    // the stack on a degenerate tree.
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl<'a> IntoIterator for &'a NameTree {
    type Item = &'a SharedAnimal;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order (left, node, right) iterator over a [`NameTree`].
///
/// Uses an explicit stack so degenerate trees do not exhaust the call stack.
#[derive(Debug)]
pub struct InOrder<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> InOrder<'a> {
    fn push_left(&mut self, mut link: &'a Link) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a SharedAnimal;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(&node.right);
        Some(&node.animal)
    }
}
