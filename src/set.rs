//! Uniqueness-only collection.
//!
//! Used by routes to track which HTTP methods already have a handler.
//! Iteration order is unspecified.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Returned by [`Set::add`] when the element is already present.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("set already has element {0:?}")]
pub struct DuplicateElement<T: fmt::Debug>(pub T);

/// A set of unique elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Set<T: Eq + Hash> {
    elements: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            elements: HashSet::new(),
        }
    }

    /// True if `el` is present.
    pub fn has(&self, el: &T) -> bool {
        self.elements.contains(el)
    }

    /// Insert `el`, failing if it is already present.
    pub fn add(&mut self, el: T) -> Result<(), DuplicateElement<T>>
    where
        T: fmt::Debug,
    {
        if self.has(&el) {
            return Err(DuplicateElement(el));
        }
        self.elements.insert(el);
        Ok(())
    }

    /// Remove `el` if present.
    pub fn remove(&mut self, el: &T) {
        self.elements.remove(el);
    }

    /// Iterate the elements in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    /// Snapshot of the elements, in no particular order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.iter().cloned().collect()
    }

    /// True if both sets hold exactly the same elements.
    pub fn matches(&self, other: &Set<T>) -> bool {
        self.len() == other.len() && self.iter().all(|el| other.has(el))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True if the set holds nothing.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Duplicates in the source are collapsed silently.
impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T: Eq + Hash + fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, el) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", el)?;
        }
        Ok(())
    }
}
