//! Deduplicated string set with hash-defined iteration order

use crate::hashcode;
use std::collections::BTreeSet;
use std::fmt;

/// Hash function used to order set members
pub type HashFn = fn(&str) -> u32;

/// Unordered, deduplicated set of strings.
///
/// Iteration is ordered by `(hash, value)`: ascending hash, with equal hashes
/// broken lexicographically. Two sets built from the same members with the same
/// hash function therefore always iterate identically, whatever the insertion order.
#[derive(Clone)]
pub struct StringSet {
    hasher: HashFn,
    items: BTreeSet<(u32, String)>,
}

impl StringSet {
    /// Create an empty set ordered by [`hashcode::string`]
    pub fn new() -> Self {
        Self::with_hasher(hashcode::string)
    }

    /// Create an empty set ordered by a caller-supplied hash
    pub fn with_hasher(hasher: HashFn) -> Self {
        Self {
            hasher,
            items: BTreeSet::new(),
        }
    }

    /// Insert a member. Returns `false` if it was already present.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        let code = (self.hasher)(&value);
        self.items.insert((code, value))
    }

    pub fn contains(&self, value: &str) -> bool {
        let code = (self.hasher)(value);
        self.items.contains(&(code, value.to_string()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate members in hash order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(_, v)| v.as_str())
    }

    /// Members in hash order
    pub fn to_vec(&self) -> Vec<String> {
        self.iter().map(String::from).collect()
    }
}

impl Default for StringSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for StringSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|v| other.contains(v))
    }
}

impl Eq for StringSet {}

impl fmt::Debug for StringSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<String> for StringSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = StringSet::new();
        for v in iter {
            set.insert(v);
        }
        set
    }
}

impl<'a> FromIterator<&'a str> for StringSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(String::from).collect()
    }
}

impl Extend<String> for StringSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for v in iter {
            self.insert(v);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deduplicates() {
        let mut set = StringSet::new();
        assert!(set.insert("sg-11111"));
        assert!(!set.insert("sg-11111"));
        assert_eq!(set.len(), 1);
        assert!(set.contains("sg-11111"));
        assert!(!set.contains("sg-22222"));
    }

    #[test]
    fn test_iterates_in_hash_order() {
        let set: StringSet = ["sg-11111", "foo/sg-22222"].into_iter().collect();
        assert_eq!(set.to_vec(), vec!["foo/sg-22222", "sg-11111"]);
    }

    #[test]
    fn test_order_independent_of_insertion() {
        let a: StringSet = ["a", "b", "c", "d"].into_iter().collect();
        let b: StringSet = ["d", "c", "b", "a", "c"].into_iter().collect();
        assert_eq!(a.to_vec(), b.to_vec());
        assert_eq!(a, b);
    }

    #[test]
    fn test_hash_collisions_break_lexicographically() {
        let mut set = StringSet::with_hasher(|_| 7);
        set.insert("zeta");
        set.insert("alpha");
        set.insert("mid");
        assert_eq!(set.to_vec(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_custom_hasher_controls_order() {
        let mut set = StringSet::with_hasher(|s| s.len() as u32);
        set.insert("ccc");
        set.insert("a");
        set.insert("bb");
        assert_eq!(set.to_vec(), vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn test_equality_ignores_hasher() {
        let a: StringSet = ["x", "y"].into_iter().collect();
        let mut b = StringSet::with_hasher(|s| s.len() as u32);
        b.insert("y");
        b.insert("x");
        assert_eq!(a, b);
    }
}
