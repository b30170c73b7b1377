//! Membership tests for the caller-owned sets of known names.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// A set of known projection or overlay names.
///
/// The parser only asks whether a name is a member; what makes a name valid is up to the caller.
pub trait NameSet {
    fn contains_name(&self, name: &str) -> bool;
}

impl<S, H> NameSet for HashSet<S, H>
where
    S: Borrow<str> + Hash + Eq,
    H: BuildHasher,
{
    fn contains_name(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<S> NameSet for BTreeSet<S>
where
    S: Borrow<str> + Ord,
{
    fn contains_name(&self, name: &str) -> bool {
        self.contains(name)
    }
}

impl<S: AsRef<str>> NameSet for [S] {
    fn contains_name(&self, name: &str) -> bool {
        self.iter().any(|s| s.as_ref() == name)
    }
}

impl<S: AsRef<str>, const N: usize> NameSet for [S; N] {
    fn contains_name(&self, name: &str) -> bool {
        self.as_slice().contains_name(name)
    }
}

impl<S: AsRef<str>> NameSet for Vec<S> {
    fn contains_name(&self, name: &str) -> bool {
        self.as_slice().contains_name(name)
    }
}
