//! The set of names that can no longer be handed out

use std::collections::HashSet;

/// Names forbidden for reuse.
///
/// Seeded from the caller (e.g. methods already present in the target class)
/// and grown during a run as names are fixated or burned by a collision.
/// Nothing is ever removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservedNames {
    names: HashSet<String>,
}

impl ReservedNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Reserve a name. Returns `false` if it was already reserved.
    pub fn reserve(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ReservedNames {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for ReservedNames {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.names.extend(iter.into_iter().map(Into::into));
    }
}
