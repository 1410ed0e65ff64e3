//! Per-round collision detection
//!
//! A [`CollisionRegistry`] records which item claimed which candidate name
//! during one escalation round. The first registrant claims a name; a second
//! registrant turns the name into a conflict for both of them and burns it
//! into the [`ReservedNames`] so it is never handed out unqualified.
//! A fresh registry is used for every round.

use crate::reserved::ReservedNames;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Claim {
    Owner(usize),
    Conflicted,
}

/// Claims made on candidate names during a single round
#[derive(Debug, Default)]
pub struct CollisionRegistry {
    claims: HashMap<String, Claim>,
}

impl CollisionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `name` as the candidate of item `ordinal`.
    ///
    /// Returns `true` if the name is in conflict, either because it is
    /// reserved or because another item registered it first. In the latter
    /// case the earlier owner is in conflict as well, see [`Self::is_conflicted`].
    pub fn register(&mut self, name: &str, ordinal: usize, reserved: &mut ReservedNames) -> bool {
        if reserved.contains(name) {
            self.claims.insert(name.to_string(), Claim::Conflicted);
            return true;
        }

        match self.claims.get_mut(name) {
            None => {
                self.claims.insert(name.to_string(), Claim::Owner(ordinal));
                false
            }
            Some(Claim::Owner(owner)) if *owner == ordinal => false,
            Some(claim) => {
                *claim = Claim::Conflicted;
                reserved.reserve(name);
                true
            }
        }
    }

    /// Whether `name` ended up in conflict during this round
    pub fn is_conflicted(&self, name: &str) -> bool {
        matches!(self.claims.get(name), Some(Claim::Conflicted))
    }
}
