//! Round-by-round tie breaking
//!
//! An [`Escalation`] holds the working state of one naming run over a batch of
//! items: the names fixated so far and the ordinals still in conflict. Each
//! call to [`Escalation::round`] applies one [`NamingStrategy`] to every
//! unresolved item, fixates the names claimed by exactly one item and carries
//! everything else to the next round. [`Escalation::finish`] settles the rest
//! with a strictly increasing numeric suffix, so a run always terminates.
//!
//! Items are visited in ordinal order. Colliding items always move on
//! together; no item keeps a contested name because it came first.

use crate::registry::CollisionRegistry;
use crate::reserved::ReservedNames;
use crate::strategy::NamingStrategy;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, trace};

/// What a single round did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundOutcome {
    /// Items that received their final name this round
    pub fixated: usize,
    /// Items whose candidate collided this round
    pub collided: usize,
    /// Items the strategy did not apply to
    pub skipped: usize,
}

/// Working state of one naming run over a batch of items
pub struct Escalation<'a, I> {
    items: &'a [I],
    assigned: Vec<Option<String>>,
    unresolved: BTreeSet<usize>,
    rounds: usize,
}

impl<'a, I> Escalation<'a, I> {
    pub fn new(items: &'a [I]) -> Self {
        Self {
            items,
            assigned: vec![None; items.len()],
            unresolved: (0..items.len()).collect(),
            rounds: 0,
        }
    }

    /// Whether every item has its final name
    pub fn is_settled(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Number of rounds run so far, not counting [`Self::finish`]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Unresolved items in ordinal order
    pub fn unresolved(&self) -> impl Iterator<Item = (usize, &'a I)> + '_ {
        let items = self.items;
        self.unresolved.iter().map(move |&ordinal| (ordinal, &items[ordinal]))
    }

    /// Final name of an item, if fixated
    pub fn assigned(&self, ordinal: usize) -> Option<&str> {
        self.assigned.get(ordinal).and_then(|name| name.as_deref())
    }

    /// Run one escalation round with `strategy`.
    pub fn round<S>(&mut self, strategy: &S, reserved: &mut ReservedNames) -> RoundOutcome
    where
        S: NamingStrategy<I> + ?Sized,
    {
        let mut outcome = RoundOutcome::default();
        if self.unresolved.is_empty() {
            return outcome;
        }
        self.rounds += 1;

        let mut registry = CollisionRegistry::new();
        let mut candidates = BTreeMap::new();

        for &ordinal in &self.unresolved {
            match strategy.candidate(&self.items[ordinal]) {
                Some(name) => {
                    registry.register(&name, ordinal, reserved);
                    candidates.insert(ordinal, name);
                }
                None => outcome.skipped += 1,
            }
        }

        for (ordinal, name) in candidates {
            if registry.is_conflicted(&name) {
                trace!(ordinal, name = %name, "Candidate collided");
                outcome.collided += 1;
                continue;
            }
            self.fixate(ordinal, name, reserved);
            outcome.fixated += 1;
        }

        debug!(
            round = self.rounds,
            strategy = strategy.label(),
            fixated = outcome.fixated,
            collided = outcome.collided,
            skipped = outcome.skipped,
            unresolved = self.unresolved.len(),
            "Escalation round complete"
        );

        outcome
    }

    /// Settle every remaining item with `base(item) + "_" + n`.
    ///
    /// `n` starts at `start` and increases per distinct base; values whose
    /// name is already reserved are skipped. Returns the names index-aligned
    /// with the input items.
    pub fn finish<F>(mut self, base: F, start: u32, reserved: &mut ReservedNames) -> Vec<String>
    where
        F: Fn(&I) -> String,
    {
        if !self.unresolved.is_empty() {
            let pending = std::mem::take(&mut self.unresolved);
            debug!(remaining = pending.len(), "Falling back to numeric suffixes");

            let mut counters: HashMap<String, u64> = HashMap::new();
            for ordinal in pending {
                let base = base(&self.items[ordinal]);
                let next = counters.entry(base.clone()).or_insert(u64::from(start));
                let name = loop {
                    let candidate = format!("{}_{}", base, next);
                    *next += 1;
                    if !reserved.contains(&candidate) {
                        break candidate;
                    }
                };
                self.fixate(ordinal, name, reserved);
            }
        }

        debug_assert!(self.assigned.iter().all(Option::is_some));
        self.assigned.into_iter().flatten().collect()
    }

    fn fixate(&mut self, ordinal: usize, name: String, reserved: &mut ReservedNames) {
        trace!(ordinal, name = %name, "Fixated name");
        reserved.reserve(name.clone());
        self.assigned[ordinal] = Some(name);
        self.unresolved.remove(&ordinal);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Identity;

    impl NamingStrategy<&str> for Identity {
        fn label(&self) -> &'static str {
            "identity"
        }

        fn candidate(&self, item: &&str) -> Option<String> {
            Some(item.to_string())
        }
    }

    /// Only applies to items longer than one character
    struct Doubled;

    impl NamingStrategy<&str> for Doubled {
        fn label(&self) -> &'static str {
            "doubled"
        }

        fn candidate(&self, item: &&str) -> Option<String> {
            (item.len() > 1).then(|| format!("{item}{item}"))
        }
    }

    #[test]
    fn test_unique_names_fixate_in_first_round() {
        let items = ["a", "b", "c"];
        let mut reserved = ReservedNames::new();
        let mut escalation = Escalation::new(&items);

        let outcome = escalation.round(&Identity, &mut reserved);
        assert_eq!(
            outcome,
            RoundOutcome {
                fixated: 3,
                collided: 0,
                skipped: 0
            }
        );
        assert!(escalation.is_settled());
        assert_eq!(escalation.finish(|i| i.to_string(), 1, &mut reserved), ["a", "b", "c"]);
        assert!(reserved.contains("b"));
    }

    #[test]
    fn test_colliding_items_move_on_together() {
        let items = ["ab", "ab", "c"];
        let mut reserved = ReservedNames::new();
        let mut escalation = Escalation::new(&items);

        let outcome = escalation.round(&Identity, &mut reserved);
        assert_eq!(outcome.fixated, 1);
        assert_eq!(outcome.collided, 2);
        assert_eq!(escalation.assigned(0), None);
        assert_eq!(escalation.assigned(1), None);
        assert_eq!(escalation.assigned(2), Some("c"));

        let unresolved: Vec<usize> = escalation.unresolved().map(|(ordinal, _)| ordinal).collect();
        assert_eq!(unresolved, vec![0, 1]);
    }

    #[test]
    fn test_inapplicable_strategy_carries_items() {
        let items = ["x", "x", "yy"];
        let mut reserved = ReservedNames::new();
        let mut escalation = Escalation::new(&items);

        escalation.round(&Identity, &mut reserved);
        let outcome = escalation.round(&Doubled, &mut reserved);
        assert_eq!(outcome.skipped, 2);
        assert_eq!(outcome.fixated, 0);
        assert_eq!(escalation.rounds(), 2);

        let names = escalation.finish(|i| i.to_string(), 1, &mut reserved);
        assert_eq!(names, ["x_1", "x_2", "yy"]);
    }

    #[test]
    fn test_finish_skips_reserved_suffixes() {
        let items = ["a", "a"];
        let mut reserved: ReservedNames = ["a_1", "a_3"].into_iter().collect();
        let mut escalation = Escalation::new(&items);

        escalation.round(&Identity, &mut reserved);
        let names = escalation.finish(|i| i.to_string(), 1, &mut reserved);
        assert_eq!(names, ["a_2", "a_4"]);
    }

    #[test]
    fn test_round_on_settled_escalation_is_noop() {
        let items: [&str; 0] = [];
        let mut reserved = ReservedNames::new();
        let mut escalation = Escalation::new(&items);

        assert_eq!(escalation.round(&Identity, &mut reserved), RoundOutcome::default());
        assert_eq!(escalation.rounds(), 0);
        assert!(escalation.finish(|i| i.to_string(), 1, &mut reserved).is_empty());
    }
}
