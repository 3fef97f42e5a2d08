#![forbid(unsafe_code)]

//! Live membership tracking for one group.
//!
//! Members register their [`Identifier`] when they activate and unregister
//! when they deactivate. The group never adds or removes entries itself; it
//! only reads the registry to drop identifiers that no longer have a live
//! member before reporting its value to the owner.
//!
//! # Invariants
//!
//! 1. `register` and `unregister` are idempotent.
//! 2. Operations on distinct identifiers commute.
//! 3. After `unregister(id)` the id is absent, however many `register(id)`
//!    calls preceded it.
//! 4. `filter` keeps exactly `selected ∩ registry`, in `selected`'s order.

use std::collections::HashSet;

use crate::identifier::Identifier;

/// Set of identifiers with a live member, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MembershipRegistry {
    members: Vec<Identifier>,
}

impl MembershipRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id`. Returns `true` if it was not already present.
    pub fn register(&mut self, id: Identifier) -> bool {
        if self.members.contains(&id) {
            return false;
        }
        crate::debug!(id = %id, "member registered");
        self.members.push(id);
        true
    }

    /// Remove `id`. Returns `true` if it was present.
    pub fn unregister(&mut self, id: &Identifier) -> bool {
        let before = self.members.len();
        self.members.retain(|m| m != id);
        let removed = self.members.len() != before;
        if removed {
            crate::debug!(id = %id, "member unregistered");
        }
        removed
    }

    /// Whether `id` has a live member.
    #[must_use]
    pub fn contains(&self, id: &Identifier) -> bool {
        self.members.contains(id)
    }

    /// Number of live members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether no member is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Registered identifiers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Identifier> {
        self.members.iter()
    }

    /// Point-in-time copy of the registered set.
    #[must_use]
    pub fn snapshot(&self) -> HashSet<Identifier> {
        self.members.iter().cloned().collect()
    }

    /// Keep only the entries of `selected` that have a live member.
    ///
    /// Order and duplicates of `selected` are preserved.
    #[must_use]
    pub fn filter(&self, selected: &[Identifier]) -> Vec<Identifier> {
        selected
            .iter()
            .filter(|id| self.contains(id))
            .cloned()
            .collect()
    }
}
