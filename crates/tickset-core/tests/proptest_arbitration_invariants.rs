#![forbid(unsafe_code)]

//! Property-based invariant tests for value arbitration and membership.
//!
//! 1. Controlled precedence: `current()` equals the external value whatever
//!    was `set`, including `false` / empty.
//! 2. Uncontrolled persistence: after `set(v)`, `current()` equals `v`.
//! 3. Registry idempotence: repeating `register` does not change the snapshot.
//! 4. Same-id ordering: unregister after any number of registers leaves the
//!    id absent.
//! 5. Distinct-id commutativity: registration order does not change content.
//! 6. Filter correctness: `filter(selected) == selected ∩ registry`, order kept.

use proptest::prelude::*;
use tickset_core::{Identifier, MembershipRegistry, ValueArbiter};

// ── Helpers ─────────────────────────────────────────────────────────────

fn id_strategy() -> impl Strategy<Value = Identifier> {
    prop_oneof![
        (0i64..16).prop_map(Identifier::Num),
        "[a-d]".prop_map(Identifier::Str),
    ]
}

fn ids_strategy() -> impl Strategy<Value = Vec<Identifier>> {
    prop::collection::vec(id_strategy(), 0..12)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Controlled precedence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn controlled_bool_ignores_writes(
        external in any::<bool>(),
        writes in prop::collection::vec(any::<bool>(), 0..8),
    ) {
        let mut arbiter = ValueArbiter::new(!external, Some(external));
        for w in writes {
            arbiter.set(w);
            prop_assert_eq!(*arbiter.current(), external);
        }
    }

    #[test]
    fn controlled_collection_ignores_writes(external in ids_strategy(), write in ids_strategy()) {
        let mut arbiter = ValueArbiter::new(Vec::new(), Some(external.clone()));
        arbiter.set(write);
        prop_assert_eq!(arbiter.current(), &external);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Uncontrolled persistence
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn uncontrolled_tracks_last_write(
        initial in ids_strategy(),
        writes in prop::collection::vec(ids_strategy(), 1..6),
    ) {
        let mut arbiter = ValueArbiter::new(initial, None);
        for w in writes {
            arbiter.set(w.clone());
            prop_assert_eq!(arbiter.current(), &w);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3–5. Registry lifecycle
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn register_twice_equals_once(id in id_strategy()) {
        let mut once = MembershipRegistry::new();
        once.register(id.clone());
        let mut twice = MembershipRegistry::new();
        twice.register(id.clone());
        twice.register(id);
        prop_assert_eq!(once.snapshot(), twice.snapshot());
    }

    #[test]
    fn unregister_wins_over_repeated_register(id in id_strategy(), times in 1usize..5) {
        let mut registry = MembershipRegistry::new();
        for _ in 0..times {
            registry.register(id.clone());
        }
        registry.unregister(&id);
        prop_assert!(!registry.contains(&id));
    }

    #[test]
    fn registration_order_does_not_change_content(mut members in ids_strategy()) {
        let mut forward = MembershipRegistry::new();
        for id in &members {
            forward.register(id.clone());
        }
        members.reverse();
        let mut backward = MembershipRegistry::new();
        for id in &members {
            backward.register(id.clone());
        }
        prop_assert_eq!(forward.snapshot(), backward.snapshot());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Filter correctness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn filter_is_ordered_intersection(selected in ids_strategy(), live in ids_strategy()) {
        let mut registry = MembershipRegistry::new();
        for id in &live {
            registry.register(id.clone());
        }
        let snapshot = registry.snapshot();
        let expected: Vec<Identifier> = selected
            .iter()
            .filter(|id| snapshot.contains(*id))
            .cloned()
            .collect();
        prop_assert_eq!(registry.filter(&selected), expected);
    }
}
