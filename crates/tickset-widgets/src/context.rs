#![forbid(unsafe_code)]

//! Shared group state handed to members.
//!
//! A [`GroupContext`] is a cheap, clonable handle onto one group's state. The
//! group creates it; each member receives it at activation and keeps it for
//! its lifetime. Members read the selected collection and the disabled
//! default through it, register/unregister their identifier, and report
//! toggles back.
//!
//! # Invariants
//!
//! 1. The registry is only mutated through `register` / `unregister`, which
//!    members call from their lifecycle.
//! 2. `member_toggled` updates the arbiter before the owner's listener runs.
//! 3. No `RefCell` borrow is held while a listener runs, so listeners may
//!    query or update the group.
//!
//! The state is `Rc<RefCell<..>>`: one group lives on one thread.

use core::fmt;
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use tickset_core::{Identifier, MembershipRegistry, ModeConflict, ToggleEvent, ValueArbiter};

use crate::selection::apply_membership;
use crate::view::Direction;

/// Owner callback receiving the registry-filtered collection.
pub type GroupListener = Rc<dyn Fn(&[Identifier], &ToggleEvent)>;

pub(crate) struct GroupState {
    pub(crate) value: ValueArbiter<Vec<Identifier>>,
    pub(crate) registry: MembershipRegistry,
    pub(crate) disabled: bool,
    pub(crate) error: bool,
    pub(crate) direction: Direction,
    pub(crate) on_change: Option<GroupListener>,
}

/// Handle onto one group's shared state.
///
/// Owners can read through the handle but cannot edit the registry; only
/// member activation and deactivation do that:
///
/// ```compile_fail
/// use tickset_widgets::{CheckboxGroup, GroupProps};
///
/// let group = CheckboxGroup::new(GroupProps::new());
/// group.context().unregister(&1.into());
/// ```
#[derive(Clone)]
pub struct GroupContext {
    state: Rc<RefCell<GroupState>>,
}

impl GroupContext {
    pub(crate) fn new(state: GroupState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub(crate) fn with_state<R>(&self, f: impl FnOnce(&GroupState) -> R) -> R {
        f(&self.state.borrow())
    }

    pub(crate) fn with_state_mut<R>(&self, f: impl FnOnce(&mut GroupState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    /// Raw selected collection, including identifiers with no live member.
    #[must_use]
    pub fn selected(&self) -> Vec<Identifier> {
        self.with_state(|s| s.value.current().clone())
    }

    /// Whether `id` is in the raw selected collection.
    #[must_use]
    pub fn is_selected(&self, id: &Identifier) -> bool {
        self.with_state(|s| s.value.current().contains(id))
    }

    /// Selected collection restricted to identifiers with a live member.
    #[must_use]
    pub fn reported(&self) -> Vec<Identifier> {
        self.with_state(|s| s.registry.filter(s.value.current()))
    }

    /// Disabled flag applied to members that do not set their own.
    #[must_use]
    pub fn disabled_default(&self) -> bool {
        self.with_state(|s| s.disabled)
    }

    /// Snapshot of identifiers with a live member.
    #[must_use]
    pub fn members(&self) -> HashSet<Identifier> {
        self.with_state(|s| s.registry.snapshot())
    }

    /// Number of live members.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.with_state(|s| s.registry.len())
    }

    /// Record a live member. Called by member activation.
    pub(crate) fn register(&self, id: Identifier) -> bool {
        self.with_state_mut(|s| s.registry.register(id))
    }

    /// Forget a member. Called by member deactivation.
    pub(crate) fn unregister(&self, id: &Identifier) -> bool {
        self.with_state_mut(|s| s.registry.unregister(id))
    }

    /// A member was toggled by the user.
    ///
    /// Adds or removes `id` (appending on add, keeping relative order on
    /// removal), writes the result to the arbiter, then notifies the owner
    /// with the registry-filtered collection.
    pub fn member_toggled(&self, id: &Identifier, checked: bool, event: &ToggleEvent) {
        let span = tickset_core::debug_span!("member_toggled", id = %id, checked = checked);
        let _guard = span.enter();

        let (reported, listener) = self.with_state_mut(|s| {
            let mut next = s.value.current().clone();
            apply_membership(&mut next, std::slice::from_ref(id), checked);
            s.value.set(next.clone());
            (s.registry.filter(&next), s.on_change.clone())
        });

        tickset_core::debug!(reported = reported.len(), "group value changed");
        if let Some(listener) = listener {
            listener(&reported, event);
        }
    }

    pub(crate) fn sync_value(&self, value: Option<Vec<Identifier>>) -> Result<(), ModeConflict> {
        self.with_state_mut(|s| s.value.sync_external(value))
    }

    /// Whether two handles point at the same group.
    #[must_use]
    pub fn same_group(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for GroupContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("GroupContext")
            .field("value", &state.value)
            .field("registry", &state.registry)
            .field("disabled", &state.disabled)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tickset_core::identifier::ids;

    fn context(selected: Vec<Identifier>) -> GroupContext {
        GroupContext::new(GroupState {
            value: ValueArbiter::new(selected, None),
            registry: MembershipRegistry::new(),
            disabled: false,
            error: false,
            direction: Direction::default(),
            on_change: None,
        })
    }

    #[test]
    fn toggle_on_appends() {
        let ctx = context(ids([1, 0]));
        ctx.member_toggled(&2.into(), true, &ToggleEvent::default());
        assert_eq!(ctx.selected(), ids([1, 0, 2]));
    }

    #[test]
    fn toggle_off_keeps_relative_order() {
        let ctx = context(ids([3, 1, 2]));
        ctx.member_toggled(&1.into(), false, &ToggleEvent::default());
        assert_eq!(ctx.selected(), ids([3, 2]));
    }

    #[test]
    fn toggle_off_absent_id_is_noop() {
        let ctx = context(ids([0, 1]));
        ctx.member_toggled(&9.into(), false, &ToggleEvent::default());
        assert_eq!(ctx.selected(), ids([0, 1]));
    }

    #[test]
    fn reported_excludes_unregistered() {
        let ctx = context(ids([0, 5]));
        ctx.register(0.into());
        assert_eq!(ctx.reported(), ids([0]));
        assert_eq!(ctx.selected(), ids([0, 5]));
    }

    #[test]
    fn listener_may_query_group() {
        let ctx = context(Vec::new());
        ctx.register(4.into());
        let observed = Rc::new(Cell::new(0));
        let probe = ctx.clone();
        let seen = Rc::clone(&observed);
        let listener: GroupListener = Rc::new(move |reported: &[Identifier], _: &ToggleEvent| {
            assert_eq!(probe.selected(), reported.to_vec());
            seen.set(seen.get() + 1);
        });
        ctx.with_state_mut(|s| s.on_change = Some(listener));
        ctx.member_toggled(&4.into(), true, &ToggleEvent::default());
        assert_eq!(observed.get(), 1);
    }

    #[test]
    fn clones_share_state() {
        let a = context(Vec::new());
        let b = a.clone();
        b.register("x".into());
        assert!(a.same_group(&b));
        assert_eq!(a.member_count(), 1);
    }
}
