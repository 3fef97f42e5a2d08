#![forbid(unsafe_code)]

//! Checkbox group.
//!
//! A [`CheckboxGroup`] owns the selected collection (through a
//! [`ValueArbiter`]) and the registry of live members, and shares both with
//! its members through a [`GroupContext`]. Members are either supplied by the
//! caller (activated with [`CheckboxGroup::context`]) or built from the
//! `options` list with [`CheckboxGroup::mount_options`].
//!
//! The group keeps two views of its value:
//!
//! - **selected**: the raw arbiter value. It may carry identifiers whose
//!   member has not mounted yet or has gone away; members display against it.
//! - **reported**: selected restricted to live members. This is what the
//!   owner's listener receives, and what none/some/all classification
//!   (see [`SelectionStatus`](crate::selection::SelectionStatus)) must use.

use core::fmt;
use std::rc::Rc;

use tickset_core::{Identifier, MembershipRegistry, ModeConflict, ToggleEvent, ValueArbiter};

use crate::checkbox::{Checkbox, CheckboxProps};
use crate::context::{GroupContext, GroupListener, GroupState};
use crate::option::CheckboxOption;
use crate::view::{Direction, GroupView};

/// Construction props for a [`CheckboxGroup`].
#[derive(Clone, Default)]
pub struct GroupProps {
    value: Option<Vec<Identifier>>,
    default_value: Option<Vec<Identifier>>,
    disabled: bool,
    error: bool,
    direction: Direction,
    options: Vec<CheckboxOption>,
    on_change: Option<GroupListener>,
}

impl GroupProps {
    /// Empty props: uncontrolled, nothing selected, no options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Controlled selected collection.
    #[must_use]
    pub fn value<I, T>(mut self, value: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Identifier>,
    {
        self.value = Some(value.into_iter().map(Into::into).collect());
        self
    }

    /// Initial selected collection for uncontrolled use.
    #[must_use]
    pub fn default_value<I, T>(mut self, value: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Identifier>,
    {
        self.default_value = Some(value.into_iter().map(Into::into).collect());
        self
    }

    /// Disabled default for members without their own flag.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Error display hint.
    #[must_use]
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Member flow.
    #[must_use]
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Data-driven option list.
    #[must_use]
    pub fn options<I, T>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CheckboxOption>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Called on every member toggle with the reported collection.
    #[must_use]
    pub fn on_change(mut self, f: impl Fn(&[Identifier], &ToggleEvent) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }
}

impl fmt::Debug for GroupProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupProps")
            .field("value", &self.value)
            .field("default_value", &self.default_value)
            .field("disabled", &self.disabled)
            .field("direction", &self.direction)
            .field("options", &self.options.len())
            .field("has_on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

/// Aggregate selection over a dynamic set of members.
pub struct CheckboxGroup {
    context: GroupContext,
    options: Vec<CheckboxOption>,
}

impl CheckboxGroup {
    /// Create a group with an empty registry.
    #[must_use]
    pub fn new(props: GroupProps) -> Self {
        let state = GroupState {
            value: ValueArbiter::with_default(Vec::new(), props.default_value, props.value),
            registry: MembershipRegistry::new(),
            disabled: props.disabled,
            error: props.error,
            direction: props.direction,
            on_change: props.on_change,
        };
        Self {
            context: GroupContext::new(state),
            options: props.options,
        }
    }

    /// Handle to pass to member activation.
    #[must_use]
    pub fn context(&self) -> GroupContext {
        self.context.clone()
    }

    /// Raw selected collection.
    #[must_use]
    pub fn selected(&self) -> Vec<Identifier> {
        self.context.selected()
    }

    /// Selected collection restricted to live members.
    #[must_use]
    pub fn reported(&self) -> Vec<Identifier> {
        self.context.reported()
    }

    /// Whether the selected collection is owner-driven.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.context.with_state(|s| s.value.is_controlled())
    }

    /// Disabled default for members.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.context.disabled_default()
    }

    /// Error display hint.
    #[must_use]
    pub fn error(&self) -> bool {
        self.context.with_state(|s| s.error)
    }

    /// Member flow.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.context.with_state(|s| s.direction)
    }

    /// Data-driven option list.
    #[must_use]
    pub fn options(&self) -> &[CheckboxOption] {
        &self.options
    }

    /// Apply a member toggle. See [`GroupContext::member_toggled`].
    pub fn member_toggled(&self, id: &Identifier, checked: bool, event: &ToggleEvent) {
        self.context.member_toggled(id, checked, event);
    }

    /// Push the owner's `value` prop for this render.
    pub fn set_value(&self, value: Option<Vec<Identifier>>) -> Result<(), ModeConflict> {
        self.context.sync_value(value)
    }

    /// Push the owner's `disabled` prop for this render.
    pub fn set_disabled(&self, disabled: bool) {
        self.context.with_state_mut(|s| s.disabled = disabled);
    }

    /// Push the owner's `error` prop for this render.
    pub fn set_error(&self, error: bool) {
        self.context.with_state_mut(|s| s.error = error);
    }

    /// Push the owner's `direction` prop for this render.
    pub fn set_direction(&self, direction: Direction) {
        self.context.with_state_mut(|s| s.direction = direction);
    }

    /// Replace the owner's listener.
    pub fn set_on_change(&self, f: impl Fn(&[Identifier], &ToggleEvent) + 'static) {
        let listener: GroupListener = Rc::new(f);
        // The old listener may own members whose drop unregisters them.
        let previous = self.context.with_state_mut(|s| s.on_change.replace(listener));
        drop(previous);
    }

    /// Replace the option list. Members already mounted are unaffected.
    pub fn set_options(&mut self, options: Vec<CheckboxOption>) {
        self.options = options;
    }

    /// Activate one member per option, in option order.
    ///
    /// A disabled option is disabled regardless of the group default; other
    /// options follow the group default.
    #[must_use]
    pub fn mount_options(&self) -> Vec<Checkbox> {
        self.options
            .iter()
            .map(|opt| {
                let mut props = CheckboxProps::new()
                    .value(opt.value.clone())
                    .label(opt.label.clone())
                    .disabled_opt(opt.disabled.then_some(true));
                if let Some(icon) = &opt.icon {
                    props = props.icon(icon.clone());
                }
                Checkbox::activate(props, Some(&self.context))
            })
            .collect()
    }

    /// Snapshot for the rendering layer.
    #[must_use]
    pub fn view(&self, members: &[Checkbox]) -> GroupView {
        let (direction, disabled, error) = self
            .context
            .with_state(|s| (s.direction, s.disabled, s.error));
        GroupView {
            direction,
            disabled,
            error,
            items: members.iter().map(Checkbox::view).collect(),
        }
    }
}

impl fmt::Debug for CheckboxGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckboxGroup")
            .field("context", &self.context)
            .field("options", &self.options.len())
            .finish()
    }
}
