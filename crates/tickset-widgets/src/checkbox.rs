#![forbid(unsafe_code)]

//! Checkbox member.
//!
//! A [`Checkbox`] is activated with [`CheckboxProps`] and, optionally, a
//! [`GroupContext`]. Without a context it is standalone: its checked state is
//! its own [`ValueArbiter`], controlled when `checked` is supplied and
//! uncontrolled otherwise. With a context it is grouped: it registers its
//! identifier immediately, its checked state is membership of that identifier
//! in the group's selected collection, and toggles are reported to the group.
//!
//! # Invariants
//!
//! 1. A grouped member is registered from activation until deactivation/drop.
//! 2. A grouped member never writes its local arbiter.
//! 3. Grouped toggles notify the group first, then the member's own listener.
//! 4. [`Checkbox::handle`] never dispatches for a disabled member.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Grouped member without identifier | Caller omitted `value` | `warn!`, not registered, shows unchecked |
//! | Duplicate identifiers in one group | Caller contract violation | Undetected; display is ambiguous |
//! | `checked` appears/disappears | Owner switched modes | [`ModeConflict`], mode kept |

use core::fmt;
use std::rc::Rc;

use tickset_core::{Identifier, ModeConflict, ToggleEvent, ValueArbiter};

use crate::context::GroupContext;
use crate::view::CheckboxView;

/// Member callback receiving the requested checked state.
pub type MemberListener = Rc<dyn Fn(bool, &ToggleEvent)>;

/// Construction props for a [`Checkbox`].
#[derive(Clone, Default)]
pub struct CheckboxProps {
    value: Option<Identifier>,
    checked: Option<bool>,
    default_checked: Option<bool>,
    disabled: Option<bool>,
    indeterminate: bool,
    error: bool,
    label: Option<String>,
    icon: Option<String>,
    on_change: Option<MemberListener>,
}

impl CheckboxProps {
    /// Empty props: standalone, uncontrolled, unchecked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier within a group.
    #[must_use]
    pub fn value(mut self, value: impl Into<Identifier>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Controlled checked state.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Initial checked state for uncontrolled use.
    #[must_use]
    pub fn default_checked(mut self, checked: bool) -> Self {
        self.default_checked = Some(checked);
        self
    }

    /// Explicit disabled flag; overrides a group default.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    /// Explicit disabled flag, or `None` to inherit the group default.
    #[must_use]
    pub fn disabled_opt(mut self, disabled: Option<bool>) -> Self {
        self.disabled = disabled;
        self
    }

    /// Partial-selection display hint.
    #[must_use]
    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    /// Error display hint.
    #[must_use]
    pub fn error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }

    /// Label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Custom check icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Called on every toggle with the requested state.
    #[must_use]
    pub fn on_change(mut self, f: impl Fn(bool, &ToggleEvent) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }
}

impl fmt::Debug for CheckboxProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckboxProps")
            .field("value", &self.value)
            .field("checked", &self.checked)
            .field("default_checked", &self.default_checked)
            .field("disabled", &self.disabled)
            .field("indeterminate", &self.indeterminate)
            .field("label", &self.label)
            .field("has_on_change", &self.on_change.is_some())
            .finish_non_exhaustive()
    }
}

/// One toggle control.
pub struct Checkbox {
    value: Option<Identifier>,
    checked: ValueArbiter<bool>,
    disabled: Option<bool>,
    indeterminate: bool,
    error: bool,
    label: Option<String>,
    icon: Option<String>,
    on_change: Option<MemberListener>,
    group: Option<GroupContext>,
    registered: bool,
}

impl Checkbox {
    /// Create a member. With `group`, the identifier is registered before
    /// this returns.
    #[must_use]
    pub fn activate(props: CheckboxProps, group: Option<&GroupContext>) -> Self {
        let mut checkbox = Self {
            checked: ValueArbiter::with_default(false, props.default_checked, props.checked),
            value: props.value,
            disabled: props.disabled,
            indeterminate: props.indeterminate,
            error: props.error,
            label: props.label,
            icon: props.icon,
            on_change: props.on_change,
            group: group.cloned(),
            registered: false,
        };
        checkbox.register();
        checkbox
    }

    /// Leave the group (if any) and discard state.
    pub fn deactivate(mut self) {
        self.unregister();
    }

    fn register(&mut self) {
        let Some(group) = &self.group else {
            return;
        };
        match &self.value {
            Some(id) => {
                group.register(id.clone());
                self.registered = true;
            }
            None => {
                tickset_core::warn!("grouped checkbox has no identifier; it will not be tracked");
            }
        }
    }

    fn unregister(&mut self) {
        if !self.registered {
            return;
        }
        if let (Some(group), Some(id)) = (&self.group, &self.value) {
            group.unregister(id);
        }
        self.registered = false;
    }

    /// Whether this member belongs to a group.
    #[must_use]
    pub fn is_grouped(&self) -> bool {
        self.group.is_some()
    }

    /// The group this member belongs to.
    #[must_use]
    pub fn group(&self) -> Option<&GroupContext> {
        self.group.as_ref()
    }

    /// Identifier within the group.
    #[must_use]
    pub fn value(&self) -> Option<&Identifier> {
        self.value.as_ref()
    }

    /// Displayed checked state.
    ///
    /// Grouped: whether the identifier is in the group's selected collection.
    /// Standalone: the local arbiter.
    #[must_use]
    pub fn checked(&self) -> bool {
        match &self.group {
            Some(group) => self.value.as_ref().is_some_and(|id| group.is_selected(id)),
            None => *self.checked.current(),
        }
    }

    /// Displayed disabled state.
    #[must_use]
    pub fn disabled(&self) -> bool {
        match (self.disabled, &self.group) {
            (Some(disabled), _) => disabled,
            (None, Some(group)) => group.disabled_default(),
            (None, None) => false,
        }
    }

    /// Partial-selection hint, as supplied.
    #[must_use]
    pub fn indeterminate(&self) -> bool {
        self.indeterminate
    }

    /// Error hint, as supplied.
    #[must_use]
    pub fn error(&self) -> bool {
        self.error
    }

    /// Label text.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether the local value is owner-driven. Irrelevant while grouped.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.checked.is_controlled()
    }

    /// Apply a user toggle requesting `next`.
    ///
    /// Assumes the interaction was already accepted; see [`Self::handle`].
    pub fn toggle(&mut self, next: bool, event: &ToggleEvent) {
        match (&self.group, &self.value) {
            (Some(group), Some(id)) => group.member_toggled(id, next, event),
            (Some(_), None) => {}
            (None, _) => {
                self.checked.set(next);
            }
        }
        if let Some(listener) = &self.on_change {
            listener(next, event);
        }
    }

    /// Dispatch a user interaction.
    ///
    /// Returns `false` without touching any state when the member is
    /// disabled; otherwise flips the displayed state and returns `true`.
    pub fn handle(&mut self, event: &ToggleEvent) -> bool {
        if self.disabled() {
            tickset_core::trace!("toggle rejected: disabled");
            return false;
        }
        let next = !self.checked();
        self.toggle(next, event);
        true
    }

    /// Push the owner's `checked` prop for this render.
    pub fn set_checked(&mut self, checked: Option<bool>) -> Result<(), ModeConflict> {
        self.checked.sync_external(checked)
    }

    /// Push the owner's `disabled` prop for this render.
    pub fn set_disabled(&mut self, disabled: Option<bool>) {
        self.disabled = disabled;
    }

    /// Push the owner's `indeterminate` prop for this render.
    pub fn set_indeterminate(&mut self, indeterminate: bool) {
        self.indeterminate = indeterminate;
    }

    /// Push the owner's `error` prop for this render.
    pub fn set_error(&mut self, error: bool) {
        self.error = error;
    }

    /// Change the identifier, moving the registration with it.
    pub fn set_value(&mut self, value: Option<Identifier>) {
        if value == self.value {
            return;
        }
        self.unregister();
        self.value = value;
        self.register();
    }

    /// Snapshot for the rendering layer.
    #[must_use]
    pub fn view(&self) -> CheckboxView {
        CheckboxView {
            value: self.value.clone(),
            label: self.label.clone(),
            icon: self.icon.clone(),
            checked: self.checked(),
            indeterminate: self.indeterminate,
            disabled: self.disabled(),
            error: self.error,
        }
    }
}

impl Drop for Checkbox {
    fn drop(&mut self) {
        self.unregister();
    }
}

impl fmt::Debug for Checkbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checkbox")
            .field("value", &self.value)
            .field("checked", &self.checked())
            .field("disabled", &self.disabled())
            .field("indeterminate", &self.indeterminate)
            .field("grouped", &self.is_grouped())
            .finish_non_exhaustive()
    }
}
