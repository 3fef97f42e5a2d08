#![forbid(unsafe_code)]

//! tickset public facade crate.
//!
//! Re-exports the checkbox state machinery from the internal crates and
//! offers a prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use tickset_core::arbiter::{ArbiterMode, ModeConflict, ValueArbiter};
pub use tickset_core::event::{Modifiers, ToggleEvent, ToggleSource};
pub use tickset_core::identifier::{Identifier, ids};
pub use tickset_core::registry::MembershipRegistry;

// --- Widget re-exports -----------------------------------------------------

pub use tickset_widgets::{
    Checkbox, CheckboxGroup, CheckboxOption, CheckboxProps, CheckboxView, Direction, GroupContext,
    GroupListener, GroupProps, GroupView, MemberListener, Selection, SelectionStatus,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tickset callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An owner tried to switch a component between controlled and
    /// uncontrolled after creation.
    ModeConflict(ModeConflict),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModeConflict(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ModeConflict(err) => Some(err),
        }
    }
}

impl From<ModeConflict> for Error {
    fn from(err: ModeConflict) -> Self {
        Self::ModeConflict(err)
    }
}

/// Standard result type for tickset APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Checkbox, CheckboxGroup, CheckboxOption, CheckboxProps, Direction, Error, GroupProps,
        Identifier, Result, Selection, SelectionStatus, ToggleEvent,
    };

    pub use crate::{core, widgets};
}

pub use tickset_core as core;
pub use tickset_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use super::ids;

    fn push_owner_value(group: &CheckboxGroup, value: Vec<Identifier>) -> Result<()> {
        group.set_value(Some(value))?;
        Ok(())
    }

    #[test]
    fn mode_conflict_converts_into_facade_error() {
        let group = CheckboxGroup::new(GroupProps::new().default_value([1]));
        let err = push_owner_value(&group, ids([2])).unwrap_err();
        assert!(matches!(err, Error::ModeConflict(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn prelude_covers_group_round_trip() {
        let group = CheckboxGroup::new(GroupProps::new().options(["a", "b"]).value(["a"]));
        let mut members = group.mount_options();
        members[1].handle(&ToggleEvent::default());
        push_owner_value(&group, ids(["a", "b"])).unwrap();
        assert!(members.iter().all(Checkbox::checked));
        assert_eq!(
            SelectionStatus::classify(&group.reported(), group.options().len()),
            SelectionStatus::All
        );
    }
}
