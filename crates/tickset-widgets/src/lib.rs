#![forbid(unsafe_code)]

//! Checkbox widgets for tickset.
//!
//! A [`Checkbox`](checkbox::Checkbox) is either standalone, driven by its own
//! [`ValueArbiter`](tickset_core::ValueArbiter), or a member of a
//! [`CheckboxGroup`](group::CheckboxGroup), in which case its checked state is
//! membership of its identifier in the group's selected collection.
//!
//! The group shares its state with members through an explicit
//! [`GroupContext`](context::GroupContext) handle passed at activation.

pub mod checkbox;
pub mod context;
pub mod group;
pub mod option;
pub mod selection;
pub mod view;

pub use checkbox::{Checkbox, CheckboxProps, MemberListener};
pub use context::{GroupContext, GroupListener};
pub use group::{CheckboxGroup, GroupProps};
pub use option::CheckboxOption;
pub use selection::{Selection, SelectionStatus};
pub use view::{CheckboxView, Direction, GroupView};
