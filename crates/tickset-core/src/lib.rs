#![forbid(unsafe_code)]

//! Core: value arbitration, membership tracking, identifiers, and toggle events.

pub mod arbiter;
pub mod event;
pub mod identifier;
pub mod logging;
pub mod registry;

pub use arbiter::{ArbiterMode, ModeConflict, ValueArbiter};
pub use event::{Modifiers, ToggleEvent, ToggleSource};
pub use identifier::Identifier;
pub use registry::MembershipRegistry;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
