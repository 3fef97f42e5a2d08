#![forbid(unsafe_code)]

//! Controlled/uncontrolled value arbitration.
//!
//! A [`ValueArbiter`] decides which of two candidate sources of truth governs
//! a component's displayed value: a value pushed by an external owner, or a
//! value the component keeps for itself.
//!
//! # Invariants
//!
//! 1. The mode is fixed at construction: [`ArbiterMode::Controlled`] iff an
//!    external value was supplied. `Some(false)` and `Some(vec![])` count as
//!    supplied.
//! 2. In controlled mode `current()` always equals the latest external value,
//!    whatever was passed to `set`.
//! 3. In uncontrolled mode `current()` equals the last value passed to `set`,
//!    or the seed value if `set` was never called.
//! 4. The listener fires on every `set`, in both modes, after the state has
//!    been updated.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | `set` while controlled | Owner drives the value | Value unchanged, listener still fires |
//! | External value appears/disappears | Owner switched modes | `warn!` + [`ModeConflict`], state untouched |

use core::fmt;
use std::rc::Rc;

/// Which source of truth governs an arbiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArbiterMode {
    /// The owner supplies the value on every render.
    Controlled,
    /// The component keeps its own value.
    Uncontrolled,
}

impl ArbiterMode {
    const fn from_presence(present: bool) -> Self {
        if present {
            Self::Controlled
        } else {
            Self::Uncontrolled
        }
    }
}

impl fmt::Display for ArbiterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Controlled => f.write_str("controlled"),
            Self::Uncontrolled => f.write_str("uncontrolled"),
        }
    }
}

/// An owner tried to switch an arbiter's mode after creation.
///
/// Non-fatal: the arbiter keeps its creation mode and its current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeConflict {
    /// Mode detected at construction.
    pub established: ArbiterMode,
    /// Mode implied by the rejected update.
    pub attempted: ArbiterMode,
}

impl fmt::Display for ModeConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value created {} cannot become {}; keeping {} mode",
            self.established, self.attempted, self.established
        )
    }
}

impl std::error::Error for ModeConflict {}

/// Dual-mode value holder.
///
/// ```
/// # use tickset_core::arbiter::ValueArbiter;
/// let mut free = ValueArbiter::new(false, None);
/// free.set(true);
/// assert!(*free.current());
///
/// let mut driven = ValueArbiter::new(false, Some(false));
/// driven.set(true);
/// assert!(!*driven.current());
/// ```
pub struct ValueArbiter<V> {
    external: Option<V>,
    internal: V,
    listener: Option<Rc<dyn Fn(&V)>>,
}

impl<V> ValueArbiter<V> {
    /// Create an arbiter seeded with `initial`.
    ///
    /// Supplying `external` makes the arbiter controlled for its whole life.
    #[must_use]
    pub fn new(initial: V, external: Option<V>) -> Self {
        Self {
            external,
            internal: initial,
            listener: None,
        }
    }

    /// Create an arbiter from the `value` / `default_value` prop pair.
    ///
    /// The internal seed is `default` when present, else `fallback`.
    #[must_use]
    pub fn with_default(fallback: V, default: Option<V>, external: Option<V>) -> Self {
        Self::new(default.unwrap_or(fallback), external)
    }

    /// Attach a listener fired on every `set`, in either mode.
    #[must_use]
    pub fn with_listener(mut self, listener: impl Fn(&V) + 'static) -> Self {
        self.listener = Some(Rc::new(listener));
        self
    }

    /// Mode detected at construction.
    #[must_use]
    pub fn mode(&self) -> ArbiterMode {
        ArbiterMode::from_presence(self.external.is_some())
    }

    /// Whether an external owner governs the value.
    #[must_use]
    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    /// The authoritative value.
    #[must_use]
    pub fn current(&self) -> &V {
        self.external.as_ref().unwrap_or(&self.internal)
    }

    /// Consume the arbiter, returning the authoritative value.
    #[must_use]
    pub fn into_current(self) -> V {
        self.external.unwrap_or(self.internal)
    }

    /// Request a new value.
    ///
    /// Returns `true` if `current()` now reflects `value`. In controlled mode
    /// the request is swallowed (the owner must push a new external value) but
    /// the listener still sees it.
    pub fn set(&mut self, value: V) -> bool {
        if self.external.is_some() {
            crate::trace!("arbiter write ignored: controlled");
            if let Some(listener) = &self.listener {
                listener(&value);
            }
            return false;
        }

        crate::trace!("arbiter write applied");
        self.internal = value;
        if let Some(listener) = &self.listener {
            listener(&self.internal);
        }
        true
    }

    /// Push the owner's external value for this render.
    ///
    /// A controlled arbiter accepts any `Some`; an uncontrolled one accepts
    /// `None`. Anything else is a mode switch, which is rejected.
    pub fn sync_external(&mut self, external: Option<V>) -> Result<(), ModeConflict> {
        let established = self.mode();
        match (established, external) {
            (ArbiterMode::Controlled, Some(value)) => {
                self.external = Some(value);
                Ok(())
            }
            (ArbiterMode::Uncontrolled, None) => Ok(()),
            (_, other) => {
                let conflict = ModeConflict {
                    established,
                    attempted: ArbiterMode::from_presence(other.is_some()),
                };
                crate::warn!(
                    established = %conflict.established,
                    attempted = %conflict.attempted,
                    "value arbiter mode cannot change after creation"
                );
                Err(conflict)
            }
        }
    }
}

impl<V: Default> Default for ValueArbiter<V> {
    fn default() -> Self {
        Self::new(V::default(), None)
    }
}

impl<V: fmt::Debug> fmt::Debug for ValueArbiter<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueArbiter")
            .field("mode", &self.mode())
            .field("current", self.current())
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}
