#![forbid(unsafe_code)]

//! Toggle interaction events.
//!
//! A [`ToggleEvent`] is the originating interaction handed to every change
//! notification. It is opaque to the state machinery: members and groups pass
//! it through to listeners unchanged.
//!
//! # Design Notes
//!
//! - Pointer coordinates are 0-indexed cells relative to the control
//! - `Programmatic` marks toggles issued by code rather than user input
//! - `Modifiers` use bitflags for easy combination

use bitflags::bitflags;

/// The interaction that produced a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleEvent {
    /// Where the toggle came from.
    pub source: ToggleSource,

    /// Modifier keys held during the interaction.
    pub modifiers: Modifiers,
}

impl ToggleEvent {
    /// Create an event with no modifiers.
    #[must_use]
    pub const fn new(source: ToggleSource) -> Self {
        Self {
            source,
            modifiers: Modifiers::NONE,
        }
    }

    /// A pointer click at `(x, y)`.
    #[must_use]
    pub const fn click(x: u16, y: u16) -> Self {
        Self::new(ToggleSource::Pointer { x, y })
    }

    /// A key press (usually space).
    #[must_use]
    pub const fn key(c: char) -> Self {
        Self::new(ToggleSource::Key(c))
    }

    /// A toggle issued by code.
    #[must_use]
    pub const fn programmatic() -> Self {
        Self::new(ToggleSource::Programmatic)
    }

    /// Create an event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Whether the event came from direct user input.
    #[must_use]
    pub const fn is_user(&self) -> bool {
        !matches!(self.source, ToggleSource::Programmatic)
    }
}

impl Default for ToggleEvent {
    fn default() -> Self {
        Self::programmatic()
    }
}

/// Origin of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleSource {
    /// Mouse or touch activation.
    Pointer {
        /// Column within the control.
        x: u16,
        /// Row within the control.
        y: u16,
    },
    /// Keyboard activation.
    Key(char),
    /// Issued by code.
    Programmatic,
}

bitflags! {
    /// Modifier keys that can be held during a toggle.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
        /// Super/Meta/Command key.
        const SUPER = 0b1000;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}
