#![forbid(unsafe_code)]

//! Select-all bookkeeping over a known option list.
//!
//! Groups only guarantee that their reported collection contains live
//! options. Classifying that collection as none / some / all selected needs
//! the full option list, which only the caller knows. [`Selection`] keeps
//! both lists and answers those questions; [`SelectionStatus::classify`] does
//! the same for a group's reported value.

use tickset_core::Identifier;

/// Add (append, skipping present ids) or remove `ids` from `selected`.
///
/// Removal keeps the relative order of the remaining entries.
pub fn apply_membership(selected: &mut Vec<Identifier>, ids: &[Identifier], checked: bool) {
    if checked {
        for id in ids {
            if !selected.contains(id) {
                selected.push(id.clone());
            }
        }
    } else {
        selected.retain(|v| !ids.contains(v));
    }
}

/// Aggregate state of a selection against its option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionStatus {
    /// Nothing selected (or no options at all).
    #[default]
    None,
    /// Some but not all options selected.
    Partial,
    /// Every option selected.
    All,
}

impl SelectionStatus {
    /// Classify a reported collection against the number of known options.
    ///
    /// `reported` must already be restricted to live options, as a group's
    /// reported value is.
    #[must_use]
    pub fn classify(reported: &[Identifier], total: usize) -> Self {
        match reported.len() {
            0 => Self::None,
            _ if total == 0 => Self::None,
            n if n >= total => Self::All,
            _ => Self::Partial,
        }
    }

    /// Display hint for a "select all" checkbox.
    #[must_use]
    pub const fn is_indeterminate(self) -> bool {
        matches!(self, Self::Partial)
    }

    /// Checked state for a "select all" checkbox.
    #[must_use]
    pub const fn is_all(self) -> bool {
        matches!(self, Self::All)
    }
}

/// Selected subset of a known option list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    values: Vec<Identifier>,
    selected: Vec<Identifier>,
}

impl Selection {
    /// Track `values`, starting with `default_selected`.
    #[must_use]
    pub fn new(values: Vec<Identifier>, default_selected: Vec<Identifier>) -> Self {
        Self {
            values,
            selected: default_selected,
        }
    }

    /// The known option list.
    #[must_use]
    pub fn values(&self) -> &[Identifier] {
        &self.values
    }

    /// Replace the option list. The selection is kept as is.
    pub fn set_values(&mut self, values: Vec<Identifier>) {
        self.values = values;
    }

    /// Current selection.
    #[must_use]
    pub fn selected(&self) -> &[Identifier] {
        &self.selected
    }

    /// Replace the selection.
    pub fn set_selected(&mut self, selected: Vec<Identifier>) {
        self.selected = selected;
    }

    /// Whether `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &Identifier) -> bool {
        self.selected.contains(id)
    }

    /// Select or unselect `ids`.
    pub fn set_value_selected(&mut self, ids: &[Identifier], selected: bool) {
        apply_membership(&mut self.selected, ids, selected);
    }

    /// Select every known option.
    pub fn select_all(&mut self) {
        apply_membership(&mut self.selected, &self.values, true);
    }

    /// Unselect every known option.
    pub fn unselect_all(&mut self) {
        apply_membership(&mut self.selected, &self.values, false);
    }

    /// Flip one option, or flip all when `id` is `None`.
    pub fn toggle(&mut self, id: Option<&Identifier>) {
        match id {
            Some(id) => {
                let next = !self.is_selected(id);
                self.set_value_selected(std::slice::from_ref(id), next);
            }
            None if self.is_all_selected() => self.unselect_all(),
            None => self.select_all(),
        }
    }

    /// Every known option is selected (false for an empty option list).
    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        !self.values.is_empty() && self.values.iter().all(|v| self.is_selected(v))
    }

    /// Some, but not all, known options are selected.
    #[must_use]
    pub fn is_partial_selected(&self) -> bool {
        self.values.iter().any(|v| self.is_selected(v)) && !self.is_all_selected()
    }

    /// Aggregate status.
    #[must_use]
    pub fn status(&self) -> SelectionStatus {
        if self.is_all_selected() {
            SelectionStatus::All
        } else if self.is_partial_selected() {
            SelectionStatus::Partial
        } else {
            SelectionStatus::None
        }
    }
}
