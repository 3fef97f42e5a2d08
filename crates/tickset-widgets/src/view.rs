#![forbid(unsafe_code)]

//! Render snapshots.
//!
//! Plain values a rendering layer reads to draw checkboxes. Nothing here
//! lays out or styles anything; [`CheckboxView::render_line`] and
//! [`GroupView::render_lines`] give a textual form for headless use.

use tickset_core::Identifier;

/// Flow of a group's members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Members side by side.
    #[default]
    Horizontal,
    /// One member per row.
    Vertical,
}

/// What one checkbox should display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckboxView {
    /// Member identifier, if any.
    pub value: Option<Identifier>,
    /// Label text.
    pub label: Option<String>,
    /// Custom check icon name.
    pub icon: Option<String>,
    /// Resolved checked state.
    pub checked: bool,
    /// Partial-selection hint.
    pub indeterminate: bool,
    /// Effective disabled flag.
    pub disabled: bool,
    /// Error styling hint.
    pub error: bool,
}

impl CheckboxView {
    /// Three-cell indicator. Indeterminate wins over checked.
    #[must_use]
    pub const fn indicator(&self) -> &'static str {
        if self.indeterminate {
            "[-]"
        } else if self.checked {
            "[x]"
        } else {
            "[ ]"
        }
    }

    /// The hover highlight is off for checked, disabled or indeterminate boxes.
    #[must_use]
    pub const fn hover_suppressed(&self) -> bool {
        self.checked || self.disabled || self.indeterminate
    }

    /// Indicator followed by the label, if any.
    #[must_use]
    pub fn render_line(&self) -> String {
        match &self.label {
            Some(label) if !label.is_empty() => format!("{} {label}", self.indicator()),
            _ => self.indicator().to_owned(),
        }
    }
}

/// What a group should display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupView {
    /// Member flow.
    pub direction: Direction,
    /// Group disabled default.
    pub disabled: bool,
    /// Error styling hint.
    pub error: bool,
    /// One entry per member, in the order given.
    pub items: Vec<CheckboxView>,
}

impl GroupView {
    /// Text rows: one row for horizontal groups, one per item for vertical.
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        let lines = self.items.iter().map(CheckboxView::render_line);
        match self.direction {
            Direction::Horizontal => {
                if self.items.is_empty() {
                    Vec::new()
                } else {
                    vec![lines.collect::<Vec<_>>().join("  ")]
                }
            }
            Direction::Vertical => lines.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(label: &str, checked: bool) -> CheckboxView {
        CheckboxView {
            label: Some(label.to_owned()),
            checked,
            ..CheckboxView::default()
        }
    }

    #[test]
    fn indicator_states() {
        let mut view = CheckboxView::default();
        assert_eq!(view.indicator(), "[ ]");
        view.checked = true;
        assert_eq!(view.indicator(), "[x]");
        view.indeterminate = true;
        assert_eq!(view.indicator(), "[-]");
    }

    #[test]
    fn hover_suppressed_when_any_flag_set() {
        assert!(!CheckboxView::default().hover_suppressed());
        let disabled = CheckboxView {
            disabled: true,
            ..CheckboxView::default()
        };
        assert!(disabled.hover_suppressed());
    }

    #[test]
    fn render_line_omits_empty_label() {
        assert_eq!(item("Apple", true).render_line(), "[x] Apple");
        assert_eq!(item("", false).render_line(), "[ ]");
    }

    #[test]
    fn horizontal_group_is_one_row() {
        let view = GroupView {
            items: vec![item("A", true), item("B", false)],
            ..GroupView::default()
        };
        assert_eq!(view.render_lines(), vec!["[x] A  [ ] B".to_owned()]);
    }

    #[test]
    fn vertical_group_is_one_row_per_item() {
        let view = GroupView {
            direction: Direction::Vertical,
            items: vec![item("A", false), item("B", true)],
            ..GroupView::default()
        };
        assert_eq!(view.render_lines(), vec!["[ ] A", "[x] B"]);
    }

    #[test]
    fn empty_horizontal_group_has_no_rows() {
        assert!(GroupView::default().render_lines().is_empty());
    }
}
