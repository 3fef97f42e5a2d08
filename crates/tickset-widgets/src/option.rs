#![forbid(unsafe_code)]

//! Option descriptions for data-driven groups.

use tickset_core::Identifier;

/// One entry of a group's `options` list.
///
/// Primitive options (`"apple"`, `3`) convert directly and use the value as
/// their label.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CheckboxOption {
    /// Text shown next to the indicator.
    pub label: String,
    /// Key the group tracks for this option.
    pub value: Identifier,
    /// Disabled regardless of the group default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub disabled: bool,
    /// Custom check icon name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub icon: Option<String>,
}

impl CheckboxOption {
    /// Create an enabled option.
    pub fn new(label: impl Into<String>, value: impl Into<Identifier>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
            icon: None,
        }
    }

    /// Set whether this option is disabled regardless of the group default.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set a custom check icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl From<Identifier> for CheckboxOption {
    fn from(value: Identifier) -> Self {
        Self::new(value.to_string(), value)
    }
}

impl From<&str> for CheckboxOption {
    fn from(value: &str) -> Self {
        Identifier::from(value).into()
    }
}

impl From<String> for CheckboxOption {
    fn from(value: String) -> Self {
        Identifier::from(value).into()
    }
}

impl From<i64> for CheckboxOption {
    fn from(value: i64) -> Self {
        Identifier::from(value).into()
    }
}

impl From<i32> for CheckboxOption {
    fn from(value: i32) -> Self {
        Identifier::from(value).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_option_uses_value_as_label() {
        let opt = CheckboxOption::from(3);
        assert_eq!(opt.label, "3");
        assert_eq!(opt.value, Identifier::Num(3));
        assert!(!opt.disabled);
    }

    #[test]
    fn builder_sets_flags() {
        let opt = CheckboxOption::new("Pear", "pear").disabled(true).icon("*");
        assert!(opt.disabled);
        assert_eq!(opt.icon.as_deref(), Some("*"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_with_defaults() {
        let opt: CheckboxOption = serde_json::from_str(r#"{"label":"A","value":1}"#).unwrap();
        assert_eq!(opt, CheckboxOption::new("A", 1));
    }
}
