#![forbid(unsafe_code)]

//! Option identifiers.
//!
//! An [`Identifier`] names one selectable option inside one group. It is
//! always supplied by the caller; nothing here generates identifiers.
//! Text and numeric identifiers never compare equal, so `"1"` and `1` are
//! two different options.

use core::fmt;

/// Caller-supplied key for one option in a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Identifier {
    /// Numeric key.
    Num(i64),
    /// Text key.
    Str(String),
}

impl Identifier {
    /// The text key, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            Self::Num(_) => None,
        }
    }

    /// The numeric key, if this is one.
    #[must_use]
    pub const fn as_num(&self) -> Option<i64> {
        match self {
            Self::Num(n) => Some(*n),
            Self::Str(_) => None,
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Identifier {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Identifier {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Identifier {
    fn from(n: i64) -> Self {
        Self::Num(n)
    }
}

impl From<i32> for Identifier {
    fn from(n: i32) -> Self {
        Self::Num(i64::from(n))
    }
}

impl From<u32> for Identifier {
    fn from(n: u32) -> Self {
        Self::Num(i64::from(n))
    }
}

impl From<&Identifier> for Identifier {
    fn from(id: &Identifier) -> Self {
        id.clone()
    }
}

/// Collect anything convertible into identifiers.
///
/// ```
/// # use tickset_core::identifier::{ids, Identifier};
/// assert_eq!(ids([0, 1]), vec![Identifier::Num(0), Identifier::Num(1)]);
/// ```
pub fn ids<I, T>(items: I) -> Vec<Identifier>
where
    I: IntoIterator<Item = T>,
    T: Into<Identifier>,
{
    items.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_number_are_distinct() {
        assert_ne!(Identifier::from("1"), Identifier::from(1));
    }

    #[test]
    fn display_is_bare_value() {
        assert_eq!(Identifier::from("apple").to_string(), "apple");
        assert_eq!(Identifier::from(-3).to_string(), "-3");
    }

    #[test]
    fn accessors_match_variant() {
        let text = Identifier::from("a");
        let num = Identifier::from(5u32);
        assert_eq!(text.as_str(), Some("a"));
        assert_eq!(text.as_num(), None);
        assert_eq!(num.as_num(), Some(5));
        assert_eq!(num.as_str(), None);
    }

    #[test]
    fn ids_preserves_order() {
        assert_eq!(
            ids(["b", "a"]),
            vec![Identifier::from("b"), Identifier::from("a")]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_is_untagged() {
        let json = serde_json::to_string(&ids([0, 1])).unwrap();
        assert_eq!(json, "[0,1]");
        let back: Vec<Identifier> = serde_json::from_str(r#"["x",2]"#).unwrap();
        assert_eq!(back, vec![Identifier::from("x"), Identifier::from(2)]);
    }
}
