
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, cmp::Ordering};
use time::Date;

///
/// TextMode
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextMode {
    Cs, // case-sensitive
    Ci, // case-insensitive
}

///
/// Value
///
/// Dynamic field value read from an entity through `FieldValues`.
/// Tag sets are `List`s of `Text`; optional fields that are unset read as `Null`.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Value {
    Date(Date),
    List(Vec<Self>),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(xs) => Some(xs.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_date(&self) -> Option<Date> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    ///
    /// TEXT
    ///

    fn fold_ci(s: &str) -> Cow<'_, str> {
        if s.is_ascii() {
            return Cow::Owned(s.to_ascii_lowercase());
        }

        Cow::Owned(s.to_lowercase())
    }

    fn text_with_mode(s: &str, mode: TextMode) -> Cow<'_, str> {
        match mode {
            TextMode::Cs => Cow::Borrowed(s),
            TextMode::Ci => Self::fold_ci(s),
        }
    }

    fn text_op(
        &self,
        other: &Self,
        mode: TextMode,
        f: impl Fn(&str, &str) -> bool,
    ) -> Option<bool> {
        let (a, b) = (self.as_text()?, other.as_text()?);
        let a = Self::text_with_mode(a, mode);
        let b = Self::text_with_mode(b, mode);

        Some(f(&a, &b))
    }

    #[must_use]
    /// Check whether `other` is a substring of `self` under the given text mode.
    /// Returns `None` when either side is not text.
    pub fn text_contains(&self, needle: &Self, mode: TextMode) -> Option<bool> {
        self.text_op(needle, mode, |a, b| a.contains(b))
    }

    ///
    /// COMPARISON
    ///

    #[must_use]
    /// Strict equality; values of different variants never compare equal.
    pub fn strict_eq(&self, other: &Self) -> Option<bool> {
        match (self, other) {
            (Self::Null, _) | (_, Self::Null) => None,
            (Self::Date(_), Self::Date(_))
            | (Self::Text(_), Self::Text(_))
            | (Self::Uint(_), Self::Uint(_))
            | (Self::List(_), Self::List(_)) => Some(self == other),
            _ => None,
        }
    }

    #[must_use]
    /// Total order within one scalar variant; `None` across variants or for lists.
    pub fn strict_order(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Date(a), Self::Date(b)) => Some(a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Uint(a), Self::Uint(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }

    #[must_use]
    /// True when this list shares at least one element with `candidates`.
    /// Returns `None` when `self` is not a list.
    pub fn intersects(&self, candidates: &[Self]) -> Option<bool> {
        let items = self.as_list()?;

        Some(items.iter().any(|item| candidates.contains(item)))
    }
}

///
/// CONVERSIONS
///

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Self::Uint(n)
    }
}

impl From<Date> for Value {
    fn from(d: Date) -> Self {
        Self::Date(d)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(xs: Vec<T>) -> Self {
        Self::List(xs.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Self::Null, Into::into)
    }
}
