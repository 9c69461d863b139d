//! Breakpoint-aware values and the class resolver.
//!
//! A [`Responsive`] value is either a single option, applied at every screen
//! size, or a map from breakpoint to option. [`responsive_class`] expands it
//! into a class string by looking every option up in a [`ClassMap`] and
//! scoping the result with the breakpoint's variant prefix:
//!
//! ```rust
//! use craft::breakpoint::Breakpoint;
//! use craft::responsive::{Responsive, responsive_class};
//!
//! let direction = Responsive::breakpoints()
//!     .at(Breakpoint::Base, "col")
//!     .at(Breakpoint::Md, "row");
//! let classes = [("col", "flex-col"), ("row", "flex-row")];
//!
//! assert_eq!(responsive_class(Some(&direction), &classes), "flex-col md:flex-row");
//! ```
//!
//! Map entries are resolved in the order they were inserted, not in
//! breakpoint rank order.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::breakpoint::{Breakpoint, BreakpointSet, ScreenWidths};
use crate::class_map::ClassMap;

/// A key in a per-breakpoint map.
///
/// Keys that name a known breakpoint are parsed into [`Breakpoint`]; anything
/// else is kept verbatim and used as its own prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResponsiveKey {
    Breakpoint(Breakpoint),
    Other(String),
}

impl ResponsiveKey {
    pub fn breakpoint(&self) -> Option<Breakpoint> {
        match self {
            ResponsiveKey::Breakpoint(bp) => Some(*bp),
            ResponsiveKey::Other(_) => None,
        }
    }

    /// `""` for the base breakpoint, `"<key>:"` otherwise.
    pub fn prefix(&self) -> Cow<'static, str> {
        match self {
            ResponsiveKey::Breakpoint(bp) => Cow::Borrowed(bp.prefix()),
            ResponsiveKey::Other(key) => Cow::Owned(format!("{key}:")),
        }
    }
}

impl From<Breakpoint> for ResponsiveKey {
    fn from(bp: Breakpoint) -> Self {
        ResponsiveKey::Breakpoint(bp)
    }
}

impl From<&str> for ResponsiveKey {
    fn from(key: &str) -> Self {
        match key.parse() {
            Ok(bp) => ResponsiveKey::Breakpoint(bp),
            Err(_) => ResponsiveKey::Other(key.to_string()),
        }
    }
}

impl From<String> for ResponsiveKey {
    fn from(key: String) -> Self {
        match key.parse() {
            Ok(bp) => ResponsiveKey::Breakpoint(bp),
            Err(_) => ResponsiveKey::Other(key),
        }
    }
}

impl fmt::Display for ResponsiveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponsiveKey::Breakpoint(bp) => bp.fmt(f),
            ResponsiveKey::Other(key) => f.write_str(key),
        }
    }
}

/// A single value, or one value per breakpoint.
///
/// `None` entries in the map stand for unset breakpoints and contribute no
/// class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Responsive<T> {
    Value(T),
    Breakpoints(IndexMap<ResponsiveKey, Option<T>>),
}

impl<T> Responsive<T> {
    /// An empty per-breakpoint map, to be filled with [`Responsive::at`].
    pub fn breakpoints() -> Self {
        Responsive::Breakpoints(IndexMap::new())
    }

    /// Sets the value for `key`.
    ///
    /// Setting a key that is already present replaces its value but keeps its
    /// position. Calling this on a single value first turns it into a map with
    /// that value at `base`.
    pub fn at(self, key: impl Into<ResponsiveKey>, value: impl Into<Option<T>>) -> Self {
        let mut entries = match self {
            Responsive::Value(v) => {
                let mut entries = IndexMap::new();
                entries.insert(ResponsiveKey::Breakpoint(Breakpoint::Base), Some(v));
                entries
            }
            Responsive::Breakpoints(entries) => entries,
        };
        entries.insert(key.into(), value.into());
        Responsive::Breakpoints(entries)
    }

    /// Resolves this value against `map`. See [`responsive_class`].
    pub fn classes<M: ClassMap<T> + ?Sized>(&self, map: &M) -> String {
        responsive_class(Some(self), map)
    }

    /// The value in effect at `bp` when smaller breakpoints cascade upwards.
    ///
    /// Entries keyed by anything other than a known breakpoint are ignored.
    pub fn value_at(&self, bp: Breakpoint) -> Option<&T> {
        match self {
            Responsive::Value(v) => Some(v),
            Responsive::Breakpoints(entries) => entries
                .iter()
                .filter_map(|(key, value)| Some((key.breakpoint()?, value.as_ref()?)))
                .filter(|(key, _)| *key <= bp)
                .max_by_key(|(key, _)| *key)
                .map(|(_, value)| value),
        }
    }

    /// The value in effect at a viewport `width`.
    pub fn value_at_width(&self, width: f64, widths: &ScreenWidths) -> Option<&T> {
        self.value_at(widths.breakpoint_for(width))
    }

    /// The known breakpoints that carry a value. A single value covers none.
    pub fn keys_set(&self) -> BreakpointSet {
        match self {
            Responsive::Value(_) => BreakpointSet::EMPTY,
            Responsive::Breakpoints(entries) => entries
                .iter()
                .filter(|(_, value)| value.is_some())
                .filter_map(|(key, _)| key.breakpoint())
                .collect(),
        }
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Responsive<U> {
        match self {
            Responsive::Value(v) => Responsive::Value(f(v)),
            Responsive::Breakpoints(entries) => Responsive::Breakpoints(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.map(&mut f)))
                    .collect(),
            ),
        }
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Responsive::Value(value)
    }
}

impl<K: Into<ResponsiveKey>, T, const N: usize> From<[(K, T); N]> for Responsive<T> {
    fn from(entries: [(K, T); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<ResponsiveKey>, T> FromIterator<(K, T)> for Responsive<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Responsive::Breakpoints(
            iter.into_iter()
                .map(|(key, value)| (key.into(), Some(value)))
                .collect(),
        )
    }
}

fn lookup<'a, T, M: ClassMap<T> + ?Sized>(map: &'a M, value: &T) -> Option<&'a str> {
    match map.class_for(value) {
        Some("") => None,
        Some(class) => Some(class),
        None => {
            debug!(option = std::any::type_name::<T>(), "no class for value");
            None
        }
    }
}

/// Expands `value` into a class string using `map`.
///
/// - `None` gives `""`.
/// - A single value gives its class verbatim.
/// - A breakpoint map gives one class per entry, in insertion order, each
///   prefixed with `"<breakpoint>:"` except for `base`, joined by spaces.
///   Unset entries and values missing from `map` are skipped.
///
/// This never fails: anything it cannot resolve comes out as an empty
/// contribution.
pub fn responsive_class<T, M>(value: Option<&Responsive<T>>, map: &M) -> String
where
    M: ClassMap<T> + ?Sized,
{
    let Some(value) = value else {
        return String::new();
    };

    match value {
        Responsive::Value(v) => lookup(map, v).map(str::to_string).unwrap_or_default(),
        Responsive::Breakpoints(entries) => {
            let mut classes = String::new();
            for (key, value) in entries {
                let Some(class) = value.as_ref().and_then(|v| lookup(map, v)) else {
                    continue;
                };
                if let ResponsiveKey::Other(key) = key {
                    trace!(key = key.as_str(), "passing through unknown breakpoint");
                }
                if !classes.is_empty() {
                    classes.push(' ');
                }
                classes.push_str(&key.prefix());
                classes.push_str(class);
            }
            classes
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use indexmap::IndexMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Responsive, ResponsiveKey};

    impl Serialize for ResponsiveKey {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for ResponsiveKey {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            String::deserialize(deserializer).map(ResponsiveKey::from)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<T> {
        Breakpoints(IndexMap<ResponsiveKey, Option<T>>),
        Value(T),
    }

    impl<T: Serialize> Serialize for Responsive<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Responsive::Value(v) => v.serialize(serializer),
                Responsive::Breakpoints(entries) => entries.serialize(serializer),
            }
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Responsive<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Ok(match Repr::deserialize(deserializer)? {
                Repr::Breakpoints(entries) => Responsive::Breakpoints(entries),
                Repr::Value(v) => Responsive::Value(v),
            })
        }
    }
}
