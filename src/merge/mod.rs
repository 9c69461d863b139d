//! Class list composition.
//!
//! [`cn`] flattens any mix of class values into one list and then resolves
//! utility conflicts, so that classes passed later override earlier ones:
//!
//! ```rust
//! use craft::cn;
//!
//! let active = true;
//! assert_eq!(
//!     cn!("p-4 text-sm", ("bg-primary", active), None::<&str>, ["p-8"]),
//!     "text-sm bg-primary p-8"
//! );
//! ```

mod cache;
mod config;
mod groups;
mod merger;
mod parse;

use std::borrow::Cow;
use std::sync::LazyLock;

pub use config::{ExtraGroup, MergeConfig};
pub use merger::ClassMerger;

static DEFAULT_MERGER: LazyLock<ClassMerger> = LazyLock::new(ClassMerger::default);

/// The merger used by [`cn`].
pub fn default_merger() -> &'static ClassMerger {
    &DEFAULT_MERGER
}

/// A class input: a string, nothing, or a nested list of inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ClassValue<'a> {
    #[default]
    None,
    Str(Cow<'a, str>),
    List(Vec<ClassValue<'a>>),
}

impl ClassValue<'_> {
    fn write_into(&self, out: &mut String) {
        match self {
            ClassValue::None => {}
            ClassValue::Str(classes) => {
                for class in classes.split_whitespace() {
                    if !out.is_empty() {
                        out.push(' ');
                    }
                    out.push_str(class);
                }
            }
            ClassValue::List(values) => {
                for value in values {
                    value.write_into(out);
                }
            }
        }
    }
}

impl<'a> From<&'a str> for ClassValue<'a> {
    fn from(value: &'a str) -> Self {
        ClassValue::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for ClassValue<'a> {
    fn from(value: &'a String) -> Self {
        ClassValue::Str(Cow::Borrowed(value))
    }
}

impl From<String> for ClassValue<'_> {
    fn from(value: String) -> Self {
        ClassValue::Str(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for ClassValue<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        ClassValue::Str(value)
    }
}

impl<'a, T: Into<ClassValue<'a>>> From<Option<T>> for ClassValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::None, Into::into)
    }
}

/// `(classes, condition)` includes `classes` only when `condition` holds.
impl<'a, T: Into<ClassValue<'a>>> From<(T, bool)> for ClassValue<'a> {
    fn from((value, enabled): (T, bool)) -> Self {
        if enabled { value.into() } else { ClassValue::None }
    }
}

impl<'a, T: Into<ClassValue<'a>>> From<Vec<T>> for ClassValue<'a> {
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Into<ClassValue<'a>>, const N: usize> From<[T; N]> for ClassValue<'a> {
    fn from(values: [T; N]) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<'a, T: Clone + Into<ClassValue<'a>>> From<&[T]> for ClassValue<'a> {
    fn from(values: &[T]) -> Self {
        ClassValue::List(values.iter().cloned().map(Into::into).collect())
    }
}

impl From<()> for ClassValue<'_> {
    fn from(_: ()) -> Self {
        ClassValue::None
    }
}

/// Joins class values into one space separated list, dropping empty ones.
/// No conflict resolution happens here.
pub fn clsx<'a, I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue<'a>>,
{
    let mut out = String::new();
    for value in values {
        value.into().write_into(&mut out);
    }
    out
}

/// Flattens `values` and merges conflicting utilities with the default
/// [`ClassMerger`].
pub fn cn<'a, I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue<'a>>,
{
    DEFAULT_MERGER.merge(&clsx(values))
}

/// [`cn`] over arguments of different types.
#[macro_export]
macro_rules! cn {
    ($($value:expr),* $(,)?) => {
        $crate::merge::cn([$($crate::merge::ClassValue::from($value)),*])
    };
}
