//! Lookup tables from option values to class fragments.
//!
//! Any lookup table can serve as a [`ClassMap`]: slices and arrays of pairs,
//! hash maps and index maps. The [`class_map!`](crate::class_map!) macro
//! declares a table as an exhaustive `match` over an option enum so that a
//! missing option is a compile error instead of an empty class.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;

/// Maps option values to class-name fragments.
pub trait ClassMap<T: ?Sized> {
    /// The fragment for `value`, or `None` if the table has no entry for it.
    fn class_for(&self, value: &T) -> Option<&str>;
}

impl<T: PartialEq, S: AsRef<str>> ClassMap<T> for [(T, S)] {
    fn class_for(&self, value: &T) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key == value)
            .map(|(_, class)| class.as_ref())
    }
}

impl<T: PartialEq, S: AsRef<str>, const N: usize> ClassMap<T> for [(T, S); N] {
    fn class_for(&self, value: &T) -> Option<&str> {
        self.as_slice().class_for(value)
    }
}

impl<T: PartialEq, S: AsRef<str>> ClassMap<T> for Vec<(T, S)> {
    fn class_for(&self, value: &T) -> Option<&str> {
        self.as_slice().class_for(value)
    }
}

impl<T: Eq + Hash, S: AsRef<str>, H: BuildHasher> ClassMap<T> for HashMap<T, S, H> {
    fn class_for(&self, value: &T) -> Option<&str> {
        self.get(value).map(AsRef::as_ref)
    }
}

impl<T: Eq + Hash, S: AsRef<str>, H: BuildHasher> ClassMap<T> for IndexMap<T, S, H> {
    fn class_for(&self, value: &T) -> Option<&str> {
        self.get(value).map(AsRef::as_ref)
    }
}

impl<T: ?Sized, M: ClassMap<T> + ?Sized> ClassMap<T> for &M {
    fn class_for(&self, value: &T) -> Option<&str> {
        (**self).class_for(value)
    }
}

/// Declares a unit type that maps every variant of an option enum to a class
/// fragment through an exhaustive `match`.
///
/// ```rust
/// use craft::class_map;
/// use craft::class_map::ClassMap;
/// use craft::options::Direction;
///
/// class_map! {
///     /// Reversed flex directions.
///     pub ReverseClasses for Direction {
///         Direction::Row => "flex-row-reverse",
///         Direction::Col => "flex-col-reverse",
///     }
/// }
///
/// assert_eq!(ReverseClasses.class_for(&Direction::Col), Some("flex-col-reverse"));
/// ```
#[macro_export]
macro_rules! class_map {
    ($(#[$meta:meta])* $v:vis $name:ident for $ty:ty { $($pat:pat => $class:expr),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Default, Debug, Copy, Clone)]
        $v struct $name;

        impl $name {
            pub const fn class(value: $ty) -> &'static str {
                match value {
                    $($pat => $class,)*
                }
            }
        }

        impl $crate::class_map::ClassMap<$ty> for $name {
            fn class_for(&self, value: &$ty) -> Option<&str> {
                Some(Self::class(*value))
            }
        }
    };
}
