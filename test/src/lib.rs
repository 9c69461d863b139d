//! Testing utilities for Craft layouts.
//!
//! Class attributes are compared as sets, so tests do not depend on the order
//! in which utilities come out of the merger unless they ask for it.
//!
//! # Example
//!
//! ```rust
//! use craft_test::prelude::*;
//!
//! let page = Section::new().children(grid(GridValue::G3).id("cards"));
//! let html = page.build();
//!
//! let cards = find_by_id(&html, "cards").unwrap();
//! assert_classes!(cards, "grid-cols-3 grid");
//! assert_classes!(html, contains "md:py-12");
//! ```

use std::fmt;

use craft::element::Element;
use rustc_hash::FxHashSet;

/// Prelude module for convenient imports in tests.
pub mod prelude {
    pub use super::{AsClassList, ClassSet, find_all, find_by_id, find_by_tag};
    pub use crate::assert_classes;
    pub use craft::prelude::*;
}

/// The classes of a class attribute, in attribute order.
#[derive(Clone, Debug, Default)]
pub struct ClassSet {
    classes: Vec<String>,
}

impl ClassSet {
    pub fn parse(classes: &str) -> Self {
        Self {
            classes: classes.split_whitespace().map(str::to_string).collect(),
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Whether every class of `other` is present.
    pub fn contains_all(&self, other: &ClassSet) -> bool {
        other.iter().all(|class| self.contains(class))
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Classes scoped to a variant, with the prefix removed. `md` turns
    /// `md:flex-row` into `flex-row`.
    pub fn under(&self, variant: &str) -> Vec<&str> {
        self.iter()
            .filter_map(|class| class.strip_prefix(variant)?.strip_prefix(':'))
            .collect()
    }

    /// Classes without any variant prefix.
    pub fn unscoped(&self) -> Vec<&str> {
        self.iter().filter(|class| !class.contains(':')).collect()
    }

    /// Classes that occur more than once.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.iter().filter(|class| !seen.insert(*class)).collect()
    }
}

/// Order-insensitive comparison.
impl PartialEq for ClassSet {
    fn eq(&self, other: &Self) -> bool {
        let a: FxHashSet<&str> = self.iter().collect();
        let b: FxHashSet<&str> = other.iter().collect();
        a == b
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

impl From<&str> for ClassSet {
    fn from(classes: &str) -> Self {
        ClassSet::parse(classes)
    }
}

/// Values whose classes can be checked: class strings and elements.
pub trait AsClassList {
    fn class_list(&self) -> ClassSet;
}

impl AsClassList for str {
    fn class_list(&self) -> ClassSet {
        ClassSet::parse(self)
    }
}

impl AsClassList for String {
    fn class_list(&self) -> ClassSet {
        ClassSet::parse(self)
    }
}

impl AsClassList for Element {
    fn class_list(&self) -> ClassSet {
        ClassSet::parse(self.class())
    }
}

impl AsClassList for ClassSet {
    fn class_list(&self) -> ClassSet {
        self.clone()
    }
}

impl<T: AsClassList + ?Sized> AsClassList for &T {
    fn class_list(&self) -> ClassSet {
        (**self).class_list()
    }
}

/// Asserts that a class list (a string or an element) holds exactly the
/// expected classes in any order, or with `contains`, at least them.
#[macro_export]
macro_rules! assert_classes {
    ($actual:expr, contains $expected:expr $(,)?) => {{
        let actual = $crate::AsClassList::class_list(&$actual);
        let expected = $crate::AsClassList::class_list(&$expected);
        assert!(
            actual.contains_all(&expected),
            "classes `{}` are missing some of `{}`",
            actual,
            expected
        );
    }};
    ($actual:expr, $expected:expr $(,)?) => {{
        let actual = $crate::AsClassList::class_list(&$actual);
        let expected = $crate::AsClassList::class_list(&$expected);
        assert!(
            actual == expected,
            "classes differ\n  actual: `{}`\nexpected: `{}`",
            actual,
            expected
        );
    }};
}

/// Every element at or below `root` matching `predicate`, in document order.
pub fn find_all<'a>(root: &'a Element, predicate: impl Fn(&Element) -> bool) -> Vec<&'a Element> {
    root.descendants().into_iter().filter(|e| predicate(e)).collect()
}

pub fn find_by_tag<'a>(root: &'a Element, tag: &str) -> Vec<&'a Element> {
    find_all(root, |e| e.tag() == tag)
}

pub fn find_by_id<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    root.descendants()
        .into_iter()
        .find(|e| e.get_attr("id") == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_equality_ignores_order() {
        assert_eq!(ClassSet::parse("a b c"), ClassSet::parse("c  a b"));
        assert_ne!(ClassSet::parse("a b"), ClassSet::parse("a b c"));
    }

    #[test]
    fn variant_scoping() {
        let set = ClassSet::parse("flex-col md:flex-row lg:gap-4 md:gap-2");
        assert_eq!(set.under("md"), ["flex-row", "gap-2"]);
        assert_eq!(set.unscoped(), ["flex-col"]);
        assert!(set.duplicates().is_empty());
        assert_eq!(ClassSet::parse("a b a").duplicates(), ["a"]);
    }
}
