//! # Craft
//! Craft is a small design system for building responsive page layouts and
//! styling prose with utility classes.
//!
//! ## Example: a responsive page
//! ```rust
//! use craft::prelude::*;
//!
//! let page = Main::new().children((
//!     Section::new().children(
//!         Container::new().children(
//!             LayoutBox::new()
//!                 .direction([(Breakpoint::Base, Direction::Col), (Breakpoint::Md, Direction::Row)])
//!                 .gap(Gap::G4)
//!                 .children(("first", "second")),
//!         ),
//!     ),
//! ));
//!
//! let html = page.build().to_string();
//! assert!(html.contains(r#"<div class="flex flex-col md:flex-row gap-4">firstsecond</div>"#));
//! ```
//!
//! ## Responsive values
//! Layout props take a [`Responsive`](responsive::Responsive) value: either a
//! single option, or a map from [`Breakpoint`](breakpoint::Breakpoint) to
//! option. The [resolver](responsive::responsive_class) looks every option up
//! in a [`ClassMap`](class_map::ClassMap) and prefixes the class with the
//! breakpoint's variant, so `{ base: col, md: row }` becomes
//! `flex-col md:flex-row`.
//!
//! ## Class merging
//! [`cn`](merge::cn) joins class values and resolves conflicting utilities so
//! that later classes override earlier ones (`p-4 p-8` becomes `p-8`). Every
//! primitive builds its `class` attribute this way, which is what lets a
//! `class` passed by the caller override the primitive's defaults.
//!
//! ## Prose
//! [`styles`] holds the typography sheets used by [`Main`](views::Main),
//! [`Prose`](views::Prose) and [`Article`](views::Article) to style nested
//! headings, lists, code, tables and media.
//!
//! Nothing here installs a `tracing` subscriber. Unresolved options are
//! reported as `debug` events and unknown breakpoint keys as `trace` events.

pub mod breakpoint;
pub mod class_map;
pub mod element;
mod error;
pub mod merge;
pub mod options;
pub mod responsive;
pub mod styles;
pub mod views;

pub use error::{Error, Result};
pub use merge::{ClassValue, cn};

pub mod prelude {
    pub use crate::breakpoint::{Breakpoint, BreakpointSet, ScreenWidths};
    pub use crate::class_map::ClassMap;
    pub use crate::element::{Element, Node};
    pub use crate::merge::{ClassMerger, ClassValue, MergeConfig, clsx, cn};
    pub use crate::options::{Direction, Gap, GridValue, Wrap};
    pub use crate::responsive::{Responsive, responsive_class};
    pub use crate::views::*;
}
