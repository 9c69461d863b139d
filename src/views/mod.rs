//! # Layout primitives
//!
//! Each primitive renders one HTML element whose `class` attribute combines
//! the primitive's own classes with the classes passed through
//! [`Decorators::class`]. User classes come last, so they win any utility
//! conflict:
//!
//! ```rust
//! use craft::views::{Container, Decorators, View};
//!
//! let page = Container::new().class("p-2").children("Hello");
//! assert_eq!(
//!     page.build().to_string(),
//!     r#"<div class="max-w-5xl mx-auto sm:p-8 p-2">Hello</div>"#
//! );
//! ```
//!
//! | Primitive | Element | Classes |
//! |-----------|---------|---------|
//! | [`Layout`] | `html` | smooth scrolling, font smoothing |
//! | [`Main`] | `main` | prose typography, vertical rhythm |
//! | [`Section`] | `section` | vertical padding |
//! | [`Container`] | `div` | centered, max width, padding |
//! | [`Article`] | `article` | prose typography with heading spacing, reading width |
//! | [`Prose`] | `div` | prose typography, vertical rhythm |
//! | [`LayoutBox`] | `div` | flex or grid from responsive props |

mod into_nodes;
mod layout_box;
mod page;
mod prose;

pub use into_nodes::{IntoNode, IntoNodes};
pub use layout_box::{BoxProps, LayoutBox, grid};
pub use page::{Container, Layout, Main, Section};
pub use prose::{Article, Prose};

use crate::element::{Element, Node};
use crate::merge::{ClassValue, cn};

/// Props shared by every primitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewData {
    pub class: Option<String>,
    pub id: Option<String>,
    pub style: Option<String>,
    pub children: Vec<Node>,
}

pub trait View {
    fn view_data(&self) -> &ViewData;

    fn view_data_mut(&mut self) -> &mut ViewData;

    fn tag(&self) -> &'static str;

    /// Classes the primitive applies before the user's.
    fn base_classes(&self) -> ClassValue<'static>;

    /// Attributes besides `class`, `id` and `style`.
    fn extra_attrs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// The merged `class` attribute.
    fn classes(&self) -> String {
        cn([self.base_classes(), ClassValue::from(self.view_data().class.as_deref())])
    }

    fn build(mut self) -> Element
    where
        Self: Sized,
    {
        let class = self.classes();
        let mut element = Element::new(self.tag()).attr("class", class);
        for (name, value) in self.extra_attrs() {
            element = element.attr(name, value);
        }
        let data = std::mem::take(self.view_data_mut());
        if let Some(id) = data.id {
            element = element.attr("id", id);
        }
        if let Some(style) = data.style {
            element = element.attr("style", style);
        }
        element.children(data.children)
    }
}

/// Builder methods available on every primitive.
pub trait Decorators: View + Sized {
    /// Adds classes. Repeated calls accumulate, later ones winning conflicts.
    fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        let data = self.view_data_mut();
        data.class = Some(match data.class.take() {
            Some(existing) if !existing.is_empty() => format!("{existing} {class}"),
            _ => class,
        });
        self
    }

    fn id(mut self, id: impl Into<String>) -> Self {
        self.view_data_mut().id = Some(id.into());
        self
    }

    /// Sets the inline `style` attribute.
    fn style(mut self, style: impl Into<String>) -> Self {
        self.view_data_mut().style = Some(style.into());
        self
    }

    fn child(mut self, child: impl IntoNode) -> Self {
        self.view_data_mut().children.push(child.into_node());
        self
    }

    fn children(mut self, children: impl IntoNodes) -> Self {
        self.view_data_mut().children.extend(children.into_nodes());
        self
    }
}

impl<V: View> Decorators for V {}

/// Implements [`View`] for a primitive with a `data: ViewData` field.
macro_rules! view_data_impl {
    () => {
        fn view_data(&self) -> &$crate::views::ViewData {
            &self.data
        }

        fn view_data_mut(&mut self) -> &mut $crate::views::ViewData {
            &mut self.data
        }
    };
}
pub(crate) use view_data_impl;
