//! Conversions from child values into element nodes.
//!
//! | Type | Example |
//! |------|---------|
//! | Primitives | `Section::new()` |
//! | Text | `"Hello"`, `String`, numbers |
//! | Elements | `Element::new("hr")` |
//! | Tuples (1-12) | `(Section::new(), "text")` |
//! | Arrays `[V; N]` | `["a", "b"]` |
//! | `Vec<V>`, `&[V]` | `items.iter().map(...).collect::<Vec<_>>()` |
//! | Empty `()` | `()` |

use std::borrow::Cow;

use super::View;
use crate::element::{Element, Node};

/// A value that becomes a single node.
pub trait IntoNode {
    fn into_node(self) -> Node;
}

impl<V: View> IntoNode for V {
    fn into_node(self) -> Node {
        Node::Element(self.build())
    }
}

impl IntoNode for Node {
    fn into_node(self) -> Node {
        self
    }
}

impl IntoNode for Element {
    fn into_node(self) -> Node {
        Node::Element(self)
    }
}

impl IntoNode for &str {
    fn into_node(self) -> Node {
        Node::Text(self.to_string())
    }
}

impl IntoNode for String {
    fn into_node(self) -> Node {
        Node::Text(self)
    }
}

impl IntoNode for &String {
    fn into_node(self) -> Node {
        Node::Text(self.clone())
    }
}

impl IntoNode for Cow<'_, str> {
    fn into_node(self) -> Node {
        Node::Text(self.into_owned())
    }
}

macro_rules! display_into_node {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoNode for $ty {
                fn into_node(self) -> Node {
                    Node::Text(self.to_string())
                }
            }
        )*
    };
}

display_into_node!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char, bool);

/// A value that becomes a list of child nodes.
pub trait IntoNodes {
    fn into_nodes(self) -> impl Iterator<Item = Node>;
}

impl<V: IntoNode> IntoNodes for V {
    fn into_nodes(self) -> impl Iterator<Item = Node> {
        std::iter::once(self.into_node())
    }
}

impl<V: IntoNode, const N: usize> IntoNodes for [V; N] {
    fn into_nodes(self) -> impl Iterator<Item = Node> {
        self.into_iter().map(IntoNode::into_node)
    }
}

impl<V: IntoNode> IntoNodes for Vec<V> {
    fn into_nodes(self) -> impl Iterator<Item = Node> {
        self.into_iter().map(IntoNode::into_node)
    }
}

impl<V: IntoNode + Clone> IntoNodes for &[V] {
    fn into_nodes(self) -> impl Iterator<Item = Node> {
        self.iter().cloned().map(IntoNode::into_node)
    }
}

impl IntoNodes for () {
    fn into_nodes(self) -> impl Iterator<Item = Node> {
        std::iter::empty()
    }
}

macro_rules! impl_into_nodes_for_tuple {
    ($($t:ident),+; $($idx:tt),+) => {
        impl<$($t: IntoNode),+> IntoNodes for ($($t,)+) {
            fn into_nodes(self) -> impl Iterator<Item = Node> {
                [$(self.$idx.into_node()),+].into_iter()
            }
        }
    };
}

impl_into_nodes_for_tuple!(A; 0);
impl_into_nodes_for_tuple!(A, B; 0, 1);
impl_into_nodes_for_tuple!(A, B, C; 0, 1, 2);
impl_into_nodes_for_tuple!(A, B, C, D; 0, 1, 2, 3);
impl_into_nodes_for_tuple!(A, B, C, D, E; 0, 1, 2, 3, 4);
impl_into_nodes_for_tuple!(A, B, C, D, E, F; 0, 1, 2, 3, 4, 5);
impl_into_nodes_for_tuple!(A, B, C, D, E, F, G; 0, 1, 2, 3, 4, 5, 6);
impl_into_nodes_for_tuple!(A, B, C, D, E, F, G, H; 0, 1, 2, 3, 4, 5, 6, 7);
impl_into_nodes_for_tuple!(A, B, C, D, E, F, G, H, I; 0, 1, 2, 3, 4, 5, 6, 7, 8);
impl_into_nodes_for_tuple!(A, B, C, D, E, F, G, H, I, J; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9);
impl_into_nodes_for_tuple!(A, B, C, D, E, F, G, H, I, J, K; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10);
impl_into_nodes_for_tuple!(A, B, C, D, E, F, G, H, I, J, K, L; 0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11);
