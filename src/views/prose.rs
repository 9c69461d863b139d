use super::{View, ViewData, view_data_impl};
use crate::merge::ClassValue;
use crate::styles::{self, layout};

/// A standalone piece of writing: full prose typography including heading
/// spacing, limited to a reading width.
#[derive(Clone, Debug, Default)]
pub struct Article {
    data: ViewData,
}

impl Article {
    pub fn new() -> Self {
        Self::default()
    }
}

impl View for Article {
    view_data_impl!();

    fn tag(&self) -> &'static str {
        "article"
    }

    fn base_classes(&self) -> ClassValue<'static> {
        [
            ClassValue::from(styles::article_typography_styles()),
            layout::SPACING.into(),
            layout::ARTICLE.into(),
        ]
        .into()
    }
}

/// Prose typography for arbitrary content, e.g. rendered markdown.
#[derive(Clone, Debug, Default)]
pub struct Prose {
    data: ViewData,
}

impl Prose {
    pub fn new() -> Self {
        Self::default()
    }
}

impl View for Prose {
    view_data_impl!();

    fn tag(&self) -> &'static str {
        "div"
    }

    fn base_classes(&self) -> ClassValue<'static> {
        [
            ClassValue::from(styles::base_typography_styles()),
            layout::SPACING.into(),
        ]
        .into()
    }
}
