use super::{View, ViewData, view_data_impl};
use crate::merge::ClassValue;
use crate::styles::{self, layout};

/// The document root. Renders `<html lang="en">`.
#[derive(Clone, Debug, Default)]
pub struct Layout {
    data: ViewData,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }
}

impl View for Layout {
    view_data_impl!();

    fn tag(&self) -> &'static str {
        "html"
    }

    fn base_classes(&self) -> ClassValue<'static> {
        "scroll-smooth antialiased focus:scroll-auto".into()
    }

    fn extra_attrs(&self) -> Vec<(&'static str, String)> {
        vec![("lang", "en".to_string())]
    }
}

/// The main content region, styled as prose.
#[derive(Clone, Debug, Default)]
pub struct Main {
    data: ViewData,
}

impl Main {
    pub fn new() -> Self {
        Self::default()
    }
}

impl View for Main {
    view_data_impl!();

    fn tag(&self) -> &'static str {
        "main"
    }

    fn base_classes(&self) -> ClassValue<'static> {
        [
            ClassValue::from(styles::base_typography_styles()),
            layout::SPACING.into(),
        ]
        .into()
    }
}

/// A page section with vertical padding.
#[derive(Clone, Debug, Default)]
pub struct Section {
    data: ViewData,
}

impl Section {
    pub fn new() -> Self {
        Self::default()
    }
}

impl View for Section {
    view_data_impl!();

    fn tag(&self) -> &'static str {
        "section"
    }

    fn base_classes(&self) -> ClassValue<'static> {
        layout::SECTION.into()
    }
}

/// A centered, width-limited block.
#[derive(Clone, Debug, Default)]
pub struct Container {
    data: ViewData,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }
}

impl View for Container {
    view_data_impl!();

    fn tag(&self) -> &'static str {
        "div"
    }

    fn base_classes(&self) -> ClassValue<'static> {
        layout::CONTAINER.into()
    }
}
