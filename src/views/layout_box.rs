use super::{View, ViewData, view_data_impl};
use crate::merge::ClassValue;
use crate::options::{
    ColsClasses, Direction, DirectionClasses, Gap, GapClasses, GridValue, RowsClasses, Wrap,
    WrapClasses,
};
use crate::responsive::{Responsive, responsive_class};

/// A flex or grid container driven by responsive props.
///
/// The box is a grid as soon as `cols` or `rows` is set and a flexbox
/// otherwise. Every prop takes either a single value or one value per
/// breakpoint:
///
/// ```rust
/// use craft::breakpoint::Breakpoint;
/// use craft::options::{Direction, Gap};
/// use craft::views::{LayoutBox, View};
///
/// let row = LayoutBox::new()
///     .direction([(Breakpoint::Base, Direction::Col), (Breakpoint::Md, Direction::Row)])
///     .gap(Gap::G4);
/// assert_eq!(row.classes(), "flex flex-col md:flex-row gap-4");
/// ```
#[derive(Clone, Debug, Default)]
pub struct LayoutBox {
    data: ViewData,
    direction: Option<Responsive<Direction>>,
    wrap: Option<Responsive<Wrap>>,
    gap: Option<Responsive<Gap>>,
    cols: Option<Responsive<GridValue>>,
    rows: Option<Responsive<GridValue>>,
}

/// A grid box with `cols` set. See [`LayoutBox::cols`].
pub fn grid(cols: impl Into<Responsive<GridValue>>) -> LayoutBox {
    LayoutBox::new().cols(cols)
}

impl LayoutBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a box from deserialized props.
    pub fn from_props(props: BoxProps) -> Self {
        Self {
            data: ViewData {
                class: props.class,
                id: props.id,
                style: props.style,
                children: Vec::new(),
            },
            direction: props.direction,
            wrap: props.wrap,
            gap: props.gap,
            cols: props.cols,
            rows: props.rows,
        }
    }

    pub fn direction(mut self, direction: impl Into<Responsive<Direction>>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    pub fn wrap(mut self, wrap: impl Into<Responsive<Wrap>>) -> Self {
        self.wrap = Some(wrap.into());
        self
    }

    /// Sets the gap between children.
    ///
    /// `Gap::G0` is a real value and resolves to `gap-0`; only unset
    /// breakpoints produce no class. Craft's Svelte components treat a zero
    /// gap as unset and emit nothing for it.
    pub fn gap(mut self, gap: impl Into<Responsive<Gap>>) -> Self {
        self.gap = Some(gap.into());
        self
    }

    pub fn cols(mut self, cols: impl Into<Responsive<GridValue>>) -> Self {
        self.cols = Some(cols.into());
        self
    }

    pub fn rows(mut self, rows: impl Into<Responsive<GridValue>>) -> Self {
        self.rows = Some(rows.into());
        self
    }

    pub fn is_grid(&self) -> bool {
        self.cols.is_some() || self.rows.is_some()
    }
}

impl View for LayoutBox {
    view_data_impl!();

    fn tag(&self) -> &'static str {
        "div"
    }

    fn base_classes(&self) -> ClassValue<'static> {
        let display = if self.is_grid() { "grid" } else { "flex" };
        vec![
            ClassValue::from(display),
            responsive_class(self.direction.as_ref(), &DirectionClasses).into(),
            responsive_class(self.wrap.as_ref(), &WrapClasses).into(),
            responsive_class(self.gap.as_ref(), &GapClasses).into(),
            responsive_class(self.cols.as_ref(), &ColsClasses).into(),
            responsive_class(self.rows.as_ref(), &RowsClasses).into(),
        ]
        .into()
    }
}

/// The inputs of a [`LayoutBox`], as they arrive from configuration.
///
/// ```json
/// { "direction": { "base": "col", "md": "row" }, "gap": 4, "class": "mt-8" }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct BoxProps {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub class: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub id: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub style: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub direction: Option<Responsive<Direction>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub wrap: Option<Responsive<Wrap>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub gap: Option<Responsive<Gap>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub cols: Option<Responsive<GridValue>>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub rows: Option<Responsive<GridValue>>,
}

impl BoxProps {
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<BoxProps> for LayoutBox {
    fn from(props: BoxProps) -> Self {
        LayoutBox::from_props(props)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;
    use crate::views::Decorators;

    #[test]
    fn empty_box_is_flex() {
        assert_eq!(LayoutBox::new().classes(), "flex");
        assert_eq!(LayoutBox::new().build().to_string(), r#"<div class="flex"></div>"#);
    }

    #[test]
    fn flex_props() {
        let b = LayoutBox::new()
            .direction(Direction::Col)
            .wrap([(Breakpoint::Base, Wrap::Nowrap), (Breakpoint::Lg, Wrap::Wrap)])
            .gap(Gap::G0);
        assert_eq!(b.classes(), "flex flex-col flex-nowrap lg:flex-wrap gap-0");
    }

    #[test]
    fn cols_or_rows_make_a_grid() {
        let b = grid([
            (Breakpoint::Base, GridValue::G1),
            (Breakpoint::Md, GridValue::G2),
            (Breakpoint::Lg, GridValue::G3),
        ]);
        assert!(b.is_grid());
        assert_eq!(b.classes(), "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3");

        let b = LayoutBox::new().rows(GridValue::G2).gap(Gap::G6);
        assert_eq!(b.classes(), "grid gap-6 grid-rows-2");
    }

    #[test]
    fn user_class_wins() {
        let b = LayoutBox::new().direction(Direction::Row).gap(Gap::G4).class("gap-8 flex-col");
        assert_eq!(b.classes(), "flex gap-8 flex-col");
        let b = grid(GridValue::G2).class("flex");
        assert_eq!(b.classes(), "grid-cols-2 flex");
    }

    #[test]
    fn unset_breakpoints_are_skipped() {
        let gap = Responsive::breakpoints()
            .at(Breakpoint::Base, Gap::G2)
            .at(Breakpoint::Md, None);
        assert_eq!(LayoutBox::new().gap(gap).classes(), "flex gap-2");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn props_from_json() {
        let props = BoxProps::from_json(
            r#"{"direction": {"base": "col", "md": "row"}, "gap": 4, "cols": {"lg": 3}, "id": "grid", "class": "mt-8"}"#,
        )
        .unwrap();
        assert_eq!(props.gap, Some(Responsive::Value(Gap::G4)));

        let el = LayoutBox::from(props).build();
        assert_eq!(el.get_attr("id"), Some("grid"));
        assert_eq!(el.class(), "grid flex-col md:flex-row gap-4 lg:grid-cols-3 mt-8");

        assert!(BoxProps::from_json(r#"{"gap": 7}"#).is_err());
        assert!(BoxProps::from_json(r#"{"direction": "column"}"#).is_err());
        assert!(BoxProps::from_json(r#"{"colour": "red"}"#).is_err());
        assert_eq!(BoxProps::from_json("{}").unwrap(), BoxProps::default());
    }
}
