//! Resolving responsive option values into breakpoint-prefixed classes.

use std::collections::HashMap;

use craft::options::{ColsClasses, DirectionClasses, GapClasses, WrapClasses};
use craft_test::prelude::*;

const DIRECTION: [(&str, &str); 2] = [("col", "flex-col"), ("row", "flex-row")];

#[test]
fn test_absent_value_resolves_to_nothing() {
    assert_eq!(responsive_class::<Gap, _>(None, &GapClasses), "");
}

#[test]
fn test_single_value_has_no_prefix() {
    let value = Responsive::from("row");
    assert_eq!(responsive_class(Some(&value), &DIRECTION), "flex-row");
}

#[test]
fn test_every_breakpoint_prefix() {
    let mut value = Responsive::breakpoints();
    for bp in Breakpoint::iter() {
        value = value.at(bp, Direction::Row);
    }
    let classes = value.classes(&DirectionClasses);
    assert_eq!(
        classes,
        "flex-row sm:flex-row md:flex-row lg:flex-row xl:flex-row 2xl:flex-row"
    );
    let set = ClassSet::parse(&classes);
    assert_eq!(set.under("2xl"), ["flex-row"]);
    assert_eq!(set.unscoped(), ["flex-row"]);
}

#[test]
fn test_unset_breakpoints_are_skipped() {
    let wrap = Responsive::breakpoints()
        .at(Breakpoint::Base, Wrap::Wrap)
        .at(Breakpoint::Sm, None)
        .at(Breakpoint::Xl, Wrap::Nowrap);
    let classes = wrap.classes(&WrapClasses);
    assert_eq!(classes, "flex-wrap xl:flex-nowrap");
    assert!(ClassSet::parse(&classes).under("sm").is_empty());
}

#[test]
fn test_values_missing_from_the_map_are_skipped() {
    let map: HashMap<u8, &str> = [(1, "grid-cols-1"), (2, "grid-cols-2")].into_iter().collect();
    let cols: Responsive<u8> = [("base", 1), ("md", 5), ("lg", 2)].into();
    assert_eq!(cols.classes(&map), "grid-cols-1 lg:grid-cols-2");
}

#[test]
fn test_entries_keep_insertion_order() {
    let cols: Responsive<GridValue> = [
        (Breakpoint::Xl, GridValue::G4),
        (Breakpoint::Base, GridValue::G1),
        (Breakpoint::Md, GridValue::G2),
    ]
    .into();
    assert_eq!(cols.classes(&ColsClasses), "xl:grid-cols-4 grid-cols-1 md:grid-cols-2");
}

#[test]
fn test_unknown_keys_are_used_as_prefixes() {
    let gap: Responsive<Gap> = [("base", Gap::G2), ("print", Gap::G0), ("3xl", Gap::G12)].into();
    assert_eq!(gap.classes(&GapClasses), "gap-2 print:gap-0 3xl:gap-12");
}

#[test]
fn test_json_values_resolve() {
    let direction: Responsive<Direction> =
        serde_json::from_str(r#"{"base": "col", "md": "row"}"#).unwrap();
    assert_eq!(direction.classes(&DirectionClasses), "flex-col md:flex-row");

    let gap: Responsive<Gap> = serde_json::from_str("4").unwrap();
    assert_eq!(gap.classes(&GapClasses), "gap-4");
}

#[test]
fn test_cascade_matches_screen_width() {
    let cols: Responsive<GridValue> = [
        (Breakpoint::Base, GridValue::G1),
        (Breakpoint::Md, GridValue::G2),
        (Breakpoint::Lg, GridValue::G3),
    ]
    .into();
    let widths = ScreenWidths::default();
    let at = |width: f64| cols.value_at_width(width, &widths).copied();
    assert_eq!(at(0.0), Some(GridValue::G1));
    assert_eq!(at(767.0), Some(GridValue::G1));
    assert_eq!(at(768.0), Some(GridValue::G2));
    assert_eq!(at(1023.9), Some(GridValue::G2));
    assert_eq!(at(4000.0), Some(GridValue::G3));
    assert_eq!(
        cols.keys_set(),
        BreakpointSet::from_iter([Breakpoint::Base, Breakpoint::Md, Breakpoint::Lg])
    );
}
