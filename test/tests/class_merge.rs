//! Composing class lists with `cn`.

use craft::cn;
use craft::merge::{ClassMerger, ExtraGroup, MergeConfig, default_merger};
use craft_test::prelude::*;

#[test]
fn test_later_utility_wins() {
    assert_eq!(cn(["p-4", "p-8"]), "p-8");
    assert_eq!(cn!("text-sm", "text-lg"), "text-lg");
    assert_eq!(cn!("flex flex-col", "flex-row"), "flex flex-row");
}

#[test]
fn test_conditional_inputs() {
    let selected = true;
    let disabled = false;
    let classes = cn!(
        "rounded-md px-4 py-2",
        ("bg-primary text-primary-foreground", selected),
        ("opacity-50 cursor-not-allowed", disabled),
        None::<String>,
        vec!["px-6"],
    );
    assert_eq!(classes, "rounded-md py-2 bg-primary text-primary-foreground px-6");
}

#[test]
fn test_responsive_classes_compose() {
    let direction = Responsive::breakpoints()
        .at(Breakpoint::Base, Direction::Col)
        .at(Breakpoint::Md, Direction::Row);
    let resolved = direction.classes(&craft::options::DirectionClasses);
    let classes = cn!("flex", resolved, "md:flex-col");
    assert_eq!(classes, "flex flex-col md:flex-col");
}

#[test]
fn test_duplicate_free_output() {
    let classes = cn!("card mt-2", "card", "mt-4 shadow", "shadow");
    assert!(ClassSet::parse(&classes).duplicates().is_empty());
    assert_classes!(classes, "card mt-4 shadow");
}

#[test]
fn test_merge_is_stable() {
    let once = cn!("px-2 py-1 bg-red-500 hover:bg-red-600", "p-3 bg-blue-500");
    assert_eq!(once, "hover:bg-red-600 p-3 bg-blue-500");
    assert_eq!(cn!(once.as_str()), once);
}

#[test]
fn test_default_merger_is_shared() {
    assert!(std::ptr::eq(default_merger(), default_merger()));
    assert_eq!(default_merger().config().cache_size, 500);
}

#[test]
fn test_configured_merger() {
    let config = MergeConfig::from_json(
        r#"{
            "prefix": "tw-",
            "cache_size": 0,
            "extra_groups": [{"id": "tw-elevation", "prefixes": ["elevation"], "conflicts": ["shadow"]}]
        }"#,
    )
    .unwrap();
    let merger = ClassMerger::new(config);
    assert_eq!(merger.merge("tw-shadow-lg tw-elevation-2"), "tw-elevation-2");
    assert_eq!(merger.merge_values(["tw-m-2", "tw-mx-4", "tw-m-1"]), "tw-m-1");

    let merger = ClassMerger::new(
        MergeConfig::default().extra_group(ExtraGroup::new("content-auto", ["content-auto"])),
    );
    assert_eq!(merger.merge("content-auto content-auto"), "content-auto");
}
