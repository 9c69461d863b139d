//! Rendering pages out of the layout primitives.

use craft::styles::{self, layout};
use craft_test::prelude::*;

fn page() -> Element {
    Layout::new()
        .children(Main::new().children((
            Section::new().id("hero").children(
                Container::new().children(
                    LayoutBox::new()
                        .direction([(Breakpoint::Base, Direction::Col), (Breakpoint::Md, Direction::Row)])
                        .gap(Gap::G4)
                        .children(("Build", "Ship")),
                ),
            ),
            Section::new().children(
                grid([(Breakpoint::Base, GridValue::G1), (Breakpoint::Lg, GridValue::G3)])
                    .gap([(Breakpoint::Base, Gap::G2), (Breakpoint::Lg, Gap::G6)])
                    .children(["one", "two", "three"].map(|t| Article::new().child(t))),
            ),
        )))
        .build()
}

#[test]
fn test_document_structure() {
    let html = page();
    assert_eq!(html.tag(), "html");
    assert_eq!(html.get_attr("lang"), Some("en"));
    assert_eq!(find_by_tag(&html, "main").len(), 1);
    assert_eq!(find_by_tag(&html, "section").len(), 2);
    assert_eq!(find_by_tag(&html, "article").len(), 3);
    assert_eq!(html.text(), "BuildShiponetwothree");
}

#[test]
fn test_root_and_section_classes() {
    let html = page();
    assert_classes!(html, "scroll-smooth antialiased focus:scroll-auto");

    let hero = find_by_id(&html, "hero").unwrap();
    assert_classes!(hero, layout::SECTION);
}

#[test]
fn test_flex_box_classes() {
    let html = page();
    let boxes: Vec<&Element> = find_by_tag(&html, "div")
        .into_iter()
        .filter(|e| e.class().contains("flex"))
        .collect();
    assert_eq!(boxes.len(), 1);
    assert_eq!(boxes[0].class(), "flex flex-col md:flex-row gap-4");
}

#[test]
fn test_grid_box_classes() {
    let html = page();
    let grids = find_all(&html, |e| ClassSet::from(e.class()).contains("grid"));
    assert_eq!(grids.len(), 1);
    let classes = ClassSet::from(grids[0].class());
    assert_eq!(classes.under("lg"), ["gap-6", "grid-cols-3"]);
    assert_eq!(classes.unscoped(), ["grid", "gap-2", "grid-cols-1"]);
}

#[test]
fn test_prose_primitives_carry_typography() {
    let html = page();
    let main = find_by_tag(&html, "main")[0];
    for entry in styles::base_typography_styles() {
        assert_classes!(main, contains *entry);
    }
    assert!(!main.class().contains("[&_h1]:mt-8"));

    let article = find_by_tag(&html, "article")[0];
    assert_classes!(article, contains "max-w-prose [&>*+*]:mt-6 [&_h1]:mt-8 [&_h1]:mb-4");
}

#[test]
fn test_user_classes_override_defaults() {
    let container = Container::new().class("max-w-3xl p-0").build();
    assert_eq!(container.class(), "mx-auto sm:p-8 max-w-3xl p-0");

    let section = Section::new().class("md:py-24").style("scroll-margin-top: 4rem").build();
    assert_eq!(
        section.to_string(),
        r#"<section class="py-8 md:py-24" style="scroll-margin-top: 4rem"></section>"#
    );
}

#[test]
fn test_box_from_json_props() {
    let props = BoxProps::from_json(
        r#"{"direction": {"base": "col", "lg": "row"}, "wrap": "wrap", "gap": {"base": 2, "md": 8}}"#,
    )
    .unwrap();
    let el = LayoutBox::from_props(props).children("x").build();
    assert_eq!(el.class(), "flex flex-col lg:flex-row flex-wrap gap-2 md:gap-8");
    assert_eq!(el.to_string(), format!(r#"<div class="{}">x</div>"#, el.class()));
}

#[test]
fn test_text_is_escaped() {
    let el = Prose::new().children("<script>alert(1)</script> & more").build();
    assert!(el.to_string().ends_with(">&lt;script&gt;alert(1)&lt;/script&gt; &amp; more</div>"));
}
