//! Utility class groups.
//!
//! Every utility belongs to at most one group. Two classes of the same group
//! set the same CSS property, so when both apply in the same variant context
//! only the later one survives. Some groups also override narrower ones
//! (`p-*` overrides `px-*` and `pt-*`), see [`conflicting_groups`].

use std::borrow::Cow;

use bitflags::bitflags;

bitflags! {
    /// The kinds of value a rule accepts after its prefix.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Accepts: u16 {
        /// The prefix on its own, e.g. `border`.
        const BARE = 1;
        /// Any non-empty value.
        const ANY = 1 << 1;
        const INTEGER = 1 << 2;
        const NUMBER = 1 << 3;
        const FRACTION = 1 << 4;
        /// `xs`, `sm`, `base`, `lg`, `2xl` ...
        const TSHIRT = 1 << 5;
        /// Any `[...]` value.
        const ARBITRARY = 1 << 6;
        /// A `[...]` value that looks like a length.
        const ARBITRARY_LENGTH = 1 << 7;
        /// Named and numeric font weights.
        const WEIGHT = 1 << 8;
        /// A `[...]` value holding a plain number, e.g. `[500]`.
        const ARBITRARY_NUMBER = 1 << 9;
        /// A `[...]` value holding an image, e.g. `[url(/a.png)]`.
        const ARBITRARY_IMAGE = 1 << 10;
    }
}

#[derive(Debug, Clone, Copy)]
struct Rule {
    prefix: &'static str,
    accepts: Accepts,
    keywords: &'static [&'static str],
    group: &'static str,
}

impl Rule {
    const fn new(prefix: &'static str, accepts: Accepts, group: &'static str) -> Self {
        Self {
            prefix,
            accepts,
            keywords: &[],
            group,
        }
    }

    const fn keywords(prefix: &'static str, keywords: &'static [&'static str], group: &'static str) -> Self {
        Self {
            prefix,
            accepts: Accepts::empty(),
            keywords,
            group,
        }
    }

    const fn with_keywords(mut self, keywords: &'static [&'static str]) -> Self {
        self.keywords = keywords;
        self
    }

    fn matches(&self, base: &str) -> bool {
        let value = if self.prefix.is_empty() {
            Some(base)
        } else if base == self.prefix {
            Some("")
        } else {
            base.strip_prefix(self.prefix).and_then(|rest| rest.strip_prefix('-'))
        };
        value.is_some_and(|value| self.accepts_value(value))
    }

    fn accepts_value(&self, value: &str) -> bool {
        if value.is_empty() {
            return self.accepts.contains(Accepts::BARE) || self.keywords.contains(&"");
        }
        if self.keywords.contains(&value) {
            return true;
        }
        let a = self.accepts;
        (a.contains(Accepts::ANY))
            || (a.contains(Accepts::INTEGER) && is_integer(value))
            || (a.contains(Accepts::NUMBER) && is_number(value))
            || (a.contains(Accepts::FRACTION) && is_fraction(value))
            || (a.contains(Accepts::TSHIRT) && is_tshirt(value))
            || (a.contains(Accepts::ARBITRARY) && is_arbitrary(value))
            || (a.contains(Accepts::ARBITRARY_LENGTH) && is_arbitrary_length(value))
            || (a.contains(Accepts::WEIGHT) && is_weight(value))
            || (a.contains(Accepts::ARBITRARY_NUMBER) && is_arbitrary_number(value))
            || (a.contains(Accepts::ARBITRARY_IMAGE) && is_arbitrary_image(value))
    }
}

fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

fn is_number(value: &str) -> bool {
    !value.starts_with('.') && !value.ends_with('.') && value.parse::<f64>().is_ok_and(f64::is_finite)
}

fn is_fraction(value: &str) -> bool {
    value
        .split_once('/')
        .is_some_and(|(n, d)| is_integer(n) && is_integer(d))
}

fn is_tshirt(value: &str) -> bool {
    // `text-sm/6` carries a line height after the slash.
    let value = value.split_once('/').map_or(value, |(size, _)| size);
    match value {
        "xs" | "sm" | "base" | "md" | "lg" | "xl" => true,
        _ => value
            .strip_suffix("xl")
            .is_some_and(|n| matches!(n, "2" | "3" | "4" | "5" | "6" | "7" | "8" | "9")),
    }
}

fn is_arbitrary(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('[') && value.ends_with(']')
}

fn is_arbitrary_length(value: &str) -> bool {
    if !is_arbitrary(value) {
        return false;
    }
    let inner = &value[1..value.len() - 1];
    inner.starts_with("length:")
        || inner.starts_with("calc(")
        || inner.starts_with("clamp(")
        || inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
}

fn is_arbitrary_number(value: &str) -> bool {
    is_arbitrary(value) && {
        let inner = &value[1..value.len() - 1];
        is_number(inner.strip_prefix("number:").unwrap_or(inner))
    }
}

fn is_arbitrary_image(value: &str) -> bool {
    if !is_arbitrary(value) {
        return false;
    }
    let inner = &value[1..value.len() - 1];
    ["image:", "url(", "linear-gradient(", "radial-gradient(", "conic-gradient(", "repeating-", "image-set("]
        .iter()
        .any(|start| inner.starts_with(start))
}

fn is_weight(value: &str) -> bool {
    matches!(
        value,
        "thin" | "extralight" | "light" | "normal" | "medium" | "semibold" | "bold" | "extrabold" | "black"
    ) || is_integer(value)
}

const BARE: Accepts = Accepts::BARE;
const ANY: Accepts = Accepts::ANY;
const WIDTH: Accepts = Accepts::BARE
    .union(Accepts::NUMBER)
    .union(Accepts::ARBITRARY_LENGTH);

// Rules are tried in order and the first match wins, so longer prefixes must
// come before the shorter prefixes they extend (`gap-x` before `gap`).
const RULES: &[Rule] = &[
    // Keywords that are complete classes on their own.
    Rule::keywords(
        "",
        &[
            "block", "inline-block", "inline", "flex", "inline-flex", "table", "inline-table",
            "table-caption", "table-cell", "table-column", "table-column-group",
            "table-footer-group", "table-header-group", "table-row-group", "table-row",
            "flow-root", "grid", "inline-grid", "contents", "list-item", "hidden",
        ],
        "display",
    ),
    Rule::keywords("", &["static", "fixed", "absolute", "relative", "sticky"], "position"),
    Rule::keywords("", &["visible", "invisible", "collapse"], "visibility"),
    Rule::keywords("", &["antialiased", "subpixel-antialiased"], "font-smoothing"),
    Rule::keywords("", &["italic", "not-italic"], "font-style"),
    Rule::keywords("", &["underline", "overline", "line-through", "no-underline"], "text-decoration"),
    Rule::keywords("", &["uppercase", "lowercase", "capitalize", "normal-case"], "text-transform"),
    Rule::keywords("", &["truncate"], "text-overflow"),
    Rule::keywords("", &["sr-only", "not-sr-only"], "sr"),
    Rule::keywords("", &["isolate", "isolation-auto"], "isolation"),
    Rule::keywords("scroll", &["smooth", "auto"], "scroll-behavior"),
    // Flexbox and grid.
    Rule::keywords("flex", &["row", "row-reverse", "col", "col-reverse"], "flex-direction"),
    Rule::keywords("flex", &["wrap", "wrap-reverse", "nowrap"], "flex-wrap"),
    Rule::new("flex", Accepts::NUMBER.union(Accepts::FRACTION).union(Accepts::ARBITRARY), "flex")
        .with_keywords(&["auto", "initial", "none"]),
    Rule::new("grow", Accepts::BARE.union(Accepts::INTEGER).union(Accepts::ARBITRARY), "grow"),
    Rule::new("shrink", Accepts::BARE.union(Accepts::INTEGER).union(Accepts::ARBITRARY), "shrink"),
    Rule::new("basis", ANY, "basis"),
    Rule::new("order", Accepts::INTEGER.union(Accepts::ARBITRARY), "order")
        .with_keywords(&["first", "last", "none"]),
    Rule::new("grid-cols", Accepts::INTEGER.union(Accepts::ARBITRARY), "grid-cols")
        .with_keywords(&["none", "subgrid"]),
    Rule::new("grid-rows", Accepts::INTEGER.union(Accepts::ARBITRARY), "grid-rows")
        .with_keywords(&["none", "subgrid"]),
    Rule::new("grid-flow", ANY, "grid-flow"),
    Rule::new("col-span", ANY, "col-span"),
    Rule::new("col-start", ANY, "col-start"),
    Rule::new("col-end", ANY, "col-end"),
    Rule::new("row-span", ANY, "row-span"),
    Rule::new("row-start", ANY, "row-start"),
    Rule::new("row-end", ANY, "row-end"),
    Rule::new("auto-cols", ANY, "auto-cols"),
    Rule::new("auto-rows", ANY, "auto-rows"),
    Rule::new("gap-x", ANY, "gap-x"),
    Rule::new("gap-y", ANY, "gap-y"),
    Rule::new("gap", ANY, "gap"),
    Rule::new("justify-items", ANY, "justify-items"),
    Rule::new("justify-self", ANY, "justify-self"),
    Rule::new("justify", ANY, "justify-content"),
    Rule::keywords(
        "content",
        &["normal", "center", "start", "end", "between", "around", "evenly", "baseline", "stretch"],
        "align-content",
    ),
    Rule::new("content", Accepts::ARBITRARY, "content").with_keywords(&["none"]),
    Rule::new("items", ANY, "align-items"),
    Rule::new("self", ANY, "align-self"),
    Rule::new("place-content", ANY, "place-content"),
    Rule::new("place-items", ANY, "place-items"),
    Rule::new("place-self", ANY, "place-self"),
    // Spacing.
    Rule::new("p", ANY, "p"),
    Rule::new("px", ANY, "px"),
    Rule::new("py", ANY, "py"),
    Rule::new("ps", ANY, "ps"),
    Rule::new("pe", ANY, "pe"),
    Rule::new("pt", ANY, "pt"),
    Rule::new("pr", ANY, "pr"),
    Rule::new("pb", ANY, "pb"),
    Rule::new("pl", ANY, "pl"),
    Rule::new("m", ANY, "m"),
    Rule::new("mx", ANY, "mx"),
    Rule::new("my", ANY, "my"),
    Rule::new("ms", ANY, "ms"),
    Rule::new("me", ANY, "me"),
    Rule::new("mt", ANY, "mt"),
    Rule::new("mr", ANY, "mr"),
    Rule::new("mb", ANY, "mb"),
    Rule::new("ml", ANY, "ml"),
    Rule::keywords("space-x", &["reverse"], "space-x-reverse"),
    Rule::keywords("space-y", &["reverse"], "space-y-reverse"),
    Rule::new("space-x", ANY, "space-x"),
    Rule::new("space-y", ANY, "space-y"),
    // Sizing.
    Rule::new("size", ANY, "size"),
    Rule::new("min-w", ANY, "min-w"),
    Rule::new("max-w", ANY, "max-w"),
    Rule::new("w", ANY, "w"),
    Rule::new("min-h", ANY, "min-h"),
    Rule::new("max-h", ANY, "max-h"),
    Rule::new("h", ANY, "h"),
    // Typography.
    Rule::new("text", Accepts::TSHIRT.union(Accepts::ARBITRARY_LENGTH), "font-size"),
    Rule::keywords("text", &["left", "center", "right", "justify", "start", "end"], "text-align"),
    Rule::keywords("text", &["ellipsis", "clip"], "text-overflow"),
    Rule::keywords("text", &["wrap", "nowrap", "balance", "pretty"], "text-wrap"),
    Rule::new("text", ANY, "text-color"),
    Rule::new("font", Accepts::WEIGHT.union(Accepts::ARBITRARY_NUMBER), "font-weight"),
    Rule::new("font", ANY, "font-family"),
    Rule::new("tracking", ANY, "tracking"),
    Rule::new("leading", ANY, "leading"),
    Rule::new("line-clamp", ANY, "line-clamp"),
    Rule::new("list-image", ANY, "list-image"),
    Rule::keywords("list", &["inside", "outside"], "list-position"),
    Rule::new("list", ANY, "list-style-type"),
    Rule::new("underline-offset", ANY, "underline-offset"),
    Rule::keywords("decoration", &["solid", "double", "dotted", "dashed", "wavy"], "decoration-style"),
    Rule::new("decoration", Accepts::NUMBER.union(Accepts::ARBITRARY_LENGTH), "decoration-thickness")
        .with_keywords(&["auto", "from-font"]),
    Rule::new("decoration", ANY, "decoration-color"),
    Rule::new("indent", ANY, "indent"),
    Rule::new("align", ANY, "vertical-align"),
    Rule::new("whitespace", ANY, "whitespace"),
    Rule::keywords("break", &["normal", "words", "all", "keep"], "word-break"),
    Rule::new("hyphens", ANY, "hyphens"),
    // Backgrounds.
    Rule::keywords("bg", &["fixed", "local", "scroll"], "bg-attachment"),
    Rule::new("bg-clip", ANY, "bg-clip"),
    Rule::new("bg-origin", ANY, "bg-origin"),
    Rule::new("bg-gradient-to", ANY, "bg-image"),
    Rule::new("bg-linear", ANY, "bg-image"),
    Rule::new("bg-radial", BARE.union(ANY), "bg-image"),
    Rule::new("bg-conic", BARE.union(ANY), "bg-image"),
    Rule::new("bg", Accepts::ARBITRARY_IMAGE, "bg-image"),
    Rule::keywords("bg", &["none"], "bg-image"),
    Rule::keywords(
        "bg",
        &["bottom", "center", "left", "left-bottom", "left-top", "right", "right-bottom", "right-top", "top"],
        "bg-position",
    ),
    Rule::keywords(
        "bg",
        &["repeat", "no-repeat", "repeat-x", "repeat-y", "repeat-round", "repeat-space"],
        "bg-repeat",
    ),
    Rule::keywords("bg", &["auto", "cover", "contain"], "bg-size"),
    Rule::new("bg", ANY, "bg-color"),
    // Borders.
    Rule::new("rounded-ss", BARE.union(ANY), "rounded-ss"),
    Rule::new("rounded-se", BARE.union(ANY), "rounded-se"),
    Rule::new("rounded-ee", BARE.union(ANY), "rounded-ee"),
    Rule::new("rounded-es", BARE.union(ANY), "rounded-es"),
    Rule::new("rounded-tl", BARE.union(ANY), "rounded-tl"),
    Rule::new("rounded-tr", BARE.union(ANY), "rounded-tr"),
    Rule::new("rounded-br", BARE.union(ANY), "rounded-br"),
    Rule::new("rounded-bl", BARE.union(ANY), "rounded-bl"),
    Rule::new("rounded-s", BARE.union(ANY), "rounded-s"),
    Rule::new("rounded-e", BARE.union(ANY), "rounded-e"),
    Rule::new("rounded-t", BARE.union(ANY), "rounded-t"),
    Rule::new("rounded-r", BARE.union(ANY), "rounded-r"),
    Rule::new("rounded-b", BARE.union(ANY), "rounded-b"),
    Rule::new("rounded-l", BARE.union(ANY), "rounded-l"),
    Rule::new("rounded", BARE.union(ANY), "rounded"),
    Rule::new("border-spacing-x", ANY, "border-spacing-x"),
    Rule::new("border-spacing-y", ANY, "border-spacing-y"),
    Rule::new("border-spacing", ANY, "border-spacing"),
    Rule::new("border-x", WIDTH, "border-w-x"),
    Rule::new("border-y", WIDTH, "border-w-y"),
    Rule::new("border-s", WIDTH, "border-w-s"),
    Rule::new("border-e", WIDTH, "border-w-e"),
    Rule::new("border-t", WIDTH, "border-w-t"),
    Rule::new("border-r", WIDTH, "border-w-r"),
    Rule::new("border-b", WIDTH, "border-w-b"),
    Rule::new("border-l", WIDTH, "border-w-l"),
    Rule::new("border-x", ANY, "border-color-x"),
    Rule::new("border-y", ANY, "border-color-y"),
    Rule::new("border-s", ANY, "border-color-s"),
    Rule::new("border-e", ANY, "border-color-e"),
    Rule::new("border-t", ANY, "border-color-t"),
    Rule::new("border-r", ANY, "border-color-r"),
    Rule::new("border-b", ANY, "border-color-b"),
    Rule::new("border-l", ANY, "border-color-l"),
    Rule::new("border", WIDTH, "border-w"),
    Rule::keywords("border", &["solid", "dashed", "dotted", "double", "hidden", "none"], "border-style"),
    Rule::keywords("border", &["collapse", "separate"], "border-collapse"),
    Rule::new("border", ANY, "border-color"),
    Rule::new("outline-offset", ANY, "outline-offset"),
    Rule::new("outline", Accepts::NUMBER.union(Accepts::ARBITRARY_LENGTH), "outline-w"),
    Rule::keywords(
        "outline",
        &["", "none", "hidden", "solid", "dashed", "dotted", "double"],
        "outline-style",
    ),
    Rule::new("outline", ANY, "outline-color"),
    Rule::new("ring-offset", WIDTH, "ring-offset-w"),
    Rule::new("ring-offset", ANY, "ring-offset-color"),
    Rule::keywords("ring", &["inset"], "ring-inset"),
    Rule::new("ring", WIDTH, "ring-w"),
    Rule::new("ring", ANY, "ring-color"),
    // Effects.
    Rule::new("shadow", BARE.union(Accepts::TSHIRT).union(Accepts::ARBITRARY_LENGTH), "shadow")
        .with_keywords(&["inner", "none"]),
    Rule::new("shadow", ANY, "shadow-color"),
    Rule::new("opacity", ANY, "opacity"),
    // Layout.
    Rule::new("overflow-x", ANY, "overflow-x"),
    Rule::new("overflow-y", ANY, "overflow-y"),
    Rule::new("overflow", ANY, "overflow"),
    Rule::new("inset-x", ANY, "inset-x"),
    Rule::new("inset-y", ANY, "inset-y"),
    Rule::new("inset", ANY, "inset"),
    Rule::new("start", ANY, "start"),
    Rule::new("end", ANY, "end"),
    Rule::new("top", ANY, "top"),
    Rule::new("right", ANY, "right"),
    Rule::new("bottom", ANY, "bottom"),
    Rule::new("left", ANY, "left"),
    Rule::new("z", ANY, "z"),
    Rule::new("float", ANY, "float"),
    Rule::new("clear", ANY, "clear"),
    Rule::keywords("object", &["contain", "cover", "fill", "none", "scale-down"], "object-fit"),
    Rule::new("object", ANY, "object-position"),
    Rule::new("aspect", ANY, "aspect"),
    Rule::new("columns", ANY, "columns"),
    Rule::keywords("box", &["border", "content"], "box-sizing"),
    Rule::new("box-decoration", ANY, "box-decoration"),
    // Interactivity, transitions and transforms.
    Rule::new("cursor", ANY, "cursor"),
    Rule::new("pointer-events", ANY, "pointer-events"),
    Rule::new("select", ANY, "select"),
    Rule::new("resize", BARE.union(ANY), "resize"),
    Rule::new("appearance", ANY, "appearance"),
    Rule::new("transition", BARE.union(ANY), "transition"),
    Rule::new("duration", ANY, "duration"),
    Rule::new("ease", ANY, "ease"),
    Rule::new("delay", ANY, "delay"),
    Rule::new("animate", ANY, "animate"),
    Rule::new("scale-x", ANY, "scale-x"),
    Rule::new("scale-y", ANY, "scale-y"),
    Rule::new("scale", ANY, "scale"),
    Rule::new("rotate", ANY, "rotate"),
    Rule::new("translate-x", ANY, "translate-x"),
    Rule::new("translate-y", ANY, "translate-y"),
    Rule::new("skew-x", ANY, "skew-x"),
    Rule::new("skew-y", ANY, "skew-y"),
    Rule::new("origin", ANY, "origin"),
    Rule::new("fill", ANY, "fill"),
    Rule::new("stroke", Accepts::INTEGER.union(Accepts::ARBITRARY_LENGTH), "stroke-w"),
    Rule::new("stroke", ANY, "stroke"),
];

/// The built-in group of a base utility (modifiers, `!` and `-` removed).
pub(crate) fn class_group(base: &str) -> Option<Cow<'static, str>> {
    if is_arbitrary(base) {
        // `[mask-type:alpha]` sets the property named before the colon.
        let inner = &base[1..base.len() - 1];
        return inner
            .split_once(':')
            .filter(|(property, value)| !property.is_empty() && !value.is_empty())
            .map(|(property, _)| Cow::Owned(format!("[{property}]")));
    }

    RULES
        .iter()
        .find(|rule| rule.matches(base))
        .map(|rule| Cow::Borrowed(rule.group))
}

/// Groups that a class of `group` also overrides.
pub(crate) fn conflicting_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "border-spacing" => &["border-spacing-x", "border-spacing-y"],
        "size" => &["w", "h"],
        "flex" => &["basis", "grow", "shrink"],
        "font-size" => &["leading"],
        "overflow" => &["overflow-x", "overflow-y"],
        "inset" => &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "scale" => &["scale-x", "scale-y"],
        "rounded" => &[
            "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
            "rounded-ss", "rounded-se", "rounded-ee", "rounded-es", "rounded-tl", "rounded-tr",
            "rounded-br", "rounded-bl",
        ],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x", "border-w-y", "border-w-s", "border-w-e", "border-w-t", "border-w-r",
            "border-w-b", "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x", "border-color-y", "border-color-s", "border-color-e",
            "border-color-t", "border-color-r", "border-color-b", "border-color-l",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        _ => &[],
    }
}
