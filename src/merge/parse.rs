//! Splitting a class token into its variant modifiers and base utility.

use smallvec::SmallVec;

/// A class token broken into its parts.
///
/// `hover:md:!-mt-2` parses to modifiers `["hover", "md"]`, `important`,
/// `negative` and base `mt-2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedClass<'a> {
    pub(crate) modifiers: SmallVec<[&'a str; 4]>,
    pub(crate) important: bool,
    pub(crate) negative: bool,
    pub(crate) base: &'a str,
}

impl<'a> ParsedClass<'a> {
    pub(crate) fn parse(token: &'a str, separator: char) -> Self {
        let mut modifiers = SmallVec::new();
        let mut bracket_depth = 0usize;
        let mut paren_depth = 0usize;
        let mut start = 0;

        for (i, c) in token.char_indices() {
            match c {
                '[' => bracket_depth += 1,
                ']' => bracket_depth = bracket_depth.saturating_sub(1),
                '(' => paren_depth += 1,
                ')' => paren_depth = paren_depth.saturating_sub(1),
                c if c == separator && bracket_depth == 0 && paren_depth == 0 => {
                    modifiers.push(&token[start..i]);
                    start = i + c.len_utf8();
                }
                _ => {}
            }
        }

        let mut base = &token[start..];
        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }

        let mut negative = false;
        if let Some(rest) = base.strip_prefix('-') {
            base = rest;
            negative = true;
        }

        Self {
            modifiers,
            important,
            negative,
            base,
        }
    }

    /// A key identifying the variant context of this class.
    ///
    /// Plain variants are order-insensitive (`hover:focus:` equals
    /// `focus:hover:`), so runs of them are sorted. Arbitrary variants such as
    /// `[&_h1]` depend on position and split the runs.
    pub(crate) fn variant_key(&self, separator: char) -> String {
        let mut sorted: SmallVec<[&str; 4]> = SmallVec::new();
        let mut run: SmallVec<[&str; 4]> = SmallVec::new();

        for &modifier in &self.modifiers {
            if modifier.starts_with('[') {
                run.sort_unstable();
                sorted.append(&mut run);
                sorted.push(modifier);
            } else {
                run.push(modifier);
            }
        }
        run.sort_unstable();
        sorted.append(&mut run);

        let mut key = String::new();
        for modifier in sorted {
            key.push_str(modifier);
            key.push(separator);
        }
        if self.important {
            key.push('!');
        }
        key
    }
}

#[cfg(test)]
mod tests {
    use super::ParsedClass;

    #[test]
    fn plain() {
        let parsed = ParsedClass::parse("p-4", ':');
        assert!(parsed.modifiers.is_empty());
        assert_eq!(parsed.base, "p-4");
        assert!(!parsed.important);
        assert!(!parsed.negative);
    }

    #[test]
    fn modifiers_important_negative() {
        let parsed = ParsedClass::parse("hover:md:!-mt-2", ':');
        assert_eq!(parsed.modifiers.as_slice(), ["hover", "md"]);
        assert!(parsed.important);
        assert!(parsed.negative);
        assert_eq!(parsed.base, "mt-2");

        let parsed = ParsedClass::parse("p-4!", ':');
        assert!(parsed.important);
        assert_eq!(parsed.base, "p-4");
    }

    #[test]
    fn separators_inside_brackets() {
        let parsed = ParsedClass::parse("[&_a]:hover:decoration-primary", ':');
        assert_eq!(parsed.modifiers.as_slice(), ["[&_a]", "hover"]);
        assert_eq!(parsed.base, "decoration-primary");

        let parsed = ParsedClass::parse("[&_li]:has([type=checkbox]):pl-8", ':');
        assert_eq!(parsed.modifiers.as_slice(), ["[&_li]", "has([type=checkbox])"]);
        assert_eq!(parsed.base, "pl-8");

        let parsed = ParsedClass::parse("[mask-type:luminance]", ':');
        assert!(parsed.modifiers.is_empty());
        assert_eq!(parsed.base, "[mask-type:luminance]");
    }

    #[test]
    fn variant_keys() {
        let a = ParsedClass::parse("hover:focus:p-2", ':');
        let b = ParsedClass::parse("focus:hover:p-4", ':');
        assert_eq!(a.variant_key(':'), b.variant_key(':'));

        let a = ParsedClass::parse("[&_p]:hover:p-2", ':');
        let b = ParsedClass::parse("hover:[&_p]:p-2", ':');
        assert_ne!(a.variant_key(':'), b.variant_key(':'));

        assert_eq!(ParsedClass::parse("!p-2", ':').variant_key(':'), "!");
        assert_eq!(ParsedClass::parse("p-2", ':').variant_key(':'), "");
    }
}
