//! Style sheets of the design system.
//!
//! The typography tables style rendered prose (markdown output and the like)
//! by targeting descendant elements through arbitrary variants such as
//! `[&_h1]:`. The layout entries style the page primitives in
//! [`views`](crate::views).

use std::sync::LazyLock;

use strum_macros::{EnumIter, IntoStaticStr};

pub mod typography {
    /// Font, smoothing, and headings and inline text without spacing.
    pub const BASE: &[&str] = &[
        "font-sans antialiased",
        "[&_h1]:text-4xl [&_h1]:font-medium [&_h1]:tracking-tight",
        "[&_h2]:text-3xl [&_h2]:font-medium [&_h2]:tracking-tight",
        "[&_h3]:text-2xl [&_h3]:font-medium [&_h3]:tracking-tight",
        "[&_h4]:text-xl [&_h4]:font-medium [&_h4]:tracking-tight",
        "[&_h5]:text-lg [&_h5]:font-medium [&_h5]:tracking-tight",
        "[&_h6]:text-base [&_h6]:font-medium [&_h6]:tracking-tight",
        "[&_p]:text-base [&_p]:leading-7 [&_p]:mb-4",
        "[&_strong]:font-semibold",
        "[&_em]:italic",
        "[&_del]:line-through",
        "[&_small]:text-sm [&_small]:font-medium [&_small]:leading-none",
        "[&_sub]:text-sm [&_sup]:text-sm",
    ];

    /// Heading margins, only used by articles.
    pub const HEADER_SPACING: &[&str] = &[
        "[&_h1]:mt-8 [&_h1]:mb-4",
        "[&_h2]:mt-8 [&_h2]:mb-4",
        "[&_h3]:mt-6 [&_h3]:mb-3",
        "[&_h4]:mt-6 [&_h4]:mb-3",
        "[&_h5]:mt-4 [&_h5]:mb-2",
        "[&_h6]:mt-4 [&_h6]:mb-2",
    ];

    pub const LINKS: &[&str] = &[
        "[&_a]:underline [&_a]:underline-offset-4 [&_a]:decoration-primary/50 [&_a]:transition-colors",
        "[&_a]:hover:decoration-primary [&_a]:hover:text-primary",
    ];

    /// Bullets, numbering, nesting and task lists.
    pub const LISTS: &[&str] = &[
        "[&_ul]:pl-0 [&_ul]:list-none [&_ul]:space-y-2",
        "[&_ul_li]:relative [&_ul_li]:pl-6",
        "[&_ul_li]:before:absolute [&_ul_li]:before:left-1 [&_ul_li]:before:top-[0.6875em] [&_ul_li]:before:h-1.5 [&_ul_li]:before:w-1.5 [&_ul_li]:before:rounded-full [&_ul_li]:before:bg-foreground/80",
        "[&_ol]:list-decimal [&_ol]:pl-6 [&_ol]:space-y-2",
        "[&_ol_ol]:list-[lower-alpha] [&_ol_ol]:pl-6",
        "[&_ol_ol_ol]:list-[lower-roman] [&_ol_ol_ol]:pl-6",
        "[&_li]:pl-2",
        "[&_ol>li]:marker:text-foreground/80",
        "[&_li_ul]:mt-2 [&_li_ol]:mt-2",
        "[&_li_ul]:mb-0 [&_li_ol]:mb-0",
        "[&_ul_ul_li]:before:bg-foreground/60",
        "[&_ul_ul_ul_li]:before:bg-foreground/40",
        "[&_li]:has([type=checkbox]):pl-8",
        "[&_li]:has([type=checkbox]):list-none",
        "[&_li_input[type=checkbox]]:absolute [&_li_input[type=checkbox]]:left-0 [&_li_input[type=checkbox]]:top-1 [&_li_input[type=checkbox]]:mt-0.5",
        "[&_ol_ul]:pl-6",
        "[&_ul_ol]:pl-6",
    ];

    pub const CODE: &[&str] = &[
        "[&_code]:relative [&_code]:rounded [&_code]:bg-muted/50 [&_code]:px-[0.3rem] [&_code]:py-[0.2rem] [&_code]:font-mono [&_code]:text-sm [&_code]:font-medium",
        "[&_pre]:overflow-x-auto [&_pre]:rounded-lg [&_pre]:border [&_pre]:bg-muted/50 [&_pre]:p-4 [&_pre]:my-4",
        "[&_pre_code]:bg-transparent [&_pre_code]:p-0 [&_pre_code]:text-sm",
        "[&_pre_code]:block [&_pre_code]:w-full",
    ];

    pub const TABLES: &[&str] = &[
        "[&_table]:w-full [&_table]:my-4 [&_table]:overflow-x-auto [&_table]:rounded-lg [&_table]:border",
        "[&_thead]:bg-muted/50",
        "[&_tr]:border-b last:[&_tr]:border-0",
        "[&_th]:border-r [&_th]:px-4 [&_th]:py-2 [&_th]:text-left [&_th]:font-semibold last:[&_th]:border-0",
        "[&_td]:border-r [&_td]:px-4 [&_td]:py-2 last:[&_td]:border-0",
    ];

    pub const MEDIA: &[&str] = &[
        "[&_img]:rounded-lg [&_img]:border [&_img]:my-4 [&_img]:max-w-full [&_img]:h-auto",
        "[&_video]:rounded-lg [&_video]:border [&_video]:my-4",
        "[&_figure]:my-4",
        "[&_figure_img]:my-0",
        "[&_figure_figcaption]:text-sm [&_figure_figcaption]:mt-2 [&_figure_figcaption]:text-muted-foreground",
    ];

    /// Quotes, rules, abbreviations, details, keyboard input, highlights,
    /// selection and footnotes.
    pub const MISC: &[&str] = &[
        "[&_blockquote]:border-l-4 [&_blockquote]:border-primary/20 [&_blockquote]:pl-4 [&_blockquote]:py-1 [&_blockquote]:my-4 [&_blockquote]:text-muted-foreground",
        "[&_blockquote_blockquote]:mt-4",
        "[&_hr]:my-8 [&_hr]:border-t-2 [&_hr]:border-muted",
        "[&_abbr]:cursor-help [&_abbr]:underline [&_abbr]:underline-dotted [&_abbr]:underline-offset-4",
        "[&_details]:rounded-lg [&_details]:border [&_details]:px-4 [&_details]:py-2 [&_details]:my-4",
        "[&_summary]:cursor-pointer [&_summary]:font-semibold",
        "[&_kbd]:rounded-md [&_kbd]:border [&_kbd]:bg-muted/50 [&_kbd]:px-1.5 [&_kbd]:py-0.5 [&_kbd]:text-sm [&_kbd]:font-mono",
        "[&_mark]:bg-primary/10 [&_mark]:px-1",
        "[&_::selection]:bg-primary/10",
        "[&_.footnotes]:mt-8 [&_.footnotes]:pt-4 [&_.footnotes]:border-t",
        "[&_.footnotes_ol]:list-decimal [&_.footnotes_ol]:ml-6",
        "[&_.footnote-ref]:text-xs [&_.footnote-ref]:align-super [&_.footnote-ref]:ml-0.5",
        "[&_.footnote-backref]:no-underline [&_.footnote-backref]:hover:underline",
    ];
}

pub mod layout {
    /// Vertical rhythm between siblings.
    pub const SPACING: &str = "[&>*+*]:mt-6";
    pub const ARTICLE: &str = "max-w-prose";
    pub const CONTAINER: &str = "max-w-5xl mx-auto p-6 sm:p-8";
    pub const SECTION: &str = "py-8 md:py-12";
}

/// A named group of typography styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Typography {
    Base,
    HeaderSpacing,
    Links,
    Lists,
    Code,
    Tables,
    Media,
    Misc,
}

impl Typography {
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn classes(self) -> &'static [&'static str] {
        match self {
            Typography::Base => typography::BASE,
            Typography::HeaderSpacing => typography::HEADER_SPACING,
            Typography::Links => typography::LINKS,
            Typography::Lists => typography::LISTS,
            Typography::Code => typography::CODE,
            Typography::Tables => typography::TABLES,
            Typography::Media => typography::MEDIA,
            Typography::Misc => typography::MISC,
        }
    }
}

const BASE_GROUPS: [Typography; 7] = [
    Typography::Base,
    Typography::Links,
    Typography::Lists,
    Typography::Code,
    Typography::Tables,
    Typography::Media,
    Typography::Misc,
];

static BASE_TYPOGRAPHY: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    BASE_GROUPS
        .iter()
        .flat_map(|group| group.classes().iter().copied())
        .collect()
});

static ARTICLE_TYPOGRAPHY: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    base_typography_styles()
        .iter()
        .chain(typography::HEADER_SPACING)
        .copied()
        .collect()
});

/// Typography for prose containers: every group except heading spacing.
pub fn base_typography_styles() -> &'static [&'static str] {
    &BASE_TYPOGRAPHY
}

/// [`base_typography_styles`] followed by heading spacing.
pub fn article_typography_styles() -> &'static [&'static str] {
    &ARTICLE_TYPOGRAPHY
}

pub fn all_layout_styles() -> [&'static str; 4] {
    [layout::SPACING, layout::ARTICLE, layout::CONTAINER, layout::SECTION]
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn base_concatenates_in_order() {
        let styles = base_typography_styles();
        let expected = typography::BASE.len()
            + typography::LINKS.len()
            + typography::LISTS.len()
            + typography::CODE.len()
            + typography::TABLES.len()
            + typography::MEDIA.len()
            + typography::MISC.len();
        assert_eq!(styles.len(), expected);
        assert_eq!(styles[0], "font-sans antialiased");
        assert_eq!(styles[typography::BASE.len()], typography::LINKS[0]);
        assert_eq!(styles.last(), typography::MISC.last());
        assert!(!styles.contains(&typography::HEADER_SPACING[0]));
    }

    #[test]
    fn article_appends_header_spacing() {
        let article = article_typography_styles();
        let base = base_typography_styles();
        assert_eq!(article.len(), base.len() + typography::HEADER_SPACING.len());
        assert_eq!(&article[..base.len()], base);
        assert_eq!(&article[base.len()..], typography::HEADER_SPACING);
    }

    #[test]
    fn layout_styles() {
        assert_eq!(
            all_layout_styles(),
            ["[&>*+*]:mt-6", "max-w-prose", "max-w-5xl mx-auto p-6 sm:p-8", "py-8 md:py-12"]
        );
    }

    #[test]
    fn typography_groups() {
        assert_eq!(Typography::iter().count(), 8);
        assert_eq!(Typography::HeaderSpacing.name(), "header-spacing");
        for group in Typography::iter() {
            assert!(!group.classes().is_empty());
            assert!(group.classes().iter().all(|entry| entry.trim() == *entry));
        }
    }
}
