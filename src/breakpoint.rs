//! Responsive breakpoints.
//!
//! A [`Breakpoint`] names one of the six responsive tiers. Every tier except
//! [`Breakpoint::Base`] scopes its classes with a `"<name>:"` variant prefix.
//! [`BreakpointSet`] is a bit set of tiers and [`ScreenWidths`] maps viewport
//! widths back onto tiers.

use std::fmt;
use std::ops::{BitOr, Bound, RangeBounds};
use std::str::FromStr;

use bitflags::bitflags;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

use crate::error::{Error, Result};

/// A responsive tier, ordered from the smallest screen up.
#[derive(Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Breakpoint {
    Base,
    Sm,
    Md,
    Lg,
    Xl,
    #[strum(serialize = "2xl")]
    #[cfg_attr(feature = "serde", serde(rename = "2xl"))]
    Xxl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 6] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
        Breakpoint::Xxl,
    ];

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The variant prefix put in front of class fragments scoped to this tier.
    pub fn prefix(self) -> &'static str {
        match self {
            Breakpoint::Base => "",
            Breakpoint::Sm => "sm:",
            Breakpoint::Md => "md:",
            Breakpoint::Lg => "lg:",
            Breakpoint::Xl => "xl:",
            Breakpoint::Xxl => "2xl:",
        }
    }

    /// Iterates all tiers in rank order.
    pub fn iter() -> impl Iterator<Item = Breakpoint> {
        <Breakpoint as IntoEnumIterator>::iter()
    }

    const fn flag(self) -> BreakpointFlags {
        match self {
            Breakpoint::Base => BreakpointFlags::BASE,
            Breakpoint::Sm => BreakpointFlags::SM,
            Breakpoint::Md => BreakpointFlags::MD,
            Breakpoint::Lg => BreakpointFlags::LG,
            Breakpoint::Xl => BreakpointFlags::XL,
            Breakpoint::Xxl => BreakpointFlags::XXL,
        }
    }

    fn next(self) -> Option<Breakpoint> {
        Breakpoint::ALL.get(self as usize + 1).copied()
    }

    fn prev(self) -> Option<Breakpoint> {
        (self as usize).checked_sub(1).map(|i| Breakpoint::ALL[i])
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Breakpoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Breakpoint::iter()
            .find(|bp| bp.name() == s)
            .ok_or_else(|| Error::UnknownBreakpoint(s.to_string()))
    }
}

bitflags! {
  #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
  #[must_use]
  struct BreakpointFlags: u8 {
    const BASE = 1;
    const SM = 2;
    const MD = 4;
    const LG = 8;
    const XL = 16;
    const XXL = 32;
  }
}

/// A set of breakpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BreakpointSet {
    flags: BreakpointFlags,
}

impl BreakpointSet {
    pub const EMPTY: BreakpointSet = BreakpointSet::new(BreakpointFlags::empty());
    pub const ALL: BreakpointSet = BreakpointSet::new(BreakpointFlags::all());

    const fn new(flags: BreakpointFlags) -> Self {
        Self { flags }
    }

    pub const fn only(bp: Breakpoint) -> Self {
        Self::new(bp.flag())
    }

    /// Every breakpoint not in `set`.
    pub const fn not(set: BreakpointSet) -> Self {
        Self::new(BreakpointFlags::all().difference(set.flags))
    }

    /// All breakpoints covered by `range`, e.g. `BreakpointSet::range(Breakpoint::Sm..Breakpoint::Xl)`.
    pub fn range<R: RangeBounds<Breakpoint>>(range: R) -> Self {
        let start = match range.start_bound() {
            Bound::Included(b) => Some(*b),
            Bound::Excluded(b) => b.next(),
            Bound::Unbounded => Some(Breakpoint::Base),
        };
        let end = match range.end_bound() {
            Bound::Included(b) => Some(*b),
            Bound::Excluded(b) => b.prev(),
            Bound::Unbounded => Some(Breakpoint::Xxl),
        };
        let (Some(start), Some(end)) = (start, end) else {
            return Self::EMPTY;
        };
        if start > end {
            return Self::EMPTY;
        }

        // Subtracting the low bit from the high bit sets everything between them.
        let low = start.flag().bits();
        let high = end.flag().bits();
        Self::new(BreakpointFlags::from_bits_truncate(high | (high - low) | low))
    }

    pub fn contains(&self, bp: Breakpoint) -> bool {
        self.flags.contains(bp.flag())
    }

    pub fn insert(&mut self, bp: Breakpoint) {
        self.flags.insert(bp.flag());
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.flags.bits().count_ones() as usize
    }

    /// The breakpoints in the set, in rank order.
    pub fn iter(&self) -> impl Iterator<Item = Breakpoint> + '_ {
        Breakpoint::iter().filter(|bp| self.contains(*bp))
    }
}

impl From<Breakpoint> for BreakpointSet {
    fn from(bp: Breakpoint) -> Self {
        Self::only(bp)
    }
}

impl BitOr for BreakpointSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(self.flags | rhs.flags)
    }
}

impl BitOr<Breakpoint> for BreakpointSet {
    type Output = Self;

    fn bitor(self, rhs: Breakpoint) -> Self::Output {
        Self::new(self.flags | rhs.flag())
    }
}

impl FromIterator<Breakpoint> for BreakpointSet {
    fn from_iter<I: IntoIterator<Item = Breakpoint>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for bp in iter {
            set.insert(bp);
        }
        set
    }
}

/// Minimum viewport widths, in pixels, at which each breakpoint starts to apply.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f64; 5]", into = "[f64; 5]"))]
pub struct ScreenWidths {
    sm: f64,
    md: f64,
    lg: f64,
    xl: f64,
    xxl: f64,
}

impl Default for ScreenWidths {
    fn default() -> Self {
        Self {
            sm: 640.0,
            md: 768.0,
            lg: 1024.0,
            xl: 1280.0,
            xxl: 1536.0,
        }
    }
}

impl ScreenWidths {
    /// Builds a width table from the `sm`, `md`, `lg`, `xl` and `2xl` minimums.
    pub fn new(widths: [f64; 5]) -> Result<Self> {
        if widths.iter().any(|w| w.is_nan()) || widths.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::UnorderedWidths(widths));
        }
        let [sm, md, lg, xl, xxl] = widths;
        Ok(Self { sm, md, lg, xl, xxl })
    }

    /// The min-width of `bp`. `Base` always starts at zero.
    pub fn min_width(&self, bp: Breakpoint) -> f64 {
        match bp {
            Breakpoint::Base => 0.0,
            Breakpoint::Sm => self.sm,
            Breakpoint::Md => self.md,
            Breakpoint::Lg => self.lg,
            Breakpoint::Xl => self.xl,
            Breakpoint::Xxl => self.xxl,
        }
    }

    /// The largest breakpoint whose min-width is at or below `width`.
    pub fn breakpoint_for(&self, width: f64) -> Breakpoint {
        Breakpoint::ALL
            .iter()
            .rev()
            .copied()
            .find(|bp| (self.min_width(*bp)..).contains(&width))
            .unwrap_or(Breakpoint::Base)
    }
}

impl TryFrom<[f64; 5]> for ScreenWidths {
    type Error = Error;

    fn try_from(widths: [f64; 5]) -> Result<Self> {
        Self::new(widths)
    }
}

impl From<ScreenWidths> for [f64; 5] {
    fn from(w: ScreenWidths) -> Self {
        [w.sm, w.md, w.lg, w.xl, w.xxl]
    }
}
