//! Option values accepted by the layout box and their class tables.

use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

use crate::class_map;
use crate::error::{Error, Result};

/// Flex direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Row,
    Col,
}

/// Flex wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Wrap {
    Wrap,
    Nowrap,
}

macro_rules! named_option {
    ($ty:ident, $kind:literal) => {
        impl $ty {
            pub fn name(self) -> &'static str {
                self.into()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                $ty::iter()
                    .find(|v| v.name() == s)
                    .ok_or_else(|| Error::InvalidOption {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }
    };
}

named_option!(Direction, "direction");
named_option!(Wrap, "wrap");

macro_rules! numeric_option {
    ($(#[$meta:meta])* $v:vis $ty:ident, $kind:literal, [$($n:literal),+ $(,)?]) => {
        paste::paste! {
            $(#[$meta])*
            #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            #[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
            #[repr(u8)]
            $v enum $ty {
                $([<G $n>] = $n,)+
            }

            impl $ty {
                pub const fn value(self) -> u8 {
                    self as u8
                }
            }

            impl TryFrom<u8> for $ty {
                type Error = Error;

                fn try_from(value: u8) -> Result<Self> {
                    match value {
                        $($n => Ok($ty::[<G $n>]),)+
                        _ => Err(Error::InvalidOption {
                            kind: $kind,
                            value: value.to_string(),
                        }),
                    }
                }
            }
        }

        impl From<$ty> for u8 {
            fn from(v: $ty) -> u8 {
                v.value()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.value())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                s.parse::<u8>()
                    .map_err(|_| Error::InvalidOption {
                        kind: $kind,
                        value: s.to_string(),
                    })
                    .and_then($ty::try_from)
            }
        }
    };
}

numeric_option!(
    /// Gap step on the spacing scale.
    pub Gap, "gap", [0, 1, 2, 3, 4, 5, 6, 8, 10, 12]
);

numeric_option!(
    /// Number of grid tracks.
    pub GridValue, "grid", [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
);

class_map! {
    /// `flex-row` / `flex-col`.
    pub DirectionClasses for Direction {
        Direction::Row => "flex-row",
        Direction::Col => "flex-col",
    }
}

class_map! {
    /// `flex-wrap` / `flex-nowrap`.
    pub WrapClasses for Wrap {
        Wrap::Wrap => "flex-wrap",
        Wrap::Nowrap => "flex-nowrap",
    }
}

macro_rules! numeric_classes {
    ($(#[$meta:meta])* $v:vis $name:ident for $ty:ident, $prefix:literal, [$($n:literal),+ $(,)?]) => {
        paste::paste! {
            class_map! {
                $(#[$meta])*
                $v $name for $ty {
                    $($ty::[<G $n>] => concat!($prefix, "-", $n),)+
                }
            }
        }
    };
}

numeric_classes!(
    /// `gap-{n}`.
    pub GapClasses for Gap, "gap", [0, 1, 2, 3, 4, 5, 6, 8, 10, 12]
);

numeric_classes!(
    /// `grid-cols-{n}`.
    pub ColsClasses for GridValue, "grid-cols", [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
);

numeric_classes!(
    /// `grid-rows-{n}`.
    pub RowsClasses for GridValue, "grid-rows", [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
);
