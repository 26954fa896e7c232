// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! AxisCode type for blueprint steps.
//!
//! Every step of an H-tree blueprint displaces the two children along one
//! spatial axis. X and Y are the horizontal (in-plane) axes; Z is vertical
//! and crosses wiring layers.
//!
//! # Aliases
//!
//! | Characters    | Axis |
//! |---------------|------|
//! | `0`, `x`, `X` | X    |
//! | `1`, `y`, `Y` | Y    |
//! | `2`, `z`, `Z` | Z    |
//!
//! This is the only alias table in the crate.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter};

/// One of the three spatial axes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum AxisCode {
    #[strum(serialize = "x")]
    X = 0,
    #[strum(serialize = "y")]
    Y = 1,
    #[strum(serialize = "z")]
    Z = 2,
}

impl AxisCode {
    /// Map one of the nine recognised characters to its axis.
    ///
    /// Returns None for anything else.
    pub fn from_alias(ch: char) -> Option<Self> {
        match ch {
            '0' | 'x' | 'X' => Some(AxisCode::X),
            '1' | 'y' | 'Y' => Some(AxisCode::Y),
            '2' | 'z' | 'Z' => Some(AxisCode::Z),
            _ => None,
        }
    }

    /// True for the vertical axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        self == AxisCode::Z
    }

    /// Index of the coordinate this axis displaces (x=0, y=1, z=2).
    #[inline]
    pub fn as_usize(self) -> usize {
        self as usize
    }

    /// Canonical single-letter form.
    pub fn to_char(self) -> char {
        match self {
            AxisCode::X => 'x',
            AxisCode::Y => 'y',
            AxisCode::Z => 'z',
        }
    }
}
