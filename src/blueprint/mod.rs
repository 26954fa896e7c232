// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Blueprint codec.
//!
//! A blueprint is the ordered list of axes an H-tree branches along, root
//! first. It is written as a short string such as `"012"`, `"xyz"` or
//! `"XzY"`; see [`AxisCode`] for the alias table.
//!
//! # Legality
//!
//! Two adjacent steps may not use the same axis. Splitting twice in a row
//! along one axis would place a child branch on top of its parent's arm,
//! which is a degenerate zero-length branch in the rendered tree.
//!
//! # Example
//!
//! ```
//! use noc_topology::blueprint::Blueprint;
//! use noc_topology::geometry::AxisCode;
//!
//! let bp = Blueprint::normalize("0yZ").unwrap();
//! assert_eq!(bp.axes(), &[AxisCode::X, AxisCode::Y, AxisCode::Z]);
//! assert_eq!(bp.to_string(), "xyz");
//!
//! assert!(Blueprint::normalize("001").is_err());
//! ```

use crate::error::{NocError, Result};
use crate::geometry::constants::MAX_LEVELS;
use crate::geometry::AxisCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Canonical axis sequence driving H-tree recursion.
///
/// Only constructible through [`Blueprint::normalize`] and the other checked
/// constructors, so every value upholds the no-adjacent-repeat invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Blueprint(Vec<AxisCode>);

impl Blueprint {
    /// Validate and normalize a raw orientation string.
    ///
    /// Output length equals input length (in characters). Blueprints longer
    /// than `MAX_LEVELS` fail with `InvalidLevels`.
    pub fn normalize(raw: &str) -> Result<Self> {
        let mut axes = Vec::with_capacity(raw.len());
        for (position, character) in raw.chars().enumerate() {
            let axis = AxisCode::from_alias(character)
                .ok_or(NocError::InvalidCharacter { character, position })?;
            axes.push(axis);
        }
        Self::from_axes(axes)
    }

    /// Build a blueprint from already-decoded axes, checking legality.
    pub fn from_axes(axes: Vec<AxisCode>) -> Result<Self> {
        if axes.len() > MAX_LEVELS {
            return Err(NocError::InvalidLevels {
                levels: axes.len(),
                max: MAX_LEVELS,
            });
        }
        if let Some(position) = (1..axes.len()).find(|&i| axes[i] == axes[i - 1]) {
            return Err(NocError::AdjacentRepeat {
                position,
                axis: axes[position],
            });
        }
        Ok(Self(axes))
    }

    /// The repeating `x, y, z, x, y, z, ...` blueprint with `levels` steps.
    ///
    /// This is the default tree shape when no blueprint is given.
    pub fn cuboid(levels: usize) -> Result<Self> {
        if levels == 0 || levels > MAX_LEVELS {
            return Err(NocError::InvalidLevels {
                levels,
                max: MAX_LEVELS,
            });
        }
        Ok(Self(AxisCode::iter().cycle().take(levels).collect()))
    }

    pub fn axes(&self) -> &[AxisCode] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index of the last vertical step, if any.
    pub fn last_vertical(&self) -> Option<usize> {
        self.0.iter().rposition(|axis| axis.is_vertical())
    }

    /// Number of occurrences of `axis` at or after `position`.
    pub fn count_from(&self, position: usize, axis: AxisCode) -> usize {
        self.0
            .get(position..)
            .map_or(0, |rest| rest.iter().filter(|&&a| a == axis).count())
    }
}

impl fmt::Display for Blueprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for axis in &self.0 {
            write!(f, "{}", axis.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Blueprint {
    type Err = NocError;

    fn from_str(s: &str) -> Result<Self> {
        Self::normalize(s)
    }
}

impl TryFrom<String> for Blueprint {
    type Error = NocError;

    fn try_from(s: String) -> Result<Self> {
        Self::normalize(&s)
    }
}

impl From<Blueprint> for String {
    fn from(bp: Blueprint) -> String {
        bp.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AxisCode::{X, Y, Z};

    #[test]
    fn test_normalize_digits_and_letters() {
        assert_eq!(Blueprint::normalize("012").unwrap().axes(), &[X, Y, Z]);
        assert_eq!(Blueprint::normalize("xyz").unwrap().axes(), &[X, Y, Z]);
        assert_eq!(Blueprint::normalize("XYZ").unwrap().axes(), &[X, Y, Z]);
        assert_eq!(Blueprint::normalize("0Yz").unwrap().axes(), &[X, Y, Z]);
    }

    #[test]
    fn test_rejects_adjacent_repeat() {
        match Blueprint::normalize("001") {
            Err(NocError::AdjacentRepeat { position, axis }) => {
                assert_eq!(position, 1);
                assert_eq!(axis, X);
            }
            other => panic!("expected AdjacentRepeat, got {:?}", other),
        }
        assert!(Blueprint::normalize("010").is_ok());
    }

    #[test]
    fn test_repeat_detected_across_aliases() {
        // '0' and 'x' are the same axis
        assert!(matches!(
            Blueprint::normalize("1x0"),
            Err(NocError::AdjacentRepeat { position: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_invalid_character() {
        match Blueprint::normalize("01a2") {
            Err(NocError::InvalidCharacter {
                character,
                position,
            }) => {
                assert_eq!(character, 'a');
                assert_eq!(position, 2);
            }
            other => panic!("expected InvalidCharacter, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_character_reported_before_repeat() {
        assert!(matches!(
            Blueprint::normalize("00q"),
            Err(NocError::InvalidCharacter { position: 2, .. })
        ));
    }

    #[test]
    fn test_empty() {
        let bp = Blueprint::normalize("").unwrap();
        assert!(bp.is_empty());
        assert_eq!(bp.last_vertical(), None);
    }

    #[test]
    fn test_cuboid() {
        let bp = Blueprint::cuboid(7).unwrap();
        assert_eq!(bp.to_string(), "xyzxyzx");
        assert!(Blueprint::cuboid(0).is_err());
        assert!(Blueprint::cuboid(MAX_LEVELS).is_ok());
        assert!(matches!(
            Blueprint::cuboid(MAX_LEVELS + 1),
            Err(NocError::InvalidLevels { levels: 22, .. })
        ));
    }

    #[test]
    fn test_last_vertical_and_counts() {
        let bp = Blueprint::normalize("zxzyz").unwrap();
        assert_eq!(bp.last_vertical(), Some(4));
        assert_eq!(bp.count_from(0, Z), 3);
        assert_eq!(bp.count_from(1, Z), 2);
        assert_eq!(bp.count_from(4, Z), 1);
        assert_eq!(bp.count_from(5, Z), 0);
        assert_eq!(bp.count_from(99, Z), 0);
    }

    #[test]
    fn test_from_str_and_serde() {
        let bp: Blueprint = "YxY".parse().unwrap();
        assert_eq!(bp.to_string(), "yxy");

        let json = serde_json::to_string(&bp).unwrap();
        assert_eq!(json, "\"yxy\"");
        let back: Blueprint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bp);

        assert!(serde_json::from_str::<Blueprint>("\"xx\"").is_err());
    }

    #[test]
    fn test_length_limit() {
        let at_limit = "xyz".repeat(7);
        assert_eq!(Blueprint::normalize(&at_limit).unwrap().len(), MAX_LEVELS);

        let too_long = format!("{}x", at_limit);
        assert!(matches!(
            Blueprint::normalize(&too_long),
            Err(NocError::InvalidLevels { levels: 22, max: 21 })
        ));
        assert!(Blueprint::normalize(&"xy".repeat(32)).is_err());
        assert!(serde_json::from_str::<Blueprint>(&format!("\"{}\"", too_long)).is_err());
    }
}
