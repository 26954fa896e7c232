// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! H-tree geometry configuration.

use crate::blueprint::Blueprint;
use crate::error::{NocError, Result};
use crate::geometry::constants::{cube_root_half, LAYER_HEIGHT, PIXEL_SIZE, SQRT_HALF};
use crate::geometry::AxisCode;
use serde::{Deserialize, Serialize};

/// How a horizontal step shrinks the arm length of the next level.
///
/// Vertical steps never shrink: they always hop a fixed layer height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Scaling {
    /// Shrink by `ratio`, or by `repeat_ratio` when the step two levels
    /// down uses the same axis as this one.
    AxisPaired { ratio: f64, repeat_ratio: f64 },
    /// Always shrink by `ratio`.
    Uniform { ratio: f64 },
}

impl Scaling {
    /// Ratio applied by the first step of `remaining`.
    #[inline]
    pub fn ratio(&self, remaining: &[AxisCode]) -> f64 {
        match *self {
            Scaling::Uniform { ratio } => ratio,
            Scaling::AxisPaired {
                ratio,
                repeat_ratio,
            } => match remaining {
                [first, _, third, ..] if first == third => repeat_ratio,
                _ => ratio,
            },
        }
    }

    fn ratios(&self) -> [f64; 2] {
        match *self {
            Scaling::Uniform { ratio } => [ratio, ratio],
            Scaling::AxisPaired {
                ratio,
                repeat_ratio,
            } => [ratio, repeat_ratio],
        }
    }
}

impl Default for Scaling {
    fn default() -> Self {
        Scaling::AxisPaired {
            ratio: cube_root_half(),
            repeat_ratio: SQRT_HALF,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HTreeConfig {
    /// Vertical pitch between wiring layers.
    pub layer_height: f64,
    pub scaling: Scaling,
    /// Arm length wanted at the leaves when no root size is given.
    pub leaf_size: f64,
}

impl Default for HTreeConfig {
    fn default() -> Self {
        Self {
            layer_height: LAYER_HEIGHT,
            scaling: Scaling::default(),
            leaf_size: PIXEL_SIZE,
        }
    }
}

impl HTreeConfig {
    /// Uniform `1/sqrt(2)` shrink at every horizontal step.
    pub fn pixel() -> Self {
        Self {
            scaling: Scaling::Uniform { ratio: SQRT_HALF },
            ..Self::default()
        }
    }

    /// Pixel-mode root size for `levels` horizontal steps: leaf arms end up
    /// `PIXEL_SIZE` long.
    pub fn pixel_root_size(levels: usize) -> f64 {
        PIXEL_SIZE / SQRT_HALF.powi(levels as i32)
    }

    /// Root size whose arms have shrunk to exactly `leaf_size` after the
    /// last step of `blueprint`.
    pub fn root_size_for(&self, blueprint: &Blueprint) -> f64 {
        let axes = blueprint.axes();
        let shrink: f64 = (0..axes.len())
            .filter(|&i| !axes[i].is_vertical())
            .map(|i| self.scaling.ratio(&axes[i..]))
            .product();
        self.leaf_size / shrink
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.layer_height.is_finite() && self.layer_height > 0.0) {
            return Err(NocError::InvalidConfig(format!(
                "htree.layer_height must be positive, got {}",
                self.layer_height
            )));
        }
        if !(self.leaf_size.is_finite() && self.leaf_size > 0.0) {
            return Err(NocError::InvalidConfig(format!(
                "htree.leaf_size must be positive, got {}",
                self.leaf_size
            )));
        }
        for ratio in self.scaling.ratios() {
            if !(ratio > 0.0 && ratio < 1.0) {
                return Err(NocError::InvalidConfig(format!(
                    "htree scaling ratio must be in (0, 1), got {}",
                    ratio
                )));
            }
        }
        Ok(())
    }
}
