// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Layer-count improvement model.
//!
//! For `A` tiles spread over `L` stacked wiring layers, the relative wire
//! length saving over a single layer is
//!
//! ```text
//! I(A, L) = sqrt(A * L) / (sqrt(A) + L^(3/2) / 2)
//! ```
//!
//! `I > 1` means stacking pays off. For fixed `A` the maximum is at
//! `L = A^(1/3)`, where `I = A^(1/6) / 1.5`.

use crate::error::{NocError, Result};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Tile count used by the default sweep.
pub const DEFAULT_TILES: f64 = 1_000_000.0;
/// Largest layer count used by the default sweep.
pub const DEFAULT_MAX_LAYERS: f64 = 800.0;

pub fn layering_improvement(tiles: f64, layers: f64) -> f64 {
    (tiles * layers).sqrt() / (tiles.sqrt() + layers.powf(1.5) / 2.0)
}

/// Layer count with the largest improvement for `tiles`.
pub fn optimal_layers(tiles: f64) -> f64 {
    tiles.cbrt()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImprovementPoint {
    pub tiles: f64,
    pub layers: f64,
    pub improvement: f64,
}

impl ImprovementPoint {
    fn at(tiles: f64, layers: f64) -> Self {
        Self {
            tiles,
            layers,
            improvement: layering_improvement(tiles, layers),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementSweep {
    /// Row-major over tiles, then layers.
    pub points: Vec<ImprovementPoint>,
    pub best: ImprovementPoint,
}

impl ImprovementSweep {
    /// Points where stacking pays off.
    pub fn improving(&self) -> impl Iterator<Item = &ImprovementPoint> {
        self.points.iter().filter(|p| p.improvement > 1.0)
    }
}

/// Evaluate [`layering_improvement`] on an evenly spaced grid.
///
/// Each range is sampled at `steps` points, or once when it is a single
/// value. `steps` must be at least 2 unless both ranges are single values.
pub fn improvement_sweep(
    tiles: RangeInclusive<f64>,
    layers: RangeInclusive<f64>,
    steps: usize,
) -> Result<ImprovementSweep> {
    check_range("tiles", &tiles)?;
    check_range("layers", &layers)?;
    let degenerate = tiles.start() == tiles.end() && layers.start() == layers.end();
    if steps == 0 || (steps == 1 && !degenerate) {
        return Err(NocError::InvalidConfig(format!(
            "sweep needs at least 2 steps, got {}",
            steps
        )));
    }

    let tile_values = linspace(&tiles, steps);
    let layer_values = linspace(&layers, steps);
    let points: Vec<ImprovementPoint> = tile_values
        .iter()
        .flat_map(|&t| layer_values.iter().map(move |&l| ImprovementPoint::at(t, l)))
        .collect();

    let best = points
        .iter()
        .copied()
        .max_by(|a, b| a.improvement.total_cmp(&b.improvement))
        .ok_or_else(|| NocError::InvalidConfig("empty sweep".to_string()))?;
    Ok(ImprovementSweep { points, best })
}

fn check_range(name: &str, range: &RangeInclusive<f64>) -> Result<()> {
    let (start, end) = (*range.start(), *range.end());
    if !(start.is_finite() && end.is_finite() && start > 0.0 && start <= end) {
        return Err(NocError::InvalidConfig(format!(
            "{} range must be positive and ascending, got {}..={}",
            name, start, end
        )));
    }
    Ok(())
}

fn linspace(range: &RangeInclusive<f64>, steps: usize) -> Vec<f64> {
    let (start, end) = (*range.start(), *range.end());
    if steps == 1 || start == end {
        return vec![start];
    }
    let step = (end - start) / (steps - 1) as f64;
    (0..steps)
        .map(|i| if i == steps - 1 { end } else { start + step * i as f64 })
        .collect()
}
