// Copyright 2025 the Cropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Aspect-ratio presets and the rule for fitting a rectangle to one.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`, `floor`

use cropline_grid::{CellRect, Grid};

use crate::MIN_SIZE;

/// A named aspect-ratio constraint.
///
/// `width` and `height` are the two terms of the ratio (`16:9` stores 16 and
/// 9). Both `None` means free-form: no constraint at all.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RatioPreset {
    /// Short display label, e.g. `"16:9"`.
    pub label: &'static str,
    /// Ratio width term, or `None` for free-form.
    pub width: Option<f64>,
    /// Ratio height term, or `None` for free-form.
    pub height: Option<f64>,
}

impl RatioPreset {
    /// Creates the unconstrained preset.
    #[must_use]
    pub const fn free(label: &'static str) -> Self {
        Self {
            label,
            width: None,
            height: None,
        }
    }

    /// Creates a fixed `width:height` preset.
    #[must_use]
    pub const fn fixed(label: &'static str, width: f64, height: f64) -> Self {
        Self {
            label,
            width: Some(width),
            height: Some(height),
        }
    }

    /// Returns the target `width / height` ratio, or `None` when free-form.
    #[must_use]
    pub fn ratio(&self) -> Option<f64> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(w / h),
            _ => None,
        }
    }

    /// Returns `true` when this preset imposes no constraint.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.width.is_none() || self.height.is_none()
    }
}

/// The fixed, ordered preset list offered by the selection UI.
pub const RATIO_PRESETS: [RatioPreset; 9] = [
    RatioPreset::free("Free"),
    RatioPreset::fixed("1:1", 1.0, 1.0),
    RatioPreset::fixed("4:5", 4.0, 5.0),
    RatioPreset::fixed("3:4", 3.0, 4.0),
    RatioPreset::fixed("2:3", 2.0, 3.0),
    RatioPreset::fixed("16:9", 16.0, 9.0),
    RatioPreset::fixed("21:9", 21.0, 9.0),
    RatioPreset::fixed("9:16", 9.0, 16.0),
    RatioPreset::fixed("5:4", 5.0, 4.0),
];

/// Reshapes a rectangle so its sides honor `preset`, staying inside `grid`.
///
/// Free presets return `bounds` unchanged. Otherwise the dimension that is
/// proportionally too small grows: a rectangle wider than the target ratio
/// stretches its height (`round(w / target)`), anything else stretches its
/// width (`round(h * target)`). The position is then pulled back inside the
/// grid. If the grown rectangle cannot fit at all, both ratio terms are
/// scaled by the largest factor that fits the space remaining from the
/// original position, flooring to whole cells with a [`MIN_SIZE`] floor —
/// a silent best-effort rather than an error.
#[must_use]
pub fn fit_to_ratio(bounds: CellRect, preset: &RatioPreset, grid: &Grid) -> CellRect {
    let (Some(ratio_w), Some(ratio_h)) = (preset.width, preset.height) else {
        return bounds;
    };

    let target = ratio_w / ratio_h;
    let current = f64::from(bounds.w) / f64::from(bounds.h);

    let (mut new_w, mut new_h) = if current > target {
        // Wider than the target: stretch height to match.
        (bounds.w, round_cells(f64::from(bounds.w) / target))
    } else {
        // Taller than (or equal to) the target: stretch width.
        (round_cells(f64::from(bounds.h) * target), bounds.h)
    };

    let max_x = grid.cols - new_w;
    let max_y = grid.rows - new_h;
    let new_x = bounds.x.min(max_x.max(0));
    let new_y = bounds.y.min(max_y.max(0));

    if new_x + new_w > grid.cols || new_y + new_h > grid.rows {
        // Even at the clamped position the rectangle overflows the grid:
        // scale both ratio terms by the tighter of the two axis limits,
        // measured from the original anchored position.
        let scale = (f64::from(grid.cols - bounds.x) / ratio_w)
            .min(f64::from(grid.rows - bounds.y) / ratio_h);
        new_w = floor_cells(ratio_w * scale).max(MIN_SIZE);
        new_h = floor_cells(ratio_h * scale).max(MIN_SIZE);
    }

    CellRect::new(new_x, new_y, new_w, new_h)
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "cell coordinates stay far below i32::MAX"
)]
fn round_cells(v: f64) -> i32 {
    v.round() as i32
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "cell coordinates stay far below i32::MAX"
)]
fn floor_cells(v: f64) -> i32 {
    v.floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_preset_is_identity() {
        let grid = Grid::new(40, 40, 10.0);
        let bounds = CellRect::new(3, 3, 7, 11);
        assert_eq!(fit_to_ratio(bounds, &RATIO_PRESETS[0], &grid), bounds);
    }

    #[test]
    fn square_fit_to_sixteen_nine_stretches_width() {
        // A square is not wider than 16:9, so the width grows: 20 * 16/9
        // rounds to 36 while the height stays 20.
        let grid = Grid::new(60, 60, 10.0);
        let bounds = CellRect::new(5, 5, 20, 20);
        let fitted = fit_to_ratio(bounds, &RatioPreset::fixed("16:9", 16.0, 9.0), &grid);
        assert_eq!(fitted, CellRect::new(5, 5, 36, 20));
    }

    #[test]
    fn wide_fit_to_square_stretches_height() {
        let grid = Grid::new(60, 60, 10.0);
        let bounds = CellRect::new(5, 5, 30, 10);
        let fitted = fit_to_ratio(bounds, &RatioPreset::fixed("1:1", 1.0, 1.0), &grid);
        assert_eq!(fitted, CellRect::new(5, 5, 30, 30));
    }

    #[test]
    fn grown_rect_is_pulled_back_inside_the_grid() {
        let grid = Grid::new(40, 40, 10.0);
        let bounds = CellRect::new(10, 10, 20, 20);
        let fitted = fit_to_ratio(bounds, &RatioPreset::fixed("16:9", 16.0, 9.0), &grid);
        // Width grows to 36; x clamps from 10 down to 40 - 36 = 4.
        assert_eq!(fitted, CellRect::new(4, 10, 36, 20));
        assert!(fitted.fits_within(&grid));
    }

    #[test]
    fn overflow_shrinks_proportionally_from_the_anchor() {
        // 16:9 at width 36 cannot fit a 30-cell grid at all. Both ratio
        // terms scale by min(20/16, 20/9) = 1.25 from the anchored (10, 10).
        let grid = Grid::new(30, 30, 10.0);
        let bounds = CellRect::new(10, 10, 20, 20);
        let fitted = fit_to_ratio(bounds, &RatioPreset::fixed("16:9", 16.0, 9.0), &grid);
        assert_eq!(fitted.w, 20);
        assert_eq!(fitted.h, 11);
        assert_eq!(fitted.x, 0);
        assert_eq!(fitted.y, 10);
    }

    #[test]
    fn degenerate_fit_floors_at_min_size() {
        // The anchored position leaves almost no room; the scaled terms
        // floor at MIN_SIZE rather than collapsing.
        let grid = Grid::new(12, 12, 10.0);
        let bounds = CellRect::new(11, 11, 20, 20);
        let fitted = fit_to_ratio(bounds, &RatioPreset::fixed("21:9", 21.0, 9.0), &grid);
        assert_eq!(fitted, CellRect::new(0, 0, MIN_SIZE, MIN_SIZE));
    }

    #[test]
    fn fitted_ratio_matches_target_within_rounding() {
        let grid = Grid::new(200, 200, 5.0);
        for preset in RATIO_PRESETS.iter().filter(|p| !p.is_free()) {
            let fitted = fit_to_ratio(CellRect::new(0, 0, 60, 60), preset, &grid);
            let target = preset.ratio().unwrap();
            let actual = f64::from(fitted.w) / f64::from(fitted.h);
            let slack = 1.0 / f64::from(fitted.h.min(fitted.w));
            assert!(
                (actual - target).abs() <= slack,
                "{}: {actual} vs {target}",
                preset.label
            );
        }
    }

    #[test]
    fn preset_table_shape() {
        assert_eq!(RATIO_PRESETS.len(), 9);
        assert!(RATIO_PRESETS[0].is_free());
        assert_eq!(RATIO_PRESETS[5].label, "16:9");
        assert_eq!(RATIO_PRESETS[5].ratio(), Some(16.0 / 9.0));
    }
}
