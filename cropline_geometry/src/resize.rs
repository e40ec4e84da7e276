// Copyright 2025 the Cropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Move and resize math for in-flight gestures.
//!
//! All functions take the gesture's *original* rectangle snapshot plus the
//! live pointer position, never the rectangle from the previous frame, so a
//! drag recomputed on every event cannot drift.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`, `abs`

use cropline_grid::{CellRect, GridPos};

use crate::{Handle, MIN_SIZE};

/// Translates a rectangle by the rounded pointer delta since gesture start.
///
/// Size is unchanged; the result is not clamped to any grid.
#[must_use]
pub fn translate(original: CellRect, start: GridPos, pos: GridPos) -> CellRect {
    CellRect {
        x: original.x + round_cells(pos.col - start.col),
        y: original.y + round_cells(pos.row - start.row),
        w: original.w,
        h: original.h,
    }
}

/// Computes the rectangle produced by dragging `handle` to `pos`.
///
/// Corner handles anchor the opposite corner. Both dimension candidates are
/// measured from that anchor, and the dimension whose candidate deviates
/// more from the original drives; the other derives from it through
/// `aspect_ratio` (ties drive by width). Edge handles drive one dimension
/// directly from the opposite edge, derive the other through
/// `aspect_ratio`, and keep the original rectangle's center fixed on the
/// perpendicular axis.
///
/// Both dimensions are rounded to whole cells and floored at [`MIN_SIZE`].
/// The result is not clamped to any grid; callers apply grid clamping and
/// any ratio-preset fitting afterwards. [`Handle::Move`] returns the
/// original unchanged (moves go through [`translate`]).
#[must_use]
pub fn resize(original: CellRect, handle: Handle, pos: GridPos, aspect_ratio: f64) -> CellRect {
    debug_assert!(
        aspect_ratio > 0.0,
        "aspect_ratio must be strictly positive"
    );
    match handle {
        Handle::Move => original,
        Handle::NorthWest | Handle::NorthEast | Handle::SouthWest | Handle::SouthEast => {
            resize_corner(original, handle, pos, aspect_ratio)
        }
        Handle::North | Handle::South | Handle::East | Handle::West => {
            resize_edge(original, handle, pos, aspect_ratio)
        }
    }
}

fn resize_corner(original: CellRect, handle: Handle, pos: GridPos, aspect_ratio: f64) -> CellRect {
    // The opposite corner stays put.
    let anchor_right = matches!(handle, Handle::NorthWest | Handle::SouthWest);
    let anchor_bottom = matches!(handle, Handle::NorthWest | Handle::NorthEast);

    let anchor_col = if anchor_right {
        original.right()
    } else {
        original.x
    };
    let anchor_row = if anchor_bottom {
        original.bottom()
    } else {
        original.y
    };

    let min = f64::from(MIN_SIZE);
    let width_candidate = if anchor_right {
        f64::from(anchor_col) - pos.col
    } else {
        pos.col - f64::from(anchor_col)
    }
    .max(min);
    let height_candidate = if anchor_bottom {
        f64::from(anchor_row) - pos.row
    } else {
        pos.row - f64::from(anchor_row)
    }
    .max(min);

    let (w, h) = pick_dimension(width_candidate, height_candidate, aspect_ratio, original);

    CellRect {
        x: if anchor_right { anchor_col - w } else { anchor_col },
        y: if anchor_bottom { anchor_row - h } else { anchor_row },
        w,
        h,
    }
}

/// Chooses the driving dimension for a corner resize.
///
/// The candidate that moved further from the original wins and the other
/// dimension derives from it through the aspect ratio.
fn pick_dimension(
    width_candidate: f64,
    height_candidate: f64,
    aspect_ratio: f64,
    original: CellRect,
) -> (i32, i32) {
    let width_delta = (width_candidate - f64::from(original.w)).abs();
    let height_delta = (height_candidate - f64::from(original.h)).abs();

    let (w, h) = if width_delta >= height_delta {
        (width_candidate, width_candidate / aspect_ratio)
    } else {
        (height_candidate * aspect_ratio, height_candidate)
    };

    (
        round_cells(w).max(MIN_SIZE),
        round_cells(h).max(MIN_SIZE),
    )
}

fn resize_edge(original: CellRect, handle: Handle, pos: GridPos, aspect_ratio: f64) -> CellRect {
    let center = original.center();

    match handle {
        Handle::West => {
            let anchor = original.right();
            let w = round_cells(f64::from(anchor) - pos.col).max(MIN_SIZE);
            let h = round_cells(f64::from(w) / aspect_ratio).max(MIN_SIZE);
            CellRect {
                x: anchor - w,
                y: round_cells(center.row - f64::from(h) / 2.0),
                w,
                h,
            }
        }
        Handle::East => {
            let anchor = original.x;
            let w = round_cells(pos.col - f64::from(anchor)).max(MIN_SIZE);
            let h = round_cells(f64::from(w) / aspect_ratio).max(MIN_SIZE);
            CellRect {
                x: anchor,
                y: round_cells(center.row - f64::from(h) / 2.0),
                w,
                h,
            }
        }
        Handle::North => {
            let anchor = original.bottom();
            let h = round_cells(f64::from(anchor) - pos.row).max(MIN_SIZE);
            let w = round_cells(f64::from(h) * aspect_ratio).max(MIN_SIZE);
            CellRect {
                x: round_cells(center.col - f64::from(w) / 2.0),
                y: anchor - h,
                w,
                h,
            }
        }
        Handle::South => {
            let anchor = original.y;
            let h = round_cells(pos.row - f64::from(anchor)).max(MIN_SIZE);
            let w = round_cells(f64::from(h) * aspect_ratio).max(MIN_SIZE);
            CellRect {
                x: round_cells(center.col - f64::from(w) / 2.0),
                y: anchor,
                w,
                h,
            }
        }
        _ => original,
    }
}

/// Rounds to the nearest whole cell, halves toward positive infinity.
///
/// `f64::round` sends `-0.5` to `-1`; this sends it to `0`, so a pointer
/// sitting exactly half a cell to the negative side of its press point does
/// not move the rectangle yet.
#[expect(
    clippy::cast_possible_truncation,
    reason = "cell coordinates stay far below i32::MAX"
)]
fn round_cells(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}
