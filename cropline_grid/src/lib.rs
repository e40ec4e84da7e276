// Copyright 2025 the Cropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cropline Grid: the cell-grid coordinate space shared by all Cropline crates.
//!
//! A [`Grid`] describes a session's coordinate system: `cols × rows` integer
//! cells, each `cell_size` pixels square. Selections live in that space as
//! [`CellRect`] values (whole cells), while pointer input arrives in pixel
//! space and converts to fractional [`GridPos`] positions.
//!
//! Two conversion directions are provided:
//! - [`Grid::point_to_grid`] divides pixel coordinates by the cell size and
//!   keeps the fractional result. Fractional positions are meaningful
//!   intermediate values while a drag is in flight; rounding happens only
//!   when a rectangle is committed.
//! - [`Grid::cell_rect_to_pixels`] maps a committed [`CellRect`] back to a
//!   pixel-space [`Rect`], rounding origin and size independently to whole
//!   pixels.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use cropline_grid::{CellRect, Grid};
//!
//! let grid = Grid::new(40, 40, 15.0);
//!
//! // Pointer at pixel (153, 90) is inside cell column 10, row 6.
//! let pos = grid.point_to_grid(Point::new(153.0, 90.0));
//! assert_eq!(pos.col, 10.2);
//! assert_eq!(pos.row, 6.0);
//!
//! // A 16x16-cell rectangle at (12, 12) covers 240x240 pixels.
//! let rect = CellRect::new(12, 12, 16, 16);
//! let px = grid.cell_rect_to_pixels(rect);
//! assert_eq!(px.origin(), Point::new(180.0, 180.0));
//! assert_eq!(px.width(), 240.0);
//! ```
//!
//! [`CellRect`] is a value object: every operation returns a new rectangle,
//! so callers can hold snapshots without aliasing concerns.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Point, Rect};

/// An immutable-for-a-session grid descriptor.
///
/// `cols` and `rows` are expected to be at least 1 and `cell_size` strictly
/// positive; violating that is a caller contract violation rather than a
/// runtime error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    /// Number of cell columns.
    pub cols: i32,
    /// Number of cell rows.
    pub rows: i32,
    /// Pixel size of one (square) cell.
    pub cell_size: f64,
}

impl Grid {
    /// Creates a grid descriptor.
    #[must_use]
    pub const fn new(cols: i32, rows: i32, cell_size: f64) -> Self {
        Self {
            cols,
            rows,
            cell_size,
        }
    }

    /// Converts a pixel-space point into a fractional grid position.
    ///
    /// No rounding is applied: a pointer halfway across a cell maps to a
    /// position with a `.5` fraction. Interaction code decides when and how
    /// to round.
    #[must_use]
    pub fn point_to_grid(&self, point: Point) -> GridPos {
        debug_assert!(
            self.cell_size > 0.0,
            "grid cell_size must be strictly positive"
        );
        GridPos {
            col: point.x / self.cell_size,
            row: point.y / self.cell_size,
        }
    }

    /// Converts a cell rectangle into a pixel-space rectangle.
    ///
    /// Origin and size are each scaled by the cell size and rounded to the
    /// nearest whole pixel independently, so a rectangle's pixel width
    /// depends only on its cell width, not on where it sits.
    #[must_use]
    pub fn cell_rect_to_pixels(&self, rect: CellRect) -> Rect {
        let x = (f64::from(rect.x) * self.cell_size).round();
        let y = (f64::from(rect.y) * self.cell_size).round();
        let w = (f64::from(rect.w) * self.cell_size).round();
        let h = (f64::from(rect.h) * self.cell_size).round();
        Rect::from_origin_size((x, y), (w, h))
    }
}

/// A fractional position in grid space, measured in cells.
///
/// Produced by [`Grid::point_to_grid`] while a pointer moves; both axes may
/// be negative or exceed the grid extents when the pointer leaves the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GridPos {
    /// Horizontal position in cells.
    pub col: f64,
    /// Vertical position in cells.
    pub row: f64,
}

impl GridPos {
    /// Creates a grid position.
    #[must_use]
    pub const fn new(col: f64, row: f64) -> Self {
        Self { col, row }
    }
}

/// A rectangle in whole grid cells.
///
/// This is the value type selections are expressed in. All operations return
/// a new `CellRect`; nothing mutates in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CellRect {
    /// Leftmost cell column.
    pub x: i32,
    /// Topmost cell row.
    pub y: i32,
    /// Width in cells.
    pub w: i32,
    /// Height in cells.
    pub h: i32,
}

impl CellRect {
    /// Creates a cell rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Returns the column just past the right edge (`x + w`).
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Returns the row just past the bottom edge (`y + h`).
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Returns the fractional center of the rectangle.
    #[must_use]
    pub fn center(&self) -> GridPos {
        GridPos {
            col: f64::from(self.x) + f64::from(self.w) / 2.0,
            row: f64::from(self.y) + f64::from(self.h) / 2.0,
        }
    }

    /// Returns this rectangle translated by whole-cell deltas.
    #[must_use]
    pub const fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            w: self.w,
            h: self.h,
        }
    }

    /// Returns this rectangle with both dimensions floored at `min`.
    ///
    /// Position is left untouched; only `w` and `h` grow.
    #[must_use]
    pub fn with_min_size(&self, min: i32) -> Self {
        Self {
            x: self.x,
            y: self.y,
            w: self.w.max(min),
            h: self.h.max(min),
        }
    }

    /// Returns this rectangle with both dimensions capped at the grid's.
    ///
    /// Position is left untouched; only `w` and `h` shrink. A resize can
    /// derive its passive dimension past the grid extent, so cap before
    /// clamping position: [`clamped_to`] alone cannot bring an oversized
    /// rectangle back inside.
    ///
    /// [`clamped_to`]: Self::clamped_to
    #[must_use]
    pub fn capped_to(&self, grid: &Grid) -> Self {
        Self {
            x: self.x,
            y: self.y,
            w: self.w.min(grid.cols),
            h: self.h.min(grid.rows),
        }
    }

    /// Clamps the rectangle's position so it lies within the grid.
    ///
    /// `x` is clamped into `[0, cols - w]` and `y` into `[0, rows - h]`.
    /// Width and height are never altered here; if the rectangle is wider or
    /// taller than the grid the clamp maximum degenerates below zero, in
    /// which case it is floored at 0 so the rectangle pins to the origin
    /// rather than taking a negative position.
    #[must_use]
    pub fn clamped_to(&self, grid: &Grid) -> Self {
        let max_x = (grid.cols - self.w).max(0);
        let max_y = (grid.rows - self.h).max(0);
        Self {
            x: self.x.clamp(0, max_x),
            y: self.y.clamp(0, max_y),
            w: self.w,
            h: self.h,
        }
    }

    /// Returns `true` if the rectangle lies entirely within the grid.
    #[must_use]
    pub const fn fits_within(&self, grid: &Grid) -> bool {
        self.x >= 0 && self.y >= 0 && self.right() <= grid.cols && self.bottom() <= grid.rows
    }
}
