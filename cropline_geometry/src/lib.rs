// Copyright 2025 the Cropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cropline Geometry: pure selection-rectangle math.
//!
//! Everything in this crate is a pure function over [`CellRect`] values from
//! `cropline_grid`: given where a gesture started and where the pointer is
//! now, compute the rectangle it produces. No state, no events, no drawing —
//! the stateful controller lives in `cropline_selection` and feeds these
//! functions.
//!
//! The pieces are:
//! - [`Handle`] and [`detect_handle`]: classify a pointer position against a
//!   rectangle's eight resize zones and interior move zone, with a symmetric
//!   [`HANDLE_TOLERANCE`] band around every boundary line.
//! - [`translate`] and [`resize`]: compute the rectangle for an in-flight
//!   move or resize gesture, always from the gesture's original snapshot so
//!   repeated calls never accumulate drift.
//! - [`RatioPreset`], [`RATIO_PRESETS`], and [`fit_to_ratio`]: named aspect
//!   ratios and the fitting rule that reshapes a rectangle to honor one
//!   within the grid.
//!
//! ## Minimal example
//!
//! ```rust
//! use cropline_geometry::{Handle, detect_handle, resize};
//! use cropline_grid::{CellRect, GridPos};
//!
//! let bounds = CellRect::new(10, 10, 10, 10);
//!
//! // A pointer just outside the top-left corner still grabs it.
//! let handle = detect_handle(bounds, GridPos::new(9.6, 9.8));
//! assert_eq!(handle, Some(Handle::NorthWest));
//!
//! // Dragging the south-east corner out to (25, 18) with a free 1:1 aspect:
//! // the horizontal pull dominates, so width drives and height follows.
//! let resized = resize(bounds, Handle::SouthEast, GridPos::new(25.0, 18.0), 1.0);
//! assert_eq!(resized, CellRect::new(10, 10, 15, 15));
//! ```
//!
//! All functions are total over valid rectangles and grids; same inputs,
//! same output.
//!
//! This crate is `no_std`.

#![no_std]

mod handle;
mod ratio;
mod resize;

pub use handle::{Handle, detect_handle};
pub use ratio::{RATIO_PRESETS, RatioPreset, fit_to_ratio};
pub use resize::{resize, translate};

/// Minimum selection width and height, in cells.
///
/// Every committed rectangle honors this on both axes; resize math clamps
/// candidates against it before rounding.
pub const MIN_SIZE: i32 = 3;

/// Hit-test tolerance around handle boundary lines, in cells.
///
/// The band is symmetric: a pointer slightly outside the rectangle near a
/// corner still resolves to that corner.
pub const HANDLE_TOLERANCE: f64 = 0.65;
