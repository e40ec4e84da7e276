// Copyright 2025 the Cropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cropline Selection: the stateful crop-selection controller.
//!
//! [`SelectionController`] owns the lifecycle of an interactive selection
//! rectangle on a cell grid: entering and leaving selection mode, the
//! pointer gesture state machine (press, drag, release), keyboard nudges,
//! and aspect-ratio presets. It computes and stores grid-space bounds and
//! nothing else — hit-zone classification and resize math come from
//! `cropline_geometry`, and drawing is someone else's job (see
//! `cropline_overlay`).
//!
//! Hosts forward their pointer and key events into the `on_*` handlers and
//! read the current rectangle back each frame. Every handler takes the
//! current [`Grid`] explicitly, so a window resize between frames simply
//! shows up as a different grid on the next event. Handlers called while
//! selection mode is inactive are documented no-ops returning `false`.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use cropline_grid::{CellRect, Grid};
//! use cropline_selection::SelectionController;
//!
//! let grid = Grid::new(40, 40, 15.0);
//! let mut selection = SelectionController::new(grid);
//!
//! // Entering computes a centered default rectangle.
//! selection.enter(grid).unwrap();
//! assert_eq!(selection.active_bounds(), Some(CellRect::new(12, 12, 16, 16)));
//!
//! // Grab the north-west corner (cell 12,12 is pixel 180,180) and drag it
//! // out to cell (7, 7): the south-east corner stays anchored.
//! assert!(selection.on_down(Point::new(180.0, 180.0), &grid));
//! assert!(selection.on_drag(Point::new(105.0, 105.0), &grid));
//! selection.on_up();
//! assert_eq!(selection.active_bounds(), Some(CellRect::new(7, 7, 21, 21)));
//!
//! // Leaving remembers the rectangle for the next session.
//! selection.exit();
//! assert_eq!(selection.active_bounds(), None);
//! selection.enter(grid).unwrap();
//! assert_eq!(selection.active_bounds(), Some(CellRect::new(7, 7, 21, 21)));
//! ```
//!
//! Escape handling stays with the host: route it to
//! [`SelectionController::exit`] before forwarding any further drag events.
//!
//! This crate is `no_std`.

#![no_std]

mod buttons;

pub use buttons::{
    PRESET_BUTTON_HEIGHT, PRESET_BUTTON_MARGIN, PRESET_BUTTON_ORIGIN, PRESET_BUTTON_WIDTH,
    PRESET_COLUMNS, preset_button_rect,
};

use core::fmt;

use kurbo::{Point, Rect};

use cropline_geometry::{
    Handle, MIN_SIZE, RATIO_PRESETS, RatioPreset, detect_handle, fit_to_ratio, resize, translate,
};
use cropline_grid::{CellRect, Grid, GridPos};

/// Largest default-selection side length, in cells.
const DEFAULT_MAX_SIZE: i32 = 16;

/// Error returned when selection mode cannot be entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionError {
    /// The grid is too small to hold a minimum-size selection.
    ///
    /// This is a host configuration problem: selection mode needs at least
    /// [`MIN_SIZE`] cells on both axes. It is fatal for selection mode only,
    /// not for the application.
    GridTooSmall {
        /// Offending column count.
        cols: i32,
        /// Offending row count.
        rows: i32,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GridTooSmall { cols, rows } => write!(
                f,
                "grid of {cols}x{rows} cells cannot hold a {MIN_SIZE}x{MIN_SIZE} selection"
            ),
        }
    }
}

impl core::error::Error for SelectionError {}

/// Snapshot of an in-flight pointer gesture.
///
/// Created on a successful pointer-down hit test and destroyed on release.
/// Every drag computes from this snapshot rather than from the previous
/// frame's bounds, so repeated events cannot accumulate drift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interaction {
    /// The handle the gesture grabbed.
    pub handle: Handle,
    /// Fractional grid position where the pointer went down.
    pub start: GridPos,
    /// Bounds at gesture start.
    pub original: CellRect,
    /// Center of `original`, the recentering anchor for edge resizes.
    pub original_center: GridPos,
}

/// The stateful crop-selection controller.
///
/// See the crate docs for the event-flow overview. All mutation happens on
/// the host's single UI callback turn; there is no interior mutability and
/// at most one live [`Interaction`] at a time.
#[derive(Clone, Debug)]
pub struct SelectionController {
    grid: Grid,
    active: bool,
    bounds: Option<CellRect>,
    last_bounds: Option<CellRect>,
    aspect_ratio: f64,
    interaction: Option<Interaction>,
    active_ratio: Option<RatioPreset>,
    hover: Option<Handle>,
}

impl SelectionController {
    /// Creates an inactive controller for the given grid.
    #[must_use]
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            active: false,
            bounds: None,
            last_bounds: None,
            aspect_ratio: 1.0,
            interaction: None,
            active_ratio: None,
            hover: None,
        }
    }

    /// Enters selection mode.
    ///
    /// Restores the rectangle remembered by the previous [`exit`], or
    /// computes a centered default sized to half the grid's smaller axis
    /// (at most 16 cells, at least [`MIN_SIZE`]). The result is clamped to
    /// the grid and refit to the active ratio preset, if any.
    ///
    /// The grid is stored for later preset refits; event handlers still
    /// take a fresh grid per call.
    ///
    /// # Errors
    ///
    /// [`SelectionError::GridTooSmall`] if either grid dimension is below
    /// [`MIN_SIZE`].
    ///
    /// [`exit`]: Self::exit
    pub fn enter(&mut self, grid: Grid) -> Result<(), SelectionError> {
        if grid.cols < MIN_SIZE || grid.rows < MIN_SIZE {
            return Err(SelectionError::GridTooSmall {
                cols: grid.cols,
                rows: grid.rows,
            });
        }
        self.grid = grid;

        let mut bounds = self
            .last_bounds
            .unwrap_or_else(|| default_bounds(&grid))
            .with_min_size(MIN_SIZE)
            .capped_to(&grid)
            .clamped_to(&grid);
        if let Some(ratio) = self.active_ratio {
            bounds = fit_to_ratio(bounds, &ratio, &grid);
        }

        self.bounds = Some(bounds);
        self.active = true;
        self.interaction = None;
        Ok(())
    }

    /// Leaves selection mode, remembering the current rectangle.
    ///
    /// Any in-flight gesture is dropped. Idempotent: calling this while
    /// already inactive only repeats the bounds snapshot.
    pub fn exit(&mut self) {
        if let Some(bounds) = self.bounds {
            self.last_bounds = Some(bounds);
        }
        self.active = false;
        self.interaction = None;
        self.hover = None;
    }

    /// Returns `true` while selection mode is engaged.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the current rectangle regardless of mode.
    #[must_use]
    pub fn bounds(&self) -> Option<CellRect> {
        self.bounds
    }

    /// Returns the current rectangle, or `None` while inactive.
    #[must_use]
    pub fn active_bounds(&self) -> Option<CellRect> {
        if self.active { self.bounds } else { None }
    }

    /// Returns the rectangle remembered across mode exits.
    #[must_use]
    pub fn last_bounds(&self) -> Option<CellRect> {
        self.last_bounds
    }

    /// Returns the free-form corner-resize aspect ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    /// Sets the free-form corner-resize aspect ratio.
    ///
    /// This is the ratio corner drags derive their passive dimension from
    /// when no preset constrains the shape. It defaults to 1.
    pub fn set_aspect_ratio(&mut self, ratio: f64) {
        debug_assert!(ratio > 0.0, "aspect ratio must be strictly positive");
        self.aspect_ratio = ratio;
    }

    /// Returns the active ratio preset, if any.
    #[must_use]
    pub fn active_ratio(&self) -> Option<RatioPreset> {
        self.active_ratio
    }

    /// Returns the fixed, ordered preset list.
    #[must_use]
    pub fn ratio_presets(&self) -> &'static [RatioPreset; 9] {
        &RATIO_PRESETS
    }

    /// Returns the handle the pointer currently hovers, if any.
    ///
    /// While a gesture is live this is the gesture's handle.
    #[must_use]
    pub fn hover_handle(&self) -> Option<Handle> {
        self.hover
    }

    /// Returns the current in-flight gesture, if any.
    #[must_use]
    pub fn interaction(&self) -> Option<Interaction> {
        self.interaction
    }

    /// Handles a pointer press at pixel position `pointer`.
    ///
    /// Hit-tests against the current rectangle and, on a hit, snapshots an
    /// [`Interaction`]. Returns `true` when the press grabbed a handle.
    /// No-op returning `false` while inactive, before any bounds exist, or
    /// while another gesture is still live (a second concurrent pointer is
    /// rejected rather than restarted).
    pub fn on_down(&mut self, pointer: Point, grid: &Grid) -> bool {
        if !self.active || self.interaction.is_some() {
            return false;
        }
        let Some(bounds) = self.bounds else {
            return false;
        };

        let pos = grid.point_to_grid(pointer);
        let Some(handle) = detect_handle(bounds, pos) else {
            return false;
        };

        self.interaction = Some(Interaction {
            handle,
            start: pos,
            original: bounds,
            original_center: bounds.center(),
        });
        self.hover = Some(handle);
        true
    }

    /// Handles a pointer move while pressed.
    ///
    /// Delegates to the geometry for the grabbed handle, then enforces the
    /// minimum size, caps dimensions at the grid's, clamps position to the
    /// grid, and refits to the active ratio preset, in that order. The cap
    /// matters on non-square grids: a free-form edge drag derives the
    /// perpendicular dimension through the aspect ratio and can push it past
    /// the shorter grid axis. Returns `false` when no gesture is live.
    pub fn on_drag(&mut self, pointer: Point, grid: &Grid) -> bool {
        if !self.active {
            return false;
        }
        let Some(interaction) = self.interaction else {
            return false;
        };

        let pos = grid.point_to_grid(pointer);
        let next = match interaction.handle {
            Handle::Move => translate(interaction.original, interaction.start, pos),
            handle => resize(interaction.original, handle, pos, self.aspect_ratio),
        };

        let mut next = next.with_min_size(MIN_SIZE).capped_to(grid).clamped_to(grid);
        if let Some(ratio) = self.active_ratio {
            next = fit_to_ratio(next, &ratio, grid);
        }

        self.bounds = Some(next);
        true
    }

    /// Handles a pointer release, committing the gesture.
    ///
    /// The current rectangle becomes the remembered `last_bounds` and the
    /// gesture ends. No-op while inactive or with no gesture live.
    pub fn on_up(&mut self) {
        if !self.active || self.interaction.is_none() {
            return;
        }
        self.last_bounds = self.bounds;
        self.interaction = None;
    }

    /// Tracks the hovered handle for an unpressed pointer move.
    ///
    /// Hosts typically map the result to a cursor shape. Returns the
    /// hovered handle, `None` while inactive or away from every zone.
    pub fn on_move(&mut self, pointer: Point, grid: &Grid) -> Option<Handle> {
        if !self.active {
            self.hover = None;
            return None;
        }
        if let Some(interaction) = self.interaction {
            self.hover = Some(interaction.handle);
            return self.hover;
        }
        let Some(bounds) = self.bounds else {
            self.hover = None;
            return None;
        };
        self.hover = detect_handle(bounds, grid.point_to_grid(pointer));
        self.hover
    }

    /// Translates the selection by whole-cell deltas.
    ///
    /// A single discrete action: the result is clamped to the grid and
    /// committed to `last_bounds` immediately, no gesture involved. No-op
    /// while inactive.
    pub fn nudge(&mut self, dx: i32, dy: i32, grid: &Grid) {
        if !self.active {
            return;
        }
        let Some(bounds) = self.bounds else {
            return;
        };
        let next = bounds.translated(dx, dy).clamped_to(grid);
        self.bounds = Some(next);
        self.last_bounds = Some(next);
    }

    /// Selects a ratio preset by index into [`RATIO_PRESETS`].
    ///
    /// An out-of-range index falls back to free-form rather than erroring.
    /// When selection mode is active with a rectangle, the rectangle is
    /// refit to the new preset and committed immediately.
    pub fn set_ratio_preset(&mut self, index: usize) {
        let preset = RATIO_PRESETS.get(index).copied();
        self.active_ratio = preset;

        if let (Some(ratio), Some(bounds)) = (preset, self.bounds)
            && self.active
        {
            let fitted = fit_to_ratio(bounds, &ratio, &self.grid);
            self.bounds = Some(fitted);
            self.last_bounds = Some(fitted);
        }
    }

    /// Hit-tests a pointer press against the ratio-preset button strip.
    ///
    /// Buttons lay out per [`preset_button_rect`]; edges are inclusive.
    /// On a hit the preset is selected as by [`set_ratio_preset`] and
    /// `true` is returned. No-op returning `false` while inactive.
    ///
    /// [`set_ratio_preset`]: Self::set_ratio_preset
    pub fn on_preset_click(&mut self, pointer: Point) -> bool {
        if !self.active {
            return false;
        }
        for index in 0..RATIO_PRESETS.len() {
            let rect = preset_button_rect(index);
            if pointer.x >= rect.x0
                && pointer.x <= rect.x1
                && pointer.y >= rect.y0
                && pointer.y <= rect.y1
            {
                self.set_ratio_preset(index);
                return true;
            }
        }
        false
    }

    /// Returns the active selection as a pixel-space rectangle.
    ///
    /// This is the export path: hosts crop their rendered bitmap to this
    /// rectangle. `None` while inactive.
    #[must_use]
    pub fn crop_rect(&self, grid: &Grid) -> Option<Rect> {
        self.active_bounds()
            .map(|bounds| grid.cell_rect_to_pixels(bounds))
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SelectionDebugInfo {
        SelectionDebugInfo {
            active: self.active,
            bounds: self.bounds,
            last_bounds: self.last_bounds,
            aspect_ratio: self.aspect_ratio,
            active_ratio: self.active_ratio,
            interaction: self.interaction,
            hover: self.hover,
        }
    }
}

/// Debug snapshot of a [`SelectionController`].
#[derive(Clone, Debug)]
pub struct SelectionDebugInfo {
    /// Whether selection mode is engaged.
    pub active: bool,
    /// Current rectangle, if initialized.
    pub bounds: Option<CellRect>,
    /// Rectangle remembered across mode exits.
    pub last_bounds: Option<CellRect>,
    /// Free-form corner-resize aspect ratio.
    pub aspect_ratio: f64,
    /// Active ratio preset.
    pub active_ratio: Option<RatioPreset>,
    /// In-flight gesture.
    pub interaction: Option<Interaction>,
    /// Currently hovered handle.
    pub hover: Option<Handle>,
}

/// Computes the centered default rectangle for a fresh session.
fn default_bounds(grid: &Grid) -> CellRect {
    let size = (grid.cols.min(grid.rows) / 2)
        .min(DEFAULT_MAX_SIZE)
        .max(MIN_SIZE);
    CellRect {
        x: ((grid.cols - size) / 2).max(0),
        y: ((grid.rows - size) / 2).max(0),
        w: size,
        h: size,
    }
}
