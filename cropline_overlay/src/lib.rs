// Copyright 2025 the Cropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cropline Overlay: backend-agnostic overlay scene computation.
//!
//! Rendering the selection chrome — the dimmed surround, the selection
//! frame, eight handle squares, a dimension readout, and the ratio-preset
//! button strip — needs nothing but rectangles. This crate computes those
//! rectangles from a read-only view of the [`SelectionController`] and
//! leaves the actual painting (and text measurement) to whatever backend
//! the host uses.
//!
//! Call [`build_overlay`] once per frame:
//!
//! ```rust
//! use kurbo::Size;
//! use cropline_grid::Grid;
//! use cropline_overlay::build_overlay;
//! use cropline_selection::SelectionController;
//!
//! let grid = Grid::new(40, 40, 15.0);
//! let mut selection = SelectionController::new(grid);
//! selection.enter(grid).unwrap();
//!
//! let scene = build_overlay(&selection, &grid, Size::new(600.0, 600.0)).unwrap();
//! // Four dim masks surround the centered default selection.
//! assert_eq!(scene.masks.len(), 4);
//! assert_eq!(scene.handles.len(), 8);
//! assert_eq!(scene.buttons.len(), 9);
//! ```
//!
//! The handle square size lives here as [`HANDLE_SIZE`] next to the other
//! chrome constants (`cropline_selection` owns the button layout, shared
//! with its click handler; `cropline_geometry` owns the hit-test
//! tolerance), so renderer and hit-testing never drift apart on shared
//! geometry.
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use cropline_grid::Grid;
use cropline_selection::{SelectionController, preset_button_rect};

/// Pixel side length of the eight square resize handles.
pub const HANDLE_SIZE: f64 = 8.0;

/// Everything a backend needs to paint one frame of selection chrome.
///
/// All rectangles are in canvas pixel space.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayScene {
    /// Dimmed rectangles tiling the canvas around the selection.
    ///
    /// Up to four (above, below, left, right); strips with zero extent are
    /// omitted, so a selection flush with a canvas edge produces fewer.
    pub masks: SmallVec<[Rect; 4]>,
    /// The selection frame itself, to be stroked.
    pub frame: Rect,
    /// The eight handle squares: corners and edge midpoints.
    pub handles: [Rect; 8],
    /// Cell-dimension readout next to the selection.
    pub label: DimensionLabel,
    /// The ratio-preset button strip.
    pub buttons: [PresetButton; 9],
}

/// The `cols × rows` readout anchored near the selection's lower-right.
///
/// Text layout depends on font metrics, so only the numbers and the pixel
/// anchor are provided; the host formats and measures the string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionLabel {
    /// Selection width in cells.
    pub cols: i32,
    /// Selection height in cells.
    pub rows: i32,
    /// Bottom-right corner of the selection frame, in pixels.
    pub anchor: Point,
}

/// One ratio-preset button.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresetButton {
    /// Button rectangle in canvas pixels.
    pub rect: Rect,
    /// Preset label, e.g. `"16:9"`.
    pub label: &'static str,
    /// `true` for the currently selected preset.
    pub active: bool,
}

/// Computes the overlay scene for the current frame.
///
/// Reads the controller without mutating it. Returns `None` while selection
/// mode is inactive or the selection has never been initialized, in which
/// case the host draws no chrome at all.
#[must_use]
pub fn build_overlay(
    selection: &SelectionController,
    grid: &Grid,
    canvas: Size,
) -> Option<OverlayScene> {
    let bounds = selection.active_bounds()?;
    let frame = grid.cell_rect_to_pixels(bounds);

    let mut masks = SmallVec::new();
    if frame.y0 > 0.0 {
        masks.push(Rect::new(0.0, 0.0, canvas.width, frame.y0));
    }
    if frame.y1 < canvas.height {
        masks.push(Rect::new(0.0, frame.y1, canvas.width, canvas.height));
    }
    if frame.x0 > 0.0 {
        masks.push(Rect::new(0.0, frame.y0, frame.x0, frame.y1));
    }
    if frame.x1 < canvas.width {
        masks.push(Rect::new(frame.x1, frame.y0, canvas.width, frame.y1));
    }

    let cx = (frame.x0 + frame.x1) / 2.0;
    let cy = (frame.y0 + frame.y1) / 2.0;
    let handles = [
        handle_square(frame.x0, frame.y0),
        handle_square(cx, frame.y0),
        handle_square(frame.x1, frame.y0),
        handle_square(frame.x0, cy),
        handle_square(frame.x1, cy),
        handle_square(frame.x0, frame.y1),
        handle_square(cx, frame.y1),
        handle_square(frame.x1, frame.y1),
    ];

    let active_ratio = selection.active_ratio();
    let buttons = core::array::from_fn(|index| {
        let preset = selection.ratio_presets()[index];
        PresetButton {
            rect: preset_button_rect(index),
            label: preset.label,
            active: active_ratio == Some(preset),
        }
    });

    Some(OverlayScene {
        masks,
        frame,
        handles,
        label: DimensionLabel {
            cols: bounds.w,
            rows: bounds.h,
            anchor: Point::new(frame.x1, frame.y1),
        },
        buttons,
    })
}

/// A handle square centered on the given frame point.
fn handle_square(x: f64, y: f64) -> Rect {
    let half = HANDLE_SIZE / 2.0;
    Rect::new(x - half, y - half, x + half, y + half)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropline_selection::PRESET_BUTTON_ORIGIN;

    const GRID: Grid = Grid::new(40, 40, 15.0);
    const CANVAS: Size = Size::new(600.0, 600.0);

    fn active_selection() -> SelectionController {
        let mut selection = SelectionController::new(GRID);
        selection.enter(GRID).unwrap();
        selection
    }

    #[test]
    fn inactive_controller_builds_nothing() {
        let selection = SelectionController::new(GRID);
        assert!(build_overlay(&selection, &GRID, CANVAS).is_none());
    }

    #[test]
    fn masks_and_frame_tile_the_canvas() {
        let selection = active_selection();
        let scene = build_overlay(&selection, &GRID, CANVAS).unwrap();

        assert_eq!(scene.frame, Rect::new(180.0, 180.0, 420.0, 420.0));
        assert_eq!(scene.masks.len(), 4);

        let covered: f64 = scene.masks.iter().map(|m| m.area()).sum::<f64>() + scene.frame.area();
        assert_eq!(covered, CANVAS.width * CANVAS.height);

        // No mask overlaps the frame or another mask.
        for (i, a) in scene.masks.iter().enumerate() {
            assert_eq!(a.intersect(scene.frame).area(), 0.0);
            for b in scene.masks.iter().skip(i + 1) {
                assert_eq!(a.intersect(*b).area(), 0.0);
            }
        }
    }

    #[test]
    fn flush_selection_drops_degenerate_masks() {
        let mut selection = active_selection();
        // Push the selection into the top-left corner.
        selection.nudge(-40, -40, &GRID);
        let scene = build_overlay(&selection, &GRID, CANVAS).unwrap();
        // Only the bottom and right strips remain.
        assert_eq!(scene.masks.len(), 2);
    }

    #[test]
    fn handles_sit_on_corners_and_edge_midpoints() {
        let selection = active_selection();
        let scene = build_overlay(&selection, &GRID, CANVAS).unwrap();

        let expected_centers = [
            (180.0, 180.0),
            (300.0, 180.0),
            (420.0, 180.0),
            (180.0, 300.0),
            (420.0, 300.0),
            (180.0, 420.0),
            (300.0, 420.0),
            (420.0, 420.0),
        ];
        for (handle, (x, y)) in scene.handles.iter().zip(expected_centers) {
            assert_eq!(handle.center(), Point::new(x, y));
            assert_eq!(handle.width(), HANDLE_SIZE);
            assert_eq!(handle.height(), HANDLE_SIZE);
        }
    }

    #[test]
    fn label_reports_cell_dimensions_at_the_frame_corner() {
        let selection = active_selection();
        let scene = build_overlay(&selection, &GRID, CANVAS).unwrap();
        assert_eq!(scene.label.cols, 16);
        assert_eq!(scene.label.rows, 16);
        assert_eq!(scene.label.anchor, Point::new(420.0, 420.0));
    }

    #[test]
    fn buttons_follow_the_shared_layout_and_active_preset() {
        let mut selection = active_selection();
        selection.set_ratio_preset(5); // 16:9
        let scene = build_overlay(&selection, &GRID, CANVAS).unwrap();

        assert_eq!(scene.buttons[0].rect.origin(), PRESET_BUTTON_ORIGIN);
        for (index, button) in scene.buttons.iter().enumerate() {
            assert_eq!(button.rect, preset_button_rect(index));
            assert_eq!(button.active, index == 5);
        }
        assert_eq!(scene.buttons[5].label, "16:9");
    }

    #[test]
    fn explicit_free_preset_highlights_its_button() {
        let mut selection = active_selection();
        selection.set_ratio_preset(0);
        let scene = build_overlay(&selection, &GRID, CANVAS).unwrap();
        assert!(scene.buttons[0].active);

        // Out-of-range selection clears the preset entirely: no highlight.
        selection.set_ratio_preset(42);
        let scene = build_overlay(&selection, &GRID, CANVAS).unwrap();
        assert!(scene.buttons.iter().all(|b| !b.active));
    }
}
