// Copyright 2025 the Cropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ratio-preset button strip layout.
//!
//! The layout is fixed chrome shared between the click handler in this
//! crate and the overlay renderer, so the painted buttons and the hit
//! zones cannot drift apart.

use kurbo::{Point, Rect};

/// Pixel width of one preset button.
pub const PRESET_BUTTON_WIDTH: f64 = 45.0;
/// Pixel height of one preset button.
pub const PRESET_BUTTON_HEIGHT: f64 = 24.0;
/// Pixel gap between adjacent buttons, on both axes.
pub const PRESET_BUTTON_MARGIN: f64 = 8.0;
/// Canvas position of the first button's top-left corner.
pub const PRESET_BUTTON_ORIGIN: Point = Point::new(20.0, 20.0);
/// Buttons per row.
pub const PRESET_COLUMNS: usize = 3;

/// Returns the canvas rectangle of the preset button at `index`.
///
/// Buttons fill rows left to right, [`PRESET_COLUMNS`] per row, growing
/// downward.
#[must_use]
pub fn preset_button_rect(index: usize) -> Rect {
    let col = index % PRESET_COLUMNS;
    let row = index / PRESET_COLUMNS;
    let x = PRESET_BUTTON_ORIGIN.x + col as f64 * (PRESET_BUTTON_WIDTH + PRESET_BUTTON_MARGIN);
    let y = PRESET_BUTTON_ORIGIN.y + row as f64 * (PRESET_BUTTON_HEIGHT + PRESET_BUTTON_MARGIN);
    Rect::from_origin_size((x, y), (PRESET_BUTTON_WIDTH, PRESET_BUTTON_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_button_sits_at_the_origin() {
        let rect = preset_button_rect(0);
        assert_eq!(rect.origin(), PRESET_BUTTON_ORIGIN);
        assert_eq!(rect.width(), PRESET_BUTTON_WIDTH);
        assert_eq!(rect.height(), PRESET_BUTTON_HEIGHT);
    }

    #[test]
    fn buttons_wrap_after_three_columns() {
        let last_in_row = preset_button_rect(2);
        let first_in_next = preset_button_rect(3);
        assert_eq!(last_in_row.x0, 20.0 + 2.0 * (45.0 + 8.0));
        assert_eq!(last_in_row.y0, 20.0);
        assert_eq!(first_in_next.x0, 20.0);
        assert_eq!(first_in_next.y0, 20.0 + 24.0 + 8.0);
    }

    #[test]
    fn margins_separate_neighbors() {
        let a = preset_button_rect(0);
        let b = preset_button_rect(1);
        assert_eq!(b.x0 - a.x1, PRESET_BUTTON_MARGIN);
    }
}
