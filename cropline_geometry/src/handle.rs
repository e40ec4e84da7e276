// Copyright 2025 the Cropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handle classification: map a pointer position to a resize or move zone.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `abs`

use cropline_grid::{CellRect, GridPos};

use crate::HANDLE_TOLERANCE;

/// The zone of a selection rectangle a pointer gesture grabs.
///
/// Four corners, four edges, plus the interior [`Handle::Move`] zone. Corner
/// variants anchor the opposite corner during a resize; edge variants anchor
/// the opposite edge and keep the perpendicular-axis center fixed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handle {
    /// Interior grab: translate the whole rectangle.
    Move,
    /// Top-left corner.
    NorthWest,
    /// Top-right corner.
    NorthEast,
    /// Bottom-left corner.
    SouthWest,
    /// Bottom-right corner.
    SouthEast,
    /// Top edge.
    North,
    /// Bottom edge.
    South,
    /// Right edge.
    East,
    /// Left edge.
    West,
}

impl Handle {
    /// Returns `true` for the four corner handles.
    #[must_use]
    pub const fn is_corner(&self) -> bool {
        matches!(
            self,
            Self::NorthWest | Self::NorthEast | Self::SouthWest | Self::SouthEast
        )
    }

    /// Returns `true` for the four edge handles.
    #[must_use]
    pub const fn is_edge(&self) -> bool {
        matches!(self, Self::North | Self::South | Self::East | Self::West)
    }
}

/// Classifies a grid position against a rectangle's handle zones.
///
/// Each boundary line carries a symmetric [`HANDLE_TOLERANCE`]-cell band, so
/// a pointer slightly outside the rectangle near a corner still resolves to
/// that corner. Corners win over edges when both a horizontal and a vertical
/// line are within tolerance at once. A position strictly inside the
/// rectangle but clear of every band is [`Handle::Move`]; anything else is
/// `None`.
#[must_use]
pub fn detect_handle(bounds: CellRect, pos: GridPos) -> Option<Handle> {
    let left = f64::from(bounds.x);
    let right = f64::from(bounds.right());
    let top = f64::from(bounds.y);
    let bottom = f64::from(bounds.bottom());

    let near_left = (pos.col - left).abs() <= HANDLE_TOLERANCE;
    let near_right = (pos.col - right).abs() <= HANDLE_TOLERANCE;
    let near_top = (pos.row - top).abs() <= HANDLE_TOLERANCE;
    let near_bottom = (pos.row - bottom).abs() <= HANDLE_TOLERANCE;

    let inside_x = pos.col > left && pos.col < right;
    let inside_y = pos.row > top && pos.row < bottom;

    if (near_left || near_right) && (near_top || near_bottom) {
        if near_left && near_top {
            return Some(Handle::NorthWest);
        }
        if near_right && near_top {
            return Some(Handle::NorthEast);
        }
        if near_left && near_bottom {
            return Some(Handle::SouthWest);
        }
        if near_right && near_bottom {
            return Some(Handle::SouthEast);
        }
    }

    if near_left && inside_y {
        return Some(Handle::West);
    }
    if near_right && inside_y {
        return Some(Handle::East);
    }
    if near_top && inside_x {
        return Some(Handle::North);
    }
    if near_bottom && inside_x {
        return Some(Handle::South);
    }

    if inside_x && inside_y {
        return Some(Handle::Move);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: CellRect = CellRect::new(10, 10, 10, 10);

    #[test]
    fn corner_hit_inside_tolerance() {
        assert_eq!(
            detect_handle(BOUNDS, GridPos::new(10.2, 10.2)),
            Some(Handle::NorthWest)
        );
    }

    #[test]
    fn corner_hit_from_outside_the_rect() {
        // The tolerance band is symmetric around the boundary line.
        assert_eq!(
            detect_handle(BOUNDS, GridPos::new(9.4, 9.5)),
            Some(Handle::NorthWest)
        );
        assert_eq!(
            detect_handle(BOUNDS, GridPos::new(20.6, 20.6)),
            Some(Handle::SouthEast)
        );
    }

    #[test]
    fn corner_beats_edge_when_both_lines_are_near() {
        // Close to both the top and right line: corner wins.
        assert_eq!(
            detect_handle(BOUNDS, GridPos::new(19.5, 10.5)),
            Some(Handle::NorthEast)
        );
    }

    #[test]
    fn edge_hit_requires_being_inside_on_the_other_axis() {
        assert_eq!(
            detect_handle(BOUNDS, GridPos::new(15.0, 10.1)),
            Some(Handle::North)
        );
        assert_eq!(
            detect_handle(BOUNDS, GridPos::new(10.3, 15.0)),
            Some(Handle::West)
        );
        assert_eq!(
            detect_handle(BOUNDS, GridPos::new(20.3, 15.0)),
            Some(Handle::East)
        );
        assert_eq!(
            detect_handle(BOUNDS, GridPos::new(15.0, 20.4)),
            Some(Handle::South)
        );
        // Near the top line but horizontally outside the rectangle: no hit.
        assert_eq!(detect_handle(BOUNDS, GridPos::new(8.0, 10.1)), None);
    }

    #[test]
    fn interior_is_move() {
        assert_eq!(
            detect_handle(BOUNDS, GridPos::new(15.0, 15.0)),
            Some(Handle::Move)
        );
    }

    #[test]
    fn clear_of_all_zones_is_none() {
        assert_eq!(detect_handle(BOUNDS, GridPos::new(5.0, 5.0)), None);
        assert_eq!(detect_handle(BOUNDS, GridPos::new(25.0, 15.0)), None);
    }

    #[test]
    fn band_edge_falls_through_to_move() {
        // Just inside the band resolves to the edge; just past it the
        // position is plain interior.
        assert_eq!(
            detect_handle(BOUNDS, GridPos::new(10.6, 15.0)),
            Some(Handle::West)
        );
        assert_eq!(
            detect_handle(BOUNDS, GridPos::new(10.7, 15.0)),
            Some(Handle::Move)
        );
    }

    #[test]
    fn corner_and_edge_predicates() {
        assert!(Handle::NorthWest.is_corner());
        assert!(!Handle::NorthWest.is_edge());
        assert!(Handle::East.is_edge());
        assert!(!Handle::Move.is_corner());
        assert!(!Handle::Move.is_edge());
    }
}
