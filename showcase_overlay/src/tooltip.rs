// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip placement around a highlighted region.
//!
//! Only the anchor math lives here; drawing the tooltip is left to the renderer.

use kurbo::{Point, Rect, Size};

/// Side of the highlighted region the tooltip sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the region.
    Top,
    /// Below the region.
    Bottom,
    /// Left of the region.
    Left,
    /// Right of the region.
    Right,
}

impl Side {
    /// The side across the region from this one.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Result of [`place_tooltip`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Side the tooltip renders on.
    pub side: Side,
    /// The preferred side did not fit and the tooltip moved to its opposite.
    pub flipped: bool,
    /// Top-left corner of the tooltip, clamped into the viewport.
    pub origin: Point,
    /// Midpoint of the region edge facing the tooltip (where an arrow points).
    pub anchor: Point,
}

impl Placement {
    /// Tooltip bounds for a tooltip of `size`.
    pub fn rect(&self, size: Size) -> Rect {
        Rect::from_origin_size(self.origin, size)
    }
}

/// Order tried when the caller has no preference.
const AUTO_ORDER: [Side; 4] = [Side::Bottom, Side::Top, Side::Right, Side::Left];

/// Choose where a tooltip of `size` goes around `region` inside `viewport`.
///
/// With no preference the first of below, above, right, left that fits wins
/// (falling back to below). A preferred side is kept unless it does not fit and
/// its opposite does, in which case the tooltip flips.
pub fn place_tooltip(
    region: Rect,
    size: Size,
    viewport: Size,
    preferred: Option<Side>,
    gap: f64,
) -> Placement {
    let bounds = viewport.to_rect();
    let fits = |side: Side| {
        let r = Rect::from_origin_size(unclamped_origin(region, size, side, gap), size);
        // Only the axis the tooltip is offset along must fit; the other is clamped.
        match side {
            Side::Top | Side::Bottom => r.y0 >= bounds.y0 && r.y1 <= bounds.y1,
            Side::Left | Side::Right => r.x0 >= bounds.x0 && r.x1 <= bounds.x1,
        }
    };

    let (side, flipped) = match preferred {
        Some(side) if fits(side) => (side, false),
        Some(side) if fits(side.opposite()) => (side.opposite(), true),
        Some(side) => (side, false),
        None => (
            AUTO_ORDER
                .into_iter()
                .find(|s| fits(*s))
                .unwrap_or(Side::Bottom),
            false,
        ),
    };

    let origin = clamp_origin(unclamped_origin(region, size, side, gap), size, bounds);
    Placement {
        side,
        flipped,
        origin,
        anchor: anchor(region, side),
    }
}

fn unclamped_origin(region: Rect, size: Size, side: Side, gap: f64) -> Point {
    let c = region.center();
    match side {
        Side::Bottom => Point::new(c.x - size.width * 0.5, region.y1 + gap),
        Side::Top => Point::new(c.x - size.width * 0.5, region.y0 - gap - size.height),
        Side::Right => Point::new(region.x1 + gap, c.y - size.height * 0.5),
        Side::Left => Point::new(region.x0 - gap - size.width, c.y - size.height * 0.5),
    }
}

fn clamp_origin(origin: Point, size: Size, bounds: Rect) -> Point {
    // Oversized tooltips pin to the top-left edge.
    let max_x = (bounds.x1 - size.width).max(bounds.x0);
    let max_y = (bounds.y1 - size.height).max(bounds.y0);
    Point::new(
        origin.x.clamp(bounds.x0, max_x),
        origin.y.clamp(bounds.y0, max_y),
    )
}

fn anchor(region: Rect, side: Side) -> Point {
    let c = region.center();
    match side {
        Side::Bottom => Point::new(c.x, region.y1),
        Side::Top => Point::new(c.x, region.y0),
        Side::Right => Point::new(region.x1, c.y),
        Side::Left => Point::new(region.x0, c.y),
    }
}
