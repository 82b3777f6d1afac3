// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay region builder: cut-outs, border edges, and hot zones.
//!
//! ## Overview
//!
//! [`build_overlay`] turns one [`RegionRequest`] into an [`Overlay`]: a list of
//! highlighted [`Region`]s, each carrying the clip shape to cut from the scrim,
//! the border edges to stroke, and the pointer hot zone.
//!
//! - The primary rectangle grows by its padding.
//! - Each auxiliary rectangle grows by its own horizontal and vertical shift.
//! - In merged mode the primary's bottom edge and each auxiliary's top edge are
//!   left unstroked, so the regions read as one continuous outline (tooltip
//!   above, auxiliaries below).
//! - Hot zones are each region grown by [`HOT_ZONE_MARGIN`] in total, centered.
//!
//! ## Degradation
//!
//! This runs on every frame. Suppressed requests, requests carrying
//! non-finite geometry, and finite geometry that overflows once padded or
//! shifted produce an [`Overlay`] with no regions (zero cut-out area, no
//! border) instead of failing. With clamping on, a region pushed entirely
//! outside the clamp bounds is left out.
//!
//! ```
//! use kurbo::Rect;
//! use showcase_overlay::{Auxiliary, Border, Edges, RegionRequest, build_overlay};
//!
//! let request = RegionRequest {
//!     auxiliaries: vec![Auxiliary::new(Rect::new(0.0, 60.0, 100.0, 100.0))],
//!     merge: true,
//!     border: Some(Border::default()),
//!     ..RegionRequest::new(Rect::new(0.0, 0.0, 100.0, 50.0))
//! };
//! let overlay = build_overlay(&request);
//! assert_eq!(overlay.regions.len(), 2);
//! assert!(!overlay.regions[0].edges.contains(Edges::BOTTOM));
//! assert!(!overlay.regions[1].edges.contains(Edges::TOP));
//! assert!(overlay.regions[1].edges.contains(Edges::BOTTOM));
//! ```

use alloc::vec::Vec;

use kurbo::{Circle, Insets, Point, Rect, RoundedRect, Shape as _, Vec2};

/// Total growth of a hot zone over its region, split evenly between opposite sides.
pub const HOT_ZONE_MARGIN: f64 = 16.0;

/// Shape of the cut-out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    /// A circle inscribed in the region's shorter side.
    Circle,
    /// A rounded rectangle with a uniform corner radius.
    RoundedRect {
        /// Corner radius.
        radius: f64,
    },
}

impl Default for Shape {
    fn default() -> Self {
        Self::RoundedRect { radius: 8.0 }
    }
}

bitflags::bitflags! {
    /// Region edges that receive a border stroke.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// Top edge.
        const TOP    = 0b0000_0001;
        /// Right edge.
        const RIGHT  = 0b0000_0010;
        /// Bottom edge.
        const BOTTOM = 0b0000_0100;
        /// Left edge.
        const LEFT   = 0b0000_1000;
    }
}

/// A border stroke drawn around highlighted regions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Border {
    /// Stroke width in layout units.
    pub width: f64,
}

impl Default for Border {
    fn default() -> Self {
        Self { width: 2.0 }
    }
}

/// A secondary rectangle highlighted alongside the primary target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Auxiliary {
    /// Screen-space bounds of the auxiliary element.
    pub rect: Rect,
    /// Outward growth; `x` applies to left and right, `y` to top and bottom.
    pub shift: Vec2,
}

impl Auxiliary {
    /// An auxiliary rectangle with no shift.
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            shift: Vec2::ZERO,
        }
    }

    /// Set the horizontal and vertical shift.
    pub fn with_shift(mut self, horizontal: f64, vertical: f64) -> Self {
        self.shift = Vec2::new(horizontal, vertical);
        self
    }
}

/// Per-frame input of [`build_overlay`].
#[derive(Clone, Debug, PartialEq)]
pub struct RegionRequest {
    /// Screen-space bounds of the primary target.
    pub primary: Rect,
    /// Outward padding of the primary target.
    pub padding: Insets,
    /// Co-highlighted rectangles, drawn in order (later ones stack above).
    pub auxiliaries: Vec<Auxiliary>,
    /// Merge the primary and auxiliary outlines into one.
    pub merge: bool,
    /// Cut-out shape, shared by every region.
    pub shape: Shape,
    /// Border stroke; `None` leaves every region unstroked.
    pub border: Option<Border>,
    /// Show the placeholder scrim instead of any highlight.
    pub suppressed: bool,
    /// Clamp every padded or shifted region to these bounds (usually the viewport).
    pub clamp: Option<Rect>,
}

impl RegionRequest {
    /// A request highlighting `primary` with no padding, auxiliaries, or border.
    pub fn new(primary: Rect) -> Self {
        Self {
            primary,
            padding: Insets::ZERO,
            auxiliaries: Vec::new(),
            merge: false,
            shape: Shape::default(),
            border: None,
            suppressed: false,
            clamp: None,
        }
    }

    fn is_finite(&self) -> bool {
        let insets_finite = |i: Insets| {
            i.x0.is_finite() && i.y0.is_finite() && i.x1.is_finite() && i.y1.is_finite()
        };
        let shape_finite = match self.shape {
            Shape::Circle => true,
            Shape::RoundedRect { radius } => radius.is_finite(),
        };
        self.primary.is_finite()
            && insets_finite(self.padding)
            && shape_finite
            && self.border.is_none_or(|b| b.width.is_finite())
            && self.clamp.is_none_or(|c| c.is_finite())
            && self
                .auxiliaries
                .iter()
                .all(|a| a.rect.is_finite() && a.shift.is_finite())
    }
}

/// Which input a [`Region`] was built from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RegionKind {
    /// The step's own target.
    Primary,
    /// An auxiliary rectangle, by position in [`RegionRequest::auxiliaries`].
    Auxiliary(usize),
}

/// Clip shape cut from the scrim.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Clip {
    /// Circular cut-out.
    Circle(Circle),
    /// Rounded-rectangle cut-out.
    RoundedRect(RoundedRect),
}

impl Clip {
    fn for_rect(rect: Rect, shape: Shape) -> Self {
        match shape {
            Shape::Circle => Self::Circle(Circle::new(
                rect.center(),
                rect.width().min(rect.height()) * 0.5,
            )),
            Shape::RoundedRect { radius } => {
                Self::RoundedRect(RoundedRect::from_rect(rect, radius.max(0.0)))
            }
        }
    }

    /// Area removed from the scrim.
    pub fn area(&self) -> f64 {
        match self {
            Self::Circle(c) => c.area(),
            Self::RoundedRect(r) => r.area(),
        }
    }

    /// Axis-aligned bounds of the clip.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Circle(c) => c.bounding_box(),
            Self::RoundedRect(r) => r.bounding_box(),
        }
    }
}

/// One highlighted area of the overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Region {
    /// Source of this region.
    pub kind: RegionKind,
    /// Highlighted rectangle after padding, shift, and clamping.
    pub rect: Rect,
    /// Shape cut from the scrim.
    pub clip: Clip,
    /// Edges to stroke; empty when no border was requested.
    pub edges: Edges,
    /// Pointer-interactive area, larger than [`Region::rect`].
    pub hot_zone: Rect,
}

impl Region {
    fn is_finite(&self) -> bool {
        self.rect.is_finite()
            && self.hot_zone.is_finite()
            && self.clip.bounding_box().is_finite()
    }
}

/// Output of [`build_overlay`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overlay {
    /// Highlighted regions, primary first.
    pub regions: Vec<Region>,
    /// Border stroke shared by all regions.
    pub border: Option<Border>,
    /// Draw the blocking placeholder scrim in place of the overlay.
    pub placeholder: bool,
}

impl Overlay {
    /// An overlay with nothing highlighted.
    pub fn neutral(placeholder: bool) -> Self {
        Self {
            regions: Vec::new(),
            border: None,
            placeholder,
        }
    }

    /// Returns true if nothing is highlighted.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Total area cut from the scrim.
    pub fn cutout_area(&self) -> f64 {
        self.regions.iter().map(|r| r.clip.area()).sum()
    }

    /// Union of all highlighted rectangles.
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.regions.iter().map(|r| r.rect);
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// The primary region, if any.
    pub fn primary(&self) -> Option<&Region> {
        self.regions.iter().find(|r| r.kind == RegionKind::Primary)
    }

    /// Returns the topmost region whose hot zone contains `pt`.
    ///
    /// Later regions stack above earlier ones.
    pub fn hit_test(&self, pt: Point) -> Option<&Region> {
        self.regions.iter().rev().find(|r| r.hot_zone.contains(pt))
    }
}

/// Build the overlay for one frame.
pub fn build_overlay(request: &RegionRequest) -> Overlay {
    if request.suppressed {
        return Overlay::neutral(true);
    }
    if !request.is_finite() {
        return Overlay::neutral(false);
    }

    // A region pushed entirely outside the clamp bounds is dropped.
    let flat = |r: Rect| r.width() <= 0.0 || r.height() <= 0.0;
    let clamp = |r: Rect| match request.clamp {
        Some(bounds) => {
            let clamped = r.intersect(bounds);
            (!flat(clamped) || flat(r)).then_some(clamped)
        }
        None => Some(r),
    };
    let stroked = |edges: Edges| {
        if request.border.is_some() {
            edges
        } else {
            Edges::empty()
        }
    };

    let auxiliaries: Vec<(usize, Rect)> = request
        .auxiliaries
        .iter()
        .enumerate()
        .filter_map(|(i, aux)| {
            let rect = aux.rect.inflate(aux.shift.x, aux.shift.y).abs();
            Some((i, clamp(rect)?))
        })
        .collect();
    let mut regions = Vec::with_capacity(1 + auxiliaries.len());

    if let Some(primary) = clamp((request.primary + request.padding).abs()) {
        let primary_edges = if request.merge && !auxiliaries.is_empty() {
            Edges::all() - Edges::BOTTOM
        } else {
            Edges::all()
        };
        regions.push(region(
            RegionKind::Primary,
            primary,
            request.shape,
            stroked(primary_edges),
        ));
    }

    for (i, rect) in auxiliaries {
        let edges = if request.merge {
            Edges::all() - Edges::TOP
        } else {
            Edges::all()
        };
        regions.push(region(
            RegionKind::Auxiliary(i),
            rect,
            request.shape,
            stroked(edges),
        ));
    }

    // Finite inputs can still overflow once padded, shifted, or grown.
    if !regions.iter().all(Region::is_finite) {
        return Overlay::neutral(false);
    }

    Overlay {
        regions,
        border: request.border,
        placeholder: false,
    }
}

fn region(kind: RegionKind, rect: Rect, shape: Shape, edges: Edges) -> Region {
    let half = HOT_ZONE_MARGIN * 0.5;
    Region {
        kind,
        rect,
        clip: Clip::for_rect(rect, shape),
        edges,
        hot_zone: rect.inflate(half, half),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn xywh(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::from_origin_size((x, y), (w, h))
    }

    #[test]
    fn merged_regions_drop_shared_edges() {
        let request = RegionRequest {
            auxiliaries: vec![Auxiliary::new(xywh(0.0, 60.0, 100.0, 40.0))],
            merge: true,
            border: Some(Border::default()),
            ..RegionRequest::new(xywh(0.0, 0.0, 100.0, 50.0))
        };
        let overlay = build_overlay(&request);
        assert_eq!(overlay.regions.len(), 2);

        let primary = &overlay.regions[0];
        let aux = &overlay.regions[1];
        assert_eq!(primary.rect, xywh(0.0, 0.0, 100.0, 50.0));
        assert_eq!(aux.rect, xywh(0.0, 60.0, 100.0, 40.0));
        assert_eq!(primary.edges, Edges::TOP | Edges::LEFT | Edges::RIGHT);
        assert_eq!(aux.edges, Edges::BOTTOM | Edges::LEFT | Edges::RIGHT);

        let covered = overlay.bounds().unwrap();
        assert_eq!(covered, xywh(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn unmerged_regions_keep_full_borders() {
        let request = RegionRequest {
            auxiliaries: vec![Auxiliary::new(xywh(0.0, 60.0, 100.0, 40.0))],
            border: Some(Border::default()),
            ..RegionRequest::new(xywh(0.0, 0.0, 100.0, 50.0))
        };
        let overlay = build_overlay(&request);
        assert!(overlay.regions.iter().all(|r| r.edges == Edges::all()));
    }

    #[test]
    fn no_border_means_no_edges() {
        let request = RegionRequest {
            auxiliaries: vec![Auxiliary::new(xywh(0.0, 60.0, 100.0, 40.0))],
            merge: true,
            ..RegionRequest::new(xywh(0.0, 0.0, 100.0, 50.0))
        };
        let overlay = build_overlay(&request);
        assert!(overlay.regions.iter().all(|r| r.edges.is_empty()));
        assert!(overlay.border.is_none());
    }

    #[test]
    fn padding_and_asymmetric_shift() {
        let request = RegionRequest {
            padding: Insets::uniform_xy(4.0, 2.0),
            auxiliaries: vec![Auxiliary::new(xywh(10.0, 100.0, 20.0, 20.0)).with_shift(6.0, 1.0)],
            ..RegionRequest::new(xywh(10.0, 10.0, 40.0, 20.0))
        };
        let overlay = build_overlay(&request);
        assert_eq!(overlay.regions[0].rect, Rect::new(6.0, 8.0, 54.0, 32.0));
        assert_eq!(overlay.regions[1].rect, Rect::new(4.0, 99.0, 36.0, 121.0));
    }

    #[test]
    fn hot_zone_grows_by_margin_and_stays_centered() {
        let overlay = build_overlay(&RegionRequest::new(xywh(20.0, 20.0, 10.0, 10.0)));
        let r = overlay.regions[0];
        assert_eq!(r.hot_zone.width(), r.rect.width() + HOT_ZONE_MARGIN);
        assert_eq!(r.hot_zone.height(), r.rect.height() + HOT_ZONE_MARGIN);
        assert_eq!(r.hot_zone.center(), r.rect.center());
    }

    #[test]
    fn suppressed_emits_placeholder_without_cutout() {
        let request = RegionRequest {
            suppressed: true,
            border: Some(Border::default()),
            ..RegionRequest::new(xywh(0.0, 0.0, 100.0, 50.0))
        };
        let overlay = build_overlay(&request);
        assert!(overlay.placeholder);
        assert!(overlay.is_empty());
        assert_eq!(overlay.cutout_area(), 0.0);
        assert!(overlay.border.is_none());
    }

    #[test]
    fn non_finite_geometry_degrades_to_zero_area() {
        let request = RegionRequest::new(Rect::new(f64::NAN, 0.0, 10.0, 10.0));
        let overlay = build_overlay(&request);
        assert!(overlay.is_empty());
        assert!(!overlay.placeholder);
        assert_eq!(overlay.cutout_area(), 0.0);

        let request = RegionRequest {
            auxiliaries: vec![Auxiliary::new(xywh(0.0, 0.0, 1.0, 1.0)).with_shift(f64::INFINITY, 0.0)],
            ..RegionRequest::new(xywh(0.0, 0.0, 10.0, 10.0))
        };
        let overlay = build_overlay(&request);
        assert!(overlay.is_empty());
        assert!(overlay.cutout_area().is_finite());
    }

    #[test]
    fn overflowing_padding_degrades_to_zero_area() {
        let request = RegionRequest {
            padding: Insets::uniform(1e308),
            shape: Shape::Circle,
            border: Some(Border::default()),
            ..RegionRequest::new(Rect::new(-1e308, 0.0, 1e308, 10.0))
        };
        let overlay = build_overlay(&request);
        assert!(overlay.is_empty(), "overflowed geometry must not reach the clip");
        assert!(!overlay.placeholder);
        assert!(overlay.border.is_none());
        assert_eq!(overlay.cutout_area(), 0.0);
    }

    #[test]
    fn overflowing_center_degrades_to_zero_area() {
        let request = RegionRequest {
            shape: Shape::Circle,
            ..RegionRequest::new(Rect::new(1e308, 0.0, 1.7e308, 10.0))
        };
        assert!(build_overlay(&request).is_empty());
    }

    #[test]
    fn circle_ignores_radius_and_uses_short_side() {
        let request = RegionRequest {
            shape: Shape::Circle,
            ..RegionRequest::new(xywh(0.0, 0.0, 40.0, 20.0))
        };
        let overlay = build_overlay(&request);
        match overlay.regions[0].clip {
            Clip::Circle(c) => {
                assert_eq!(c.center, Point::new(20.0, 10.0));
                assert_eq!(c.radius, 10.0);
            }
            Clip::RoundedRect(_) => panic!("expected a circular clip"),
        }
    }

    #[test]
    fn clamping_is_opt_in() {
        let viewport = xywh(0.0, 0.0, 100.0, 100.0);
        let request = RegionRequest {
            padding: Insets::uniform(10.0),
            auxiliaries: vec![Auxiliary::new(xywh(80.0, 90.0, 40.0, 20.0)).with_shift(5.0, 5.0)],
            ..RegionRequest::new(xywh(0.0, 0.0, 20.0, 20.0))
        };
        let unclamped = build_overlay(&request);
        assert_eq!(unclamped.regions[0].rect, Rect::new(-10.0, -10.0, 30.0, 30.0));
        assert_eq!(unclamped.regions[1].rect, Rect::new(75.0, 85.0, 125.0, 115.0));

        let clamped = build_overlay(&RegionRequest {
            clamp: Some(viewport),
            ..request
        });
        assert_eq!(clamped.regions[0].rect, Rect::new(0.0, 0.0, 30.0, 30.0));
        assert_eq!(clamped.regions[1].rect, Rect::new(75.0, 85.0, 100.0, 100.0));
    }

    #[test]
    fn regions_clamped_away_are_dropped() {
        let request = RegionRequest {
            auxiliaries: vec![
                Auxiliary::new(xywh(200.0, 0.0, 10.0, 10.0)),
                Auxiliary::new(xywh(10.0, 50.0, 10.0, 10.0)),
            ],
            merge: true,
            border: Some(Border::default()),
            clamp: Some(xywh(0.0, 0.0, 100.0, 100.0)),
            ..RegionRequest::new(xywh(10.0, 10.0, 10.0, 10.0))
        };
        let overlay = build_overlay(&request);
        let kinds: Vec<_> = overlay.regions.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![RegionKind::Primary, RegionKind::Auxiliary(1)]);
        assert!(overlay.hit_test(Point::new(100.0, 5.0)).is_none());

        // With every auxiliary gone the primary keeps its full outline.
        let alone = build_overlay(&RegionRequest {
            auxiliaries: vec![Auxiliary::new(xywh(200.0, 0.0, 10.0, 10.0))],
            ..request
        });
        assert_eq!(alone.regions.len(), 1);
        assert_eq!(alone.regions[0].edges, Edges::all());
    }

    #[test]
    fn hit_test_prefers_later_regions() {
        let request = RegionRequest {
            auxiliaries: vec![Auxiliary::new(xywh(0.0, 0.0, 10.0, 10.0))],
            ..RegionRequest::new(xywh(0.0, 0.0, 10.0, 10.0))
        };
        let overlay = build_overlay(&request);
        let hit = overlay.hit_test(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(hit.kind, RegionKind::Auxiliary(0));
        assert!(overlay.hit_test(Point::new(500.0, 5.0)).is_none());
    }
}
