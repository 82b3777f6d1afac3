// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry resolver: current screen rectangles of registered elements.

use kurbo::{Point, Rect};

use crate::registry::{ElementHandle, ElementRegistry};

/// Host access to current layout.
///
/// Implemented by the toolkit, or by any `Fn(&K) -> Option<Rect>`. Rectangles
/// are in the same coordinate space as the viewport passed to
/// [`Tour::frame`](crate::Tour::frame).
pub trait LayoutSource<K> {
    /// Current screen-space bounds of the element `id`, or `None` if it is not
    /// mounted or has not been laid out yet.
    fn bounds(&self, id: &K) -> Option<Rect>;
}

impl<K, F: Fn(&K) -> Option<Rect>> LayoutSource<K> for F {
    fn bounds(&self, id: &K) -> Option<Rect> {
        self(id)
    }
}

/// A measured target.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Target {
    /// Screen-space bounds.
    pub rect: Rect,
    /// Center of [`Target::rect`].
    pub center: Point,
}

/// Resolve the bounding rectangle of the element behind `handle`.
///
/// Returns `None` when the handle is stale, when the layout has nothing for
/// the element, or when the reported rectangle has a non-finite coordinate or
/// a negative extent (the usual result of querying before the first layout
/// pass). Never cached.
pub fn bounding_rect<K>(
    registry: &ElementRegistry<K>,
    layout: &impl LayoutSource<K>,
    handle: ElementHandle,
) -> Option<Target> {
    let id = registry.identity(handle)?;
    let rect = layout.bounds(id)?;
    if !rect.is_finite() || rect.width() < 0.0 || rect.height() < 0.0 {
        return None;
    }
    Some(Target {
        rect,
        center: rect.center(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(rect: Option<Rect>) -> Option<Target> {
        let mut registry = ElementRegistry::new();
        let handle = registry.register('a');
        bounding_rect(&registry, &|_: &char| rect, handle)
    }

    #[test]
    fn measured_rect_has_center() {
        let t = measure(Some(Rect::new(0.0, 0.0, 10.0, 20.0))).unwrap();
        assert_eq!(t.center, Point::new(5.0, 10.0));
    }

    #[test]
    fn unmeasured_is_absent() {
        assert!(measure(None).is_none());
        assert!(measure(Some(Rect::new(f64::NAN, 0.0, 10.0, 10.0))).is_none());
        assert!(measure(Some(Rect::new(0.0, 0.0, f64::INFINITY, 10.0))).is_none());
    }

    #[test]
    fn inverted_rect_is_absent() {
        assert!(measure(Some(Rect::new(10.0, 0.0, 0.0, 10.0))).is_none());
    }

    #[test]
    fn stale_handle_is_absent() {
        let mut registry = ElementRegistry::new();
        let handle = registry.register('a');
        registry.reset();
        let _ = registry.register('a');
        let layout = |_: &char| Some(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert!(bounding_rect(&registry, &layout, handle).is_none());
    }
}
