// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Showcase Overlay: Kurbo-native geometry for guided-tour overlays.
//!
//! A guided tour darkens the screen, cuts a hole around the element being
//! explained, and puts a tooltip next to it. This crate computes the geometry
//! of that overlay, one frame at a time, from plain rectangles.
//!
//! - [`Visibility`]: the occlusion policy deciding whether the real overlay or a
//!   placeholder scrim is shown (mid-scroll, mid route transition).
//! - [`build_overlay`]: turns a [`RegionRequest`] (primary rectangle, padding,
//!   auxiliary rectangles, merge flag, shape) into an [`Overlay`] of clip
//!   shapes, border edges, and pointer hot zones.
//! - [`place_tooltip`]: picks the side of the highlighted region the tooltip
//!   goes on and flips it to stay on screen.
//!
//! ## Not a renderer
//!
//! Nothing here paints. The output describes what to cut, what to stroke, and
//! where pointer input should land; the toolkit draws it however it likes.
//!
//! ## Float semantics
//!
//! Inputs come straight from layout and may be garbage before the first layout
//! pass. Any non-finite coordinate makes [`build_overlay`] return an empty
//! overlay instead of leaking NaN into clip or border geometry.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Insets, Rect, Size};
//! use showcase_overlay::{RegionRequest, Visibility, build_overlay, place_tooltip};
//!
//! let viewport = Size::new(400.0, 800.0);
//! let target = Rect::new(150.0, 300.0, 250.0, 340.0);
//!
//! let request = RegionRequest {
//!     padding: Insets::uniform(4.0),
//!     suppressed: Visibility::SETTLED.is_suppressed(),
//!     ..RegionRequest::new(target)
//! };
//! let overlay = build_overlay(&request);
//! let highlighted = overlay.bounds().unwrap();
//! assert_eq!(highlighted, Rect::new(146.0, 296.0, 254.0, 344.0));
//!
//! let tip = place_tooltip(highlighted, Size::new(200.0, 80.0), viewport, None, 8.0);
//! assert!(tip.origin.y >= highlighted.y1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod region;
pub mod tooltip;
pub mod visibility;

pub use region::{
    Auxiliary, Border, Clip, Edges, HOT_ZONE_MARGIN, Overlay, Region, RegionKind, RegionRequest,
    Shape, build_overlay,
};
pub use tooltip::{Placement, Side, place_tooltip};
pub use visibility::{Visibility, is_transition_settled};
