// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Showcase Tour: a deterministic guided-tour engine.
//!
//! A tour walks the user through a list of UI elements, one step at a time,
//! highlighting each with an overlay and a tooltip. This crate owns the
//! sequencing; `showcase_overlay` owns the geometry.
//!
//! - [`ElementRegistry`]: maps the caller's stable identities to
//!   [`ElementHandle`]s.
//! - [`LayoutSource`] and [`bounding_rect`]: ask the host for current screen
//!   rectangles, never cached.
//! - [`Tour`]: the step state machine with its lifecycle callbacks
//!   ([`TourObserver`]), the scroll-into-view protocol, and per-frame overlay
//!   composition ([`Tour::frame`]).
//! - [`ActiveTours`]: dismiss every running tour at once.
//!
//! ## Sans I/O
//!
//! The tour never scrolls, paints, sleeps, or reads a clock. It queues
//! [`Command`]s for the host and is driven by host calls:
//! [`Tour::frame_ready`], [`Tour::scroll_finished`], [`Tour::scroll_failed`],
//! [`Tour::tick`], and [`Tour::set_route_progress`]. The same inputs always
//! produce the same commands and callbacks.
//!
//! ## Errors
//!
//! Misuse of [`Tour::start`] is returned as a [`TourError`]. Faults raised by
//! callbacks or scrolls are reported to the [`ErrorSink`] and dismiss the tour.
//! See [`error`] for the full taxonomy.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Rect, Size};
//! use showcase_tour::{Command, ErrorContext, NoObserver, Step, Tour, TourError, TourOptions};
//!
//! let layout = |id: &&str| match *id {
//!     "search" => Some(Rect::new(20.0, 20.0, 220.0, 60.0)),
//!     "profile" => Some(Rect::new(300.0, 20.0, 380.0, 60.0)),
//!     _ => None,
//! };
//!
//! let on_error = |_: &TourError, _: ErrorContext| {};
//! let mut tour = Tour::new(TourOptions::default(), NoObserver, on_error);
//! tour.start(vec![Step::new("search"), Step::new("profile")]).unwrap();
//!
//! // The built-in scroll waits one frame, then asks the host to scroll.
//! assert_eq!(tour.drain_commands(), vec![Command::RequestFrame]);
//! tour.frame_ready(&layout);
//! for command in tour.drain_commands() {
//!     if let Command::ScrollToVisible { ticket, .. } = command {
//!         // Already visible: report completion right away.
//!         tour.scroll_finished(ticket);
//!     }
//! }
//!
//! let frame = tour
//!     .frame(&layout, Size::new(400.0, 800.0), Size::new(160.0, 60.0))
//!     .unwrap();
//! assert!(!frame.overlay.placeholder);
//! assert!(frame.tooltip.is_some());
//!
//! tour.next();
//! assert_eq!(tour.active_identity(), Some(&"profile"));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` in dependencies.
//! - `libm`: `no_std` float math for `kurbo`.
//! - `tracing`: emit `tracing` events at step transitions and faults.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod active;
pub mod error;
mod geometry;
mod registry;
mod scroll;
mod step;
mod tour;

pub use active::{ActiveTours, Dismiss, Registration};
pub use error::{ErrorContext, ErrorSink, Fault, Hook, TourError, Transition};
pub use geometry::{LayoutSource, Target, bounding_rect};
pub use registry::{ElementHandle, ElementRegistry};
pub use scroll::{Command, HostScroll, ScrollPhase, ScrollStage, ScrollTicket};
pub use step::{
    AuxiliaryTarget, Color, DEFAULT_SCROLL_DURATION, HOST_SCROLL_SETTLE, SCROLL_ALIGNMENT, Step,
    StepConfig, StepFlags, TourOptions,
};
pub use tour::{
    Frame, Gesture, GestureKind, GestureResponse, NoObserver, ScrollCallback, Tour, TourObserver,
};
