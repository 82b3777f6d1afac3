// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Walk a three-step tour and print its lifecycle callbacks.
//!
//! The host here has nothing to scroll, so auto-scroll is off and every step
//! is revealed as soon as it becomes active.
//!
//! Run:
//! - `cargo run -p showcase_demos --example tour_basics`

use kurbo::{Point, Rect, Size};
use showcase_tour::{
    ErrorContext, Fault, Gesture, GestureKind, GestureResponse, Step, StepConfig, StepFlags, Tour,
    TourError, TourObserver, TourOptions,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Widget {
    Search,
    Filters,
    Profile,
}

struct Log;

impl TourObserver<Widget> for Log {
    fn on_start(&mut self, index: usize, id: &Widget) -> Result<(), Fault> {
        println!("start    {index}: {id:?}");
        Ok(())
    }

    fn on_complete(&mut self, index: usize, id: &Widget) -> Result<(), Fault> {
        println!("complete {index}: {id:?}");
        Ok(())
    }

    fn on_finish(&mut self) -> Result<(), Fault> {
        println!("finished");
        Ok(())
    }
}

fn layout(id: &Widget) -> Option<Rect> {
    match id {
        Widget::Search => Some(Rect::new(20.0, 20.0, 300.0, 60.0)),
        Widget::Filters => Some(Rect::new(310.0, 20.0, 380.0, 60.0)),
        Widget::Profile => Some(Rect::new(20.0, 700.0, 80.0, 760.0)),
    }
}

fn main() {
    let viewport = Size::new(400.0, 800.0);
    let tooltip = Size::new(220.0, 90.0);
    let options = TourOptions {
        auto_scroll: false,
        ..TourOptions::default()
    };
    let on_error = |e: &TourError, cx: ErrorContext| println!("error during {cx:?}: {e}");
    let mut tour = Tour::new(options, Log, on_error);

    let steps = vec![
        Step::with_config(
            Widget::Search,
            StepConfig::default()
                .padding(6.0)
                .text("Search", "Find anything from here."),
        ),
        Step::with_config(
            Widget::Filters,
            StepConfig::default().flags(StepFlags::DISABLE_TARGET_TAP),
        ),
        Step::new(Widget::Profile),
    ];
    tour.start(steps).expect("non-empty, unique steps");

    while let Some(frame) = tour.frame(&layout, viewport, tooltip) {
        let tip = frame.tooltip.expect("revealed steps have a tooltip");
        println!(
            "  step {} highlight={:?} tooltip={:?}",
            frame.index,
            frame.overlay.bounds(),
            tip.side
        );

        // Tap the middle of the target; step 1 lets the tap through instead.
        let tap = Gesture {
            kind: GestureKind::Tap,
            position: frame.target.map_or(Point::ZERO, |t| t.center),
        };
        match tour.handle_gesture(&frame.overlay, tap) {
            GestureResponse::PassThrough => {
                println!("  tap passed through to {:?}", tour.active_identity());
                tour.next();
            }
            response => assert_eq!(response, GestureResponse::Advanced),
        }
    }
    assert!(!tour.is_active());
}
