// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive the scroll-into-view protocol from a fake host.
//!
//! The host owns a scroll offset and carries out the tour's commands. Step 0
//! uses a host scroll callback (a nested list the host scrolls itself); the
//! other steps fall back to the built-in scroll-to-element command.
//!
//! Run:
//! - `cargo run -p showcase_demos --example tour_scroll`

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use kurbo::{Rect, Size, Vec2};
use showcase_tour::{
    ActiveTours, Command, ErrorContext, HostScroll, NoObserver, Step, Tour, TourError, TourOptions,
};

/// Document-space bounds of each element.
fn document(id: &u32) -> Option<Rect> {
    let y = f64::from(*id) * 600.0 + 100.0;
    Some(Rect::new(40.0, y, 360.0, y + 48.0))
}

fn main() {
    let viewport = Size::new(400.0, 800.0);
    let scroll = Rc::new(RefCell::new(0.0_f64));
    let pending = Rc::new(RefCell::new(Vec::new()));

    let on_error = |e: &TourError, cx: ErrorContext| println!("error during {cx:?}: {e}");
    let tour = Rc::new(RefCell::new(Tour::new(
        TourOptions::default(),
        NoObserver,
        on_error,
    )));

    let host_pending = pending.clone();
    tour.borrow_mut()
        .register_scroll_callback(move |index, ticket| {
            if index == 0 {
                println!("host scrolls its nested list for step {index}");
                host_pending.borrow_mut().push(ticket);
                Ok(HostScroll::Pending)
            } else {
                Ok(HostScroll::None)
            }
        });

    let tours = ActiveTours::new();
    let _registration = tours.register(&tour);

    tour.borrow_mut()
        .start((0..3_u32).map(Step::new).collect())
        .expect("non-empty, unique steps");

    // Viewport-space bounds at the current scroll offset.
    let layout = |id: &u32| document(id).map(|r| r - Vec2::new(0.0, *scroll.borrow()));

    for _ in 0..200 {
        let mut t = tour.borrow_mut();
        if !t.is_active() {
            break;
        }

        for ticket in pending.borrow_mut().drain(..) {
            t.scroll_finished(ticket);
        }
        for command in t.drain_commands() {
            match command {
                Command::RequestFrame => t.frame_ready(&layout),
                Command::ScrollToVisible {
                    ticket,
                    handle,
                    duration,
                    alignment,
                } => {
                    let id = *t.registry().identity(handle).expect("live handle");
                    let rect = document(&id).expect("laid out");
                    let offset = rect.center().y - viewport.height * alignment;
                    println!("scroll to step {id} over {duration:?}: offset {offset}");
                    *scroll.borrow_mut() = offset.max(0.0);
                    t.scroll_finished(ticket);
                }
            }
        }
        // Commands may have queued more commands; handle them next frame.
        t.tick(Duration::from_millis(16));

        if let Some(frame) = t.frame(&layout, viewport, Size::new(200.0, 80.0))
            && frame.revealed
        {
            println!(
                "step {} revealed at {:?}",
                frame.index,
                frame.target.map(|target| target.rect)
            );
            let visible = viewport.to_rect();
            assert!(frame.target.is_some_and(|target| visible.contains(target.center)));
            if frame.index == 2 {
                // The app navigates away: close every tour.
                drop(t);
                assert_eq!(tours.dismiss_all(), 1);
                continue;
            }
            t.next();
        }
    }
    assert!(!tour.borrow().is_active());
}
