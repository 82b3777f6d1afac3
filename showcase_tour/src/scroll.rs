// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-into-view coordinator.
//!
//! ## Protocol
//!
//! Each step activation runs through
//! `Idle → HostScroll → Settle → AwaitFrame → BuiltinScroll → Settle → Revealed`,
//! skipping whatever does not apply:
//!
//! - If the tour has a scroll callback and it starts a scroll, the coordinator
//!   waits for [`Tour::scroll_finished`](crate::Tour::scroll_finished), then the
//!   host settle delay, then reveals. The built-in scroll is skipped.
//! - Otherwise, if auto-scroll applies, it emits [`Command::RequestFrame`],
//!   waits for [`Tour::frame_ready`](crate::Tour::frame_ready), emits
//!   [`Command::ScrollToVisible`], waits for its completion and the built-in
//!   settle delay, then reveals.
//! - Otherwise the step is revealed right away.
//!
//! ## Staleness
//!
//! Host scrolls cannot be cancelled. Every activation bumps a counter stamped
//! into each [`ScrollTicket`]. Completions and failures are accepted only for
//! the ticket of the scroll currently awaited, so a slow scroll for a
//! superseded step, or a report for a scroll that never started, cannot touch
//! the current step.
//!
//! The coordinator never sleeps or polls. Time only moves when the host calls
//! [`Tour::tick`](crate::Tour::tick).

use alloc::vec::Vec;
use core::time::Duration;

use crate::registry::ElementHandle;

/// Which scroll a ticket belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ScrollStage {
    /// Scroll started by the tour's scroll callback.
    Host,
    /// Built-in scroll-to-element.
    Builtin,
}

/// Identifies one pending scroll.
///
/// Hand it back through [`Tour::scroll_finished`](crate::Tour::scroll_finished)
/// or [`Tour::scroll_failed`](crate::Tour::scroll_failed) once the scroll ends.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScrollTicket {
    activation: u64,
    stage: ScrollStage,
}

impl ScrollTicket {
    /// Which scroll this ticket belongs to.
    pub fn stage(&self) -> ScrollStage {
        self.stage
    }
}

/// What a scroll callback did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HostScroll {
    /// A scroll is running; the host reports its end with the ticket it was given.
    Pending,
    /// Nothing to scroll; continue with the built-in scroll.
    None,
}

/// A request the host must carry out.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    /// Call [`Tour::frame_ready`](crate::Tour::frame_ready) after the next layout pass.
    RequestFrame,
    /// Scroll `handle` into view, then report with `ticket`.
    ScrollToVisible {
        /// Ticket to report completion with.
        ticket: ScrollTicket,
        /// Element to bring into view.
        handle: ElementHandle,
        /// Animation duration.
        duration: Duration,
        /// Where the element should end up in the viewport (0.5 centers it).
        alignment: f64,
    },
}

/// Coordinator state for the current activation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScrollPhase {
    /// Not started yet (possibly deferred while the overlay is suppressed).
    Idle,
    /// Waiting for the host-driven scroll.
    HostScroll(ScrollTicket),
    /// Waiting out a settle delay.
    Settle {
        /// Clock value at which the step is revealed.
        until: Duration,
    },
    /// Waiting one frame before the built-in scroll.
    AwaitFrame,
    /// Waiting for the built-in scroll.
    BuiltinScroll(ScrollTicket),
    /// The step is on screen and may be highlighted.
    Revealed,
}

#[derive(Debug)]
pub(crate) struct ScrollCoordinator {
    phase: ScrollPhase,
    activation: u64,
    clock: Duration,
    auto_scrolling: bool,
    manually_scrolling: bool,
    commands: Vec<Command>,
}

impl ScrollCoordinator {
    pub(crate) fn new() -> Self {
        Self {
            phase: ScrollPhase::Idle,
            activation: 0,
            clock: Duration::ZERO,
            auto_scrolling: false,
            manually_scrolling: false,
            commands: Vec::new(),
        }
    }

    pub(crate) fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub(crate) fn now(&self) -> Duration {
        self.clock
    }

    pub(crate) fn is_idle(&self) -> bool {
        self.phase == ScrollPhase::Idle
    }

    pub(crate) fn is_revealed(&self) -> bool {
        self.phase == ScrollPhase::Revealed
    }

    pub(crate) fn is_auto_scrolling(&self) -> bool {
        self.auto_scrolling
    }

    pub(crate) fn is_manually_scrolling(&self) -> bool {
        self.manually_scrolling
    }

    pub(crate) fn drain_commands(&mut self) -> Vec<Command> {
        core::mem::take(&mut self.commands)
    }

    /// Start over for a newly activated step; outstanding tickets go stale.
    pub(crate) fn activate(&mut self) {
        self.activation = self.activation.wrapping_add(1);
        self.phase = ScrollPhase::Idle;
        self.auto_scrolling = false;
        self.manually_scrolling = false;
        self.commands.clear();
    }

    /// Ticket for the host-driven scroll of the current activation.
    pub(crate) fn host_ticket(&self) -> ScrollTicket {
        ScrollTicket {
            activation: self.activation,
            stage: ScrollStage::Host,
        }
    }

    /// Returns true if `ticket` belongs to the scroll currently awaited.
    pub(crate) fn is_in_flight(&self, ticket: ScrollTicket) -> bool {
        match self.phase {
            ScrollPhase::HostScroll(t) | ScrollPhase::BuiltinScroll(t) => t == ticket,
            _ => false,
        }
    }

    pub(crate) fn begin_host(&mut self, ticket: ScrollTicket) {
        self.phase = ScrollPhase::HostScroll(ticket);
        self.auto_scrolling = true;
        self.manually_scrolling = true;
    }

    pub(crate) fn begin_builtin(&mut self) {
        self.phase = ScrollPhase::AwaitFrame;
        self.commands.push(Command::RequestFrame);
    }

    pub(crate) fn reveal(&mut self) {
        self.phase = ScrollPhase::Revealed;
        self.auto_scrolling = false;
        self.manually_scrolling = false;
    }

    /// One frame has been laid out. Issues the built-in scroll once the target
    /// is measurable, and asks for another frame otherwise.
    pub(crate) fn frame_ready(
        &mut self,
        handle: Option<ElementHandle>,
        duration: Duration,
        alignment: f64,
    ) -> bool {
        if self.phase != ScrollPhase::AwaitFrame {
            return false;
        }
        let Some(handle) = handle else {
            self.commands.push(Command::RequestFrame);
            return false;
        };
        let ticket = ScrollTicket {
            activation: self.activation,
            stage: ScrollStage::Builtin,
        };
        self.phase = ScrollPhase::BuiltinScroll(ticket);
        self.auto_scrolling = true;
        self.commands.push(Command::ScrollToVisible {
            ticket,
            handle,
            duration,
            alignment,
        });
        true
    }

    /// A scroll completed. Returns true if the step was revealed by it.
    ///
    /// Stale or unexpected tickets are ignored.
    pub(crate) fn finished(
        &mut self,
        ticket: ScrollTicket,
        host_settle: Duration,
        builtin_settle: Duration,
    ) -> bool {
        if !self.is_in_flight(ticket) {
            return false;
        }
        let delay = match ticket.stage {
            ScrollStage::Host => {
                // The host operation is over; only the settle delay remains.
                self.manually_scrolling = false;
                host_settle
            }
            ScrollStage::Builtin => builtin_settle,
        };
        if delay.is_zero() {
            self.reveal();
            return true;
        }
        self.phase = ScrollPhase::Settle {
            until: self.clock + delay,
        };
        false
    }

    /// Advance the clock. Returns true if a settle delay ran out and revealed the step.
    pub(crate) fn tick(&mut self, elapsed: Duration) -> bool {
        self.clock = self.clock.saturating_add(elapsed);
        match self.phase {
            ScrollPhase::Settle { until } if self.clock >= until => {
                self.reveal();
                true
            }
            _ => false,
        }
    }

    /// Drop everything for the current activation.
    pub(crate) fn cancel(&mut self) {
        self.activate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ElementRegistry;
    use alloc::vec;

    const SETTLE: Duration = Duration::from_millis(200);

    #[test]
    fn host_scroll_settles_before_reveal() {
        let mut c = ScrollCoordinator::new();
        c.activate();
        let t = c.host_ticket();
        c.begin_host(t);
        assert!(c.is_auto_scrolling() && c.is_manually_scrolling());

        assert!(!c.finished(t, SETTLE, Duration::ZERO));
        assert!(!c.is_manually_scrolling(), "host operation is over");
        assert!(c.is_auto_scrolling(), "auto flag holds through the settle delay");
        assert!(!c.tick(Duration::from_millis(199)));
        assert!(c.tick(Duration::from_millis(1)));
        assert!(c.is_revealed());
        assert!(!c.is_auto_scrolling() && !c.is_manually_scrolling());
    }

    #[test]
    fn builtin_scroll_waits_a_frame() {
        let mut c = ScrollCoordinator::new();
        c.activate();
        c.begin_builtin();
        assert_eq!(c.drain_commands(), vec![Command::RequestFrame]);

        // Not measurable yet: ask again.
        assert!(!c.frame_ready(None, Duration::ZERO, 0.5));
        assert_eq!(c.drain_commands(), vec![Command::RequestFrame]);

        let handle = ElementRegistry::new().register(1_u8);
        assert!(c.frame_ready(Some(handle), Duration::from_millis(300), 0.5));
        let cmds = c.drain_commands();
        let [Command::ScrollToVisible { ticket, .. }] = cmds.as_slice() else {
            panic!("expected a single scroll command, got {cmds:?}");
        };
        assert!(c.is_auto_scrolling());
        assert!(!c.is_manually_scrolling());
        assert!(c.finished(*ticket, SETTLE, Duration::ZERO));
        assert!(c.is_revealed());
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let mut c = ScrollCoordinator::new();
        c.activate();
        let old = c.host_ticket();
        c.begin_host(old);

        c.activate();
        let new = c.host_ticket();
        c.begin_host(new);

        assert!(!c.finished(old, Duration::ZERO, Duration::ZERO));
        assert_eq!(c.phase(), ScrollPhase::HostScroll(new));
        assert!(c.is_manually_scrolling());
    }

    #[test]
    fn unused_host_ticket_is_not_in_flight() {
        let mut c = ScrollCoordinator::new();
        c.activate();
        let host = c.host_ticket();
        c.begin_builtin();
        let _ = c.drain_commands();
        let handle = ElementRegistry::new().register(1_u8);
        assert!(c.frame_ready(Some(handle), Duration::ZERO, 0.5));
        let cmds = c.drain_commands();
        let [Command::ScrollToVisible { ticket, .. }] = cmds.as_slice() else {
            panic!("expected a single scroll command, got {cmds:?}");
        };

        assert!(!c.is_in_flight(host), "the host scroll never started");
        assert!(!c.finished(host, Duration::ZERO, Duration::ZERO));
        assert_eq!(c.phase(), ScrollPhase::BuiltinScroll(*ticket));
        assert!(c.is_in_flight(*ticket));
    }

    #[test]
    fn activation_clears_queued_commands() {
        let mut c = ScrollCoordinator::new();
        c.activate();
        c.begin_builtin();
        c.activate();
        assert!(c.drain_commands().is_empty());
        assert!(c.is_idle());
    }
}
