// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tour sequencer.
//!
//! ## States
//!
//! A [`Tour`] is either inactive (no step list) or showing one step. `start`
//! enters step 0, `next` and `previous` move by one, and finishing the last
//! step, `dismiss`, or any fault return to inactive through a single teardown.
//!
//! ## Ordering
//!
//! `on_complete(n)` always runs before `on_start(n ± 1)`, and `on_finish` only
//! after the last step's `on_complete`. `dismiss` runs neither.
//!
//! ## Driving a tour
//!
//! The tour does no I/O. After each call, drain [`Tour::drain_commands`] and
//! carry the commands out; report back with [`Tour::frame_ready`],
//! [`Tour::scroll_finished`] or [`Tour::scroll_failed`], and advance time with
//! [`Tour::tick`]. Each frame, [`Tour::frame`] yields the overlay to paint.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use kurbo::{Point, Rect, Size};
use showcase_overlay::{
    Auxiliary, Overlay, Placement, RegionRequest, Visibility, build_overlay, place_tooltip,
};

use crate::error::{ErrorContext, ErrorSink, Fault, Hook, TourError, Transition};
use crate::geometry::{LayoutSource, Target, bounding_rect};
use crate::registry::{ElementHandle, ElementRegistry};
use crate::scroll::{Command, HostScroll, ScrollCoordinator, ScrollPhase, ScrollTicket};
use crate::step::{SCROLL_ALIGNMENT, Step, StepFlags, TourOptions};

/// Lifecycle callbacks, supplied when the tour is built.
///
/// Every method defaults to doing nothing. Returning an error dismisses the
/// tour after the error is reported to the [`ErrorSink`].
pub trait TourObserver<K> {
    /// Step `index` became active.
    fn on_start(&mut self, index: usize, id: &K) -> Result<(), Fault> {
        let _ = (index, id);
        Ok(())
    }

    /// Step `index` is being left through `next` or `previous`.
    fn on_complete(&mut self, index: usize, id: &K) -> Result<(), Fault> {
        let _ = (index, id);
        Ok(())
    }

    /// The last step was completed and the tour ended.
    fn on_finish(&mut self) -> Result<(), Fault> {
        Ok(())
    }
}

/// An observer that ignores every callback.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoObserver;

impl<K> TourObserver<K> for NoObserver {}

/// Host scroll callback: receives the step index and the ticket to report with.
pub type ScrollCallback = Box<dyn FnMut(usize, ScrollTicket) -> Result<HostScroll, Fault>>;

/// Kind of pointer gesture on the overlay.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GestureKind {
    /// Single tap or click.
    Tap,
    /// Long press.
    LongPress,
    /// Double tap.
    DoubleTap,
}

/// A pointer gesture in viewport coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gesture {
    /// Gesture kind.
    pub kind: GestureKind,
    /// Where it happened.
    pub position: Point,
}

/// What the tour did with a [`Gesture`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GestureResponse {
    /// No tour is running; deliver the gesture normally.
    Ignored,
    /// The overlay swallowed the gesture.
    Blocked,
    /// The gesture landed on a highlighted region whose default action is
    /// disabled; deliver it to the element underneath.
    PassThrough,
    /// The tour advanced.
    Advanced,
}

/// Everything needed to paint one frame of the active step.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Active step index.
    pub index: usize,
    /// Measured target, or `None` while it is not measurable.
    pub target: Option<Target>,
    /// Regions to cut, stroke, and hit-test.
    pub overlay: Overlay,
    /// Tooltip placement; `None` while the placeholder is shown.
    pub tooltip: Option<Placement>,
    /// The scroll-into-view protocol has finished for this step.
    pub revealed: bool,
}

/// A guided tour over elements identified by `K`.
///
/// `O` receives lifecycle callbacks and `E` receives faults; both are supplied
/// at construction. See the [module docs](self) for the driving protocol.
pub struct Tour<K, O, E> {
    options: TourOptions,
    registry: ElementRegistry<K>,
    steps: Option<Vec<Step<K>>>,
    active: Option<usize>,
    scroll: ScrollCoordinator,
    scroll_callback: Option<ScrollCallback>,
    route_progress: f64,
    auto_play_at: Option<Duration>,
    observer: O,
    errors: E,
}

impl<K: fmt::Debug, O, E> fmt::Debug for Tour<K, O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tour")
            .field("options", &self.options)
            .field("active", &self.active)
            .field("steps", &self.steps.as_ref().map(Vec::len))
            .field("scroll", &self.scroll)
            .field("route_progress", &self.route_progress)
            .field("has_scroll_callback", &self.scroll_callback.is_some())
            .finish_non_exhaustive()
    }
}

impl<K, O, E> Tour<K, O, E>
where
    K: Clone + PartialEq + fmt::Debug,
    O: TourObserver<K>,
    E: ErrorSink,
{
    /// Create an inactive tour.
    pub fn new(options: TourOptions, observer: O, errors: E) -> Self {
        Self {
            options,
            registry: ElementRegistry::new(),
            steps: None,
            active: None,
            scroll: ScrollCoordinator::new(),
            scroll_callback: None,
            route_progress: 1.0,
            auto_play_at: None,
            observer,
            errors,
        }
    }

    // --- navigation ---

    /// Start a tour over `steps`, replacing any running tour.
    ///
    /// Rejects an empty list or repeated identities without touching the
    /// current state. Does nothing when [`TourOptions::enabled`] is false.
    pub fn start(&mut self, steps: Vec<Step<K>>) -> Result<(), TourError> {
        if steps.is_empty() {
            return Err(TourError::EmptySteps);
        }
        for (index, step) in steps.iter().enumerate() {
            if let Some(first) = steps[..index].iter().position(|s| s.id == step.id) {
                return Err(TourError::DuplicateStep { index, first });
            }
        }
        if !self.options.enabled {
            return Ok(());
        }

        self.clear();
        self.registry.reset();
        for step in &steps {
            let _ = self.registry.register(step.id.clone());
            for aux in &step.config.auxiliaries {
                let _ = self.registry.register(aux.id.clone());
            }
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(steps = steps.len(), "tour started");
        self.steps = Some(steps);
        self.activate(0, Transition::Start);
        Ok(())
    }

    /// Complete the current step and move to the next one, or finish the tour
    /// after the last step. Does nothing when inactive.
    pub fn next(&mut self) {
        self.advance(Transition::Next);
    }

    /// Complete the current step and move back one. Does nothing on the first
    /// step or when inactive.
    pub fn previous(&mut self) {
        let Some(index) = self.active.filter(|i| *i > 0) else {
            return;
        };
        let Some(id) = self.identity_at(index) else {
            return;
        };
        if let Err(fault) = self.observer.on_complete(index, &id) {
            self.fail(
                TourError::Callback {
                    hook: Hook::Complete,
                    index,
                    fault,
                },
                Transition::Previous,
            );
            return;
        }
        self.activate(index - 1, Transition::Previous);
    }

    /// End the tour without running `on_complete` or `on_finish`.
    pub fn dismiss(&mut self) {
        #[cfg(feature = "tracing")]
        if self.active.is_some() {
            tracing::debug!(step = ?self.active, "tour dismissed");
        }
        self.clear();
    }

    // --- host scroll protocol ---

    /// Register the host scroll callback, invoked with the step index on each
    /// activation before any built-in scroll.
    pub fn register_scroll_callback(
        &mut self,
        callback: impl FnMut(usize, ScrollTicket) -> Result<HostScroll, Fault> + 'static,
    ) {
        self.scroll_callback = Some(Box::new(callback));
    }

    /// Remove the host scroll callback.
    pub fn clear_scroll_callback(&mut self) {
        self.scroll_callback = None;
    }

    /// Take the commands queued for the host.
    pub fn drain_commands(&mut self) -> Vec<Command> {
        self.scroll.drain_commands()
    }

    /// One frame has been laid out since the last [`Command::RequestFrame`].
    pub fn frame_ready(&mut self, layout: &impl LayoutSource<K>) {
        if self.active.is_none() {
            return;
        }
        if self.scroll.is_idle() {
            self.begin_scroll();
            return;
        }
        let handle = self
            .active_handle()
            .filter(|h| bounding_rect(&self.registry, layout, *h).is_some());
        let requested = self
            .scroll
            .frame_ready(handle, self.options.scroll_duration, SCROLL_ALIGNMENT);
        #[cfg(feature = "tracing")]
        if requested {
            tracing::trace!(?handle, "built-in scroll requested");
        }
        #[cfg(not(feature = "tracing"))]
        let _ = requested;
    }

    /// A scroll started for `ticket` completed. Stale tickets are ignored.
    pub fn scroll_finished(&mut self, ticket: ScrollTicket) {
        if self.active.is_none() || !self.scroll.is_in_flight(ticket) {
            #[cfg(feature = "tracing")]
            tracing::trace!(?ticket, "stale scroll completion ignored");
            return;
        }
        if self
            .scroll
            .finished(ticket, self.options.host_settle, self.options.builtin_settle)
        {
            self.on_revealed();
        }
    }

    /// A scroll started for `ticket` failed. Dismisses the tour unless the
    /// ticket does not belong to the scroll currently awaited.
    pub fn scroll_failed(&mut self, ticket: ScrollTicket, fault: Fault) {
        let Some(index) = self.active else {
            return;
        };
        if !self.scroll.is_in_flight(ticket) {
            #[cfg(feature = "tracing")]
            tracing::trace!(?ticket, "stale scroll failure ignored");
            return;
        }
        self.fail(TourError::Scroll { index, fault }, Transition::Scroll);
    }

    /// Advance the tour clock: settle delays and auto-play run on it.
    pub fn tick(&mut self, elapsed: Duration) {
        if self.scroll.tick(elapsed) && self.active.is_some() {
            self.on_revealed();
        }
        if self.active.is_some() && self.scroll.is_idle() {
            self.begin_scroll();
        }
        if let Some(at) = self.auto_play_at
            && self.scroll.now() >= at
        {
            self.auto_play_at = None;
            self.advance(Transition::AutoPlay);
        }
    }

    /// Feed the host's route transition progress (settled at whole numbers).
    pub fn set_route_progress(&mut self, progress: f64) {
        self.route_progress = progress;
        if self.active.is_some() && self.scroll.is_idle() {
            self.begin_scroll();
        }
    }

    // --- per-frame output ---

    /// Compose the overlay for the active step, or `None` when inactive.
    ///
    /// The placeholder is shown while the occlusion policy suppresses the
    /// overlay, until the step is revealed, and while the target cannot be
    /// measured.
    pub fn frame(
        &self,
        layout: &impl LayoutSource<K>,
        viewport: Size,
        tooltip_size: Size,
    ) -> Option<Frame> {
        let index = self.active?;
        let step = self.steps.as_ref()?.get(index)?;
        let config = &step.config;

        let target = self
            .registry
            .resolve(&step.id)
            .and_then(|h| bounding_rect(&self.registry, layout, h));
        let revealed = self.scroll.is_revealed();
        let suppressed = self.visibility().is_suppressed() || !revealed || target.is_none();

        let auxiliaries = self
            .registry
            .handles()
            .filter_map(|h| {
                let id = self.registry.identity(h)?;
                let aux = config.auxiliaries.iter().find(|a| &a.id == id)?;
                let measured = bounding_rect(&self.registry, layout, h)?;
                Some(Auxiliary {
                    rect: measured.rect,
                    shift: aux.shift,
                })
            })
            .collect();

        let request = RegionRequest {
            primary: target.map_or(Rect::ZERO, |t| t.rect),
            padding: config.padding,
            auxiliaries,
            merge: config.merge,
            shape: config.shape,
            border: config.border,
            suppressed,
            clamp: self.options.clamp_to_viewport.then_some(viewport.to_rect()),
        };
        let overlay = build_overlay(&request);

        let tooltip = if overlay.placeholder {
            None
        } else {
            let around = if config.merge {
                overlay.bounds()
            } else {
                overlay.primary().map(|r| r.rect)
            };
            around.map(|r| {
                place_tooltip(
                    r,
                    tooltip_size,
                    viewport,
                    config.tooltip_side,
                    config.tooltip_gap,
                )
            })
        };

        Some(Frame {
            index,
            target,
            overlay,
            tooltip,
            revealed,
        })
    }

    /// Route a gesture that landed on the overlay.
    pub fn handle_gesture(&mut self, overlay: &Overlay, gesture: Gesture) -> GestureResponse {
        let Some(step) = self.active_step() else {
            return GestureResponse::Ignored;
        };
        if overlay.placeholder || overlay.is_empty() {
            return GestureResponse::Blocked;
        }
        let flags = step.config.flags;
        let on_target = overlay.hit_test(gesture.position).is_some();
        let disabled_by = match (on_target, gesture.kind) {
            (true, GestureKind::Tap) => StepFlags::DISABLE_TARGET_TAP,
            (true, GestureKind::LongPress) => StepFlags::DISABLE_LONG_PRESS,
            (true, GestureKind::DoubleTap) => StepFlags::DISABLE_DOUBLE_TAP,
            (false, GestureKind::Tap) => StepFlags::DISABLE_BARRIER_TAP,
            (false, _) => return GestureResponse::Blocked,
        };
        if flags.contains(disabled_by) {
            return if on_target {
                GestureResponse::PassThrough
            } else {
                GestureResponse::Blocked
            };
        }
        self.advance(Transition::Gesture);
        GestureResponse::Advanced
    }

    // --- queries ---

    /// Returns true while a tour is running.
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Index of the active step.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// The active step.
    pub fn active_step(&self) -> Option<&Step<K>> {
        self.steps.as_ref()?.get(self.active?)
    }

    /// Identity of the active step.
    pub fn active_identity(&self) -> Option<&K> {
        self.active_step().map(|s| &s.id)
    }

    /// Number of steps in the running tour (zero when inactive).
    pub fn step_count(&self) -> usize {
        self.steps.as_ref().map_or(0, Vec::len)
    }

    /// Returns true if the active step is the last one.
    pub fn is_last_step(&self) -> bool {
        self.active.is_some_and(|i| i + 1 == self.step_count())
    }

    /// Returns true if `previous` would move back.
    pub fn can_go_to_previous(&self) -> bool {
        self.active.is_some_and(|i| i > 0)
    }

    /// Returns true once the active step finished scrolling into view.
    pub fn is_revealed(&self) -> bool {
        self.active.is_some() && self.scroll.is_revealed()
    }

    /// A scroll (host-driven or built-in) is running or settling.
    pub fn is_auto_scrolling(&self) -> bool {
        self.scroll.is_auto_scrolling()
    }

    /// A host-driven scroll started by the scroll callback is still running.
    pub fn is_manually_scrolling(&self) -> bool {
        self.scroll.is_manually_scrolling()
    }

    /// Scroll protocol state of the active step.
    pub fn scroll_phase(&self) -> ScrollPhase {
        self.scroll.phase()
    }

    /// Tour-wide options.
    pub fn options(&self) -> &TourOptions {
        &self.options
    }

    /// Element registry of the running tour.
    pub fn registry(&self) -> &ElementRegistry<K> {
        &self.registry
    }

    /// Lifecycle observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Lifecycle observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Error sink.
    pub fn error_sink(&self) -> &E {
        &self.errors
    }

    // --- internals ---

    fn visibility(&self) -> Visibility {
        Visibility {
            manual_scroll_in_flight: self.scroll.is_manually_scrolling(),
            route_progress: self.route_progress,
        }
    }

    fn identity_at(&self, index: usize) -> Option<K> {
        self.steps.as_ref()?.get(index).map(|s| s.id.clone())
    }

    fn active_handle(&self) -> Option<ElementHandle> {
        self.registry.resolve(self.active_identity()?)
    }

    fn advance(&mut self, transition: Transition) {
        let Some(index) = self.active else {
            return;
        };
        let Some(id) = self.identity_at(index) else {
            return;
        };
        if let Err(fault) = self.observer.on_complete(index, &id) {
            self.fail(
                TourError::Callback {
                    hook: Hook::Complete,
                    index,
                    fault,
                },
                transition,
            );
            return;
        }
        if index + 1 >= self.step_count() {
            self.clear();
            #[cfg(feature = "tracing")]
            tracing::debug!("tour finished");
            if let Err(fault) = self.observer.on_finish() {
                self.report(TourError::Finish(fault), transition);
            }
            return;
        }
        self.activate(index + 1, transition);
    }

    fn activate(&mut self, index: usize, transition: Transition) {
        self.active = Some(index);
        self.scroll.activate();
        self.auto_play_at = None;
        let Some(id) = self.identity_at(index) else {
            return;
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(index, ?id, ?transition, "step activated");
        if let Err(fault) = self.observer.on_start(index, &id) {
            self.fail(
                TourError::Callback {
                    hook: Hook::Start,
                    index,
                    fault,
                },
                transition,
            );
            return;
        }
        self.begin_scroll();
    }

    /// Run the scroll-into-view protocol for the active step, unless it already
    /// started or the overlay is suppressed (retried on the next tick, frame,
    /// or route progress update).
    fn begin_scroll(&mut self) {
        let Some(index) = self.active else {
            return;
        };
        if !self.scroll.is_idle() || self.visibility().is_suppressed() {
            return;
        }

        if let Some(callback) = self.scroll_callback.as_mut() {
            let ticket = self.scroll.host_ticket();
            match callback(index, ticket) {
                Ok(HostScroll::Pending) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(index, "host scroll pending");
                    self.scroll.begin_host(ticket);
                    return;
                }
                Ok(HostScroll::None) => {}
                Err(fault) => {
                    self.fail(TourError::Scroll { index, fault }, Transition::Scroll);
                    return;
                }
            }
        }

        let opted_out = self
            .active_step()
            .is_some_and(|s| s.config.flags.contains(StepFlags::DISABLE_AUTO_SCROLL));
        if self.options.auto_scroll && !opted_out {
            self.scroll.begin_builtin();
        } else {
            self.scroll.reveal();
            self.on_revealed();
        }
    }

    fn on_revealed(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(step = ?self.active, "step revealed");
        if let Some(delay) = self.options.auto_play {
            self.auto_play_at = Some(self.scroll.now() + delay);
        }
    }

    fn report(&mut self, error: TourError, transition: Transition) {
        #[cfg(feature = "tracing")]
        tracing::warn!(%error, ?transition, "tour fault");
        let context = ErrorContext {
            transition,
            step: self.active,
        };
        self.errors.report(&error, context);
    }

    fn fail(&mut self, error: TourError, transition: Transition) {
        self.report(error, transition);
        self.clear();
    }

    /// The single teardown path for finish, dismiss, and faults.
    fn clear(&mut self) {
        self.steps = None;
        self.active = None;
        self.auto_play_at = None;
        self.scroll.cancel();
    }
}
