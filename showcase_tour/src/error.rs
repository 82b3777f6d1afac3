// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors, faults, and the error sink.
//!
//! ## Taxonomy
//!
//! - Transient absence (an element not yet mounted or measured) is never an
//!   error; it shows up as `None` from the registry or the geometry resolver.
//! - Caller misuse (starting with an empty or duplicate step list) is rejected
//!   by [`Tour::start`](crate::Tour::start) with a [`TourError`] and leaves the
//!   current state untouched.
//! - A [`Fault`] raised by a lifecycle callback or by the host scroll path is
//!   wrapped in a [`TourError`], reported to the [`ErrorSink`] with an
//!   [`ErrorContext`], and resolved by dismissing the tour.

use alloc::borrow::Cow;
use core::fmt;

use thiserror::Error;

/// A failure raised by host code (a lifecycle callback or a scroll).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Fault {
    message: Cow<'static, str>,
}

impl Fault {
    /// Create a fault with a human-readable message.
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The fault message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Lifecycle hook that raised a fault.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Hook {
    /// [`TourObserver::on_start`](crate::TourObserver::on_start).
    Start,
    /// [`TourObserver::on_complete`](crate::TourObserver::on_complete).
    Complete,
}

impl fmt::Display for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "on_start",
            Self::Complete => "on_complete",
        })
    }
}

/// Errors produced by a [`Tour`](crate::Tour).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TourError {
    /// `start` was called with an empty step list.
    #[error("cannot start a tour with no steps")]
    EmptySteps,
    /// Two steps share an identity.
    #[error("step {index} repeats the identity of step {first}")]
    DuplicateStep {
        /// Position of the repeated identity.
        index: usize,
        /// Position where the identity first appeared.
        first: usize,
    },
    /// A per-step lifecycle callback failed.
    #[error("{hook} failed on step {index}: {fault}")]
    Callback {
        /// Failing hook.
        hook: Hook,
        /// Step the hook ran for.
        index: usize,
        /// Underlying fault.
        #[source]
        fault: Fault,
    },
    /// The `on_finish` callback failed.
    #[error("on_finish failed: {0}")]
    Finish(#[source] Fault),
    /// The host scroll callback or scroll primitive failed.
    #[error("scroll for step {index} failed: {fault}")]
    Scroll {
        /// Step being scrolled into view.
        index: usize,
        /// Underlying fault.
        #[source]
        fault: Fault,
    },
}

/// Transition during which an error surfaced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// [`Tour::start`](crate::Tour::start).
    Start,
    /// [`Tour::next`](crate::Tour::next).
    Next,
    /// [`Tour::previous`](crate::Tour::previous).
    Previous,
    /// A scroll callback, scroll completion, or scroll failure.
    Scroll,
    /// Navigation triggered by a gesture on the overlay.
    Gesture,
    /// Navigation triggered by the auto-play timer.
    AutoPlay,
}

/// Where an error was raised.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ErrorContext {
    /// Transition in progress.
    pub transition: Transition,
    /// Active step when the error surfaced, if any.
    pub step: Option<usize>,
}

/// Receives every fault raised while a tour is running.
///
/// Implemented for any `FnMut(&TourError, ErrorContext)`.
pub trait ErrorSink {
    /// Report `error`. The tour is dismissed right after this returns.
    fn report(&mut self, error: &TourError, context: ErrorContext);
}

impl<F: FnMut(&TourError, ErrorContext)> ErrorSink for F {
    fn report(&mut self, error: &TourError, context: ErrorContext) {
        self(error, context);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_name_the_step_and_hook() {
        let err = TourError::Callback {
            hook: Hook::Complete,
            index: 2,
            fault: Fault::new("boom"),
        };
        assert_eq!(err.to_string(), "on_complete failed on step 2: boom");
        assert_eq!(
            TourError::DuplicateStep { index: 3, first: 0 }.to_string(),
            "step 3 repeats the identity of step 0"
        );
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = 0;
        {
            let mut sink = |_: &TourError, ctx: ErrorContext| {
                assert_eq!(ctx.transition, Transition::Start);
                seen += 1;
            };
            sink.report(
                &TourError::EmptySteps,
                ErrorContext {
                    transition: Transition::Start,
                    step: None,
                },
            );
        }
        assert_eq!(seen, 1);
    }
}
