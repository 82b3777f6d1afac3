// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Occlusion policy: decide per frame whether the real overlay is shown.
//!
//! The host is either mid-scroll (a scroll it started itself through the tour's
//! scroll callback) or mid route transition. In both cases the target moves
//! under the overlay faster than the overlay can follow, so the cut-out is
//! replaced by a blocking placeholder scrim until things settle.
//!
//! ```
//! use showcase_overlay::Visibility;
//!
//! assert!(!Visibility::SETTLED.is_suppressed());
//! assert!(Visibility { manual_scroll_in_flight: false, route_progress: 0.4 }.is_suppressed());
//! assert!(!Visibility { manual_scroll_in_flight: false, route_progress: 1.0 }.is_suppressed());
//! ```

/// Inputs of the occlusion policy, sampled once per frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Visibility {
    /// A host-driven scroll is in flight.
    pub manual_scroll_in_flight: bool,
    /// Progress of the current route transition animation, nominally in `[0, 1]`.
    pub route_progress: f64,
}

impl Default for Visibility {
    fn default() -> Self {
        Self::SETTLED
    }
}

impl Visibility {
    /// No scroll in flight and no route transition running.
    pub const SETTLED: Self = Self {
        manual_scroll_in_flight: false,
        route_progress: 1.0,
    };

    /// Returns true if the overlay must be replaced by the placeholder scrim.
    pub fn is_suppressed(self) -> bool {
        self.manual_scroll_in_flight || !is_transition_settled(self.route_progress)
    }
}

/// Returns true if `progress` sits exactly on an integer (a settled transition).
///
/// Non-finite values are treated as mid-flight.
pub fn is_transition_settled(progress: f64) -> bool {
    progress.is_finite() && progress % 1.0 == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_endpoints() {
        assert!(is_transition_settled(0.0));
        assert!(is_transition_settled(1.0));
        assert!(is_transition_settled(-0.0));
    }

    #[test]
    fn mid_flight_progress_suppresses() {
        for p in [0.001, 0.5, 0.999] {
            let v = Visibility {
                manual_scroll_in_flight: false,
                route_progress: p,
            };
            assert!(v.is_suppressed(), "progress {p} should suppress");
        }
    }

    #[test]
    fn large_whole_numbers_are_settled() {
        assert!(is_transition_settled(1e20));
        assert!(is_transition_settled(-1e20));
        assert!(is_transition_settled(9_223_372_036_854_775_808.0));
        assert!(is_transition_settled(f64::MAX));
        assert!(!is_transition_settled(4_503_599_627_370_495.5));
    }

    #[test]
    fn non_finite_progress_suppresses() {
        assert!(!is_transition_settled(f64::NAN));
        assert!(!is_transition_settled(f64::INFINITY));
    }

    #[test]
    fn manual_scroll_suppresses_even_when_settled() {
        let v = Visibility {
            manual_scroll_in_flight: true,
            ..Visibility::SETTLED
        };
        assert!(v.is_suppressed());
    }
}
