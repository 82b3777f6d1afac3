// Copyright 2025 the Showcase Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Steps, per-step configuration, and tour-wide options.

use alloc::string::String;
use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Insets, Vec2};
use showcase_overlay::{Border, Shape, Side};

/// Duration of the built-in scroll-into-view animation.
pub const DEFAULT_SCROLL_DURATION: Duration = Duration::from_millis(300);

/// Delay after a host-driven scroll completes before the step is revealed.
pub const HOST_SCROLL_SETTLE: Duration = Duration::from_millis(200);

/// Alignment passed to the host's scroll-to-element primitive (centered).
pub const SCROLL_ALIGNMENT: f64 = 0.5;

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha.
    pub a: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);

    /// Create a color from its components.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

bitflags::bitflags! {
    /// Per-step behavior switches.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct StepFlags: u8 {
        /// Skip the built-in scroll-into-view for this step.
        const DISABLE_AUTO_SCROLL = 0b0000_0001;
        /// A tap on the target passes through instead of advancing.
        const DISABLE_TARGET_TAP  = 0b0000_0010;
        /// A tap on the darkened barrier does nothing.
        const DISABLE_BARRIER_TAP = 0b0000_0100;
        /// A long press on the target passes through instead of advancing.
        const DISABLE_LONG_PRESS  = 0b0000_1000;
        /// A double tap on the target passes through instead of advancing.
        const DISABLE_DOUBLE_TAP  = 0b0001_0000;
    }
}

/// An element highlighted together with a step's target.
#[derive(Clone, Debug, PartialEq)]
pub struct AuxiliaryTarget<K> {
    /// Identity of the co-highlighted element.
    pub id: K,
    /// Outward growth; `x` applies to left and right, `y` to top and bottom.
    pub shift: Vec2,
}

/// Styling and behavior of one step. Never mutated by the tour.
#[derive(Clone, Debug, PartialEq)]
pub struct StepConfig<K> {
    /// Padding between the target and the cut-out edge.
    pub padding: Insets,
    /// Cut-out shape.
    pub shape: Shape,
    /// Scrim color.
    pub overlay_color: Color,
    /// Scrim opacity in `[0, 1]`.
    pub overlay_opacity: f32,
    /// Border around the cut-out; `None` for no border.
    pub border: Option<Border>,
    /// Border color.
    pub border_color: Color,
    /// Tooltip title.
    pub title: Option<String>,
    /// Tooltip body.
    pub description: Option<String>,
    /// Label of the "next" button.
    pub next_label: Option<String>,
    /// Label of the "previous" button.
    pub previous_label: Option<String>,
    /// Label of the "skip" button.
    pub skip_label: Option<String>,
    /// Preferred tooltip side; `None` picks the first that fits.
    pub tooltip_side: Option<Side>,
    /// Gap between the highlighted region and the tooltip.
    pub tooltip_gap: f64,
    /// Elements highlighted alongside the target.
    pub auxiliaries: Vec<AuxiliaryTarget<K>>,
    /// Draw the target and auxiliaries as one merged outline.
    pub merge: bool,
    /// Behavior switches.
    pub flags: StepFlags,
}

impl<K> Default for StepConfig<K> {
    fn default() -> Self {
        Self {
            padding: Insets::ZERO,
            shape: Shape::default(),
            overlay_color: Color::BLACK,
            overlay_opacity: 0.75,
            border: None,
            border_color: Color::WHITE,
            title: None,
            description: None,
            next_label: None,
            previous_label: None,
            skip_label: None,
            tooltip_side: None,
            tooltip_gap: 10.0,
            auxiliaries: Vec::new(),
            merge: false,
            flags: StepFlags::empty(),
        }
    }
}

impl<K> StepConfig<K> {
    /// Set uniform padding around the target.
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = Insets::uniform(padding);
        self
    }

    /// Set the cut-out shape.
    pub fn shape(mut self, shape: Shape) -> Self {
        self.shape = shape;
        self
    }

    /// Stroke the cut-out with `border`.
    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    /// Set the tooltip title and body.
    pub fn text(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self.description = Some(description.into());
        self
    }

    /// Prefer a tooltip side.
    pub fn tooltip_side(mut self, side: Side) -> Self {
        self.tooltip_side = Some(side);
        self
    }

    /// Co-highlight `id`, grown by separate horizontal and vertical shifts.
    pub fn auxiliary(mut self, id: K, horizontal: f64, vertical: f64) -> Self {
        self.auxiliaries.push(AuxiliaryTarget {
            id,
            shift: Vec2::new(horizontal, vertical),
        });
        self
    }

    /// Merge the target and auxiliary outlines.
    pub fn merged(mut self) -> Self {
        self.merge = true;
        self
    }

    /// Add behavior switches.
    pub fn flags(mut self, flags: StepFlags) -> Self {
        self.flags |= flags;
        self
    }
}

/// One entry of a tour: a target identity and its configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Step<K> {
    /// Identity of the highlighted element.
    pub id: K,
    /// Step configuration.
    pub config: StepConfig<K>,
}

impl<K> Step<K> {
    /// A step with default configuration.
    pub fn new(id: K) -> Self {
        Self {
            id,
            config: StepConfig::default(),
        }
    }

    /// A step with the given configuration.
    pub fn with_config(id: K, config: StepConfig<K>) -> Self {
        Self { id, config }
    }
}

impl<K> From<K> for Step<K> {
    fn from(id: K) -> Self {
        Self::new(id)
    }
}

/// Tour-wide configuration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TourOptions {
    /// When false, [`Tour::start`](crate::Tour::start) does nothing.
    pub enabled: bool,
    /// Scroll each step's target into view with the host primitive.
    pub auto_scroll: bool,
    /// Duration passed to the host scroll primitive.
    pub scroll_duration: Duration,
    /// Delay after a host-driven scroll completes.
    pub host_settle: Duration,
    /// Delay after the built-in scroll completes.
    pub builtin_settle: Duration,
    /// Advance on its own this long after each reveal.
    pub auto_play: Option<Duration>,
    /// Clamp highlighted regions to the viewport.
    pub clamp_to_viewport: bool,
}

impl Default for TourOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            auto_scroll: true,
            scroll_duration: DEFAULT_SCROLL_DURATION,
            host_settle: HOST_SCROLL_SETTLE,
            builtin_settle: Duration::ZERO,
            auto_play: None,
            clamp_to_viewport: false,
        }
    }
}
