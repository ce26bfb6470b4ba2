// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-interaction detector: "a pointer-down elsewhere closes the menu".
//!
//! ## Overview
//!
//! [`OutsideInteractionDetector`] tracks an ordered list of regions (for a select: the trigger,
//! then the content) and a document-level listener that is either attached or detached.
//! While attached, [`pointer_down`](OutsideInteractionDetector::pointer_down) checks whether the
//! event origin lies outside *all* regions and, if so, calls the supplied callback once.
//!
//! ## Listener lifecycle
//!
//! The listener follows an `enabled` flag through [`sync`](OutsideInteractionDetector::sync).
//! While detached it never fires. The owner calls `sync` after it has finished handling an
//! event (its commit step), so the gesture that enabled the detector is never seen by it.
//!
//! ## Regions
//!
//! Anything implementing [`Region`] can be tracked. Kurbo's [`Rect`] and [`RoundedRect`] are
//! supported out of the box, and `Option<R>` treats `None` as an empty region (for content
//! that has not been laid out yet).
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_select::outside::OutsideInteractionDetector;
//!
//! let mut d = OutsideInteractionDetector::with_regions([
//!     Rect::new(0.0, 0.0, 100.0, 30.0),
//!     Rect::new(0.0, 32.0, 100.0, 200.0),
//! ]);
//! d.sync(true);
//!
//! let mut closes = 0;
//! assert!(!d.pointer_down(Point::new(10.0, 10.0), || closes += 1));
//! assert!(d.pointer_down(Point::new(300.0, 10.0), || closes += 1));
//! assert_eq!(closes, 1);
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Rect, RoundedRect, Shape};

/// An area that can answer point containment in world space.
pub trait Region {
    /// Whether `pt` lies inside this region.
    fn contains_point(&self, pt: Point) -> bool;
}

impl Region for Rect {
    #[inline]
    fn contains_point(&self, pt: Point) -> bool {
        self.contains(pt)
    }
}

impl Region for RoundedRect {
    #[inline]
    fn contains_point(&self, pt: Point) -> bool {
        Shape::contains(self, pt)
    }
}

impl<R: Region> Region for Option<R> {
    #[inline]
    fn contains_point(&self, pt: Point) -> bool {
        self.as_ref().is_some_and(|r| r.contains_point(pt))
    }
}

/// Registration state of the document-level listener.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Listener {
    /// Not registered; pointer events are not observed.
    #[default]
    Detached,
    /// Registered; pointer-down events are checked against the regions.
    Attached,
}

/// Watches pointer-down events outside a set of tracked regions.
#[derive(Clone, Debug)]
pub struct OutsideInteractionDetector<R = Rect> {
    regions: Vec<R>,
    listener: Listener,
}

impl<R: Region> Default for OutsideInteractionDetector<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Region> OutsideInteractionDetector<R> {
    /// Create a detached detector with no regions.
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            listener: Listener::Detached,
        }
    }

    /// Create a detached detector tracking `regions`.
    pub fn with_regions(regions: impl IntoIterator<Item = R>) -> Self {
        Self {
            regions: regions.into_iter().collect(),
            listener: Listener::Detached,
        }
    }

    /// Replace the tracked regions, keeping their order.
    pub fn set_regions(&mut self, regions: impl IntoIterator<Item = R>) {
        self.regions.clear();
        self.regions.extend(regions);
    }

    /// Tracked regions.
    pub fn regions(&self) -> &[R] {
        &self.regions
    }

    /// Attach the listener when `enabled`, detach it otherwise.
    ///
    /// Returns `true` if the registration changed.
    pub fn sync(&mut self, enabled: bool) -> bool {
        let next = if enabled {
            Listener::Attached
        } else {
            Listener::Detached
        };
        if self.listener == next {
            return false;
        }
        tracing::debug!(?next, "outside-interaction listener");
        self.listener = next;
        true
    }

    /// Current registration state.
    pub fn listener(&self) -> Listener {
        self.listener
    }

    /// Whether the listener is attached.
    pub fn is_attached(&self) -> bool {
        self.listener == Listener::Attached
    }

    /// Whether `pt` lies outside every tracked region.
    ///
    /// With no regions every point is outside.
    pub fn is_outside(&self, pt: Point) -> bool {
        !self.regions.iter().any(|r| r.contains_point(pt))
    }

    /// Observe a pointer-down at `pt`.
    ///
    /// Calls `on_outside` exactly once and returns `true` when the listener is attached and
    /// `pt` is outside all regions; otherwise does nothing and returns `false`.
    pub fn pointer_down(&self, pt: Point, on_outside: impl FnOnce()) -> bool {
        if !self.is_attached() || !self.is_outside(pt) {
            return false;
        }
        tracing::trace!(x = pt.x, y = pt.y, "pointer-down outside tracked regions");
        on_outside();
        true
    }
}
