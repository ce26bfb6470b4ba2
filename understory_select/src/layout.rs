// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-reported geometry for pointer hit testing.
//!
//! ## Notes
//!
//! The select does no layout. After the host lays out the rendered tree it reports the
//! world-space boxes of the trigger, the content container, and each option row here.
//! The root uses them to resolve pointer clicks and moves, and to feed the
//! [outside-interaction detector](crate::outside) its tracked regions.
//!
//! Rows are expected to lie inside the content box. When boxes overlap, the last matching row
//! wins, matching paint order.

use alloc::vec::Vec;

use kurbo::{Point, Rect};

/// What a pointer position resolves to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LayoutHit {
    /// The trigger.
    Trigger,
    /// An option row, by index.
    Row(usize),
    /// Inside the content container but not on a row (padding, the empty placeholder).
    Content,
}

/// World-space bounds of a select's parts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectLayout {
    /// Trigger bounds.
    pub trigger: Rect,
    /// Content container bounds; `None` while closed or not yet laid out.
    pub content: Option<Rect>,
    /// Row bounds, indexed like the option list.
    pub rows: Vec<Rect>,
}

impl SelectLayout {
    /// Layout with only a trigger (the closed state).
    pub fn trigger_only(trigger: Rect) -> Self {
        Self {
            trigger,
            content: None,
            rows: Vec::new(),
        }
    }

    /// The row under `pt`, if any.
    pub fn row_at(&self, pt: Point) -> Option<usize> {
        self.rows.iter().rposition(|r| r.contains(pt))
    }

    /// Resolve `pt` to a part. Rows take precedence over the content box that holds them.
    pub fn hit(&self, pt: Point) -> Option<LayoutHit> {
        if let Some(row) = self.row_at(pt) {
            return Some(LayoutHit::Row(row));
        }
        if self.content.is_some_and(|c| c.contains(pt)) {
            return Some(LayoutHit::Content);
        }
        if self.trigger.contains(pt) {
            return Some(LayoutHit::Trigger);
        }
        None
    }

    /// Regions for the outside-interaction detector: trigger, then content.
    pub fn regions(&self) -> [Option<Rect>; 2] {
        [Some(self.trigger), self.content]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn layout() -> SelectLayout {
        SelectLayout {
            trigger: Rect::new(0.0, 0.0, 120.0, 32.0),
            content: Some(Rect::new(0.0, 36.0, 120.0, 136.0)),
            rows: vec![
                Rect::new(0.0, 40.0, 120.0, 70.0),
                Rect::new(0.0, 70.0, 120.0, 100.0),
                Rect::new(0.0, 100.0, 120.0, 130.0),
            ],
        }
    }

    #[test]
    fn hit_resolves_parts() {
        let l = layout();
        assert_eq!(l.hit(Point::new(10.0, 10.0)), Some(LayoutHit::Trigger));
        assert_eq!(l.hit(Point::new(10.0, 75.0)), Some(LayoutHit::Row(1)));
        assert_eq!(l.hit(Point::new(10.0, 38.0)), Some(LayoutHit::Content));
        assert_eq!(l.hit(Point::new(10.0, 34.0)), None);
        assert_eq!(l.hit(Point::new(500.0, 10.0)), None);
    }

    #[test]
    fn overlapping_rows_last_wins() {
        let mut l = layout();
        l.rows.push(Rect::new(0.0, 60.0, 120.0, 80.0));
        assert_eq!(l.row_at(Point::new(5.0, 65.0)), Some(3));
    }

    #[test]
    fn regions_are_trigger_then_content() {
        let l = SelectLayout::trigger_only(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(l.regions(), [Some(Rect::new(0.0, 0.0, 10.0, 10.0)), None]);
        assert_eq!(l.hit(Point::new(5.0, 5.0)), Some(LayoutHit::Trigger));
    }
}
