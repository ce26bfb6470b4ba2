// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard navigation controller.
//!
//! ## Overview
//!
//! [`transition`] is a pure function from `(state, key, options, disabled)` to the next
//! [`NavState`] and an [`Effect`] for the caller to apply. It has no side effects; the
//! [trigger](crate::trigger) applies its output through the [context](crate::context).
//!
//! ## Transitions
//!
//! | Key           | Closed                 | Open                                                  |
//! |---------------|------------------------|-------------------------------------------------------|
//! | Enter / Space | open, highlight first  | commit the highlighted option if it is enabled        |
//! | ArrowDown     | open, highlight first  | move down, clamped to the last option                 |
//! | ArrowUp       | ignored                | move up, clamped to the first option                  |
//! | Home          | ignored                | highlight first                                       |
//! | End           | ignored                | highlight last                                        |
//! | Escape        | ignored                | close and return focus to the trigger                 |
//!
//! Every key is ignored while the control is disabled.
//!
//! Arrow keys do not skip disabled options: the highlight may rest on one, but Enter/Space
//! there does not commit and the list stays open.
//!
//! With an empty option list the highlight stays `None` in every state.
//!
//! ## Example
//!
//! ```
//! use understory_select::keyboard::{transition, Effect, NavState};
//! use understory_select::types::{Key, OptionRecord};
//!
//! let options = [OptionRecord::new("a", "A"), OptionRecord::new("b", "B")];
//! let t = transition(NavState::Closed, Key::ArrowDown, &options, false).unwrap();
//! assert_eq!(t.next, NavState::Open { highlighted: Some(0) });
//!
//! let t = transition(t.next, Key::Enter, &options, false).unwrap();
//! assert_eq!(t.next, NavState::Closed);
//! assert_eq!(t.effect, Effect::Commit(0));
//! ```

use crate::types::{Key, OptionRecord};

/// Navigation state as seen by the controller.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum NavState {
    /// List hidden; there is no highlight.
    Closed,
    /// List visible, with an optional highlighted index.
    Open {
        /// Keyboard cursor; `None` when nothing is highlighted.
        highlighted: Option<usize>,
    },
}

impl NavState {
    /// Build a state from the root's `open` flag and highlight.
    pub fn from_parts(open: bool, highlighted: Option<usize>) -> Self {
        if open {
            Self::Open { highlighted }
        } else {
            Self::Closed
        }
    }

    /// Whether the list is open.
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Highlighted index, if open and set.
    pub fn highlighted(self) -> Option<usize> {
        match self {
            Self::Closed => None,
            Self::Open { highlighted } => highlighted,
        }
    }
}

/// Side effect the caller performs alongside the state change.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Effect {
    /// Nothing beyond the state change.
    None,
    /// Commit the option at this index (which also closes and refocuses the trigger).
    Commit(usize),
    /// Move keyboard focus back to the trigger.
    RefocusTrigger,
}

/// Output of [`transition`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Transition {
    /// State after the key.
    pub next: NavState,
    /// Effect to perform.
    pub effect: Effect,
}

impl Transition {
    fn to(next: NavState) -> Self {
        Self {
            next,
            effect: Effect::None,
        }
    }
}

/// Compute the transition for `key` in `state`.
///
/// Returns `None` when the key means nothing in this state (or the control is disabled), so the
/// host can let it propagate. A returned transition may leave the state unchanged, for example
/// Enter while the highlight rests on a disabled option; the key is still consumed.
pub fn transition(
    state: NavState,
    key: Key,
    options: &[OptionRecord],
    disabled: bool,
) -> Option<Transition> {
    if disabled {
        return None;
    }
    let first = if options.is_empty() { None } else { Some(0) };
    let last = options.len().checked_sub(1);

    match state {
        NavState::Closed => match key {
            Key::Enter | Key::Space | Key::ArrowDown => {
                Some(Transition::to(NavState::Open { highlighted: first }))
            }
            _ => None,
        },
        NavState::Open { highlighted } => match key {
            Key::Enter | Key::Space => {
                let commit = highlighted
                    .filter(|&i| options.get(i).is_some_and(|o| !o.disabled));
                Some(match commit {
                    Some(i) => Transition {
                        next: NavState::Closed,
                        effect: Effect::Commit(i),
                    },
                    None => Transition::to(state),
                })
            }
            Key::ArrowDown => {
                let next = match (highlighted, last) {
                    (_, None) => None,
                    (None, Some(_)) => first,
                    (Some(i), Some(last)) => Some((i + 1).min(last)),
                };
                Some(Transition::to(NavState::Open { highlighted: next }))
            }
            Key::ArrowUp => {
                let next = last.map(|last| highlighted.map_or(0, |i| i.saturating_sub(1)).min(last));
                Some(Transition::to(NavState::Open { highlighted: next }))
            }
            Key::Home => Some(Transition::to(NavState::Open { highlighted: first })),
            Key::End => Some(Transition::to(NavState::Open { highlighted: last })),
            Key::Escape => Some(Transition {
                next: NavState::Closed,
                effect: Effect::RefocusTrigger,
            }),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    fn abc() -> Vec<OptionRecord> {
        vec![
            OptionRecord::new("a", "A"),
            OptionRecord::new("b", "B").disabled(),
            OptionRecord::new("c", "C"),
        ]
    }

    fn open(h: Option<usize>) -> NavState {
        NavState::Open { highlighted: h }
    }

    #[test]
    fn opening_keys_highlight_first() {
        let opts = abc();
        for key in [Key::Enter, Key::Space, Key::ArrowDown] {
            let t = transition(NavState::Closed, key, &opts, false).unwrap();
            assert_eq!(t.next, open(Some(0)), "{key:?}");
            assert_eq!(t.effect, Effect::None);
        }
    }

    #[test]
    fn closed_ignores_other_keys() {
        let opts = abc();
        for key in [Key::ArrowUp, Key::Home, Key::End, Key::Escape, Key::Tab] {
            assert_eq!(transition(NavState::Closed, key, &opts, false), None);
        }
    }

    #[test]
    fn arrow_down_clamps_at_last() {
        let opts = abc();
        let t = transition(open(Some(1)), Key::ArrowDown, &opts, false).unwrap();
        assert_eq!(t.next, open(Some(2)));
        let t = transition(t.next, Key::ArrowDown, &opts, false).unwrap();
        assert_eq!(t.next, open(Some(2)));
    }

    #[test]
    fn arrow_down_from_no_highlight_starts_at_first() {
        let opts = abc();
        let t = transition(open(None), Key::ArrowDown, &opts, false).unwrap();
        assert_eq!(t.next, open(Some(0)));
    }

    #[test]
    fn arrow_up_clamps_at_first() {
        let opts = abc();
        let t = transition(open(Some(2)), Key::ArrowUp, &opts, false).unwrap();
        assert_eq!(t.next, open(Some(1)));
        let t = transition(open(Some(0)), Key::ArrowUp, &opts, false).unwrap();
        assert_eq!(t.next, open(Some(0)));
        let t = transition(open(None), Key::ArrowUp, &opts, false).unwrap();
        assert_eq!(t.next, open(Some(0)));
    }

    #[test]
    fn home_and_end_jump() {
        let opts = abc();
        let t = transition(open(Some(1)), Key::Home, &opts, false).unwrap();
        assert_eq!(t.next, open(Some(0)));
        let t = transition(open(Some(0)), Key::End, &opts, false).unwrap();
        assert_eq!(t.next, open(Some(2)));
    }

    #[test]
    fn arrows_land_on_disabled_but_enter_does_not_commit() {
        let opts = abc();
        let t = transition(open(Some(0)), Key::ArrowDown, &opts, false).unwrap();
        assert_eq!(t.next, open(Some(1)));
        let t = transition(t.next, Key::Enter, &opts, false).unwrap();
        assert_eq!(t.next, open(Some(1)));
        assert_eq!(t.effect, Effect::None);
        let t = transition(t.next, Key::Space, &opts, false).unwrap();
        assert_eq!(t.effect, Effect::None);
    }

    #[test]
    fn enter_commits_enabled_highlight() {
        let opts = abc();
        let t = transition(open(Some(2)), Key::Space, &opts, false).unwrap();
        assert_eq!(t.next, NavState::Closed);
        assert_eq!(t.effect, Effect::Commit(2));
    }

    #[test]
    fn enter_without_highlight_keeps_open() {
        let opts = abc();
        let t = transition(open(None), Key::Enter, &opts, false).unwrap();
        assert_eq!(t.next, open(None));
        assert_eq!(t.effect, Effect::None);
    }

    #[test]
    fn escape_closes_and_refocuses() {
        let opts = abc();
        let t = transition(open(Some(2)), Key::Escape, &opts, false).unwrap();
        assert_eq!(t.next, NavState::Closed);
        assert_eq!(t.effect, Effect::RefocusTrigger);
    }

    #[test]
    fn disabled_control_ignores_everything() {
        let opts = abc();
        for state in [NavState::Closed, open(Some(0))] {
            for key in [
                Key::Enter,
                Key::Space,
                Key::ArrowDown,
                Key::ArrowUp,
                Key::Home,
                Key::End,
                Key::Escape,
            ] {
                assert_eq!(transition(state, key, &opts, true), None);
            }
        }
    }

    #[test]
    fn empty_list_never_highlights() {
        let t = transition(NavState::Closed, Key::ArrowDown, &[], false).unwrap();
        assert_eq!(t.next, open(None));
        for key in [Key::ArrowDown, Key::ArrowUp, Key::Home, Key::End] {
            let t = transition(open(None), key, &[], false).unwrap();
            assert_eq!(t.next, open(None), "{key:?}");
        }
        let t = transition(open(None), Key::Enter, &[], false).unwrap();
        assert_eq!(t.effect, Effect::None);
    }

    #[test]
    fn state_helpers() {
        assert_eq!(NavState::from_parts(false, Some(3)), NavState::Closed);
        assert_eq!(NavState::from_parts(true, Some(3)).highlighted(), Some(3));
        assert!(!NavState::Closed.is_open());
    }
}
