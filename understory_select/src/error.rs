// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by select construction and composed parts.
//!
//! Interactions with disabled options or a disabled control are not errors; they are
//! ignored and reported as [`EventResult::Ignored`](crate::types::EventResult::Ignored).

use alloc::string::String;

use thiserror::Error;

/// Programming mistakes surfaced by the select.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    /// A composed part was rendered or handed an event without its provider's context.
    #[error("`{component}` must be used within `{provider}`")]
    MissingContext {
        /// Part that required the context.
        component: &'static str,
        /// Component that provides it.
        provider: &'static str,
    },
    /// Two options in one set share a value.
    #[error("duplicate option value `{0}`")]
    DuplicateValue(String),
}
