//! Render-skip comparison
//!
//! Hosts that retain a [`GlassProps`] between frames can skip re-rendering
//! when nothing observable changed. Configuration fields compare by value,
//! the style/attribute maps compare structurally, and the payload compares
//! by allocation identity - two payloads with equal content but different
//! allocations still count as changed.

use std::sync::Arc;

use crate::glass::GlassProps;

/// What changed between two prop records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Changes {
    /// Any configuration field differs.
    pub config: bool,
    /// The style-override map differs.
    pub style_overrides: bool,
    /// The passthrough attributes differ.
    pub attrs: bool,
    /// The payload is a different allocation.
    pub content: bool,
}

impl Changes {
    /// Returns true if anything changed.
    pub fn any(&self) -> bool {
        self.config || self.style_overrides || self.attrs || self.content
    }
}

/// Compare two prop records group by group.
pub fn diff(prev: &GlassProps, next: &GlassProps) -> Changes {
    Changes {
        config: prev.config != next.config,
        style_overrides: prev.style_overrides != next.style_overrides,
        attrs: prev.attrs != next.attrs,
        content: !Arc::ptr_eq(&prev.content, &next.content),
    }
}

/// True when re-rendering `next` would reproduce the tree `prev` produced.
pub fn props_unchanged(prev: &GlassProps, next: &GlassProps) -> bool {
    !diff(prev, next).any()
}
