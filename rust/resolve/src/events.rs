// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Diagnostic events raised during reference resolution.
//!
//! The sink is an explicit collaborator handed to the builder at
//! construction and scoped to one translation job. Events are non-fatal:
//! the resolution that raised one continues (or falls through) normally.

use cadlink_model::EntityId;

/// Non-fatal diagnostics surfaced to the enclosing translation job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveEvent {
    /// A point-like reference carries no mappable geometry.
    UnsupportedPointReference { entity: EntityId },
}

/// Receiver for resolution diagnostics.
pub trait EventSink {
    fn report(&self, event: ResolveEvent);
}

/// Sink that forwards events to `tracing` at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn report(&self, event: ResolveEvent) {
        match event {
            ResolveEvent::UnsupportedPointReference { entity } => {
                tracing::warn!(%entity, "point reference is not supported in annotation association");
            }
        }
    }
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn report(&self, _event: ResolveEvent) {}
}
