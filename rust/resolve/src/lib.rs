// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # CADLink Resolve
//!
//! Reference resolution across the intermediate/final CAD translation
//! boundary.
//!
//! Translation re-tessellates, splits, merges, and renumbers geometry, so a
//! consumer pointing at intermediate geometry (annotation placement, for
//! example) needs its references mapped onto the stable final output. The
//! [`GeometryReferenceBuilder`] does that mapping: given an associated
//! entity and the part that owns it, it produces the identifiers of the
//! final-body entities that are structurally equivalent to it.
//!
//! Resolution is layered:
//!
//! 1. **Group short-circuit**: the entity's parent group is itself a
//!    translation unit.
//! 2. **Direct membership**: the identifier is literally present in the
//!    translatable output (geometry survived unmodified).
//! 3. **Provenance resolution**: identifier equality failed; faces are
//!    matched by their recorded modeling-operation lineage, supporting
//!    one-to-many splits, and edges by pairing both adjacent faces.
//! 4. **Fall-through**: nothing matched; the entity's own identifier is
//!    assumed valid in the output.
//!
//! The engine performs no geometric computation and never mutates the
//! model; every operation is a read-only traversal emitting identifiers.

pub mod builder;
pub mod error;
pub mod events;
pub mod intermediate;
pub mod membership;
pub mod partition;
pub mod provenance;
pub mod resolver;

pub use builder::GeometryReferenceBuilder;
pub use error::{Error, Result};
pub use events::{EventSink, NullSink, ResolveEvent, TracingSink};
pub use membership::MatchMode;
pub use partition::TranslatablePartition;
