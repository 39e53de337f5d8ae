// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # CADLink Model
//!
//! Arena-based CAD entity model for translation reference mapping.
//!
//! This crate is the topology access layer read by the reference-resolution
//! engine: entities (groups, solids, bodies, skins, faces, loops, edges,
//! composite curves, points) are stored in slot maps with stable typed keys,
//! carry session-unique integer identifiers, and expose containment
//! enumerations, parent lookups, and face provenance-lineage descriptors.
//!
//! The model is write-once per translation session: a producer builds it
//! from kernel queries, and every downstream consumer reads it through
//! `&CadModel`. No query mutates the arena.

pub mod arena;
pub mod construction;
pub mod error;
pub mod keys;
pub mod lineage;
pub mod traversal;

pub use arena::{CadModel, EntityId, GroupKind, PointKind};
pub use error::{Error, Result};
pub use keys::{
    BodyKey, CurveKey, EdgeKey, EntityKey, EntityType, FaceKey, GroupKey, LoopKey, PartKey,
    PointKey, SkinKey, SolidKey,
};
pub use lineage::{LineageGroup, ProvenanceLineage};
