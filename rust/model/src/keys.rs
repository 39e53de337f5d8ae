// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Key types for arena-based CAD entity storage.
//!
//! Each entity kind gets a unique, type-safe key for O(1) lookup in the
//! arena. Keys are created by `slotmap::SlotMap` and remain valid even after
//! other entities are removed (generational indices). The closed [`EntityKey`]
//! sum replaces runtime-checked downcasts with exhaustive matching.

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    /// Key for a part, the root container of a translation session.
    pub struct PartKey;

    /// Key for a translatable group (solid, surface, or curve container).
    pub struct GroupKey;

    /// Key for a solid, the modeling abstraction above body level.
    pub struct SolidKey;

    /// Key for a body, a boundary-representation volume inside a solid.
    pub struct BodyKey;

    /// Key for a skin, a connected set of faces.
    pub struct SkinKey;

    /// Key for a face.
    pub struct FaceKey;

    /// Key for a loop, an edge cycle bounding a face.
    pub struct LoopKey;

    /// Key for an edge (curve segment).
    pub struct EdgeKey;

    /// Key for a composite curve, a chain of edges treated as one entity.
    pub struct CurveKey;

    /// Key for a point-like entity.
    pub struct PointKey;
}

/// A key that can reference any CAD entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKey {
    Group(GroupKey),
    Solid(SolidKey),
    Body(BodyKey),
    Skin(SkinKey),
    Face(FaceKey),
    Loop(LoopKey),
    Edge(EdgeKey),
    CompositeCurve(CurveKey),
    Point(PointKey),
}

/// Discriminant for entity types.
///
/// Point-like entities carry three distinct tags depending on what they sit
/// on; consumers that reject point references treat all three alike, but the
/// tags are preserved as the kernel reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    Group,
    Solid,
    Body,
    Skin,
    Face,
    Loop,
    Edge,
    CompositeCurve,
    Point,
    PointOnCurve,
    PointOnSurface,
}

impl EntityType {
    /// Returns the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Group => "Group",
            EntityType::Solid => "Solid",
            EntityType::Body => "Body",
            EntityType::Skin => "Skin",
            EntityType::Face => "Face",
            EntityType::Loop => "Loop",
            EntityType::Edge => "Edge",
            EntityType::CompositeCurve => "CompositeCurve",
            EntityType::Point => "Point",
            EntityType::PointOnCurve => "PointOnCurve",
            EntityType::PointOnSurface => "PointOnSurface",
        }
    }

    /// `true` for the three point-like tags.
    pub fn is_point_like(&self) -> bool {
        matches!(
            self,
            EntityType::Point | EntityType::PointOnCurve | EntityType::PointOnSurface
        )
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Conversion impls from specific keys to EntityKey
impl From<GroupKey> for EntityKey {
    fn from(k: GroupKey) -> Self {
        EntityKey::Group(k)
    }
}

impl From<SolidKey> for EntityKey {
    fn from(k: SolidKey) -> Self {
        EntityKey::Solid(k)
    }
}

impl From<BodyKey> for EntityKey {
    fn from(k: BodyKey) -> Self {
        EntityKey::Body(k)
    }
}

impl From<SkinKey> for EntityKey {
    fn from(k: SkinKey) -> Self {
        EntityKey::Skin(k)
    }
}

impl From<FaceKey> for EntityKey {
    fn from(k: FaceKey) -> Self {
        EntityKey::Face(k)
    }
}

impl From<LoopKey> for EntityKey {
    fn from(k: LoopKey) -> Self {
        EntityKey::Loop(k)
    }
}

impl From<EdgeKey> for EntityKey {
    fn from(k: EdgeKey) -> Self {
        EntityKey::Edge(k)
    }
}

impl From<CurveKey> for EntityKey {
    fn from(k: CurveKey) -> Self {
        EntityKey::CompositeCurve(k)
    }
}

impl From<PointKey> for EntityKey {
    fn from(k: PointKey) -> Self {
        EntityKey::Point(k)
    }
}
