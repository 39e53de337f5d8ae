// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arena-based storage for CAD model entities.
//!
//! The [`CadModel`] is the central owner of all entity data read back from a
//! translation session. Every entity lives inside slot maps with stable,
//! generational keys. The containment hierarchy mirrors what a kernel
//! reports:
//!
//! part → groups → { solids → bodies → skins → faces → loops → edges,
//!                   skins → faces (surface groups),
//!                   composite curves → edges (curve groups) }
//!
//! Every entity carries a session-unique integer [`EntityId`] assigned by
//! the translator. Identifier equality is the primary equivalence test
//! across the intermediate/final boundary. A shared edge appears as a
//! distinct arena entry under each adjacent face, all carrying the same
//! identifier, the way a kernel hands out a fresh handle per containment
//! query; the `has_co_edge` flag marks the sharing.

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::keys::*;
use crate::lineage::ProvenanceLineage;

/// Session-unique integer identifier carried by every entity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntityId(pub u32);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a translatable group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKind {
    /// Solid bodies; the authoritative final output of a translation.
    Solid,
    /// Free surfaces (skins outside any solid).
    Surface,
    /// Free curves (composite curves outside any solid).
    Curve,
}

/// What a point-like entity sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointKind {
    Free,
    OnCurve,
    OnSurface,
}

/// Data stored for a part: the ordered translatable groups it owns.
#[derive(Debug, Clone, Default)]
pub struct PartData {
    pub groups: Vec<GroupKey>,
}

/// Data stored for a translatable group.
#[derive(Debug, Clone)]
pub struct GroupData {
    pub id: EntityId,
    pub name: String,
    pub kind: GroupKind,
    /// The group is itself a ready-made final translation unit.
    pub need_translate: bool,
    /// Contained top-level entities, in discovery order.
    pub entities: Vec<EntityKey>,
    pub(crate) part: PartKey,
}

/// Data stored for a solid: an ordered set of bodies.
#[derive(Debug, Clone)]
pub struct SolidData {
    pub id: EntityId,
    pub bodies: Vec<BodyKey>,
    pub(crate) parent: Option<EntityKey>,
}

/// Data stored for a body: an ordered set of skins.
#[derive(Debug, Clone)]
pub struct BodyData {
    pub id: EntityId,
    pub skins: Vec<SkinKey>,
    pub(crate) parent: Option<EntityKey>,
}

/// Data stored for a skin: an ordered set of faces.
///
/// The face count is more than one where the kernel treats multiple faces
/// as a single pickable entity (the faces of a cylinder, for example).
#[derive(Debug, Clone)]
pub struct SkinData {
    pub id: EntityId,
    pub faces: Vec<FaceKey>,
    pub(crate) parent: Option<EntityKey>,
}

/// Data stored for a face: bounding loops and an optional lineage.
#[derive(Debug, Clone)]
pub struct FaceData {
    pub id: EntityId,
    pub loops: Vec<LoopKey>,
    pub lineage: Option<ProvenanceLineage>,
    pub(crate) parent: Option<EntityKey>,
}

/// Data stored for a loop: an ordered cycle of edges.
#[derive(Debug, Clone)]
pub struct LoopData {
    pub id: EntityId,
    pub edges: Vec<EdgeKey>,
    pub(crate) parent: Option<EntityKey>,
}

/// Data stored for an edge (curve segment).
#[derive(Debug, Clone)]
pub struct EdgeData {
    pub id: EntityId,
    /// The edge borders two faces in a solid's boundary representation.
    pub has_co_edge: bool,
    pub(crate) parent: Option<EntityKey>,
}

/// Data stored for a composite curve: an ordered chain of edges the kernel
/// treats as one pickable entity (the segments of a full circle, say).
#[derive(Debug, Clone)]
pub struct CurveData {
    pub id: EntityId,
    pub edges: Vec<EdgeKey>,
    pub(crate) parent: Option<EntityKey>,
}

/// Data stored for a point-like entity.
#[derive(Debug, Clone)]
pub struct PointData {
    pub id: EntityId,
    pub kind: PointKind,
    pub(crate) parent: Option<EntityKey>,
}

/// The central arena that owns all entities of one translation session.
///
/// # Example
///
/// ```
/// use cadlink_model::{CadModel, EntityId, GroupKind};
///
/// let mut model = CadModel::new();
/// let part = model.add_part();
/// let group = model
///     .add_group(part, EntityId(1), "PartBody", GroupKind::Solid, false)
///     .unwrap();
///
/// assert_eq!(model.group(group).unwrap().id, EntityId(1));
/// ```
#[derive(Debug, Default)]
pub struct CadModel {
    pub(crate) parts: SlotMap<PartKey, PartData>,
    pub(crate) groups: SlotMap<GroupKey, GroupData>,
    pub(crate) solids: SlotMap<SolidKey, SolidData>,
    pub(crate) bodies: SlotMap<BodyKey, BodyData>,
    pub(crate) skins: SlotMap<SkinKey, SkinData>,
    pub(crate) faces: SlotMap<FaceKey, FaceData>,
    pub(crate) loops: SlotMap<LoopKey, LoopData>,
    pub(crate) edges: SlotMap<EdgeKey, EdgeData>,
    pub(crate) curves: SlotMap<CurveKey, CurveData>,
    pub(crate) points: SlotMap<PointKey, PointData>,
}

impl CadModel {
    /// Creates a new, empty model.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Accessors ---

    /// Returns the part data for the given key, or `None` if not found.
    pub fn part(&self, key: PartKey) -> Option<&PartData> {
        self.parts.get(key)
    }

    /// Returns the group data for the given key, or `None` if not found.
    pub fn group(&self, key: GroupKey) -> Option<&GroupData> {
        self.groups.get(key)
    }

    /// Returns the solid data for the given key, or `None` if not found.
    pub fn solid(&self, key: SolidKey) -> Option<&SolidData> {
        self.solids.get(key)
    }

    /// Returns the body data for the given key, or `None` if not found.
    pub fn body(&self, key: BodyKey) -> Option<&BodyData> {
        self.bodies.get(key)
    }

    /// Returns the skin data for the given key, or `None` if not found.
    pub fn skin(&self, key: SkinKey) -> Option<&SkinData> {
        self.skins.get(key)
    }

    /// Returns the face data for the given key, or `None` if not found.
    pub fn face(&self, key: FaceKey) -> Option<&FaceData> {
        self.faces.get(key)
    }

    /// Returns the loop data for the given key, or `None` if not found.
    pub fn loop_(&self, key: LoopKey) -> Option<&LoopData> {
        self.loops.get(key)
    }

    /// Returns the edge data for the given key, or `None` if not found.
    pub fn edge(&self, key: EdgeKey) -> Option<&EdgeData> {
        self.edges.get(key)
    }

    /// Returns the composite-curve data for the given key, or `None` if not found.
    pub fn curve(&self, key: CurveKey) -> Option<&CurveData> {
        self.curves.get(key)
    }

    /// Returns the point data for the given key, or `None` if not found.
    pub fn point(&self, key: PointKey) -> Option<&PointData> {
        self.points.get(key)
    }

    // --- Counts ---

    /// Returns the number of parts in the model.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Returns the number of groups in the model.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns the number of faces in the model.
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of edges in the model.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    // --- Existence checks ---

    /// Returns `true` if the given entity key references a valid entity.
    pub fn contains(&self, key: EntityKey) -> bool {
        match key {
            EntityKey::Group(k) => self.groups.contains_key(k),
            EntityKey::Solid(k) => self.solids.contains_key(k),
            EntityKey::Body(k) => self.bodies.contains_key(k),
            EntityKey::Skin(k) => self.skins.contains_key(k),
            EntityKey::Face(k) => self.faces.contains_key(k),
            EntityKey::Loop(k) => self.loops.contains_key(k),
            EntityKey::Edge(k) => self.edges.contains_key(k),
            EntityKey::CompositeCurve(k) => self.curves.contains_key(k),
            EntityKey::Point(k) => self.points.contains_key(k),
        }
    }
}
