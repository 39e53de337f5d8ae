// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Traversal methods for navigating the containment hierarchy.
//!
//! All queries are read-only and absence-tolerant: a stale key yields
//! `None` (or an empty result), never an error, so a caller walking the
//! hierarchy skips dead branches and continues with siblings.

use crate::arena::*;
use crate::keys::*;
use crate::lineage::ProvenanceLineage;

impl CadModel {
    // --- Containment enumerations ---

    /// Returns the groups of a part, in discovery order.
    pub fn part_groups(&self, key: PartKey) -> Option<&[GroupKey]> {
        self.parts.get(key).map(|p| p.groups.as_slice())
    }

    /// Returns the top-level entities of a group.
    pub fn group_entities(&self, key: GroupKey) -> Option<&[EntityKey]> {
        self.groups.get(key).map(|g| g.entities.as_slice())
    }

    /// Returns the bodies of a solid.
    pub fn solid_bodies(&self, key: SolidKey) -> Option<&[BodyKey]> {
        self.solids.get(key).map(|s| s.bodies.as_slice())
    }

    /// Returns the skins of a body.
    pub fn body_skins(&self, key: BodyKey) -> Option<&[SkinKey]> {
        self.bodies.get(key).map(|b| b.skins.as_slice())
    }

    /// Returns the faces of a skin.
    pub fn skin_faces(&self, key: SkinKey) -> Option<&[FaceKey]> {
        self.skins.get(key).map(|s| s.faces.as_slice())
    }

    /// Returns the loops of a face.
    pub fn face_loops(&self, key: FaceKey) -> Option<&[LoopKey]> {
        self.faces.get(key).map(|f| f.loops.as_slice())
    }

    /// Returns the edges of a loop.
    pub fn loop_edges(&self, key: LoopKey) -> Option<&[EdgeKey]> {
        self.loops.get(key).map(|l| l.edges.as_slice())
    }

    /// Returns the edge segments of a composite curve.
    pub fn curve_edges(&self, key: CurveKey) -> Option<&[EdgeKey]> {
        self.curves.get(key).map(|c| c.edges.as_slice())
    }

    /// Collects every face reachable under the solid entities of a group,
    /// in body → skin → face discovery order. Non-solid entities in the
    /// group contribute nothing.
    pub fn solid_group_faces(&self, key: GroupKey) -> Vec<FaceKey> {
        let mut out = Vec::new();
        let Some(group) = self.groups.get(key) else {
            return out;
        };
        for &entity in &group.entities {
            let EntityKey::Solid(sk) = entity else {
                continue;
            };
            let Some(solid) = self.solids.get(sk) else {
                continue;
            };
            for &bk in &solid.bodies {
                let Some(body) = self.bodies.get(bk) else {
                    continue;
                };
                for &kk in &body.skins {
                    if let Some(skin) = self.skins.get(kk) {
                        out.extend_from_slice(&skin.faces);
                    }
                }
            }
        }
        out
    }

    // --- Per-entity attributes ---

    /// Returns the provenance lineage attached to a face, if any.
    pub fn face_lineage(&self, key: FaceKey) -> Option<&ProvenanceLineage> {
        self.faces.get(key).and_then(|f| f.lineage.as_ref())
    }

    /// Returns `true` if the edge borders two faces.
    pub fn edge_has_co_edge(&self, key: EdgeKey) -> bool {
        self.edges.get(key).is_some_and(|e| e.has_co_edge)
    }

    // --- Dispatch over the entity sum ---

    /// Returns the session identifier of any entity.
    pub fn entity_id(&self, key: EntityKey) -> Option<EntityId> {
        match key {
            EntityKey::Group(k) => self.groups.get(k).map(|e| e.id),
            EntityKey::Solid(k) => self.solids.get(k).map(|e| e.id),
            EntityKey::Body(k) => self.bodies.get(k).map(|e| e.id),
            EntityKey::Skin(k) => self.skins.get(k).map(|e| e.id),
            EntityKey::Face(k) => self.faces.get(k).map(|e| e.id),
            EntityKey::Loop(k) => self.loops.get(k).map(|e| e.id),
            EntityKey::Edge(k) => self.edges.get(k).map(|e| e.id),
            EntityKey::CompositeCurve(k) => self.curves.get(k).map(|e| e.id),
            EntityKey::Point(k) => self.points.get(k).map(|e| e.id),
        }
    }

    /// Returns the type tag of any entity.
    pub fn entity_type(&self, key: EntityKey) -> Option<EntityType> {
        match key {
            EntityKey::Group(k) => self.groups.get(k).map(|_| EntityType::Group),
            EntityKey::Solid(k) => self.solids.get(k).map(|_| EntityType::Solid),
            EntityKey::Body(k) => self.bodies.get(k).map(|_| EntityType::Body),
            EntityKey::Skin(k) => self.skins.get(k).map(|_| EntityType::Skin),
            EntityKey::Face(k) => self.faces.get(k).map(|_| EntityType::Face),
            EntityKey::Loop(k) => self.loops.get(k).map(|_| EntityType::Loop),
            EntityKey::Edge(k) => self.edges.get(k).map(|_| EntityType::Edge),
            EntityKey::CompositeCurve(k) => self.curves.get(k).map(|_| EntityType::CompositeCurve),
            EntityKey::Point(k) => self.points.get(k).map(|p| match p.kind {
                PointKind::Free => EntityType::Point,
                PointKind::OnCurve => EntityType::PointOnCurve,
                PointKind::OnSurface => EntityType::PointOnSurface,
            }),
        }
    }

    /// Returns the parent entity, a non-owning back-reference.
    ///
    /// Groups have no entity parent (their owner is the part).
    pub fn parent(&self, key: EntityKey) -> Option<EntityKey> {
        match key {
            EntityKey::Group(_) => None,
            EntityKey::Solid(k) => self.solids.get(k).and_then(|e| e.parent),
            EntityKey::Body(k) => self.bodies.get(k).and_then(|e| e.parent),
            EntityKey::Skin(k) => self.skins.get(k).and_then(|e| e.parent),
            EntityKey::Face(k) => self.faces.get(k).and_then(|e| e.parent),
            EntityKey::Loop(k) => self.loops.get(k).and_then(|e| e.parent),
            EntityKey::Edge(k) => self.edges.get(k).and_then(|e| e.parent),
            EntityKey::CompositeCurve(k) => self.curves.get(k).and_then(|e| e.parent),
            EntityKey::Point(k) => self.points.get(k).and_then(|e| e.parent),
        }
    }

    /// Returns the owning group when the entity's direct parent is a group.
    pub fn parent_group(&self, key: EntityKey) -> Option<GroupKey> {
        match self.parent(key)? {
            EntityKey::Group(g) => Some(g),
            _ => None,
        }
    }
}
