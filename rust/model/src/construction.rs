// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Construction methods for model entities.
//!
//! Every entity is created through the arena, which ensures referential
//! integrity (the parent must exist before a child is attached) and wires
//! the non-owning parent back-reference. Identifiers are assigned by the
//! caller, matching how a translation session reads them back from the
//! kernel; the arena does not check them for uniqueness.

use crate::arena::*;
use crate::error::{Error, Result};
use crate::keys::*;
use crate::lineage::ProvenanceLineage;

impl CadModel {
    /// Creates an empty part.
    pub fn add_part(&mut self) -> PartKey {
        self.parts.insert(PartData::default())
    }

    /// Creates a translatable group under a part.
    pub fn add_group(
        &mut self,
        part: PartKey,
        id: EntityId,
        name: &str,
        kind: GroupKind,
        need_translate: bool,
    ) -> Result<GroupKey> {
        if !self.parts.contains_key(part) {
            return Err(Error::PartNotFound(part));
        }

        let key = self.groups.insert(GroupData {
            id,
            name: name.to_owned(),
            kind,
            need_translate,
            entities: Vec::new(),
            part,
        });
        self.parts[part].groups.push(key);
        Ok(key)
    }

    /// Creates a solid inside a group.
    pub fn add_solid(&mut self, group: GroupKey, id: EntityId) -> Result<SolidKey> {
        if !self.groups.contains_key(group) {
            return Err(Error::GroupNotFound(group));
        }

        let key = self.solids.insert(SolidData {
            id,
            bodies: Vec::new(),
            parent: Some(EntityKey::Group(group)),
        });
        self.groups[group].entities.push(EntityKey::Solid(key));
        Ok(key)
    }

    /// Creates a body inside a solid.
    pub fn add_body(&mut self, solid: SolidKey, id: EntityId) -> Result<BodyKey> {
        if !self.solids.contains_key(solid) {
            return Err(Error::SolidNotFound(solid));
        }

        let key = self.bodies.insert(BodyData {
            id,
            skins: Vec::new(),
            parent: Some(EntityKey::Solid(solid)),
        });
        self.solids[solid].bodies.push(key);
        Ok(key)
    }

    /// Creates a skin inside a body.
    pub fn add_skin(&mut self, body: BodyKey, id: EntityId) -> Result<SkinKey> {
        if !self.bodies.contains_key(body) {
            return Err(Error::BodyNotFound(body));
        }

        let key = self.skins.insert(SkinData {
            id,
            faces: Vec::new(),
            parent: Some(EntityKey::Body(body)),
        });
        self.bodies[body].skins.push(key);
        Ok(key)
    }

    /// Creates a skin directly inside a group (a free surface).
    pub fn add_group_skin(&mut self, group: GroupKey, id: EntityId) -> Result<SkinKey> {
        if !self.groups.contains_key(group) {
            return Err(Error::GroupNotFound(group));
        }

        let key = self.skins.insert(SkinData {
            id,
            faces: Vec::new(),
            parent: Some(EntityKey::Group(group)),
        });
        self.groups[group].entities.push(EntityKey::Skin(key));
        Ok(key)
    }

    /// Creates a face inside a skin.
    pub fn add_face(&mut self, skin: SkinKey, id: EntityId) -> Result<FaceKey> {
        if !self.skins.contains_key(skin) {
            return Err(Error::SkinNotFound(skin));
        }

        let key = self.faces.insert(FaceData {
            id,
            loops: Vec::new(),
            lineage: None,
            parent: Some(EntityKey::Skin(skin)),
        });
        self.skins[skin].faces.push(key);
        Ok(key)
    }

    /// Attaches a provenance lineage to a face.
    pub fn set_face_lineage(&mut self, face: FaceKey, lineage: ProvenanceLineage) -> Result<()> {
        let data = self.faces.get_mut(face).ok_or(Error::FaceNotFound(face))?;
        data.lineage = Some(lineage);
        Ok(())
    }

    /// Creates a loop inside a face.
    pub fn add_loop(&mut self, face: FaceKey, id: EntityId) -> Result<LoopKey> {
        if !self.faces.contains_key(face) {
            return Err(Error::FaceNotFound(face));
        }

        let key = self.loops.insert(LoopData {
            id,
            edges: Vec::new(),
            parent: Some(EntityKey::Face(face)),
        });
        self.faces[face].loops.push(key);
        Ok(key)
    }

    /// Creates an edge inside a loop.
    ///
    /// `has_co_edge` marks an edge that borders two faces. Each adjacent
    /// face's loop carries its own edge entry under the shared identifier.
    pub fn add_edge(&mut self, loop_: LoopKey, id: EntityId, has_co_edge: bool) -> Result<EdgeKey> {
        if !self.loops.contains_key(loop_) {
            return Err(Error::LoopNotFound(loop_));
        }

        let key = self.edges.insert(EdgeData {
            id,
            has_co_edge,
            parent: Some(EntityKey::Loop(loop_)),
        });
        self.loops[loop_].edges.push(key);
        Ok(key)
    }

    /// Creates a composite curve directly inside a group (a free curve).
    pub fn add_composite_curve(&mut self, group: GroupKey, id: EntityId) -> Result<CurveKey> {
        if !self.groups.contains_key(group) {
            return Err(Error::GroupNotFound(group));
        }

        let key = self.curves.insert(CurveData {
            id,
            edges: Vec::new(),
            parent: Some(EntityKey::Group(group)),
        });
        self.groups[group]
            .entities
            .push(EntityKey::CompositeCurve(key));
        Ok(key)
    }

    /// Creates an edge segment inside a composite curve.
    pub fn add_curve_edge(
        &mut self,
        curve: CurveKey,
        id: EntityId,
        has_co_edge: bool,
    ) -> Result<EdgeKey> {
        if !self.curves.contains_key(curve) {
            return Err(Error::CurveNotFound(curve));
        }

        let key = self.edges.insert(EdgeData {
            id,
            has_co_edge,
            parent: Some(EntityKey::CompositeCurve(curve)),
        });
        self.curves[curve].edges.push(key);
        Ok(key)
    }

    /// Creates a free-standing point-like entity.
    pub fn add_point(&mut self, id: EntityId, kind: PointKind) -> PointKey {
        self.points.insert(PointData {
            id,
            kind,
            parent: None,
        })
    }
}
