// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The reference builder: entry point of the resolution engine.
//!
//! A consumer holds an entity of the intermediate representation (the one a
//! kernel reports as associated with an annotation) and needs the
//! identifiers of the structurally equivalent entities in the final
//! translatable bodies. The builder dispatches on the entity's kind, tries
//! direct membership first, falls back to provenance resolution, and
//! finally to the entity's own identifier when nothing in the final output
//! corresponds to it.

use cadlink_model::{CadModel, EdgeKey, EntityId, EntityKey, FaceKey, GroupKey, PartKey};
use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::events::{EventSink, ResolveEvent};
use crate::membership::{find_in_translatables, MatchMode};
use crate::partition::TranslatablePartition;
use crate::resolver;

/// Resolves one associated entity against one part's translation output.
///
/// Constructed once per translation job; the partition of translatable
/// groups is computed up front and both derived sequences stay fixed for
/// the builder's lifetime.
pub struct GeometryReferenceBuilder<'a> {
    model: &'a CadModel,
    part: PartKey,
    associated: EntityKey,
    partition: TranslatablePartition,
    sink: &'a dyn EventSink,
}

impl<'a> GeometryReferenceBuilder<'a> {
    /// Creates a builder scoped to one associated entity and one part.
    pub fn new(
        model: &'a CadModel,
        part: PartKey,
        associated: EntityKey,
        translatable_groups: &[GroupKey],
        sink: &'a dyn EventSink,
    ) -> Self {
        Self {
            model,
            part,
            associated,
            partition: TranslatablePartition::new(model, translatable_groups),
            sink,
        }
    }

    /// Identifiers of the final-output entities structurally equivalent to
    /// the associated entity.
    ///
    /// The result preserves discovery order and contains no duplicates.
    /// When no final or auxiliary mapping exists, the associated entity's
    /// own identifier passes through: an unresolved intermediate entity is
    /// assumed present in the output under the same identifier.
    pub fn referenced_geometry_ids(&self) -> Result<Vec<EntityId>> {
        let associated_id = self
            .model
            .entity_id(self.associated)
            .ok_or(Error::EntityNotFound(self.associated))?;
        if self.model.part(self.part).is_none() {
            return Err(Error::PartNotFound(self.part));
        }

        let mut found = Vec::new();

        if let Some(group_id) = self.translated_parent_group() {
            // The whole group is already a ready-made translation unit.
            found.push(group_id);
        } else {
            match self.associated {
                EntityKey::Skin(sk) => {
                    for &fk in self.model.skin_faces(sk).unwrap_or(&[]) {
                        self.check_face(fk, MatchMode::FaceId, &mut found);
                    }
                }
                EntityKey::CompositeCurve(ck) => {
                    for &ek in self.model.curve_edges(ck).unwrap_or(&[]) {
                        self.check_edge(ek, &mut found);
                    }
                }
                EntityKey::Solid(sk) => {
                    // The kernel reports intermediate geometry at solid level
                    // when a reference targets a modeling feature. The solid
                    // itself maps to nothing; its faces may still be part of
                    // a final body.
                    for &bk in self.model.solid_bodies(sk).unwrap_or(&[]) {
                        for &kk in self.model.body_skins(bk).unwrap_or(&[]) {
                            for &fk in self.model.skin_faces(kk).unwrap_or(&[]) {
                                self.check_face(fk, MatchMode::EdgeId, &mut found);
                            }
                        }
                    }
                }
                EntityKey::Point(_) => {
                    self.sink.report(ResolveEvent::UnsupportedPointReference {
                        entity: associated_id,
                    });
                }
                _ => {}
            }
        }

        if found.is_empty() {
            found.push(associated_id);
        }

        let mut seen = FxHashSet::default();
        found.retain(|id| seen.insert(*id));
        Ok(found)
    }

    /// The owning group's identifier when the associated entity's parent is
    /// a group flagged as a translation unit.
    fn translated_parent_group(&self) -> Option<EntityId> {
        let group = self.model.parent_group(self.associated)?;
        let data = self.model.group(group)?;
        data.need_translate.then_some(data.id)
    }

    /// Direct membership first, provenance resolution second.
    fn check_face(&self, face: FaceKey, mode: MatchMode, out: &mut Vec<EntityId>) {
        let Some(data) = self.model.face(face) else {
            return;
        };
        if find_in_translatables(self.model, &self.partition, data.id, mode).is_some() {
            out.push(data.id);
        } else {
            resolver::resolve_face(self.model, self.part, &self.partition, face, out);
        }
    }

    /// Direct membership first, provenance resolution second.
    fn check_edge(&self, edge: EdgeKey, out: &mut Vec<EntityId>) {
        let Some(data) = self.model.edge(edge) else {
            return;
        };
        if find_in_translatables(self.model, &self.partition, data.id, MatchMode::EdgeId).is_some()
        {
            out.push(data.id);
        } else {
            resolver::resolve_edge(self.model, self.part, &self.partition, data.id, out);
        }
    }
}
