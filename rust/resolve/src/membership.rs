// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Direct membership checks against the translatable output.
//!
//! An entity that survived translation unmodified is literally present in
//! one of the translatable groups under its own identifier, and can be
//! mapped without any provenance matching.

use cadlink_model::{CadModel, EntityId, EntityKey, FaceKey, GroupKind};

use crate::partition::TranslatablePartition;

/// Identity comparison mode for membership checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Candidate faces match on their own identifier.
    FaceId,
    /// Identifiers of the edges inside candidate faces' loops match.
    EdgeId,
}

/// Looks for the target identifier among the translatable output.
///
/// Auxiliary surface/curve groups are searched before the final solid
/// bodies, depth-first, with an early exit on the first hit. Returns the
/// owning group's identifier, or `None` when the full traversal completes
/// without one.
pub fn find_in_translatables(
    model: &CadModel,
    partition: &TranslatablePartition,
    target: EntityId,
    mode: MatchMode,
) -> Option<EntityId> {
    for &gk in partition.other_translatables() {
        let Some(group) = model.group(gk) else {
            continue;
        };
        match group.kind {
            GroupKind::Surface => {
                for &entity in &group.entities {
                    let EntityKey::Skin(sk) = entity else {
                        continue;
                    };
                    let Some(faces) = model.skin_faces(sk) else {
                        continue;
                    };
                    for &fk in faces {
                        if face_matches(model, fk, target, mode) {
                            return Some(group.id);
                        }
                    }
                }
            }
            GroupKind::Curve => {
                // Curve segments are compared by identifier in either mode.
                for &entity in &group.entities {
                    let EntityKey::CompositeCurve(ck) = entity else {
                        continue;
                    };
                    let Some(edges) = model.curve_edges(ck) else {
                        continue;
                    };
                    for &ek in edges {
                        if model.edge(ek).is_some_and(|e| e.id == target) {
                            return Some(group.id);
                        }
                    }
                }
            }
            GroupKind::Solid => {}
        }
    }

    for &gk in partition.final_bodies() {
        let Some(group) = model.group(gk) else {
            continue;
        };
        for fk in model.solid_group_faces(gk) {
            if face_matches(model, fk, target, mode) {
                return Some(group.id);
            }
        }
    }

    None
}

/// Compares one candidate face against the target under the given mode.
fn face_matches(model: &CadModel, face: FaceKey, target: EntityId, mode: MatchMode) -> bool {
    match mode {
        MatchMode::FaceId => model.face(face).is_some_and(|f| f.id == target),
        MatchMode::EdgeId => {
            let Some(loops) = model.face_loops(face) else {
                return false;
            };
            loops.iter().any(|&lk| {
                model.loop_edges(lk).is_some_and(|edges| {
                    edges
                        .iter()
                        .any(|&ek| model.edge(ek).is_some_and(|e| e.id == target))
                })
            })
        }
    }
}
