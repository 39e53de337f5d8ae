// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Resolution of intermediate faces and edges into the final bodies.
//!
//! Translation can split one intermediate face into several final faces, so
//! face resolution appends every provenance-equal face it finds. Edge
//! resolution is stricter: a final edge counts only when both of the
//! intermediate edge's adjacent faces find a provenance-equal partner among
//! the two faces adjacent to the final edge.

use cadlink_model::{CadModel, EntityId, EntityKey, FaceKey, PartKey};
use rustc_hash::FxHashMap;

use crate::intermediate;
use crate::partition::TranslatablePartition;
use crate::provenance::faces_equivalent;

/// Resolves an intermediate face reference into the final bodies.
///
/// When the face's grandparent is already a body, the face itself is the
/// intermediate face; otherwise the equivalent face is located by scanning
/// the part's solid groups first. Appends the identifiers of every
/// provenance-equal final face and returns the owning group's identifier,
/// or `None` when nothing matched.
pub fn resolve_face(
    model: &CadModel,
    part: PartKey,
    partition: &TranslatablePartition,
    face: FaceKey,
    out: &mut Vec<EntityId>,
) -> Option<EntityId> {
    let target = model.face(face)?.id;

    let grandparent_is_body = matches!(
        model
            .parent(EntityKey::Face(face))
            .and_then(|p| model.parent(p)),
        Some(EntityKey::Body(_))
    );

    let intermediate_face = if grandparent_is_body {
        face
    } else {
        // The entity sits beneath a solid abstraction that underwent further
        // modeling operations; find its counterpart in the intermediate
        // solid hierarchy first.
        intermediate::intermediate_face(model, part, target)?.1
    };

    resolved_faces(model, partition, intermediate_face, out)
}

/// Resolves an intermediate edge reference into the final bodies.
///
/// Requires both intermediate adjacent faces to exist; appends the
/// identifiers of every final edge whose two adjacent faces pair up with
/// them, and returns the owning group's identifier.
pub fn resolve_edge(
    model: &CadModel,
    part: PartKey,
    partition: &TranslatablePartition,
    target: EntityId,
    out: &mut Vec<EntityId>,
) -> Option<EntityId> {
    let (_, first, second) = intermediate::intermediate_edge_faces(model, part, target)?;
    resolved_edges(model, partition, first, second, out)
}

/// Appends every final face provenance-equal to the intermediate face.
///
/// Groups are scanned in partition order; the scan stops at the first group
/// that yielded at least one match and returns its identifier.
pub fn resolved_faces(
    model: &CadModel,
    partition: &TranslatablePartition,
    intermediate_face: FaceKey,
    out: &mut Vec<EntityId>,
) -> Option<EntityId> {
    for &gk in partition.final_bodies() {
        let Some(group) = model.group(gk) else {
            continue;
        };
        let before = out.len();
        for fk in model.solid_group_faces(gk) {
            if faces_equivalent(model, fk, intermediate_face) {
                if let Some(face) = model.face(fk) {
                    out.push(face.id);
                }
            }
        }
        if out.len() > before {
            return Some(group.id);
        }
    }
    None
}

/// Appends every final edge whose two adjacent faces pair up with the two
/// intermediate adjacent faces.
///
/// Walking a group's faces, each co-edge identifier is recorded together
/// with the face it was seen under; the second sighting completes the
/// adjacent pair and triggers the match. The intermediate faces are tested
/// in fixed order, each against the first then the second recorded final
/// face; an intermediate face matching neither abandons the candidate edge.
pub fn resolved_edges(
    model: &CadModel,
    partition: &TranslatablePartition,
    first: FaceKey,
    second: FaceKey,
    out: &mut Vec<EntityId>,
) -> Option<EntityId> {
    for &gk in partition.final_bodies() {
        let Some(group) = model.group(gk) else {
            continue;
        };
        let before = out.len();
        let mut edge_faces: FxHashMap<EntityId, Vec<FaceKey>> = FxHashMap::default();

        for fk in model.solid_group_faces(gk) {
            let Some(loops) = model.face_loops(fk) else {
                continue;
            };
            for &lk in loops {
                let Some(edges) = model.loop_edges(lk) else {
                    continue;
                };
                for &ek in edges {
                    let Some(edge) = model.edge(ek) else {
                        continue;
                    };
                    if !edge.has_co_edge {
                        continue;
                    }
                    let seen = edge_faces.entry(edge.id).or_default();
                    seen.push(fk);
                    if seen.len() != 2 {
                        continue;
                    }
                    let pair = [seen[0], seen[1]];
                    if pair_matches(model, first, pair) && pair_matches(model, second, pair) {
                        out.push(edge.id);
                    }
                }
            }
        }

        if out.len() > before {
            return Some(group.id);
        }
    }
    None
}

/// One intermediate face against the two faces adjacent to a final edge.
fn pair_matches(model: &CadModel, intermediate_face: FaceKey, pair: [FaceKey; 2]) -> bool {
    faces_equivalent(model, intermediate_face, pair[0])
        || faces_equivalent(model, intermediate_face, pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadlink_model::{GroupKey, GroupKind, ProvenanceLineage, SkinKey};

    fn solid_group(model: &mut CadModel, part: PartKey, id: u32) -> (GroupKey, SkinKey) {
        let group = model
            .add_group(part, EntityId(id), "Body", GroupKind::Solid, false)
            .unwrap();
        let solid = model.add_solid(group, EntityId(id + 1)).unwrap();
        let body = model.add_body(solid, EntityId(id + 2)).unwrap();
        let skin = model.add_skin(body, EntityId(id + 3)).unwrap();
        (group, skin)
    }

    fn lineage_face(
        model: &mut CadModel,
        skin: SkinKey,
        id: u32,
        ops: &[i32],
    ) -> FaceKey {
        let face = model.add_face(skin, EntityId(id)).unwrap();
        model
            .set_face_lineage(face, ProvenanceLineage::single(ops))
            .unwrap();
        face
    }

    #[test]
    fn split_face_resolves_to_every_match() {
        let mut model = CadModel::new();
        let part = model.add_part();
        let (_, iskin) = solid_group(&mut model, part, 100);
        let target = lineage_face(&mut model, iskin, 10, &[5, 7]);

        let (fgroup, fskin) = solid_group(&mut model, part, 200);
        lineage_face(&mut model, fskin, 201, &[5, 7]);
        lineage_face(&mut model, fskin, 202, &[5, 7]);
        lineage_face(&mut model, fskin, 203, &[9]);

        let partition = TranslatablePartition::new(&model, &[fgroup]);
        let mut out = Vec::new();
        let owner = resolved_faces(&model, &partition, target, &mut out);
        assert_eq!(owner, Some(EntityId(200)));
        assert_eq!(out, vec![EntityId(201), EntityId(202)]);
    }

    #[test]
    fn scan_stops_at_first_group_with_matches() {
        let mut model = CadModel::new();
        let part = model.add_part();
        let (_, iskin) = solid_group(&mut model, part, 100);
        let target = lineage_face(&mut model, iskin, 10, &[1]);

        let (g1, s1) = solid_group(&mut model, part, 200);
        lineage_face(&mut model, s1, 201, &[1]);
        let (g2, s2) = solid_group(&mut model, part, 300);
        lineage_face(&mut model, s2, 301, &[1]);

        let partition = TranslatablePartition::new(&model, &[g1, g2]);
        let mut out = Vec::new();
        let owner = resolved_faces(&model, &partition, target, &mut out);
        assert_eq!(owner, Some(EntityId(200)));
        assert_eq!(out, vec![EntityId(201)]);
    }

    #[test]
    fn face_under_body_is_its_own_intermediate() {
        let mut model = CadModel::new();
        let part = model.add_part();
        let (_, iskin) = solid_group(&mut model, part, 100);
        let target = lineage_face(&mut model, iskin, 10, &[2, 4]);

        let (fgroup, fskin) = solid_group(&mut model, part, 200);
        lineage_face(&mut model, fskin, 201, &[2, 4]);

        let partition = TranslatablePartition::new(&model, &[fgroup]);
        let mut out = Vec::new();
        let owner = resolve_face(&model, part, &partition, target, &mut out);
        assert_eq!(owner, Some(EntityId(200)));
        assert_eq!(out, vec![EntityId(201)]);
    }

    #[test]
    fn free_surface_face_is_located_in_the_intermediate_solids_first() {
        let mut model = CadModel::new();
        let part = model.add_part();

        // The referenced face sits under a surface group; its grandparent is
        // that group, not a body.
        let sgroup = model
            .add_group(part, EntityId(50), "Surf", GroupKind::Surface, false)
            .unwrap();
        let sskin = model.add_group_skin(sgroup, EntityId(51)).unwrap();
        let referenced = model.add_face(sskin, EntityId(10)).unwrap();

        // Its counterpart in the intermediate solids carries the lineage.
        let (_, iskin) = solid_group(&mut model, part, 100);
        lineage_face(&mut model, iskin, 10, &[3]);

        let (fgroup, fskin) = solid_group(&mut model, part, 200);
        lineage_face(&mut model, fskin, 201, &[3]);

        let partition = TranslatablePartition::new(&model, &[fgroup]);
        let mut out = Vec::new();
        let owner = resolve_face(&model, part, &partition, referenced, &mut out);
        assert_eq!(owner, Some(EntityId(200)));
        assert_eq!(out, vec![EntityId(201)]);
    }

    /// Builds a final group where faces `a` and `b` share edge `edge_id`.
    fn shared_edge_group(
        model: &mut CadModel,
        part: PartKey,
        group_id: u32,
        edge_id: u32,
        ops_a: &[i32],
        ops_b: &[i32],
    ) -> GroupKey {
        let (group, skin) = solid_group(model, part, group_id);
        let a = lineage_face(model, skin, group_id + 10, ops_a);
        let la = model.add_loop(a, EntityId(group_id + 11)).unwrap();
        model.add_edge(la, EntityId(edge_id), true).unwrap();
        let b = lineage_face(model, skin, group_id + 20, ops_b);
        let lb = model.add_loop(b, EntityId(group_id + 21)).unwrap();
        model.add_edge(lb, EntityId(edge_id), true).unwrap();
        group
    }

    #[test]
    fn shared_edge_resolves_when_both_sides_pair_up() {
        let mut model = CadModel::new();
        let part = model.add_part();
        shared_edge_group(&mut model, part, 100, 50, &[1], &[2]);
        let fgroup = shared_edge_group(&mut model, part, 200, 300, &[1], &[2]);

        let partition = TranslatablePartition::new(&model, &[fgroup]);
        let mut out = Vec::new();
        let owner = resolve_edge(&model, part, &partition, EntityId(50), &mut out);
        assert_eq!(owner, Some(EntityId(200)));
        assert_eq!(out, vec![EntityId(300)]);
    }

    #[test]
    fn shared_edge_excluded_when_one_side_fails() {
        let mut model = CadModel::new();
        let part = model.add_part();
        shared_edge_group(&mut model, part, 100, 50, &[1], &[2]);
        // Only one of the two final adjacent faces has a matching lineage.
        let fgroup = shared_edge_group(&mut model, part, 200, 300, &[1], &[99]);

        let partition = TranslatablePartition::new(&model, &[fgroup]);
        let mut out = Vec::new();
        let owner = resolve_edge(&model, part, &partition, EntityId(50), &mut out);
        assert_eq!(owner, None);
        assert!(out.is_empty());
    }

    #[test]
    fn symmetric_pairing_is_accepted() {
        let mut model = CadModel::new();
        let part = model.add_part();
        shared_edge_group(&mut model, part, 100, 50, &[1], &[2]);
        // Final adjacent faces carry the lineages in swapped order.
        let fgroup = shared_edge_group(&mut model, part, 200, 300, &[2], &[1]);

        let partition = TranslatablePartition::new(&model, &[fgroup]);
        let mut out = Vec::new();
        let owner = resolve_edge(&model, part, &partition, EntityId(50), &mut out);
        assert_eq!(owner, Some(EntityId(200)));
        assert_eq!(out, vec![EntityId(300)]);
    }

    #[test]
    fn unshared_final_edge_never_completes_a_pair() {
        let mut model = CadModel::new();
        let part = model.add_part();
        shared_edge_group(&mut model, part, 100, 50, &[1], &[2]);

        // Final group where the edge id appears under a single face only.
        let (fgroup, fskin) = solid_group(&mut model, part, 200);
        let f = lineage_face(&mut model, fskin, 210, &[1]);
        let l = model.add_loop(f, EntityId(211)).unwrap();
        model.add_edge(l, EntityId(300), true).unwrap();

        let partition = TranslatablePartition::new(&model, &[fgroup]);
        let mut out = Vec::new();
        assert_eq!(
            resolve_edge(&model, part, &partition, EntityId(50), &mut out),
            None
        );
        assert!(out.is_empty());
    }
}
