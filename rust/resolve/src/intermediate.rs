// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Locating an entity inside the intermediate solid hierarchy.
//!
//! The intermediate search is independent of the final output: it walks
//! *every* solid group of the owning part, because the entity a consumer
//! references may sit beneath a solid abstraction that never became a
//! final translatable body.

use cadlink_model::{CadModel, EntityId, FaceKey, GroupKind, PartKey};

/// Finds the intermediate face carrying the target identifier.
///
/// Returns the enclosing group's identifier and the face, or `None` when no
/// solid group of the part contains it.
pub fn intermediate_face(
    model: &CadModel,
    part: PartKey,
    target: EntityId,
) -> Option<(EntityId, FaceKey)> {
    let groups = model.part_groups(part)?;
    for &gk in groups {
        let Some(group) = model.group(gk) else {
            continue;
        };
        if group.kind != GroupKind::Solid {
            continue;
        }
        for fk in model.solid_group_faces(gk) {
            if model.face(fk).is_some_and(|f| f.id == target) {
                return Some((group.id, fk));
            }
        }
    }
    None
}

/// Finds the two intermediate faces adjacent to the target edge.
///
/// An edge qualifies as shared only if it reports a co-edge. The walk stops
/// as soon as both adjacent faces are recorded; the returned group
/// identifier is the one enclosing the second. `None` when fewer than two
/// adjacent faces exist, since an unshared edge cannot be resolved.
pub fn intermediate_edge_faces(
    model: &CadModel,
    part: PartKey,
    target: EntityId,
) -> Option<(EntityId, FaceKey, FaceKey)> {
    let groups = model.part_groups(part)?;
    let mut first: Option<FaceKey> = None;
    for &gk in groups {
        let Some(group) = model.group(gk) else {
            continue;
        };
        if group.kind != GroupKind::Solid {
            continue;
        }
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
                    if edge.id != target || !edge.has_co_edge {
                        continue;
                    }
                    match first {
                        None => first = Some(fk),
                        Some(f1) => return Some((group.id, f1, fk)),
                    }
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadlink_model::{GroupKey, SkinKey};

    fn solid_group(model: &mut CadModel, part: PartKey, id: u32) -> (GroupKey, SkinKey) {
        let group = model
            .add_group(part, EntityId(id), "Body", GroupKind::Solid, false)
            .unwrap();
        let solid = model.add_solid(group, EntityId(id + 1)).unwrap();
        let body = model.add_body(solid, EntityId(id + 2)).unwrap();
        let skin = model.add_skin(body, EntityId(id + 3)).unwrap();
        (group, skin)
    }

    #[test]
    fn face_found_in_any_solid_group() {
        let mut model = CadModel::new();
        let part = model.add_part();
        let (_, skin1) = solid_group(&mut model, part, 100);
        let (_, skin2) = solid_group(&mut model, part, 200);
        model.add_face(skin1, EntityId(10)).unwrap();
        let wanted = model.add_face(skin2, EntityId(20)).unwrap();

        let (group_id, found) = intermediate_face(&model, part, EntityId(20)).unwrap();
        assert_eq!(group_id, EntityId(200));
        assert_eq!(found, wanted);
    }

    #[test]
    fn face_absent_from_every_solid_group() {
        let mut model = CadModel::new();
        let part = model.add_part();
        let (_, skin) = solid_group(&mut model, part, 100);
        model.add_face(skin, EntityId(10)).unwrap();
        assert!(intermediate_face(&model, part, EntityId(99)).is_none());
    }

    #[test]
    fn surface_groups_are_not_searched() {
        let mut model = CadModel::new();
        let part = model.add_part();
        let group = model
            .add_group(part, EntityId(100), "Surf", GroupKind::Surface, false)
            .unwrap();
        let skin = model.add_group_skin(group, EntityId(1)).unwrap();
        model.add_face(skin, EntityId(10)).unwrap();
        assert!(intermediate_face(&model, part, EntityId(10)).is_none());
    }

    #[test]
    fn shared_edge_yields_both_adjacent_faces() {
        let mut model = CadModel::new();
        let part = model.add_part();
        let (group, skin) = solid_group(&mut model, part, 100);

        let f1 = model.add_face(skin, EntityId(11)).unwrap();
        let l1 = model.add_loop(f1, EntityId(12)).unwrap();
        model.add_edge(l1, EntityId(50), true).unwrap();

        let f2 = model.add_face(skin, EntityId(21)).unwrap();
        let l2 = model.add_loop(f2, EntityId(22)).unwrap();
        model.add_edge(l2, EntityId(50), true).unwrap();

        let (group_id, a, b) = intermediate_edge_faces(&model, part, EntityId(50)).unwrap();
        assert_eq!(group_id, model.group(group).unwrap().id);
        assert_eq!((a, b), (f1, f2));
    }

    #[test]
    fn edge_without_co_edge_is_ignored() {
        let mut model = CadModel::new();
        let part = model.add_part();
        let (_, skin) = solid_group(&mut model, part, 100);

        let f1 = model.add_face(skin, EntityId(11)).unwrap();
        let l1 = model.add_loop(f1, EntityId(12)).unwrap();
        model.add_edge(l1, EntityId(50), false).unwrap();

        let f2 = model.add_face(skin, EntityId(21)).unwrap();
        let l2 = model.add_loop(f2, EntityId(22)).unwrap();
        model.add_edge(l2, EntityId(50), false).unwrap();

        assert!(intermediate_edge_faces(&model, part, EntityId(50)).is_none());
    }

    #[test]
    fn single_adjacent_face_is_not_enough() {
        let mut model = CadModel::new();
        let part = model.add_part();
        let (_, skin) = solid_group(&mut model, part, 100);

        let f1 = model.add_face(skin, EntityId(11)).unwrap();
        let l1 = model.add_loop(f1, EntityId(12)).unwrap();
        model.add_edge(l1, EntityId(50), true).unwrap();

        assert!(intermediate_edge_faces(&model, part, EntityId(50)).is_none());
    }
}
