// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Final/auxiliary partition of the translatable groups.

use cadlink_model::{CadModel, GroupKey, GroupKind};

/// Split of the translatable groups for one translation job.
///
/// Solid groups are the authoritative final bodies; surface and curve
/// groups are auxiliary direct-membership sources. Computed once, both
/// sequences keep discovery order and stay fixed for the partition's
/// lifetime.
#[derive(Debug, Clone, Default)]
pub struct TranslatablePartition {
    final_bodies: Vec<GroupKey>,
    other_translatables: Vec<GroupKey>,
}

impl TranslatablePartition {
    /// Partitions the given groups by kind. Stale keys are skipped.
    pub fn new(model: &CadModel, groups: &[GroupKey]) -> Self {
        let mut final_bodies = Vec::new();
        let mut other_translatables = Vec::new();
        for &gk in groups {
            let Some(group) = model.group(gk) else {
                continue;
            };
            match group.kind {
                GroupKind::Solid => final_bodies.push(gk),
                GroupKind::Surface | GroupKind::Curve => other_translatables.push(gk),
            }
        }
        Self {
            final_bodies,
            other_translatables,
        }
    }

    /// The final solid-body groups, in discovery order.
    pub fn final_bodies(&self) -> &[GroupKey] {
        &self.final_bodies
    }

    /// The auxiliary surface/curve groups, in discovery order.
    pub fn other_translatables(&self) -> &[GroupKey] {
        &self.other_translatables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadlink_model::EntityId;

    #[test]
    fn groups_split_by_kind_in_order() {
        let mut model = CadModel::new();
        let part = model.add_part();
        let s1 = model
            .add_group(part, EntityId(1), "Body1", GroupKind::Solid, false)
            .unwrap();
        let f1 = model
            .add_group(part, EntityId(2), "Surf", GroupKind::Surface, false)
            .unwrap();
        let s2 = model
            .add_group(part, EntityId(3), "Body2", GroupKind::Solid, false)
            .unwrap();
        let c1 = model
            .add_group(part, EntityId(4), "Curves", GroupKind::Curve, false)
            .unwrap();

        let partition = TranslatablePartition::new(&model, &[s1, f1, s2, c1]);
        assert_eq!(partition.final_bodies(), &[s1, s2]);
        assert_eq!(partition.other_translatables(), &[f1, c1]);
    }

    #[test]
    fn stale_group_keys_are_skipped() {
        let mut model = CadModel::new();
        let part = model.add_part();
        let good = model
            .add_group(part, EntityId(1), "Body", GroupKind::Solid, false)
            .unwrap();

        // A key slot the target model never allocated.
        let mut other = CadModel::new();
        let other_part = other.add_part();
        let _ = other
            .add_group(other_part, EntityId(8), "X", GroupKind::Solid, false)
            .unwrap();
        let stale = other
            .add_group(other_part, EntityId(9), "Y", GroupKind::Solid, false)
            .unwrap();

        let partition = TranslatablePartition::new(&model, &[stale, good]);
        assert_eq!(partition.final_bodies(), &[good]);
        assert!(partition.other_translatables().is_empty());
    }
}
