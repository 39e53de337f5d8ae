// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Provenance lineage descriptors for faces.
//!
//! A lineage records the chain of modeling operations that produced a face,
//! as an ordered sequence of lineage groups (each an ordered sequence of
//! operation identifiers). Re-tessellation during translation renumbers
//! faces, but their lineage survives, so two faces that share a lineage
//! group are the "same" face across the intermediate/final boundary.
//!
//! The descriptor is immutable once attached to a face.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// One lineage group: an ordered chain of modeling-operation identifiers.
pub type LineageGroup = SmallVec<[i32; 4]>;

/// Ordered lineage groups attached to a face.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceLineage {
    groups: Vec<LineageGroup>,
}

impl ProvenanceLineage {
    /// Creates an empty lineage (matches nothing).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a lineage with a single group.
    pub fn single(ops: &[i32]) -> Self {
        Self {
            groups: vec![LineageGroup::from_slice(ops)],
        }
    }

    /// Creates a lineage from an ordered sequence of groups.
    pub fn from_groups<I, G>(groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<LineageGroup>,
    {
        Self {
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends a lineage group.
    pub fn push_group(&mut self, ops: impl Into<LineageGroup>) {
        self.groups.push(ops.into());
    }

    /// Returns the lineage groups in order.
    pub fn groups(&self) -> &[LineageGroup] {
        &self.groups
    }

    /// Returns the number of lineage groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// `true` when no groups are recorded.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Decides whether two lineages identify the same face.
    ///
    /// Holds iff some group of `self` and some group of `other` have equal
    /// length and are element-wise identical at every position. Groups are
    /// not assumed sorted; the scan short-circuits on the first satisfying
    /// pair. An empty lineage on either side never matches.
    pub fn matches(&self, other: &ProvenanceLineage) -> bool {
        self.groups
            .iter()
            .any(|a| other.groups.iter().any(|b| a == b))
    }
}
