// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Structural face equivalence across the translation boundary.
//!
//! Identifier equality fails once geometry is re-tessellated or split, so
//! the final resolver falls back to comparing provenance lineages: the
//! recorded chains of modeling operations that produced each face.

use cadlink_model::{CadModel, FaceKey};

/// Decides whether two faces are structurally the same face.
///
/// A face with no lineage descriptor never matches anything; otherwise the
/// lineage equality law applies (some pair of lineage groups equal in
/// length and element-wise identical).
pub fn faces_equivalent(model: &CadModel, a: FaceKey, b: FaceKey) -> bool {
    match (model.face_lineage(a), model.face_lineage(b)) {
        (Some(la), Some(lb)) => la.matches(lb),
        _ => false,
    }
}
