// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for model construction.

use crate::keys::*;

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Part key not found in the arena.
    #[error("part not found: {0:?}")]
    PartNotFound(PartKey),

    /// Group key not found in the arena.
    #[error("group not found: {0:?}")]
    GroupNotFound(GroupKey),

    /// Solid key not found in the arena.
    #[error("solid not found: {0:?}")]
    SolidNotFound(SolidKey),

    /// Body key not found in the arena.
    #[error("body not found: {0:?}")]
    BodyNotFound(BodyKey),

    /// Skin key not found in the arena.
    #[error("skin not found: {0:?}")]
    SkinNotFound(SkinKey),

    /// Face key not found in the arena.
    #[error("face not found: {0:?}")]
    FaceNotFound(FaceKey),

    /// Loop key not found in the arena.
    #[error("loop not found: {0:?}")]
    LoopNotFound(LoopKey),

    /// Composite-curve key not found in the arena.
    #[error("composite curve not found: {0:?}")]
    CurveNotFound(CurveKey),
}
