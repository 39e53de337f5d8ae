// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for reference resolution.
//!
//! Only absent inputs at the public entry point are errors. Everything a
//! traversal encounters mid-walk (stale keys, missing lineage, dead
//! branches) degrades to "contributes nothing" so the enclosing translation
//! job keeps moving.

use cadlink_model::{EntityKey, PartKey};

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during reference resolution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The associated entity does not resolve in the model arena.
    #[error("associated entity not found: {0:?}")]
    EntityNotFound(EntityKey),

    /// The owning part does not resolve in the model arena.
    #[error("part not found: {0:?}")]
    PartNotFound(PartKey),
}
