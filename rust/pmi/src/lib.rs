// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # CADLink PMI
//!
//! External-facing annotation utilities sharing the entity API:
//! drawing-standard classification, annotation callout dispatch, and
//! nearest-anchor-point selection for leaders.
//!
//! These are lookup/dispatch helpers around the same model the resolution
//! engine reads; none of them participate in reference resolution itself.

pub mod anchor;
pub mod annotation;
pub mod standard;

pub use anchor::{nearest_anchor, AnchorFrame, AnchorOptions, AnchorSlot, Leader};
pub use annotation::{
    annotation_object_id, is_annotation_visible, AnnotationKind, AnnotationShape,
};
pub use standard::DrawingStandard;
