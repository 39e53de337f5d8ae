// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Annotation shape dispatch: callout object ids and visibility.
//!
//! Only a subset of the annotation kinds a kernel reports produce callouts
//! of their own; the rest (views, leaders, capture sets, …) are containers
//! or decorations handled elsewhere.

use cadlink_model::EntityId;

/// Kinds of annotation shapes a kernel reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    Text,
    FlagNote,
    LinearDimension,
    CoordinateDimension,
    GeometricTolerance,
    SimpleDatum,
    DatumTarget,
    Roughness,
    AnnotationSet,
    ProjectedView,
    ReferenceFrame,
    Leader,
    WeldSymbol,
    Capture,
}

impl AnnotationKind {
    /// Kinds that produce a callout of their own.
    pub fn is_callout(self) -> bool {
        matches!(
            self,
            AnnotationKind::Text
                | AnnotationKind::FlagNote
                | AnnotationKind::LinearDimension
                | AnnotationKind::CoordinateDimension
                | AnnotationKind::GeometricTolerance
                | AnnotationKind::SimpleDatum
                | AnnotationKind::DatumTarget
                | AnnotationKind::Roughness
        )
    }
}

/// Minimal view of an annotation shape as read back from the kernel.
#[derive(Debug, Clone)]
pub struct AnnotationShape {
    pub id: EntityId,
    pub kind: AnnotationKind,
    pub visible: bool,
}

/// Object identifier for the annotation's callout, namespaced under its
/// parent. `None` for kinds that do not produce callouts.
pub fn annotation_object_id(shape: &AnnotationShape, parent_id: &str) -> Option<String> {
    if !shape.kind.is_callout() {
        tracing::warn!(kind = ?shape.kind, "unsupported annotation kind");
        return None;
    }
    Some(format!("{parent_id}/{}_callout", shape.id))
}

/// Visibility of the annotation. Kinds without callouts report not visible.
pub fn is_annotation_visible(shape: &AnnotationShape) -> bool {
    if !shape.kind.is_callout() {
        tracing::warn!(kind = ?shape.kind, "unsupported annotation kind");
        return false;
    }
    shape.visible
}
