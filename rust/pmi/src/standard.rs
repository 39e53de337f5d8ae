// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Drawing-standard classification for annotation sets.

/// Drawing standards recognized on annotation sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawingStandard {
    Iso,
    Ansi,
    Asme,
    Jis,
    Unknown,
}

impl DrawingStandard {
    /// Classifies a drawing-standard name.
    ///
    /// Matching is case-sensitive substring containment in fixed priority
    /// order. "CER" and "CEG1" are custom standards created from ISO (their
    /// parent standard), so they classify as ISO. An unrecognized name is
    /// flagged and classifies as [`DrawingStandard::Unknown`].
    pub fn classify(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return DrawingStandard::Unknown;
        };

        if name.contains("ISO") || name.contains("CER") || name.contains("CEG1") {
            DrawingStandard::Iso
        } else if name.contains("ANSI") {
            DrawingStandard::Ansi
        } else if name.contains("ASME") {
            DrawingStandard::Asme
        } else if name.contains("JIS") {
            DrawingStandard::Jis
        } else {
            tracing::warn!(name, "unknown drawing standard");
            DrawingStandard::Unknown
        }
    }

    /// Whether the leader-anchor convention of this standard is the ISO one.
    ///
    /// For ISO representation the leader end point targets the center of
    /// the text; ASME is the only standard whose convention differs (the
    /// leader targets the left/right bottom of the text).
    pub fn is_iso_representation(self) -> bool {
        match self {
            DrawingStandard::Asme => false,
            DrawingStandard::Ansi | DrawingStandard::Iso | DrawingStandard::Jis => true,
            DrawingStandard::Unknown => {
                tracing::warn!("unknown drawing standard");
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iso_family_names() {
        assert_eq!(DrawingStandard::classify(Some("ISO")), DrawingStandard::Iso);
        assert_eq!(
            DrawingStandard::classify(Some("ISO-16792")),
            DrawingStandard::Iso
        );
        assert_eq!(DrawingStandard::classify(Some("CER")), DrawingStandard::Iso);
        assert_eq!(
            DrawingStandard::classify(Some("CEG1")),
            DrawingStandard::Iso
        );
    }

    #[test]
    fn remaining_standards_in_priority_order() {
        assert_eq!(
            DrawingStandard::classify(Some("ANSI Y14.5")),
            DrawingStandard::Ansi
        );
        assert_eq!(
            DrawingStandard::classify(Some("ASME Y14.41")),
            DrawingStandard::Asme
        );
        assert_eq!(
            DrawingStandard::classify(Some("JIS B 0001")),
            DrawingStandard::Jis
        );
    }

    #[test]
    fn iso_wins_over_later_matches() {
        // Both substrings present; the ISO check runs first.
        assert_eq!(
            DrawingStandard::classify(Some("ANSI-ISO hybrid")),
            DrawingStandard::Iso
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(
            DrawingStandard::classify(Some("iso")),
            DrawingStandard::Unknown
        );
    }

    #[test]
    fn absent_or_unrecognized_names() {
        assert_eq!(DrawingStandard::classify(None), DrawingStandard::Unknown);
        assert_eq!(
            DrawingStandard::classify(Some("COMPANY-42")),
            DrawingStandard::Unknown
        );
    }

    #[test]
    fn asme_is_the_odd_one_out() {
        assert!(!DrawingStandard::Asme.is_iso_representation());
        assert!(DrawingStandard::Iso.is_iso_representation());
        assert!(DrawingStandard::Ansi.is_iso_representation());
        assert!(DrawingStandard::Jis.is_iso_representation());
        assert!(DrawingStandard::Unknown.is_iso_representation());
    }
}
