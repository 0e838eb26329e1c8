//! Scroll Targeter - picks the topmost failing field and requests a scroll.
//!
//! The engine only computes a target offset and a duration; the animated
//! transition itself is the host's job, behind the [`Animator`] trait.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::state::ErrorState;

pub const SCROLL_DURATION: Duration = Duration::from_millis(500);

/// Which context the target offset is computed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollTargetKind {
    /// The page itself; offsets are adjusted by the fixed header height.
    #[default]
    Page,
    /// A custom scrolling container; offsets are relative to the container
    /// and adjusted by the field's ancestor block instead of a header.
    Container,
}

/// Vertical metrics for one field's anchor block, as measured by the host.
///
/// In page mode the anchor is the field's parent; in container mode it is
/// the ancestor matched by the configured `parent_selector`. `top` is the
/// anchor's bounding top in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMetrics {
    pub top: f64,
    pub height: f64,
}

/// Host capability: resolve field positions within the scrolling context.
pub trait FieldGeometry {
    /// Metrics for a field's anchor, or None when the host cannot locate it.
    fn metrics(&self, vid: &str) -> Option<FieldMetrics>;

    /// Current scroll position of the scrolling context.
    fn scroll_position(&self) -> f64;

    /// Fixed header height, page mode only.
    fn header_height(&self) -> f64 {
        0.0
    }
}

/// A computed scroll: absolute target offset plus animation duration.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRequest {
    pub offset: f64,
    pub duration: Duration,
}

/// Host capability: execute the animated transition.
pub trait Animator {
    fn scroll_to(&mut self, request: ScrollRequest);
}

/// Scan the field-level error keys, resolve each to an offset in the
/// scrolling context, and return the topmost reachable one. Condition-level
/// keys are skipped, as are non-positive offsets (fields already above the
/// scrollable origin). Returns None when no offset is positive.
pub fn first_error_target(
    errors: &ErrorState,
    kind: ScrollTargetKind,
    geometry: &dyn FieldGeometry,
) -> Option<ScrollRequest> {
    let mut best: Option<f64> = None;
    for vid in errors.field_keys() {
        let Some(metrics) = geometry.metrics(vid) else {
            continue;
        };
        let offset = match kind {
            ScrollTargetKind::Page => {
                metrics.top + geometry.scroll_position() - geometry.header_height()
            }
            ScrollTargetKind::Container => {
                geometry.scroll_position() + metrics.top - metrics.height
            }
        };
        if offset <= 0.0 {
            continue;
        }
        if best.map_or(true, |b| offset < b) {
            best = Some(offset);
        }
    }
    best.map(|offset| ScrollRequest {
        offset,
        duration: SCROLL_DURATION,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedGeometry {
        metrics: HashMap<String, FieldMetrics>,
        scroll: f64,
        header: f64,
    }

    impl FieldGeometry for FixedGeometry {
        fn metrics(&self, vid: &str) -> Option<FieldMetrics> {
            self.metrics.get(vid).copied()
        }
        fn scroll_position(&self) -> f64 {
            self.scroll
        }
        fn header_height(&self) -> f64 {
            self.header
        }
    }

    fn geometry(entries: &[(&str, f64, f64)], scroll: f64, header: f64) -> FixedGeometry {
        FixedGeometry {
            metrics: entries
                .iter()
                .map(|(vid, top, height)| {
                    (vid.to_string(), FieldMetrics { top: *top, height: *height })
                })
                .collect(),
            scroll,
            header,
        }
    }

    #[test]
    fn test_topmost_field_wins() {
        let mut errors = ErrorState::new();
        errors.add_field_error("low");
        errors.add_field_error("high");
        let geo = geometry(&[("low", 900.0, 20.0), ("high", 300.0, 20.0)], 100.0, 50.0);
        let request = first_error_target(&errors, ScrollTargetKind::Page, &geo).unwrap();
        assert_eq!(request.offset, 300.0 + 100.0 - 50.0);
        assert_eq!(request.duration, SCROLL_DURATION);
    }

    #[test]
    fn test_condition_keys_ignored() {
        let mut errors = ErrorState::new();
        errors.add_condition_error("a", "len");
        // only the field-level key "a" is resolved, "a-len" is not looked up
        let geo = geometry(&[("a", 200.0, 10.0), ("a-len", 5.0, 5.0)], 0.0, 0.0);
        let request = first_error_target(&errors, ScrollTargetKind::Page, &geo).unwrap();
        assert_eq!(request.offset, 200.0);
    }

    #[test]
    fn test_container_mode_offset() {
        let mut errors = ErrorState::new();
        errors.add_field_error("a");
        let geo = geometry(&[("a", 120.0, 40.0)], 60.0, 0.0);
        let request = first_error_target(&errors, ScrollTargetKind::Container, &geo).unwrap();
        assert_eq!(request.offset, 60.0 + 120.0 - 40.0);
    }

    #[test]
    fn test_no_errors_no_request() {
        let errors = ErrorState::new();
        let geo = geometry(&[("a", 100.0, 10.0)], 0.0, 0.0);
        assert!(first_error_target(&errors, ScrollTargetKind::Page, &geo).is_none());
    }

    #[test]
    fn test_non_positive_offset_suppressed() {
        let mut errors = ErrorState::new();
        errors.add_field_error("a");
        let geo = geometry(&[("a", 30.0, 10.0)], 0.0, 50.0);
        assert!(first_error_target(&errors, ScrollTargetKind::Page, &geo).is_none());
    }

    #[test]
    fn test_negative_candidate_does_not_mask_positive() {
        let mut errors = ErrorState::new();
        errors.add_field_error("above");
        errors.add_field_error("below");
        // "above" resolves to a negative offset; the targeter must still
        // scroll to the reachable field
        let geo = geometry(&[("above", -5.0, 0.0), ("below", 300.0, 0.0)], 0.0, 0.0);
        let request = first_error_target(&errors, ScrollTargetKind::Page, &geo).unwrap();
        assert_eq!(request.offset, 300.0);
    }
}
