//! Geometry snapshot and limit resolution.
//!
//! Both are computed once, inside [`super::ScrollBouncer::bounce`], before
//! the scroll subscription is taken. Limit defaults depend on the snapshot,
//! which is why measurement has to come first.

use crate::config::Limits;
use crate::host::DocumentGeometry;

/// Document and viewport heights, reduced from the host's raw readings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Largest plausible full-document height across the six body/root
    /// scroll/offset/client readings.
    pub total_height: f64,
    /// Visible viewport height.
    pub current_height: f64,
}

impl Dimensions {
    pub fn measure(geometry: &DocumentGeometry) -> Self {
        let total_height = [
            geometry.body_scroll_height,
            geometry.root_scroll_height,
            geometry.body_offset_height,
            geometry.root_offset_height,
            geometry.body_client_height,
            geometry.root_client_height,
        ]
        .into_iter()
        .fold(0.0_f64, f64::max);

        Self {
            total_height,
            current_height: geometry.viewport_height,
        }
    }
}

/// [`Limits`] with every field resolved to a concrete number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLimits {
    pub top: f64,
    pub top_reverse: f64,
    pub bottom: f64,
}

impl ResolvedLimits {
    /// Apply the default-derivation rules: `top` falls back to the viewport
    /// height, `top_reverse` to half of it, `bottom` to the total document
    /// height. Non-finite values count as unset; a `bottom` of zero or less
    /// is kept as-is and disables the bottom rule.
    pub fn resolve(limits: &Limits, dimensions: &Dimensions) -> Self {
        let top = limits
            .top
            .filter(|v| v.is_finite())
            .unwrap_or(dimensions.current_height);
        let top_reverse = limits
            .top_reverse
            .filter(|v| v.is_finite())
            .unwrap_or(dimensions.current_height / 2.0);
        let bottom = limits
            .bottom
            .filter(|v| !v.is_nan())
            .unwrap_or(dimensions.total_height);

        Self {
            top,
            top_reverse,
            bottom,
        }
    }

    pub fn bottom_enabled(&self) -> bool {
        self.bottom > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(total: f64, viewport: f64) -> DocumentGeometry {
        DocumentGeometry {
            body_scroll_height: total,
            root_scroll_height: total - 10.0,
            body_offset_height: total - 25.0,
            root_offset_height: viewport,
            body_client_height: viewport,
            root_client_height: viewport,
            viewport_height: viewport,
        }
    }

    #[test]
    fn test_measure_takes_largest_height() {
        let dims = Dimensions::measure(&geometry(4000.0, 800.0));
        assert_eq!(dims.total_height, 4000.0);
        assert_eq!(dims.current_height, 800.0);
    }

    #[test]
    fn test_unset_limits_fall_back_to_dimensions() {
        let dims = Dimensions::measure(&geometry(4000.0, 800.0));
        let resolved = ResolvedLimits::resolve(&Limits::default(), &dims);
        assert_eq!(resolved.top, 800.0);
        assert_eq!(resolved.top_reverse, 400.0);
        assert_eq!(resolved.bottom, 4000.0);
        assert!(resolved.bottom_enabled());
    }

    #[test]
    fn test_non_finite_limits_count_as_unset() {
        let dims = Dimensions::measure(&geometry(4000.0, 800.0));
        let limits = Limits {
            top: Some(f64::NAN),
            top_reverse: Some(f64::INFINITY),
            bottom: Some(f64::NAN),
        };
        let resolved = ResolvedLimits::resolve(&limits, &dims);
        assert_eq!(resolved.top, 800.0);
        assert_eq!(resolved.top_reverse, 400.0);
        assert_eq!(resolved.bottom, 4000.0);
    }

    #[test]
    fn test_zero_bottom_disables_rule() {
        let dims = Dimensions::measure(&geometry(4000.0, 800.0));
        let limits = Limits {
            top: Some(900.0),
            top_reverse: Some(300.0),
            bottom: Some(0.0),
        };
        let resolved = ResolvedLimits::resolve(&limits, &dims);
        assert_eq!(resolved.top, 900.0);
        assert_eq!(resolved.top_reverse, 300.0);
        assert_eq!(resolved.bottom, 0.0);
        assert!(!resolved.bottom_enabled());
    }
}
