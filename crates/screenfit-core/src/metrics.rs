//! Fixed per-category design constants.

use serde::Serialize;

use crate::category::DeviceCategory;

/// Reference design size used as the scaling denominator for a category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DesignBaseline {
    pub width: f64,
    pub height: f64,
}

impl DesignBaseline {
    const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Indexed by [`DeviceCategory::ALL`] order.
const BASELINES: [DesignBaseline; 8] = [
    DesignBaseline::new(320.0, 568.0),
    DesignBaseline::new(375.0, 812.0),
    DesignBaseline::new(414.0, 896.0),
    DesignBaseline::new(600.0, 800.0),
    DesignBaseline::new(768.0, 1024.0),
    DesignBaseline::new(834.0, 1194.0),
    DesignBaseline::new(1024.0, 1366.0),
    DesignBaseline::new(1440.0, 900.0),
];

/// Indexed by [`DeviceCategory::ALL`] order.
const FONT_MULTIPLIERS: [f64; 8] = [0.90, 1.00, 1.05, 0.90, 1.10, 1.15, 1.20, 1.25];

pub fn baseline(category: DeviceCategory) -> DesignBaseline {
    BASELINES[category.index()]
}

pub fn font_multiplier(category: DeviceCategory) -> f64 {
    FONT_MULTIPLIERS[category.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baselines() {
        assert_eq!(
            baseline(DeviceCategory::SmallMobile),
            DesignBaseline::new(320.0, 568.0)
        );
        assert_eq!(
            baseline(DeviceCategory::Custom600x800),
            DesignBaseline::new(600.0, 800.0)
        );
        assert_eq!(
            baseline(DeviceCategory::Desktop),
            DesignBaseline::new(1440.0, 900.0)
        );
    }

    #[test]
    fn test_font_multipliers() {
        assert_eq!(font_multiplier(DeviceCategory::SmallMobile), 0.90);
        assert_eq!(font_multiplier(DeviceCategory::Mobile), 1.00);
        assert_eq!(font_multiplier(DeviceCategory::Custom600x800), 0.90);
        assert_eq!(font_multiplier(DeviceCategory::Tablet), 1.15);
        assert_eq!(font_multiplier(DeviceCategory::Desktop), 1.25);
    }

    #[test]
    fn test_baselines_are_nonzero() {
        for category in DeviceCategory::ALL {
            let b = baseline(category);
            assert!(b.width > 0.0 && b.height > 0.0, "{category}");
        }
    }
}
