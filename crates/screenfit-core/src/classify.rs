use crate::category::DeviceCategory;
use crate::viewport::Viewport;

/// One bounding-box test in the ordered classification table.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub category: DeviceCategory,
    /// Human-readable form of `test`.
    pub condition: &'static str,
    test: fn(f64, f64) -> bool,
}

impl ClassificationRule {
    pub fn matches(&self, width: f64, height: f64) -> bool {
        (self.test)(width, height)
    }
}

/// Ordered, first-match-wins rules. Each rule may assume every rule above it
/// has already failed, so it only needs to exclude the previous tier's bound.
///
/// The thresholds are hand-tuned and callers rely on them exactly; keep them
/// as they are.
pub const CLASSIFICATION_RULES: [ClassificationRule; 8] = [
    ClassificationRule {
        category: DeviceCategory::Desktop,
        condition: "width > 1440 || height > 1800",
        test: desktop,
    },
    ClassificationRule {
        category: DeviceCategory::LargeTablet,
        condition: "width <= 1440 && height <= 1800 && (width > 1024 || height > 1366)",
        test: large_tablet,
    },
    ClassificationRule {
        category: DeviceCategory::Tablet,
        condition: "width <= 1024 && height <= 1366 && (width > 768 || height > 1024)",
        test: tablet,
    },
    ClassificationRule {
        category: DeviceCategory::SmallTablet,
        condition: "width <= 768 && height <= 1024 && (width > 600 || height > 960)",
        test: small_tablet,
    },
    // Must stay ahead of the large-mobile rule, which would otherwise absorb it.
    ClassificationRule {
        category: DeviceCategory::Custom600x800,
        condition: "width == 600 && height == 800",
        test: custom_600x800,
    },
    ClassificationRule {
        category: DeviceCategory::LargeMobile,
        condition: "width <= 600 && height <= 960 && (width > 480 || height > 854)",
        test: large_mobile,
    },
    ClassificationRule {
        category: DeviceCategory::SmallMobile,
        condition: "width <= 360 && height <= 640",
        test: small_mobile,
    },
    ClassificationRule {
        category: DeviceCategory::Mobile,
        condition: "otherwise",
        test: residual,
    },
];

/// Classify a viewport size into exactly one [`DeviceCategory`].
///
/// Total over all inputs: boundaries are inclusive to the smaller category,
/// and anything no rule claims (NaN included) falls through to `Mobile`.
pub fn classify(width: f64, height: f64) -> DeviceCategory {
    let category = CLASSIFICATION_RULES
        .iter()
        .find(|rule| rule.matches(width, height))
        .map_or(DeviceCategory::Mobile, |rule| rule.category);
    tracing::trace!(width, height, %category, "Classified viewport");
    category
}

pub fn classify_viewport(viewport: Viewport) -> DeviceCategory {
    classify(viewport.width, viewport.height)
}

fn desktop(w: f64, h: f64) -> bool {
    w > 1440.0 || h > 1800.0
}

fn large_tablet(w: f64, h: f64) -> bool {
    w <= 1440.0 && h <= 1800.0 && (w > 1024.0 || h > 1366.0)
}

fn tablet(w: f64, h: f64) -> bool {
    w <= 1024.0 && h <= 1366.0 && (w > 768.0 || h > 1024.0)
}

fn small_tablet(w: f64, h: f64) -> bool {
    w <= 768.0 && h <= 1024.0 && (w > 600.0 || h > 960.0)
}

#[allow(clippy::float_cmp)]
fn custom_600x800(w: f64, h: f64) -> bool {
    w == 600.0 && h == 800.0
}

fn large_mobile(w: f64, h: f64) -> bool {
    w <= 600.0 && h <= 960.0 && (w > 480.0 || h > 854.0)
}

fn small_mobile(w: f64, h: f64) -> bool {
    w <= 360.0 && h <= 640.0
}

fn residual(_: f64, _: f64) -> bool {
    true
}
