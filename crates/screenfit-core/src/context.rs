use std::str::FromStr;

use serde::Serialize;

use crate::category::{DeviceCategory, DeviceGroup};
use crate::classify::classify_viewport;
use crate::error::ScreenError;
use crate::metrics::{self, DesignBaseline};
use crate::resolve::Overrides;
use crate::viewport::{Orientation, Viewport};

/// Which proportional formula to apply to a design measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Width,
    Height,
    Font,
}

impl FromStr for ScaleKind {
    type Err = ScreenError;

    /// Exact lowercase names only; a near miss is an error, not a no-op.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "width" => Ok(Self::Width),
            "height" => Ok(Self::Height),
            "font" => Ok(Self::Font),
            other => Err(ScreenError::UnknownScaleKind(other.to_string())),
        }
    }
}

/// Classification of one viewport snapshot, plus the scaling and
/// resolution operations that depend on it.
///
/// A context is built once per layout pass and passed to whatever needs
/// device-aware values. Building a new one is the only way to "re-initialize";
/// nothing carries over from a previous context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenContext {
    viewport: Viewport,
    category: DeviceCategory,
}

impl ScreenContext {
    pub fn new(viewport: Viewport) -> Self {
        let category = classify_viewport(viewport);
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            %category,
            "Screen context initialized"
        );
        Self { viewport, category }
    }

    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(Viewport::new(width, height))
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn category(&self) -> DeviceCategory {
        self.category
    }

    pub fn group(&self) -> DeviceGroup {
        self.category.group()
    }

    pub fn orientation(&self) -> Orientation {
        self.viewport.orientation()
    }

    pub fn is_mobile_group(&self) -> bool {
        self.category.is_mobile_group()
    }

    pub fn is_tablet_group(&self) -> bool {
        self.category.is_tablet_group()
    }

    pub fn is_desktop(&self) -> bool {
        self.category.is_desktop()
    }

    /// Design size the current category's values are authored against.
    pub fn baseline(&self) -> DesignBaseline {
        metrics::baseline(self.category)
    }

    pub fn font_multiplier(&self) -> f64 {
        metrics::font_multiplier(self.category)
    }

    /// Scale a horizontal design measurement to this viewport.
    pub fn scale_width(&self, value: f64) -> f64 {
        value * self.viewport.width / self.baseline().width
    }

    /// Scale a vertical design measurement to this viewport.
    pub fn scale_height(&self, value: f64) -> f64 {
        value * self.viewport.height / self.baseline().height
    }

    /// Width-scaled font size, adjusted by the category's font multiplier.
    pub fn scale_font(&self, value: f64) -> f64 {
        self.scale_width(value) * self.font_multiplier()
    }

    pub fn scale(&self, kind: ScaleKind, value: f64) -> f64 {
        match kind {
            ScaleKind::Width => self.scale_width(value),
            ScaleKind::Height => self.scale_height(value),
            ScaleKind::Font => self.scale_font(value),
        }
    }

    /// `percent` of the viewport width (`50.0` is half).
    pub fn percent_width(&self, percent: f64) -> f64 {
        self.viewport.width * percent / 100.0
    }

    /// `percent` of the viewport height.
    pub fn percent_height(&self, percent: f64) -> f64 {
        self.viewport.height * percent / 100.0
    }

    /// Pick the value for this context's category from a sparse override set.
    pub fn resolve<'a, T>(&self, overrides: &'a Overrides<T>) -> &'a T {
        overrides.resolve(self.category)
    }

    /// Whether moving from `previous` to `self` crosses a category boundary.
    pub fn category_changed(&self, previous: &ScreenContext) -> bool {
        self.category != previous.category
    }
}

impl From<Viewport> for ScreenContext {
    fn from(viewport: Viewport) -> Self {
        Self::new(viewport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_scale_on_baseline_is_identity() {
        let ctx = ScreenContext::from_size(320.0, 568.0);
        assert_eq!(ctx.category(), DeviceCategory::SmallMobile);
        assert!(approx(ctx.scale_width(100.0), 100.0));
        assert!(approx(ctx.scale_height(100.0), 100.0));
        assert!(approx(ctx.scale_font(10.0), 9.0));
    }

    #[test]
    fn test_scale_proportional() {
        // Mobile baseline is 375x812.
        let ctx = ScreenContext::from_size(450.0, 812.0);
        assert_eq!(ctx.category(), DeviceCategory::Mobile);
        assert!(approx(ctx.scale_width(375.0), 450.0));
        assert!(approx(ctx.scale_width(100.0), 120.0));
        assert!(approx(ctx.scale_height(812.0), 812.0));
    }

    #[test]
    fn test_scale_width_is_linear() {
        let ctx = ScreenContext::from_size(1024.0, 700.0);
        for v in [0.0, 1.0, 12.5, 200.0, -40.0] {
            assert!(approx(ctx.scale_width(2.0 * v), 2.0 * ctx.scale_width(v)));
            assert!(approx(ctx.scale_height(2.0 * v), 2.0 * ctx.scale_height(v)));
        }
    }

    #[test]
    fn test_desktop_font_multiplier() {
        let ctx = ScreenContext::from_size(1920.0, 1080.0);
        assert!(ctx.is_desktop());
        for v in [8.0, 14.0, 32.0] {
            assert!(approx(ctx.scale_font(v), ctx.scale_width(v) * 1.25));
        }
    }

    #[test]
    fn test_reinitialization_has_no_memory() {
        let phone = ScreenContext::from_size(375.0, 812.0);
        let desk = ScreenContext::from_size(1920.0, 1080.0);
        assert_ne!(phone.category(), desk.category());
        assert!(desk.category_changed(&phone));
        assert!(!approx(phone.scale_width(100.0), desk.scale_width(100.0)));

        let phone_again = ScreenContext::from_size(375.0, 812.0);
        assert_eq!(phone_again, phone);
        assert!(!phone_again.category_changed(&phone));
    }

    #[test]
    fn test_scale_by_kind() {
        let ctx = ScreenContext::from_size(1920.0, 1080.0);
        let kind: ScaleKind = "width".parse().unwrap();
        assert!(approx(ctx.scale(kind, 100.0), ctx.scale_width(100.0)));
        assert!(approx(ctx.scale(ScaleKind::Height, 90.0), ctx.scale_height(90.0)));
        assert!(approx(ctx.scale(ScaleKind::Font, 16.0), ctx.scale_font(16.0)));
    }

    #[test]
    fn test_unknown_scale_kind() {
        for name in ["Width", "depth", ""] {
            match name.parse::<ScaleKind>() {
                Err(ScreenError::UnknownScaleKind(got)) => assert_eq!(got, name),
                other => panic!("Expected UnknownScaleKind, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_percentages() {
        let ctx = ScreenContext::from_size(800.0, 600.0);
        assert!(approx(ctx.percent_width(50.0), 400.0));
        assert!(approx(ctx.percent_height(10.0), 60.0));
    }

    #[test]
    fn test_resolve_through_context() {
        let overrides = Overrides::new(16.0)
            .with(DeviceCategory::Tablet, 20.0)
            .with(DeviceCategory::Desktop, 24.0);
        assert_eq!(*ScreenContext::from_size(834.0, 1194.0).resolve(&overrides), 20.0);
        assert_eq!(*ScreenContext::from_size(1920.0, 1080.0).resolve(&overrides), 24.0);
        // largeTablet → tablet
        assert_eq!(*ScreenContext::from_size(1280.0, 800.0).resolve(&overrides), 20.0);
        assert_eq!(*ScreenContext::from_size(375.0, 812.0).resolve(&overrides), 16.0);
    }

    #[test]
    fn test_group_predicates() {
        let ctx = ScreenContext::from_size(600.0, 800.0);
        assert_eq!(ctx.category(), DeviceCategory::Custom600x800);
        assert!(ctx.is_tablet_group());
        assert!(!ctx.is_mobile_group());
        assert_eq!(ctx.group(), DeviceGroup::Tablet);
        assert_eq!(ctx.orientation(), Orientation::Portrait);
    }
}
