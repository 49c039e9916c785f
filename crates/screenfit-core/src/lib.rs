//! Device-size classification and proportional scaling for UI code.
//!
//! Build a [`ScreenContext`] from the current [`Viewport`] once per layout
//! pass, then ask it for scaled sizes or for per-device values:
//!
//! ```
//! use screenfit_core::{DeviceCategory, Overrides, ScreenContext, Viewport};
//!
//! let ctx = ScreenContext::new(Viewport::new(834.0, 1194.0));
//! assert_eq!(ctx.category(), DeviceCategory::Tablet);
//!
//! let columns = Overrides::new(1).with(DeviceCategory::Tablet, 2);
//! assert_eq!(*ctx.resolve(&columns), 2);
//! assert!((ctx.scale_width(100.0) - 100.0).abs() < 1e-9);
//! ```

pub mod category;
pub mod classify;
pub mod config;
pub mod context;
pub mod error;
pub mod metrics;
pub mod resolve;
pub mod tracker;
pub mod viewport;

pub use category::{DeviceCategory, DeviceGroup};
pub use classify::{classify, classify_viewport, ClassificationRule, CLASSIFICATION_RULES};
pub use config::ScreenfitConfig;
pub use context::{ScaleKind, ScreenContext};
pub use error::ScreenError;
pub use metrics::{baseline, font_multiplier, DesignBaseline};
pub use resolve::{fallback_chain, Overrides};
pub use tracker::{LayoutTracker, Transition};
pub use viewport::{Orientation, Viewport};
