//! Per-window holder of the latest [`ScreenContext`].
//!
//! Hosts call [`LayoutTracker::observe`] once per layout pass and use the
//! returned [`Transition`] to decide whether a re-layout is needed.

use crate::category::DeviceCategory;
use crate::context::ScreenContext;
use crate::error::ScreenError;
use crate::viewport::Viewport;

/// What happened to the classification on the latest observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// First viewport observed.
    Initial(DeviceCategory),
    /// Viewport may have resized but the category is the same.
    Unchanged(DeviceCategory),
    /// The viewport crossed a category boundary.
    Changed {
        from: DeviceCategory,
        to: DeviceCategory,
    },
}

impl Transition {
    /// Whether dependants should re-run layout with the new category.
    pub fn needs_relayout(&self) -> bool {
        !matches!(self, Self::Unchanged(_))
    }

    pub fn category(&self) -> DeviceCategory {
        match self {
            Self::Initial(c) | Self::Unchanged(c) => *c,
            Self::Changed { to, .. } => *to,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LayoutTracker {
    current: Option<ScreenContext>,
}

impl LayoutTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached context with one built from `viewport`.
    pub fn observe(&mut self, viewport: Viewport) -> Transition {
        let next = ScreenContext::new(viewport);
        match self.current.replace(next) {
            None => Transition::Initial(next.category()),
            Some(prev) if next.category_changed(&prev) => {
                tracing::info!(
                    from = %prev.category(),
                    to = %next.category(),
                    "Device category changed"
                );
                Transition::Changed {
                    from: prev.category(),
                    to: next.category(),
                }
            }
            Some(_) => Transition::Unchanged(next.category()),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    /// The latest context, or [`ScreenError::NotInitialized`] if no viewport
    /// has been observed yet.
    pub fn context(&self) -> Result<&ScreenContext, ScreenError> {
        self.current.as_ref().ok_or(ScreenError::NotInitialized)
    }

    pub fn current_category(&self) -> Result<DeviceCategory, ScreenError> {
        self.context().map(ScreenContext::category)
    }

    /// Drop the cached context, e.g. when the window is torn down.
    pub fn reset(&mut self) {
        self.current = None;
    }
}
