use serde::{Deserialize, Serialize};

/// Available drawing area in logical units, captured once per layout pass.
///
/// No validation is applied: zero, negative and NaN sizes are accepted and
/// classified like any other input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Square viewports count as portrait.
    pub fn orientation(&self) -> Orientation {
        if self.height >= self.width {
            Orientation::Portrait
        } else {
            Orientation::Landscape
        }
    }
}

impl From<(f64, f64)> for Viewport {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Portrait => write!(f, "portrait"),
            Self::Landscape => write!(f, "landscape"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation() {
        assert_eq!(Viewport::new(375.0, 812.0).orientation(), Orientation::Portrait);
        assert_eq!(Viewport::new(1440.0, 900.0).orientation(), Orientation::Landscape);
        assert_eq!(Viewport::new(600.0, 600.0).orientation(), Orientation::Portrait);
    }

    #[test]
    fn test_from_tuple() {
        let vp: Viewport = (600.0, 800.0).into();
        assert_eq!(vp, Viewport::new(600.0, 800.0));
    }
}
