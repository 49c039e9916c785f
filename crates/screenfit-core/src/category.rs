use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScreenError;

/// Discrete screen-size bucket a viewport is classified into.
///
/// Variants are declared smallest to largest, except for the `600x800`
/// carve-out, which sits between the mobile and tablet tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeviceCategory {
    SmallMobile,
    Mobile,
    LargeMobile,
    Custom600x800,
    SmallTablet,
    Tablet,
    LargeTablet,
    Desktop,
}

impl DeviceCategory {
    /// Every category, in declaration order.
    pub const ALL: [DeviceCategory; 8] = [
        Self::SmallMobile,
        Self::Mobile,
        Self::LargeMobile,
        Self::Custom600x800,
        Self::SmallTablet,
        Self::Tablet,
        Self::LargeTablet,
        Self::Desktop,
    ];

    /// Stable camelCase name, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SmallMobile => "smallMobile",
            Self::Mobile => "mobile",
            Self::LargeMobile => "largeMobile",
            Self::Custom600x800 => "custom600x800",
            Self::SmallTablet => "smallTablet",
            Self::Tablet => "tablet",
            Self::LargeTablet => "largeTablet",
            Self::Desktop => "desktop",
        }
    }

    /// Position in [`DeviceCategory::ALL`]; used to index per-category tables.
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn group(&self) -> DeviceGroup {
        match self {
            Self::SmallMobile | Self::Mobile | Self::LargeMobile => DeviceGroup::Mobile,
            // 600x800 counts as a tablet for grouping even though its
            // fallback chain leans on the mobile tier.
            Self::Custom600x800 | Self::SmallTablet | Self::Tablet | Self::LargeTablet => {
                DeviceGroup::Tablet
            }
            Self::Desktop => DeviceGroup::Desktop,
        }
    }

    pub fn is_mobile_group(&self) -> bool {
        self.group() == DeviceGroup::Mobile
    }

    pub fn is_tablet_group(&self) -> bool {
        self.group() == DeviceGroup::Tablet
    }

    pub fn is_desktop(&self) -> bool {
        self.group() == DeviceGroup::Desktop
    }
}

impl fmt::Display for DeviceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DeviceCategory {
    type Err = ScreenError;

    /// Accepts the camelCase names as well as snake_case and kebab-case
    /// spellings, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = fold_name(s);
        Self::ALL
            .into_iter()
            .find(|c| fold_name(c.as_str()) == key)
            .ok_or_else(|| ScreenError::UnknownCategory(s.to_string()))
    }
}

fn fold_name(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Coarse grouping of categories used by the `is_*` predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceGroup {
    Mobile,
    Tablet,
    Desktop,
}

impl fmt::Display for DeviceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        };
        f.pad(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_index() {
        for (i, category) in DeviceCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_groups() {
        use DeviceCategory::*;

        for c in [SmallMobile, Mobile, LargeMobile] {
            assert!(c.is_mobile_group(), "{c} should be mobile");
            assert!(!c.is_tablet_group());
            assert!(!c.is_desktop());
        }
        for c in [Custom600x800, SmallTablet, Tablet, LargeTablet] {
            assert!(c.is_tablet_group(), "{c} should be tablet");
            assert!(!c.is_mobile_group());
            assert!(!c.is_desktop());
        }
        assert!(Desktop.is_desktop());
        assert!(!Desktop.is_tablet_group());
    }

    #[test]
    fn test_parse_spellings() {
        assert_eq!(
            "smallMobile".parse::<DeviceCategory>().unwrap(),
            DeviceCategory::SmallMobile
        );
        assert_eq!(
            "large_tablet".parse::<DeviceCategory>().unwrap(),
            DeviceCategory::LargeTablet
        );
        assert_eq!(
            "Small-Tablet".parse::<DeviceCategory>().unwrap(),
            DeviceCategory::SmallTablet
        );
        assert_eq!(
            "CUSTOM600X800".parse::<DeviceCategory>().unwrap(),
            DeviceCategory::Custom600x800
        );
    }

    #[test]
    fn test_parse_unknown() {
        match "phablet".parse::<DeviceCategory>() {
            Err(ScreenError::UnknownCategory(name)) => assert_eq!(name, "phablet"),
            other => panic!("Expected UnknownCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_serde_names_match_display() {
        for category in DeviceCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{category}\""));
            let back: DeviceCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }
}
