//! Sparse per-category overrides with fixed fallback chains.
//!
//! Each category has a hand-specified chain of categories to try, in order,
//! before falling back to the caller's mandatory default. The chains are
//! asymmetric and are not a "nearest size" search.

use crate::category::DeviceCategory;

use DeviceCategory::*;

/// Fallback chains, indexed by [`DeviceCategory::ALL`] order. Each chain
/// starts with its own category.
const FALLBACK_CHAINS: [&[DeviceCategory]; 8] = [
    &[SmallMobile, Mobile],
    &[Mobile],
    &[LargeMobile, Mobile],
    &[Custom600x800, SmallTablet, Mobile],
    &[SmallTablet, Tablet, LargeMobile, Mobile],
    &[Tablet, SmallTablet],
    &[LargeTablet, Tablet],
    &[Desktop, LargeTablet, Tablet],
];

/// Categories consulted, in order, when resolving a value for `category`.
pub fn fallback_chain(category: DeviceCategory) -> &'static [DeviceCategory] {
    FALLBACK_CHAINS[category.index()]
}

/// A sparse category → value map plus a mandatory fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct Overrides<T> {
    entries: [Option<T>; 8],
    fallback: T,
}

impl<T> Overrides<T> {
    pub fn new(fallback: T) -> Self {
        Self {
            entries: Default::default(),
            fallback,
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, category: DeviceCategory, value: T) -> Self {
        self.set(category, value);
        self
    }

    /// Insert or replace the value for `category`, returning the old one.
    pub fn set(&mut self, category: DeviceCategory, value: T) -> Option<T> {
        self.entries[category.index()].replace(value)
    }

    pub fn get(&self, category: DeviceCategory) -> Option<&T> {
        self.entries[category.index()].as_ref()
    }

    pub fn fallback(&self) -> &T {
        &self.fallback
    }

    /// Categories that carry an explicit value.
    pub fn defined(&self) -> impl Iterator<Item = DeviceCategory> + '_ {
        DeviceCategory::ALL
            .into_iter()
            .filter(|c| self.entries[c.index()].is_some())
    }

    /// First value defined along `category`'s fallback chain, else the
    /// fallback.
    pub fn resolve(&self, category: DeviceCategory) -> &T {
        let found = fallback_chain(category).iter().find_map(|source| {
            let value = self.entries[source.index()].as_ref()?;
            tracing::trace!(%category, %source, "Resolved override");
            Some(value)
        });
        found.unwrap_or_else(|| {
            tracing::trace!(%category, "Override chain exhausted, using fallback");
            &self.fallback
        })
    }

    /// The category whose value [`Overrides::resolve`] would pick, or `None`
    /// when the fallback is used.
    pub fn resolve_source(&self, category: DeviceCategory) -> Option<DeviceCategory> {
        fallback_chain(category)
            .iter()
            .copied()
            .find(|c| self.entries[c.index()].is_some())
    }

    /// Consume the set and return the resolved value by ownership.
    pub fn into_resolved(self, category: DeviceCategory) -> T {
        let Self {
            mut entries,
            fallback,
        } = self;
        fallback_chain(category)
            .iter()
            .find_map(|c| entries[c.index()].take())
            .unwrap_or(fallback)
    }
}

impl<T> Extend<(DeviceCategory, T)> for Overrides<T> {
    fn extend<I: IntoIterator<Item = (DeviceCategory, T)>>(&mut self, iter: I) {
        for (category, value) in iter {
            self.set(category, value);
        }
    }
}
