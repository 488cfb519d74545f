//! Place categories and the exclusion set used when planning packages.
//!
//! Category labels come from catalog configuration ("Beach", "Heritage",
//! "Nightlife", ...), so they are modelled as case-sensitive labels rather
//! than a closed enum.
//!
//! # Examples
//! ```
//! use nearby_core::{Category, CategoryExclusionSet};
//!
//! let mut excluded = CategoryExclusionSet::new();
//! assert!(excluded.toggle(Category::new("Nightlife")));
//! assert!(excluded.contains(&Category::new("Nightlife")));
//! assert!(!excluded.toggle(Category::new("Nightlife")));
//! assert!(excluded.is_empty());
//! ```

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A category label such as `"Beach"` or `"Heritage"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Category(String);

impl Category {
    /// Filter label that matches every category.
    pub const ALL: &'static str = "All";

    /// Construct a category from its label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Return the label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this category passes a category filter.
    ///
    /// The [`Category::ALL`] filter matches everything; any other filter must
    /// equal the label exactly.
    ///
    /// # Examples
    /// ```
    /// use nearby_core::Category;
    ///
    /// let beach = Category::new("Beach");
    /// assert!(beach.matches_filter("All"));
    /// assert!(beach.matches_filter("Beach"));
    /// assert!(!beach.matches_filter("beach"));
    /// ```
    #[must_use]
    pub fn matches_filter(&self, filter: &str) -> bool {
        filter == Self::ALL || self.0 == filter
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Categories that are ineligible for planning.
///
/// Iteration order is alphabetical so serialised plans are stable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct CategoryExclusionSet {
    excluded: BTreeSet<Category>,
}

impl CategoryExclusionSet {
    /// Construct an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            excluded: BTreeSet::new(),
        }
    }

    /// Whether `category` is excluded.
    #[must_use]
    pub fn contains(&self, category: &Category) -> bool {
        self.excluded.contains(category)
    }

    /// Exclude `category`. Returns `false` if it was already excluded.
    pub fn insert(&mut self, category: impl Into<Category>) -> bool {
        self.excluded.insert(category.into())
    }

    /// Stop excluding `category`. Returns `false` if it was not excluded.
    pub fn remove(&mut self, category: &Category) -> bool {
        self.excluded.remove(category)
    }

    /// Flip the exclusion state of `category`.
    ///
    /// Returns `true` when the category is excluded after the call.
    pub fn toggle(&mut self, category: impl Into<Category>) -> bool {
        let label: Category = category.into();
        if self.excluded.remove(&label) {
            false
        } else {
            self.excluded.insert(label)
        }
    }

    /// Whether nothing is excluded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }

    /// Number of excluded categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.excluded.len()
    }

    /// Iterate over excluded categories in label order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.excluded.iter()
    }
}

impl<C: Into<Category>> FromIterator<C> for CategoryExclusionSet {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            excluded: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<C: Into<Category>> Extend<C> for CategoryExclusionSet {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        self.excluded.extend(iter.into_iter().map(Into::into));
    }
}
