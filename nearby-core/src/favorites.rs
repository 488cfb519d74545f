//! Places a visitor has marked as favourites.
//!
//! Favourites are keyed by [`PlaceId`] only, so they survive catalog reloads
//! as long as the ids stay stable.
//!
//! # Examples
//! ```
//! use nearby_core::{FavoriteSet, PlaceId};
//!
//! let mut favorites = FavoriteSet::new();
//! assert!(favorites.toggle(7_i64));
//! assert!(favorites.contains(&PlaceId::Number(7)));
//! assert!(!favorites.toggle(7_i64));
//! assert!(favorites.is_empty());
//! ```

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::PlaceId;

/// Ids of favourite places, iterated in id order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct FavoriteSet {
    ids: BTreeSet<PlaceId>,
}

impl FavoriteSet {
    /// Construct an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ids: BTreeSet::new(),
        }
    }

    /// Whether `id` is a favourite.
    #[must_use]
    pub fn contains(&self, id: &PlaceId) -> bool {
        self.ids.contains(id)
    }

    /// Mark `id` as a favourite. Returns `false` if it already was one.
    pub fn insert(&mut self, id: impl Into<PlaceId>) -> bool {
        self.ids.insert(id.into())
    }

    /// Unmark `id`. Returns `false` if it was not a favourite.
    pub fn remove(&mut self, id: &PlaceId) -> bool {
        self.ids.remove(id)
    }

    /// Flip the favourite state of `id`.
    ///
    /// Returns `true` when the place is a favourite after the call.
    pub fn toggle(&mut self, id: impl Into<PlaceId>) -> bool {
        let place: PlaceId = id.into();
        if self.ids.remove(&place) {
            false
        } else {
            self.ids.insert(place)
        }
    }

    /// Whether there are no favourites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of favourites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Iterate over favourite ids.
    pub fn iter(&self) -> impl Iterator<Item = &PlaceId> {
        self.ids.iter()
    }
}

impl<I: Into<PlaceId>> FromIterator<I> for FavoriteSet {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<I: Into<PlaceId>> Extend<I> for FavoriteSet {
    fn extend<T: IntoIterator<Item = I>>(&mut self, iter: T) {
        self.ids.extend(iter.into_iter().map(Into::into));
    }
}
