//! Places of interest listed by the engine.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use geo::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Category;

/// Stable identifier of a [`Place`].
///
/// Catalogs use either integer or string identifiers; both are accepted and
/// serialised in their original JSON form. Integers are signed, so negative
/// ids such as `-3` stay numeric.
///
/// # Examples
/// ```
/// use nearby_core::PlaceId;
///
/// let numeric: PlaceId = "42".parse().unwrap();
/// assert_eq!(numeric, PlaceId::Number(42));
/// let text: PlaceId = "fort-aguada".parse().unwrap();
/// assert_eq!(text.to_string(), "fort-aguada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum PlaceId {
    /// Integer identifier.
    Number(i64),
    /// Free-form string identifier.
    Text(String),
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl FromStr for PlaceId {
    type Err = Infallible;

    /// Integers parse as [`PlaceId::Number`]; anything else is kept as text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<i64>()
            .map_or_else(|_| Self::Text(s.to_owned()), Self::Number))
    }
}

impl From<i64> for PlaceId {
    fn from(id: i64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for PlaceId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for PlaceId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

/// Anything with a position on the map.
///
/// Route primitives are generic over this trait so they can order places,
/// references to places or bare coordinates alike.
pub trait Located {
    /// Position of the item.
    fn location(&self) -> Coord<f64>;
}

impl Located for Coord<f64> {
    fn location(&self) -> Coord<f64> {
        *self
    }
}

impl<T: Located + ?Sized> Located for &T {
    fn location(&self) -> Coord<f64> {
        (**self).location()
    }
}

/// A point of interest.
///
/// Only `id`, `category` and `location` matter to route planning; the
/// remaining fields are display metadata carried through untouched.
///
/// # Examples
/// ```
/// use nearby_core::{Place, PlaceId, lat_lon};
///
/// let place = Place::new(3_i64, "Basilica of Bom Jesus", "Heritage", lat_lon(15.5009, 73.9116))
///     .with_tags(["church", "unesco"]);
/// assert_eq!(place.id, PlaceId::Number(3));
/// assert_eq!(place.category.as_str(), "Heritage");
/// assert_eq!(place.tags.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "PlaceRecord", into = "PlaceRecord")
)]
pub struct Place {
    /// Unique identifier.
    pub id: PlaceId,
    /// Display name.
    pub name: String,
    /// Category label.
    pub category: Category,
    /// WGS84 position with `x = longitude` and `y = latitude`.
    pub location: Coord<f64>,
    /// Free-text description.
    pub description: String,
    /// Image file name or URL.
    pub image: Option<String>,
    /// Visitor rating.
    pub rating: Option<f32>,
    /// Search tags.
    pub tags: Vec<String>,
}

impl Place {
    /// Construct a place without display metadata.
    #[must_use]
    pub fn new(
        id: impl Into<PlaceId>,
        name: impl Into<String>,
        category: impl Into<Category>,
        location: Coord<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            location,
            description: String::new(),
            image: None,
            rating: None,
            tags: Vec::new(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the search tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Set the image reference.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }
}

impl Located for Place {
    fn location(&self) -> Coord<f64> {
        self.location
    }
}

/// Flat JSON shape of a catalog entry.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct PlaceRecord {
    id: PlaceId,
    name: String,
    category: Category,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rating: Option<f32>,
    #[serde(default)]
    tags: Vec<String>,
}

#[cfg(feature = "serde")]
impl From<PlaceRecord> for Place {
    fn from(record: PlaceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            category: record.category,
            location: crate::lat_lon(record.latitude, record.longitude),
            description: record.description,
            image: record.image,
            rating: record.rating,
            tags: record.tags,
        }
    }
}

#[cfg(feature = "serde")]
impl From<Place> for PlaceRecord {
    fn from(place: Place) -> Self {
        Self {
            id: place.id,
            name: place.name,
            category: place.category,
            latitude: place.location.y,
            longitude: place.location.x,
            description: place.description,
            image: place.image,
            rating: place.rating,
            tags: place.tags,
        }
    }
}
