//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! War is strictly two-player. `Side::A` is always checked before `Side::B`
//! wherever the rules need an order (draws, exhaustion checks).
//!
//! ## SideMap
//!
//! One value per side, indexable by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players in a game.
///
/// Serializes as `"p1"` / `"p2"`, the identifiers the prediction endpoint
/// has always returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "p1")]
    A,
    #[serde(rename = "p2")]
    B,
}

impl Side {
    /// Both sides, in check order.
    pub const ALL: [Side; 2] = [Side::A, Side::B];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Stable wire identifier (`"p1"` or `"p2"`).
    #[must_use]
    pub const fn wire_id(self) -> &'static str {
        match self {
            Side::A => "p1",
            Side::B => "p2",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::A => write!(f, "Side A"),
            Side::B => write!(f, "Side B"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use war_engine::core::{Side, SideMap};
///
/// let mut wins: SideMap<u32> = SideMap::with_default();
/// wins[Side::B] += 1;
///
/// assert_eq!(wins[Side::A], 0);
/// assert_eq!(wins[Side::B], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    a: T,
    b: T,
}

impl<T> SideMap<T> {
    /// Create a map from explicit values for each side.
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            a: factory(Side::A),
            b: factory(Side::B),
        }
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::from_fn(|_| T::default())
    }

    /// Iterate over (Side, &T) pairs in check order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::A, &self.a), (Side::B, &self.b)].into_iter()
    }

    /// Transform each value, keeping the side association.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> SideMap<U> {
        SideMap {
            a: f(&self.a),
            b: f(&self.b),
        }
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        match side {
            Side::A => &self.a,
            Side::B => &self.b,
        }
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        match side {
            Side::A => &mut self.a,
            Side::B => &mut self.b,
        }
    }
}
