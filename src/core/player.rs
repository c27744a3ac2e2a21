//! Player identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Opaque host-assigned player identifier.
//!
//! ## Seat
//!
//! A draft always binds exactly two players. `Seat` names the two positions,
//! and `SeatMap` stores one value per seat with O(1) indexing.

use serde::{Deserialize, Serialize};
use std::ops::Index;
use uuid::Uuid;

/// Opaque player identifier supplied by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub Uuid);

impl PlayerId {
    /// Wrap an existing UUID.
    #[must_use]
    pub const fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generate a fresh random player ID.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// One of the two positions in a draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Both seats, in order.
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    /// The opposing seat.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// 0 for the first seat, 1 for the second.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::First => write!(f, "first seat"),
            Seat::Second => write!(f, "second seat"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use card_draft::core::{Seat, SeatMap};
///
/// let seats = SeatMap::new("ada", "bo");
///
/// assert_eq!(seats[Seat::Second], "bo");
/// assert_eq!(seats.seat_of(&"ada"), Some(Seat::First));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create from explicit first and second values.
    pub fn new(first: T, second: T) -> Self {
        Self { data: [first, second] }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.into_iter().zip(self.data.iter())
    }

    /// Find the seat holding a value equal to `value`.
    #[must_use]
    pub fn seat_of(&self, value: &T) -> Option<Seat>
    where
        T: PartialEq,
    {
        self.iter().find(|(_, v)| *v == value).map(|(seat, _)| seat)
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}
