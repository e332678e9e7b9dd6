//! Core index types

use core::fmt;
use core::num::TryFromIntError;

use static_assertions::{assert_eq_size, const_assert_eq};

/// Handle of a record inside caller-owned storage
///
/// Linkage fields store handles instead of pointers, so the tree never
/// aliases the caller's records.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a handle from a storage index
    ///
    /// `index` must fit in a `u32`. This is only checked in debug builds;
    /// release builds truncate. Use `NodeId::try_from` for untrusted indices.
    #[inline]
    pub const fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize);
        Self(index as u32)
    }

    /// Storage index of this handle
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl TryFrom<usize> for NodeId {
    type Error = TryFromIntError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u32::try_from(index).map(Self)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Red-black node color
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl Color {
    pub const fn is_red(self) -> bool {
        matches!(self, Color::Red)
    }

    pub const fn is_black(self) -> bool {
        matches!(self, Color::Black)
    }
}

/// Child side of a node, also the direction of travel for navigation
///
/// `Left` leads toward the minimum and `Right` toward the maximum. Mirrored
/// algorithms are written once and take a `Direction`.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Left = 0,
    Right = 1,
}

impl Direction {
    /// Both directions, `Left` first
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    /// The mirror image of this direction
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Array slot for per-direction tables
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

/// Whether a tree accepts several nodes that compare equal
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Equal keys are rejected; insertion reports the existing node
    Unique,
    /// Equal keys are kept in insertion order
    #[default]
    Multiset,
}

impl Mode {
    pub const fn is_unique(self) -> bool {
        matches!(self, Mode::Unique)
    }
}

assert_eq_size!(NodeId, u32);
assert_eq_size!(Color, u8);
assert_eq_size!(Direction, u8);
const_assert_eq!(Direction::Left as usize, 0);
const_assert_eq!(Direction::Right as usize, 1);
