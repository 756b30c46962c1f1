//! Grid addressing: the [`Coord`] type.
//!
//! Cells are addressed as `(row, col)`. Rows grow downwards and columns grow
//! to the right, so "up" is `row - 1`.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

/// A `(row, col)` cell address.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (dr, dc).
    #[inline]
    pub const fn shift(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// The four axis-aligned neighbours (up, right, down, left).
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        [
            Self::new(self.row - 1, self.col),
            Self::new(self.row, self.col + 1),
            Self::new(self.row + 1, self.col),
            Self::new(self.row, self.col - 1),
        ]
    }

    /// Whether `other` is exactly one axis-aligned step away.
    #[inline]
    pub fn is_adjacent_4(self, other: Coord) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

/// Error returned when a string is not a `row,col` pair.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid coordinate {0:?}: expected \"row,col\"")]
pub struct ParseCoordError(pub String);

impl FromStr for Coord {
    type Err = ParseCoordError;

    /// Parse `"row,col"`, optionally wrapped in parentheses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordError(s.to_string());
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (r, c) = inner.split_once(',').ok_or_else(err)?;
        let row = r.trim().parse().map_err(|_| err())?;
        let col = c.trim().parse().map_err(|_| err())?;
        Ok(Self::new(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coord_arithmetic() {
        let a = Coord::new(3, 4);
        let b = Coord::new(1, 2);
        assert_eq!(a + b, Coord::new(4, 6));
        assert_eq!(a - b, Coord::new(2, 2));
        assert_eq!(a.shift(-1, 1), Coord::new(2, 5));
    }

    #[test]
    fn neighbors_are_up_right_down_left() {
        let c = Coord::new(5, 5);
        assert_eq!(
            c.neighbors_4(),
            [
                Coord::new(4, 5),
                Coord::new(5, 6),
                Coord::new(6, 5),
                Coord::new(5, 4),
            ]
        );
        assert!(c.neighbors_4().iter().all(|&n| c.is_adjacent_4(n)));
        assert!(!c.is_adjacent_4(Coord::new(6, 6)));
        assert!(!c.is_adjacent_4(c));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    #[test]
    fn parse_from_str() {
        assert_eq!("2,3".parse::<Coord>(), Ok(Coord::new(2, 3)));
        assert_eq!(" (0, 7) ".parse::<Coord>(), Ok(Coord::new(0, 7)));
        assert!("2;3".parse::<Coord>().is_err());
        assert!("a,b".parse::<Coord>().is_err());
    }

    #[test]
    fn display_and_tuple_conversion() {
        let c: Coord = (2, 9).into();
        assert_eq!(c.to_string(), "(2, 9)");
        assert_eq!(<(i32, i32)>::from(c), (2, 9));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_json_shape() {
        let json = serde_json::to_string(&Coord::new(1, 2)).unwrap();
        assert_eq!(json, r#"{"row":1,"col":2}"#);
    }
}
