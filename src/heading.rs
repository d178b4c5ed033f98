//! Compass heading and its rotation rules.

use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four cardinal compass headings.
///
/// Rotation is cyclic: [`left`](Self::left) walks North → West → South →
/// East → North and [`right`](Self::right) walks the reverse ring. There is
/// no null heading; every operation is total over the four values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Returns the heading 90° counter-clockwise from this one.
    pub fn left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::West => Heading::South,
            Heading::South => Heading::East,
            Heading::East => Heading::North,
        }
    }

    /// Returns the heading 90° clockwise from this one.
    pub fn right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Grid delta for one forward step along this heading.
    ///
    /// North is `+y`, East is `+x`.
    pub fn unit_step(self) -> IVec2 {
        match self {
            Heading::North => IVec2::Y,
            Heading::East => IVec2::X,
            Heading::South => IVec2::NEG_Y,
            Heading::West => IVec2::NEG_X,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        };
        write!(f, "{c}")
    }
}

/// Error returned when a character does not name a cardinal heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownHeading(pub char);

impl fmt::Display for UnknownHeading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown heading character '{}'", self.0)
    }
}

impl std::error::Error for UnknownHeading {}

impl TryFrom<char> for Heading {
    type Error = UnknownHeading;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            other => Err(UnknownHeading(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    #[test]
    fn left_then_right_is_identity() {
        for h in ALL {
            assert_eq!(h.left().right(), h);
            assert_eq!(h.right().left(), h);
        }
    }

    #[test]
    fn four_quarter_turns_return_home() {
        for h in ALL {
            assert_eq!(h.left().left().left().left(), h);
            assert_eq!(h.right().right().right().right(), h);
        }
    }

    #[test]
    fn unit_steps_span_the_grid_axes() {
        assert_eq!(Heading::East.unit_step(), IVec2::new(1, 0));
        assert_eq!(Heading::West.unit_step(), IVec2::new(-1, 0));
        assert_eq!(Heading::North.unit_step(), IVec2::new(0, 1));
        assert_eq!(Heading::South.unit_step(), IVec2::new(0, -1));
    }

    #[test]
    fn heading_char_round_trip() {
        for h in ALL {
            let c = h.to_string().chars().next().unwrap();
            assert_eq!(Heading::try_from(c), Ok(h));
        }
        assert_eq!(Heading::try_from('Q'), Err(UnknownHeading('Q')));
    }
}
