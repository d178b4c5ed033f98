//! Vehicle pose and drive-mode state.

use crate::heading::Heading;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A snapshot of the vehicle's grid position and heading.
///
/// This is the executor's only queryable artifact: drive-mode flags and the
/// active vehicle type stay internal to command interpretation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pose {
    /// Grid cell the vehicle occupies.
    pub position: IVec2,

    /// Direction the nose points.
    pub heading: Heading,
}

impl Pose {
    /// Creates a pose at `(x, y)` facing `heading`.
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self {
            position: IVec2::new(x, y),
            heading,
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            position: IVec2::ZERO,
            heading: Heading::North,
        }
    }
}

/// The mutable state of one simulated vehicle.
///
/// Holds the pose together with the two drive-mode flags. Every movement
/// and turn command is composed from the primitive operations below; each
/// primitive is a single total state mutation with no failure mode.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VehicleState {
    /// Current grid cell.
    pub position: IVec2,

    /// Current heading.
    pub heading: Heading,

    /// Fast mode: movement commands cover the profile's fast distance.
    pub fast: bool,

    /// Reverse mode: travel runs backward and turn commands mirror.
    pub reverse: bool,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::from_pose(Pose::default())
    }
}

impl VehicleState {
    /// Creates a state at `pose` with both drive flags off.
    pub fn from_pose(pose: Pose) -> Self {
        Self {
            position: pose.position,
            heading: pose.heading,
            fast: false,
            reverse: false,
        }
    }

    /// Moves one cell forward along the current heading.
    pub fn advance(&mut self) {
        self.position += self.heading.unit_step();
    }

    /// Moves one cell backward along the current heading.
    pub fn retreat(&mut self) {
        self.position -= self.heading.unit_step();
    }

    /// Moves one cell in the current travel direction: backward while
    /// reverse mode is on, forward otherwise.
    pub fn step(&mut self) {
        if self.reverse {
            self.retreat();
        } else {
            self.advance();
        }
    }

    /// Rotates the heading 90° counter-clockwise.
    pub fn turn_left(&mut self) {
        self.heading = self.heading.left();
    }

    /// Rotates the heading 90° clockwise.
    pub fn turn_right(&mut self) {
        self.heading = self.heading.right();
    }

    /// Flips fast mode.
    pub fn toggle_fast(&mut self) {
        self.fast = !self.fast;
    }

    /// Flips reverse mode.
    pub fn toggle_reverse(&mut self) {
        self.reverse = !self.reverse;
    }

    /// Clears both drive flags. Every vehicle-type switch does this.
    pub fn reset_drive(&mut self) {
        self.fast = false;
        self.reverse = false;
    }

    /// Returns the current pose snapshot.
    pub fn pose(&self) -> Pose {
        Pose {
            position: self.position,
            heading: self.heading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_and_retreat_follow_the_heading() {
        let mut state = VehicleState::from_pose(Pose::new(2, 3, Heading::West));
        state.advance();
        assert_eq!(state.position, IVec2::new(1, 3));
        state.retreat();
        state.retreat();
        assert_eq!(state.position, IVec2::new(3, 3));
        assert_eq!(state.heading, Heading::West);
    }

    #[test]
    fn step_respects_reverse_mode() {
        let mut state = VehicleState::from_pose(Pose::new(0, 0, Heading::North));
        state.step();
        assert_eq!(state.position, IVec2::new(0, 1));
        state.toggle_reverse();
        state.step();
        state.step();
        assert_eq!(state.position, IVec2::new(0, -1));
    }

    #[test]
    fn turns_rotate_without_moving() {
        let mut state = VehicleState::from_pose(Pose::new(5, -5, Heading::East));
        state.turn_left();
        assert_eq!(state.heading, Heading::North);
        state.turn_right();
        state.turn_right();
        assert_eq!(state.heading, Heading::South);
        assert_eq!(state.position, IVec2::new(5, -5));
    }

    #[test]
    fn reset_drive_clears_both_flags() {
        let mut state = VehicleState::default();
        state.toggle_fast();
        state.toggle_reverse();
        assert!(state.fast && state.reverse);
        state.reset_drive();
        assert!(!state.fast);
        assert!(!state.reverse);
    }

    #[test]
    fn pose_survives_a_serde_round_trip() {
        let pose = Pose::new(-2, 2, Heading::North);
        let json = serde_json::to_string(&pose).unwrap();
        let back: Pose = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pose);
    }
}
