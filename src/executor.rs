//! Executor facade owning one vehicle's state for its whole lifetime.

use crate::interpreter::{self, VehicleSelection};
use crate::pose::{Pose, VehicleState};

/// Owns the pose, drive flags, and vehicle-type state of one simulated
/// vehicle and applies command strings to them.
///
/// Construction starts the vehicle at the given pose as a normal car with
/// both drive flags off. Neither public operation can fail: commands with
/// no defined meaning are ignored and [`query`](Self::query) only reads.
/// One executor serves one driving thread; there is no shared state.
#[derive(Clone, Debug)]
pub struct Executor {
    state: VehicleState,
    selection: VehicleSelection,
}

impl Executor {
    /// Creates an executor whose vehicle starts at `initial`.
    pub fn new(initial: Pose) -> Self {
        Self {
            state: VehicleState::from_pose(initial),
            selection: VehicleSelection::new(),
        }
    }

    /// Applies `commands` left to right, mutating the owned state.
    pub fn execute(&mut self, commands: &str) {
        interpreter::interpret(commands, &mut self.selection, &mut self.state);
    }

    /// Returns a snapshot of the current position and heading.
    ///
    /// Drive mode and vehicle type stay internal to command interpretation
    /// and are not part of the snapshot.
    pub fn query(&self) -> Pose {
        self.state.pose()
    }
}

impl Default for Executor {
    /// Starts at the origin facing north.
    fn default() -> Self {
        Self::new(Pose::default())
    }
}
