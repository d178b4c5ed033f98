//! Per-vehicle-type movement profiles.

use serde::{Deserialize, Serialize};

/// The selectable vehicle types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Normal,
    Sports,
    Bus,
}

impl VehicleType {
    /// The movement profile this type drives with.
    pub fn profile(self) -> &'static VehicleProfile {
        match self {
            VehicleType::Normal => &VehicleProfile::NORMAL,
            VehicleType::Sports => &VehicleProfile::SPORTS,
            VehicleType::Bus => &VehicleProfile::BUS,
        }
    }
}

/// How a turn command couples with movement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnStyle {
    /// Rotate in place. Fast mode still adds one leading step.
    TurnOnly,

    /// One leading step in fast mode, then the rotation, then always one
    /// trailing step.
    MoveThroughTurn,

    /// The full move distance first, then the rotation. No trailing step.
    MoveThenTurn,
}

/// Immutable movement constants for one vehicle type.
///
/// Profiles are fixed at compile time; the interpreter selects one via
/// [`VehicleType::profile`] and never mutates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Cells covered by a move command at normal speed.
    pub normal_distance: u32,

    /// Cells covered by a move command in fast mode.
    pub fast_distance: u32,

    /// Turn composition rule for this type.
    pub turn_style: TurnStyle,
}

impl VehicleProfile {
    /// Normal car: single-cell moves, turns stay in place.
    pub const NORMAL: Self = Self {
        normal_distance: 1,
        fast_distance: 2,
        turn_style: TurnStyle::TurnOnly,
    };

    /// Sports car: doubled distances, turns always roll through.
    pub const SPORTS: Self = Self {
        normal_distance: 2,
        fast_distance: 4,
        turn_style: TurnStyle::MoveThroughTurn,
    };

    /// Bus: normal-car distances, covers the full move distance before
    /// turning.
    pub const BUS: Self = Self {
        normal_distance: 1,
        fast_distance: 2,
        turn_style: TurnStyle::MoveThenTurn,
    };

    /// Move distance under the given fast flag.
    pub fn distance(&self, fast: bool) -> u32 {
        if fast {
            self.fast_distance
        } else {
            self.normal_distance
        }
    }
}
