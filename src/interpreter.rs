//! Interpreter that applies driving-command strings to a [`VehicleState`].
//!
//! [`Command::scan`] walks a string left to right and yields recognized
//! commands, assembling the two-character `TR` sequence and skipping
//! everything else. [`dispatch`] applies one [`Command`] against the active
//! vehicle type and drive flags; [`interpret`] drives a whole string. The
//! [`Executor`](crate::Executor) facade wraps these pieces behind its
//! two-method contract.

use crate::pose::VehicleState;
use crate::profile::{TurnStyle, VehicleProfile, VehicleType};
use std::iter::Peekable;
use std::str::Chars;

/// A recognized driving command.
///
/// Commands map to single characters, except [`TurnRound`](Self::TurnRound)
/// which the scanner assembles from the two-character sequence `TR`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Move the profile distance in the travel direction (`M`).
    Move,
    /// Turn 90° left, composed per the active turn style (`L`).
    TurnLeft,
    /// Turn 90° right, composed per the active turn style (`R`).
    TurnRight,
    /// Toggle fast mode (`F`).
    Fast,
    /// Toggle reverse mode (`B`).
    Reverse,
    /// Toggle between the normal car and the sports car (`N`).
    ToggleSports,
    /// Toggle bus mode on or off (`U`).
    ToggleBus,
    /// Turn round through two quarter turns (`TR`).
    TurnRound,
}

impl Command {
    /// Returns an iterator over the commands recognized in `input`.
    ///
    /// Unrecognized characters are skipped, including a `T` that is not
    /// immediately followed by `R`.
    pub fn scan(input: &str) -> Commands<'_> {
        Commands {
            chars: input.chars().peekable(),
        }
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            'M' => Some(Command::Move),
            'L' => Some(Command::TurnLeft),
            'R' => Some(Command::TurnRight),
            'F' => Some(Command::Fast),
            'B' => Some(Command::Reverse),
            'N' => Some(Command::ToggleSports),
            'U' => Some(Command::ToggleBus),
            _ => None,
        }
    }
}

/// Iterator over the commands recognized in a string.
///
/// Created by [`Command::scan`].
#[derive(Clone, Debug)]
pub struct Commands<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Iterator for Commands<'_> {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        loop {
            let c = self.chars.next()?;
            if c == 'T' {
                // Only the exact pair TR forms a command; a bare T is noise
                // and scanning resumes at the character after it.
                if self.chars.peek() == Some(&'R') {
                    self.chars.next();
                    return Some(Command::TurnRound);
                }
                continue;
            }
            if let Some(command) = Command::from_char(c) {
                return Some(command);
            }
        }
    }
}

/// The vehicle-type state the dispatcher transitions.
///
/// Tracks the active type plus the type to resume when bus mode is toggled
/// back off, so a sports car that becomes a bus steps back out as a sports
/// car.
#[derive(Clone, Copy, Debug)]
pub struct VehicleSelection {
    current: VehicleType,
    resume: VehicleType,
}

impl Default for VehicleSelection {
    fn default() -> Self {
        Self {
            current: VehicleType::Normal,
            resume: VehicleType::Normal,
        }
    }
}

impl VehicleSelection {
    /// Starts at the normal car.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active vehicle type.
    pub fn current(&self) -> VehicleType {
        self.current
    }

    /// The active type's movement profile.
    pub fn profile(&self) -> &'static VehicleProfile {
        self.current.profile()
    }

    /// Applies the `N` rule: normal and sports swap, a bus stays a bus.
    /// Returns whether a switch happened.
    fn toggle_sports(&mut self) -> bool {
        match self.current {
            VehicleType::Normal => {
                self.current = VehicleType::Sports;
                true
            }
            VehicleType::Sports => {
                self.current = VehicleType::Normal;
                true
            }
            VehicleType::Bus => false,
        }
    }

    /// Applies the `U` rule: a non-bus type is remembered and becomes a
    /// bus, a bus becomes the remembered type again. Always a switch.
    fn toggle_bus(&mut self) -> bool {
        if self.current == VehicleType::Bus {
            self.current = self.resume;
        } else {
            self.resume = self.current;
            self.current = VehicleType::Bus;
        }
        true
    }
}

/// Rotation sense of a turn command, before reverse-mode mirroring.
#[derive(Clone, Copy)]
enum Steer {
    Left,
    Right,
}

impl Steer {
    fn flipped(self) -> Self {
        match self {
            Steer::Left => Steer::Right,
            Steer::Right => Steer::Left,
        }
    }
}

/// Applies every command recognized in `commands`, left to right.
pub fn interpret(commands: &str, selection: &mut VehicleSelection, state: &mut VehicleState) {
    for command in Command::scan(commands) {
        dispatch(command, selection, state);
    }
}

/// Applies a single command against the current vehicle type and drive
/// flags.
///
/// Total: no command fails, and commands that are inapplicable in the
/// current state (like the sports toggle while a bus) do nothing.
pub fn dispatch(command: Command, selection: &mut VehicleSelection, state: &mut VehicleState) {
    match command {
        Command::Fast => state.toggle_fast(),
        Command::Reverse => state.toggle_reverse(),
        Command::Move => {
            // Discrete per-cell steps, not one multi-cell jump, so the
            // intermediate state always matches single-step semantics.
            for _ in 0..selection.profile().distance(state.fast) {
                state.step();
            }
        }
        Command::TurnLeft => turn(Steer::Left, selection.profile(), state),
        Command::TurnRight => turn(Steer::Right, selection.profile(), state),
        Command::TurnRound => turn_round(state),
        Command::ToggleSports => {
            if selection.toggle_sports() {
                state.reset_drive();
            }
        }
        Command::ToggleBus => {
            if selection.toggle_bus() {
                state.reset_drive();
            }
        }
    }
}

/// Executes a turn command under the profile's composition rule.
///
/// While reverse mode is on the steer direction mirrors: a commanded left
/// rotates the heading right and vice versa. The coupled moves still
/// travel backward.
fn turn(steer: Steer, profile: &VehicleProfile, state: &mut VehicleState) {
    match profile.turn_style {
        TurnStyle::TurnOnly => {
            if state.fast {
                state.step();
            }
            rotate(steer, state);
        }
        TurnStyle::MoveThroughTurn => {
            if state.fast {
                state.step();
            }
            rotate(steer, state);
            state.step();
        }
        TurnStyle::MoveThenTurn => {
            for _ in 0..profile.distance(state.fast) {
                state.step();
            }
            rotate(steer, state);
        }
    }
}

/// Rotates the heading, mirroring the steer while reverse mode is on.
fn rotate(steer: Steer, state: &mut VehicleState) {
    let steer = if state.reverse { steer.flipped() } else { steer };
    match steer {
        Steer::Left => state.turn_left(),
        Steer::Right => state.turn_right(),
    }
}

/// Executes the compound turn-round maneuver.
///
/// Ignored while reversing. At normal speed: quarter turn left, one cell
/// forward, quarter turn left. In fast mode one forward cell leads the
/// same sequence. The cells are raw single advances, never profile-scaled,
/// and the maneuver is identical for every vehicle type.
fn turn_round(state: &mut VehicleState) {
    if state.reverse {
        return;
    }
    if state.fast {
        state.advance();
    }
    state.turn_left();
    state.advance();
    state.turn_left();
}
