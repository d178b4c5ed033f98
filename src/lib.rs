//! # adas-executor
//!
//! A deterministic driving-command interpreter that steers a simulated
//! vehicle across an integer grid.
//!
//! Single-character command strings mutate one vehicle's position, heading,
//! and drive mode according to the rules of the active vehicle type (normal
//! car, sports car, bus). The [`Executor`] facade owns all of that state and
//! exposes the two-method contract: [`execute`](Executor::execute) applies a
//! command string, [`query`](Executor::query) returns the resulting
//! [`Pose`]. Every operation is total; characters with no defined meaning
//! are silently ignored.

pub mod executor;
pub mod heading;
pub mod interpreter;
pub mod pose;
pub mod profile;

pub use executor::*;
pub use heading::*;
pub use interpreter::*;
pub use pose::*;
pub use profile::*;
