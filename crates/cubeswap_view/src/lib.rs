//! Cube interaction state manager, to ensure consistent feel across
//! frontends.
//!
//! Frontends own a [`CubeSimulation`], feed it input through
//! [`KeyboardInput`] and [`Trigger`]s, and call [`CubeSimulation::step()`]
//! once per frame before drawing [`CubeSimulation::cube()`].

mod input;
mod simulation;

pub use input::{KeyPress, KeyboardInput, Trigger};
pub use simulation::CubeSimulation;
