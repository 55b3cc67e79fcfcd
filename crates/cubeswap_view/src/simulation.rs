use std::collections::VecDeque;

use cubeswap_core::{Cube, SolveReport, Twist, format_twists, random_twists};
use cubeswap_prefs::Preferences;
use rand::Rng;
use web_time::{Duration, Instant};

use crate::Trigger;

/// Twist waiting to be applied by [`CubeSimulation::step()`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct QueuedTwist {
    twist: Twist,
    /// Pause after applying the twist before the next one may be applied.
    pause: Duration,
}

/// Cube simulation, which manages the cube state and paced playback of
/// scrambles and solves.
///
/// Twists requested by the user apply immediately. Scrambles and solves are
/// queued and applied a few at a time by [`Self::step()`] so that frontends
/// can show each intermediate state. User twists do not wait for queued
/// twists, so a user twist during playback lands between two queued ones.
#[derive(Debug, Clone)]
pub struct CubeSimulation {
    /// Cube with every applied twist.
    cube: Cube,
    /// Twists waiting to be applied, in order.
    queue: VecDeque<QueuedTwist>,
    /// Earliest time that the front of the queue may be applied, or `None`
    /// if it may be applied right away.
    ready_at: Option<Instant>,
    /// Preferences used for colors, scramble length, and pacing.
    prefs: Preferences,
}
impl CubeSimulation {
    /// Constructs a new simulation with a solved cube.
    pub fn new(prefs: &Preferences) -> Self {
        Self {
            cube: Cube::with_palette(&prefs.colors),
            queue: VecDeque::new(),
            ready_at: None,
            prefs: prefs.clone(),
        }
    }

    /// Returns the cube, including only twists that have been applied.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }
    /// Returns the preferences in use.
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }
    /// Replaces the preferences and recolors the cube.
    pub fn set_prefs(&mut self, prefs: &Preferences) {
        self.prefs = prefs.clone();
        self.cube.apply_palette(&prefs.colors);
    }
    /// Returns the number of twists waiting to be applied.
    pub fn queued_twists(&self) -> usize {
        self.queue.len()
    }
    /// Returns whether there are twists waiting to be applied.
    pub fn is_busy(&self) -> bool {
        !self.queue.is_empty()
    }
    /// Returns a copy of the cube with every queued twist applied.
    pub fn latest_state(&self) -> Cube {
        let mut cube = self.cube.clone();
        cube.twist_all(self.queue.iter().map(|q| q.twist));
        cube
    }

    /// Applies a twist immediately, without waiting for queued twists.
    pub fn do_twist(&mut self, twist: Twist) {
        if self.is_busy() {
            log::debug!("twist {twist} applied with {} twists queued", self.queue.len());
        }
        self.cube.twist(twist);
    }
    /// Applies a twist given in notation immediately. Unknown notation is
    /// ignored.
    pub fn rotate(&mut self, notation: &str) -> Option<Twist> {
        let twist = notation.parse().ok()?;
        self.do_twist(twist);
        Some(twist)
    }

    /// Handles a trigger command.
    pub fn trigger(&mut self, trigger: Trigger) {
        match trigger {
            Trigger::Scramble => {
                self.scramble();
            }
            Trigger::Solve => {
                self.solve();
            }
        }
    }

    /// Queues a random scramble and returns its twists.
    pub fn scramble(&mut self) -> Vec<Twist> {
        self.scramble_with_rng(&mut rand::rng())
    }
    /// Queues a scramble drawn from `rng` and returns its twists.
    pub fn scramble_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Twist> {
        let twists = random_twists(rng, self.prefs.scramble.length);
        log::info!("queued scramble {}", format_twists(&twists));
        self.enqueue(&twists, self.prefs.scramble.twist_delay());
        twists
    }
    /// Runs the partial solver on the state the cube will be in once every
    /// queued twist is applied, and queues the resulting twists.
    pub fn solve(&mut self) -> SolveReport {
        let report = self.latest_state().solve();
        log::info!("queued {} solver twists", report.twists.len());
        self.enqueue(&report.twists, self.prefs.solver.twist_delay());
        report
    }
    /// Resets the cube to solved and drops every queued twist.
    pub fn reset(&mut self) {
        self.cube = Cube::with_palette(&self.prefs.colors);
        self.queue.clear();
        self.ready_at = None;
    }

    fn enqueue(&mut self, twists: &[Twist], pause: Duration) {
        if self.queue.is_empty() {
            self.ready_at = None;
        }
        self.queue
            .extend(twists.iter().map(|&twist| QueuedTwist { twist, pause }));
    }

    /// Applies every queued twist whose time has come. Returns whether the
    /// cube changed and must be redrawn.
    pub fn step(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(&QueuedTwist { twist, pause }) = self.queue.front() {
            let start = match self.ready_at {
                Some(t) if now < t => break,
                Some(t) => t,
                None => now,
            };
            self.queue.pop_front();
            self.cube.twist(twist);
            self.ready_at = Some(start + pause);
            changed = true;
        }
        if changed && self.queue.is_empty() {
            log::debug!("queued twists done");
        }
        changed
    }
}
