//! Interactive terminal session.
//!
//! Each character typed is a key press; uppercase letters are pressed with
//! Shift. A line starting with `!` is a command instead. Input is read on a
//! separate thread so that queued twists keep playing while the user types.

use std::io::BufRead;
use std::sync::mpsc;

use cubeswap_prefs::Preferences;
use cubeswap_view::{CubeSimulation, KeyPress, KeyboardInput, Trigger};
use eyre::Result;
use web_time::{Duration, Instant};

const FRAME_DURATION: Duration = Duration::from_millis(16);

const HELP: &str = "\
type face letters to twist (uppercase for counterclockwise), or a command:
  !scramble  !solve  !reset  !help  !quit";

/// Line of input from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Keys(String),
    Trigger(Trigger),
    Reset,
    Help,
    Quit,
}
impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        match line.strip_prefix('!') {
            None => Some(Command::Keys(line.to_string())),
            Some("reset") => Some(Command::Reset),
            Some("help") => Some(Command::Help),
            Some("quit") => Some(Command::Quit),
            Some(other) => other.parse().ok().map(Command::Trigger),
        }
    }
}

pub(crate) fn run(prefs: &Preferences, color: bool) -> Result<()> {
    let mut sim = CubeSimulation::new(prefs);
    let mut input = KeyboardInput::new();

    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    log::error!("error reading input: {e}");
                    break;
                }
            }
        }
    });

    println!("{HELP}");
    print!("{}", crate::net::render(sim.cube(), color));

    loop {
        let mut changed = false;
        match rx.recv_timeout(FRAME_DURATION) {
            Ok(line) => match Command::parse(&line) {
                Some(Command::Keys(keys)) => {
                    for key in keys.chars().filter(|c| !c.is_whitespace()) {
                        let press = KeyPress {
                            key,
                            shift: key.is_ascii_uppercase(),
                            repeat: false,
                        };
                        if let Some(twist) = input.key_down(press, sim.prefs()) {
                            sim.do_twist(twist);
                            changed = true;
                        }
                        // Terminals report no key releases.
                        input.key_up(key);
                    }
                }
                Some(Command::Trigger(Trigger::Solve)) => {
                    crate::cli::print_report(&sim.solve());
                }
                Some(Command::Trigger(trigger)) => sim.trigger(trigger),
                Some(Command::Reset) => {
                    sim.reset();
                    changed = true;
                }
                Some(Command::Help) => println!("{HELP}"),
                Some(Command::Quit) => break,
                None => println!("unknown command {line:?}"),
            },
            Err(mpsc::RecvTimeoutError::Timeout) => (),
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                if !sim.is_busy() {
                    break;
                }
                std::thread::sleep(FRAME_DURATION);
            }
        }

        changed |= sim.step(Instant::now());
        if changed {
            if sim.is_busy() {
                println!("{} twists queued", sim.queued_twists());
            }
            print!("{}", crate::net::render(sim.cube(), color));
            if sim.cube().is_solved() && !sim.is_busy() {
                println!("solved!");
            }
        }
    }

    Ok(())
}
