use std::collections::HashSet;

use cubeswap_core::Twist;
use cubeswap_prefs::Preferences;
use strum::{Display, EnumString};

/// Command from a frontend control other than a twist key.
#[derive(Debug, Display, EnumString, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum Trigger {
    /// Queue a random scramble.
    Scramble,
    /// Run the partial solver and queue its twists.
    Solve,
}

/// Key press event from a frontend.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Character on the key. Case is ignored.
    pub key: char,
    /// Whether Shift is held, which reverses the twist.
    pub shift: bool,
    /// Whether the platform reported this as an auto-repeat.
    pub repeat: bool,
}
impl KeyPress {
    /// Returns a fresh key press with no modifiers.
    pub fn new(key: char) -> Self {
        Self {
            key,
            shift: false,
            repeat: false,
        }
    }
    /// Returns a fresh key press with Shift held.
    pub fn shifted(key: char) -> Self {
        Self {
            shift: true,
            ..Self::new(key)
        }
    }
}

/// Keyboard state that maps key presses to twists.
///
/// Only the first press of a key twists. Auto-repeat is ignored until the key
/// is released, whether or not the platform marks repeats.
#[derive(Debug, Default, Clone)]
pub struct KeyboardInput {
    held: HashSet<char>,
}
impl KeyboardInput {
    /// Constructs keyboard state with no keys held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles a key press, returning the twist it triggers, if any.
    pub fn key_down(&mut self, press: KeyPress, prefs: &Preferences) -> Option<Twist> {
        let key = press.key.to_ascii_lowercase();
        if press.repeat || !self.held.insert(key) {
            log::trace!("ignoring repeated key {key:?}");
            return None;
        }
        let face = prefs.keybind(key)?;
        Some(match press.shift {
            true => Twist::ccw(face),
            false => Twist::cw(face),
        })
    }
    /// Handles a key release.
    pub fn key_up(&mut self, key: char) {
        self.held.remove(&key.to_ascii_lowercase());
    }
    /// Releases every key, such as when the window loses focus.
    pub fn release_all(&mut self) {
        self.held.clear();
    }
    /// Returns whether a key is held.
    pub fn is_held(&self, key: char) -> bool {
        self.held.contains(&key.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use cubeswap_core::TurnFace;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_key_mapping() {
        let prefs = Preferences::default();
        let mut input = KeyboardInput::new();

        assert_eq!(input.key_down(KeyPress::new('r'), &prefs), Some(Twist::cw(TurnFace::R)));
        input.key_up('r');
        assert_eq!(input.key_down(KeyPress::new('F'), &prefs), Some(Twist::cw(TurnFace::F)));
        input.key_up('F');
        assert_eq!(
            input.key_down(KeyPress::shifted('U'), &prefs),
            Some(Twist::ccw(TurnFace::U)),
        );
        input.key_up('u');
        assert_eq!(input.key_down(KeyPress::new('x'), &prefs), None);
    }

    #[test]
    fn test_repeat_suppression() {
        let prefs = Preferences::default();
        let mut input = KeyboardInput::new();

        assert!(input.key_down(KeyPress::new('d'), &prefs).is_some());
        assert!(input.is_held('D'));
        // Held without a release.
        assert_eq!(input.key_down(KeyPress::new('d'), &prefs), None);
        assert_eq!(input.key_down(KeyPress::shifted('D'), &prefs), None);
        input.key_up('d');
        assert!(input.key_down(KeyPress::new('d'), &prefs).is_some());
        input.key_up('d');

        // Platform repeat flag.
        let repeat = KeyPress {
            repeat: true,
            ..KeyPress::new('l')
        };
        assert_eq!(input.key_down(repeat, &prefs), None);
    }

    #[test]
    fn test_release_all() {
        let prefs = Preferences::default();
        let mut input = KeyboardInput::new();
        input.key_down(KeyPress::new('b'), &prefs);
        input.release_all();
        assert!(!input.is_held('b'));
    }

    #[test]
    fn test_trigger_names() {
        assert_eq!("scramble".parse::<Trigger>(), Ok(Trigger::Scramble));
        assert_eq!(Trigger::Solve.to_string(), "solve");
    }
}
