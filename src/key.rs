//! Type-safe key bindings for bubbletea-rs components.
//!
//! A `Binding` couples one or more key presses with the help text shown for
//! them, and can be matched against incoming `KeyMsg` events. The `KeyMap`
//! trait is implemented by components (and application models) that want
//! their bindings rendered by the `help` component.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_accordion::key::Binding;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let toggle = Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
//!     .with_help("enter/space", "toggle section");
//!
//! let force_quit = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+c", "quit");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus its modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key code (character, arrow, enter, ...).
    pub code: KeyCode,
    /// Modifier keys held for this press.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short label for the key(s), e.g. "↑/k".
    pub key: String,
    /// Description of the action, e.g. "up".
    pub desc: String,
}

/// A key binding: the key presses that trigger it plus its help text.
///
/// Bindings can be disabled, which both stops them from matching and hides
/// them from help views.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding for the given key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text shown for this binding.
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Creates the binding in a disabled state.
    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether this binding is currently active.
    pub fn enabled(&self) -> bool {
        !self.disabled
    }

    /// The help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Reports whether a key message triggers this binding.
    ///
    /// Shift is ignored for character keys so that a binding on `G` matches
    /// regardless of whether the terminal reports the shift modifier.
    pub fn matches(&self, key_msg: &KeyMsg) -> bool {
        if self.disabled {
            return false;
        }
        self.keys.iter().any(|kp| {
            if kp.code != key_msg.key {
                return false;
            }
            if matches!(kp.code, KeyCode::Char(_)) && kp.modifiers == KeyModifiers::NONE {
                key_msg.modifiers.difference(KeyModifiers::SHIFT) == KeyModifiers::NONE
            } else {
                kp.modifiers == key_msg.modifiers
            }
        })
    }
}

/// Reports whether a key message matches any of the given bindings.
pub fn matches(key_msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(key_msg))
}

/// A set of key bindings that can be rendered as help text.
///
/// Components implement this to expose their bindings to `help::Model`.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings for the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_binding_matches_any_key() {
        let b = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
        assert!(b.matches(&key(KeyCode::Up, KeyModifiers::NONE)));
        assert!(b.matches(&key(KeyCode::Char('k'), KeyModifiers::NONE)));
        assert!(!b.matches(&key(KeyCode::Down, KeyModifiers::NONE)));
    }

    #[test]
    fn test_binding_requires_modifiers() {
        let b = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        assert!(b.matches(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&key(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_shift_ignored_for_characters() {
        let b = Binding::new(vec![KeyCode::Char('G')]);
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::SHIFT)));
        assert!(b.matches(&key(KeyCode::Char('G'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let b = Binding::new(vec![KeyCode::Enter]).with_disabled();
        assert!(!b.matches(&key(KeyCode::Enter, KeyModifiers::NONE)));
        assert!(!b.enabled());
    }
}
