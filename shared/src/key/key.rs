use std::{fmt, str::FromStr};

use crate::key::error::KeyParseError;

/// Number of slots needed to index a pressed-key array by [`Key::code`]
pub const KEY_COUNT: usize = 256;

macro_rules! keys {
    ($($variant:ident = $code:literal => $name:literal),* $(,)?) => {
        /// A physical keyboard key or mouse button.
        ///
        /// `Key::None` is the "no key" sentinel used for empty modifier slots.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum Key {
            $($variant = $code),*
        }

        impl Key {
            pub const ALL: &'static [Key] = &[$(Key::$variant),*];

            pub fn from_code(code: u8) -> Option<Key> {
                match code {
                    $($code => Some(Key::$variant),)*
                    _ => None,
                }
            }

            /// The canonical name used by keybind files
            pub fn name(self) -> &'static str {
                match self {
                    $(Key::$variant => $name),*
                }
            }

            fn from_exact_name(name: &str) -> Option<Key> {
                match name {
                    $($name => Some(Key::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

keys! {
    None = 0 => "None",
    A = 1 => "A",
    B = 2 => "B",
    C = 3 => "C",
    D = 4 => "D",
    E = 5 => "E",
    F = 6 => "F",
    G = 7 => "G",
    H = 8 => "H",
    I = 9 => "I",
    J = 10 => "J",
    K = 11 => "K",
    L = 12 => "L",
    M = 13 => "M",
    N = 14 => "N",
    O = 15 => "O",
    P = 16 => "P",
    Q = 17 => "Q",
    R = 18 => "R",
    S = 19 => "S",
    T = 20 => "T",
    U = 21 => "U",
    V = 22 => "V",
    W = 23 => "W",
    X = 24 => "X",
    Y = 25 => "Y",
    Z = 26 => "Z",
    Digit0 = 27 => "0",
    Digit1 = 28 => "1",
    Digit2 = 29 => "2",
    Digit3 = 30 => "3",
    Digit4 = 31 => "4",
    Digit5 = 32 => "5",
    Digit6 = 33 => "6",
    Digit7 = 34 => "7",
    Digit8 = 35 => "8",
    Digit9 = 36 => "9",
    F1 = 37 => "F1",
    F2 = 38 => "F2",
    F3 = 39 => "F3",
    F4 = 40 => "F4",
    F5 = 41 => "F5",
    F6 = 42 => "F6",
    F7 = 43 => "F7",
    F8 = 44 => "F8",
    F9 = 45 => "F9",
    F10 = 46 => "F10",
    F11 = 47 => "F11",
    F12 = 48 => "F12",
    Space = 49 => "Space",
    Enter = 50 => "Enter",
    Escape = 51 => "Escape",
    Tab = 52 => "Tab",
    Backspace = 53 => "Backspace",
    Up = 54 => "Up",
    Down = 55 => "Down",
    Left = 56 => "Left",
    Right = 57 => "Right",
    Insert = 58 => "Insert",
    Delete = 59 => "Delete",
    Home = 60 => "Home",
    End = 61 => "End",
    PageUp = 62 => "PageUp",
    PageDown = 63 => "PageDown",
    Minus = 64 => "Minus",
    Equals = 65 => "Equals",
    Comma = 66 => "Comma",
    Period = 67 => "Period",
    Slash = 68 => "Slash",
    Backquote = 69 => "Backquote",
    Shift = 100 => "Shift",
    Ctrl = 101 => "Ctrl",
    Alt = 102 => "Alt",
    Meta = 103 => "Meta",
    Mouse1 = 120 => "Mouse1",
    Mouse2 = 121 => "Mouse2",
    Mouse3 = 122 => "Mouse3",
    Mouse4 = 123 => "Mouse4",
    Mouse5 = 124 => "Mouse5",
    WheelUp = 125 => "WheelUp",
    WheelDown = 126 => "WheelDown",
}

impl Key {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }

    pub fn is_none(self) -> bool {
        self == Key::None
    }

    pub fn is_mouse(self) -> bool {
        matches!(
            self,
            Key::Mouse1
                | Key::Mouse2
                | Key::Mouse3
                | Key::Mouse4
                | Key::Mouse5
                | Key::WheelUp
                | Key::WheelDown
        )
    }

    /// Resolves a key name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Key> {
        Key::from_exact_name(name).or_else(|| {
            Key::ALL
                .iter()
                .copied()
                .find(|key| key.name().eq_ignore_ascii_case(name))
        })
    }
}

impl Default for Key {
    fn default() -> Self {
        Key::None
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::from_name(s.trim()).ok_or_else(|| KeyParseError::UnknownKey {
            name: s.to_string(),
        })
    }
}
