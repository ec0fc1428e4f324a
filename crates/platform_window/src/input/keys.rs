//! Platform-independent key codes
//!
//! Every backend translates its native key identifiers into [`Key`] before
//! handing them to the input processor. Key ordinals are contiguous from
//! `0` to `Key::COUNT - 1` so the key state table can be a plain array
//! indexed by [`Key::index`].

/// Normalized key code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Key {
    /// Unmapped or unrecognized key
    #[default]
    Unknown,
    /// Escape
    Escape,
    /// Tab
    Tab,
    /// Backspace
    Backspace,
    /// Enter / Return
    Enter,
    /// Insert
    Insert,
    /// Delete
    Delete,
    /// Pause / Break
    Pause,
    /// Print Screen
    PrintScreen,
    /// Home
    Home,
    /// End
    End,
    /// Page Up
    PageUp,
    /// Page Down
    PageDown,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Num Lock
    NumLock,
    /// Scroll Lock
    ScrollLock,
    /// Caps Lock
    CapsLock,
    /// Control (either side)
    Ctrl,
    /// Shift (either side)
    Shift,
    /// Alt (either side)
    Alt,
    /// Meta / Super / Command (either side)
    Meta,
    /// Context menu
    Menu,
    /// Space bar
    Space,
    /// `'`
    Apostrophe,
    /// `,`
    Comma,
    /// `-`
    Minus,
    /// `.`
    Period,
    /// `/`
    Slash,
    /// `;`
    Semicolon,
    /// `=`
    Equal,
    /// `[`
    LeftBracket,
    /// `\`
    Backslash,
    /// `]`
    RightBracket,
    /// `` ` ``
    Grave,
    /// Top-row digit 0
    Key0,
    /// Top-row digit 1
    Key1,
    /// Top-row digit 2
    Key2,
    /// Top-row digit 3
    Key3,
    /// Top-row digit 4
    Key4,
    /// Top-row digit 5
    Key5,
    /// Top-row digit 6
    Key6,
    /// Top-row digit 7
    Key7,
    /// Top-row digit 8
    Key8,
    /// Top-row digit 9
    Key9,
    /// Letter A
    A,
    /// Letter B
    B,
    /// Letter C
    C,
    /// Letter D
    D,
    /// Letter E
    E,
    /// Letter F
    F,
    /// Letter G
    G,
    /// Letter H
    H,
    /// Letter I
    I,
    /// Letter J
    J,
    /// Letter K
    K,
    /// Letter L
    L,
    /// Letter M
    M,
    /// Letter N
    N,
    /// Letter O
    O,
    /// Letter P
    P,
    /// Letter Q
    Q,
    /// Letter R
    R,
    /// Letter S
    S,
    /// Letter T
    T,
    /// Letter U
    U,
    /// Letter V
    V,
    /// Letter W
    W,
    /// Letter X
    X,
    /// Letter Y
    Y,
    /// Letter Z
    Z,
    /// Function key F1
    F1,
    /// Function key F2
    F2,
    /// Function key F3
    F3,
    /// Function key F4
    F4,
    /// Function key F5
    F5,
    /// Function key F6
    F6,
    /// Function key F7
    F7,
    /// Function key F8
    F8,
    /// Function key F9
    F9,
    /// Function key F10
    F10,
    /// Function key F11
    F11,
    /// Function key F12
    F12,
    /// Numeric keypad 0
    Numpad0,
    /// Numeric keypad 1
    Numpad1,
    /// Numeric keypad 2
    Numpad2,
    /// Numeric keypad 3
    Numpad3,
    /// Numeric keypad 4
    Numpad4,
    /// Numeric keypad 5
    Numpad5,
    /// Numeric keypad 6
    Numpad6,
    /// Numeric keypad 7
    Numpad7,
    /// Numeric keypad 8
    Numpad8,
    /// Numeric keypad 9
    Numpad9,
    /// Numeric keypad `.`
    NumpadDecimal,
    /// Numeric keypad `/`
    NumpadDivide,
    /// Numeric keypad `*`
    NumpadMultiply,
    /// Numeric keypad `-`
    NumpadSubtract,
    /// Numeric keypad `+`
    NumpadAdd,
    /// Numeric keypad Enter
    NumpadEnter,
    /// Numeric keypad `=`
    NumpadEqual,
}

impl Key {
    /// Number of key codes, including [`Key::Unknown`]
    pub const COUNT: usize = 102;

    /// Every key in ordinal order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Unknown, Self::Escape, Self::Tab, Self::Backspace, Self::Enter, Self::Insert,
        Self::Delete, Self::Pause, Self::PrintScreen, Self::Home, Self::End, Self::PageUp,
        Self::PageDown, Self::Up, Self::Down, Self::Left, Self::Right, Self::NumLock,
        Self::ScrollLock, Self::CapsLock, Self::Ctrl, Self::Shift, Self::Alt, Self::Meta,
        Self::Menu, Self::Space, Self::Apostrophe, Self::Comma, Self::Minus, Self::Period,
        Self::Slash, Self::Semicolon, Self::Equal, Self::LeftBracket, Self::Backslash,
        Self::RightBracket, Self::Grave, Self::Key0, Self::Key1, Self::Key2, Self::Key3,
        Self::Key4, Self::Key5, Self::Key6, Self::Key7, Self::Key8, Self::Key9, Self::A,
        Self::B, Self::C, Self::D, Self::E, Self::F, Self::G, Self::H, Self::I, Self::J,
        Self::K, Self::L, Self::M, Self::N, Self::O, Self::P, Self::Q, Self::R, Self::S,
        Self::T, Self::U, Self::V, Self::W, Self::X, Self::Y, Self::Z, Self::F1, Self::F2,
        Self::F3, Self::F4, Self::F5, Self::F6, Self::F7, Self::F8, Self::F9, Self::F10,
        Self::F11, Self::F12, Self::Numpad0, Self::Numpad1, Self::Numpad2, Self::Numpad3,
        Self::Numpad4, Self::Numpad5, Self::Numpad6, Self::Numpad7, Self::Numpad8,
        Self::Numpad9, Self::NumpadDecimal, Self::NumpadDivide, Self::NumpadMultiply,
        Self::NumpadSubtract, Self::NumpadAdd, Self::NumpadEnter, Self::NumpadEqual,
    ];

    /// Position of this key in the key state table
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Key with the given table position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Keypad digits `Numpad0` through `Numpad9`, in order
    pub fn numpad_digits() -> &'static [Self] {
        &Self::ALL[Self::Numpad0.index()..=Self::Numpad9.index()]
    }

    /// True for `Numpad0` through `Numpad9`
    pub const fn is_numpad_digit(self) -> bool {
        let index = self.index();
        index >= Self::Numpad0.index() && index <= Self::Numpad9.index()
    }

    /// Letter key for an ASCII letter, either case
    pub fn from_ascii_letter(c: char) -> Option<Self> {
        let c = c.to_ascii_uppercase();
        if c.is_ascii_uppercase() {
            Self::from_index(Self::A.index() + (c as usize - 'A' as usize))
        } else {
            None
        }
    }

    /// Top-row digit key for an ASCII digit
    pub fn from_ascii_digit(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|d| Self::from_index(Self::Key0.index() + d as usize))
    }

    /// Keypad digit key for `0..=9`
    pub fn numpad_digit(digit: u32) -> Option<Self> {
        (digit <= 9).then(|| Self::numpad_digits()[digit as usize])
    }

    /// Function key for `1..=12`
    pub fn function_key(number: u32) -> Option<Self> {
        (1..=12)
            .contains(&number)
            .then(|| Self::ALL[Self::F1.index() + number as usize - 1])
    }
}
