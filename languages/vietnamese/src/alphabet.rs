/// Combining marks that turn a base letter into a separate letter of the
/// alphabet (ă, â, ê, ô, ơ, ư)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Breve,
    Circumflex,
    Horn,
}

impl Modifier {
    pub fn from_mark(mark: char) -> Option<Self> {
        match mark {
            '\u{0306}' => Some(Modifier::Breve),
            '\u{0302}' => Some(Modifier::Circumflex),
            '\u{031B}' => Some(Modifier::Horn),
            _ => None,
        }
    }
}

/// The six tones, in collation order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tone {
    #[default]
    Level,     // ngang
    Grave,     // huyền
    HookAbove, // hỏi
    Tilde,     // ngã
    Acute,     // sắc
    DotBelow,  // nặng
}

impl Tone {
    pub fn from_mark(mark: char) -> Option<Self> {
        match mark {
            '\u{0300}' => Some(Tone::Grave),
            '\u{0309}' => Some(Tone::HookAbove),
            '\u{0303}' => Some(Tone::Tilde),
            '\u{0301}' => Some(Tone::Acute),
            '\u{0323}' => Some(Tone::DotBelow),
            _ => None,
        }
    }
}

/// Vietnamese alphabet extended with f, j, w, z for loanwords and slang.
/// Position in this table is the primary weight.
const ALPHABET: [(char, Option<Modifier>); 33] = [
    ('a', None),
    ('a', Some(Modifier::Breve)),
    ('a', Some(Modifier::Circumflex)),
    ('b', None),
    ('c', None),
    ('d', None),
    ('đ', None),
    ('e', None),
    ('e', Some(Modifier::Circumflex)),
    ('f', None),
    ('g', None),
    ('h', None),
    ('i', None),
    ('j', None),
    ('k', None),
    ('l', None),
    ('m', None),
    ('n', None),
    ('o', None),
    ('o', Some(Modifier::Circumflex)),
    ('o', Some(Modifier::Horn)),
    ('p', None),
    ('q', None),
    ('r', None),
    ('s', None),
    ('t', None),
    ('u', None),
    ('u', Some(Modifier::Horn)),
    ('v', None),
    ('w', None),
    ('x', None),
    ('y', None),
    ('z', None),
];

/// Primary weight of a lowercase base letter with an optional modifier
pub fn letter_index(base: char, modifier: Option<Modifier>) -> Option<u8> {
    ALPHABET
        .iter()
        .position(|&(b, m)| b == base && m == modifier)
        .map(|i| i as u8)
}
