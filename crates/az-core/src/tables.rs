//! Static codeword tables: per-mode character codes, latch and shift edges,
//! and the dedicated two-byte punctuation codewords.

use std::sync::LazyLock;

use crate::mode::Mode;

/// B/S codeword value; present in UPPER, LOWER and MIXED.
pub const BINARY_SHIFT: u32 = 31;

/// A codeword value and its width in bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codeword {
    pub value: u32,
    pub width: u8,
}

impl Codeword {
    pub const EMPTY: Codeword = Codeword { value: 0, width: 0 };

    pub const fn new(value: u32, width: u8) -> Self {
        Self { value, width }
    }

    /// This codeword followed by `next`, as one combined codeword.
    pub const fn then(self, next: Codeword) -> Self {
        Self { value: (self.value << next.width) | next.value, width: self.width + next.width }
    }

    pub const fn is_empty(&self) -> bool {
        self.width == 0
    }
}

/// Set of character modes, one bit per [`Mode::CHARACTER`] entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModeSet(u8);

impl ModeSet {
    pub fn contains(self, mode: Mode) -> bool {
        mode.is_character() && self.0 & (1 << mode.index()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn iter(self) -> impl Iterator<Item = Mode> {
        Mode::CHARACTER.into_iter().filter(move |m| self.contains(*m))
    }

    fn insert(&mut self, mode: Mode) {
        self.0 |= 1 << mode.index();
    }
}

const MIXED_CHARS: [u8; 27] = [
    b' ', 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, b'\t', b'\n', 0x0B, 0x0C, b'\r', 0x1B,
    0x1C, 0x1D, 0x1E, 0x1F, b'@', b'\\', b'^', b'_', b'`', b'|', b'~', 0x7F,
];

// Codes 2..=5 are the two-byte sequences.
const PUNCT_CHARS: [(u8, u8); 26] = [
    (b'\r', 1), (b'!', 6), (b'"', 7), (b'#', 8), (b'$', 9), (b'%', 10), (b'&', 11), (b'\'', 12),
    (b'(', 13), (b')', 14), (b'*', 15), (b'+', 16), (b',', 17), (b'-', 18), (b'.', 19),
    (b'/', 20), (b':', 21), (b';', 22), (b'<', 23), (b'=', 24), (b'>', 25), (b'?', 26),
    (b'[', 27), (b']', 28), (b'{', 29), (b'}', 30),
];

const PUNCT_PAIRS: [([u8; 2], u32); 4] = [([b'\r', b'\n'], 2), ([b'.', b' '], 3), ([b',', b' '], 4), ([b':', b' '], 5)];

const U_L: Codeword = Codeword::new(14, 4); // DIGIT -> UPPER
const UPPER_LATCH: Codeword = Codeword::new(29, 5); // MIXED -> UPPER
const PUNCT_UPPER: Codeword = Codeword::new(31, 5); // PUNCT -> UPPER
const L_L: Codeword = Codeword::new(28, 5);
const M_L: Codeword = Codeword::new(29, 5);
const D_L: Codeword = Codeword::new(30, 5);
const P_L: Codeword = Codeword::new(30, 5);

/// Process-wide immutable tables.
pub static TABLES: LazyLock<ModeTables> = LazyLock::new(ModeTables::build);

#[derive(Debug)]
pub struct ModeTables {
    /// Character code per mode; 0 means "no codeword".
    chars: [[u8; 256]; 5],
    latch: [[Codeword; 5]; 5],
    shift: [[Option<Codeword>; 5]; 5],
}

impl ModeTables {
    fn build() -> Self {
        let mut chars = [[0u8; 256]; 5];
        let (upper, lower, digit, mixed, punct) = (0, 1, 2, 3, 4);

        chars[upper][usize::from(b' ')] = 1;
        chars[lower][usize::from(b' ')] = 1;
        chars[digit][usize::from(b' ')] = 1;
        for (i, c) in (b'A'..=b'Z').enumerate() {
            chars[upper][usize::from(c)] = i as u8 + 2;
        }
        for (i, c) in (b'a'..=b'z').enumerate() {
            chars[lower][usize::from(c)] = i as u8 + 2;
        }
        for (i, c) in (b'0'..=b'9').enumerate() {
            chars[digit][usize::from(c)] = i as u8 + 2;
        }
        chars[digit][usize::from(b',')] = 12;
        chars[digit][usize::from(b'.')] = 13;
        for (i, c) in MIXED_CHARS.iter().enumerate() {
            chars[mixed][usize::from(*c)] = i as u8 + 1;
        }
        for (c, code) in PUNCT_CHARS {
            chars[punct][usize::from(c)] = code;
        }

        use Mode::*;
        let mut latch = [[Codeword::EMPTY; 5]; 5];
        let mut set = |from: Mode, to: Mode, cw: Codeword| latch[from.index()][to.index()] = cw;
        set(Upper, Lower, L_L);
        set(Upper, Digit, D_L);
        set(Upper, Mixed, M_L);
        set(Upper, Punct, M_L.then(P_L));
        set(Lower, Upper, D_L.then(U_L));
        set(Lower, Digit, D_L);
        set(Lower, Mixed, M_L);
        set(Lower, Punct, M_L.then(P_L));
        set(Digit, Upper, U_L);
        set(Digit, Lower, U_L.then(L_L));
        set(Digit, Mixed, U_L.then(M_L));
        set(Digit, Punct, U_L.then(M_L).then(P_L));
        set(Mixed, Upper, UPPER_LATCH);
        set(Mixed, Lower, L_L);
        set(Mixed, Digit, UPPER_LATCH.then(D_L));
        set(Mixed, Punct, P_L);
        set(Punct, Upper, PUNCT_UPPER);
        set(Punct, Lower, PUNCT_UPPER.then(L_L));
        set(Punct, Digit, PUNCT_UPPER.then(D_L));
        set(Punct, Mixed, PUNCT_UPPER.then(M_L));

        let mut shift = [[None; 5]; 5];
        shift[Upper.index()][Punct.index()] = Some(Codeword::new(0, 5));
        shift[Lower.index()][Punct.index()] = Some(Codeword::new(0, 5));
        shift[Mixed.index()][Punct.index()] = Some(Codeword::new(0, 5));
        shift[Digit.index()][Punct.index()] = Some(Codeword::new(0, 4));
        shift[Lower.index()][Upper.index()] = Some(Codeword::new(28, 5));
        shift[Digit.index()][Upper.index()] = Some(Codeword::new(15, 4));

        tracing::debug!("aztec mode tables initialised");
        Self { chars, latch, shift }
    }

    /// Codeword for `byte` in `mode`, if the mode has one.
    pub fn codeword(&self, mode: Mode, byte: u8) -> Option<Codeword> {
        if !mode.is_character() {
            return None;
        }
        match self.chars[mode.index()][usize::from(byte)] {
            0 => None,
            code => Some(Codeword::new(u32::from(code), mode.codeword_width())),
        }
    }

    /// Character modes with a direct codeword for `byte`. Binary is implied.
    pub fn classify(&self, byte: u8) -> ModeSet {
        let mut set = ModeSet::default();
        for mode in Mode::CHARACTER {
            if self.chars[mode.index()][usize::from(byte)] != 0 {
                set.insert(mode);
            }
        }
        set
    }

    /// Latch from `from` to `to`; empty when the modes are equal.
    pub fn latch(&self, from: Mode, to: Mode) -> Codeword {
        self.latch[from.index()][to.index()]
    }

    /// Shift from `from` to `to` for a single character, if the edge exists.
    pub fn shift(&self, from: Mode, to: Mode) -> Option<Codeword> {
        self.shift[from.index()][to.index()]
    }

    /// Dedicated PUNCT codeword for the two-byte sequence `first, second`.
    pub fn pair(&self, first: u8, second: u8) -> Option<Codeword> {
        PUNCT_PAIRS
            .iter()
            .find(|(seq, _)| *seq == [first, second])
            .map(|(_, code)| Codeword::new(*code, 5))
    }

    /// Mode a binary run opened from `from` is declared in (and returns to),
    /// with the latch needed to get there. DIGIT and PUNCT have no B/S code.
    pub fn binary_entry(&self, from: Mode) -> (Mode, Codeword) {
        match from {
            Mode::Digit | Mode::Punct => (Mode::Upper, self.latch(from, Mode::Upper)),
            _ => (from, Codeword::EMPTY),
        }
    }
}
