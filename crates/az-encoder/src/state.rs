//! Search states and the per-position state array.

use az_core::Mode;

use crate::binary_shift::MAX_RUN;
use crate::token::TokenId;

/// One candidate encoding of the input consumed so far.
///
/// `bit_count` is exactly what `chain` emits, except that the header of an
/// open binary run (`binary_count > 0`) is not yet charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    pub chain: Option<TokenId>,
    /// Current character mode; for an open run, the mode the run returns to.
    pub mode: Mode,
    pub binary_start: usize,
    pub binary_count: usize,
    pub bit_count: usize,
}

impl State {
    pub fn initial() -> Self {
        Self { chain: None, mode: Mode::Upper, binary_start: 0, binary_count: 0, bit_count: 0 }
    }

    pub fn is_open(&self) -> bool {
        self.binary_count > 0
    }

    pub fn slot(&self) -> Slot {
        Slot { mode: self.mode, open: self.is_open() }
    }
}

/// State array key: the cost to finish depends only on the mode and on
/// whether a binary run is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    pub mode: Mode,
    pub open: bool,
}

impl Slot {
    pub fn closed(mode: Mode) -> Self {
        Self { mode, open: false }
    }

    pub fn open(mode: Mode) -> Self {
        Self { mode, open: true }
    }

    fn index(self) -> usize {
        self.mode.index() + if self.open { Mode::CHARACTER.len() } else { 0 }
    }
}

/// Best state per slot at one input position.
#[derive(Debug, Clone, Default)]
pub struct StateArray {
    slots: [Option<State>; 10],
}

impl StateArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// The array at position 0: only closed UPPER is reachable.
    pub fn initial() -> Self {
        let mut array = Self::new();
        array.offer(State::initial());
        array
    }

    pub fn get(&self, slot: Slot) -> Option<&State> {
        self.slots[slot.index()].as_ref()
    }

    /// Whether a candidate with this cost (and run length, for open slots)
    /// would replace the current occupant of `slot`.
    pub fn accepts(&self, slot: Slot, bit_count: usize, binary_count: usize) -> bool {
        match &self.slots[slot.index()] {
            None => true,
            Some(held) if slot.open => {
                bit_count < held.bit_count
                    || (bit_count == held.bit_count && binary_count > held.binary_count)
            }
            Some(held) => bit_count < held.bit_count,
        }
    }

    /// Keep `state` if it beats the occupant of its slot. Returns whether it was kept.
    pub fn offer(&mut self, state: State) -> bool {
        assert!(state.mode.is_character(), "state mode must be a character mode");
        assert!(state.binary_count <= MAX_RUN, "binary run of {} bytes", state.binary_count);
        let slot = state.slot();
        if !self.accepts(slot, state.bit_count, state.binary_count) {
            return false;
        }
        self.slots[slot.index()] = Some(state);
        true
    }

    pub fn reachable(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn closed_states(&self) -> impl Iterator<Item = State> + '_ {
        self.slots[..Mode::CHARACTER.len()].iter().flatten().copied()
    }

    pub fn open_states(&self) -> impl Iterator<Item = State> + '_ {
        self.slots[Mode::CHARACTER.len()..].iter().flatten().copied()
    }

    /// Cheapest closed state; ties keep the earliest mode in table order.
    ///
    /// # Panics
    /// If no closed state is reachable, which the search never allows.
    pub fn best(&self) -> State {
        let mut best: Option<State> = None;
        for state in self.closed_states() {
            if best.map_or(true, |b| state.bit_count < b.bit_count) {
                best = Some(state);
            }
        }
        match best {
            Some(state) => state,
            None => panic!("state array has no reachable closed state"),
        }
    }
}
