//! Mode-optimization search.
//!
//! Walks the input once. At every position the state array is rebuilt from
//! the previous one: each closed state tries every mode the current byte has
//! a codeword in (latch, shift or direct), the two-byte PUNCT codewords when
//! the lookahead matches, and opening a binary run; each open run is either
//! extended or closed. Only the cheapest state per slot survives.

use az_core::tables::ModeTables;
use az_core::{Codeword, EncoderConfig, Mode, TABLES};
use tracing::trace;

use crate::binary_shift::{self, MAX_RUN};
use crate::state::{Slot, State, StateArray};
use crate::token::{Token, TokenArena};

/// Winning state together with the arena its chain lives in.
#[derive(Debug)]
pub struct SearchOutcome {
    pub arena: TokenArena,
    pub best: State,
}

pub struct StateSearch<'a> {
    data: &'a [u8],
    tables: &'static ModeTables,
    punctuation_pairs: bool,
    arena: TokenArena,
}

impl<'a> StateSearch<'a> {
    pub fn new(data: &'a [u8], config: &EncoderConfig) -> Self {
        Self {
            data,
            tables: &TABLES,
            punctuation_pairs: config.punctuation_pairs,
            arena: TokenArena::with_capacity(data.len() * 4),
        }
    }

    pub fn run(mut self) -> SearchOutcome {
        let mut current = StateArray::initial();
        // candidates that consumed a two-byte pair land one position further
        let mut carried = StateArray::new();
        for index in 0..self.data.len() {
            self.settle(&mut current);
            let mut next = std::mem::take(&mut carried);
            self.expand(index, &current, &mut next, &mut carried);
            trace!(index, reachable = next.reachable(), "state array derived");
            current = next;
        }
        self.settle(&mut current);
        let best = current.best();
        SearchOutcome { arena: self.arena, best }
    }

    /// Offer the closed form of every open run to its return mode's slot.
    fn settle(&mut self, states: &mut StateArray) {
        let open: Vec<State> = states.open_states().collect();
        for run in open {
            let cost = run.bit_count + binary_shift::overhead(run.binary_count);
            if states.accepts(Slot::closed(run.mode), cost, 0) {
                let closed = self.close_run(&run);
                states.offer(closed);
            }
        }
    }

    fn close_run(&mut self, run: &State) -> State {
        debug_assert!(run.is_open());
        let token = Token::BinaryShift { start: run.binary_start, count: run.binary_count };
        let chain = self.arena.push(run.chain, token);
        State {
            chain: Some(chain),
            mode: run.mode,
            binary_start: 0,
            binary_count: 0,
            bit_count: run.bit_count + binary_shift::overhead(run.binary_count),
        }
    }

    fn expand(&mut self, index: usize, current: &StateArray, next: &mut StateArray, carried: &mut StateArray) {
        let byte = self.data[index];

        for run in current.open_states() {
            self.extend_run(&run, index, next);
        }

        let modes = self.tables.classify(byte);
        let pair = match self.data.get(index + 1) {
            Some(&second) if self.punctuation_pairs => self.tables.pair(byte, second),
            _ => None,
        };

        for state in current.closed_states() {
            self.open_run(&state, index, next);

            for target in modes.iter() {
                let Some(code) = self.tables.codeword(target, byte) else {
                    continue;
                };
                let latch = self.tables.latch(state.mode, target);
                self.append(&state, target, latch, code, next);
                if let Some(shift) = self.tables.shift(state.mode, target) {
                    self.append(&state, state.mode, shift, code, next);
                }
            }

            if let Some(code) = pair {
                let latch = self.tables.latch(state.mode, Mode::Punct);
                self.append(&state, Mode::Punct, latch, code, carried);
                if let Some(shift) = self.tables.shift(state.mode, Mode::Punct) {
                    self.append(&state, state.mode, shift, code, carried);
                }
            }
        }
    }

    /// Candidate `state` + `switch` + `code`, ending in `mode`.
    fn append(&mut self, state: &State, mode: Mode, switch: Codeword, code: Codeword, into: &mut StateArray) {
        let cost = state.bit_count + usize::from(switch.width) + usize::from(code.width);
        if !into.accepts(Slot::closed(mode), cost, 0) {
            return;
        }
        let chain = self.arena.push_codeword(state.chain, switch);
        let chain = self.arena.push_codeword(chain, code);
        into.offer(State { chain, mode, binary_start: 0, binary_count: 0, bit_count: cost });
    }

    /// Open a new run over the byte at `index`; the header is charged on close.
    fn open_run(&mut self, state: &State, index: usize, into: &mut StateArray) {
        let (mode, latch) = self.tables.binary_entry(state.mode);
        let cost = state.bit_count + usize::from(latch.width) + 8;
        if !into.accepts(Slot::open(mode), cost, 1) {
            return;
        }
        let chain = self.arena.push_codeword(state.chain, latch);
        into.offer(State { chain, mode, binary_start: index, binary_count: 1, bit_count: cost });
    }

    fn extend_run(&mut self, run: &State, index: usize, into: &mut StateArray) {
        if run.binary_count < MAX_RUN {
            let extended = State { binary_count: run.binary_count + 1, bit_count: run.bit_count + 8, ..*run };
            into.offer(extended);
            return;
        }
        // a full run is closed and a fresh one continues from the same mode
        let cost = run.bit_count + binary_shift::overhead(MAX_RUN) + 8;
        if into.accepts(Slot::open(run.mode), cost, 1) {
            let closed = self.close_run(run);
            into.offer(State { binary_start: index, binary_count: 1, bit_count: cost, ..closed });
        }
    }
}

/// Run the search over `data` with the given configuration.
pub fn search(data: &[u8], config: &EncoderConfig) -> SearchOutcome {
    StateSearch::new(data, config).run()
}
