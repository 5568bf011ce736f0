//! Flattens a token chain into the final bit sequence.

use az_core::BitList;

use crate::binary_shift;
use crate::token::{Token, TokenArena, TokenId};

/// Emit the chain ending at `head`. Binary tokens copy their bytes from `data`.
pub fn emit(arena: &TokenArena, head: Option<TokenId>, data: &[u8]) -> BitList {
    let tokens = arena.chain(head);
    let capacity = tokens.iter().map(Token::bit_len).sum();
    let mut bits = BitList::with_capacity(capacity);
    for token in tokens {
        match token {
            Token::Simple(cw) => bits.append(cw.value, cw.width),
            Token::BinaryShift { start, count } => {
                binary_shift::emit(&mut bits, &data[start..start + count]);
            }
        }
    }
    bits
}
