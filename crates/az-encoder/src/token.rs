//! Token chains: immutable, backward-linked emission units shared between
//! search states. Nodes live in a per-encode arena and are addressed by index.

use az_core::Codeword;

/// One emission unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A fixed-width codeword (character, latch, shift or pair).
    Simple(Codeword),
    /// A binary run over `count` input bytes starting at `start`.
    BinaryShift { start: usize, count: usize },
}

impl Token {
    /// Bits this token emits.
    pub fn bit_len(&self) -> usize {
        match self {
            Token::Simple(cw) => usize::from(cw.width),
            Token::BinaryShift { count, .. } => crate::binary_shift::encoded_len(*count),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenId(usize);

#[derive(Debug, Clone)]
struct Node {
    token: Token,
    prev: Option<TokenId>,
}

/// Append-only token storage. A chain is identified by its last token;
/// `None` is the empty chain.
#[derive(Debug, Default)]
pub struct TokenArena {
    nodes: Vec<Node>,
}

impl TokenArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { nodes: Vec::with_capacity(capacity) }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn push(&mut self, prev: Option<TokenId>, token: Token) -> TokenId {
        if let Some(TokenId(p)) = prev {
            assert!(p < self.nodes.len(), "predecessor {p} not in arena");
        }
        self.nodes.push(Node { token, prev });
        TokenId(self.nodes.len() - 1)
    }

    /// Append a simple codeword; empty codewords leave the chain unchanged.
    pub fn push_codeword(&mut self, prev: Option<TokenId>, cw: Codeword) -> Option<TokenId> {
        if cw.is_empty() {
            return prev;
        }
        Some(self.push(prev, Token::Simple(cw)))
    }

    pub fn get(&self, id: TokenId) -> Token {
        self.nodes[id.0].token
    }

    pub fn prev(&self, id: TokenId) -> Option<TokenId> {
        self.nodes[id.0].prev
    }

    /// Tokens from `head` back to the start of the chain.
    pub fn iter_back(&self, head: Option<TokenId>) -> ChainIter<'_> {
        ChainIter { arena: self, next: head }
    }

    /// The chain ending at `head`, in emission order.
    pub fn chain(&self, head: Option<TokenId>) -> Vec<Token> {
        let mut tokens: Vec<Token> = self.iter_back(head).collect();
        tokens.reverse();
        tokens
    }
}

pub struct ChainIter<'a> {
    arena: &'a TokenArena,
    next: Option<TokenId>,
}

impl Iterator for ChainIter<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let id = self.next?;
        self.next = self.arena.prev(id);
        Some(self.arena.get(id))
    }
}
