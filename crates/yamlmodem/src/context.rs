//! Nesting tracker for open collections.
//!
//! The stack records every open sequence and mapping; for mappings, whether
//! the next token is a key or a value lives in the entry's tag so that push
//! and pop keep the alternation invariant co-located with the entry it
//! protects. The stack is empty only at the top level.

use alloc::vec::Vec;

/// Whether the next token inside an open mapping is a key or a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Expectation {
    Key,
    Value,
}

/// One open collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Context {
    Sequence,
    Mapping { expecting: Expectation },
}

#[derive(Debug, Default)]
pub(crate) struct ContextStack {
    stack: Vec<Context>,
}

impl ContextStack {
    pub(crate) fn new() -> Self {
        Self {
            stack: Vec::with_capacity(16),
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub(crate) fn depth(&self) -> usize {
        self.stack.len()
    }

    pub(crate) fn last(&self) -> Option<Context> {
        self.stack.last().copied()
    }

    pub(crate) fn push_sequence(&mut self) {
        self.stack.push(Context::Sequence);
    }

    /// A freshly opened mapping expects a key first.
    pub(crate) fn push_mapping(&mut self) {
        self.stack.push(Context::Mapping {
            expecting: Expectation::Key,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<Context> {
        self.stack.pop()
    }

    /// Flips the top mapping to value expectation after its key was consumed.
    pub(crate) fn expect_value(&mut self) {
        if let Some(Context::Mapping { expecting }) = self.stack.last_mut() {
            *expecting = Expectation::Value;
        }
    }

    /// Flips the top mapping back to key expectation after a complete value
    /// (scalar or closed collection). No-op under a sequence.
    pub(crate) fn value_consumed(&mut self) {
        if let Some(Context::Mapping { expecting }) = self.stack.last_mut() {
            *expecting = Expectation::Key;
        }
    }
}
