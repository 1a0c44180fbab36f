// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Index arithmetic for stepping through `history.jsonl`.

/// Position of the viewer within a history of `len` entries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    idx: usize,
    len: usize,
}

impl Cursor {
    /// Cursor on the newest entry; `None` when history is empty
    pub fn latest(len: usize) -> Option<Self> {
        Some(Self {
            idx: len.checked_sub(1)?,
            len,
        })
    }

    /// Cursor on entry `idx`; `None` when out of range
    pub fn at(idx: usize, len: usize) -> Option<Self> {
        (idx < len).then_some(Self { idx, len })
    }

    pub fn index(&self) -> usize {
        self.idx
    }

    pub fn prev(&self) -> Option<usize> {
        self.idx.checked_sub(1)
    }

    pub fn next(&self) -> Option<usize> {
        (self.idx + 1 < self.len).then_some(self.idx + 1)
    }

    pub fn is_latest(&self) -> bool {
        self.idx + 1 == self.len
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
