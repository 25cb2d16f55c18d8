//! Symbol duplication and its heuristic inverse.
//!
//! [`expand`] doubles the symbol at every index that is a multiple of the
//! level's stride. [`collapse`] undoes it by folding every adjacent pair of
//! equal characters into one.
//!
//! # Known defect
//!
//! `collapse` is not a true inverse of `expand`. It cannot tell an inserted
//! duplicate from two equal symbols that were adjacent in the plain stream,
//! so any naturally doubled symbol is folded too and the recovered bytes are
//! silently wrong. This applies at every level, including the levels that
//! never insert anything. The behavior is kept as is for compatibility with
//! sequences already written; see the tests below for concrete failures.

use crate::level::RedundancyLevel;
use crate::symbol::Symbol;

/// Apply the redundancy step for `level` to a plain symbol stream.
pub fn expand(symbols: &[Symbol], level: RedundancyLevel) -> Vec<Symbol> {
    let Some(stride) = level.stride() else {
        return symbols.to_vec();
    };

    let mut out = Vec::with_capacity(symbols.len() + level.inserted_for(symbols.len()));
    for (i, &sym) in symbols.iter().enumerate() {
        out.push(sym);
        if i % stride == 0 {
            out.push(sym);
        }
    }
    out
}

/// Fold adjacent equal characters pairwise, left to right.
///
/// `"AAA"` becomes `"AA"`: the first pair folds and the third character
/// stands alone.
pub fn collapse(data: &str) -> Vec<char> {
    let chars: Vec<char> = data.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;
    while i < chars.len() {
        out.push(chars[i]);
        if i + 1 < chars.len() && chars[i] == chars[i + 1] {
            i += 2;
        } else {
            i += 1;
        }
    }
    out
}
