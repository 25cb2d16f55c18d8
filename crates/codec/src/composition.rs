//! Symbol composition of a sequence.

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// Symbol counts for a sequence, in 2-bit order (A, T, G, C).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Composition {
    counts: [usize; 4],
    other: usize,
}

impl Composition {
    /// Count the symbols of `sequence`. Lowercase letters count as their
    /// uppercase symbol; everything else lands in [`Composition::other`].
    pub fn of(sequence: &str) -> Self {
        let mut comp = Self::default();
        for c in sequence.chars() {
            match Symbol::try_from(c) {
                Ok(sym) => comp.counts[sym.bits() as usize] += 1,
                Err(_) => comp.other += 1,
            }
        }
        comp
    }

    pub fn count(&self, symbol: Symbol) -> usize {
        self.counts[symbol.bits() as usize]
    }

    /// Characters outside the alphabet.
    pub fn other(&self) -> usize {
        self.other
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum::<usize>() + self.other
    }

    /// Proportion (0.0 to 1.0) of `symbol` over the whole sequence.
    pub fn fraction(&self, symbol: Symbol) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.count(symbol) as f64 / total as f64
    }

    /// GC content as proportion (0.0 to 1.0).
    pub fn gc_content(&self) -> f64 {
        self.fraction(Symbol::G) + self.fraction(Symbol::C)
    }
}
