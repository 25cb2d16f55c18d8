use crate::strategies::SequentialMapper;
use crate::symbol::Symbol;
use crate::traits::SymbolMapper;
use rayon::prelude::*;

/// Strategy: chunked mapping across the rayon pool.
///
/// Output is identical to [`SequentialMapper`]. Every byte maps to exactly
/// four symbols, so chunk boundaries in the byte stream line up with chunk
/// boundaries in the symbol stream and the pieces can be concatenated
/// without any fix-up.
///
/// Slower than the sequential pass for small inputs, so anything below
/// [`PARALLEL_THRESHOLD`] bytes is handed straight to [`SequentialMapper`].
pub struct ParallelMapper;

/// Size of input chunks (bytes) mapped per task.
pub const CHUNK_SIZE: usize = 256 * 1024;

/// Inputs shorter than this (bytes) skip the thread pool.
pub const PARALLEL_THRESHOLD: usize = 2 * CHUNK_SIZE;

impl SymbolMapper for ParallelMapper {
    fn to_symbols(&self, bytes: &[u8]) -> Vec<Symbol> {
        if bytes.len() < PARALLEL_THRESHOLD {
            return SequentialMapper.to_symbols(bytes);
        }

        let portions: Vec<Vec<Symbol>> = bytes
            .par_chunks(CHUNK_SIZE)
            .map(|chunk| SequentialMapper.to_symbols(chunk))
            .collect();

        let mut result = Vec::with_capacity(bytes.len() * 4);
        for portion in portions {
            result.extend_from_slice(&portion);
        }
        result
    }

    fn to_bytes(&self, symbols: &[Symbol]) -> Vec<u8> {
        if symbols.len() < PARALLEL_THRESHOLD * 4 {
            return SequentialMapper.to_bytes(symbols);
        }

        // Chunks are a multiple of 4 symbols, so only the final chunk can
        // carry a partial byte, and SequentialMapper drops it there.
        let portions: Vec<Vec<u8>> = symbols
            .par_chunks(CHUNK_SIZE * 4)
            .map(|chunk| SequentialMapper.to_bytes(chunk))
            .collect();

        let mut result = Vec::with_capacity(symbols.len() / 4);
        for portion in portions {
            result.extend_from_slice(&portion);
        }
        result
    }
}
