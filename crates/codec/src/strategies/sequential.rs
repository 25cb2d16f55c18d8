use crate::symbol::Symbol;
use crate::traits::SymbolMapper;

/// Strategy: single pass over the input, 4 symbols per byte.
pub struct SequentialMapper;

impl SymbolMapper for SequentialMapper {
    fn to_symbols(&self, bytes: &[u8]) -> Vec<Symbol> {
        let mut symbols = Vec::with_capacity(bytes.len() * 4);
        for &byte in bytes {
            // Most significant pair first
            for i in 0..4 {
                symbols.push(Symbol::from_bits(byte >> (2 * (3 - i))));
            }
        }
        symbols
    }

    fn to_bytes(&self, symbols: &[Symbol]) -> Vec<u8> {
        // A trailing group of fewer than 4 symbols (< 8 bits) is dropped.
        symbols
            .chunks_exact(4)
            .map(|group| {
                group
                    .iter()
                    .fold(0u8, |byte, sym| (byte << 2) | sym.bits())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Symbol::{A, C, G, T};

    #[test]
    fn test_to_symbols_single_byte() {
        // 0x48 = 01 00 10 00
        assert_eq!(SequentialMapper.to_symbols(&[0x48]), vec![T, A, G, A]);
        assert_eq!(SequentialMapper.to_symbols(&[0xFF]), vec![C, C, C, C]);
        assert_eq!(SequentialMapper.to_symbols(&[0x1B]), vec![A, T, G, C]);
    }

    #[test]
    fn test_to_symbols_empty() {
        assert!(SequentialMapper.to_symbols(&[]).is_empty());
    }

    #[test]
    fn test_to_bytes_drops_partial_byte() {
        assert_eq!(SequentialMapper.to_bytes(&[T, A, G, A, C, C]), vec![0x48]);
        assert!(SequentialMapper.to_bytes(&[C, C, C]).is_empty());
    }

    #[test]
    fn test_all_bytes_map_back() {
        let input: Vec<u8> = (0..=255).collect();
        let symbols = SequentialMapper.to_symbols(&input);
        assert_eq!(symbols.len(), 256 * 4);
        assert_eq!(SequentialMapper.to_bytes(&symbols), input);
    }
}
