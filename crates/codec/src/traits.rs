use crate::symbol::Symbol;

/// Core trait for byte/symbol mapping strategies.
///
/// A strategy only handles the fixed 2-bit table; redundancy and the
/// checksum suffix are layered on top by [`crate::Codec`]. Any strategy must:
/// 1.  `to_symbols`: turn every byte into four symbols, most significant bits first.
/// 2.  `to_bytes`: turn symbols back into bytes, dropping a trailing partial byte.
pub trait SymbolMapper {
    fn to_symbols(&self, bytes: &[u8]) -> Vec<Symbol>;
    fn to_bytes(&self, symbols: &[Symbol]) -> Vec<u8>;
}
