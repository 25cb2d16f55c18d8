use core::fmt;
use core::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::checksum::{ChecksumRule, CHECKSUM_LEN};
use crate::error::CodecError;
use crate::level::RedundancyLevel;
use crate::redundancy;
use crate::sniff::{self, FileKind};
use crate::symbol::Symbol;
use crate::MappingStrategy;

/// Encoder output: symbols followed by the 4-character checksum suffix.
///
/// Always at least [`CHECKSUM_LEN`] characters, all from the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SymbolSequence(String);

impl SymbolSequence {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Everything before the checksum suffix.
    pub fn data(&self) -> &str {
        &self.0[..self.0.len() - CHECKSUM_LEN]
    }

    /// The checksum suffix.
    pub fn checksum(&self) -> &str {
        &self.0[self.0.len() - CHECKSUM_LEN..]
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for SymbolSequence {
    type Error = CodecError;

    /// Accepts data shaped like encoder output: only uppercase `A T G C`,
    /// and room for the checksum suffix. The suffix itself is not checked.
    fn try_from(text: String) -> Result<Self, Self::Error> {
        if let Some(bad) = text.chars().find(|c| !matches!(c, 'A' | 'T' | 'G' | 'C')) {
            return Err(CodecError::InvalidSequence(format!(
                "unexpected character {bad:?}"
            )));
        }
        if text.len() < CHECKSUM_LEN {
            return Err(CodecError::InvalidSequence(format!(
                "{} characters, at least {CHECKSUM_LEN} are required",
                text.len()
            )));
        }
        Ok(Self(text))
    }
}

impl fmt::Display for SymbolSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for SymbolSequence {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for SymbolSequence {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SymbolSequence {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl AsRef<str> for SymbolSequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SymbolSequence> for String {
    fn from(seq: SymbolSequence) -> Self {
        seq.0
    }
}

/// Decoder output with the bits the file type sniffer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub bytes: Vec<u8>,
    /// First recovered binary digits, see [`sniff::header_bits`].
    pub header: String,
}

impl Decoded {
    pub fn kind(&self) -> FileKind {
        sniff::sniff(&self.header)
    }
}

/// Split `sequence` into data and checksum suffix, counting characters.
pub fn split_checksum(sequence: &str) -> Option<(&str, &str)> {
    let n = sequence.chars().count();
    if n < CHECKSUM_LEN {
        return None;
    }
    let at = sequence
        .char_indices()
        .nth(n - CHECKSUM_LEN)
        .map_or(sequence.len(), |(i, _)| i);
    Some(sequence.split_at(at))
}

/// Encoder/decoder pair sharing one mapping strategy and one checksum rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Codec {
    pub strategy: MappingStrategy,
    pub checksum: ChecksumRule,
}

impl Codec {
    pub const fn new(strategy: MappingStrategy, checksum: ChecksumRule) -> Self {
        Self { strategy, checksum }
    }

    /// Encode `bytes` at `level`. Accepts any input, including an empty one,
    /// which yields the checksum suffix alone.
    pub fn encode(&self, bytes: &[u8], level: RedundancyLevel) -> SymbolSequence {
        let plain = self.strategy.to_symbols(bytes);
        let expanded = redundancy::expand(&plain, level);

        let mut text = String::with_capacity(expanded.len() + CHECKSUM_LEN);
        text.extend(expanded.iter().map(|s| s.to_char()));
        let suffix = self.checksum.suffix(&text);
        text.push_str(&suffix);

        SymbolSequence(text)
    }

    /// Decode `sequence` back into bytes.
    pub fn decode(&self, sequence: &str) -> Result<Vec<u8>, CodecError> {
        Ok(self.decode_detailed(sequence)?.bytes)
    }

    /// Decode `sequence`, also returning the header bits of the recovered data.
    ///
    /// Characters outside the alphabet decode as `A`. Adjacent equal
    /// characters are folded pairwise before mapping, which corrupts data
    /// that naturally contained doubled symbols (see [`redundancy`]).
    pub fn decode_detailed(&self, sequence: &str) -> Result<Decoded, CodecError> {
        let (data, suffix) = split_checksum(sequence).ok_or_else(|| {
            CodecError::ChecksumMismatch(format!(
                "sequence has {} characters, at least {CHECKSUM_LEN} are required",
                sequence.chars().count()
            ))
        })?;

        let expected = self.checksum.suffix(data);
        if expected != suffix {
            return Err(CodecError::ChecksumMismatch(format!(
                "expected suffix {expected}, found {suffix}"
            )));
        }

        let symbols: Vec<Symbol> = redundancy::collapse(data)
            .into_iter()
            .map(Symbol::from_char_lossy)
            .collect();

        Ok(Decoded {
            header: sniff::header_bits(&symbols),
            bytes: self.strategy.to_bytes(&symbols),
        })
    }

    /// Whether `sequence` carries a valid checksum suffix.
    pub fn verify(&self, sequence: &str) -> bool {
        split_checksum(sequence)
            .map(|(data, suffix)| self.checksum.verify(data, suffix))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn level(l: u8) -> RedundancyLevel {
        RedundancyLevel::new(l).unwrap()
    }

    #[test]
    fn test_encode_single_byte_scenario() {
        let codec = Codec::default();
        let seq = codec.encode(&[0x48], level(1));
        assert_eq!(seq.as_str(), "TAGAAAAA");
        assert_eq!(seq.data(), "TAGA");
        assert_eq!(seq.checksum(), "AAAA");
        assert_eq!(codec.decode("TAGAAAAA").unwrap(), vec![0x48]);
    }

    #[test]
    fn test_encode_empty() {
        let codec = Codec::default();
        for l in 1..=10 {
            let seq = codec.encode(&[], level(l));
            assert_eq!(seq.len(), CHECKSUM_LEN);
            assert_eq!(seq.as_str(), "AAAA");
            assert!(codec.decode(seq.as_str()).unwrap().is_empty());
        }
    }

    #[test]
    fn test_encoded_length_and_suffix() {
        let mut rng = rand::thread_rng();
        for rule in [ChecksumRule::Length, ChecksumRule::CharCodeSum] {
            let codec = Codec::new(MappingStrategy::Sequential, rule);
            for l in 1..=10 {
                let len = rng.gen_range(0..300);
                let input: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
                let seq = codec.encode(&input, level(l));

                let plain_len = input.len() * 4;
                let expected = plain_len + level(l).inserted_for(plain_len) + CHECKSUM_LEN;
                assert_eq!(seq.len(), expected, "level {l}, {len} bytes");

                let suffix: Vec<char> = seq.checksum().chars().collect();
                assert!(suffix.iter().all(|&c| c == suffix[0]));
                assert!(codec.verify(seq.as_str()));
            }
        }
    }

    #[test]
    fn test_round_trip_plain_levels() {
        // "TAGA TAGC GTGT": no two equal adjacent symbols
        let input = vec![0x48, 0x4B, 0x99];
        let codec = Codec::default();
        for l in 1..=3 {
            let seq = codec.encode(&input, level(l));
            assert_eq!(codec.decode(seq.as_str()).unwrap(), input);
        }
    }

    #[test]
    fn test_round_trip_with_redundancy_when_no_natural_doubles() {
        // "TAGA TAGC GTGT GTGT"
        let input = vec![0x48, 0x4B, 0x99, 0x99];
        let codec = Codec::default();
        for l in 4..=10 {
            let seq = codec.encode(&input, level(l));
            assert_eq!(codec.decode(seq.as_str()).unwrap(), input, "level {l}");
        }
    }

    #[test]
    fn test_known_defect_plain_level_natural_doubles() {
        // 0x00 is "AAAA"; the decoder folds that to "AA" and loses the byte,
        // even though level 1 inserted nothing.
        let codec = Codec::default();
        let seq = codec.encode(&[0x00], level(1));
        assert_eq!(seq.as_str(), "AAAAAAAA");
        assert_ne!(codec.decode(seq.as_str()).unwrap(), vec![0x00]);
    }

    #[test]
    fn test_known_defect_redundancy_collides() {
        // 0x05 = 00 00 01 01 -> "AATT". Level 4 doubles index 0 -> "AAATT",
        // which folds to "AAT": six bits, no full byte.
        let codec = Codec::default();
        let seq = codec.encode(&[0x05], level(4));
        assert_eq!(seq.data(), "AAATT");
        let decoded = codec.decode(seq.as_str()).unwrap();
        assert_ne!(decoded, vec![0x05]);
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_decode_too_short() {
        let codec = Codec::default();
        for input in ["", "A", "AAA"] {
            assert!(matches!(
                codec.decode(input),
                Err(CodecError::ChecksumMismatch(_))
            ));
        }
    }

    #[test]
    fn test_decode_bad_suffix() {
        let codec = Codec::default();
        assert!(matches!(
            codec.decode("TAGATTTT"),
            Err(CodecError::ChecksumMismatch(_))
        ));
        assert!(matches!(
            codec.decode("TAGAAAAT"),
            Err(CodecError::ChecksumMismatch(_))
        ));
    }

    #[test]
    fn test_checksum_rules_disagree() {
        let sum = Codec::new(MappingStrategy::Sequential, ChecksumRule::CharCodeSum);
        let seq = sum.encode(&[0x48], level(1));
        assert_eq!(seq.as_str(), "TAGATTTT");
        assert_eq!(sum.decode(seq.as_str()).unwrap(), vec![0x48]);
        assert!(Codec::default().decode(seq.as_str()).is_err());
    }

    #[test]
    fn test_unrecognized_symbols_decode_as_a() {
        // "TNGA": N becomes A, so this is "TAGA" = 0x48.
        let codec = Codec::default();
        assert_eq!(codec.decode("TNGAAAAA").unwrap(), vec![0x48]);
    }

    #[test]
    fn test_non_ascii_input_is_split_by_characters() {
        let codec = Codec::default();
        // 4 data characters, one of them multi-byte.
        assert_eq!(codec.decode("TéGAAAAA").unwrap(), vec![0x48]);
        assert!(codec.decode("AAé").is_err());
    }

    #[test]
    fn test_decode_detailed_header() {
        // Triples fold to doubles, so "GGGATAGAAA" recovers as "GGATAGAA",
        // i.e. 0xA1 0x20, which carries the text pattern.
        let codec = Codec::default();
        let decoded = codec.decode_detailed("GGGATAGAAAGGGG").unwrap();
        assert_eq!(decoded.header, "1010000100100000");
        assert_eq!(decoded.bytes, vec![0xA1, 0x20]);
        assert_eq!(decoded.kind(), FileKind::Text);
    }

    #[test]
    fn test_sequence_from_string_is_validated() {
        let seq = SymbolSequence::try_from("TAGAAAAA".to_string()).unwrap();
        assert_eq!(seq.data(), "TAGA");
        assert!(matches!(
            SymbolSequence::try_from("TA".to_string()),
            Err(CodecError::InvalidSequence(_))
        ));
        assert!(SymbolSequence::try_from("TéGAAAAA".to_string()).is_err());
        assert!(SymbolSequence::try_from("tagaaaaa".to_string()).is_err());
    }

    #[test]
    fn test_sequence_serde() {
        let seq = Codec::default().encode(&[0x48], level(1));
        let json = serde_json::to_string(&seq).unwrap();
        assert_eq!(json, "\"TAGAAAAA\"");
        assert_eq!(serde_json::from_str::<SymbolSequence>(&json).unwrap(), seq);

        assert!(serde_json::from_str::<SymbolSequence>("\"TA\"").is_err());
        assert!(serde_json::from_str::<SymbolSequence>("\"\"").is_err());
    }

    #[test]
    fn test_strategies_agree() {
        let mut rng = rand::thread_rng();
        let input: Vec<u8> = (0..5000).map(|_| rng.gen()).collect();
        let seq = Codec::new(MappingStrategy::Sequential, ChecksumRule::Length)
            .encode(&input, level(6));
        let par = Codec::new(MappingStrategy::Parallel, ChecksumRule::Length)
            .encode(&input, level(6));
        assert_eq!(seq, par);
    }
}
