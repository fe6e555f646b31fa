// src/cuckoo/keys.rs - Header-to-key derivation
// Tree location: ./src/cuckoo/keys.rs

//! Header-to-key derivation.
//!
//! An arbitrary-length header is hashed with BLAKE2b-256 into 256 bits of
//! key material, read as four little-endian 64-bit words. Those words seed
//! the SipHash state that generates edge endpoints. A legacy keying mode
//! rederives the four words from the first two hash words for compatibility
//! with the standard two-word keyed-SipHash convention.

use blake2::digest::{Update, VariableOutput};
use blake2::Blake2bVar;
use serde::{Deserialize, Serialize};

/// SipHash initialization constants. In legacy mode they are folded into
/// the key words here instead of being applied inside the hash rounds.
const SIP_C0: u64 = 0x736f6d6570736575;
const SIP_C1: u64 = 0x646f72616e646f6d;
const SIP_C2: u64 = 0x6c7967656e657261;
const SIP_C3: u64 = 0x7465646279746573;

/// Keying convention turning the header hash into SipHash key words.
///
/// The two modes are never mixed; a verifier is built for exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyMode {
    /// Four key words taken directly from the BLAKE2b-256 output.
    Standard,
    /// Four key words expanded from the first two hash words by XOR with
    /// the SipHash initialization constants, matching implementations that
    /// key standard SipHash-2-4 with a 128-bit key.
    Legacy,
}

/// 256-bit key material parameterizing edge endpoint generation.
///
/// Derived once per header and reused across all edge evaluations; carries
/// no mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SipKeys(
    /// The four 64-bit SipHash key words
    pub [u64; 4],
);

impl SipKeys {
    /// Derive key material from header bytes under the given keying mode.
    pub fn from_header(header: &[u8], mode: KeyMode) -> Self {
        let mut hasher = Blake2bVar::new(32).unwrap(); // 32 bytes = 256 bits
        hasher.update(header);
        let mut hash = [0u8; 32];
        hasher.finalize_variable(&mut hash).unwrap();

        let mut words = [0u64; 4];
        for (i, word) in words.iter_mut().enumerate() {
            *word = u64::from_le_bytes(hash[8 * i..8 * i + 8].try_into().unwrap());
        }

        let keys = match mode {
            KeyMode::Standard => words,
            KeyMode::Legacy => [
                words[0] ^ SIP_C0,
                words[1] ^ SIP_C1,
                words[0] ^ SIP_C2,
                words[1] ^ SIP_C3,
            ],
        };
        tracing::debug!("derived siphash keys for {}-byte header", header.len());
        Self(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_determinism() {
        let header = b"an arbitrary length header";
        let k1 = SipKeys::from_header(header, KeyMode::Standard);
        let k2 = SipKeys::from_header(header, KeyMode::Standard);
        assert_eq!(k1, k2);
    }

    #[test]
    fn test_distinct_headers_distinct_keys() {
        let k1 = SipKeys::from_header(b"header one", KeyMode::Standard);
        let k2 = SipKeys::from_header(b"header two", KeyMode::Standard);
        assert_ne!(k1, k2);

        // a single flipped bit is enough
        let mut header = b"header one".to_vec();
        header[0] ^= 1;
        let k3 = SipKeys::from_header(&header, KeyMode::Standard);
        assert_ne!(k1, k3);
    }

    #[test]
    fn test_empty_header_accepted() {
        let k1 = SipKeys::from_header(&[], KeyMode::Standard);
        let k2 = SipKeys::from_header(&[], KeyMode::Standard);
        assert_eq!(k1, k2);
    }

    #[test]
    fn test_binary_headers() {
        // headers are raw bytes, not text; interior zeros must matter
        let h1 = hex::decode("00ff00ff00ff00ff").unwrap();
        let h2 = hex::decode("00ff00ff00ff00fe").unwrap();
        assert_ne!(
            SipKeys::from_header(&h1, KeyMode::Standard),
            SipKeys::from_header(&h2, KeyMode::Standard)
        );
    }

    #[test]
    fn test_legacy_expansion() {
        let header = b"legacy keying header";
        let standard = SipKeys::from_header(header, KeyMode::Standard);
        let legacy = SipKeys::from_header(header, KeyMode::Legacy);

        assert_ne!(standard, legacy);

        // Legacy words derive from the first two standard words only
        assert_eq!(legacy.0[0], standard.0[0] ^ SIP_C0);
        assert_eq!(legacy.0[1], standard.0[1] ^ SIP_C1);
        assert_eq!(legacy.0[2], standard.0[0] ^ SIP_C2);
        assert_eq!(legacy.0[3], standard.0[1] ^ SIP_C3);
    }
}
