// src/cuckoo/siphash.rs - SipHash-2-4 edge endpoint generation
// Tree location: ./src/cuckoo/siphash.rs

//! SipHash-2-4 edge endpoint generation.
//!
//! Each edge index maps to one node on each side of the bipartite graph:
//! `node = siphash24(2 * edge + side) & edge_mask`, with `side` 0 selecting
//! the U partition and 1 the V partition. The hash is SipHash-2-4
//! specialized to a single 8-byte input block, its state seeded directly
//! from the four derived key words (the usual initialization constants are
//! folded in by the keying layer when legacy mode asks for them).

use super::keys::SipKeys;

/// SipHash state for edge endpoint generation
#[derive(Clone, Debug)]
pub struct SipHasher {
    keys: [u64; 4],
}

impl SipHasher {
    /// Create a hasher from derived key material
    pub fn new(keys: &SipKeys) -> Self {
        Self { keys: keys.0 }
    }

    /// SipHash-2-4 of a single 8-byte block
    pub fn siphash24(&self, input: u64) -> u64 {
        let mut v0 = self.keys[0];
        let mut v1 = self.keys[1];
        let mut v2 = self.keys[2];
        let mut v3 = self.keys[3];

        v3 ^= input;

        // 2 compression rounds
        for _ in 0..2 {
            sipround(&mut v0, &mut v1, &mut v2, &mut v3);
        }

        v0 ^= input;
        v2 ^= 0xff;

        // 4 finalization rounds
        for _ in 0..4 {
            sipround(&mut v0, &mut v1, &mut v2, &mut v3);
        }

        v0 ^ v1 ^ v2 ^ v3
    }

    /// Node identifier for `edge` on `side` (0 = U, 1 = V)
    pub fn node(&self, edge: u64, side: u64, edge_mask: u64) -> u64 {
        self.siphash24(2 * edge + side) & edge_mask
    }

    /// Like [`SipHasher::node`] with the partition bit folded into the low
    /// bit, so endpoints from both sides compare and sort uniformly. Same
    /// tagged value implies same side and same node.
    pub fn node_tagged(&self, edge: u64, side: u64, edge_mask: u64) -> u64 {
        (self.node(edge, side, edge_mask) << 1) | side
    }
}

/// Single round of SipHash
#[inline]
fn sipround(v0: &mut u64, v1: &mut u64, v2: &mut u64, v3: &mut u64) {
    *v0 = v0.wrapping_add(*v1);
    *v1 = v1.rotate_left(13);
    *v1 ^= *v0;
    *v0 = v0.rotate_left(32);

    *v2 = v2.wrapping_add(*v3);
    *v3 = v3.rotate_left(16);
    *v3 ^= *v2;

    *v0 = v0.wrapping_add(*v3);
    *v3 = v3.rotate_left(21);
    *v3 ^= *v0;

    *v2 = v2.wrapping_add(*v1);
    *v1 = v1.rotate_left(17);
    *v1 ^= *v2;
    *v2 = v2.rotate_left(32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cuckoo::keys::KeyMode;

    fn test_hasher() -> SipHasher {
        SipHasher::new(&SipKeys::from_header(b"siphash tests", KeyMode::Standard))
    }

    #[test]
    fn test_siphash_determinism() {
        let hasher = test_hasher();
        assert_eq!(hasher.siphash24(42), hasher.siphash24(42));
        assert_ne!(hasher.siphash24(42), hasher.siphash24(43));
    }

    #[test]
    fn test_node_within_mask() {
        let hasher = test_hasher();
        let mask = (1u64 << 19) - 1;
        for edge in 0..1000 {
            assert!(hasher.node(edge, 0, mask) <= mask);
            assert!(hasher.node(edge, 1, mask) <= mask);
        }
    }

    #[test]
    fn test_sides_are_independent() {
        let hasher = test_hasher();
        let mask = (1u64 << 19) - 1;
        // siphash24 sees 2*edge for U and 2*edge+1 for V
        assert_ne!(hasher.siphash24(2 * 7), hasher.siphash24(2 * 7 + 1));
        assert_ne!(
            hasher.node_tagged(7, 0, mask),
            hasher.node_tagged(7, 1, mask)
        );
    }

    #[test]
    fn test_partition_bit_tagging() {
        let hasher = test_hasher();
        let mask = (1u64 << 19) - 1;
        for edge in 0..100 {
            let u = hasher.node_tagged(edge, 0, mask);
            let v = hasher.node_tagged(edge, 1, mask);
            assert_eq!(u & 1, 0);
            assert_eq!(v & 1, 1);
            assert_eq!(u >> 1, hasher.node(edge, 0, mask));
            assert_eq!(v >> 1, hasher.node(edge, 1, mask));
        }
    }

    #[test]
    fn test_widest_edge_no_overflow() {
        // edge_bits 63: the largest edge index doubles to 2^64 - 2, and the
        // tagged node fills all 64 bits, without wrapping
        let hasher = test_hasher();
        let mask = (1u64 << 63) - 1;
        let edge = mask;
        let u = hasher.node_tagged(edge, 0, mask);
        let v = hasher.node_tagged(edge, 1, mask);
        assert_eq!(u & 1, 0);
        assert_eq!(v & 1, 1);
        assert_eq!(u >> 1, hasher.node(edge, 0, mask));
    }

    #[test]
    fn test_keys_change_nodes() {
        let h1 = SipHasher::new(&SipKeys::from_header(b"key a", KeyMode::Standard));
        let h2 = SipHasher::new(&SipKeys::from_header(b"key b", KeyMode::Standard));
        assert_ne!(h1.siphash24(9000), h2.siphash24(9000));
    }
}
