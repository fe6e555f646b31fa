// src/cuckoo/mod.rs - Cuckoo Cycle graph parameters and shared types
// Tree location: ./src/cuckoo/mod.rs

//! Cuckoo Cycle verification primitives.
//!
//! A Cuckoo graph is a bipartite graph over `2 * num_edges` nodes in which
//! each edge index maps to one node on either side through a keyed
//! SipHash-2-4. This module holds the graph parameters shared by key
//! derivation and cycle verification, and selects the integer width used
//! for edge indices and node identifiers.

pub mod keys;
pub mod siphash;
pub mod verify;

use std::fmt;
use std::marker::PhantomData;

use thiserror::Error;

use self::keys::KeyMode;

/// Default log2 of the per-side node space.
pub const DEFAULT_EDGE_BITS: u32 = 30;
/// Default required cycle length.
pub const DEFAULT_PROOF_SIZE: usize = 42;
/// Smallest cycle length accepted by parameter validation.
pub const MIN_PROOF_SIZE: usize = 12;

/// Unsigned integer type storing edge indices and node identifiers.
///
/// `u32` covers `edge_bits <= 31`; larger graphs need `u64`, since a node
/// identifier carries a partition bit on top of its `edge_bits` value bits.
pub trait EdgeType: Copy + Eq + Ord + fmt::Debug + fmt::Display {
    /// Storage width in bits.
    const BITS: u32;

    /// Widen to u64.
    fn to_u64(self) -> u64;

    /// Narrow from u64. The value must already be masked into range.
    fn from_u64(v: u64) -> Self;
}

impl EdgeType for u32 {
    const BITS: u32 = 32;

    fn to_u64(self) -> u64 {
        self as u64
    }

    fn from_u64(v: u64) -> Self {
        v as u32
    }
}

impl EdgeType for u64 {
    const BITS: u32 = 64;

    fn to_u64(self) -> u64 {
        self
    }

    fn from_u64(v: u64) -> Self {
        v
    }
}

/// Errors raised by graph parameter validation
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamsError {
    /// An `edge_bits` of zero describes an empty graph
    #[error("edge_bits must be at least 1")]
    EdgeBitsZero,

    /// Node identifiers need `edge_bits + 1` bits of storage
    #[error("edge_bits {0} does not fit a {1}-bit edge type")]
    EdgeBitsTooLarge(u32, u32),

    /// Cycles in a bipartite graph have even length
    #[error("proof_size {0} must be even")]
    OddProofSize(usize),

    /// Cycle length below the supported minimum
    #[error("proof_size {0} below the supported minimum")]
    ProofSizeTooSmall(usize),

    /// A cycle cannot use more edges than the graph has
    #[error("proof_size {0} exceeds graph edge count {1}")]
    ProofSizeTooLarge(usize, u64),
}

/// Validated graph parameters for one Cuckoo Cycle instance.
///
/// Immutable after construction; verification of independent proofs against
/// the same parameters is safe to run concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuckooParams<T: EdgeType> {
    edge_bits: u32,
    proof_size: usize,
    num_edges: u64,
    edge_mask: u64,
    key_mode: KeyMode,
    _marker: PhantomData<T>,
}

impl<T: EdgeType> CuckooParams<T> {
    /// Validate and derive parameters, failing fast on an unusable
    /// combination.
    pub fn new(edge_bits: u32, proof_size: usize, key_mode: KeyMode) -> Result<Self, ParamsError> {
        if edge_bits == 0 {
            return Err(ParamsError::EdgeBitsZero);
        }
        // Node identifiers carry a partition bit on top of edge_bits value
        // bits; this bound also keeps 2*edge+side and the tagged node
        // inside u64 at every permitted width.
        if edge_bits >= T::BITS {
            return Err(ParamsError::EdgeBitsTooLarge(edge_bits, T::BITS));
        }
        if proof_size % 2 != 0 {
            return Err(ParamsError::OddProofSize(proof_size));
        }
        if proof_size < MIN_PROOF_SIZE {
            return Err(ParamsError::ProofSizeTooSmall(proof_size));
        }
        let num_edges = 1u64 << edge_bits;
        if proof_size as u64 > num_edges {
            return Err(ParamsError::ProofSizeTooLarge(proof_size, num_edges));
        }
        Ok(Self {
            edge_bits,
            proof_size,
            num_edges,
            edge_mask: num_edges - 1,
            key_mode,
            _marker: PhantomData,
        })
    }

    /// log2 of the per-side node space.
    pub fn edge_bits(&self) -> u32 {
        self.edge_bits
    }

    /// Required cycle length.
    pub fn proof_size(&self) -> usize {
        self.proof_size
    }

    /// Number of edge indices, `2^edge_bits`.
    pub fn num_edges(&self) -> u64 {
        self.num_edges
    }

    /// Mask selecting a node identifier from a hash output.
    pub fn edge_mask(&self) -> u64 {
        self.edge_mask
    }

    /// Keying convention used for header-to-key derivation.
    pub fn key_mode(&self) -> KeyMode {
        self.key_mode
    }
}
